use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Result, RotawallError};

use super::{ApplyOutcome, DesktopBackend};

// SPI_SETDESKWALLPAPER, with SPIF_UPDATEINIFILE | SPIF_SENDCHANGE.
const SPI_SETDESKWALLPAPER: u32 = 20;
const SPIF_FLAGS: u32 = 3;

/// Windows backend: `SystemParametersInfoW` reached through a one-shot
/// PowerShell `Add-Type` P/Invoke, keeping the backend a plain subprocess
/// like the others.
pub struct WindowsBackend;

impl WindowsBackend {
    pub fn new() -> Self {
        Self
    }

    fn build_command(path: &Path) -> Command {
        let script = format!(
            "$sig = '[DllImport(\"user32.dll\", CharSet = CharSet.Auto)] \
             public static extern int SystemParametersInfo(int uAction, int uParam, string lpvParam, int fuWinIni);'; \
             Add-Type -MemberDefinition $sig -Name NativeMethods -Namespace Win32; \
             [Win32.NativeMethods]::SystemParametersInfo({SPI_SETDESKWALLPAPER}, 0, '{}', {SPIF_FLAGS})",
            path.display()
        );

        let mut cmd = Command::new("powershell");
        cmd.arg("-NoProfile").arg("-Command").arg(script);
        cmd
    }
}

impl Default for WindowsBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DesktopBackend for WindowsBackend {
    async fn apply(&self, path: &Path) -> Result<ApplyOutcome> {
        let output = Self::build_command(path)
            .output()
            .await
            .map_err(|e| RotawallError::Apply(format!("failed to run powershell: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RotawallError::Apply(format!(
                "SystemParametersInfo call failed: {stderr}"
            )));
        }
        Ok(ApplyOutcome::Applied)
    }

    fn name(&self) -> &str {
        "windows"
    }
}
