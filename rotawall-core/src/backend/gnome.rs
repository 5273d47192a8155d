use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Result, RotawallError};

use super::{ApplyOutcome, DesktopBackend};

const SCHEMAS: &[&str] = &["org.gnome.desktop.background", "org.gnome.desktop.screensaver"];

/// GNOME backend: points both the desktop background and the screensaver at
/// the file via `gsettings`.
pub struct GnomeBackend;

impl GnomeBackend {
    pub fn new() -> Self {
        Self
    }

    fn build_command(schema: &str, path: &Path) -> Command {
        let mut cmd = Command::new("gsettings");
        cmd.arg("set")
            .arg(schema)
            .arg("picture-uri")
            .arg(format!("file://{}", path.display()));
        cmd
    }
}

impl Default for GnomeBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DesktopBackend for GnomeBackend {
    async fn apply(&self, path: &Path) -> Result<ApplyOutcome> {
        for schema in SCHEMAS {
            let output = Self::build_command(schema, path)
                .output()
                .await
                .map_err(|e| RotawallError::Apply(format!("failed to run gsettings: {e}")))?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(RotawallError::Apply(format!(
                    "gsettings set {schema} failed: {stderr}"
                )));
            }
        }
        Ok(ApplyOutcome::Applied)
    }

    fn name(&self) -> &str {
        "gnome"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_gsettings_command_args() {
        let path = PathBuf::from("/data/wallpapers/wallpaper.jpg");
        let cmd = GnomeBackend::build_command("org.gnome.desktop.background", &path);

        let prog = cmd.as_std().get_program().to_string_lossy().to_string();
        let args: Vec<String> = cmd
            .as_std()
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        assert_eq!(prog, "gsettings");
        assert_eq!(
            args,
            vec![
                "set",
                "org.gnome.desktop.background",
                "picture-uri",
                "file:///data/wallpapers/wallpaper.jpg",
            ]
        );
    }

    #[test]
    fn test_both_schemas_targeted() {
        assert_eq!(SCHEMAS.len(), 2);
        assert!(SCHEMAS.contains(&"org.gnome.desktop.background"));
        assert!(SCHEMAS.contains(&"org.gnome.desktop.screensaver"));
    }
}
