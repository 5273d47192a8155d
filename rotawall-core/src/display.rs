use tokio::process::Command;
use tracing::warn;

use crate::models::Resolution;

/// Detect the active display's resolution: `xrandr` on Linux,
/// `GetSystemMetrics` on Windows. Any failure — missing binary, bad exit
/// status, unparseable output, unrecognized platform — falls back to the
/// default resolution rather than failing the cycle.
pub async fn detect_resolution() -> Resolution {
    let detected = match std::env::consts::OS {
        "linux" => query_xrandr().await,
        "windows" => query_system_metrics().await,
        _ => None,
    };

    match detected {
        Some(res) => res,
        None => {
            let fallback = Resolution::default();
            warn!(%fallback, "could not detect screen resolution, using default");
            fallback
        }
    }
}

async fn query_xrandr() -> Option<Resolution> {
    let output = Command::new("xrandr").output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    parse_xrandr(&String::from_utf8_lossy(&output.stdout))
}

// GetSystemMetrics(0) / (1) = SM_CXSCREEN / SM_CYSCREEN, printed as "WxH".
const SYSTEM_METRICS_PS: &str = "$sig = '[DllImport(\"user32.dll\")] \
 public static extern int GetSystemMetrics(int nIndex);'; \
 Add-Type -MemberDefinition $sig -Name NativeMethods -Namespace Win32; \
 \"$([Win32.NativeMethods]::GetSystemMetrics(0))x$([Win32.NativeMethods]::GetSystemMetrics(1))\"";

async fn query_system_metrics() -> Option<Resolution> {
    let output = Command::new("powershell")
        .args(["-NoProfile", "-Command", SYSTEM_METRICS_PS])
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }
    parse_system_metrics(&String::from_utf8_lossy(&output.stdout))
}

/// The current mode is the line marked with `*`; its first token is the
/// resolution, e.g. `   1920x1080     60.00*+  59.94`.
fn parse_xrandr(out: &str) -> Option<Resolution> {
    for line in out.lines() {
        if !line.contains('*') {
            continue;
        }
        let mode = line.split_whitespace().next()?;
        let (w, h) = mode.split_once('x')?;
        return Resolution::new(w.parse().ok()?, h.parse().ok()?);
    }
    None
}

/// A single `WxH` line, e.g. `2560x1440` (trailing CRLF from PowerShell).
fn parse_system_metrics(out: &str) -> Option<Resolution> {
    let (w, h) = out.trim().split_once('x')?;
    Resolution::new(w.trim().parse().ok()?, h.trim().parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_XRANDR: &str = "\
Screen 0: minimum 320 x 200, current 2560 x 1440, maximum 16384 x 16384
DP-1 connected primary 2560x1440+0+0 (normal left inverted right) 600mm x 340mm
   2560x1440     59.95*+ 144.00
   1920x1080     60.00    59.94
   1280x720      60.00
";

    #[test]
    fn test_parse_xrandr_current_mode() {
        let res = parse_xrandr(MOCK_XRANDR).unwrap();
        assert_eq!((res.width, res.height), (2560, 1440));
    }

    #[test]
    fn test_parse_xrandr_no_active_mode() {
        assert!(parse_xrandr("DP-1 disconnected (normal left inverted right)").is_none());
    }

    #[test]
    fn test_parse_xrandr_garbage() {
        assert!(parse_xrandr("*** not xrandr output ***").is_none());
    }

    #[test]
    fn test_parse_system_metrics_output() {
        let res = parse_system_metrics("2560x1440\r\n").unwrap();
        assert_eq!((res.width, res.height), (2560, 1440));
    }

    #[test]
    fn test_parse_system_metrics_rejects_zero_axis() {
        assert!(parse_system_metrics("0x0").is_none());
    }

    #[test]
    fn test_parse_system_metrics_garbage() {
        assert!(parse_system_metrics("At line:1 char:1").is_none());
        assert!(parse_system_metrics("").is_none());
    }

    #[test]
    fn test_system_metrics_script_shape() {
        assert!(SYSTEM_METRICS_PS.contains("GetSystemMetrics(0)"));
        assert!(SYSTEM_METRICS_PS.contains("GetSystemMetrics(1)"));
        assert!(SYSTEM_METRICS_PS.contains("user32.dll"));
    }
}
