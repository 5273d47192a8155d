use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RotawallError};
use crate::models::{ResizeMode, SourceKind};

pub const OUTPUT_FILENAME: &str = "wallpaper.jpg";

/// Immutable rotation settings, built once at startup and read-only for the
/// process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub source: SourceKind,
    /// Remote feed channel, e.g. a subreddit name.
    pub channel: String,
    /// Directory the resized output file is written into.
    pub download_dir: String,
    /// Seconds between cycles.
    pub interval_secs: u64,
    /// Base directory for the local themed source; `_light` / `_dark` is
    /// appended per cycle.
    pub local_base_dir: String,
    pub mode: ResizeMode,
    /// Name of the output file inside `download_dir`; overwritten every
    /// cycle.
    pub filename: String,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::RemoteFeed,
            channel: "wallpaper".into(),
            download_dir: "wallpapers".into(),
            interval_secs: 1800,
            local_base_dir: "gruvbox_wallpapers".into(),
            mode: ResizeMode::Fill,
            filename: OUTPUT_FILENAME.into(),
        }
    }
}

impl RotationConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RotawallError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == 0 {
            return Err(RotawallError::Config("interval must be > 0".into()));
        }
        if self.download_dir.is_empty() {
            return Err(RotawallError::Config("download_dir must not be empty".into()));
        }
        if self.filename.is_empty() {
            return Err(RotawallError::Config("filename must not be empty".into()));
        }
        if self.source == SourceKind::RemoteFeed && self.channel.is_empty() {
            return Err(RotawallError::Config(
                "channel must not be empty for the remote feed source".into(),
            ));
        }
        if self.source == SourceKind::LocalThemed && self.local_base_dir.is_empty() {
            return Err(RotawallError::Config(
                "local_base_dir must not be empty for the local themed source".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RotationConfig::default();
        assert_eq!(config.source, SourceKind::RemoteFeed);
        assert_eq!(config.channel, "wallpaper");
        assert_eq!(config.download_dir, "wallpapers");
        assert_eq!(config.interval_secs, 1800);
        assert_eq!(config.local_base_dir, "gruvbox_wallpapers");
        assert_eq!(config.mode, ResizeMode::Fill);
        assert_eq!(config.filename, "wallpaper.jpg");
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
source = "local_themed"
mode = "fit"
"#;
        let config: RotationConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source, SourceKind::LocalThemed);
        assert_eq!(config.mode, ResizeMode::Fit);
        // defaults still applied
        assert_eq!(config.interval_secs, 1800);
        assert_eq!(config.download_dir, "wallpapers");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
source = "remote_feed"
channel = "earthporn"
download_dir = "/tmp/walls"
interval_secs = 600
local_base_dir = "nord_wallpapers"
mode = "stretch"
filename = "background.jpg"
"#;
        let config: RotationConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.channel, "earthporn");
        assert_eq!(config.download_dir, "/tmp/walls");
        assert_eq!(config.interval_secs, 600);
        assert_eq!(config.local_base_dir, "nord_wallpapers");
        assert_eq!(config.mode, ResizeMode::Stretch);
        assert_eq!(config.filename, "background.jpg");
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_filename_rejected() {
        let config = RotationConfig {
            filename: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let toml_str = r#"mode = "zoom""#;
        assert!(toml::from_str::<RotationConfig>(toml_str).is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = RotationConfig {
            interval_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_channel_rejected_for_remote() {
        let config = RotationConfig {
            channel: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
