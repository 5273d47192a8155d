use serde::{Deserialize, Serialize};

/// Active display size in physical pixels. Both axes are always non-zero;
/// detection failure falls back to [`Resolution::default`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 2560,
            height: 1440,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    Fit,
    Fill,
    Stretch,
}

impl ResizeMode {
    pub const ALL: &[ResizeMode] = &[ResizeMode::Fit, ResizeMode::Fill, ResizeMode::Stretch];
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fit => write!(f, "fit"),
            Self::Fill => write!(f, "fill"),
            Self::Stretch => write!(f, "stretch"),
        }
    }
}

impl std::str::FromStr for ResizeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fit" => Ok(Self::Fit),
            "fill" => Ok(Self::Fill),
            "stretch" => Ok(Self::Stretch),
            other => Err(format!("unknown resize mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    RemoteFeed,
    LocalThemed,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RemoteFeed => write!(f, "remote_feed"),
            Self::LocalThemed => write!(f, "local_themed"),
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "remote_feed" | "remote" | "feed" => Ok(Self::RemoteFeed),
            "local_themed" | "local" => Ok(Self::LocalThemed),
            other => Err(format!("unknown source kind: {other}")),
        }
    }
}

/// Light/dark wallpaper set selected by wall-clock hour. Re-evaluated every
/// cycle so a long-running process follows the sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl ThemeVariant {
    /// Light between 06:00 (inclusive) and 18:00 (exclusive).
    pub fn from_hour(hour: u32) -> Self {
        if (6..18).contains(&hour) {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn now() -> Self {
        use chrono::Timelike;
        Self::from_hour(chrono::Local::now().hour())
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Effective directory for a themed local source, e.g.
/// `gruvbox_wallpapers` + light -> `gruvbox_wallpapers_light`.
pub fn themed_dir(base: &str, variant: ThemeVariant) -> String {
    format!("{base}_{}", variant.suffix())
}
