pub mod gnome;
pub mod windows;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// No backend exists for this platform; the output file is still
    /// written, nothing visible happens.
    Unsupported,
}

/// Instructs the host desktop to use a file as its background.
#[async_trait]
pub trait DesktopBackend: Send + Sync {
    async fn apply(&self, path: &Path) -> Result<ApplyOutcome>;
    fn name(&self) -> &str;
}

pub struct NullBackend;

#[async_trait]
impl DesktopBackend for NullBackend {
    async fn apply(&self, _path: &Path) -> Result<ApplyOutcome> {
        Ok(ApplyOutcome::Unsupported)
    }

    fn name(&self) -> &str {
        "unsupported"
    }
}

/// Select the backend for the host OS once at startup.
pub fn create_backend() -> Box<dyn DesktopBackend> {
    match std::env::consts::OS {
        "linux" => Box::new(gnome::GnomeBackend::new()),
        "windows" => Box::new(windows::WindowsBackend::new()),
        _ => Box::new(NullBackend),
    }
}
