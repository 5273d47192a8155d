pub mod feed;
pub mod local;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

/// Accepted candidate encodings, matched against the end of a file name or
/// URL, case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Produces raw candidate image bytes for one cycle.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Display name for logging (e.g. "remote feed", "local themed").
    fn name(&self) -> &str;
    /// `Ok(None)` means no candidate was available this cycle; the cycle is
    /// skipped, not failed.
    async fn acquire(&self) -> Result<Option<Bytes>>;
}

pub(crate) fn has_image_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}
