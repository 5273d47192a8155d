use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::models::ThemeVariant;
use crate::sources::{has_image_extension, ImageSource};

/// Local acquirer over a pair of themed directories (`<base>_light` /
/// `<base>_dark`). The variant is re-evaluated on every acquire so a
/// long-running process switches sets as the day progresses.
pub struct LocalThemedSource {
    base_dir: PathBuf,
}

impl LocalThemedSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// `<base>_<variant>`, appended to the final path component.
    fn effective_dir(&self, variant: ThemeVariant) -> PathBuf {
        let mut dir = self.base_dir.as_os_str().to_os_string();
        dir.push(format!("_{}", variant.suffix()));
        PathBuf::from(dir)
    }

    async fn acquire_variant(&self, variant: ThemeVariant) -> Result<Option<Bytes>> {
        let dir = self.effective_dir(variant);

        let mut candidates = Vec::new();
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            // a missing themed directory means no candidate, not a failure
            Err(_) => {
                debug!(dir = %dir.display(), "themed directory not readable");
                return Ok(None);
            }
        };
        while let Some(entry) = entries.next_entry().await? {
            if has_image_extension(&entry.file_name().to_string_lossy()) {
                candidates.push(entry.path());
            }
        }

        if candidates.is_empty() {
            return Ok(None);
        }

        let path = &candidates[rand::rng().random_range(0..candidates.len())];
        let data = tokio::fs::read(path).await?;
        Ok(Some(Bytes::from(data)))
    }
}

#[async_trait]
impl ImageSource for LocalThemedSource {
    fn name(&self) -> &str {
        "local themed"
    }

    async fn acquire(&self) -> Result<Option<Bytes>> {
        self.acquire_variant(ThemeVariant::now()).await
    }
}
