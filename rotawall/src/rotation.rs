use std::path::Path;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use rotawall_core::backend::{ApplyOutcome, DesktopBackend};
use rotawall_core::config::RotationConfig;
use rotawall_core::display;
use rotawall_core::error::Result;
use rotawall_core::models::Resolution;
use rotawall_core::resize;
use rotawall_core::sources::ImageSource;
use rotawall_core::writer;

/// Parse interval string like "30m", "1h", "90s" into Duration; a bare
/// number is seconds.
pub fn parse_interval(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (num_str, suffix) = if s.ends_with('s') {
        (&s[..s.len() - 1], 's')
    } else if s.ends_with('m') {
        (&s[..s.len() - 1], 'm')
    } else if s.ends_with('h') {
        (&s[..s.len() - 1], 'h')
    } else {
        (s, 's')
    };

    let num: u64 = num_str.parse().ok()?;
    let secs = match suffix {
        's' => num,
        'm' => num * 60,
        'h' => num * 3600,
        _ => return None,
    };

    if secs == 0 {
        return None;
    }
    Some(Duration::from_secs(secs))
}

/// Owns one rotation: acquire, resize, save, apply, sleep, repeat. Any
/// failing cycle is logged and skipped; the next tick always runs.
pub struct Rotator {
    config: RotationConfig,
    source: Box<dyn ImageSource>,
    backend: Box<dyn DesktopBackend>,
}

impl Rotator {
    pub fn new(
        config: RotationConfig,
        source: Box<dyn ImageSource>,
        backend: Box<dyn DesktopBackend>,
    ) -> Self {
        Self {
            config,
            source,
            backend,
        }
    }

    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut timer = interval(Duration::from_secs(self.config.interval_secs));
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // consume the immediate first tick; the first cycle runs right away
        timer.tick().await;

        loop {
            if let Err(e) = self.run_cycle().await {
                warn!("cycle failed: {e}");
            }

            tokio::select! {
                _ = timer.tick() => {}
                _ = shutdown.changed() => {
                    info!("shutdown signal received");
                    return;
                }
            }
        }
    }

    async fn run_cycle(&self) -> Result<()> {
        let target = display::detect_resolution().await;
        self.run_cycle_at(target).await
    }

    async fn run_cycle_at(&self, target: Resolution) -> Result<()> {
        let Some(data) = self.source.acquire().await? else {
            info!(source = self.source.name(), "no candidate this cycle");
            return Ok(());
        };

        let img = resize::decode_image(&data)?;
        let resized = resize::resize_to(&img, target, self.config.mode);
        let path = writer::save_wallpaper(
            &resized,
            Path::new(&self.config.download_dir),
            &self.config.filename,
        )?;

        match self.backend.apply(&path).await? {
            ApplyOutcome::Applied => {
                info!(path = %path.display(), resolution = %target, "wallpaper set");
            }
            ApplyOutcome::Unsupported => {
                warn!(
                    os = std::env::consts::OS,
                    path = %path.display(),
                    "no desktop backend for this platform, file written only"
                );
            }
        }
        Ok(())
    }
}
