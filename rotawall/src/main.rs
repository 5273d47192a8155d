mod rotation;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::sync::watch;
use tracing::info;

use rotawall_core::backend::create_backend;
use rotawall_core::config::RotationConfig;
use rotawall_core::models::SourceKind;
use rotawall_core::sources::feed::{RedditClient, RemoteFeedSource};
use rotawall_core::sources::local::LocalThemedSource;
use rotawall_core::sources::ImageSource;

use rotation::{parse_interval, Rotator};

#[derive(Parser)]
#[command(
    name = "rotawall",
    about = "Rotate the desktop wallpaper from a remote feed or local themed directories"
)]
struct Cli {
    /// Path to a TOML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Image source: remote_feed or local_themed
    #[arg(long)]
    source: Option<String>,
    /// Feed channel to pull from (remote_feed source)
    #[arg(long)]
    channel: Option<String>,
    /// Directory the wallpaper file is written into
    #[arg(long)]
    dir: Option<String>,
    /// Time between wallpaper changes: 90, 90s, 30m, 1h
    #[arg(long)]
    interval: Option<String>,
    /// Base directory for themed wallpapers (local_themed source)
    #[arg(long)]
    base_dir: Option<String>,
    /// Resize mode: fit, fill or stretch
    #[arg(long)]
    mode: Option<String>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<RotationConfig> {
        let mut config = match &self.config {
            Some(path) => RotationConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RotationConfig::default(),
        };

        if let Some(source) = self.source {
            config.source = source.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        }
        if let Some(channel) = self.channel {
            config.channel = channel;
        }
        if let Some(dir) = self.dir {
            config.download_dir = dir;
        }
        if let Some(interval) = self.interval {
            config.interval_secs = parse_interval(&interval)
                .ok_or_else(|| anyhow::anyhow!("invalid interval: {interval}"))?
                .as_secs();
        }
        if let Some(base_dir) = self.base_dir {
            config.local_base_dir = base_dir;
        }
        if let Some(mode) = self.mode {
            config.mode = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rotawall=info".into()),
        )
        .init();

    let config = Cli::parse().into_config()?;
    info!(
        source = %config.source,
        mode = %config.mode,
        interval = config.interval_secs,
        "starting rotawall"
    );

    let source: Box<dyn ImageSource> = match config.source {
        SourceKind::RemoteFeed => Box::new(RemoteFeedSource::new(
            Box::new(RedditClient::new()),
            config.channel.clone(),
        )),
        SourceKind::LocalThemed => Box::new(LocalThemedSource::new(config.local_base_dir.clone())),
    };

    let backend = create_backend();
    info!(backend = backend.name(), "desktop backend selected");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let rotator = Rotator::new(config, source, backend);
    let handle = tokio::spawn(rotator.run(shutdown_rx));

    tokio::signal::ctrl_c().await?;
    info!("received ctrl+c, shutting down");
    let _ = shutdown_tx.send(true);
    let _ = handle.await;

    info!("rotawall stopped");
    Ok(())
}
