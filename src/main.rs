//! `lyricscene` - convert the newest LRC file into an Alight Motion scene.

use std::process::ExitCode;

use lyricscene::config::Config;
use lyricscene::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lyricscene=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<std::path::PathBuf> {
    let config = Config::load()?;
    tracing::info!(
        "{} {}: {} -> {}",
        config.app_name(),
        config.app_version(),
        config.lyrics_root.display(),
        config.output_dir.display()
    );
    lyricscene::app::run(&config).await
}
