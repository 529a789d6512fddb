use clap::Parser;
use episode_transcripts::{Config, ConfigOverrides, Pipeline};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate static transcript pages for every episode of a YouTube channel
#[derive(Parser)]
#[command(name = "episode-transcripts", version)]
#[command(about = "Render YouTube captions into static transcript pages", long_about = None)]
struct Cli {
    /// JSON configuration file (defaults are used for anything it omits)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the pages are written into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Channel whose uploads are published
    #[arg(long)]
    channel_id: Option<String>,
}

impl Cli {
    /// File (or defaults), then environment, then flags
    fn load_config(self) -> episode_transcripts::Result<Config> {
        Config::load(
            self.config.as_deref(),
            ConfigOverrides {
                output_dir: self.output_dir,
                channel_id: self.channel_id,
            },
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().load_config()?;
    let pipeline = Pipeline::connect(config)?;

    let summary = pipeline.run().await?;
    println!("{summary}");

    Ok(())
}
