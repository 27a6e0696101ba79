//! lathe CLI - replay recorded strokes without a renderer
//!
//! Feeds recorded pointer samples through the same `Drawing` pipeline an
//! interactive host would drive, then reports or exports the meshes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lathe_drawing::DrawingConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod replay;
mod stl;

#[derive(Parser)]
#[command(name = "lathe")]
#[command(about = "Sketch-and-lathe surface generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recording of strokes and summarize the generated surfaces
    Replay {
        /// JSON recording: {"strokes": [{"points": [[x, y, z], ...], "color": 0}]}
        input: PathBuf,
        /// TOML configuration (defaults are used for missing keys)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write every surface into one binary STL file
        #[arg(long)]
        stl: Option<PathBuf>,
    },
    /// Print the default configuration as TOML
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "lathe_drawing=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { input, config, stl } => {
            let config = match config {
                Some(path) => DrawingConfig::from_toml_file(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => DrawingConfig::default(),
            };
            let recording = replay::Recording::from_file(&input)?;
            let outcome = replay::run(&recording, config)?;
            replay::print_summary(&outcome);

            if let Some(path) = stl {
                let bytes = stl::to_stl_bytes(outcome.sink.meshes().map(|(_, m)| m));
                std::fs::write(&path, bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
        }
        Commands::Config => {
            let text = toml::to_string_pretty(&DrawingConfig::default())
                .context("failed to serialize config")?;
            print!("{text}");
        }
    }

    Ok(())
}
