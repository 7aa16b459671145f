use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod generate;

#[derive(Debug, Parser)]
#[command(name = "squarefeed")]
#[command(about = "Square catalog to shopping-feed generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the shopping feed from a persisted catalog snapshot.
    Generate {
        /// Path to the snapshot JSON written by the catalog fetch job.
        #[arg(long)]
        snapshot: PathBuf,
        /// Write the feed to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate { snapshot, out } => generate::run(&snapshot, out.as_deref()),
    }
}
