//! ui-examples CLI - generate documentation stories from UI example files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod watcher;

#[derive(Parser)]
#[command(name = "ui-examples")]
#[command(about = "Generate documentation stories from *.ui_examples.yml files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to ui-examples.toml config file
    #[arg(short, long, default_value = "ui-examples.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a config file and a sample example
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the story module generated for a description file
    Render {
        /// Description file (*.ui_examples.yml)
        file: PathBuf,
    },

    /// Print the index records for a description file as JSON
    Index {
        /// Description file (*.ui_examples.yml)
        file: PathBuf,
    },

    /// Generate story modules and an index for a directory
    Build {
        /// Directory holding description files (defaults to config)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Output directory (defaults to config or "stories")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate description files and their component references
    Check {
        /// Directory holding description files (defaults to config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Rebuild whenever a description file changes
    Watch {
        /// Directory holding description files (defaults to config)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Output directory (defaults to config or "stories")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so generated modules can be piped from stdout
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Render { file } => {
            let config = config::load_config(&cli.config)?;
            commands::render::run(config, &file).await?;
        }
        Commands::Index { file } => {
            commands::index::run(&file).await?;
        }
        Commands::Build { dir, output } => {
            let config = config::load_config(&cli.config)?;
            commands::build::run(config, dir, output).await?;
        }
        Commands::Check { dir } => {
            let config = config::load_config(&cli.config)?;
            commands::check::run(config, dir).await?;
        }
        Commands::Watch { dir, output } => {
            let config = config::load_config(&cli.config)?;
            commands::watch::run(config, dir, output).await?;
        }
    }

    Ok(())
}
