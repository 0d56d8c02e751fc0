//! Folio CLI - minimal static site generator for sectioned sites.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Minimal static site generator for sectioned sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new site
    Init {
        /// Directory to create the site in
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build all sections (or only the given ones)
    Build {
        /// Site root (defaults to the config file's directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Section to build; may be repeated
        #[arg(short, long = "section")]
        sections: Vec<String>,
    },

    /// Preview a built section
    Serve {
        /// Section to serve
        section: String,

        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Site root (defaults to the config file's directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { dir, yes } => {
            commands::init::run(&dir, yes)?;
        }
        Commands::Build { root, sections } => {
            commands::build::run(&cli.config, root, &sections)?;
        }
        Commands::Serve {
            section,
            port,
            root,
            no_open,
        } => {
            commands::serve::run(&cli.config, root, &section, port, !no_open).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
