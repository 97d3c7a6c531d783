//! CLI entry point for postfolio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postfolio::commands::list::ListOptions;
use postfolio::commands::show::OutputFormat;

#[derive(Parser)]
#[command(name = "postfolio")]
#[command(version)]
#[command(about = "Browse and read a folder of markdown blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts grouped by category
    #[command(alias = "ls")]
    List {
        /// Only show posts whose title or body contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Collapse a category (repeatable)
        #[arg(short, long)]
        collapse: Vec<String>,

        /// Print the navigation tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one post
    Show {
        /// Post id
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List categories with post counts
    Categories,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "postfolio=debug,info"
    } else {
        "postfolio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            search,
            collapse,
            json,
        } => {
            let folio = postfolio::Folio::new(&base_dir)?;
            let options = ListOptions {
                search,
                collapse,
                json,
            };
            postfolio::commands::list::run(&folio, &options)?;
        }

        Commands::Show { id, format } => {
            let folio = postfolio::Folio::new(&base_dir)?;
            postfolio::commands::show::run(&folio, &id, format)?;
        }

        Commands::Categories => {
            let folio = postfolio::Folio::new(&base_dir)?;
            postfolio::commands::categories::run(&folio)?;
        }

        Commands::Version => {
            println!("postfolio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
