//! robotstxt CLI
//!
//! Generates robots.txt from a TOML, YAML or JSON configuration file.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use robotstxt::cmd::{self, Overrides};

/// Command-line interface for robotstxt.
#[derive(Parser)]
#[command(name = "robotstxt", version, about = "Generate robots.txt files")]
struct Cli {
    /// Path to configuration file (defaults to robots.toml when present)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate robots.txt and write it to disk
    Build {
        /// Output file
        #[arg(short, long, default_value = "robots.txt")]
        output: std::path::PathBuf,
        /// Override the Host directive (e.g., https://example.com)
        #[arg(long)]
        host: Option<String>,
        /// Override the Sitemap directives (repeatable)
        #[arg(long = "sitemap")]
        sitemaps: Vec<String>,
    },
    /// Generate robots.txt and print it to stdout
    Print {
        /// Override the Host directive
        #[arg(long)]
        host: Option<String>,
        /// Override the Sitemap directives (repeatable)
        #[arg(long = "sitemap")]
        sitemaps: Vec<String>,
    },
    /// Validate configuration without writing anything
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    robotstxt::init_tracing(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Build {
            output,
            host,
            sitemaps,
        } => {
            let overrides = Overrides { host, sitemaps };
            cmd::build::run(config, &output, &overrides).await?;
        }
        Commands::Print { host, sitemaps } => {
            let overrides = Overrides { host, sitemaps };
            cmd::print::run(config, &overrides)?;
        }
        Commands::Check => {
            cmd::check::run(config)?;
        }
    }

    Ok(())
}
