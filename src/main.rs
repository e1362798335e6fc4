use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "webaudit")]
#[command(about = "Website maintenance audits - broken links, broken images, performance checks")]
#[command(version)]
struct Cli {
    /// Path to the site root (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to webaudit.toml in the site root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Audit a single page instead of the whole site (relative to the root)
    #[arg(long, global = true)]
    page: Option<PathBuf>,

    /// Probe links over HTTP against this base URL instead of the filesystem
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full audit: links, images, performance, recommendations
    Audit,

    /// Scan hyperlinks for broken targets
    Links,

    /// Scan images for broken resources and missing alt text
    Images,

    /// Sample performance figures for the site
    Perf,

    /// Run a full audit and write JSON + HTML report files
    Report,

    /// Initialize a webaudit.toml configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the site root
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let opts = cli::CommandOptions {
        work_dir,
        config: cli.config,
        page: cli.page,
        base_url: cli.base_url,
    };

    match cli.command {
        Some(Commands::Audit) => cli::audit::audit_command(&opts).await?,
        Some(Commands::Links) => cli::links::links_command(&opts).await?,
        Some(Commands::Images) => cli::images::images_command(&opts).await?,
        Some(Commands::Perf) => cli::perf::perf_command(&opts).await?,
        Some(Commands::Report) => cli::report::report_command(&opts).await?,
        Some(Commands::Init { force }) => cli::init::init_command(&opts, force).await?,
        None => {
            // Default: run the full audit
            cli::audit::audit_command(&opts).await?;
        }
    }

    Ok(())
}
