//! Forum-Harvester main entry point
//!
//! Command-line interface for the sitemap-driven forum post harvester.

use anyhow::Context;
use clap::Parser;
use forum_harvester::config::load_config_with_hash;
use forum_harvester::{crawl, shutdown, FetchError, HarvestError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Forum-Harvester: a sitemap-driven forum post harvester
///
/// Walks a forum's sitemap, extracts post content from each page, keeps only
/// pages in the configured forum section, and writes a JSON record plus an
/// HTML preview per accepted page under a sharded output tree.
#[derive(Parser, Debug)]
#[command(name = "forum-harvester")]
#[command(version = "1.0.0")]
#[command(about = "A sitemap-driven forum post harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    // Wire Ctrl-C to the shutdown handle so an interrupt aborts mid-backoff.
    let (trigger, handle) = shutdown::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, aborting");
            trigger.trigger();
        }
    });

    match crawl(&config, handle).await {
        Ok(stats) => {
            tracing::info!(
                "Done: {} pages processed, {} saved, {} skipped, {} failed",
                stats.pages,
                stats.saved,
                stats.skipped,
                stats.failed
            );
            Ok(())
        }
        Err(HarvestError::Fetch(FetchError::Interrupted)) => {
            tracing::warn!("user aborting...");
            Err(anyhow::anyhow!("harvest interrupted by user"))
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("forum_harvester=info,warn"),
            1 => EnvFilter::new("forum_harvester=debug,info"),
            2 => EnvFilter::new("forum_harvester=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be harvested
fn handle_dry_run(config: &forum_harvester::Config) {
    println!("=== Forum-Harvester Dry Run ===\n");

    println!("Site:");
    println!("  Sitemap URL: {}", config.site.sitemap_url);
    println!("  Target section: {}", config.site.target_section);

    println!("\nFetch:");
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);
    println!("  Total timeout: {}s", config.fetch.total_timeout_secs);
    println!("  Max retries: {}", config.fetch.max_retries);
    println!("  Backoff base: {}ms", config.fetch.backoff_base_ms);

    println!("\nOutput:");
    println!("  Root directory: {}", config.output.root_dir);
    println!("  File prefix: {}", config.output.file_prefix);
    println!("  Template: {}", config.output.template_path);
    println!("  Error log: {}", config.output.error_log_path);

    println!("\n✓ Configuration is valid");
}
