//! Crawler module for sitemap-driven page harvesting
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with bounded linear-backoff retry
//! - Sitemap XML parsing
//! - Per-page processing with failure isolation
//! - The sequential crawl loop

mod fetcher;
mod processor;
mod sitemap;

pub use fetcher::{build_http_client, Fetcher};
pub use processor::{PageProcessor, ProcessOutcome};
pub use sitemap::parse_sitemap;

use crate::config::Config;
use crate::output::append_error;
use crate::shutdown::Shutdown;
use crate::{HarvestError, Result};
use std::path::Path;

/// Tallies of a completed crawl run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages: usize,
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Runs a complete harvest
///
/// Fetches the sitemap, then processes every listed URL sequentially in
/// document order, reusing one HTTP client for all requests. Per-page
/// failures are isolated inside the processor; only a sitemap-level failure
/// or a user interrupt ends the run early.
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `shutdown` - Interrupt handle wired to Ctrl-C by the binary
///
/// # Returns
///
/// * `Ok(CrawlStats)` - Crawl completed; per-outcome counts
/// * `Err(HarvestError)` - Sitemap failure or interrupt
pub async fn crawl(config: &Config, shutdown: Shutdown) -> Result<CrawlStats> {
    let fetcher = Fetcher::new(&config.fetch, shutdown)?;

    tracing::info!("Fetching sitemap {}", config.site.sitemap_url);
    let urls = match load_sitemap(&fetcher, &config.site.sitemap_url).await {
        Ok(urls) => urls,
        Err(err @ HarvestError::Fetch(crate::FetchError::Interrupted)) => return Err(err),
        Err(err) => {
            let message = format!("Error crawling sitemap: {}", err);
            tracing::error!("{}", message);
            if let Err(log_err) = append_error(Path::new(&config.output.error_log_path), &message)
            {
                tracing::error!("Failed to append to error log: {}", log_err);
            }
            return Err(err);
        }
    };

    tracing::info!(
        "Sitemap lists {} pages; harvesting section '{}'",
        urls.len(),
        config.site.target_section
    );

    let processor = PageProcessor::new(config, fetcher);
    let mut stats = CrawlStats::default();
    let start_time = std::time::Instant::now();

    for url in &urls {
        match processor.process(url).await? {
            ProcessOutcome::Saved => stats.saved += 1,
            ProcessOutcome::SkippedSection => stats.skipped += 1,
            ProcessOutcome::Failed => stats.failed += 1,
        }
        stats.pages += 1;

        // Progress reporting every 10 pages
        if stats.pages % 10 == 0 {
            let rate = stats.pages as f64 / start_time.elapsed().as_secs_f64();
            tracing::info!(
                "Progress: {}/{} pages, {} saved, {} skipped, {} failed, {:.2} pages/sec",
                stats.pages,
                urls.len(),
                stats.saved,
                stats.skipped,
                stats.failed,
                rate
            );
        }
    }

    tracing::info!(
        "Crawl complete: {} pages, {} saved, {} skipped, {} failed",
        stats.pages,
        stats.saved,
        stats.skipped,
        stats.failed
    );
    Ok(stats)
}

/// Fetches and parses the sitemap into its page URLs
async fn load_sitemap(fetcher: &Fetcher, sitemap_url: &str) -> Result<Vec<String>> {
    let body = fetcher.fetch(sitemap_url).await?;
    let urls = parse_sitemap(&body)?;
    Ok(urls)
}
