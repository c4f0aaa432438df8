//! Per-page processing
//!
//! One URL at a time: fetch, parse, extract, filter by forum section, and
//! persist the record plus preview. This is the failure isolation boundary
//! of the crawl: any error here is logged with the URL and turned into a
//! `Failed` outcome so a single bad page cannot abort the run. The one
//! exception is a user interrupt, which always propagates.

use crate::config::Config;
use crate::crawler::Fetcher;
use crate::extract::extract_content;
use crate::output::{
    append_error, ensure_shard_dir, shard_path, write_preview, write_record, PageRecord,
};
use crate::{FetchError, HarvestError};
use scraper::Html;
use std::path::PathBuf;

/// Result of processing one sitemap entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Page accepted: record and preview written
    Saved,

    /// Page belongs to another forum section; discarded silently
    SkippedSection,

    /// An error occurred and was logged; the crawl continues
    Failed,
}

/// Processes pages against one target section and output layout
pub struct PageProcessor {
    fetcher: Fetcher,
    target_section: String,
    root_dir: PathBuf,
    file_prefix: String,
    template_path: PathBuf,
    error_log_path: PathBuf,
}

impl PageProcessor {
    /// Creates a processor sharing the given fetcher's HTTP connection
    pub fn new(config: &Config, fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            target_section: config.site.target_section.clone(),
            root_dir: PathBuf::from(&config.output.root_dir),
            file_prefix: config.output.file_prefix.clone(),
            template_path: PathBuf::from(&config.output.template_path),
            error_log_path: PathBuf::from(&config.output.error_log_path),
        }
    }

    /// Fetches and persists one page, trapping every per-page failure
    ///
    /// # Returns
    ///
    /// * `Ok(outcome)` - Saved, filtered out, or failed-and-logged
    /// * `Err(FetchError::Interrupted)` - User interrupt; never trapped
    pub async fn process(&self, url: &str) -> Result<ProcessOutcome, FetchError> {
        match self.try_process(url).await {
            Ok(outcome) => Ok(outcome),
            Err(HarvestError::Fetch(FetchError::Interrupted)) => Err(FetchError::Interrupted),
            Err(err) => {
                let message = format!("Error processing {}: {}", url, err);
                tracing::error!("{}", message);
                if let Err(log_err) = append_error(&self.error_log_path, &message) {
                    tracing::error!("Failed to append to error log: {}", log_err);
                }
                Ok(ProcessOutcome::Failed)
            }
        }
    }

    async fn try_process(&self, url: &str) -> crate::Result<ProcessOutcome> {
        let body = self.fetcher.fetch(url).await?;
        let html = String::from_utf8_lossy(&body);
        let document = Html::parse_document(&html);

        let content = extract_content(&document)?;
        if content.forum_section != self.target_section {
            tracing::debug!(
                "Skipping {} (section '{}' != '{}')",
                url,
                content.forum_section,
                self.target_section
            );
            return Ok(ProcessOutcome::SkippedSection);
        }

        let base = shard_path(&self.root_dir, &self.file_prefix, url);
        ensure_shard_dir(&base)?;

        let record = PageRecord {
            tags: content.tags,
            text: content.text.clone(),
            url: url.to_string(),
        };
        write_record(&base.with_extension("json"), &record)?;
        write_preview(
            &self.template_path,
            &base.with_extension("html"),
            &content.text,
            url,
        )?;

        tracing::info!("Saved {}", url);
        Ok(ProcessOutcome::Saved)
    }
}
