use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Forum-Harvester
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Target-site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// URL of the sitemap listing every page to harvest
    #[serde(rename = "sitemap-url")]
    pub sitemap_url: String,

    /// Forum section to keep; pages in any other section are discarded
    #[serde(rename = "target-section")]
    pub target_section: String,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// TCP connect timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Total per-request timeout (seconds)
    #[serde(rename = "total-timeout-secs")]
    pub total_timeout_secs: u64,

    /// Maximum number of retries after a transport failure
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Backoff base; delay before retry n is n * base (milliseconds)
    #[serde(rename = "backoff-base-ms")]
    pub backoff_base_ms: u64,
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn total_timeout(&self) -> Duration {
        Duration::from_secs(self.total_timeout_secs)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }
}

/// Output layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root directory for sharded record/preview files
    #[serde(rename = "root-dir")]
    pub root_dir: String,

    /// Filename prefix inside each shard directory
    #[serde(rename = "file-prefix")]
    pub file_prefix: String,

    /// Path to the HTML preview template ({PREVIEW} and {URL} placeholders)
    #[serde(rename = "template-path")]
    pub template_path: String,

    /// Path to the append-only error log
    #[serde(rename = "error-log-path")]
    pub error_log_path: String,
}
