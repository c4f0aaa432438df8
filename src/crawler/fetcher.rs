//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building an HTTP client with keep-alive reuse across every request
//! - GET requests with connect and total timeouts
//! - Bounded linear-backoff retry on transport failures
//! - Immediate abort on user interrupt, even mid-backoff
//!
//! HTTP responses with error status codes are deliberately not treated as
//! failures here; the body is returned as-is and falls out at the extraction
//! or filter stage. Only transport-level failures (timeout, DNS, connection
//! reset) are retried.

use crate::config::FetchConfig;
use crate::shutdown::Shutdown;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("forum-harvester/", env!("CARGO_PKG_VERSION"));

/// HTTP fetcher owning a reusable client and retry configuration
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_retries: u32,
    backoff_base: Duration,
    shutdown: Shutdown,
}

/// Builds an HTTP client with the configured timeouts
///
/// The same client is reused for the sitemap and every page fetch, so
/// connections to the forum host stay alive across requests. Redirects are
/// followed (forum software routinely redirects thread URLs).
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.total_timeout())
        .connect_timeout(config.connect_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

impl Fetcher {
    /// Creates a fetcher from the fetch configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Timeouts, retry cap, and backoff base
    /// * `shutdown` - Interrupt handle; aborts in-flight backoff waits
    pub fn new(config: &FetchConfig, shutdown: Shutdown) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            max_retries: config.max_retries,
            backoff_base: config.backoff_base(),
            shutdown,
        })
    }

    /// Fetches a URL, retrying transport failures with linear backoff
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | Transport failure (timeout, DNS, reset) | Retry up to `max_retries` times |
    /// | Delay before retry *n* | `n * backoff_base` (linear throttle) |
    /// | HTTP error status (4xx/5xx) | Not an error; body returned as-is |
    /// | User interrupt | Abort immediately, never retried |
    ///
    /// The linear rather than exponential schedule is a conservative throttle
    /// against the single target host: with the default 10 s base the delays
    /// run 10, 20, ... 100 seconds.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - Response body bytes
    /// * `Err(FetchError::Transport)` - Final transport error after the retry cap
    /// * `Err(FetchError::Interrupted)` - User interrupt observed
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut retries: u32 = 0;

        loop {
            if self.shutdown.is_triggered() {
                return Err(FetchError::Interrupted);
            }

            let err = match self.client.get(url).send().await {
                Ok(response) => match response.bytes().await {
                    Ok(body) => return Ok(body.to_vec()),
                    // Failure while reading the body is a transport failure too.
                    Err(err) => err,
                },
                Err(err) => err,
            };

            if retries >= self.max_retries {
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    attempts: retries + 1,
                    source: err,
                });
            }

            retries += 1;
            let delay = self.backoff_base * retries;
            tracing::warn!(
                "Transport failure for {} ({}), retry {}/{} in {:?}",
                url,
                err,
                retries,
                self.max_retries,
                delay
            );

            let mut shutdown = self.shutdown.clone();
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown.triggered() => return Err(FetchError::Interrupted),
            }
        }
    }
}
