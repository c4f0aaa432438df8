use crate::config::types::{Config, FetchConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates target-site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.sitemap_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid sitemap_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "sitemap_url must use an http(s) scheme, got '{}'",
            url.scheme()
        )));
    }

    if config.target_section.is_empty() {
        return Err(ConfigError::Validation(
            "target_section cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.total_timeout_secs < config.connect_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "total_timeout_secs must be >= connect_timeout_secs, got {} < {}",
            config.total_timeout_secs, config.connect_timeout_secs
        )));
    }

    if config.max_retries < 1 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be >= 1, got {}",
            config.max_retries
        )));
    }

    if config.backoff_base_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "backoff_base_ms must be >= 1, got {}",
            config.backoff_base_ms
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.root_dir.is_empty() {
        return Err(ConfigError::Validation(
            "root_dir cannot be empty".to_string(),
        ));
    }

    if config.file_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "file_prefix cannot be empty".to_string(),
        ));
    }

    if config.template_path.is_empty() {
        return Err(ConfigError::Validation(
            "template_path cannot be empty".to_string(),
        ));
    }

    if config.error_log_path.is_empty() {
        return Err(ConfigError::Validation(
            "error_log_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            site: SiteConfig {
                sitemap_url: "https://forum.example.com/sitemap.xml".to_string(),
                target_section: "初等数学讨论".to_string(),
            },
            fetch: FetchConfig {
                connect_timeout_secs: 8,
                total_timeout_secs: 10,
                max_retries: 10,
                backoff_base_ms: 10_000,
            },
            output: OutputConfig {
                root_dir: "./tmp".to_string(),
                file_prefix: "kuing".to_string(),
                template_path: "./template.html".to_string(),
                error_log_path: "./error.log".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_invalid_sitemap_url() {
        let mut config = valid_config();
        config.site.sitemap_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_sitemap_url() {
        let mut config = valid_config();
        config.site.sitemap_url = "ftp://forum.example.com/sitemap.xml".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_target_section() {
        let mut config = valid_config();
        config.site.target_section = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_retries() {
        let mut config = valid_config();
        config.fetch.max_retries = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_total_timeout_below_connect_timeout() {
        let mut config = valid_config();
        config.fetch.total_timeout_secs = 4;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_file_prefix() {
        let mut config = valid_config();
        config.output.file_prefix = String::new();
        assert!(validate(&config).is_err());
    }
}
