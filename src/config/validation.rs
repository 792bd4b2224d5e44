use crate::config::types::{Config, CrawlerConfig, FetchConfig, OutputConfig, RobotsConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound for both retry attempts and redirect hops
const MAX_HOPS_OR_ATTEMPTS: u64 = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_fetch_config(&config.fetch)?;
    validate_robots_config(&config.robots)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawl scope configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    validate_seed_url(&config.seed_url)?;

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.stats_interval_ms < 10 {
        return Err(ConfigError::Validation(format!(
            "stats_interval_ms must be >= 10ms, got {}ms",
            config.stats_interval_ms
        )));
    }

    Ok(())
}

/// Validates the seed URL: absolute, http(s), with a host
fn validate_seed_url(seed: &str) -> Result<(), ConfigError> {
    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Seed URL '{}' must use HTTP or HTTPS scheme",
            seed
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(())
}

/// Validates fetch behaviour
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.max_attempts < 1 || u64::from(config.max_attempts) > MAX_HOPS_OR_ATTEMPTS {
        return Err(ConfigError::Validation(format!(
            "max_attempts must be between 1 and {}, got {}",
            MAX_HOPS_OR_ATTEMPTS, config.max_attempts
        )));
    }

    if config.max_redirects as u64 > MAX_HOPS_OR_ATTEMPTS {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= {}, got {}",
            MAX_HOPS_OR_ATTEMPTS, config.max_redirects
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "fetch timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates robots.txt handling
fn validate_robots_config(config: &RobotsConfig) -> Result<(), ConfigError> {
    if config.enabled && config.timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "robots timeout_secs must be >= 1".to_string(),
        ));
    }
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens/underscores only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
