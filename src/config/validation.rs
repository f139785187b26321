use crate::config::types::{
    Config, HttpConfig, LimitsConfig, OutputConfig, SelectorConfig, SiteConfig,
};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_limits_config(&config.limits)?;
    validate_http_config(&config.http)?;
    validate_selector_config(&config.selectors)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the base URL and category list
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.categories.is_empty() {
        return Err(ConfigError::Validation(
            "categories must contain at least one entry".to_string(),
        ));
    }

    if let Some(index) = config.categories.iter().position(|c| c.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "category at position {} is blank",
            index
        )));
    }

    Ok(())
}

/// Validates the two quotas
fn validate_limits_config(config: &LimitsConfig) -> Result<(), ConfigError> {
    if config.max_products < 1 {
        return Err(ConfigError::Validation(format!(
            "max_products must be >= 1, got {}",
            config.max_products
        )));
    }

    if config.max_per_category < 1 {
        return Err(ConfigError::Validation(format!(
            "max_per_category must be >= 1, got {}",
            config.max_per_category
        )));
    }

    Ok(())
}

/// Validates request identity and timeouts
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be between 1 and timeout_secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates that every selector compiles
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for (field, selector) in [
        ("product_card", &config.product_card),
        ("price", &config.price),
        ("rating", &config.rating),
        ("image", &config.image),
        ("link", &config.link),
    ] {
        Selector::parse(selector).map_err(|e| {
            ConfigError::InvalidSelector(format!("{} '{}': {}", field, selector, e))
        })?;
    }

    for (field, attribute) in [
        ("name_attribute", &config.name_attribute),
        ("image_attribute", &config.image_attribute),
    ] {
        if attribute.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", field)));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.dataset_path.is_empty() {
        return Err(ConfigError::Validation(
            "dataset_path cannot be empty".to_string(),
        ));
    }

    if matches!(config.summary_path.as_deref(), Some("")) {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}
