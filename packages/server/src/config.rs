use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Deployment environment. Anything other than production runs the
/// IndexNow dispatcher in dry-run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    fn from_env_value(value: &str) -> Self {
        match value {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: Environment,
    /// Public base URL of the site, e.g. "https://saborlocal.es".
    pub site_base_url: String,
    pub sanity_project_id: String,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    pub sanity_api_token: Option<String>,
    /// Shared secret the content store signs webhook deliveries with.
    pub sanity_webhook_secret: String,
    pub cache_purge_url: Option<String>,
    pub cache_purge_token: Option<String>,
    pub indexnow_host: Option<String>,
    pub indexnow_key: Option<String>,
    pub indexnow_key_location: Option<String>,
    pub indexnow_dry_run: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: Environment::from_env_value(
                &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            ),
            site_base_url: env::var("SITE_BASE_URL")
                .context("SITE_BASE_URL must be set")?,
            sanity_project_id: env::var("SANITY_PROJECT_ID")
                .context("SANITY_PROJECT_ID must be set")?,
            sanity_dataset: env::var("SANITY_DATASET")
                .unwrap_or_else(|_| "production".to_string()),
            sanity_api_version: env::var("SANITY_API_VERSION")
                .unwrap_or_else(|_| "2024-01-01".to_string()),
            sanity_api_token: env::var("SANITY_API_TOKEN").ok(),
            sanity_webhook_secret: env::var("SANITY_WEBHOOK_SECRET")
                .context("SANITY_WEBHOOK_SECRET must be set")?,
            cache_purge_url: env::var("CACHE_PURGE_URL").ok(),
            cache_purge_token: env::var("CACHE_PURGE_TOKEN").ok(),
            indexnow_host: env::var("INDEXNOW_HOST").ok(),
            indexnow_key: env::var("INDEXNOW_KEY").ok(),
            indexnow_key_location: env::var("INDEXNOW_KEY_LOCATION").ok(),
            indexnow_dry_run: env::var("INDEXNOW_DRY_RUN")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_values_parse() {
        assert!(Environment::from_env_value("production").is_production());
        assert!(Environment::from_env_value("prod").is_production());
    }

    #[test]
    fn anything_else_is_development() {
        assert!(!Environment::from_env_value("development").is_production());
        assert!(!Environment::from_env_value("staging").is_production());
        assert!(!Environment::from_env_value("").is_production());
    }
}
