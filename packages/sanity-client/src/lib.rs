//! Pure Sanity content lake API client.
//!
//! A minimal client for the Sanity query API. Issues GROQ queries with
//! JSON-encoded parameters and deserializes the `result` envelope into
//! caller-provided types.
//!
//! # Example
//!
//! ```rust,ignore
//! use sanity_client::{FetchOptions, SanityClient, SanityConfig};
//!
//! let client = SanityClient::new(SanityConfig {
//!     project_id: "abc123".into(),
//!     dataset: "production".into(),
//!     api_version: "2024-01-01".into(),
//!     token: None,
//! });
//!
//! let venue: Option<Venue> = client
//!     .fetch(
//!         r#"*[_type == "venue" && slug.current == $slug][0]"#,
//!         &[("slug", "pizzeria-x".into())],
//!         &FetchOptions::tagged(vec!["venues".into()], 3600),
//!     )
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SanityError};
pub use types::{QueryResponse, Reference, Slug};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Connection settings for one project/dataset pair.
#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// API version date, e.g. "2024-01-01".
    pub api_version: String,
    /// Token for private datasets. Token requests skip the CDN.
    pub token: Option<String>,
}

/// Cache treatment requested for a single fetch.
///
/// The client itself is stateless. `tags` and `revalidate` are carried
/// back to callers so they can annotate their own cached responses
/// (surrogate keys and max-age) with them; `force_fresh` bypasses the
/// API CDN for read-after-write paths.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub tags: Vec<String>,
    /// Revalidation interval in seconds for cached responses built
    /// from this fetch.
    pub revalidate: Option<u64>,
    pub force_fresh: bool,
}

impl FetchOptions {
    /// Tag-annotated caching with a revalidation interval.
    pub fn tagged(tags: Vec<String>, revalidate: u64) -> Self {
        Self {
            tags,
            revalidate: Some(revalidate),
            force_fresh: false,
        }
    }

    /// Bypass the CDN entirely.
    pub fn fresh() -> Self {
        Self {
            force_fresh: true,
            ..Self::default()
        }
    }
}

pub struct SanityClient {
    client: reqwest::Client,
    config: SanityConfig,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Run a GROQ query. Returns `Ok(None)` when the query matched no
    /// document.
    ///
    /// Parameters are passed by name without the `$` prefix and are
    /// JSON-encoded on the wire, as the query API expects.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
        options: &FetchOptions,
    ) -> Result<Option<T>> {
        let mut url = url::Url::parse(&self.query_url(options.force_fresh))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
        }

        let mut request = self.client.get(url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SanityError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: QueryResponse<T> = serde_json::from_str(&body)?;
        tracing::debug!(
            ms = ?envelope.ms,
            fresh = options.force_fresh,
            "GROQ query completed"
        );
        Ok(envelope.result)
    }

    /// Query endpoint for this project. Reads go through the API CDN
    /// unless the caller forces a fresh read or the dataset is private.
    fn query_url(&self, force_fresh: bool) -> String {
        let host = if force_fresh || self.config.token.is_some() {
            "api.sanity.io"
        } else {
            "apicdn.sanity.io"
        };
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.config.project_id, host, self.config.api_version, self.config.dataset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: Option<&str>) -> SanityConfig {
        SanityConfig {
            project_id: "abc123".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn cdn_host_for_public_reads() {
        let client = SanityClient::new(config(None));
        assert_eq!(
            client.query_url(false),
            "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn live_host_for_fresh_reads() {
        let client = SanityClient::new(config(None));
        assert!(client.query_url(true).contains("abc123.api.sanity.io"));
    }

    #[test]
    fn live_host_for_token_reads() {
        let client = SanityClient::new(config(Some("secret")));
        assert!(client.query_url(false).contains("abc123.api.sanity.io"));
    }

    #[test]
    fn tagged_options_carry_interval() {
        let options = FetchOptions::tagged(vec!["venues".to_string()], 3600);
        assert_eq!(options.revalidate, Some(3600));
        assert!(!options.force_fresh);
    }
}
