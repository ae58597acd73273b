//! Client configuration and builder pattern.

use crate::duration::parse_seconds;
use crate::error::{ClientError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the Prometheus catalog client.
///
/// The three duration fields use the configuration duration grammar, a
/// magnitude plus a unit suffix (`"30s"`, `"1d"`, `"3w"`).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URI of the Prometheus server (e.g., "http://localhost:9090")
    pub base_uri: String,
    /// Span into which a large range query is subdivided downstream
    pub query_chunk_size: String,
    /// Largest time span a single query may cover; must be at least
    /// `query_chunk_size` in seconds
    pub max_query_range: String,
    /// How long a fetched metadata snapshot stays fresh
    pub cache_ttl: String,
    /// Optional file whose contents are sent as a bearer token
    pub bearer_token_file: Option<PathBuf>,
    /// Request timeout (default: 30 seconds)
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: "http://localhost:9090".to_string(),
            query_chunk_size: "1d".to_string(),
            max_query_range: "21d".to_string(),
            cache_ttl: "30s".to_string(),
            bearer_token_file: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("prometheus-catalog-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    pub fn builder(base_uri: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(base_uri)
    }

    /// Validate the configuration.
    ///
    /// Checks the base URI, parses all three durations, and enforces that
    /// the maximum query range is not smaller than the chunk size. Runs
    /// before any network access.
    pub fn validate(&self) -> Result<()> {
        if self.base_uri.is_empty() {
            return Err(ClientError::Config("base_uri cannot be empty".to_string()));
        }
        url::Url::parse(&self.base_uri)
            .map_err(|e| ClientError::Config(format!("invalid base_uri: {}", e)))?;

        let chunk_seconds = parse_seconds(&self.query_chunk_size)?;
        let max_range_seconds = parse_seconds(&self.max_query_range)?;
        parse_seconds(&self.cache_ttl)?;

        if max_range_seconds < chunk_seconds {
            return Err(ClientError::Config(
                "max-query-range-duration must be greater than query-chunk-size-duration"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for client configuration.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder with the given base URI.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            config: ClientConfig {
                base_uri: base_uri.into(),
                ..Default::default()
            },
        }
    }

    /// Set the query chunk size duration.
    pub fn query_chunk_size(mut self, duration: impl Into<String>) -> Self {
        self.config.query_chunk_size = duration.into();
        self
    }

    /// Set the maximum query range duration.
    pub fn max_query_range(mut self, duration: impl Into<String>) -> Self {
        self.config.max_query_range = duration.into();
        self
    }

    /// Set how long a metadata snapshot stays fresh.
    pub fn cache_ttl(mut self, duration: impl Into<String>) -> Self {
        self.config.cache_ttl = duration.into();
        self
    }

    /// Read a bearer token from this file on every request.
    pub fn bearer_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.bearer_token_file = Some(path.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration, validating all settings.
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_uri, "http://localhost:9090");
        assert_eq!(config.query_chunk_size, "1d");
        assert_eq!(config.max_query_range, "21d");
        assert_eq!(config.cache_ttl, "30s");
        assert!(config.bearer_token_file.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder("https://prometheus.example.com")
            .query_chunk_size("1d")
            .max_query_range("3w")
            .cache_ttl("5m")
            .bearer_token_file("/var/run/secrets/prometheus-token")
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.base_uri, "https://prometheus.example.com");
        assert_eq!(config.max_query_range, "3w");
        assert_eq!(config.cache_ttl, "5m");
        assert_eq!(
            config.bearer_token_file,
            Some(PathBuf::from("/var/run/secrets/prometheus-token"))
        );
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_uri() {
        let result = ClientConfig::builder("not a valid uri").build();
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_empty_uri() {
        let result = ClientConfig::builder("").build();
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_invalid_duration() {
        let result = ClientConfig::builder("http://localhost:9090")
            .cache_ttl("soon")
            .build();
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_range_smaller_than_chunk_is_rejected() {
        let result = ClientConfig::builder("http://localhost:9090")
            .query_chunk_size("21d")
            .max_query_range("1d")
            .build();

        let err = result.unwrap_err();
        assert!(err
            .to_string()
            .contains("max-query-range-duration must be greater than query-chunk-size-duration"));
    }

    #[test]
    fn test_range_equal_to_chunk_is_accepted() {
        let result = ClientConfig::builder("http://localhost:9090")
            .query_chunk_size("1d")
            .max_query_range("24h")
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_range_in_different_units() {
        // 3w and 21d are the same span; either ordering of units must pass.
        let result = ClientConfig::builder("http://localhost:9090")
            .query_chunk_size("21d")
            .max_query_range("3w")
            .build();
        assert!(result.is_ok());
    }
}
