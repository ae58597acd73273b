//! The authenticated HTTP fetch path for the metadata listing.

use crate::auth::BearerTokenFile;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use url::Url;

/// Issues the single metadata GET and classifies the outcome.
pub(crate) struct MetricsFetcher {
    http: reqwest::Client,
    metrics_url: Url,
    token: BearerTokenFile,
}

impl MetricsFetcher {
    pub(crate) fn new(config: &ClientConfig, metrics_url: Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("prometheus-catalog-client")),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            metrics_url,
            token: BearerTokenFile::new(config.bearer_token_file.clone()),
        })
    }

    /// Fetch the metadata listing body.
    ///
    /// The bearer token is loaded before the request goes out, so an
    /// unreadable token file fails the fetch without touching the network.
    pub(crate) async fn fetch(&self) -> Result<Vec<u8>> {
        let mut request = self.http.get(self.metrics_url.clone());
        if let Some(token) = self.token.load()? {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ClientError::Config(
                    "bearer token file contents are not a valid header value".to_string(),
                )
            })?;
            request = request.header(AUTHORIZATION, value);
        }

        tracing::debug!(url = %self.metrics_url, "Fetching metric metadata");
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            tracing::debug!(
                url = %self.metrics_url,
                status = %status.as_u16(),
                bytes = body.len(),
                "Received metric metadata"
            );
            Ok(body.to_vec())
        } else {
            let message = status.canonical_reason().unwrap_or_default().to_string();
            tracing::warn!(
                url = %self.metrics_url,
                status = %status.as_u16(),
                "Metadata fetch failed"
            );
            Err(ClientError::BadResponse {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl std::fmt::Debug for MetricsFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsFetcher")
            .field("metrics_url", &self.metrics_url.as_str())
            .finish()
    }
}
