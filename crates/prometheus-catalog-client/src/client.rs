//! The metadata client: construction-time validation and table lookups.

use crate::cache::{FetchFn, MetadataCache};
use crate::config::ClientConfig;
use crate::duration::parse_seconds;
use crate::error::{ClientError, Result};
use crate::fetch::MetricsFetcher;
use crate::types::{
    MetadataDecoder, PrometheusColumn, PrometheusTable, TypeResolver, TypeSignature,
};
use futures::FutureExt;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// The single schema name every client exposes.
pub const NAMESPACE: &str = "default";

/// Path of the metric-name listing endpoint, appended to the base URI.
const METRICS_ENDPOINT: &str = "/api/v1/label/__name__/values";

/// Catalog client for a Prometheus-compatible monitoring service.
///
/// Construction validates the configuration (durations, base URI, and the
/// range/chunk ordering) before anything else; no network call happens
/// until the first lookup. `T` is the engine column type produced by the
/// [`TypeResolver`] passed at construction.
pub struct PrometheusClient<T> {
    config: ClientConfig,
    columns: Vec<PrometheusColumn<T>>,
    cache: MetadataCache,
}

impl<T: Clone + Send + Sync + 'static> PrometheusClient<T> {
    /// Create a new client.
    ///
    /// Fails with [`ClientError::Config`] on a malformed base URI, a
    /// malformed duration, or a maximum query range smaller than the chunk
    /// size. The decoder and resolver are the engine's collaborators; the
    /// resolver is used exactly once here to build the fixed column schema.
    pub fn new<D, R>(config: ClientConfig, decoder: D, resolver: &R) -> Result<Self>
    where
        D: MetadataDecoder + 'static,
        R: TypeResolver<Type = T>,
    {
        config.validate()?;

        let metrics_url = metrics_endpoint(&config.base_uri)?;
        let ttl = Duration::from_secs(parse_seconds(&config.cache_ttl)?);

        let fetcher = Arc::new(MetricsFetcher::new(&config, metrics_url)?);
        let decoder: Arc<dyn MetadataDecoder> = Arc::new(decoder);
        let fetch: FetchFn = Arc::new(move || {
            let fetcher = fetcher.clone();
            let decoder = decoder.clone();
            async move {
                let body = fetcher.fetch().await?;
                decoder.decode(&body)
            }
            .boxed()
        });

        let columns = vec![
            PrometheusColumn {
                name: "labels".to_string(),
                data_type: resolver.resolve(TypeSignature::VarcharMap)?,
            },
            PrometheusColumn {
                name: "timestamp".to_string(),
                data_type: resolver.resolve(TypeSignature::Timestamp)?,
            },
            PrometheusColumn {
                name: "value".to_string(),
                data_type: resolver.resolve(TypeSignature::Double)?,
            },
        ];

        Ok(Self {
            config,
            columns,
            cache: MetadataCache::new(ttl, fetch),
        })
    }

    /// The configured base URI.
    pub fn base_uri(&self) -> &str {
        &self.config.base_uri
    }

    /// The fixed column schema shared by every table.
    pub fn columns(&self) -> &[PrometheusColumn<T>] {
        &self.columns
    }

    /// The schema names this client exposes: always exactly `{"default"}`.
    ///
    /// Pure; never touches the network.
    pub fn schema_names(&self) -> BTreeSet<String> {
        BTreeSet::from([NAMESPACE.to_string()])
    }

    /// The table names in `schema`.
    ///
    /// An unknown schema yields an empty set without any network access. A
    /// non-success listing status also degrades to an empty set rather than
    /// an error. Fetch failures (token file, HTTP, transport) do propagate.
    pub async fn table_names(&self, schema: &str) -> Result<BTreeSet<String>> {
        if schema.is_empty() {
            return Err(ClientError::InvalidArgument(
                "schema must not be empty".to_string(),
            ));
        }
        if schema != NAMESPACE {
            return Ok(BTreeSet::new());
        }

        let snapshot = self.cache.get().await?;
        if !snapshot.is_success() {
            tracing::debug!(status = %snapshot.status, "Listing status is not success, hiding tables");
            return Ok(BTreeSet::new());
        }
        Ok(snapshot
            .data
            .as_deref()
            .unwrap_or_default()
            .iter()
            .cloned()
            .collect())
    }

    /// Look up one table, returning its descriptor if the metric exists.
    ///
    /// The descriptor is built fresh per call but is structurally identical
    /// for identical inputs.
    pub async fn table(&self, schema: &str, table_name: &str) -> Result<Option<PrometheusTable<T>>> {
        if schema.is_empty() {
            return Err(ClientError::InvalidArgument(
                "schema must not be empty".to_string(),
            ));
        }
        if table_name.is_empty() {
            return Err(ClientError::InvalidArgument(
                "table name must not be empty".to_string(),
            ));
        }
        if schema != NAMESPACE {
            return Ok(None);
        }

        let snapshot = self.cache.get().await?;
        let known = match &snapshot.data {
            Some(names) => names.iter().any(|n| n == table_name),
            None => false,
        };
        if !known {
            return Ok(None);
        }

        Ok(Some(PrometheusTable {
            name: table_name.to_string(),
            columns: self.columns.clone(),
        }))
    }
}

impl<T> std::fmt::Debug for PrometheusClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrometheusClient")
            .field("base_uri", &self.config.base_uri)
            .finish()
    }
}

/// Derive the metric-name listing URL from the base URI.
///
/// Keeps the scheme, host and port, appends the fixed endpoint to the
/// configured path, and drops any query or fragment.
fn metrics_endpoint(base_uri: &str) -> Result<Url> {
    let mut url = Url::parse(base_uri)
        .map_err(|e| ClientError::Config(format!("invalid base_uri: {}", e)))?;
    if !url.has_host() {
        return Err(ClientError::Config(format!(
            "base_uri has no host: {}",
            base_uri
        )));
    }
    let path = format!("{}{}", url.path().trim_end_matches('/'), METRICS_ENDPOINT);
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
