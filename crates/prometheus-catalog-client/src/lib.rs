//! Prometheus Catalog Client
//!
//! A metadata client that lets a SQL query engine discover metrics exposed
//! by a Prometheus-compatible monitoring service and describe them as
//! tables, with optional DataFusion integration.
//!
//! # Features
//!
//! - **Metric discovery**: one authenticated GET against the metric-name
//!   listing endpoint, decoded into table names
//! - **TTL caching**: a single-slot cache with single-flight refresh, so
//!   repeated catalog lookups never stampede the monitoring service
//! - **Construction-time validation**: duration strings and the
//!   range/chunk ordering are checked before any network access
//! - **DataFusion integration**: (optional) catalog/schema/table providers
//!
//! # Quick start
//!
//! ```rust,ignore
//! use prometheus_catalog_client::{ClientConfig, JsonMetadataDecoder, PrometheusClient};
//! use prometheus_catalog_client::datafusion::ArrowTypeResolver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PrometheusClient::new(
//!         ClientConfig::builder("http://localhost:9090")
//!             .query_chunk_size("1d")
//!             .max_query_range("21d")
//!             .cache_ttl("30s")
//!             .build()?,
//!         JsonMetadataDecoder,
//!         &ArrowTypeResolver,
//!     )?;
//!
//!     for name in client.table_names("default").await? {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Caching
//!
//! The metric listing is cached for the configured `cache_ttl`. Exactly one
//! snapshot is ever held; an expired snapshot is refreshed by a single
//! fetch shared by all concurrent callers, and fetch failures are never
//! cached.
//!
//! # Error handling
//!
//! All operations return `Result<T, ClientError>`:
//!
//! - `Config`: malformed duration or URI, or a maximum query range smaller
//!   than the chunk size (fatal to construction)
//! - `NotFound`: the configured bearer-token file could not be read
//! - `BadResponse`: the service answered with a non-success HTTP status
//! - `Transport`: connection, DNS or timeout failures
//!
//! A listing whose decoded `status` is not `"success"` is not an error: the
//! affected lookups degrade to "no tables".

mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod duration;
pub mod error;
mod fetch;
pub mod types;

#[cfg(feature = "datafusion")]
pub mod datafusion;

// Re-exports for convenience
pub use cache::MetadataCache;
pub use client::{PrometheusClient, NAMESPACE};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ClientError, Result};
pub use types::{
    JsonMetadataDecoder, MetadataDecoder, MetadataSnapshot, PrometheusColumn, PrometheusTable,
    TypeResolver, TypeSignature,
};
