//! DataFusion integration.
//!
//! Adapts the catalog client to DataFusion's catalog hierarchy:
//!
//! ```text
//! PrometheusCatalogProvider (catalog)
//! └── PrometheusSchemaProvider (the single "default" schema)
//!     └── PrometheusTableProvider (one per metric)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use datafusion::prelude::*;
//! use prometheus_catalog_client::{ClientConfig, JsonMetadataDecoder, PrometheusClient};
//! use prometheus_catalog_client::datafusion::{ArrowTypeResolver, PrometheusCatalogProvider};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = SessionContext::new();
//!
//!     let client = Arc::new(PrometheusClient::new(
//!         ClientConfig::builder("http://localhost:9090").build()?,
//!         JsonMetadataDecoder,
//!         &ArrowTypeResolver,
//!     )?);
//!
//!     ctx.register_catalog("prometheus", Arc::new(PrometheusCatalogProvider::new(client)));
//!
//!     let df = ctx.sql("SHOW TABLES FROM prometheus.\"default\"").await?;
//!     df.show().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Metadata only
//!
//! The providers expose each metric's schema; scanning sample data belongs
//! to a range-query planner, not to this crate, so `scan` returns a
//! planning error.
//!
//! # Sync-async boundary
//!
//! DataFusion's `SchemaProvider::table_names()` and `table_exist()` are
//! synchronous but may need a metadata fetch. The providers bridge the gap
//! with `tokio::runtime::Handle::try_current()` plus `block_on`, returning
//! empty results (with a logged warning) when no runtime is available. Use
//! a multi-threaded runtime. `schema_names()` and the async `table()` have
//! no such limitation.

mod catalog;
mod schema;
mod table;

pub use catalog::PrometheusCatalogProvider;
pub use schema::PrometheusSchemaProvider;
pub use table::PrometheusTableProvider;

use crate::error::Result;
use crate::types::{TypeResolver, TypeSignature};
use datafusion::arrow::datatypes::{DataType, Field, Fields, TimeUnit};
use std::sync::Arc;

/// Resolves the fixed column signatures to Arrow types.
///
/// Labels become `Map<Utf8, Utf8>`, timestamps are millisecond instants
/// with no timezone, values are `Float64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowTypeResolver;

impl TypeResolver for ArrowTypeResolver {
    type Type = DataType;

    fn resolve(&self, signature: TypeSignature) -> Result<DataType> {
        Ok(match signature {
            TypeSignature::VarcharMap => {
                let entries = Field::new(
                    "entries",
                    DataType::Struct(Fields::from(vec![
                        Field::new("keys", DataType::Utf8, false),
                        Field::new("values", DataType::Utf8, true),
                    ])),
                    false,
                );
                DataType::Map(Arc::new(entries), false)
            }
            TypeSignature::Timestamp => DataType::Timestamp(TimeUnit::Millisecond, None),
            TypeSignature::Double => DataType::Float64,
        })
    }
}
