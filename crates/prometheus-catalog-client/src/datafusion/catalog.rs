//! CatalogProvider implementation.

use super::schema::PrometheusSchemaProvider;
use crate::client::{PrometheusClient, NAMESPACE};
use datafusion::arrow::datatypes::DataType;
use datafusion::catalog::{CatalogProvider, SchemaProvider};
use std::any::Any;
use std::sync::Arc;

/// DataFusion catalog backed by one Prometheus endpoint.
///
/// The catalog always contains exactly one schema, `default`; listing it
/// never touches the network.
pub struct PrometheusCatalogProvider {
    client: Arc<PrometheusClient<DataType>>,
}

impl PrometheusCatalogProvider {
    /// Create a new catalog provider with the given client.
    pub fn new(client: Arc<PrometheusClient<DataType>>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for PrometheusCatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrometheusCatalogProvider")
            .field("base_uri", &self.client.base_uri())
            .finish()
    }
}

impl CatalogProvider for PrometheusCatalogProvider {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn schema_names(&self) -> Vec<String> {
        self.client.schema_names().into_iter().collect()
    }

    fn schema(&self, name: &str) -> Option<Arc<dyn SchemaProvider>> {
        if name != NAMESPACE {
            return None;
        }
        Some(Arc::new(PrometheusSchemaProvider::new(self.client.clone())))
    }
}
