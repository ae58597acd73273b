//! SchemaProvider implementation.
//!
//! Maps each metric known to the monitoring service to a DataFusion table.

use super::table::PrometheusTableProvider;
use crate::client::{PrometheusClient, NAMESPACE};
use async_trait::async_trait;
use datafusion::arrow::datatypes::DataType;
use datafusion::catalog::SchemaProvider;
use datafusion::datasource::TableProvider;
use datafusion::error::Result as DataFusionResult;
use std::any::Any;
use std::sync::Arc;
use tokio::runtime::Handle;

/// DataFusion schema provider for the single `default` schema.
pub struct PrometheusSchemaProvider {
    client: Arc<PrometheusClient<DataType>>,
}

impl PrometheusSchemaProvider {
    /// Create a new schema provider for the given client.
    pub fn new(client: Arc<PrometheusClient<DataType>>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for PrometheusSchemaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrometheusSchemaProvider")
            .field("base_uri", &self.client.base_uri())
            .finish()
    }
}

#[async_trait]
impl SchemaProvider for PrometheusSchemaProvider {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn table_names(&self) -> Vec<String> {
        // Synchronously consult the cache using the current runtime; a
        // warm cache answers without any HTTP call.
        match Handle::try_current() {
            Ok(handle) => match handle.block_on(self.client.table_names(NAMESPACE)) {
                Ok(names) => names.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to list metric tables");
                    vec![]
                }
            },
            Err(_) => {
                tracing::warn!("No tokio runtime available for table_names");
                vec![]
            }
        }
    }

    async fn table(&self, name: &str) -> DataFusionResult<Option<Arc<dyn TableProvider>>> {
        let table = match self.client.table(NAMESPACE, name).await {
            Ok(Some(table)) => table,
            Ok(None) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(Arc::new(PrometheusTableProvider::new(table))))
    }

    fn table_exist(&self, name: &str) -> bool {
        match Handle::try_current() {
            Ok(handle) => matches!(
                handle.block_on(self.client.table(NAMESPACE, name)),
                Ok(Some(_))
            ),
            Err(_) => false,
        }
    }
}
