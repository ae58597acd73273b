//! TableProvider implementation for a single metric.
//!
//! Exposes the fixed three-column schema. Scanning sample data is the job
//! of a range-query planner, so `scan` fails with a planning error.

use crate::types::PrometheusTable;
use async_trait::async_trait;
use datafusion::arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use datafusion::catalog::Session;
use datafusion::datasource::TableProvider;
use datafusion::error::{DataFusionError, Result as DataFusionResult};
use datafusion::logical_expr::{Expr, TableType};
use datafusion::physical_plan::ExecutionPlan;
use std::any::Any;
use std::sync::Arc;

/// DataFusion table provider for one metric.
pub struct PrometheusTableProvider {
    table: PrometheusTable<DataType>,
    schema: SchemaRef,
}

impl PrometheusTableProvider {
    /// Create a provider from a table descriptor.
    pub fn new(table: PrometheusTable<DataType>) -> Self {
        let fields: Vec<Field> = table
            .columns
            .iter()
            .map(|c| Field::new(&c.name, c.data_type.clone(), true))
            .collect();
        let schema = Arc::new(Schema::new(fields));
        Self { table, schema }
    }

    /// The metric name backing this table.
    pub fn name(&self) -> &str {
        &self.table.name
    }
}

impl std::fmt::Debug for PrometheusTableProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrometheusTableProvider")
            .field("name", &self.table.name)
            .finish()
    }
}

#[async_trait]
impl TableProvider for PrometheusTableProvider {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    fn table_type(&self) -> TableType {
        TableType::Base
    }

    async fn scan(
        &self,
        _state: &dyn Session,
        _projection: Option<&Vec<usize>>,
        _filters: &[Expr],
        _limit: Option<usize>,
    ) -> DataFusionResult<Arc<dyn ExecutionPlan>> {
        Err(DataFusionError::Plan(format!(
            "metric table '{}' exposes schema metadata only; sample scanning \
             is handled by the range-query planner",
            self.table.name
        )))
    }
}
