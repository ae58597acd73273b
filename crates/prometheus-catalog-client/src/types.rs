//! Wire types, the decoder and type-resolver seams, and table descriptors.

use crate::error::{ClientError, Result};
use serde::Deserialize;

/// A decoded metadata document fetched from the monitoring service.
///
/// Immutable once decoded; the cache shares it behind an `Arc`. The `data`
/// list preserves the order the service returned, even though the lookup
/// operations hand out sets.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataSnapshot {
    /// Status indicator: `"success"` or anything else
    pub status: String,
    /// Table names, present on success
    #[serde(default)]
    pub data: Option<Vec<String>>,
}

impl MetadataSnapshot {
    /// Whether the service reported the listing as successful.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Decodes a raw response body into a [`MetadataSnapshot`].
///
/// The wire payload belongs to the monitoring service; the client treats
/// decoding as a swappable collaborator so embedders can plug in their
/// engine's codec.
pub trait MetadataDecoder: Send + Sync {
    /// Decode the full response body.
    fn decode(&self, body: &[u8]) -> Result<MetadataSnapshot>;
}

/// Default decoder backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMetadataDecoder;

impl MetadataDecoder for JsonMetadataDecoder {
    fn decode(&self, body: &[u8]) -> Result<MetadataSnapshot> {
        serde_json::from_slice(body).map_err(|e| {
            ClientError::InvalidResponse(format!(
                "failed to parse metadata response: {} (body: {})",
                e,
                String::from_utf8_lossy(body)
            ))
        })
    }
}

/// Type signatures of the three fixed metric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSignature {
    /// Map of string label names to string label values
    VarcharMap,
    /// Sample instant, no timezone
    Timestamp,
    /// 64-bit float sample value
    Double,
}

/// Resolves the fixed column signatures into a query engine's column types.
///
/// The client never inspects the resolved type; it only stores it in the
/// descriptors it hands back, so engines keep their own type system.
pub trait TypeResolver {
    /// The engine's column type.
    type Type: Clone + Send + Sync + 'static;

    /// Resolve one signature.
    fn resolve(&self, signature: TypeSignature) -> Result<Self::Type>;
}

/// A single column of a metric table.
#[derive(Debug, Clone, PartialEq)]
pub struct PrometheusColumn<T> {
    /// Column name
    pub name: String,
    /// Resolved column type
    pub data_type: T,
}

/// A metric exposed as a table: a name plus the fixed three-column schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PrometheusTable<T> {
    /// Table (metric) name
    pub name: String,
    /// Columns, identical for every table
    pub columns: Vec<PrometheusColumn<T>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserialize_success() {
        let json = r#"{"status":"success","data":["up","cpu_usage"]}"#;
        let snapshot: MetadataSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.is_success());
        assert_eq!(
            snapshot.data,
            Some(vec!["up".to_string(), "cpu_usage".to_string()])
        );
    }

    #[test]
    fn test_snapshot_deserialize_error_status_without_data() {
        let json = r#"{"status":"error"}"#;
        let snapshot: MetadataSnapshot = serde_json::from_str(json).unwrap();
        assert!(!snapshot.is_success());
        assert!(snapshot.data.is_none());
    }

    #[test]
    fn test_snapshot_ignores_unknown_fields() {
        let json = r#"{"status":"success","data":["up"],"warnings":["noisy"]}"#;
        let snapshot: MetadataSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.is_success());
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let json = r#"{"status":"success","data":["zz","aa","mm"]}"#;
        let snapshot: MetadataSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.data.unwrap(), vec!["zz", "aa", "mm"]);
    }

    #[test]
    fn test_json_decoder_reports_body_on_failure() {
        let err = JsonMetadataDecoder.decode(b"not json").unwrap_err();
        match err {
            ClientError::InvalidResponse(msg) => assert!(msg.contains("not json")),
            other => panic!("expected InvalidResponse, got: {:?}", other),
        }
    }
}
