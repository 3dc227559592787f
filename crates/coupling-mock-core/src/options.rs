//! Configuration options for the mock adapter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Fabricated constants the fixture answers with.
///
/// The defaults reproduce the values solver-side tests were written
/// against; override them only when a test needs a different fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockOptions {
    /// Name of the single fixture mesh.
    pub mesh_name: String,

    /// Name of the single fixture data field.
    pub data_name: String,

    /// Identifier handed out for the fixture mesh by the ID-addressed API.
    pub mesh_id: i32,

    /// Identifier handed out for the fixture data by the ID-addressed API.
    pub data_id: i32,

    /// Number of fixture vertices.
    pub vertex_count: usize,

    /// Components per vertex of the fixture data (1 = scalar, 3 = vector).
    pub data_dimensions: usize,

    /// Literal returned by version queries.
    pub version: String,

    /// Value returned by `get_max_time_step_size` and `initialize`.
    pub max_time_step_size: f64,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            mesh_name: "FakeMesh".to_string(),
            data_name: "FakeData".to_string(),
            mesh_id: 0,
            data_id: 15,
            vertex_count: 3,
            data_dimensions: 3,
            version: "dummy".to_string(),
            max_time_step_size: 1.0,
        }
    }
}

impl MockOptions {
    /// Parses options from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MockOptions::default();
        assert_eq!(options.mesh_name, "FakeMesh");
        assert_eq!(options.data_name, "FakeData");
        assert_eq!(options.mesh_id, 0);
        assert_eq!(options.data_id, 15);
        assert_eq!(options.vertex_count, 3);
        assert_eq!(options.version, "dummy");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = MockOptions::from_json_str(r#"{ "vertex_count": 5 }"#).unwrap();
        assert_eq!(options.vertex_count, 5);
        assert_eq!(options.mesh_name, "FakeMesh");
        assert_eq!(options.data_id, 15);
    }

    #[test]
    fn test_json_roundtrip() {
        let options = MockOptions {
            mesh_name: "Interface".to_string(),
            ..MockOptions::default()
        };
        let json = options.to_json_string().unwrap();
        assert_eq!(MockOptions::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_invalid_json() {
        let err = MockOptions::from_json_str("{ not json").unwrap_err();
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_missing_file() {
        let err = MockOptions::from_file("/nonexistent/coupling-mock.json").unwrap_err();
        assert!(matches!(err, crate::MockError::Io(_)));
    }
}
