//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data);
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Row {
        id: i64,
        title: String,
    }

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new(vec![1, 2]);

        assert_eq!(output.data, vec![1, 2]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_wraps_data() {
        let rows = vec![Row {
            id: 1,
            title: "Buy milk".to_string(),
        }];

        let result = format_json(&rows).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"title\": \"Buy milk\""));
    }

    #[test]
    fn test_format_json_empty_vec() {
        let rows: Vec<Row> = vec![];
        let result = format_json(&rows).unwrap();

        assert!(result.contains("\"data\": []"));
    }
}
