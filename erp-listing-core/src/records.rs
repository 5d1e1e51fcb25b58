//! Loading record lists fetched from the backend.
//!
//! List endpoints return a bare JSON array; anything else is rejected.

use crate::error::ListingError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn parse_records(json: &str) -> Result<Vec<Value>, ListingError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(records) => Ok(records),
        other => Err(ListingError::InvalidRecords(format!(
            "expected a JSON array, found {}",
            json_type_name(&other)
        ))),
    }
}

pub fn load_records(path: &Path) -> Result<Vec<Value>, ListingError> {
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content)?;
    info!(
        path = %path.display(),
        count = records.len(),
        "Loaded record list"
    );
    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array() {
        let records = parse_records(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array() {
        match parse_records(r#"{"detail": "Not authenticated"}"#) {
            Err(ListingError::InvalidRecords(msg)) => assert!(msg.contains("an object")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_records("[{"), Err(ListingError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_records(Path::new("/nonexistent/erp-listing/records.json"));
        assert!(matches!(result, Err(ListingError::Io(_))));
    }
}
