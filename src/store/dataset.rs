//! # Seed Dataset
//!
//! The airport dataset compiled into the binary, with an optional override
//! loaded from disk. Either source is read once at startup as the store's
//! initial seed; mutations are never written back.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::errors::DatasetError;

/// Path label used for errors from the compiled-in dataset.
const EMBEDDED: &str = "<embedded>";

static SEED: &str = include_str!("../../data/airports.json");

/// Parse the dataset compiled into the binary.
pub fn load_embedded() -> Result<Vec<Value>, DatasetError> {
    parse(EMBEDDED, SEED)
}

/// Read and parse a dataset file.
pub fn load_from_path(path: &Path) -> Result<Vec<Value>, DatasetError> {
    let label = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: label.clone(),
        source,
    })?;
    parse(&label, &contents)
}

fn parse(label: &str, contents: &str) -> Result<Vec<Value>, DatasetError> {
    serde_json::from_str(contents).map_err(|source| DatasetError::Parse {
        path: label.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Airport;
    use std::io::Write;

    #[test]
    fn test_embedded_dataset_loads() {
        let records = load_embedded().unwrap();
        assert!(!records.is_empty());
    }

    #[test]
    fn test_embedded_records_are_well_formed() {
        // Every bundled record must deserialize into the typed Airport.
        for record in load_embedded().unwrap() {
            let icao = record["icao"].clone();
            let parsed: Result<Airport, _> = serde_json::from_value(record);
            assert!(parsed.is_ok(), "malformed bundled record {}", icao);
        }
    }

    #[test]
    fn test_embedded_contains_reference_airport() {
        let records = load_embedded().unwrap();
        assert!(records.iter().any(|r| r["icao"] == "00AK"));
    }

    #[test]
    fn test_fresh_store_holds_every_dataset_record() {
        let records = load_embedded().unwrap();
        let expected = records.len();
        let store = crate::store::AirportStore::new(records);
        assert_eq!(store.len().unwrap(), expected);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"icao": "KBOS", "name": "Logan"}}]"#).unwrap();

        let records = load_from_path(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["icao"], "KBOS");
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = load_from_path(Path::new("/nonexistent/airports.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }
}
