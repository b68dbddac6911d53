//! # Airport Store
//!
//! Ordered, in-memory collection of airport records. Insertion order is
//! preserved; every lookup is a linear scan, which is sufficient at the
//! dataset's scale.
//!
//! The read lookup (`find_by_code`) matches case-insensitively on
//! containment, while the write lookups (`replace`/`patch`/`delete`) match
//! case-sensitively on exact equality. Both are part of the public
//! contract; see DESIGN.md before changing either.

use std::sync::RwLock;

use serde_json::{Map, Value};

use super::errors::{StoreError, StoreResult};

/// The authoritative in-memory record set.
///
/// Records are raw JSON objects. The axum runtime dispatches requests
/// concurrently, so every operation holds the store lock for its full
/// duration: reads share, mutations are exclusive.
pub struct AirportStore {
    records: RwLock<Vec<Value>>,
}

impl AirportStore {
    /// Create a store seeded with the given records.
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of records currently held.
    pub fn len(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.len())
    }

    /// The full ordered sequence, unfiltered.
    pub fn find_all(&self) -> StoreResult<Vec<Value>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    /// Case-insensitive containment match against `icao`.
    ///
    /// A query matches any record whose uppercased `icao` contains the
    /// uppercased query, so `find_by_code("00ak")` and
    /// `find_by_code("00AK")` return the same set. Returns zero or more
    /// matches.
    pub fn find_by_code(&self, code: &str) -> StoreResult<Vec<Value>> {
        let needle = code.to_uppercase();
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;

        Ok(records
            .iter()
            .filter(|record| {
                icao_of(record)
                    .map(|icao| icao.to_uppercase().contains(&needle))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    /// Append a record at the end and return it.
    ///
    /// Anything other than a non-empty JSON object is rejected. Uniqueness
    /// of `icao` is not enforced.
    pub fn insert(&self, record: Value) -> StoreResult<Value> {
        match record.as_object() {
            Some(obj) if !obj.is_empty() => {}
            _ => return Err(StoreError::InvalidRecord),
        }

        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        records.push(record.clone());
        Ok(record)
    }

    /// Overwrite the first record whose `icao` equals `code` exactly,
    /// keeping its position, and return the new record.
    pub fn replace(&self, code: &str, record: Value) -> StoreResult<Value> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let idx = position_of(&records, code).ok_or_else(|| StoreError::NotFound {
            icao: code.to_string(),
        })?;

        records[idx] = record.clone();
        Ok(record)
    }

    /// Merge `partial` into the first record whose `icao` equals `code`
    /// exactly, and return the merged record.
    ///
    /// Each key of `partial` overwrites a matching field or adds a new one;
    /// fields absent from `partial` are untouched.
    pub fn patch(&self, code: &str, partial: Map<String, Value>) -> StoreResult<Value> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let idx = position_of(&records, code).ok_or_else(|| StoreError::NotFound {
            icao: code.to_string(),
        })?;

        if let Some(obj) = records[idx].as_object_mut() {
            for (key, value) in partial {
                obj.insert(key, value);
            }
        }
        Ok(records[idx].clone())
    }

    /// Remove the first record whose `icao` equals `code` exactly, and
    /// return the removed record.
    pub fn delete(&self, code: &str) -> StoreResult<Value> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let idx = position_of(&records, code).ok_or_else(|| StoreError::NotFound {
            icao: code.to_string(),
        })?;

        Ok(records.remove(idx))
    }
}

fn icao_of(record: &Value) -> Option<&str> {
    record.get("icao").and_then(Value::as_str)
}

/// Exact, case-sensitive `icao` lookup used by the write path.
fn position_of(records: &[Value], code: &str) -> Option<usize> {
    records.iter().position(|record| icao_of(record) == Some(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded_store() -> AirportStore {
        AirportStore::new(vec![
            json!({"icao": "00AK", "iata": "", "name": "Lowell Field", "city": "Anchor Point"}),
            json!({"icao": "KJFK", "iata": "JFK", "name": "John F Kennedy International Airport", "city": "New York"}),
            json!({"icao": "KLAX", "iata": "LAX", "name": "Los Angeles International Airport", "city": "Los Angeles"}),
        ])
    }

    #[test]
    fn test_find_all_returns_every_record_in_order() {
        let store = seeded_store();
        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0]["icao"], "00AK");
        assert_eq!(all[2]["icao"], "KLAX");
    }

    #[test]
    fn test_find_by_code_is_case_insensitive() {
        let store = seeded_store();
        let lower = store.find_by_code("00ak").unwrap();
        let upper = store.find_by_code("00AK").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0]["icao"], "00AK");
    }

    #[test]
    fn test_find_by_code_matches_on_containment() {
        let store = seeded_store();
        // "K" is contained in all three codes
        assert_eq!(store.find_by_code("K").unwrap().len(), 3);
        assert_eq!(store.find_by_code("jf").unwrap().len(), 1);
        assert!(store.find_by_code("ZZZZ").unwrap().is_empty());
    }

    #[test]
    fn test_insert_appends_and_echoes_record() {
        let store = seeded_store();
        let record = json!({"icao": "KSEA", "name": "Seattle Tacoma International Airport"});

        let inserted = store.insert(record.clone()).unwrap();
        assert_eq!(inserted, record);

        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all.last().unwrap(), &record);
    }

    #[test]
    fn test_insert_rejects_empty_object() {
        let store = seeded_store();
        assert_eq!(store.insert(json!({})), Err(StoreError::InvalidRecord));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_insert_rejects_non_object() {
        let store = seeded_store();
        assert_eq!(store.insert(json!("test")), Err(StoreError::InvalidRecord));
        assert_eq!(store.insert(json!(null)), Err(StoreError::InvalidRecord));
        assert_eq!(store.insert(json!([1, 2])), Err(StoreError::InvalidRecord));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_replace_overwrites_in_place() {
        let store = seeded_store();
        let replacement = json!({"icao": "KJFK", "name": "Kennedy", "city": "NYC"});

        let replaced = store.replace("KJFK", replacement.clone()).unwrap();
        assert_eq!(replaced, replacement);

        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 3);
        // position preserved
        assert_eq!(all[1], replacement);
    }

    #[test]
    fn test_replace_unknown_code_is_not_found() {
        let store = seeded_store();
        let err = store.replace("KSEA", json!({"icao": "KSEA"})).unwrap_err();
        assert_eq!(err, StoreError::NotFound { icao: "KSEA".to_string() });
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_replace_is_case_sensitive() {
        let store = seeded_store();
        let err = store.replace("kjfk", json!({"icao": "kjfk"})).unwrap_err();
        assert_eq!(err, StoreError::NotFound { icao: "kjfk".to_string() });
    }

    #[test]
    fn test_patch_merges_only_given_fields() {
        let store = seeded_store();
        let mut partial = Map::new();
        partial.insert("city".to_string(), json!("Queens"));

        let patched = store.patch("KJFK", partial).unwrap();
        assert_eq!(patched["city"], "Queens");
        assert_eq!(patched["icao"], "KJFK");
        assert_eq!(patched["iata"], "JFK");
        assert_eq!(patched["name"], "John F Kennedy International Airport");
    }

    #[test]
    fn test_patch_adds_new_fields() {
        let store = seeded_store();
        let mut partial = Map::new();
        partial.insert("runways".to_string(), json!(4));

        let patched = store.patch("KJFK", partial).unwrap();
        assert_eq!(patched["runways"], 4);

        let all = store.find_all().unwrap();
        assert_eq!(all[1]["runways"], 4);
    }

    #[test]
    fn test_patch_unknown_code_is_not_found() {
        let store = seeded_store();
        let err = store.patch("kjfk", Map::new()).unwrap_err();
        assert_eq!(err, StoreError::NotFound { icao: "kjfk".to_string() });
    }

    #[test]
    fn test_delete_removes_exactly_one_record() {
        let store = seeded_store();
        let removed = store.delete("KJFK").unwrap();
        assert_eq!(removed["icao"], "KJFK");

        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|r| r["icao"] != "KJFK"));
    }

    #[test]
    fn test_delete_unknown_code_is_not_found() {
        let store = seeded_store();
        let err = store.delete("KSEA").unwrap_err();
        assert_eq!(err, StoreError::NotFound { icao: "KSEA".to_string() });
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_delete_is_case_sensitive() {
        let store = seeded_store();
        assert!(store.delete("00ak").is_err());
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_delete_removes_first_match_only() {
        let store = AirportStore::new(vec![
            json!({"icao": "KJFK", "n": 1}),
            json!({"icao": "KJFK", "n": 2}),
        ]);
        let removed = store.delete("KJFK").unwrap();
        assert_eq!(removed["n"], 1);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_empty_store() {
        let store = AirportStore::empty();
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.find_all().unwrap().is_empty());
        assert!(store.find_by_code("00AK").unwrap().is_empty());
    }
}
