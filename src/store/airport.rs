//! # Airport Record
//!
//! The typed airport record. The store itself holds raw JSON objects so
//! that partial updates can introduce fields the dataset never carried;
//! this struct types the bundled dataset and the generated API docs.

use serde::{Deserialize, Serialize};

/// A single airport's attribute set.
///
/// `icao` is the lookup key. It should be unique within a dataset, though
/// uniqueness is not enforced on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub icao: String,
    #[serde(default)]
    pub iata: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub country: String,
    pub elevation: i64,
    pub lat: f64,
    pub lon: f64,
    pub tz: String,
}

impl Airport {
    /// Field names and JSON schema types, in dataset order.
    ///
    /// Used by the docs generator to describe the Airport schema.
    pub const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("icao", "string"),
        ("iata", "string"),
        ("name", "string"),
        ("city", "string"),
        ("state", "string"),
        ("country", "string"),
        ("elevation", "integer"),
        ("lat", "number"),
        ("lon", "number"),
        ("tz", "string"),
    ];
}
