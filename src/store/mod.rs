//! # Airport Store Module
//!
//! The authoritative in-memory record set and the dataset it is seeded
//! from. The store is the system's only state; mutations are never written
//! back to the dataset.

pub mod airport;
pub mod dataset;
pub mod errors;
pub mod store;

pub use airport::Airport;
pub use errors::{DatasetError, StoreError, StoreResult};
pub use store::AirportStore;
