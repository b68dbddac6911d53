//! # Airport Routes
//!
//! CRUD endpoints over the airport store. Each handler is a stateless
//! translation from request to store operation to response.
//!
//! Every failure path answers 400 with a route-specific message body.
//! Not-found is 400, not 404, and both the status and the message text are
//! part of the public contract.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::store::{AirportStore, StoreError};

// ==================
// Shared State
// ==================

/// Airport state shared across handlers
pub struct AirportState {
    pub store: AirportStore,
}

impl AirportState {
    pub fn new(store: AirportStore) -> Self {
        Self { store }
    }
}

// ==================
// Airport Routes
// ==================

/// Create the airport routes
pub fn airport_routes(state: Arc<AirportState>) -> Router {
    Router::new()
        .route("/airports", get(list_airports_handler))
        .route("/airports", post(create_airport_handler))
        .route("/airports/{icao}", get(get_airport_handler))
        .route("/airports/{icao}", put(replace_airport_handler))
        .route("/airports/{icao}", patch(update_airport_handler))
        .route("/airports/{icao}", delete(delete_airport_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List every airport, unfiltered
async fn list_airports_handler(
    State(state): State<Arc<AirportState>>,
) -> Result<Json<Vec<Value>>, (StatusCode, String)> {
    let airports = state.store.find_all().map_err(internal)?;
    Ok(Json(airports))
}

/// Look up airports by code, case-insensitively on containment.
///
/// No match is a 400 with a message, not an empty array.
async fn get_airport_handler(
    State(state): State<Arc<AirportState>>,
    Path(icao): Path<String>,
) -> Result<Json<Vec<Value>>, (StatusCode, String)> {
    let matches = state.store.find_by_code(&icao).map_err(internal)?;

    if matches.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("No airport match of icao: {}", icao),
        ));
    }
    Ok(Json(matches))
}

/// Add a new airport
///
/// The body is extracted as raw JSON: non-object shapes must answer 400
/// from the store's own check, not 422 from the extractor.
async fn create_airport_handler(
    State(state): State<Arc<AirportState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, String)> {
    let created = state
        .store
        .insert(body)
        .map_err(|e| (e.status_code(), e.to_string()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the entire representation of a target airport
async fn replace_airport_handler(
    State(state): State<Arc<AirportState>>,
    Path(icao): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let replaced = state
        .store
        .replace(&icao, body)
        .map_err(|e| (e.status_code(), e.to_string()))?;

    Ok(Json(replaced))
}

/// Merge a partial record into a target airport
async fn update_airport_handler(
    State(state): State<Arc<AirportState>>,
    Path(icao): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let partial = body.as_object().cloned().unwrap_or_default();

    let updated = state.store.patch(&icao, partial).map_err(|e| match e {
        StoreError::NotFound { icao } => (
            StatusCode::BAD_REQUEST,
            format!("ID: {} does not match an airport", icao),
        ),
        other => (other.status_code(), other.to_string()),
    })?;

    Ok(Json(updated))
}

/// Delete an airport from the collection
async fn delete_airport_handler(
    State(state): State<Arc<AirportState>>,
    Path(icao): Path<String>,
) -> Result<String, (StatusCode, String)> {
    state.store.delete(&icao).map_err(|e| match e {
        StoreError::NotFound { icao } => (
            StatusCode::BAD_REQUEST,
            format!("Could not find airport with ICAO: {}", icao),
        ),
        other => (other.status_code(), other.to_string()),
    })?;

    Ok(format!("Airport with ICAO: {} deleted", icao))
}

fn internal(e: StoreError) -> (StatusCode, String) {
    (e.status_code(), e.to_string())
}
