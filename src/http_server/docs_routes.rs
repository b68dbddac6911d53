//! # API Docs Routes
//!
//! Serves a generated OpenAPI 3.0 document describing the airport
//! endpoints. The document is assembled in code from the route table and
//! the airport field list; there is no external spec file.

use axum::{routing::get, Json, Router};
use serde_json::{json, Map, Value};

use crate::store::Airport;

/// Create the docs routes
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs", get(api_docs_handler))
}

/// Serve the generated OpenAPI document
async fn api_docs_handler() -> Json<Value> {
    Json(openapi_document())
}

/// Build the OpenAPI 3.0 document for the airport API
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "aerodex",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "CRUD operations over an in-memory collection of airports",
        },
        "tags": [
            { "name": "Airports", "description": "Airport management" }
        ],
        "paths": {
            "/airports": {
                "get": {
                    "tags": ["Airports"],
                    "summary": "Returns a list of all airports",
                    "responses": {
                        "200": {
                            "description": "An array of JSON objects that represent each airport",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Airport" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "tags": ["Airports"],
                    "summary": "Add a new airport",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Airport" }
                            }
                        }
                    },
                    "responses": {
                        "201": { "description": "New airport created" },
                        "400": { "description": "Request body is empty or not an object" }
                    }
                }
            },
            "/airports/{icao}": {
                "parameters": [icao_parameter()],
                "get": {
                    "tags": ["Airports"],
                    "summary": "Return airports matching a code, case-insensitively",
                    "responses": {
                        "200": {
                            "description": "An array of matching airports",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Airport" }
                                    }
                                }
                            }
                        },
                        "400": { "description": "No airport matches the given code" }
                    }
                },
                "put": {
                    "tags": ["Airports"],
                    "summary": "Replace the entire representation of a target airport",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Airport" }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Target airport replaced" },
                        "400": { "description": "No airport with the given code" }
                    }
                },
                "patch": {
                    "tags": ["Airports"],
                    "summary": "Merge a partial record into a target airport",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Airport" }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Target fields of the target airport replaced" },
                        "400": { "description": "No airport with the given code" }
                    }
                },
                "delete": {
                    "tags": ["Airports"],
                    "summary": "Delete an airport from the collection of airports",
                    "responses": {
                        "200": { "description": "Specified airport has been deleted" },
                        "400": { "description": "No airport with the given code" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Airport": airport_schema()
            }
        }
    })
}

fn icao_parameter() -> Value {
    json!({
        "in": "path",
        "name": "icao",
        "required": true,
        "description": "Unique airport ID",
        "schema": { "type": "string" }
    })
}

/// Describe the Airport schema from the typed record's field list
fn airport_schema() -> Value {
    let mut properties = Map::new();
    for (name, ty) in Airport::FIELDS {
        properties.insert((*name).to_string(), json!({ "type": ty }));
    }

    json!({
        "type": "object",
        "properties": properties
    })
}
