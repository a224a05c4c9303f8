//! Trail Listing Page Service
//!
//! This library backs the trail listing page of the hiking app. It builds
//! the default trail search filter, narrows it by an optional `category`
//! query parameter, runs a first-page search against the trail search
//! backend, refreshes the shared categories index, and hands
//! `{ filter, pagination }` to the view layer.
//!
//! # Modules
//!
//! - `client`: TrailApiClient for the trail search and categories backends
//! - `handlers`: axum handlers for the page-load and health endpoints
//! - `models`: filter, pagination, and category payload shapes
//! - `routes`: router assembly

pub mod client;
pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
pub mod client_mock;

// Re-export the main types for ease of use
pub use client::{RequestScope, TrailApi, TrailApiClient, TrailApiError, TrailSearchResponse};
pub use handlers::trails::AppState;
pub use routes::create_router;
