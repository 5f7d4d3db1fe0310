pub mod client;
pub mod ingest;

use thiserror::Error;

pub use client::{client, initialize, VehicleApiClient};

/// Ошибки обращения к внешнему API автомобилей
#[derive(Debug, Error)]
pub enum VehicleApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Vehicle API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Vehicle not found")]
    NotFound,

    #[error("Failed to parse vehicle API JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Vehicle API client is not initialized")]
    NotInitialized,
}
