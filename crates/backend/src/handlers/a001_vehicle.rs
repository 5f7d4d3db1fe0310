use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_vehicle::{NormalizeVehicleResponse, VehicleCard};
use serde_json::Value;

use crate::domain::a001_vehicle::service;
use crate::shared::vehicle_api::VehicleApiError;

fn status_for(error: &VehicleApiError) -> StatusCode {
    match error {
        VehicleApiError::NotFound => StatusCode::NOT_FOUND,
        VehicleApiError::NotInitialized => StatusCode::SERVICE_UNAVAILABLE,
        VehicleApiError::Network(_)
        | VehicleApiError::Status { .. }
        | VehicleApiError::Parse(_)
        | VehicleApiError::Shape(_) => StatusCode::BAD_GATEWAY,
    }
}

/// GET /api/vehicles
pub async fn list_all() -> Result<Json<Vec<VehicleCard>>, StatusCode> {
    match service::list_cards().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list vehicles: {}", e);
            Err(status_for(&e))
        }
    }
}

/// GET /api/vehicles/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<VehicleCard>, StatusCode> {
    let id = id.trim();
    if id.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    match service::get_card(id).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            let status = status_for(&e);
            if status == StatusCode::NOT_FOUND {
                tracing::warn!("Vehicle {} not found", id);
            } else {
                tracing::error!("Failed to get vehicle {}: {}", id, e);
            }
            Err(status)
        }
    }
}

/// POST /api/vehicles/normalize
pub async fn normalize(
    Json(payload): Json<Value>,
) -> Result<Json<NormalizeVehicleResponse>, StatusCode> {
    match service::normalize_payload(payload) {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::warn!("Rejected normalize request: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
