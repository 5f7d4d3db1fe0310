use std::time::Duration;

use contracts::domain::a001_vehicle::VehicleRecord;
use once_cell::sync::OnceCell;
use reqwest::StatusCode;
use serde_json::Value;

use super::ingest::{parse_vehicle, parse_vehicle_list};
use super::VehicleApiError;
use crate::shared::config::VehicleApiConfig;

static API_CLIENT: OnceCell<VehicleApiClient> = OnceCell::new();

/// Создание общего клиента. Повторный вызов оставляет первый клиент.
pub fn initialize(config: &VehicleApiConfig) -> anyhow::Result<()> {
    let client = VehicleApiClient::new(config)?;
    tracing::info!("Vehicle API client initialized: {}", client.base_url());
    if API_CLIENT.set(client).is_err() {
        tracing::warn!("Vehicle API client already initialized");
    }
    Ok(())
}

pub fn client() -> Result<&'static VehicleApiClient, VehicleApiError> {
    API_CLIENT.get().ok_or(VehicleApiError::NotInitialized)
}

/// HTTP-клиент внешнего REST API автомобилей
pub struct VehicleApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl VehicleApiClient {
    pub fn new(config: &VehicleApiConfig) -> Result<Self, VehicleApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn vehicles_url(&self) -> String {
        format!("{}/vehicles", self.base_url)
    }

    fn vehicle_url(&self, id: &str) -> String {
        format!("{}/vehicles/{}", self.base_url, urlencoding::encode(id))
    }

    /// GET /vehicles
    pub async fn fetch_vehicles(&self) -> Result<Vec<VehicleRecord>, VehicleApiError> {
        let body = self.get_json(&self.vehicles_url()).await?;
        let records = parse_vehicle_list(body)?;
        tracing::debug!("Fetched {} vehicles", records.len());
        Ok(records)
    }

    /// GET /vehicles/:id
    pub async fn fetch_vehicle(&self, id: &str) -> Result<VehicleRecord, VehicleApiError> {
        let body = self.get_json(&self.vehicle_url(id)).await?;
        parse_vehicle(body)
    }

    async fn get_json(&self, url: &str) -> Result<Value, VehicleApiError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(VehicleApiError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Vehicle API request failed: {} {}", status, body);
            return Err(VehicleApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|e| {
            let preview: String = body.chars().take(500).collect();
            tracing::error!("Failed to parse vehicle API response. Error: {}", e);
            tracing::error!("Response body: {}", preview);
            VehicleApiError::Parse(e)
        })
    }
}
