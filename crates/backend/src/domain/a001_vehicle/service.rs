use contracts::domain::a001_vehicle::{
    normalize_vehicle_for_ui, NormalizeVehicleResponse, VehicleCard, VehicleRecord,
};
use serde_json::Value;

use crate::shared::vehicle_api::{self, VehicleApiError};

pub async fn list_cards() -> Result<Vec<VehicleCard>, VehicleApiError> {
    let records = vehicle_api::client()?.fetch_vehicles().await?;
    Ok(records.iter().map(VehicleCard::from_record).collect())
}

pub async fn get_card(id: &str) -> Result<VehicleCard, VehicleApiError> {
    let record = vehicle_api::client()?.fetch_vehicle(id).await?;
    Ok(VehicleCard::from_record(&record))
}

/// Нормализация присланного клиентом JSON: объект или массив объектов.
/// Элементы массива нормализуются как есть, без проверки формы.
pub fn normalize_payload(payload: Value) -> anyhow::Result<NormalizeVehicleResponse> {
    match payload {
        Value::Object(_) => Ok(NormalizeVehicleResponse::Single(normalize_vehicle_for_ui(
            &VehicleRecord::new(payload),
        ))),
        Value::Array(items) => Ok(NormalizeVehicleResponse::Batch(
            items
                .into_iter()
                .map(|item| normalize_vehicle_for_ui(&VehicleRecord::new(item)))
                .collect(),
        )),
        _ => anyhow::bail!("Expected a vehicle object or an array of vehicles"),
    }
}
