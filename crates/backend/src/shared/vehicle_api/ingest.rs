//! Граница приёма данных от внешнего API.
//!
//! Здесь проверяется только форма ответа (массив объектов или объект);
//! содержимое записи разбирает нормализатор.

use contracts::domain::a001_vehicle::VehicleRecord;
use serde_json::Value;

use super::VehicleApiError;

/// Ключи конвертов, в которые API заворачивает список
const ENVELOPE_KEYS: &[&str] = &["data", "vehicles"];

/// Список автомобилей: голый массив либо `{ "data": [...] }` / `{ "vehicles": [...] }`.
/// Элементы, не являющиеся объектами, пропускаются.
pub fn parse_vehicle_list(body: Value) -> Result<Vec<VehicleRecord>, VehicleApiError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut obj) => {
            let key = ENVELOPE_KEYS
                .iter()
                .find(|k| obj.get(**k).map_or(false, Value::is_array))
                .ok_or_else(|| {
                    VehicleApiError::Shape("expected an array of vehicles".to_string())
                })?;
            match obj.remove(*key) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        other => {
            return Err(VehicleApiError::Shape(format!(
                "expected an array of vehicles, got {}",
                json_kind(&other)
            )))
        }
    };

    let total = items.len();
    let records: Vec<VehicleRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            if item.is_object() {
                Some(VehicleRecord::new(item))
            } else {
                tracing::warn!(
                    "Skipping vehicle #{}: expected object, got {}",
                    idx,
                    json_kind(&item)
                );
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!("Accepted {} of {} vehicles", records.len(), total);
    }

    Ok(records)
}

/// Одна запись: объект автомобиля либо `{ "data": {...} }`.
/// Конверт снимается, только если `data` единственный ключ или у объекта
/// нет `id`/`_id`; иначе `data` считается полем самой записи.
pub fn parse_vehicle(body: Value) -> Result<VehicleRecord, VehicleApiError> {
    match body {
        Value::Object(mut obj) => {
            let is_envelope = obj.get("data").map_or(false, Value::is_object)
                && (obj.len() == 1 || !(obj.contains_key("id") || obj.contains_key("_id")));
            if is_envelope {
                if let Some(inner) = obj.remove("data") {
                    return Ok(VehicleRecord::new(inner));
                }
            }
            Ok(VehicleRecord::new(Value::Object(obj)))
        }
        other => Err(VehicleApiError::Shape(format!(
            "expected a vehicle object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
