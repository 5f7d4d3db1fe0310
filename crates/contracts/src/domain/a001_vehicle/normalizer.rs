//! Приведение сырой записи автомобиля к виду для витрины
//!
//! Функция тотальна: отсутствующие или битые поля превращаются в `""`, `0`
//! или пустой список, ошибок не бывает.

use std::collections::HashSet;

use serde_json::Value;

use super::aggregate::VehicleRecord;
use super::display::{DisplayEquipment, DisplaySpecifications, VehicleDisplay};
use crate::enums::{FuelType, TransmissionType};
use crate::shared::format::format_grouped;

/// Тег оснащения → название для витрины
const FEATURE_LABELS: &[(&str, &str)] = &[
    ("gps", "GPS Navigation"),
    ("speed regulator", "Speed Regulator"),
    ("speed_regulator", "Speed Regulator"),
    ("cruise control", "Cruise Control"),
    ("cruise_control", "Cruise Control"),
    ("air conditioning", "Air Conditioning"),
    ("air_conditioning", "Air Conditioning"),
    ("climatisation", "Air Conditioning"),
    ("bluetooth", "Bluetooth"),
    ("usb", "USB"),
    ("wifi", "Wi-Fi"),
    ("apple carplay", "Apple CarPlay"),
    ("carplay", "Apple CarPlay"),
    ("android auto", "Android Auto"),
    ("rear camera", "Rear Camera"),
    ("rear_camera", "Rear Camera"),
    ("backup camera", "Rear Camera"),
    ("parking sensors", "Parking Sensors"),
    ("parking_sensors", "Parking Sensors"),
    ("heated seats", "Heated Seats"),
    ("heated_seats", "Heated Seats"),
    ("leather seats", "Leather Seats"),
    ("sunroof", "Sunroof"),
    ("keyless", "Keyless Entry"),
    ("keyless entry", "Keyless Entry"),
    ("child seat", "Child Seat"),
    ("abs", "ABS"),
];

/// Имена полей характеристик, которые иногда попадают в список опций
const SPEC_KEY_BLOCKLIST: &[&str] = &[
    "power",
    "puissance",
    "consumption",
    "consommation",
    "acceleration",
    "accel",
    "maxspeed",
    "vitesse",
    "trunk",
    "trunkcapacity",
    "coffre",
    "mileage",
    "miles",
    "doors",
    "door",
    "license",
    "licenseplate",
    "vin",
    "category",
    "engine",
];

/// Нормализация записи автомобиля для UI
pub fn normalize_vehicle_for_ui(vehicle: &VehicleRecord) -> VehicleDisplay {
    let specifications = build_specifications(vehicle);
    let equipements = build_equipements(vehicle, &specifications);

    VehicleDisplay {
        specifications,
        equipements,
    }
}

fn build_specifications(vehicle: &VehicleRecord) -> DisplaySpecifications {
    let text = |name: &str| display_text(resolve(vehicle, name));

    let transmission_code = text("transmission");
    let fuel_code = display_text(first_present([
        vehicle.field("fuelType"),
        vehicle.spec("fuelType"),
        vehicle.field("fuel"),
        vehicle.spec("fuel"),
    ]));

    DisplaySpecifications {
        marque: display_text(first_present([
            vehicle.field("make"),
            vehicle.spec("make"),
            vehicle.field("brand"),
            vehicle.spec("brand"),
        ])),
        modele: text("model"),
        annee: resolve(vehicle, "year").map(year_value).unwrap_or(0),
        couleur: text("color"),
        type_de_moteur: text("engine"),
        transmission: TransmissionType::label_for(&transmission_code),
        type_de_carburant: FuelType::label_for(&fuel_code),
        capacite: capacity_label(resolve(vehicle, "seats")),
        puissance: text("power"),
        consommation: text("consumption"),
        acceleration: text("acceleration"),
        vitesse_max: text("maxSpeed"),
        coffre: text("trunkCapacity"),
        mileage: mileage_label(vehicle),
        doors: text("doors"),
        license_plate: text("licensePlate"),
        vin: text("vin"),
        category: text("category"),
        description: text("description"),
    }
}

fn build_equipements(
    vehicle: &VehicleRecord,
    specs: &DisplaySpecifications,
) -> Vec<DisplayEquipment> {
    // Значения характеристик, продублированные в списке опций, не считаются опциями
    let spec_values: HashSet<String> = [
        &specs.puissance,
        &specs.consommation,
        &specs.acceleration,
        &specs.vitesse_max,
        &specs.coffre,
        &specs.mileage,
        &specs.license_plate,
        &specs.vin,
        &specs.category,
        &specs.type_de_moteur,
    ]
    .into_iter()
    .map(|v| v.trim().to_lowercase())
    .filter(|v| !v.is_empty())
    .collect();

    raw_features(vehicle)
        .iter()
        .filter_map(feature_tag)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| !spec_values.contains(tag))
        .filter(|tag| !SPEC_KEY_BLOCKLIST.contains(&tag.as_str()))
        .map(|tag| DisplayEquipment::available(feature_label(&tag)))
        .collect()
}

/// Первый присутствующий кандидат по порядку приоритета.
///
/// Отсутствующим считается null, пустая строка, а также массив или объект там,
/// где ожидается скаляр. Число 0 считается присутствующим.
fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a Value>>) -> Option<&'a Value> {
    candidates.into_iter().flatten().find(|v| match v {
        Value::Null | Value::Array(_) | Value::Object(_) => false,
        Value::String(s) => !s.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    })
}

/// Поле верхнего уровня, затем то же поле в `specs`
fn resolve<'a>(vehicle: &'a VehicleRecord, name: &str) -> Option<&'a Value> {
    first_present([vehicle.field(name), vehicle.spec(name)])
}

fn display_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn year_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(float_year))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_year))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Дробный год без насыщения: значения вне диапазона i64 отбрасываются
fn float_year(f: f64) -> Option<i64> {
    let f = f.trunc();
    // i64::MAX as f64 округляется до 2^63, поэтому граница строгая
    (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

/// "<n> places"; ноль мест трактуется как отсутствие значения
fn capacity_label(seats: Option<&Value>) -> String {
    match seats {
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(v @ (Value::Number(_) | Value::String(_))) => {
            format!("{} places", display_text(Some(v)))
        }
        _ => String::new(),
    }
}

/// Числовой пробег верхнего уровня форматируется ("10,000 km"),
/// остальные варианты отдаются как есть
fn mileage_label(vehicle: &VehicleRecord) -> String {
    match vehicle.field("mileage") {
        Some(Value::Number(n)) => format!("{} km", format_grouped(n)),
        _ => display_text(first_present([
            vehicle.spec("mileage"),
            vehicle.field("mileage"),
        ])),
    }
}

fn raw_features(vehicle: &VehicleRecord) -> &[Value] {
    match (vehicle.field("features"), vehicle.spec("features")) {
        (Some(Value::Array(list)), _) => list.as_slice(),
        (_, Some(Value::Array(list))) => list.as_slice(),
        _ => &[],
    }
}

fn feature_tag(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    Some(raw.trim().to_lowercase())
}

fn feature_label(tag: &str) -> String {
    FEATURE_LABELS
        .iter()
        .find(|(slug, _)| *slug == tag)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| capitalize_first(tag))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(value: Value) -> VehicleDisplay {
        normalize_vehicle_for_ui(&VehicleRecord::new(value))
    }

    fn names(display: &VehicleDisplay) -> Vec<&str> {
        display.equipements.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_record_yields_defaults() {
        let display = normalize(json!({}));
        assert_eq!(display.specifications, DisplaySpecifications::default());
        assert_eq!(display.specifications.annee, 0);
        assert_eq!(display.specifications.marque, "");
        assert!(display.equipements.is_empty());
    }

    #[test]
    fn test_non_object_record_yields_defaults() {
        for value in [json!(null), json!([1, 2]), json!("car"), json!(12)] {
            assert_eq!(normalize(value), VehicleDisplay::default());
        }
    }

    #[test]
    fn test_transmission_and_fuel_labels() {
        let display = normalize(json!({ "transmission": "MANUAL", "fuelType": "GASOLINE" }));
        assert_eq!(display.specifications.transmission, "Manuelle");
        assert_eq!(display.specifications.type_de_carburant, "Essence");

        let display = normalize(json!({ "specs": { "transmission": "manual", "fuel": "petrol" } }));
        assert_eq!(display.specifications.transmission, "Manuelle");
        assert_eq!(display.specifications.type_de_carburant, "Essence");
    }

    #[test]
    fn test_unknown_transmission_passes_through() {
        let display = normalize(json!({ "transmission": "TURBO9" }));
        assert_eq!(display.specifications.transmission, "TURBO9");
    }

    #[test]
    fn test_top_level_wins_over_specs() {
        let display = normalize(json!({ "color": "Red", "specs": { "color": "Blue" } }));
        assert_eq!(display.specifications.couleur, "Red");

        let display = normalize(json!({ "color": "", "specs": { "color": "Blue" } }));
        assert_eq!(display.specifications.couleur, "Blue");
    }

    #[test]
    fn test_brand_is_legacy_fallback_for_make() {
        let display = normalize(json!({ "brand": "Peugeot", "model": "208" }));
        assert_eq!(display.specifications.marque, "Peugeot");
        assert_eq!(display.specifications.modele, "208");

        let display = normalize(json!({ "brand": "Peugeot", "specs": { "make": "Renault" } }));
        assert_eq!(display.specifications.marque, "Renault");
    }

    #[test]
    fn test_zero_year_is_kept() {
        let display = normalize(json!({ "year": 0, "specs": { "year": 2020 } }));
        assert_eq!(display.specifications.annee, 0);

        let display = normalize(json!({ "specs": { "year": "2019" } }));
        assert_eq!(display.specifications.annee, 2019);

        let display = normalize(json!({ "year": "soon" }));
        assert_eq!(display.specifications.annee, 0);
    }

    #[test]
    fn test_out_of_range_year_is_zero() {
        assert_eq!(normalize(json!({ "year": 1e300 })).specifications.annee, 0);
        assert_eq!(normalize(json!({ "year": -1e300 })).specifications.annee, 0);
        assert_eq!(
            normalize(json!({ "year": 18446744073709551615u64 })).specifications.annee,
            0
        );
        assert_eq!(normalize(json!({ "year": "1e300" })).specifications.annee, 0);
        assert_eq!(normalize(json!({ "year": 2021.7 })).specifications.annee, 2021);
    }

    #[test]
    fn test_capacity_label() {
        assert_eq!(normalize(json!({ "seats": 5 })).specifications.capacite, "5 places");
        assert_eq!(
            normalize(json!({ "specs": { "seats": "7" } })).specifications.capacite,
            "7 places"
        );
        assert_eq!(normalize(json!({ "seats": 0 })).specifications.capacite, "");
        assert_eq!(normalize(json!({ "seats": null })).specifications.capacite, "");
    }

    #[test]
    fn test_numeric_mileage_is_formatted() {
        // Отформатированное значение не перезаписывается сырым числом
        let display = normalize(json!({ "mileage": 10000 }));
        assert_eq!(display.specifications.mileage, "10,000 km");
    }

    #[test]
    fn test_non_numeric_mileage_is_raw() {
        let display = normalize(json!({ "mileage": "12 000 km" }));
        assert_eq!(display.specifications.mileage, "12 000 km");

        let display = normalize(json!({ "mileage": "top", "specs": { "mileage": 5000 } }));
        assert_eq!(display.specifications.mileage, "5000");
    }

    #[test]
    fn test_optional_fields_from_both_shapes() {
        let display = normalize(json!({
            "power": "175 CV",
            "doors": 5,
            "specs": {
                "consumption": "5.2 L/100km",
                "maxSpeed": 220,
                "trunkCapacity": "420 L",
                "licensePlate": "AB-123-CD",
                "vin": "VF1RFB00X12345678",
                "category": "SUV",
                "description": "Compact SUV"
            }
        }));
        let s = &display.specifications;
        assert_eq!(s.puissance, "175 CV");
        assert_eq!(s.doors, "5");
        assert_eq!(s.consommation, "5.2 L/100km");
        assert_eq!(s.vitesse_max, "220");
        assert_eq!(s.coffre, "420 L");
        assert_eq!(s.license_plate, "AB-123-CD");
        assert_eq!(s.vin, "VF1RFB00X12345678");
        assert_eq!(s.category, "SUV");
        assert_eq!(s.description, "Compact SUV");
    }

    #[test]
    fn test_spec_value_collision_is_not_a_feature() {
        let display = normalize(json!({
            "power": "175 CV",
            "features": ["GPS", "Speed Regulator", "175 cv"]
        }));
        assert_eq!(names(&display), vec!["GPS Navigation", "Speed Regulator"]);
        assert!(display.equipements.iter().all(|e| e.available));
    }

    #[test]
    fn test_rendered_spec_values_are_not_features() {
        // Пробег сравнивается в отформатированном виде, сырое число остаётся опцией
        let display = normalize(json!({
            "mileage": 10000,
            "engine": "V6",
            "category": "SUV",
            "licensePlate": "AB-123-CD",
            "vin": "VF1RFB00X12345678",
            "features": [
                "10,000 km",
                "10000",
                "v6",
                "SUV",
                "ab-123-cd",
                "vf1rfb00x12345678",
                "gps",
                null,
                "",
                [1],
                { "a": 1 },
                true
            ]
        }));
        assert_eq!(display.specifications.mileage, "10,000 km");
        assert_eq!(names(&display), vec!["10000", "GPS Navigation", "True"]);
    }

    #[test]
    fn test_spec_key_names_are_dropped() {
        let display = normalize(json!({
            "features": ["power", " Mileage ", "VIN", "bluetooth", "speed_regulator"]
        }));
        assert_eq!(names(&display), vec!["Bluetooth", "Speed Regulator"]);
    }

    #[test]
    fn test_unknown_feature_is_capitalized_and_order_kept() {
        let display = normalize(json!({
            "specs": { "features": ["heated mirrors", "gps", "  ", null, 4] }
        }));
        assert_eq!(names(&display), vec!["Heated mirrors", "GPS Navigation", "4"]);
    }

    #[test]
    fn test_top_level_features_win() {
        let display = normalize(json!({
            "features": ["usb"],
            "specs": { "features": ["gps"] }
        }));
        assert_eq!(names(&display), vec!["USB"]);

        let display = normalize(json!({
            "features": "gps",
            "specs": { "features": ["gps"] }
        }));
        assert_eq!(names(&display), vec!["GPS Navigation"]);
    }

    #[test]
    fn test_empty_features() {
        let display = normalize(json!({ "make": "Fiat", "features": [] }));
        assert!(display.equipements.is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let record = VehicleRecord::new(json!({
            "make": "Tesla",
            "year": 2023,
            "fuelType": "ELECTRIC",
            "mileage": 15432,
            "features": ["Autopilot", "gps"]
        }));
        assert_eq!(
            normalize_vehicle_for_ui(&record),
            normalize_vehicle_for_ui(&record)
        );
    }
}
