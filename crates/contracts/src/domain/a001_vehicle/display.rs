use serde::{Deserialize, Serialize};

use super::aggregate::VehicleRecord;
use super::normalizer::normalize_vehicle_for_ui;

/// Характеристики автомобиля, готовые к отображению.
///
/// Все поля присутствуют всегда: пустая строка или 0 вместо отсутствующего
/// значения, чтобы UI не проверял их на null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySpecifications {
    pub marque: String,
    pub modele: String,
    pub annee: i64,
    pub couleur: String,
    pub type_de_moteur: String,
    pub transmission: String,
    pub type_de_carburant: String,
    pub capacite: String,
    pub puissance: String,
    pub consommation: String,
    pub acceleration: String,
    pub vitesse_max: String,
    pub coffre: String,
    pub mileage: String,
    pub doors: String,
    pub license_plate: String,
    pub vin: String,
    pub category: String,
    pub description: String,
}

/// Элемент оснащения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEquipment {
    pub name: String,
    /// Источник знает только о присутствующих опциях, поэтому всегда `true`
    pub available: bool,
}

impl DisplayEquipment {
    pub fn available(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDisplay {
    pub specifications: DisplaySpecifications,
    pub equipements: Vec<DisplayEquipment>,
}

/// Ответ нормализации: одна запись или пакет
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NormalizeVehicleResponse {
    Single(VehicleDisplay),
    Batch(Vec<VehicleDisplay>),
}

/// Карточка автомобиля для списков и детальной страницы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCard {
    pub id: Option<String>,
    pub title: String,
    #[serde(flatten)]
    pub display: VehicleDisplay,
}

impl VehicleCard {
    pub fn from_record(record: &VehicleRecord) -> Self {
        let display = normalize_vehicle_for_ui(record);
        Self {
            id: record.id(),
            title: card_title(&display.specifications),
            display,
        }
    }
}

/// "Марка Модель (Год)"; год опускается, если неизвестен
fn card_title(specs: &DisplaySpecifications) -> String {
    let name = format!("{} {}", specs.marque, specs.modele).trim().to_string();
    match (name.is_empty(), specs.annee) {
        (_, 0) => name,
        (true, year) => format!("({})", year),
        (false, year) => format!("{} ({})", name, year),
    }
}
