pub mod aggregate;
pub mod display;
pub mod normalizer;

pub use aggregate::VehicleRecord;
pub use display::{
    DisplayEquipment, DisplaySpecifications, NormalizeVehicleResponse, VehicleCard, VehicleDisplay,
};
pub use normalizer::normalize_vehicle_for_ui;
