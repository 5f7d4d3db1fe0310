pub mod fuel_type;
pub mod transmission_type;

pub use fuel_type::FuelType;
pub use transmission_type::TransmissionType;
