pub mod config;
pub mod vehicle_api;
