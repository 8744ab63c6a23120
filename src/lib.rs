pub mod configuration;
pub mod errors;
pub mod forms;
pub mod models;
pub mod services;
pub mod stores;
pub mod telemetry;
