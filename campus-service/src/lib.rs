//! CampusGPT backend: proxies student questions to Gemini, serves campus
//! reference data and accepts PDF uploads.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::AppState;
