//! # medforecast
//!
//! Terminal form for recording mocked medication stock predictions.
//!
//! This crate provides:
//! - A case-insensitive medication-name filter over a fixed catalog
//! - An in-memory, newest-first ledger of predictions with random amounts
//! - Terminal UI with a form, a two-point stock chart and a history table
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (catalog, prediction records, ledger)
//! - `ports`: Trait definitions for injected capabilities
//! - `adapters`: Concrete implementations (mock/JSON data, ChaCha20, clock)
//! - `application`: The state container driven by user events
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{ChartSeries, MedicationCatalogEntry, PredictionRecord};

/// Result type for medforecast operations
pub type Result<T> = std::result::Result<T, MedForecastError>;

/// Main error type for medforecast
#[derive(Debug, thiserror::Error)]
pub enum MedForecastError {
    #[error("Catalog loading failed: {0}")]
    Catalog(#[from] ports::CatalogError),

    #[error("Invalid prediction: {0}")]
    Validation(String),
}
