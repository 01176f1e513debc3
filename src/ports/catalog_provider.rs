//! Catalog provider port: Source of the medication catalog and prior history.
//!
//! This trait abstracts where the startup data comes from (literal mock data,
//! a JSON document) from the application logic.

use crate::domain::{MedicationCatalogEntry, PredictionRecord};

/// Errors that can occur while loading startup data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Cannot read catalog source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate medication id: {0}")]
    DuplicateId(String),

    #[error("Duplicate prediction id: {0}")]
    DuplicatePredictionId(String),

    #[error("Catalog contains no medications")]
    Empty,
}

/// Trait for supplying the data loaded once at startup.
pub trait CatalogProvider {
    /// Load the medication catalog, in display order.
    ///
    /// # Errors
    /// Returns error if the source cannot be read or is inconsistent.
    fn load_catalog(&self) -> Result<Vec<MedicationCatalogEntry>, CatalogError>;

    /// Load previously recorded predictions, newest first.
    ///
    /// Providers without history return an empty list.
    ///
    /// # Errors
    /// Returns error if the source cannot be read.
    fn load_history(&self) -> Result<Vec<PredictionRecord>, CatalogError> {
        Ok(Vec::new())
    }
}
