//! JSON adapter: Implementation of CatalogProvider backed by a JSON document.
//!
//! Expected layout (camelCase keys, `predictions` optional):
//!
//! ```json
//! {
//!   "medications": [{ "id": "1", "name": "Paracetamol", "type": "Analgésico" }],
//!   "predictions": [{ "id": "1", "medicationName": "Paracetamol", "medicationType": "Analgésico",
//!                     "currentDate": "2024-03-15", "predictionDate": "2024-06-15",
//!                     "predictedAmount": 1000 }]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{MedicationCatalogEntry, PredictionRecord};
use crate::ports::{CatalogError, CatalogProvider};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    medications: Vec<MedicationCatalogEntry>,
    #[serde(default)]
    predictions: Vec<PredictionRecord>,
}

/// Catalog provider parsed from a JSON document.
#[derive(Debug, Clone)]
pub struct JsonCatalogProvider {
    medications: Vec<MedicationCatalogEntry>,
    predictions: Vec<PredictionRecord>,
}

impl JsonCatalogProvider {
    /// Read and parse the document at `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or fails validation.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let provider = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded {} medications and {} predictions from {}",
            provider.medications.len(),
            provider.predictions.len(),
            path.display()
        );
        Ok(provider)
    }

    /// Parse a document held in memory.
    ///
    /// # Errors
    /// Returns error on malformed JSON, an empty catalog or duplicate medication
    /// or prediction ids.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;

        if doc.medications.is_empty() {
            return Err(CatalogError::Empty);
        }

        {
            let mut seen = HashSet::with_capacity(doc.medications.len());
            for entry in &doc.medications {
                if !seen.insert(entry.id.as_str()) {
                    return Err(CatalogError::DuplicateId(entry.id.clone()));
                }
            }

            let mut seen = HashSet::with_capacity(doc.predictions.len());
            for record in &doc.predictions {
                if !seen.insert(record.id.as_str()) {
                    return Err(CatalogError::DuplicatePredictionId(record.id.clone()));
                }
            }
        }

        Ok(Self {
            medications: doc.medications,
            predictions: doc.predictions,
        })
    }
}

impl CatalogProvider for JsonCatalogProvider {
    fn load_catalog(&self) -> Result<Vec<MedicationCatalogEntry>, CatalogError> {
        Ok(self.medications.clone())
    }

    fn load_history(&self) -> Result<Vec<PredictionRecord>, CatalogError> {
        Ok(self.predictions.clone())
    }
}
