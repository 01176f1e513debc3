//! Mock adapter: Literal startup data standing in for a real data source.
//!
//! All data in this module is hardcoded and fictional.

use crate::domain::{MedicationCatalogEntry, PredictionRecord};
use crate::ports::{CatalogError, CatalogProvider};

/// Provider serving a fixed five-item catalog and two prior predictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalogProvider;

impl MockCatalogProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CatalogProvider for MockCatalogProvider {
    fn load_catalog(&self) -> Result<Vec<MedicationCatalogEntry>, CatalogError> {
        Ok(vec![
            MedicationCatalogEntry::new("1", "Paracetamol", "Analgésico"),
            MedicationCatalogEntry::new("2", "Ibuprofeno", "Antiinflamatorio"),
            MedicationCatalogEntry::new("3", "Amoxicilina", "Antibiótico"),
            MedicationCatalogEntry::new("4", "Omeprazol", "Antiácido"),
            MedicationCatalogEntry::new("5", "Loratadina", "Antihistamínico"),
        ])
    }

    fn load_history(&self) -> Result<Vec<PredictionRecord>, CatalogError> {
        Ok(vec![
            PredictionRecord {
                id: "1".to_string(),
                medication_name: "Paracetamol".to_string(),
                medication_type: "Analgésico".to_string(),
                current_date: "2024-03-15".to_string(),
                prediction_date: "2024-06-15".to_string(),
                predicted_amount: 1000,
            },
            PredictionRecord {
                id: "2".to_string(),
                medication_name: "Ibuprofeno".to_string(),
                medication_type: "Antiinflamatorio".to_string(),
                current_date: "2024-03-16".to_string(),
                prediction_date: "2024-06-16".to_string(),
                predicted_amount: 800,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog() {
        let catalog = MockCatalogProvider::new()
            .load_catalog()
            .expect("Should load");
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].name, "Paracetamol");
        assert_eq!(catalog[3].medication_type, "Antiácido");
    }

    #[test]
    fn test_mock_history() {
        let history = MockCatalogProvider::new()
            .load_history()
            .expect("Should load");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].predicted_amount, 1000);
        assert_eq!(history[1].predicted_amount, 800);
    }
}
