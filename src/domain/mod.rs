//! Domain layer: Core business types and logic.
//!
//! Pure types with no I/O. The catalog filter and the prediction ledger
//! live here; everything else orchestrates them.

mod catalog;
mod ledger;
mod prediction;

pub use catalog::{filter_catalog, is_known_type, Catalog, MedicationCatalogEntry, MEDICATION_TYPES};
pub use ledger::Ledger;
pub use prediction::{
    ChartPoint, ChartSeries, PredictionFields, PredictionRecord, BASELINE_STOCK, DATE_FORMAT,
    MAX_PREDICTED_AMOUNT, MIN_PREDICTED_AMOUNT,
};
