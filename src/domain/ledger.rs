//! Newest-first history of prediction records.

use super::prediction::PredictionRecord;

/// In-memory prediction history. Records are only ever added at the head.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<PredictionRecord>,
}

impl Ledger {
    /// Build a ledger from records already ordered newest-first.
    #[must_use]
    pub fn from_history(records: Vec<PredictionRecord>) -> Self {
        Self { records }
    }

    /// Add a record as the newest entry.
    pub fn prepend(&mut self, record: PredictionRecord) {
        self.records.insert(0, record);
    }

    /// Most recent record, if any.
    #[must_use]
    pub fn head(&self) -> Option<&PredictionRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> PredictionRecord {
        PredictionRecord {
            id: id.to_string(),
            medication_name: "Paracetamol".to_string(),
            medication_type: "Analgésico".to_string(),
            current_date: "2024-03-15".to_string(),
            prediction_date: "2024-06-15".to_string(),
            predicted_amount: 1000,
        }
    }

    #[test]
    fn test_prepend_orders_newest_first() {
        let mut ledger = Ledger::default();
        assert!(ledger.head().is_none());

        ledger.prepend(record("a"));
        ledger.prepend(record("b"));
        ledger.prepend(record("c"));

        let ids: Vec<&str> = ledger.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(ledger.head().map(|r| r.id.as_str()), Some("c"));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_history_is_kept_below_new_records() {
        let mut ledger = Ledger::from_history(vec![record("1"), record("2")]);
        ledger.prepend(record("3"));

        assert_eq!(ledger.records()[1], record("1"));
        assert_eq!(ledger.records()[2], record("2"));
    }
}
