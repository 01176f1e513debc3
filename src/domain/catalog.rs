//! Medication catalog types and the name filter.
//!
//! The catalog is loaded once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Closed list of medication categories offered by the type selector.
///
/// The catalog itself may reference categories outside this list.
pub const MEDICATION_TYPES: [&str; 10] = [
    "Analgésico",
    "Antiinflamatorio",
    "Antibiótico",
    "Antidepresivo",
    "Antihipertensivo",
    "Antihistamínico",
    "Antidiabético",
    "Anticoagulante",
    "Antiviral",
    "Anticonvulsivo",
];

/// Whether `label` is one of the selectable medication categories.
#[must_use]
pub fn is_known_type(label: &str) -> bool {
    MEDICATION_TYPES.contains(&label)
}

/// A known medication used for name completion and type lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationCatalogEntry {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Category label
    #[serde(rename = "type")]
    pub medication_type: String,
}

impl MedicationCatalogEntry {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        medication_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            medication_type: medication_type.into(),
        }
    }
}

/// Return every entry whose name contains `query`, ignoring case.
///
/// Catalog order is preserved and an empty query yields the whole catalog.
#[must_use]
pub fn filter_catalog(
    catalog: &[MedicationCatalogEntry],
    query: &str,
) -> Vec<MedicationCatalogEntry> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Immutable medication catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<MedicationCatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<MedicationCatalogEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[MedicationCatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filter entries by a case-insensitive name substring.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<MedicationCatalogEntry> {
        filter_catalog(&self.entries, query)
    }

    /// Find the first entry whose name matches `name` exactly.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&MedicationCatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Whether any entry carries the given category label.
    #[must_use]
    pub fn has_type(&self, medication_type: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.medication_type == medication_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            MedicationCatalogEntry::new("1", "Paracetamol", "Analgésico"),
            MedicationCatalogEntry::new("2", "Ibuprofeno", "Antiinflamatorio"),
            MedicationCatalogEntry::new("3", "Amoxicilina", "Antibiótico"),
            MedicationCatalogEntry::new("4", "Omeprazol", "Antiácido"),
            MedicationCatalogEntry::new("5", "Loratadina", "Antihistamínico"),
        ])
    }

    fn names(entries: &[MedicationCatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_filter_prefix() {
        let catalog = sample_catalog();
        let result = catalog.filter("Ibu");
        assert_eq!(
            result,
            vec![MedicationCatalogEntry::new("2", "Ibuprofeno", "Antiinflamatorio")]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(names(&catalog.filter("PARA")), vec!["Paracetamol"]);
        assert_eq!(names(&catalog.filter("oMePr")), vec!["Omeprazol"]);
    }

    #[test]
    fn test_filter_substring_keeps_catalog_order() {
        let catalog = sample_catalog();
        // "ol" appears in Paracetamol and Omeprazol
        assert_eq!(names(&catalog.filter("ol")), vec!["Paracetamol", "Omeprazol"]);
        // "a" matches everything, still in catalog order
        assert_eq!(
            names(&catalog.filter("a")),
            vec!["Paracetamol", "Amoxicilina", "Omeprazol", "Loratadina"]
        );
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.filter(""), catalog.entries().to_vec());
    }

    #[test]
    fn test_filter_no_match() {
        let catalog = sample_catalog();
        assert!(catalog.filter("zzz").is_empty());
        assert!(filter_catalog(&[], "para").is_empty());
    }

    #[test]
    fn test_filter_non_ascii_case() {
        let catalog = Catalog::new(vec![MedicationCatalogEntry::new(
            "9",
            "Ácido Fólico",
            "Vitamina",
        )]);
        assert_eq!(catalog.filter("ácido").len(), 1);
        assert_eq!(catalog.filter("FÓL").len(), 1);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.find_by_name("Omeprazol").map(|e| e.medication_type.as_str()),
            Some("Antiácido")
        );
        assert!(catalog.find_by_name("omeprazol").is_none());
        assert!(catalog.find_by_name("Omep").is_none());
    }

    #[test]
    fn test_known_types() {
        assert_eq!(MEDICATION_TYPES.len(), 10);
        assert!(is_known_type("Antiviral"));
        assert!(!is_known_type("Antiácido"));

        let catalog = sample_catalog();
        assert!(catalog.has_type("Antiácido"));
        assert!(!catalog.has_type("Antiviral"));
    }

    #[test]
    fn test_entry_serializes_type_key() {
        let entry = MedicationCatalogEntry::new("1", "Paracetamol", "Analgésico");
        let json = serde_json::to_value(&entry).expect("Should serialize");
        assert_eq!(json["type"], "Analgésico");
    }
}
