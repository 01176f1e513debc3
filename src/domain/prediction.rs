//! Prediction records and the derived chart series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{is_known_type, Catalog};

/// Assumed stock on the current date, used as the first chart point.
pub const BASELINE_STOCK: u32 = 1000;

/// Lowest predicted amount a draw can produce.
pub const MIN_PREDICTED_AMOUNT: u32 = 500;

/// Highest predicted amount a draw can produce (inclusive).
pub const MAX_PREDICTED_AMOUNT: u32 = 1499;

/// Calendar date format used by every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form input for a new prediction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionFields {
    pub medication_name: String,
    pub medication_type: String,
    pub current_date: String,
    pub prediction_date: String,
}

impl PredictionFields {
    /// Check the fields before a record is created.
    ///
    /// A type is accepted when it is one of the selectable categories or is
    /// carried by some catalog entry.
    ///
    /// # Errors
    /// Returns every problem found, in field order.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.medication_name.trim().is_empty() {
            errors.push("Medication name is required".to_string());
        }

        if self.medication_type.is_empty() {
            errors.push("Medication type is required".to_string());
        } else if !is_known_type(&self.medication_type) && !catalog.has_type(&self.medication_type)
        {
            errors.push(format!("Unknown medication type '{}'", self.medication_type));
        }

        let current = parse_date(&self.current_date);
        if current.is_none() {
            errors.push(format!(
                "Current date '{}' is not a YYYY-MM-DD date",
                self.current_date
            ));
        }

        let predicted = parse_date(&self.prediction_date);
        if predicted.is_none() {
            errors.push(format!(
                "Prediction date '{}' is not a YYYY-MM-DD date",
                self.prediction_date
            ));
        }

        if let (Some(current), Some(predicted)) = (current, predicted) {
            if predicted < current {
                errors.push(format!(
                    "Prediction date {predicted} is earlier than current date {current}"
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// A stored forecast entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub id: String,
    pub medication_name: String,
    pub medication_type: String,
    pub current_date: String,
    pub prediction_date: String,
    pub predicted_amount: u32,
}

impl PredictionRecord {
    /// Build a record from form fields plus generated id and amount.
    #[must_use]
    pub fn from_fields(id: impl Into<String>, fields: &PredictionFields, predicted_amount: u32) -> Self {
        Self {
            id: id.into(),
            medication_name: fields.medication_name.clone(),
            medication_type: fields.medication_type.clone(),
            current_date: fields.current_date.clone(),
            prediction_date: fields.prediction_date.clone(),
            predicted_amount,
        }
    }
}

/// One labelled point on the stock chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub quantity: u32,
}

/// Two-point series: baseline stock today, predicted stock on the target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub points: [ChartPoint; 2],
}

impl ChartSeries {
    /// Derive the series for a freshly created record.
    #[must_use]
    pub fn from_record(record: &PredictionRecord) -> Self {
        Self {
            title: "Stock forecast",
            points: [
                ChartPoint {
                    label: record.current_date.clone(),
                    quantity: BASELINE_STOCK,
                },
                ChartPoint {
                    label: record.prediction_date.clone(),
                    quantity: record.predicted_amount,
                },
            ],
        }
    }

    /// Largest quantity on the series.
    #[must_use]
    pub fn max_quantity(&self) -> u32 {
        self.points[0].quantity.max(self.points[1].quantity)
    }
}
