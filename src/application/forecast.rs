//! Forecast service: Owns the form, catalog, ledger and chart state.
//!
//! Every user event maps to one method here. The service is the single owner
//! of application state; the TUI only reads it back for rendering.

use crate::config::SubmitPolicy;
use crate::domain::{
    Catalog, ChartSeries, Ledger, MedicationCatalogEntry, PredictionFields, PredictionRecord,
    DATE_FORMAT,
};
use crate::ports::{AmountSource, CatalogProvider, IdSource};
use crate::{MedForecastError, Result};

/// Outcome of picking a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The name resolved to a catalog entry and its type was copied.
    Resolved { medication_type: String },
    /// No catalog entry has that name; the type field was left as is.
    Unresolved,
}

/// Service for recording mocked stock predictions.
pub struct ForecastService<A, I>
where
    A: AmountSource,
    I: IdSource,
{
    catalog: Catalog,
    ledger: Ledger,
    fields: PredictionFields,
    suggestions: Vec<MedicationCatalogEntry>,
    chart: Option<ChartSeries>,
    policy: SubmitPolicy,
    amounts: A,
    ids: I,
}

impl<A, I> ForecastService<A, I>
where
    A: AmountSource,
    I: IdSource,
{
    /// Load startup data from `provider` and build the initial state.
    ///
    /// The current date defaults to today and the suggestion list starts as
    /// the whole catalog.
    ///
    /// # Errors
    /// Returns error if the provider fails.
    pub fn load<P>(
        provider: &P,
        amounts: A,
        ids: I,
        policy: SubmitPolicy,
    ) -> Result<Self>
    where
        P: CatalogProvider + ?Sized,
    {
        let catalog = Catalog::new(provider.load_catalog()?);
        let ledger = Ledger::from_history(provider.load_history()?);

        tracing::info!(
            "Loaded catalog ({} medications) and history ({} predictions), policy {:?}",
            catalog.len(),
            ledger.len(),
            policy
        );

        let fields = PredictionFields {
            current_date: chrono::Local::now()
                .date_naive()
                .format(DATE_FORMAT)
                .to_string(),
            ..PredictionFields::default()
        };

        Ok(Self {
            suggestions: catalog.entries().to_vec(),
            catalog,
            ledger,
            fields,
            chart: None,
            policy,
            amounts,
            ids,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn fields(&self) -> &PredictionFields {
        &self.fields
    }

    /// Current name suggestions.
    #[must_use]
    pub fn suggestions(&self) -> &[MedicationCatalogEntry] {
        &self.suggestions
    }

    /// Chart for the latest prediction, `None` before the first submit.
    #[must_use]
    pub fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }

    #[must_use]
    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    /// Replace the medication name and refresh the suggestions.
    pub fn input_medication_name(&mut self, value: impl Into<String>) {
        self.fields.medication_name = value.into();
        self.suggestions = self.catalog.filter(&self.fields.medication_name);
    }

    /// Pick a suggested medication by name.
    ///
    /// The name field takes `name` verbatim and the suggestions are cleared.
    /// The type is only overwritten when `name` resolves in the catalog.
    pub fn select_medication(&mut self, name: &str) -> Selection {
        self.fields.medication_name = name.to_string();
        self.suggestions.clear();

        match self.catalog.find_by_name(name) {
            Some(entry) => {
                self.fields.medication_type = entry.medication_type.clone();
                Selection::Resolved {
                    medication_type: entry.medication_type.clone(),
                }
            }
            None => {
                tracing::warn!("Selected medication '{}' not in catalog; type unchanged", name);
                Selection::Unresolved
            }
        }
    }

    pub fn set_medication_type(&mut self, value: impl Into<String>) {
        self.fields.medication_type = value.into();
    }

    pub fn set_current_date(&mut self, value: impl Into<String>) {
        self.fields.current_date = value.into();
    }

    pub fn set_prediction_date(&mut self, value: impl Into<String>) {
        self.fields.prediction_date = value.into();
    }

    /// Record a prediction from the current form fields.
    ///
    /// On success the record becomes the ledger head and the chart is
    /// rebuilt from it alone.
    ///
    /// # Errors
    /// Under `SubmitPolicy::Strict`, returns `MedForecastError::Validation`
    /// and leaves ledger and chart untouched when the fields are invalid.
    pub fn submit(&mut self) -> Result<PredictionRecord> {
        if self.policy == SubmitPolicy::Strict {
            if let Err(errors) = self.fields.validate(&self.catalog) {
                tracing::warn!("Rejected prediction: {} issue(s)", errors.len());
                return Err(MedForecastError::Validation(errors.join("; ")));
            }
        }

        let id = self.ids.next_id();
        let amount = self.amounts.draw_amount();
        let record = PredictionRecord::from_fields(id, &self.fields, amount);

        self.chart = Some(ChartSeries::from_record(&record));
        self.ledger.prepend(record.clone());

        tracing::info!(
            "Recorded prediction {} (amount {}, ledger size {})",
            record.id,
            record.predicted_amount,
            self.ledger.len()
        );

        Ok(record)
    }
}
