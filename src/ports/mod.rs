//! Ports layer: Trait definitions for external capabilities.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and its collaborators (data source, randomness,
//! clock).

mod amount_source;
mod catalog_provider;
mod id_source;

pub use amount_source::AmountSource;
pub use catalog_provider::{CatalogError, CatalogProvider};
pub use id_source::IdSource;
