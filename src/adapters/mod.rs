//! Adapters layer: Concrete implementations of ports.
//!
//! - `mock`: literal catalog and history
//! - `json`: catalog and history read from a JSON document
//! - `rng`: ChaCha20 predicted-amount source
//! - `clock`: wall-clock id generator

pub mod clock;
pub mod json;
pub mod mock;
pub mod rng;

pub use clock::ClockIdSource;
pub use json::JsonCatalogProvider;
pub use mock::MockCatalogProvider;
pub use rng::ChaChaAmountSource;
