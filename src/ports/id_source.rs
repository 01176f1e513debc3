//! Id source port: Identifiers for newly created prediction records.

/// Trait for generating record identifiers.
///
/// Every id returned by one source must be distinct from the ones before it.
pub trait IdSource {
    /// Produce the next identifier.
    fn next_id(&mut self) -> String;
}
