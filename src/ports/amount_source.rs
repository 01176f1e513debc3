//! Amount source port: Randomness behind the mocked predicted quantity.

/// Trait for drawing predicted amounts.
///
/// Implementations must return values within
/// `[MIN_PREDICTED_AMOUNT, MAX_PREDICTED_AMOUNT]`.
pub trait AmountSource {
    /// Draw the next predicted amount.
    fn draw_amount(&mut self) -> u32;
}
