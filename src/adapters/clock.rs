//! Clock adapter: Implementation of IdSource.
//!
//! Ids are the wall-clock time in milliseconds, bumped by one whenever the
//! clock has not advanced (or went backwards) since the previous id.

use crate::ports::IdSource;

type Clock = Box<dyn Fn() -> i64>;

/// Monotonic, clock-derived id generator.
pub struct ClockIdSource {
    clock: Clock,
    last: Option<i64>,
}

impl ClockIdSource {
    /// Use the system clock (UTC milliseconds since the epoch).
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(|| chrono::Utc::now().timestamp_millis())
    }

    /// Use a custom millisecond clock.
    #[must_use]
    pub fn with_clock(clock: impl Fn() -> i64 + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: None,
        }
    }
}

impl Default for ClockIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for ClockIdSource {
    fn next_id(&mut self) -> String {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_uses_clock_value() {
        let mut ids = ClockIdSource::with_clock(|| 1_700_000_000_000);
        assert_eq!(ids.next_id(), "1700000000000");
    }

    #[test]
    fn test_frozen_clock_still_unique() {
        let mut ids = ClockIdSource::with_clock(|| 5);
        let generated: Vec<String> = (0..3).map(|_| ids.next_id()).collect();
        assert_eq!(generated, vec!["5", "6", "7"]);
    }

    #[test]
    fn test_clock_going_backwards() {
        let now = Rc::new(Cell::new(100));
        let handle = Rc::clone(&now);
        let mut ids = ClockIdSource::with_clock(move || handle.get());

        assert_eq!(ids.next_id(), "100");
        now.set(50);
        assert_eq!(ids.next_id(), "101");
        now.set(200);
        assert_eq!(ids.next_id(), "200");
    }

    #[test]
    fn test_system_clock_ids_increase() {
        let mut ids = ClockIdSource::new();
        let a: i64 = ids.next_id().parse().expect("Numeric id");
        let b: i64 = ids.next_id().parse().expect("Numeric id");
        assert!(b > a);
    }
}
