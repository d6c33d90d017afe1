//! Sources of "today".

use crate::{CalendarDate, ParseError};

/// Supplies the current date.
///
/// Read once per calendar snapshot so every derived value agrees on the same
/// month, even if the snapshot is taken just as a month turns over.
pub trait Clock {
    /// # Errors
    /// Returns a `ParseError` if the current date lies outside years 1..=9999.
    fn today(&self) -> Result<CalendarDate, ParseError>;
}

/// The local date of the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<CalendarDate, ParseError> {
        CalendarDate::try_from(chrono::Local::now().date_naive())
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> Result<CalendarDate, ParseError> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Result<CalendarDate, ParseError> {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2026, 10, 19));
        assert_eq!(clock.today(), Ok(date(2026, 10, 19)));
        assert_eq!((&clock).today(), Ok(date(2026, 10, 19)));
    }

    #[test]
    fn test_system_clock_is_in_range() {
        let today = SystemClock.today().expect("host clock should be within years 1..=9999");
        assert!(today.year().get() >= 2000);
    }
}
