use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MONTH_NAMES, MONTHS_PER_YEAR,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(non_zero) if value <= MAX_YEAR => Ok(Self(non_zero)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether February of this year has 29 days
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar month, 1 (January) through 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Ok(Self(non_zero)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    /// Month at a zero-based offset from January, wrapping every 12 months
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_offset(offset: u32) -> Self {
        // offset % 12 + 1 always lands in 1..=12
        let value = (offset % MONTHS_PER_YEAR as u32) as u8 + 1;
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU8::MIN),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position in the year (January is 0)
    #[inline]
    pub const fn offset(self) -> u8 {
        self.0.get() - 1
    }

    /// English name, e.g. "March"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.offset() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month. Only constructible against a concrete year and month, so
/// 30 February never exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= days_in_month(year.get(), month.get()) => Ok(Self(non_zero)),
            _ => Err(invalid),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: u16) -> Year {
        Year::new(value).unwrap()
    }

    fn month(value: u8) -> Month {
        Month::new(value).unwrap()
    }

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_serde_rejects_zero() {
        let parsed: Year = serde_json::from_str("1994").unwrap();
        assert_eq!(parsed.get(), 1994);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "1994");
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month(1).name(), "January");
        assert_eq!(month(3).name(), "March");
        assert_eq!(month(12).name(), "December");
    }

    #[test]
    fn test_month_from_offset_wraps() {
        assert_eq!(Month::from_offset(0), month(1));
        assert_eq!(Month::from_offset(11), month(12));
        assert_eq!(Month::from_offset(12), month(1));
        assert_eq!(Month::from_offset(25), month(2));
    }

    #[test]
    fn test_month_offset() {
        assert_eq!(month(1).offset(), 0);
        assert_eq!(month(12).offset(), 11);
    }

    #[test]
    fn test_day_respects_month_length() {
        struct TestCase {
            year:  u16,
            month: u8,
            day:   u8,
            valid: bool,
        }

        let cases = [
            TestCase { year: 2024, month: 1, day: 31, valid: true },
            TestCase { year: 2024, month: 4, day: 31, valid: false },
            TestCase { year: 2023, month: 2, day: 29, valid: false },
            TestCase { year: 2024, month: 2, day: 29, valid: true },
            TestCase { year: 1900, month: 2, day: 29, valid: false },
            TestCase { year: 2000, month: 2, day: 29, valid: true },
            TestCase { year: 2024, month: 6, day: 0, valid: false },
        ];

        for case in &cases {
            let result = Day::new(case.day, year(case.year), month(case.month));
            assert_eq!(
                result.is_ok(),
                case.valid,
                "{}-{:02}-{:02}",
                case.year,
                case.month,
                case.day
            );
        }
    }

    #[test]
    fn test_day_error_carries_context() {
        let result = Day::new(32, year(2024), month(1));
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(year(2020).is_leap());
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for m in 1..=12u8 {
            assert_eq!(days_in_month(2023, m), expected[m as usize]);
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
