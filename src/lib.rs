//! Month-granular life calendar.
//!
//! Given an optional birthdate and today's date, [`LifeMonthsCalculator`]
//! works out how many months of a 70-year horizon have been lived, how much of
//! each life stage (youth, middle age, old age) is spent, and which calendar
//! month each of the 840 grid cells stands for.

mod band;
mod calculator;
mod clock;
mod consts;
mod prelude;
mod types;

pub use band::{BandBoundaries, BandError, LifeBand, LifeBands, MonthSpan};
pub use calculator::{BandPercentages, LifeCalendar, LifeMonthsCalculator, MonthCell};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::Datelike;
use std::str::FromStr;

/// A fully specified Gregorian date between 0001-01-01 and 9999-12-31.
///
/// Fields are ordered year, month, day, so the derived ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// A month of a specific year, as shown on a grid cell's label.
///
/// The year is unbounded so that labels near the end of a late birthdate's
/// horizon never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{} {}", "month.name()", year)]
pub struct YearMonth {
    year:  u32,
    month: Month,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Year out of supported range: {_0}")]
    YearOutOfRange(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from typed components, re-checking the day against the
    /// given month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Reads the value of a date-picker field.
    ///
    /// Empty or unparseable input is treated as "no birthdate yet" rather than
    /// as an error.
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        match input.parse::<Self>() {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::debug!(input, error = %err, "ignoring unparseable date input");
                None
            },
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// The month this date falls in.
    pub fn year_month(&self) -> YearMonth {
        self.add_months(0)
    }

    /// Whole calendar months from `self` to `later`, ignoring the day of
    /// month. Negative when `later` is in an earlier month.
    pub fn months_until(&self, later: &Self) -> i32 {
        let years = i32::from(later.year.get()) - i32::from(self.year.get());
        let months = i32::from(later.month.get()) - i32::from(self.month.get());
        years * i32::from(MONTHS_PER_YEAR) + months
    }

    /// The month `months` after this date's month, rolling over into later
    /// years as needed.
    pub fn add_months(&self, months: u32) -> YearMonth {
        let per_year = u32::from(MONTHS_PER_YEAR);
        let total = u32::from(self.year.get()) * per_year + u32::from(self.month.offset()) + months;
        YearMonth {
            year:  total / per_year,
            month: Month::from_offset(total),
        }
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl YearMonth {
    pub const fn year(&self) -> u32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses ISO 8601 `YYYY-MM-DD`, the value format of HTML date inputs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = Self::parse_u16(year)?;
                let month = Self::parse_u8(month)?;
                let day = Self::parse_u8(day)?;
                Self::new(year, month, day)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            ))),
        }
    }
}

impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| ParseError::YearOutOfRange(date.year()))?;
        // chrono guarantees month in 1..=12 and day in 1..=31
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("test date should be valid")
    }
}
