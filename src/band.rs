use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    HORIZON_YEARS, MAX_HORIZON_YEARS, MIDDLE_AGE_UNTIL_YEARS, MONTHS_PER_YEAR, YOUTH_UNTIL_YEARS,
    prelude::*,
};

/// A half-open range of grid indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{start}..{end}")]
pub struct MonthSpan {
    start: u16,
    end:   u16,
}

/// Error type for band construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BandError {
    /// A span whose end does not lie after its start.
    #[error("Empty month span: {start}..{end}")]
    EmptySpan { start: u16, end: u16 },

    /// Stage boundaries that are not strictly increasing within the horizon.
    #[error(
        "Invalid life stage boundaries: need 0 < youth ({youth_until}) < middle age \
         ({middle_age_until}) < horizon ({horizon_years})"
    )]
    InvalidBoundaries {
        horizon_years:    u8,
        youth_until:      u8,
        middle_age_until: u8,
    },

    /// Horizon longer than any modelled life.
    #[error("Horizon of {0} years exceeds the maximum of {max}", max = MAX_HORIZON_YEARS)]
    HorizonTooLong(u8),
}

impl MonthSpan {
    /// # Errors
    /// Returns `BandError::EmptySpan` unless `start < end`.
    pub const fn new(start: u16, end: u16) -> Result<Self, BandError> {
        if start >= end {
            return Err(BandError::EmptySpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Span covering whole years of age, `from_age` inclusive to `until_age` exclusive.
    fn from_ages(from_age: u8, until_age: u8) -> Result<Self, BandError> {
        Self::new(
            u16::from(from_age) * MONTHS_PER_YEAR,
            u16::from(until_age) * MONTHS_PER_YEAR,
        )
    }

    pub const fn start(&self) -> u16 {
        self.start
    }

    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Number of months in the span (never zero)
    pub const fn len(&self) -> u16 {
        self.end - self.start
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn contains(&self, index: u16) -> bool {
        self.start <= index && index < self.end
    }

    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Share of this span already lived, as a whole percentage rounded half up.
    ///
    /// Zero when no birthdate is set or the span has not been reached yet.
    pub fn percentage_lived(&self, months_lived: u16, birthdate_set: bool) -> u8 {
        if !birthdate_set {
            return 0;
        }
        let lived = i32::from(self.end.min(months_lived)) - i32::from(self.start);
        if lived <= 0 {
            return 0;
        }
        let len = i32::from(self.len());
        let percent = (lived * 100 + len / 2) / len;
        u8::try_from(percent).unwrap_or(100)
    }
}

/// The three stages a life is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeBand {
    #[display(fmt = "youth")]
    Youth,
    #[display(fmt = "middle age")]
    MiddleAge,
    #[display(fmt = "old age")]
    OldAge,
}

impl LifeBand {
    pub const ALL: [Self; 3] = [Self::Youth, Self::MiddleAge, Self::OldAge];
}

/// Horizon split into youth, middle age and old age.
///
/// The three spans always tile `0..horizon_months()` with no gap or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BandBoundaries", into = "BandBoundaries")]
pub struct LifeBands {
    youth:      MonthSpan,
    middle_age: MonthSpan,
    old_age:    MonthSpan,
}

/// Serialized form of [`LifeBands`]: ages in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandBoundaries {
    pub horizon_years:    u8,
    pub youth_until:      u8,
    pub middle_age_until: u8,
}

impl LifeBands {
    /// # Errors
    /// Returns `BandError::HorizonTooLong` past `MAX_HORIZON_YEARS`, or
    /// `BandError::InvalidBoundaries` unless
    /// `0 < youth_until < middle_age_until < horizon_years`.
    pub fn new(horizon_years: u8, youth_until: u8, middle_age_until: u8) -> Result<Self, BandError> {
        if horizon_years > MAX_HORIZON_YEARS {
            tracing::debug!(horizon_years, "rejecting life bands: horizon too long");
            return Err(BandError::HorizonTooLong(horizon_years));
        }
        if !(0 < youth_until && youth_until < middle_age_until && middle_age_until < horizon_years) {
            tracing::debug!(
                horizon_years,
                youth_until,
                middle_age_until,
                "rejecting life bands: boundaries out of order"
            );
            return Err(BandError::InvalidBoundaries {
                horizon_years,
                youth_until,
                middle_age_until,
            });
        }

        Ok(Self {
            youth:      MonthSpan::from_ages(0, youth_until)?,
            middle_age: MonthSpan::from_ages(youth_until, middle_age_until)?,
            old_age:    MonthSpan::from_ages(middle_age_until, horizon_years)?,
        })
    }

    pub const fn span(&self, band: LifeBand) -> MonthSpan {
        match band {
            LifeBand::Youth => self.youth,
            LifeBand::MiddleAge => self.middle_age,
            LifeBand::OldAge => self.old_age,
        }
    }

    /// Every band with its span, in age order
    pub const fn spans(&self) -> [(LifeBand, MonthSpan); 3] {
        [
            (LifeBand::Youth, self.youth),
            (LifeBand::MiddleAge, self.middle_age),
            (LifeBand::OldAge, self.old_age),
        ]
    }

    /// Band containing the grid index, or `None` past the horizon
    pub fn band_of(&self, index: u16) -> Option<LifeBand> {
        self.spans()
            .into_iter()
            .find_map(|(band, span)| span.contains(index).then_some(band))
    }

    /// Total cells in the grid
    pub const fn horizon_months(&self) -> u16 {
        self.old_age.end
    }

    pub const fn boundaries(&self) -> BandBoundaries {
        BandBoundaries {
            horizon_years:    years(self.old_age.end),
            youth_until:      years(self.youth.end),
            middle_age_until: years(self.middle_age.end),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn years(months: u16) -> u8 {
    // spans are built from u8 ages, so this never truncates
    (months / MONTHS_PER_YEAR) as u8
}

impl Default for LifeBands {
    fn default() -> Self {
        let months = |years: u8| u16::from(years) * MONTHS_PER_YEAR;
        Self {
            youth:      MonthSpan {
                start: 0,
                end:   months(YOUTH_UNTIL_YEARS),
            },
            middle_age: MonthSpan {
                start: months(YOUTH_UNTIL_YEARS),
                end:   months(MIDDLE_AGE_UNTIL_YEARS),
            },
            old_age:    MonthSpan {
                start: months(MIDDLE_AGE_UNTIL_YEARS),
                end:   months(HORIZON_YEARS),
            },
        }
    }
}

impl TryFrom<BandBoundaries> for LifeBands {
    type Error = BandError;

    fn try_from(value: BandBoundaries) -> Result<Self, Self::Error> {
        Self::new(value.horizon_years, value.youth_until, value.middle_age_until)
    }
}

impl From<LifeBands> for BandBoundaries {
    fn from(bands: LifeBands) -> Self {
        bands.boundaries()
    }
}

impl fmt::Display for LifeBands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "youth {}, middle age {}, old age {}",
            self.youth, self.middle_age, self.old_age
        )
    }
}
