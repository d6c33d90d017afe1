use serde::Serialize;

use crate::{CalendarDate, Clock, LifeBand, LifeBands, ParseError};

/// Computes months lived, stage percentages and cell labels for a birthdate.
///
/// Every method is a pure function of its arguments. An unset birthdate
/// (`None`) yields zero months, zero percentages and empty labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeMonthsCalculator {
    bands: LifeBands,
}

/// Percent of each life stage already lived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandPercentages {
    pub youth:      u8,
    pub middle_age: u8,
    pub old_age:    u8,
}

impl BandPercentages {
    pub const fn get(&self, band: LifeBand) -> u8 {
        match band {
            LifeBand::Youth => self.youth,
            LifeBand::MiddleAge => self.middle_age,
            LifeBand::OldAge => self.old_age,
        }
    }
}

/// One dot of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    pub index:    u16,
    pub is_lived: bool,
    /// "Month Year", empty without a birthdate
    pub label:    String,
    pub band:     LifeBand,
}

/// Everything a renderer needs, computed against a single "today".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeCalendar {
    pub months_lived:     u16,
    pub band_percentages: BandPercentages,
    pub cells:            Vec<MonthCell>,
}

impl LifeCalendar {
    /// Cells already behind the birthdate's owner
    pub fn lived_cells(&self) -> impl Iterator<Item = &MonthCell> {
        self.cells.iter().filter(|cell| cell.is_lived)
    }
}

impl LifeMonthsCalculator {
    pub const fn new(bands: LifeBands) -> Self {
        Self { bands }
    }

    pub const fn bands(&self) -> &LifeBands {
        &self.bands
    }

    pub const fn horizon_months(&self) -> u16 {
        self.bands.horizon_months()
    }

    /// Whole months from the birthdate's month to `today`'s month, clamped
    /// to `0..=horizon_months()`. Day of month is not considered.
    pub fn months_lived(&self, birthdate: Option<&CalendarDate>, today: &CalendarDate) -> u16 {
        let Some(birthdate) = birthdate else {
            return 0;
        };
        let horizon = self.horizon_months();
        let elapsed = birthdate.months_until(today).clamp(0, i32::from(horizon));
        u16::try_from(elapsed).unwrap_or(horizon)
    }

    /// Percent of `band` lived, rounded half up.
    pub fn percentage_lived(&self, band: LifeBand, months_lived: u16, birthdate_set: bool) -> u8 {
        self.bands.span(band).percentage_lived(months_lived, birthdate_set)
    }

    pub fn band_percentages(&self, months_lived: u16, birthdate_set: bool) -> BandPercentages {
        BandPercentages {
            youth:      self.percentage_lived(LifeBand::Youth, months_lived, birthdate_set),
            middle_age: self.percentage_lived(LifeBand::MiddleAge, months_lived, birthdate_set),
            old_age:    self.percentage_lived(LifeBand::OldAge, months_lived, birthdate_set),
        }
    }

    /// "Month Year" of the cell at `index`, or an empty string when no
    /// birthdate is set.
    pub fn month_label(&self, index: u16, birthdate: Option<&CalendarDate>) -> String {
        birthdate.map_or_else(String::new, |birthdate| {
            birthdate.add_months(u32::from(index)).to_string()
        })
    }

    /// The cell at `index`, or `None` past the horizon.
    pub fn cell(&self, index: u16, months_lived: u16, birthdate: Option<&CalendarDate>) -> Option<MonthCell> {
        let band = self.bands.band_of(index)?;
        Some(MonthCell {
            index,
            is_lived: index < months_lived,
            label: self.month_label(index, birthdate),
            band,
        })
    }

    pub fn cells(&self, months_lived: u16, birthdate: Option<&CalendarDate>) -> Vec<MonthCell> {
        (0..self.horizon_months())
            .filter_map(|index| self.cell(index, months_lived, birthdate))
            .collect()
    }

    /// Computes the whole calendar against one fixed `today`.
    pub fn calendar(&self, birthdate: Option<&CalendarDate>, today: &CalendarDate) -> LifeCalendar {
        let months_lived = self.months_lived(birthdate, today);
        tracing::trace!(
            birthdate = ?birthdate.map(ToString::to_string),
            %today,
            months_lived,
            "computed life calendar"
        );
        LifeCalendar {
            months_lived,
            band_percentages: self.band_percentages(months_lived, birthdate.is_some()),
            cells: self.cells(months_lived, birthdate),
        }
    }

    /// Reads `clock` once and computes the calendar against that date.
    ///
    /// # Errors
    /// Propagates the clock's `ParseError` when today cannot be represented.
    pub fn calendar_now<C: Clock>(
        &self,
        birthdate: Option<&CalendarDate>,
        clock: &C,
    ) -> Result<LifeCalendar, ParseError> {
        let today = clock.today()?;
        Ok(self.calendar(birthdate, &today))
    }
}
