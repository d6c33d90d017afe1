/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: u16 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Length of the modelled life, in years
pub const HORIZON_YEARS: u8 = 70;

/// Age at which youth ends and middle age begins
pub const YOUTH_UNTIL_YEARS: u8 = 33;

/// Age at which middle age ends and old age begins
pub const MIDDLE_AGE_UNTIL_YEARS: u8 = 55;

/// Number of cells in the default grid (70 × 12)
pub const HORIZON_MONTHS: u16 = HORIZON_YEARS as u16 * MONTHS_PER_YEAR;

/// Upper limit accepted for a configured horizon
pub const MAX_HORIZON_YEARS: u8 = 150;
