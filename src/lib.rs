mod consts;
mod prelude;
mod types;
mod weekday;
mod zeller;

pub use consts::*;
pub use types::{Day, Month, Year};
pub use weekday::{Weekday, WeekdayError, weekday_to_string};
pub use zeller::date_to_weekday;

use crate::prelude::*;
use std::str::FromStr;

/// A calendar day in the civil calendar.
///
/// Every component is range-checked on construction and the value is never
/// mutated afterwards. The day is checked against 1..=31 for every month, so
/// dates such as 31/04 are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{}", "day.get()", "month.get()", "year.get()")]
pub struct Date {
    day: Day,
    month: Month,
    year: Year,
}

/// Error returned when a date component is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid day range: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    InvalidDayRange(i64),
    #[display(fmt = "Invalid month range: {} (must be {}-{})", "_0", MIN_MONTH, MAX_MONTH)]
    InvalidMonthRange(i64),
    #[display(fmt = "Invalid year range: {} (must be at least {})", "_0", MIN_YEAR)]
    InvalidYearRange(i64),
}

impl std::error::Error for DateError {}

/// Error returned when parsing a date from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was empty or whitespace.
    #[error("Empty date string")]
    EmptyInput,

    /// Input does not have the `DD/MM/YYYY` shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Input is well formed but a component is out of range.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl Date {
    /// Creates a new date from day, month and year.
    ///
    /// Components are checked in order day, month, year; the first one out of
    /// range decides the error. The year has no upper bound other than
    /// `i64::MAX`; parsing a longer year from text fails with
    /// `ParseError::InvalidFormat`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDayRange`, `DateError::InvalidMonthRange` or
    /// `DateError::InvalidYearRange`.
    pub fn new(day: i64, month: i64, year: i64) -> Result<Self, DateError> {
        let day = Day::new(day)?;
        let month = Month::new(month)?;
        let year = Year::new(year)?;
        Ok(Self::from_parts(day, month, year))
    }

    /// Creates a new date (types are already validated)
    pub const fn from_parts(day: Day, month: Month, year: Year) -> Self {
        Self { day, month, year }
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> i64 {
        self.year.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the weekday this date falls on
    pub fn weekday(&self) -> Weekday {
        date_to_weekday(self)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Parses `DD/MM/YYYY`. Fields are plain integers, so `1/1/2000` is
    /// accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected 3 fields separated by '{DATE_SEPARATOR}', found {}: {trimmed}",
                parts.len()
            )));
        };

        let day = parse_i64(day)?;
        let month = parse_i64(month)?;
        let year = parse_i64(year)?;

        Ok(Self::new(day, month, year)?)
    }
}

/// Helper to parse a date field with better error messages
fn parse_i64(s: &str) -> Result<i64, ParseError> {
    s.parse::<i64>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(i64, i64, i64)> for Date {
    type Error = DateError;

    /// Converts a `(day, month, year)` tuple.
    fn try_from(value: (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
