use crate::DateError;
use crate::consts::{MAX_DAY, MAX_MONTH, MIN_DAY, MIN_MONTH, MIN_YEAR};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroI64, NonZeroU8};

/// A day of the month guaranteed to be in the range `MIN_DAY..=MAX_DAY` (1..=31)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// The bound is the same for every month; a `Day` knows nothing about the
/// month or year it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "i64", into = "i64")]
#[display(fmt = "{}", _0)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's within `MIN_DAY..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDayRange` if the value is < 1 or > 31.
    pub fn new(value: i64) -> Result<Self, DateError> {
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(DateError::InvalidDayRange(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidDayRange(value))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for i64 {
    fn from(day: Day) -> Self {
        Self::from(day.get())
    }
}

/// A month value guaranteed to be in the range `MIN_MONTH..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "i64", into = "i64")]
#[display(fmt = "{}", _0)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `MIN_MONTH..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonthRange` if the value is < 1 or > 12.
    pub fn new(value: i64) -> Result<Self, DateError> {
        if !(MIN_MONTH..=MAX_MONTH).contains(&value) {
            return Err(DateError::InvalidMonthRange(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidMonthRange(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for i64 {
    fn from(month: Month) -> Self {
        Self::from(month.get())
    }
}

/// A year value guaranteed to be `>= MIN_YEAR` (1)
///
/// There is no upper bound. Years <= 0 would need a proleptic calendar,
/// which the weekday formula does not model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "i64", into = "i64")]
#[display(fmt = "{}", _0)]
pub struct Year(NonZeroI64);

impl Year {
    /// Creates a new Year, validating that it's at least `MIN_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYearRange` if the value is < 1.
    pub fn new(value: i64) -> Result<Self, DateError> {
        if value < MIN_YEAR {
            return Err(DateError::InvalidYearRange(value));
        }
        NonZeroI64::new(value)
            .map(Self)
            .ok_or(DateError::InvalidYearRange(value))
    }

    /// Returns the year value as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0.get()
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        year.get()
    }
}
