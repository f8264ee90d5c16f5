use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the seven days of the week.
///
/// Each variant carries a fixed code: Sunday is 0 and Saturday is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

/// Error type for weekday construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekdayError {
    /// Code outside `0..=6`.
    #[error("Invalid weekday code: {0} (must be 0-6)")]
    InvalidWeekdayCode(i64),

    /// Not the English name of a weekday.
    #[error("Invalid weekday name: {0}")]
    InvalidWeekdayName(String),
}

impl Weekday {
    /// All weekdays in code order, Sunday first.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Creates a weekday from its code (0 = Sunday ... 6 = Saturday)
    ///
    /// # Errors
    /// Returns `WeekdayError::InvalidWeekdayCode` if the code is outside `0..=6`.
    pub fn from_code(code: i64) -> Result<Self, WeekdayError> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(WeekdayError::InvalidWeekdayCode(code))
    }

    /// Returns the weekday code (0 = Sunday ... 6 = Saturday)
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the capitalized English name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Weekday {
    type Error = WeekdayError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.code()
    }
}

impl FromStr for Weekday {
    type Err = WeekdayError;

    /// Parses an English weekday name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| WeekdayError::InvalidWeekdayName(s.to_owned()))
    }
}

/// Converts a weekday to its capitalized English name.
pub fn weekday_to_string(weekday: Weekday) -> String {
    weekday.name().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_valid() {
        let expected = [
            (0, Weekday::Sunday),
            (1, Weekday::Monday),
            (2, Weekday::Tuesday),
            (3, Weekday::Wednesday),
            (4, Weekday::Thursday),
            (5, Weekday::Friday),
            (6, Weekday::Saturday),
        ];
        for (code, weekday) in expected {
            assert_eq!(Weekday::from_code(code), Ok(weekday));
            assert_eq!(i64::from(weekday.code()), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        for code in [-1, 7, 8, 100, i64::MIN, i64::MAX] {
            assert_eq!(
                Weekday::from_code(code),
                Err(WeekdayError::InvalidWeekdayCode(code)),
                "code {code} should be rejected"
            );
        }
    }

    #[test]
    fn test_codes_are_contiguous() {
        for (idx, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(day.code()), idx);
        }
    }

    #[test]
    fn test_weekday_to_string() {
        let names = [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ];
        for (code, name) in (0..).zip(names) {
            let weekday = Weekday::from_code(code).unwrap();
            assert_eq!(weekday_to_string(weekday), name);
            assert_eq!(weekday.to_string(), name);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Sunday".parse::<Weekday>(), Ok(Weekday::Sunday));
        assert_eq!("friday".parse::<Weekday>(), Ok(Weekday::Friday));
        assert_eq!(" WEDNESDAY ".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert!(matches!(
            "Funday".parse::<Weekday>(),
            Err(WeekdayError::InvalidWeekdayName(_))
        ));
        assert!("".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_try_from_and_into() {
        let weekday: Weekday = 4.try_into().unwrap();
        assert_eq!(weekday, Weekday::Thursday);
        let code: u8 = weekday.into();
        assert_eq!(code, 4);
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&Weekday::Saturday).unwrap();
        assert_eq!(json, r#""Saturday""#);
        let parsed: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Weekday::Saturday);

        let result: Result<Weekday, _> = serde_json::from_str(r#""Caturday""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            WeekdayError::InvalidWeekdayCode(9).to_string(),
            "Invalid weekday code: 9 (must be 0-6)"
        );
    }
}
