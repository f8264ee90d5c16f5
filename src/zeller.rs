//! Day-of-week calculation with Zeller's congruence.
//!
//! <https://en.wikipedia.org/wiki/Zeller%27s_congruence>

use crate::consts::{DAYS_IN_WEEK, MARCH, MONTHS_IN_YEAR, YEARS_IN_CENTURY};
use crate::{Date, Weekday};

/// Returns the weekday on which `date` falls in the Gregorian calendar.
///
/// Closed-form arithmetic, no tables. Days past the end of a short month
/// (e.g. 31/04) land on the weekday of the matching day in the next month.
pub fn date_to_weekday(date: &Date) -> Weekday {
    let code = zeller_code(
        i64::from(date.day()),
        i64::from(date.month()),
        date.year(),
    );
    match Weekday::from_code(code) {
        Ok(weekday) => weekday,
        Err(err) => unreachable!("weekday code reduced mod 7 out of range: {err}"),
    }
}

/// Weekday code (0 = Sunday) of a validated day/month/year triple.
fn zeller_code(day: i64, month: i64, year: i64) -> i64 {
    // January and February count as months 13 and 14 of the previous year
    let (m, y) = if month < MARCH {
        (month + MONTHS_IN_YEAR, year - 1)
    } else {
        (month, year)
    };

    let k = y.rem_euclid(YEARS_IN_CENTURY);
    let j = y.div_euclid(YEARS_IN_CENTURY);

    // 0 = Saturday
    let h = (day + (13 * (m + 1)).div_euclid(5) + k + k.div_euclid(4) + j.div_euclid(4)
        - 2 * j)
        .rem_euclid(DAYS_IN_WEEK);

    // rotate to 0 = Sunday
    (h + 6).rem_euclid(DAYS_IN_WEEK)
}
