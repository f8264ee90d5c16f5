/// First day of a month
pub const MIN_DAY: i64 = 1;
/// Largest day accepted for any month (no per-month check)
pub const MAX_DAY: i64 = 31;

/// Month number for January
pub const MIN_MONTH: i64 = 1;
/// Month number for December
pub const MAX_MONTH: i64 = 12;

/// Earliest supported year; years <= 0 are not handled by the formula
pub const MIN_YEAR: i64 = 1;

/// Month number for March, the first month of Zeller's shifted year
pub(crate) const MARCH: i64 = 3;
/// Months added to January and February when they move to the previous year
pub(crate) const MONTHS_IN_YEAR: i64 = 12;
/// Years in a century, used to split the year into `k` and `j`
pub(crate) const YEARS_IN_CENTURY: i64 = 100;
/// Length of the week, the modulus of the congruence
pub(crate) const DAYS_IN_WEEK: i64 = 7;

/// Date component separator (`DD/MM/YYYY`)
pub const DATE_SEPARATOR: char = '/';
