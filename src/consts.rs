/// Earliest year accepted when constructing a date
pub const MIN_YEAR: i32 = 1;

/// Latest year accepted when constructing a date (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of any month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a common year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Length of a week in days
pub const DAYS_PER_WEEK: i64 = 7;
/// Monday through Friday
pub const BUSINESS_DAYS_PER_WEEK: i64 = 5;
/// Weekday index of Friday under the Monday=0 convention
pub const FRIDAY_INDEX: u8 = 4;

/// Date component separator, used by both `YYYY-MM-DD` and `DD-MM-YYYY`
pub const DATE_SEPARATOR: char = '-';
/// Separates the two ends of a span (`start/end`)
pub const SPAN_SEPARATOR: char = '/';
