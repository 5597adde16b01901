use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, FRIDAY_INDEX,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::error::DateError;

/// A signed number of days, used both as a difference and as an interval.
pub type DayCount = i64;

/// A Gregorian calendar day with no time-of-day component.
///
/// Values built with [`CalendarDate::new`] are valid dates in
/// `MIN_YEAR..=MAX_YEAR`. Arithmetic may step outside that range; it saturates
/// only at the limits of [`NaiveDate`]. Display and `FromStr` cover the whole
/// representable range, writing years before 0 with a leading `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Earliest representable date.
    pub const MIN: Self = Self(NaiveDate::MIN);
    /// Latest representable date.
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for the first component that is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        Self::from_components(year, month, day)
    }

    /// Validates month and day; the year only has to fit in [`NaiveDate`].
    fn from_components(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let max_day = days_in_month(year, month).ok_or(DateError::InvalidMonth(month))?;
        if day < MIN_DAY || day > max_day {
            return Err(DateError::InvalidDay { year, month, day });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(DateError::InvalidYear(year))
    }

    /// Wraps an existing chrono date.
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying chrono date.
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn month(self) -> u8 {
        // chrono months are 1..=12
        self.0.month() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(self) -> u8 {
        // chrono days are 1..=31
        self.0.day() as u8
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Day of week with Monday as 0 and Sunday as 6.
    #[allow(clippy::cast_possible_truncation)]
    pub fn weekday_index(self) -> u8 {
        self.0.weekday().num_days_from_monday() as u8
    }

    /// Monday through Friday.
    pub fn is_business_day(self) -> bool {
        self.weekday_index() <= FRIDAY_INDEX
    }

    /// Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        !self.is_business_day()
    }

    /// Shifts by `days` calendar days, returning `None` past the representable range.
    pub fn checked_add_days(self, days: DayCount) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days < 0 {
            self.0.checked_sub_days(magnitude)
        } else {
            self.0.checked_add_days(magnitude)
        };
        shifted.map(Self)
    }

    /// Shifts by `days` calendar days; negative values move backward.
    pub fn add_days(self, days: DayCount) -> Self {
        self.checked_add_days(days)
            .unwrap_or(if days < 0 { Self::MIN } else { Self::MAX })
    }

    /// Elapsed days from `earlier` to `self`, negative if `earlier` is later.
    pub fn days_since(self, earlier: Self) -> DayCount {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Parses the day-first `DD-MM-YYYY` layout used on the command line.
    ///
    /// # Errors
    /// Returns `DateError::EmptyInput`, `DateError::InvalidFormat`, or a
    /// component error from [`CalendarDate::new`].
    pub fn parse_dmy(s: &str) -> Result<Self, DateError> {
        let parts = split_components(s)?;
        let day = parse_u8(parts[0])?;
        let month = parse_u8(parts[1])?;
        let year = parse_year(parts[2])?;
        Self::new(year, month, day)
    }

    /// Formats as `DD-MM-YYYY`.
    pub fn to_dmy_string(self) -> String {
        format!("{:02}-{:02}-{:04}", self.day(), self.month(), self.year())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl Add<DayCount> for CalendarDate {
    type Output = Self;

    fn add(self, days: DayCount) -> Self {
        self.add_days(days)
    }
}

impl Sub for CalendarDate {
    type Output = DayCount;

    fn sub(self, rhs: Self) -> DayCount {
        self.days_since(rhs)
    }
}

/// ISO `YYYY-MM-DD`, with a leading `-` for years before 0.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if year < 0 {
            write!(f, "{DATE_SEPARATOR}")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            year.unsigned_abs(),
            self.month(),
            self.day()
        )
    }
}

/// Parses the ISO `YYYY-MM-DD` layout written by `Display`.
///
/// Any year [`NaiveDate`] can hold is accepted, so every displayed date reads
/// back; [`CalendarDate::new`] is the place that enforces `MIN_YEAR..=MAX_YEAR`.
impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let parts = split_components(unsigned)?;
        let year = parse_year(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;
        Self::from_components(if negative { -year } else { year }, month, day)
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
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn split_components(s: &str) -> Result<[&str; 3], DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }
    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(DateError::InvalidFormat(format!(
            "expected 3 '{DATE_SEPARATOR}'-separated components, found {}: {trimmed}",
            parts.len()
        ))),
    }
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_year(s: &str) -> Result<i32, DateError> {
    s.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        None
    } else if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let d = date(2023, 1, 1);
        assert_eq!(d.year(), 2023);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 1);
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(9999, 12, 31).is_ok());
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(10000, 1, 1),
            Err(DateError::InvalidYear(10000))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 4, 31),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            CalendarDate::new(2023, 1, 0),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_weekday_monday_zero() {
        // 2023-01-01 was a Sunday, 2023-01-02 a Monday
        assert_eq!(date(2023, 1, 1).weekday(), Weekday::Sun);
        assert_eq!(date(2023, 1, 1).weekday_index(), 6);
        assert_eq!(date(2023, 1, 2).weekday_index(), 0);
        assert_eq!(date(2025, 10, 10).weekday_index(), 4);
    }

    #[test]
    fn test_business_day_classification() {
        assert!(date(2025, 10, 10).is_business_day()); // Friday
        assert!(date(2025, 10, 11).is_weekend()); // Saturday
        assert!(date(2025, 10, 12).is_weekend()); // Sunday
        assert!(date(2025, 10, 13).is_business_day()); // Monday
    }

    #[test]
    fn test_add_days() {
        assert_eq!(date(2023, 1, 1).add_days(5), date(2023, 1, 6));
        assert_eq!(date(2023, 1, 1).add_days(-1), date(2022, 12, 31));
        assert_eq!(date(2024, 2, 28).add_days(1), date(2024, 2, 29));
        assert_eq!(date(2023, 2, 28).add_days(1), date(2023, 3, 1));
        assert_eq!(date(2023, 1, 1) + 365, date(2024, 1, 1));
    }

    #[test]
    fn test_add_days_saturates() {
        assert_eq!(date(2023, 1, 1).add_days(DayCount::MAX), CalendarDate::MAX);
        assert_eq!(date(2023, 1, 1).add_days(DayCount::MIN), CalendarDate::MIN);
        assert!(date(2023, 1, 1).checked_add_days(DayCount::MAX).is_none());
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(date(2023, 1, 10) - date(2023, 1, 1), 9);
        assert_eq!(date(2023, 1, 1) - date(2023, 1, 10), -9);
        assert_eq!(date(2024, 3, 1).days_since(date(2024, 2, 1)), 29);
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!("2025-09-24".parse::<CalendarDate>().unwrap(), date(2025, 9, 24));
        assert_eq!(" 2025-9-4 ".parse::<CalendarDate>().unwrap(), date(2025, 9, 4));
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "2025-09".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-xx-01".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_parse_dmy() {
        assert_eq!(CalendarDate::parse_dmy("01-01-2020").unwrap(), date(2020, 1, 1));
        assert_eq!(CalendarDate::parse_dmy("10-01-2020").unwrap(), date(2020, 1, 10));
        assert!(matches!(
            CalendarDate::parse_dmy("31-04-2020"),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            CalendarDate::parse_dmy("2020-01-01"),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            CalendarDate::parse_dmy("01/01/2020"),
            Err(DateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display_formats() {
        let d = date(2025, 8, 20);
        assert_eq!(d.to_string(), "2025-08-20");
        assert_eq!(d.to_dmy_string(), "20-08-2025");
        assert_eq!(date(987, 3, 5).to_string(), "0987-03-05");
    }

    #[test]
    fn test_ordering() {
        assert!(date(2023, 1, 1) < date(2023, 1, 2));
        assert!(date(2022, 12, 31) < date(2023, 1, 1));
        assert_eq!(date(2023, 1, 1), date(2023, 1, 1));
    }

    #[test]
    fn test_serde() {
        let d = date(2025, 10, 13);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2025-10-13\"");
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
        assert!(serde_json::from_str::<CalendarDate>("\"2025-02-30\"").is_err());
    }

    #[test]
    fn test_naive_conversions() {
        let naive = NaiveDate::from_ymd_opt(2025, 9, 24).unwrap();
        let d = CalendarDate::from(naive);
        assert_eq!(d, date(2025, 9, 24));
        assert_eq!(NaiveDate::from(d), naive);
        assert_eq!(d.as_naive(), naive);
    }

    #[test]
    fn test_is_leap_year_cases() {
        let cases = [
            (2020, true, "divisible by 4"),
            (2024, true, "divisible by 4"),
            (2023, false, "not divisible by 4"),
            (1900, false, "century not divisible by 400"),
            (2100, false, "century not divisible by 400"),
            (2000, true, "divisible by 400"),
            (2400, true, "divisible by 400"),
        ];
        for (year, expected, description) in cases {
            assert_eq!(is_leap_year(year), expected, "Year {year} ({description})");
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(days_in_month(2023, month), Some(expected[month as usize]));
        }
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
    }

    #[test]
    fn test_days_in_month_rejects_out_of_range_month() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(2024, u8::MAX), None);
    }

    #[test]
    fn test_display_past_construction_range() {
        assert_eq!(date(9999, 12, 31).add_days(1).to_string(), "10000-01-01");
        assert_eq!(date(1, 1, 1).add_days(-1).to_string(), "0000-12-31");
        assert_eq!(date(1, 1, 1).add_days(-366).to_string(), "0000-01-01");
        assert_eq!(date(1, 1, 1).add_days(-367).to_string(), "-0001-12-31");
    }

    #[test]
    fn test_parse_reads_back_arithmetic_results() {
        let cases = [
            date(9999, 12, 31).add_days(1),
            date(1, 1, 1).add_days(-1),
            date(1, 1, 1).add_days(-367),
            CalendarDate::MIN,
            CalendarDate::MAX,
        ];
        for d in cases {
            let text = d.to_string();
            assert_eq!(text.parse::<CalendarDate>().unwrap(), d, "{text}");
        }
    }

    #[test]
    fn test_serde_past_construction_range() {
        for d in [date(9999, 12, 31).add_days(1), date(1, 1, 1).add_days(-1)] {
            let json = serde_json::to_string(&d).unwrap();
            let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, d, "{json}");
        }
    }

    #[test]
    fn test_new_still_enforces_year_range() {
        assert!(matches!(
            CalendarDate::new(10000, 1, 1),
            Err(DateError::InvalidYear(10000))
        ));
        assert!(matches!(
            CalendarDate::parse_dmy("01-01-10000"),
            Err(DateError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_parse_rejects_year_beyond_naive_range() {
        assert!(matches!(
            "999999-01-01".parse::<CalendarDate>(),
            Err(DateError::InvalidYear(999_999))
        ));
    }
}
