use std::iter::FusedIterator;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::calculator::{business_days_between, consecutive_day_span, weekend_days_between};
use crate::consts::SPAN_SEPARATOR;
use crate::date::{CalendarDate, DayCount};
use crate::error::DateError;

/// An ordered pair of dates, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateSpan {
    start: CalendarDate,
    end: CalendarDate,
}

/// Breakdown of the days between the two ends of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceReport {
    pub calendar_days: DayCount,
    pub business_days: DayCount,
    pub weekend_days: DayCount,
}

impl DateSpan {
    /// Creates a span, rejecting a start that falls after the end.
    ///
    /// # Errors
    /// Returns `DateError::InvertedSpan` if `start > end`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, DateError> {
        if start > end {
            return Err(DateError::InvertedSpan {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a span from two dates in either order.
    pub fn ordered(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Checks whether `date` lies within the span, both ends included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks whether the two spans share at least one date.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Elapsed calendar days from start to end.
    pub fn calendar_days(&self) -> DayCount {
        consecutive_day_span(self.start, self.end)
    }

    /// Weekdays in `[start, end)`.
    pub fn business_days(&self) -> DayCount {
        business_days_between(self.start, self.end)
    }

    /// Weekend days in `[start, end)`.
    pub fn weekend_days(&self) -> DayCount {
        weekend_days_between(self.start, self.end)
    }

    pub fn report(&self) -> DifferenceReport {
        DifferenceReport {
            calendar_days: self.calendar_days(),
            business_days: self.business_days(),
            weekend_days: self.weekend_days(),
        }
    }

    /// Iterates over every date from start to end inclusive.
    pub const fn dates(&self) -> Dates {
        Dates {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Iterator returned by [`DateSpan::dates`].
#[derive(Debug, Clone)]
pub struct Dates {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for Dates {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.checked_add_days(1)
        } else {
            None
        };
        Some(current)
    }
}

impl FusedIterator for Dates {}

/// Parses `YYYY-MM-DD/YYYY-MM-DD`.
impl FromStr for DateSpan {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(SPAN_SEPARATOR).count();
        if separator_count != 1 {
            return Err(DateError::InvalidFormat(format!(
                "expected exactly one '{SPAN_SEPARATOR}' in span, found {separator_count}: {trimmed}"
            )));
        }
        let (start, end) = trimmed.split_once(SPAN_SEPARATOR).ok_or_else(|| {
            DateError::InvalidFormat(format!("missing '{SPAN_SEPARATOR}' in span: {trimmed}"))
        })?;
        Self::new(start.parse()?, end.parse()?)
    }
}

impl Serialize for DateSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
