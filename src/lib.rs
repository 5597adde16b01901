//! Calendar-day and business-day arithmetic between dates.
//!
//! The core is [`calculator`]: pure functions over [`CalendarDate`] that
//! compute differences, spans and offsets, either counting every calendar
//! day or only Monday through Friday. There is no holiday calendar.
//!
//! ```
//! use dtcalc::prelude::*;
//!
//! let wednesday = CalendarDate::new(2025, 10, 1)?;
//! let friday = new_date_with_interval(wednesday, -3, DayKind::Business);
//! assert_eq!(friday.to_string(), "2025-09-26");
//! # Ok::<(), DateError>(())
//! ```

pub mod calculator;
mod consts;
mod date;
mod error;
mod kind;
pub mod prelude;
mod span;

pub use consts::*;
pub use date::{CalendarDate, DayCount, days_in_month, is_leap_year};
pub use error::DateError;
pub use kind::DayKind;
pub use span::{DateSpan, Dates, DifferenceReport};
