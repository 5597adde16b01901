//! Prelude module for the dtcalc crate.
//!
//! Re-exports the value types and calculator operations most callers need.

pub use crate::calculator::{
    add_days, business_days_between, consecutive_day_span, date_difference, days_until,
    new_date_with_interval,
};
pub use crate::date::{CalendarDate, DayCount};
pub use crate::error::DateError;
pub use crate::kind::DayKind;
pub use crate::span::{DateSpan, DifferenceReport};
