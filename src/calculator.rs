//! Calendar-day and business-day arithmetic.
//!
//! Every function here is pure and total: any pair of valid dates and any
//! interval produce a result. Inverted ranges count as zero rather than
//! failing.

use crate::consts::{BUSINESS_DAYS_PER_WEEK, DAYS_PER_WEEK, FRIDAY_INDEX};
use crate::date::{CalendarDate, DayCount};
use crate::kind::DayKind;

/// Shifts `start` by a signed number of calendar days.
pub fn add_days(start: CalendarDate, days: DayCount) -> CalendarDate {
    start.add_days(days)
}

/// Elapsed days from `start` to `end`; negative when `end` comes first.
pub fn date_difference(start: CalendarDate, end: CalendarDate) -> DayCount {
    end - start
}

/// Days from `today` until `target`; negative once `target` has passed.
pub fn days_until(target: CalendarDate, today: CalendarDate) -> DayCount {
    target - today
}

/// Calendar days between two dates, not counting `initial` itself.
///
/// Returns 0 when the dates are equal or `initial` is after `final_date`.
pub fn consecutive_day_span(initial: CalendarDate, final_date: CalendarDate) -> DayCount {
    if initial > final_date {
        return 0;
    }
    final_date - initial
}

/// Monday-to-Friday days in `[initial, final_date)`.
///
/// Equivalent to walking from `initial` toward `final_date` one day at a
/// time and counting each weekday before stepping off it. Returns 0 when
/// `initial >= final_date`.
pub fn business_days_between(initial: CalendarDate, final_date: CalendarDate) -> DayCount {
    if initial >= final_date {
        return 0;
    }
    let total = final_date - initial;
    let full_weeks = total / DAYS_PER_WEEK;
    let remainder = total % DAYS_PER_WEEK;
    let first = DayCount::from(initial.weekday_index());

    let partial: DayCount = (0..remainder)
        .filter(|offset| (first + offset) % DAYS_PER_WEEK <= DayCount::from(FRIDAY_INDEX))
        .map(|_| 1)
        .sum();

    full_weeks * BUSINESS_DAYS_PER_WEEK + partial
}

/// Saturdays and Sundays in `[initial, final_date)`; 0 for inverted ranges.
pub fn weekend_days_between(initial: CalendarDate, final_date: CalendarDate) -> DayCount {
    consecutive_day_span(initial, final_date) - business_days_between(initial, final_date)
}

/// Whether `date` falls Monday through Friday.
pub fn is_business_day(date: CalendarDate) -> bool {
    date.is_business_day()
}

/// Offsets `initial` by `interval` days counted under `kind`.
///
/// With [`DayKind::Consecutive`] this is plain calendar arithmetic. With
/// [`DayKind::Business`] the result is the date reached by stepping one day
/// at a time in the direction of `interval`, counting only Monday-to-Friday
/// landings, until `|interval|` of them have been counted. `initial` itself
/// never counts, so a zero interval returns it unchanged.
pub fn new_date_with_interval(
    initial: CalendarDate,
    interval: DayCount,
    kind: DayKind,
) -> CalendarDate {
    match kind {
        DayKind::Consecutive => add_days(initial, interval),
        DayKind::Business => shift_business_days(initial, interval),
    }
}

fn shift_business_days(initial: CalendarDate, interval: DayCount) -> CalendarDate {
    if interval == 0 {
        return initial;
    }
    let forward = interval > 0;
    let magnitude = interval.unsigned_abs();
    let per_week = BUSINESS_DAYS_PER_WEEK.unsigned_abs();

    // A walk that starts on a weekend behaves exactly like one starting on the
    // business day behind it: Friday going forward, Monday going backward.
    let weekday = initial.weekday_index();
    let anchor = match (initial.is_weekend(), forward) {
        (false, _) => initial,
        (true, true) => initial.add_days(DayCount::from(FRIDAY_INDEX) - DayCount::from(weekday)),
        (true, false) => initial.add_days(DAYS_PER_WEEK - DayCount::from(weekday)),
    };
    let anchor_weekday = u64::from(anchor.weekday_index());

    let weeks = magnitude / per_week;
    let remainder = magnitude % per_week;
    let crosses_weekend = if forward {
        anchor_weekday + remainder > u64::from(FRIDAY_INDEX)
    } else {
        remainder > anchor_weekday
    };
    let weekend_skip = if crosses_weekend { 2 } else { 0 };

    let calendar_days = weeks
        .saturating_mul(DAYS_PER_WEEK.unsigned_abs())
        .saturating_add(remainder + weekend_skip);
    let calendar_days = DayCount::try_from(calendar_days).unwrap_or(DayCount::MAX);

    if forward {
        anchor.add_days(calendar_days)
    } else {
        anchor.add_days(-calendar_days)
    }
}
