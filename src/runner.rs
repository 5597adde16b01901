//! Executes parsed commands against the calculator and formats the replies.

use anyhow::{Result, bail};
use tracing::debug;

use dtcalc::calculator::{date_difference, days_until, new_date_with_interval};
use dtcalc::{CalendarDate, DateSpan, DayCount};

use crate::cli::{CalcArgs, Command, DiffArgs, UntilArgs};
use crate::config::Settings;

pub struct Runner<'a> {
    settings: &'a Settings,
    /// Fixed "today"; read from the clock in the configured timezone when unset.
    today: Option<CalendarDate>,
}

impl<'a> Runner<'a> {
    pub const fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            today: None,
        }
    }

    /// Pins the date `until` counts from.
    #[cfg_attr(not(test), allow(dead_code))]
    pub const fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Runs a single non-interactive command and returns the text to print.
    pub fn execute(&self, command: &Command) -> Result<String> {
        match command {
            Command::Calc(args) => Ok(self.calc(args)),
            Command::Diff(args) => Ok(Self::diff(args)),
            Command::Until(args) => self.until(args),
            Command::Iter => bail!("already in interactive mode"),
        }
    }

    fn calc(&self, args: &CalcArgs) -> String {
        let kind = args.kind.unwrap_or(self.settings.default_kind);
        debug!(date = %args.date, interval = args.interval, %kind, "computing new date");
        let result = new_date_with_interval(args.date, args.interval, kind);
        format!("Resulting date: {}", self.describe(result))
    }

    fn diff(args: &DiffArgs) -> String {
        let days = date_difference(args.start, args.end);
        debug!(start = %args.start, end = %args.end, days, "computed difference");
        let mut reply = format!("Difference in days: {}", difference_message(days));
        if args.report && days > 0 {
            let report = DateSpan::ordered(args.start, args.end).report();
            reply.push_str(&format!(
                "\nBusiness days: {}\nWeekend days: {}",
                report.business_days, report.weekend_days
            ));
        }
        reply
    }

    fn until(&self, args: &UntilArgs) -> Result<String> {
        let today = match self.today {
            Some(today) => today,
            None => self.settings.today()?,
        };
        let days = days_until(args.date, today);
        debug!(%today, target = %args.date, days, "computed days until");
        let target = args.date.to_dmy_string();
        Ok(match days {
            0 => format!("{target} is today."),
            d if d < 0 => format!("{target} was {} days ago.", -d),
            d => format!("Days until {target}: {d}"),
        })
    }

    /// `DD-MM-YYYY -> <weekday name>`
    fn describe(&self, date: CalendarDate) -> String {
        format!(
            "{} -> {}",
            date.to_dmy_string(),
            self.settings.language.weekday_name(date.weekday())
        )
    }
}

fn difference_message(days: DayCount) -> String {
    match days {
        0 => "The dates are the same.".to_string(),
        d if d < 0 => "Start date must be before end date.".to_string(),
        d => d.to_string(),
    }
}
