//! Upcoming-birthday window
//!
//! A window is an inclusive date range `from ..= to`. Stored birthdays are
//! either compared by calendar month/day (recurring yearly) or by full date.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a stored birthday is compared against the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthdayMatch {
    /// Month and day only, so a 1990 birthday matches this year's date
    #[default]
    Calendar,
    /// Full date between `from` and `to`
    ExactDate,
}

/// Inclusive date range used by the upcoming-birthdays query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub mode: BirthdayMatch,
}

impl BirthdayWindow {
    /// Window covering `today` through `today + days`
    pub fn starting(today: NaiveDate, days: u32, mode: BirthdayMatch) -> Self {
        let to = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        Self {
            from: today,
            to,
            mode,
        }
    }

    /// Distinct `(month, day)` pairs covered by the window
    ///
    /// A 29 February birthday is celebrated on 28 February in common years,
    /// so Feb 29 is added when a common-year Feb 28 is covered.
    pub fn month_days(&self) -> BTreeSet<(u32, u32)> {
        let mut out = BTreeSet::new();
        for date in self.from.iter_days().take_while(|d| *d <= self.to) {
            out.insert((date.month(), date.day()));
            if date.month() == 2 && date.day() == 28 && !is_leap_year(date.year()) {
                out.insert((2, 29));
            }
            if out.len() >= 366 {
                break;
            }
        }
        out
    }

    /// Month/day keys formatted `MM-DD`, the shape the store renders dates to
    pub fn month_day_keys(&self) -> Vec<String> {
        self.month_days()
            .into_iter()
            .map(|(month, day)| format!("{:02}-{:02}", month, day))
            .collect()
    }

    /// Whether a birthday falls inside the window under its match mode
    pub fn contains(&self, birthday: NaiveDate) -> bool {
        match self.mode {
            BirthdayMatch::ExactDate => self.from <= birthday && birthday <= self.to,
            BirthdayMatch::Calendar => self
                .month_days()
                .contains(&(birthday.month(), birthday.day())),
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
