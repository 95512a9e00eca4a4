//! Month and weekday names plus the selectors used to filter trips.

use anyhow::{Result, anyhow};
use chrono::{Datelike, Month, NaiveDateTime, Weekday};
use serde::Serializer;
use std::fmt;
use std::str::FromStr;

pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Full English name of a weekday, e.g. `Wednesday`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Month of a timestamp as a [`Month`].
pub fn month_of(ts: &NaiveDateTime) -> Month {
    // `month()` is always in 1..=12
    Month::try_from(ts.month() as u8).unwrap_or(Month::January)
}

/// A month filter: either every month or one specific month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthSelector {
    #[default]
    All,
    Only(Month),
}

/// A weekday filter: either every day or one specific weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DaySelector {
    #[default]
    All,
    Only(Weekday),
}

impl MonthSelector {
    /// Every selector value, `all` first.
    pub fn variants() -> impl Iterator<Item = MonthSelector> {
        std::iter::once(MonthSelector::All).chain(
            (1..=12u8)
                .filter_map(|n| Month::try_from(n).ok())
                .map(MonthSelector::Only),
        )
    }

    pub fn matches(&self, ts: &NaiveDateTime) -> bool {
        match self {
            MonthSelector::All => true,
            MonthSelector::Only(month) => ts.month() == month.number_from_month(),
        }
    }
}

impl DaySelector {
    /// Every selector value, `all` first.
    pub fn variants() -> impl Iterator<Item = DaySelector> {
        std::iter::once(DaySelector::All).chain(
            (0..7u8)
                .filter_map(|n| Weekday::try_from(n).ok())
                .map(DaySelector::Only),
        )
    }

    pub fn matches(&self, ts: &NaiveDateTime) -> bool {
        match self {
            DaySelector::All => true,
            DaySelector::Only(day) => ts.weekday() == *day,
        }
    }
}

impl FromStr for MonthSelector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Ok(MonthSelector::All);
        }
        MONTH_NAMES
            .iter()
            .position(|name| *name == s)
            .and_then(|idx| Month::try_from(idx as u8 + 1).ok())
            .map(MonthSelector::Only)
            .ok_or_else(|| anyhow!("unrecognized month '{s}' (expected all, january, ... december)"))
    }
}

impl FromStr for DaySelector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Ok(DaySelector::All);
        }
        DAY_NAMES
            .iter()
            .position(|name| *name == s)
            .and_then(|idx| Weekday::try_from(idx as u8).ok())
            .map(DaySelector::Only)
            .ok_or_else(|| anyhow!("unrecognized day '{s}' (expected all, monday, ... sunday)"))
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthSelector::All => f.write_str("all"),
            MonthSelector::Only(month) => f.write_str(month.name()),
        }
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySelector::All => f.write_str("all"),
            DaySelector::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

pub(crate) fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub(crate) fn serialize_month<S: Serializer>(
    month: &Option<Month>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match month {
        Some(m) => serializer.serialize_some(m.name()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn serialize_weekday<S: Serializer>(
    day: &Option<Weekday>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match day {
        Some(d) => serializer.serialize_some(weekday_name(*d)),
        None => serializer.serialize_none(),
    }
}
