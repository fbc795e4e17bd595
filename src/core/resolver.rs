//! Absolute date/time resolution from free-text hints.
//!
//! A hint may carry, in any combination:
//! - a relative offset `+N<unit>` (minutes, hours, days),
//! - an absolute date `D-M-Y` (two-digit years mean 20YY),
//! - an absolute time `H:M`,
//! - a today/tomorrow marker.
//!
//! The steps are applied in that order, each overriding what came before.
//! Only the first match of each pattern is honored.

use crate::core::keywords::{RelativeDay, Unit};
use crate::utils::time::{normalize_local, truncate_seconds};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+(\d+)\s*(\w+)").expect("valid offset regex"));
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})-(\d{1,2})-(\d{2,4})").expect("valid date regex")
});
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{1,2})").expect("valid time regex"));

#[derive(Debug, Clone, Copy)]
pub struct DateTimeResolver {
    today: NaiveDate,
}

impl DateTimeResolver {
    /// Resolver whose today/tomorrow markers are relative to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Resolver bound to the local wall-clock date.
    pub fn local() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Resolve `hint` against `base`. Always returns a complete timestamp
    /// with seconds set to zero that exists on the local clock; unusable
    /// fragments leave `base` untouched.
    pub fn resolve(&self, base: NaiveDateTime, hint: &str) -> NaiveDateTime {
        let shifted = apply_offset(base, hint);

        let mut date = shifted.date();
        let mut time = NaiveTime::from_hms_opt(shifted.hour(), shifted.minute(), 0)
            .unwrap_or(shifted.time());

        if let Some(d) = parse_date(hint) {
            date = d;
        }
        if let Some(t) = parse_clock(hint) {
            time = t;
        }

        let lowered = hint.to_lowercase();
        for family in RelativeDay::ORDER {
            if family.found_in(&lowered)
                && let Some(d) = self
                    .today
                    .checked_add_signed(Duration::days(family.day_offset()))
            {
                date = d;
            }
        }

        normalize_local(truncate_seconds(date.and_time(time)))
    }
}

fn apply_offset(base: NaiveDateTime, hint: &str) -> NaiveDateTime {
    let Some(caps) = OFFSET_RE.captures(hint) else {
        return base;
    };
    let Ok(step) = caps[1].parse::<i64>() else {
        return base;
    };

    let delta = match Unit::lookup(&caps[2]) {
        Some(Unit::Minutes) => Duration::try_minutes(step),
        Some(Unit::Hours) => Duration::try_hours(step),
        Some(Unit::Days) => Duration::try_days(step),
        None => None,
    };

    delta
        .and_then(|d| base.checked_add_signed(d))
        .unwrap_or(base)
}

fn parse_date(hint: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(hint)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_clock(hint: &str) -> Option<NaiveTime> {
    let caps = TIME_RE.captures(hint)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Tomorrow relative to `today` at `time`; falls back to `today` at the
/// end of the calendar range.
pub fn tomorrow_at(today: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    normalize_local(today.succ_opt().unwrap_or(today).and_time(time))
}

/// `D-M-YYYY`, the form used inside generated titles.
pub fn short_date(dt: &NaiveDateTime) -> String {
    format!("{}-{}-{}", dt.day(), dt.month(), dt.year())
}

/// `H:MM`, the form used inside generated titles.
pub fn short_time(dt: &NaiveDateTime) -> String {
    format!("{}:{:02}", dt.hour(), dt.minute())
}
