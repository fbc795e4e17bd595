//! Fixed multilingual keyword tables.
//!
//! Field names are matched exactly (case-insensitive) on a single token.
//! Unit words are matched by prefix, relative-day words by substring.

use serde::Serialize;

/// Canonical target of a specification statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Title,
    Address,
    Time,
    Capacity,
}

const TIME_WORDS: &[&str] = &["time", "date", "дата", "день", "час", "время"];
const TITLE_WORDS: &[&str] = &["title", "опис", "описание", "заголовок"];
const ADDRESS_WORDS: &[&str] = &["address", "адрес", "адреса"];
const CAPACITY_WORDS: &[&str] = &["players_limit", "limit", "количество", "кількість"];

impl Field {
    /// Resolve a statement token to its canonical field.
    pub fn lookup(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        let table: [(&[&str], Field); 4] = [
            (TIME_WORDS, Field::Time),
            (TITLE_WORDS, Field::Title),
            (ADDRESS_WORDS, Field::Address),
            (CAPACITY_WORDS, Field::Capacity),
        ];

        table
            .iter()
            .find(|(words, _)| words.contains(&token.as_str()))
            .map(|(_, field)| *field)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Address => "address",
            Field::Time => "time",
            Field::Capacity => "capacity",
        }
    }
}

/// Unit of a relative `+N<unit>` offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Minutes,
    Hours,
    Days,
}

const MINUTE_PREFIXES: &[&str] = &["min", "хв", "мин"];
const HOUR_PREFIXES: &[&str] = &["hour", "год", "час"];
const DAY_PREFIXES: &[&str] = &["day", "дн", "ден"];

impl Unit {
    /// Prefix match, so "hours", "години" and "часа" all count as hours.
    pub fn lookup(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        let table: [(&[&str], Unit); 3] = [
            (MINUTE_PREFIXES, Unit::Minutes),
            (HOUR_PREFIXES, Unit::Hours),
            (DAY_PREFIXES, Unit::Days),
        ];

        table
            .iter()
            .find(|(prefixes, _)| prefixes.iter().any(|p| word.starts_with(p)))
            .map(|(_, unit)| *unit)
    }
}

/// "today" / "tomorrow" marker families, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    Tomorrow,
}

const TODAY_WORDS: &[&str] = &["today", "сегодня", "сьогодні"];
const TOMORROW_WORDS: &[&str] = &["tomorrow", "завтра"];

impl RelativeDay {
    /// Families in the fixed order they are checked.
    pub const ORDER: [RelativeDay; 2] = [RelativeDay::Today, RelativeDay::Tomorrow];

    pub fn words(&self) -> &'static [&'static str] {
        match self {
            RelativeDay::Today => TODAY_WORDS,
            RelativeDay::Tomorrow => TOMORROW_WORDS,
        }
    }

    pub fn day_offset(&self) -> i64 {
        match self {
            RelativeDay::Today => 0,
            RelativeDay::Tomorrow => 1,
        }
    }

    /// True when any word of this family occurs in the (lowercased) hint.
    pub fn found_in(&self, hint_lower: &str) -> bool {
        self.words().iter().any(|w| hint_lower.contains(w))
    }
}
