//! Free-text event specification parser.
//!
//! Grammar, one statement per line or `;`-separated:
//!
//! ```text
//! statement := [prefix] token ('=' | ':') rest
//! ```
//!
//! The first `token=` / `token:` in a statement wins, so bullets and short
//! lead-in words before it are tolerated.
//!
//! Statements with an unknown token or an unusable value are skipped and
//! reported; the draft keeps its previous value for that field.

use crate::core::keywords::Field;
use crate::core::resolver::{DateTimeResolver, short_date, short_time, tomorrow_at};
use crate::models::event::Draft;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static STATEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*[=:](.+)$").expect("valid statement regex"));

/// Values seeded into a brand-new draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDefaults {
    pub address: String,
    pub capacity: u32,
    pub time: NaiveTime,
    /// `{date}` and `{time}` are replaced with the scheduled date and time.
    pub title_template: String,
}

impl Default for EventDefaults {
    fn default() -> Self {
        Self {
            address: "🏟 Футбольне поле, вул. Липи, 6-А".to_string(),
            capacity: 21,
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap_or(NaiveTime::MIN),
            title_template: "⚽️Футбол {date} {time}⚽️".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not of the form `token=value` / `token:value`.
    Malformed(String),
    UnknownField(String),
    InvalidCapacity(String),
    EmptyTitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    Applied(Field),
    Skipped(SkipReason),
}

pub struct SpecParser<'a> {
    defaults: &'a EventDefaults,
    resolver: DateTimeResolver,
}

impl<'a> SpecParser<'a> {
    pub fn new(defaults: &'a EventDefaults, resolver: DateTimeResolver) -> Self {
        Self { defaults, resolver }
    }

    /// Brand-new draft: tomorrow at the default time, templated title.
    pub fn default_draft(&self) -> Draft {
        let when = tomorrow_at(self.resolver.today(), self.defaults.time);
        let title = self
            .defaults
            .title_template
            .replace("{date}", &short_date(&when))
            .replace("{time}", &short_time(&when));

        Draft {
            title,
            scheduled_time: when,
            address: self.defaults.address.clone(),
            capacity: self.defaults.capacity,
        }
    }

    /// Apply every statement of `text` to `draft`, in textual order.
    pub fn apply(&self, draft: &mut Draft, text: &str, fill_defaults: bool) -> Vec<StatementOutcome> {
        if fill_defaults {
            *draft = self.default_draft();
        }

        text.lines()
            .flat_map(|line| line.split(';'))
            .filter(|stmt| !stmt.trim().is_empty())
            .map(|stmt| self.apply_statement(draft, stmt))
            .collect()
    }

    fn apply_statement(&self, draft: &mut Draft, stmt: &str) -> StatementOutcome {
        let Some(caps) = STATEMENT_RE.captures(stmt) else {
            return StatementOutcome::Skipped(SkipReason::Malformed(stmt.trim().to_string()));
        };
        let token = &caps[1];
        let value = caps[2].trim();

        let Some(field) = Field::lookup(token) else {
            return StatementOutcome::Skipped(SkipReason::UnknownField(token.to_string()));
        };

        match field {
            Field::Title => {
                if value.is_empty() {
                    return StatementOutcome::Skipped(SkipReason::EmptyTitle);
                }
                draft.title = value.to_string();
            }
            Field::Address => draft.address = value.to_string(),
            Field::Capacity => match value.parse::<u32>() {
                Ok(n) if n >= 1 => draft.capacity = n,
                _ => {
                    return StatementOutcome::Skipped(SkipReason::InvalidCapacity(
                        value.to_string(),
                    ));
                }
            },
            Field::Time => {
                draft.scheduled_time = self.resolver.resolve(draft.scheduled_time, value);
            }
        }

        StatementOutcome::Applied(field)
    }
}
