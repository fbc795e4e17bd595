use crate::core::spec_parser::{SkipReason, SpecParser, StatementOutcome};
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Draft, EventRecord, FieldUpdate, Origin};
use crate::utils::time::format_datetime;
use chrono::NaiveDateTime;

/// Result of turning a free-text message into a stored event.
#[derive(Debug, Clone)]
pub struct Created {
    pub event: EventRecord,
    pub skipped: Vec<SkipReason>,
}

/// High-level business logic for events: create, update, list.
pub struct EventLogic;

fn skipped_only(outcomes: Vec<StatementOutcome>) -> Vec<SkipReason> {
    outcomes
        .into_iter()
        .filter_map(|o| match o {
            StatementOutcome::Skipped(reason) => Some(reason),
            StatementOutcome::Applied(_) => None,
        })
        .collect()
}

impl EventLogic {
    /// Parse `text` over a defaulted draft and persist the result.
    pub fn create_event<S: EventStore>(
        store: &mut S,
        parser: &SpecParser<'_>,
        text: &str,
        origin: Origin,
    ) -> AppResult<Created> {
        let mut draft = parser.default_draft();
        let outcomes = parser.apply(&mut draft, text, false);

        let id = store.insert_event(&draft, &origin)?;
        let event = EventRecord::from_draft(id, draft, origin);

        store.audit(
            "create",
            &format!("event {}", id),
            &format!(
                "'{}' at {} (capacity {})",
                event.title(),
                format_datetime(&event.scheduled_time()),
                event.capacity()
            ),
        )?;

        Ok(Created {
            event,
            skipped: skipped_only(outcomes),
        })
    }

    /// Apply whitelisted updates atomically and return the refreshed record.
    pub fn update_event<S: EventStore>(
        store: &mut S,
        id: i64,
        updates: &[FieldUpdate],
    ) -> AppResult<EventRecord> {
        for u in updates {
            u.validate()?;
        }

        if !store.apply_updates(id, updates)? {
            return Err(AppError::EventNotFound(id));
        }

        if !updates.is_empty() {
            let fields: Vec<&str> = updates.iter().map(|u| u.field().as_str()).collect();
            store.audit("update", &format!("event {}", id), &fields.join(", "))?;
        }

        store.load_event(id)?.ok_or(AppError::EventNotFound(id))
    }

    /// Re-parse a follow-up message against the stored event. Only the
    /// fields that actually changed are written back.
    pub fn update_event_from_text<S: EventStore>(
        store: &mut S,
        parser: &SpecParser<'_>,
        id: i64,
        text: &str,
    ) -> AppResult<(EventRecord, Vec<SkipReason>)> {
        let current = store.load_event(id)?.ok_or(AppError::EventNotFound(id))?;

        let before: Draft = current.to_draft();
        let mut after = before.clone();
        let outcomes = parser.apply(&mut after, text, false);

        let updates = FieldUpdate::diff(&before, &after);
        let event = if updates.is_empty() {
            current
        } else {
            Self::update_event(store, id, &updates)?
        };

        Ok((event, skipped_only(outcomes)))
    }

    /// Events of a chat ordered by scheduled time; `after` hides past ones.
    pub fn list_events<S: EventStore>(
        store: &mut S,
        chat_id: i64,
        after: Option<NaiveDateTime>,
    ) -> AppResult<Vec<EventRecord>> {
        store.list_events(chat_id, after)
    }
}
