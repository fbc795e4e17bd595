//! The narrow persistence interface the core logic depends on.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::ban::Ban;
use crate::models::event::{Draft, EventRecord, FieldUpdate, Origin};
use crate::models::participant::Participant;
use chrono::NaiveDateTime;

pub trait EventStore {
    /// Persist a new event and return its assigned id.
    fn insert_event(&mut self, draft: &Draft, origin: &Origin) -> AppResult<i64>;
    fn load_event(&mut self, id: i64) -> AppResult<Option<EventRecord>>;
    /// Returns false when no event with `id` exists.
    fn apply_updates(&mut self, id: i64, updates: &[FieldUpdate]) -> AppResult<bool>;
    fn list_events(
        &mut self,
        chat_id: i64,
        after: Option<NaiveDateTime>,
    ) -> AppResult<Vec<EventRecord>>;

    /// Atomic insert-or-increment on `(event_id, user_id)`.
    fn upsert_member(
        &mut self,
        event_id: i64,
        user_id: i64,
        display_name: &str,
        handle: &str,
        now: NaiveDateTime,
    ) -> AppResult<Participant>;
    /// Ordered by join time, then insertion order.
    fn load_members(&mut self, event_id: i64) -> AppResult<Vec<Participant>>;

    fn put_ban(&mut self, ban: &Ban) -> AppResult<()>;
    fn delete_ban(&mut self, chat_id: i64, user_id: i64) -> AppResult<bool>;
    fn load_ban(&mut self, chat_id: i64, user_id: i64) -> AppResult<Option<Ban>>;

    /// Append a row to the audit log.
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

impl EventStore for DbPool {
    fn insert_event(&mut self, draft: &Draft, origin: &Origin) -> AppResult<i64> {
        queries::insert_event(&self.conn, draft, origin)
    }

    fn load_event(&mut self, id: i64) -> AppResult<Option<EventRecord>> {
        queries::load_event(&self.conn, id)
    }

    fn apply_updates(&mut self, id: i64, updates: &[FieldUpdate]) -> AppResult<bool> {
        self.with_conn(|conn| queries::apply_updates(conn, id, updates))
    }

    fn list_events(
        &mut self,
        chat_id: i64,
        after: Option<NaiveDateTime>,
    ) -> AppResult<Vec<EventRecord>> {
        queries::list_events(&self.conn, chat_id, after)
    }

    fn upsert_member(
        &mut self,
        event_id: i64,
        user_id: i64,
        display_name: &str,
        handle: &str,
        now: NaiveDateTime,
    ) -> AppResult<Participant> {
        queries::upsert_member(&self.conn, event_id, user_id, display_name, handle, now)
    }

    fn load_members(&mut self, event_id: i64) -> AppResult<Vec<Participant>> {
        queries::load_members(&self.conn, event_id)
    }

    fn put_ban(&mut self, ban: &Ban) -> AppResult<()> {
        queries::put_ban(&self.conn, ban)
    }

    fn delete_ban(&mut self, chat_id: i64, user_id: i64) -> AppResult<bool> {
        queries::delete_ban(&self.conn, chat_id, user_id)
    }

    fn load_ban(&mut self, chat_id: i64, user_id: i64) -> AppResult<Option<Ban>> {
        queries::load_ban(&self.conn, chat_id, user_id)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        crate::db::log::ttlog(&self.conn, operation, target, message)
    }
}
