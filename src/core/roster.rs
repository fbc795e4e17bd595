//! Capacity-bounded roster with an overflow waitlist.
//!
//! Per `(event, user)` the only transitions are ABSENT → CONFIRMED and
//! CONFIRMED → CONFIRMED with a higher join count. Roster order is fixed by
//! the first join, so repeated joins never move anyone. The confirmed /
//! waitlist split is derived on every read from the current capacity.

use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventRecord;
use crate::models::participant::{Participant, RosterView};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub participant: Participant,
    /// Zero-based place in the ordered roster.
    pub position: usize,
    /// False when this was a repeated join.
    pub created: bool,
    pub waitlisted: bool,
}

pub struct RosterManager<'s, S: EventStore> {
    store: &'s mut S,
}

impl<'s, S: EventStore> RosterManager<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    fn event(&mut self, event_id: i64) -> AppResult<EventRecord> {
        self.store
            .load_event(event_id)?
            .ok_or(AppError::EventNotFound(event_id))
    }

    pub fn join(
        &mut self,
        event_id: i64,
        user_id: i64,
        display_name: &str,
        handle: &str,
        now: NaiveDateTime,
    ) -> AppResult<JoinOutcome> {
        let event = self.event(event_id)?;

        if let Some(ban) = self.store.load_ban(event.origin_chat_id(), user_id)?
            && ban.is_active(now)
        {
            return Err(AppError::BannedUser {
                user_id,
                until: ban.end_time,
            });
        }

        let participant =
            self.store
                .upsert_member(event_id, user_id, display_name.trim(), handle.trim(), now)?;
        let created = participant.join_count == 1;

        let roster = self.store.load_members(event_id)?;
        let position = roster
            .iter()
            .position(|p| p.user_id == user_id)
            .unwrap_or(roster.len().saturating_sub(1));

        self.store.audit(
            "join",
            &format!("event {}", event_id),
            &format!(
                "user {} at #{} (count {})",
                user_id,
                position + 1,
                participant.join_count
            ),
        )?;

        Ok(JoinOutcome {
            participant,
            position,
            created,
            waitlisted: position >= event.capacity() as usize,
        })
    }

    pub fn roster_view(&mut self, event_id: i64) -> AppResult<RosterView> {
        let event = self.event(event_id)?;
        let roster = self.store.load_members(event_id)?;
        Ok(RosterView::split(roster, event.capacity()))
    }
}
