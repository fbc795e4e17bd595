use chrono::NaiveDateTime;
use serde::Serialize;

/// One roster row. Unique per `(event_id, user_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub event_id: i64,
    pub user_id: i64,
    pub display_name: String,
    pub handle: String,
    pub joined_at: NaiveDateTime,
    pub join_count: u32,
}

impl Participant {
    /// "Name (handle)" or just the name when the handle is empty.
    pub fn label(&self) -> String {
        match (self.display_name.trim(), self.handle.trim()) {
            ("", "") => format!("#{}", self.user_id),
            (name, "") => name.to_string(),
            ("", handle) => format!("@{handle}"),
            (name, handle) => format!("{name} (@{handle})"),
        }
    }
}

/// Roster split at read time: the first `capacity` entries are confirmed,
/// the rest wait in join order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterView {
    pub capacity: u32,
    pub confirmed: Vec<Participant>,
    pub waitlisted: Vec<Participant>,
}

impl RosterView {
    /// `roster` must already be ordered by join time.
    pub fn split(mut roster: Vec<Participant>, capacity: u32) -> Self {
        let cut = (capacity as usize).min(roster.len());
        let waitlisted = roster.split_off(cut);
        Self {
            capacity,
            confirmed: roster,
            waitlisted,
        }
    }

    pub fn free_slots(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.confirmed.len())
    }

    pub fn len(&self) -> usize {
        self.confirmed.len() + self.waitlisted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
