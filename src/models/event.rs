use crate::core::keywords::Field;
use crate::errors::{AppError, AppResult};
use crate::utils::time::format_weekday_datetime;
use chrono::NaiveDateTime;
use serde::Serialize;

/// In-progress event description, mutated by the specification parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub title: String,
    pub scheduled_time: NaiveDateTime,
    pub address: String,
    pub capacity: u32,
}

/// A persisted event. Built once, from a draft or from a stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    id: i64,
    title: String,
    scheduled_time: NaiveDateTime, // ⇔ event.scheduled_time (INTEGER epoch)
    address: String,
    capacity: u32,
    created_at: NaiveDateTime, // ⇔ event.created_at (INTEGER epoch)
    origin_message_id: i64,
    origin_chat_id: i64,
}

/// Origin of an event in the chat it was posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub chat_id: i64,
    pub message_id: i64,
    pub message_time: NaiveDateTime,
}

impl EventRecord {
    pub fn from_draft(id: i64, draft: Draft, origin: Origin) -> Self {
        Self {
            id,
            title: draft.title,
            scheduled_time: draft.scheduled_time,
            address: draft.address,
            capacity: draft.capacity,
            created_at: origin.message_time,
            origin_message_id: origin.message_id,
            origin_chat_id: origin.chat_id,
        }
    }

    /// Row constructor used by the storage layer.
    #[allow(clippy::too_many_arguments)]
    pub fn from_row(
        id: i64,
        title: String,
        scheduled_time: NaiveDateTime,
        address: String,
        capacity: u32,
        created_at: NaiveDateTime,
        origin_message_id: i64,
        origin_chat_id: i64,
    ) -> Self {
        Self {
            id,
            title,
            scheduled_time,
            address,
            capacity,
            created_at,
            origin_message_id,
            origin_chat_id,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn scheduled_time(&self) -> NaiveDateTime {
        self.scheduled_time
    }
    pub fn address(&self) -> &str {
        &self.address
    }
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
    pub fn origin_message_id(&self) -> i64 {
        self.origin_message_id
    }
    pub fn origin_chat_id(&self) -> i64 {
        self.origin_chat_id
    }

    /// Editable part of the record, as a parser draft.
    pub fn to_draft(&self) -> Draft {
        Draft {
            title: self.title.clone(),
            scheduled_time: self.scheduled_time,
            address: self.address.clone(),
            capacity: self.capacity,
        }
    }

    pub fn time_hint(&self) -> String {
        format_weekday_datetime(&self.scheduled_time)
    }
}

/// Whitelisted change to a persisted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Time(NaiveDateTime),
    Address(String),
    Capacity(u32),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Title(_) => Field::Title,
            FieldUpdate::Time(_) => Field::Time,
            FieldUpdate::Address(_) => Field::Address,
            FieldUpdate::Capacity(_) => Field::Capacity,
        }
    }

    /// Reject values that would break the record invariants.
    pub fn validate(&self) -> AppResult<()> {
        match self {
            FieldUpdate::Title(t) if t.trim().is_empty() => Err(AppError::InvalidTitle),
            FieldUpdate::Capacity(0) => Err(AppError::InvalidCapacity("0".into())),
            _ => Ok(()),
        }
    }

    /// Updates needed to turn `before` into `after`, in canonical field order.
    pub fn diff(before: &Draft, after: &Draft) -> Vec<Self> {
        let mut out = Vec::new();
        if before.title != after.title {
            out.push(FieldUpdate::Title(after.title.clone()));
        }
        if before.scheduled_time != after.scheduled_time {
            out.push(FieldUpdate::Time(after.scheduled_time));
        }
        if before.address != after.address {
            out.push(FieldUpdate::Address(after.address.clone()));
        }
        if before.capacity != after.capacity {
            out.push(FieldUpdate::Capacity(after.capacity));
        }
        out
    }
}
