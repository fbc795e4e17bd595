//! Bound-parameter SQL for events, roster rows and bans.
//! No statement text is ever built from user-supplied values.

use crate::errors::{AppError, AppResult};
use crate::models::ban::Ban;
use crate::models::event::{Draft, EventRecord, FieldUpdate, Origin};
use crate::models::participant::Participant;
use crate::utils::time::{from_epoch, to_epoch};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EVENT_COLUMNS: &str = "id, title, scheduled_time, address, capacity, created_at, \
                             origin_message_id, origin_chat_id";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Integer, Box::new(err))
}

fn epoch_column(row: &Row, idx: usize) -> Result<NaiveDateTime> {
    let ts: i64 = row.get(idx)?;
    from_epoch(ts).ok_or_else(|| conversion_error(idx, AppError::InvalidTime(ts.to_string())))
}

pub fn map_event_row(row: &Row) -> Result<EventRecord> {
    let capacity: i64 = row.get(4)?;
    let capacity = u32::try_from(capacity)
        .map_err(|_| conversion_error(4, AppError::InvalidCapacity(capacity.to_string())))?;

    Ok(EventRecord::from_row(
        row.get(0)?,
        row.get(1)?,
        epoch_column(row, 2)?,
        row.get(3)?,
        capacity,
        epoch_column(row, 5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

/// Expects columns: event_id, user_id, display_name, handle, joined_at, join_count.
pub fn map_member_row(row: &Row) -> Result<Participant> {
    let count: i64 = row.get(5)?;
    let join_count = u32::try_from(count)
        .map_err(|_| conversion_error(5, AppError::Other(format!("Invalid join_count: {count}"))))?;

    Ok(Participant {
        event_id: row.get(0)?,
        user_id: row.get(1)?,
        display_name: row.get(2)?,
        handle: row.get(3)?,
        joined_at: epoch_column(row, 4)?,
        join_count,
    })
}

pub fn insert_event(conn: &Connection, draft: &Draft, origin: &Origin) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO event (title, scheduled_time, address, capacity, created_at, origin_message_id, origin_chat_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            draft.title,
            to_epoch(draft.scheduled_time),
            draft.address,
            draft.capacity,
            to_epoch(origin.message_time),
            origin.message_id,
            origin.chat_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<EventRecord>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM event WHERE id = ?1");
    let ev = conn.query_row(&sql, [id], map_event_row).optional()?;
    Ok(ev)
}

/// Events of a chat, soonest first. `after` filters out past occasions.
pub fn list_events(
    conn: &Connection,
    chat_id: i64,
    after: Option<NaiveDateTime>,
) -> AppResult<Vec<EventRecord>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM event
         WHERE origin_chat_id = ?1 AND scheduled_time >= ?2
         ORDER BY scheduled_time ASC, id ASC"
    );
    let lower = after.map(to_epoch).unwrap_or(i64::MIN);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![chat_id, lower], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn apply_update(conn: &Connection, id: i64, update: &FieldUpdate) -> Result<usize> {
    match update {
        FieldUpdate::Title(title) => conn.execute(
            "UPDATE event SET title = ?1 WHERE id = ?2",
            params![title, id],
        ),
        FieldUpdate::Time(when) => conn.execute(
            "UPDATE event SET scheduled_time = ?1 WHERE id = ?2",
            params![to_epoch(*when), id],
        ),
        FieldUpdate::Address(address) => conn.execute(
            "UPDATE event SET address = ?1 WHERE id = ?2",
            params![address, id],
        ),
        FieldUpdate::Capacity(capacity) => conn.execute(
            "UPDATE event SET capacity = ?1 WHERE id = ?2",
            params![capacity, id],
        ),
    }
}

/// Apply all updates in one transaction. Returns false if the event does not exist.
pub fn apply_updates(conn: &mut Connection, id: i64, updates: &[FieldUpdate]) -> AppResult<bool> {
    let tx = conn.transaction()?;

    let exists = tx
        .query_row("SELECT 1 FROM event WHERE id = ?1", [id], |_| Ok(()))
        .optional()?
        .is_some();
    if !exists {
        return Ok(false);
    }

    for update in updates {
        apply_update(&tx, id, update)?;
    }

    tx.commit()?;
    Ok(true)
}

/// Insert a roster row, or bump `join_count` if the user already joined.
/// A single statement, so concurrent joins collapse into one row.
pub fn upsert_member(
    conn: &Connection,
    event_id: i64,
    user_id: i64,
    display_name: &str,
    handle: &str,
    now: NaiveDateTime,
) -> AppResult<Participant> {
    let member = conn.query_row(
        "INSERT INTO event_member (event_id, user_id, display_name, handle, joined_at, join_count)
         VALUES (?1, ?2, ?3, ?4, ?5, 1)
         ON CONFLICT(event_id, user_id) DO UPDATE SET join_count = join_count + 1
         RETURNING event_id, user_id, display_name, handle, joined_at, join_count",
        params![event_id, user_id, display_name, handle, to_epoch(now)],
        map_member_row,
    )?;
    Ok(member)
}

/// Full roster in join order; insertion order breaks ties.
pub fn load_members(conn: &Connection, event_id: i64) -> AppResult<Vec<Participant>> {
    let mut stmt = conn.prepare_cached(
        "SELECT event_id, user_id, display_name, handle, joined_at, join_count
         FROM event_member
         WHERE event_id = ?1
         ORDER BY joined_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([event_id], map_member_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn put_ban(conn: &Connection, ban: &Ban) -> AppResult<()> {
    conn.execute(
        "INSERT INTO ban (chat_id, user_id, end_timestamp) VALUES (?1, ?2, ?3)
         ON CONFLICT(chat_id, user_id) DO UPDATE SET end_timestamp = excluded.end_timestamp",
        params![ban.chat_id, ban.user_id, to_epoch(ban.end_time)],
    )?;
    Ok(())
}

pub fn delete_ban(conn: &Connection, chat_id: i64, user_id: i64) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM ban WHERE chat_id = ?1 AND user_id = ?2",
        params![chat_id, user_id],
    )?;
    Ok(n > 0)
}

pub fn load_ban(conn: &Connection, chat_id: i64, user_id: i64) -> AppResult<Option<Ban>> {
    let ban = conn
        .query_row(
            "SELECT chat_id, user_id, end_timestamp FROM ban WHERE chat_id = ?1 AND user_id = ?2",
            params![chat_id, user_id],
            |row| {
                Ok(Ban {
                    chat_id: row.get(0)?,
                    user_id: row.get(1)?,
                    end_time: epoch_column(row, 2)?,
                })
            },
        )
        .optional()?;
    Ok(ban)
}
