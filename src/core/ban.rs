use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::ban::Ban;
use crate::utils::time::format_datetime;
use chrono::NaiveDateTime;

pub struct BanLogic;

impl BanLogic {
    /// Ban `user_id` in `chat_id` until `until`; replaces any earlier ban.
    pub fn ban<S: EventStore>(
        store: &mut S,
        chat_id: i64,
        user_id: i64,
        until: NaiveDateTime,
    ) -> AppResult<Ban> {
        let ban = Ban {
            chat_id,
            user_id,
            end_time: until,
        };
        store.put_ban(&ban)?;
        store.audit(
            "ban",
            &format!("chat {}", chat_id),
            &format!("user {} until {}", user_id, format_datetime(&until)),
        )?;
        Ok(ban)
    }

    /// Returns false if there was nothing to lift.
    pub fn unban<S: EventStore>(store: &mut S, chat_id: i64, user_id: i64) -> AppResult<bool> {
        let removed = store.delete_ban(chat_id, user_id)?;
        if removed {
            store.audit("unban", &format!("chat {}", chat_id), &format!("user {}", user_id))?;
        }
        Ok(removed)
    }

    pub fn is_banned<S: EventStore>(
        store: &mut S,
        chat_id: i64,
        user_id: i64,
        now: NaiveDateTime,
    ) -> AppResult<bool> {
        Ok(store
            .load_ban(chat_id, user_id)?
            .is_some_and(|b| b.is_active(now)))
    }
}
