use chrono::NaiveDateTime;
use serde::Serialize;

/// A chat-wide ban; active while `end_time` lies in the future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ban {
    pub chat_id: i64,
    pub user_id: i64,
    pub end_time: NaiveDateTime,
}

impl Ban {
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        self.end_time > now
    }
}
