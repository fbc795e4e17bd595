pub mod ban;
pub mod config;
pub mod create;
pub mod init;
pub mod join;
pub mod list;
pub mod log;
pub mod roster;
pub mod update;

use crate::config::Config;
use crate::core::spec_parser::SkipReason;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Open the configured database, creating the schema if needed.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open_initialized(&cfg.database)
}

/// Report statements that were ignored while parsing a message.
pub(crate) fn report_skipped(skipped: &[SkipReason]) {
    for reason in skipped {
        match reason {
            SkipReason::Malformed(stmt) => warning(format!("Ignored '{}': expected name=value", stmt)),
            SkipReason::UnknownField(token) => warning(format!("Ignored unknown field '{}'", token)),
            SkipReason::InvalidCapacity(v) => {
                warning(format!("Ignored capacity '{}': expected a positive integer", v))
            }
            SkipReason::EmptyTitle => warning("Ignored empty title"),
        }
    }
}
