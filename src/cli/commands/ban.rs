use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ban::BanLogic;
use crate::core::resolver::DateTimeResolver;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::time::{self, format_datetime};

/// Handles both `ban` and `unban`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Ban {
            chat,
            user,
            duration,
        } => {
            let now = time::now();
            let until = DateTimeResolver::local().resolve(now, duration);
            if until <= now {
                return Err(AppError::InvalidTime(format!(
                    "ban hint '{}' does not end in the future",
                    duration
                )));
            }

            let mut pool = open_pool(cfg)?;
            BanLogic::ban(&mut pool, *chat, *user, until)?;
            success(format!(
                "User {} banned in chat {} until {}.",
                user,
                chat,
                format_datetime(&until)
            ));
        }
        Commands::Unban { chat, user } => {
            let mut pool = open_pool(cfg)?;
            if BanLogic::unban(&mut pool, *chat, *user)? {
                success(format!("Ban lifted for user {} in chat {}.", user, chat));
            } else {
                warning(format!("User {} is not banned in chat {}.", user, chat));
            }
        }
        _ => {}
    }
    Ok(())
}
