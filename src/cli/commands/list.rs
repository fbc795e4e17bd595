use crate::cli::commands::create::print_event;
use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::event::EventLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        chat,
        upcoming,
        json,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        let after = if *upcoming { Some(time::now()) } else { None };
        let events = EventLogic::list_events(&mut pool, *chat, after)?;

        if *json {
            let out =
                serde_json::to_string_pretty(&events).map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if events.is_empty() {
            println!("No events for chat {}", chat);
            return Ok(());
        }

        for ev in &events {
            print_event(ev);
        }
    }
    Ok(())
}
