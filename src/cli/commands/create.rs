use crate::cli::commands::{open_pool, report_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::event::EventLogic;
use crate::core::resolver::DateTimeResolver;
use crate::core::spec_parser::SpecParser;
use crate::errors::{AppError, AppResult};
use crate::models::event::{EventRecord, Origin};
use crate::ui::messages::success;
use crate::utils::time::{self, format_datetime, from_epoch};
use std::io;

/// Specification text from the argument, or from stdin when omitted.
pub(crate) fn read_text(text: &Option<String>) -> AppResult<String> {
    match text {
        Some(t) => Ok(t.clone()),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}

pub(crate) fn print_event(ev: &EventRecord) {
    println!("#{} {}", ev.id(), ev.title());
    println!("   🕖 {}", ev.time_hint());
    if !ev.address().is_empty() {
        println!("   📍 {}", ev.address());
    }
    println!("   👥 capacity {}", ev.capacity());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Create {
        chat,
        message,
        at,
        text,
        json,
    } = cmd
    {
        let message_time = match at {
            Some(ts) => from_epoch(*ts).ok_or_else(|| AppError::InvalidTime(ts.to_string()))?,
            None => time::now(),
        };
        let text = read_text(text)?;

        let defaults = cfg.event_defaults()?;
        let parser = SpecParser::new(&defaults, DateTimeResolver::local());
        let mut pool = open_pool(cfg)?;

        let created = EventLogic::create_event(
            &mut pool,
            &parser,
            &text,
            Origin {
                chat_id: *chat,
                message_id: *message,
                message_time,
            },
        )?;

        report_skipped(&created.skipped);

        if *json {
            let out = serde_json::to_string_pretty(&created.event)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            success(format!(
                "Created event #{} for {}.",
                created.event.id(),
                format_datetime(&created.event.scheduled_time())
            ));
            print_event(&created.event);
        }
    }

    Ok(())
}
