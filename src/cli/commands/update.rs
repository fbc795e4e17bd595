use crate::cli::commands::create::{print_event, read_text};
use crate::cli::commands::{open_pool, report_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::event::EventLogic;
use crate::core::resolver::DateTimeResolver;
use crate::core::spec_parser::SpecParser;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::FieldUpdate;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        event_id,
        text,
        title,
        time,
        address,
        capacity,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        let explicit = title.is_some() || time.is_some() || address.is_some() || capacity.is_some();

        //
        // Explicit field flags: build the update list directly
        //
        if explicit {
            let resolver = DateTimeResolver::local();
            let mut updates = Vec::new();

            if let Some(t) = title {
                updates.push(FieldUpdate::Title(t.trim().to_string()));
            }
            if let Some(hint) = time {
                let current = pool
                    .load_event(*event_id)?
                    .ok_or(AppError::EventNotFound(*event_id))?;
                updates.push(FieldUpdate::Time(
                    resolver.resolve(current.scheduled_time(), hint),
                ));
            }
            if let Some(a) = address {
                updates.push(FieldUpdate::Address(a.trim().to_string()));
            }
            if let Some(c) = capacity {
                updates.push(FieldUpdate::Capacity(*c));
            }

            let ev = EventLogic::update_event(&mut pool, *event_id, &updates)?;
            success(format!("Updated event #{}.", ev.id()));
            print_event(&ev);
            return Ok(());
        }

        //
        // Otherwise: specification text on top of the stored event
        //
        let text = read_text(text)?;
        let defaults = cfg.event_defaults()?;
        let parser = SpecParser::new(&defaults, DateTimeResolver::local());

        let (ev, skipped) = EventLogic::update_event_from_text(&mut pool, &parser, *event_id, &text)?;
        report_skipped(&skipped);
        success(format!("Updated event #{}.", ev.id()));
        print_event(&ev);
    }

    Ok(())
}
