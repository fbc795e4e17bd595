use crate::cli::commands::open_pool;
use crate::cli::commands::roster::print_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::RosterManager;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Join {
        event_id,
        user,
        name,
        handle,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        let mut roster = RosterManager::new(&mut pool);

        let outcome = roster.join(*event_id, *user, name, handle, time::now())?;

        let slot = if outcome.waitlisted { "waitlist" } else { "confirmed" };
        if outcome.created {
            success(format!(
                "{} joined event #{} at position {} ({}).",
                outcome.participant.label(),
                event_id,
                outcome.position + 1,
                slot
            ));
        } else {
            info(format!(
                "{} already joined event #{} (position {}, {} joins).",
                outcome.participant.label(),
                event_id,
                outcome.position + 1,
                outcome.participant.join_count
            ));
        }

        let view = roster.roster_view(*event_id)?;
        print_roster(&view);
    }
    Ok(())
}
