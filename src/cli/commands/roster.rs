use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::RosterManager;
use crate::errors::{AppError, AppResult};
use crate::models::participant::{Participant, RosterView};
use crate::utils::colors::{RESET, color_for_slot, colorize_free_slots};

fn print_line(n: usize, p: &Participant, waitlisted: bool) {
    let repeat = if p.join_count > 1 {
        format!(" ×{}", p.join_count)
    } else {
        String::new()
    };
    println!(
        "{}{:>3}.{} {}{}",
        color_for_slot(waitlisted),
        n,
        RESET,
        p.label(),
        repeat
    );
}

/// Plain terminal listing: confirmed players, then the waitlist.
pub(crate) fn print_roster(view: &RosterView) {
    println!(
        "👥 {}/{} confirmed, free: {}",
        view.confirmed.len(),
        view.capacity,
        colorize_free_slots(view.free_slots())
    );

    if view.is_empty() {
        println!("No players yet.");
        return;
    }

    for (i, p) in view.confirmed.iter().enumerate() {
        print_line(i + 1, p, false);
    }

    if !view.waitlisted.is_empty() {
        println!("\n⏳ Waitlist:");
        let offset = view.confirmed.len();
        for (i, p) in view.waitlisted.iter().enumerate() {
            print_line(offset + i + 1, p, true);
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { event_id, json } = cmd {
        let mut pool = open_pool(cfg)?;
        let view = RosterManager::new(&mut pool).roster_view(*event_id)?;

        if *json {
            let out =
                serde_json::to_string_pretty(&view).map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print_roster(&view);
        }
    }
    Ok(())
}
