/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Confirmed slots are green, waitlist slots yellow.
pub fn color_for_slot(waitlisted: bool) -> &'static str {
    if waitlisted { YELLOW } else { GREEN }
}

/// Remaining free places: red once the roster is full.
pub fn colorize_free_slots(free: usize) -> String {
    if free == 0 {
        format!("{RED}{free}{RESET}")
    } else {
        format!("{GREEN}{free}{RESET}")
    }
}
