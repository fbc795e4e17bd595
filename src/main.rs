//! kickoff main entrypoint.

use kickoff::run;
use kickoff::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
