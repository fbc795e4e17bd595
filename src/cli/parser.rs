use clap::{Parser, Subcommand};

/// Command-line interface definition for kickoff
/// Schedule pickup games from free-text messages and keep the roster in SQLite
#[derive(Parser)]
#[command(
    name = "kickoff",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule pickup games from free-text messages and track a capacity-bounded roster",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create an event from a specification message
    Create {
        /// Chat the message was posted in
        #[arg(long = "chat")]
        chat: i64,

        /// Id of the originating message
        #[arg(long = "message")]
        message: i64,

        /// Message timestamp (seconds since epoch); defaults to now
        #[arg(long = "at")]
        at: Option<i64>,

        /// Specification text, e.g. "title=Friday game; time=+1 day 20:00".
        /// Read from stdin when omitted.
        text: Option<String>,

        #[arg(long = "json", help = "Print the created event as JSON")]
        json: bool,
    },

    /// Update an existing event
    Update {
        event_id: i64,

        /// Specification text applied on top of the stored event
        #[arg(conflicts_with_all = ["title", "time", "address", "capacity"])]
        text: Option<String>,

        #[arg(long = "title")]
        title: Option<String>,

        /// Date/time hint resolved against the current event time
        #[arg(long = "time", help = "Date/time hint, e.g. '25-12-2025', '+1 hour', 'tomorrow 19:30'")]
        time: Option<String>,

        #[arg(long = "address")]
        address: Option<String>,

        #[arg(long = "capacity")]
        capacity: Option<u32>,
    },

    /// List the events of a chat, soonest first
    List {
        #[arg(long = "chat")]
        chat: i64,

        #[arg(long = "upcoming", help = "Hide events whose time has passed")]
        upcoming: bool,

        #[arg(long = "json")]
        json: bool,
    },

    /// Join an event (repeated joins only bump the counter)
    Join {
        event_id: i64,

        #[arg(long = "user")]
        user: i64,

        #[arg(long = "name", default_value = "")]
        name: String,

        #[arg(long = "handle", default_value = "")]
        handle: String,
    },

    /// Show confirmed players and the waitlist
    Roster {
        event_id: i64,

        #[arg(long = "json")]
        json: bool,
    },

    /// Ban a user from joining events of a chat
    Ban {
        #[arg(long = "chat")]
        chat: i64,

        #[arg(long = "user")]
        user: i64,

        /// Ban length as a date/time hint, e.g. "+7 day" or "31-12-2025 23:59"
        #[arg(long = "for", value_name = "HINT")]
        duration: String,
    },

    /// Lift a ban
    Unban {
        #[arg(long = "chat")]
        chat: i64,

        #[arg(long = "user")]
        user: i64,
    },
}
