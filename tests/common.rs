#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use kickoff::core::event::EventLogic;
use kickoff::core::resolver::DateTimeResolver;
use kickoff::core::spec_parser::{EventDefaults, SpecParser};
use kickoff::db::pool::DbPool;
use kickoff::models::event::{EventRecord, Origin};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CHAT: i64 = -100_200;

/// Binary under test; HOME points at the temp dir so no real config is read.
pub fn kick() -> Command {
    let mut cmd = cargo_bin_cmd!("kickoff");
    cmd.env("HOME", env::temp_dir());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kickoff.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB through the CLI.
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    kick()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test datetime")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Resolver pinned to 2024-01-01 so defaults land on 2024-01-02 19:00.
pub fn fixed_resolver() -> DateTimeResolver {
    DateTimeResolver::new(day(2024, 1, 1))
}

pub fn origin(message_id: i64) -> Origin {
    Origin {
        chat_id: CHAT,
        message_id,
        message_time: dt(2024, 1, 1, 12, 0),
    }
}

/// Create an event in `pool` from `text` with the default template.
pub fn create(pool: &mut DbPool, text: &str) -> EventRecord {
    let defaults = EventDefaults::default();
    let parser = SpecParser::new(&defaults, fixed_resolver());
    EventLogic::create_event(pool, &parser, text, origin(1))
        .expect("create event")
        .event
}
