use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_test_db, kick, setup_test_db};

fn create_event(db_path: &str, text: &str) {
    kick()
        .args([
            "--db", db_path, "create", "--chat", "100", "--message", "1", text,
        ])
        .assert()
        .success();
}

#[test]
fn test_init_creates_schema() {
    let db_path = init_test_db("cli_init");

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('event','event_member','ban','log')",
            [],
            |row| row.get(0),
        )
        .expect("count tables");
    assert_eq!(tables, 4);
}

#[test]
fn test_create_and_list() {
    let db_path = init_test_db("cli_create_list");

    kick()
        .args([
            "--db",
            &db_path,
            "create",
            "--chat",
            "100",
            "--message",
            "1",
            "title=Friday game; limit=12\ntime=25-12-2030 20:15",
        ])
        .assert()
        .success()
        .stdout(contains("Created event #1"))
        .stdout(contains("2030-12-25 20:15"));

    create_event(&db_path, "title=Earlier game; time=1-6-2030 18:00");

    kick()
        .args(["--db", &db_path, "list", "--chat", "100"])
        .assert()
        .success()
        .stdout(contains("#2 Earlier game").and(contains("#1 Friday game")))
        .stdout(contains("capacity 12"));

    kick()
        .args(["--db", &db_path, "list", "--chat", "555"])
        .assert()
        .success()
        .stdout(contains("No events for chat 555"));
}

#[test]
fn test_create_json_output() {
    let db_path = init_test_db("cli_create_json");

    let output = kick()
        .args([
            "--db",
            &db_path,
            "create",
            "--chat",
            "100",
            "--message",
            "77",
            "--json",
            "title=Json game; адреса=Стадіон; time=1-7-2031 19:30",
        ])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json on stdout");
    assert_eq!(value["title"], "Json game");
    assert_eq!(value["address"], "Стадіон");
    assert_eq!(value["origin_message_id"], 77);
    assert_eq!(value["scheduled_time"], "2031-07-01T19:30:00");
}

#[test]
fn test_create_warns_about_ignored_statements() {
    let db_path = init_test_db("cli_create_warn");

    kick()
        .args([
            "--db",
            &db_path,
            "create",
            "--chat",
            "100",
            "--message",
            "1",
            "limit=many\nwho=knows",
        ])
        .assert()
        .success()
        .stderr(contains("Ignored capacity 'many'"))
        .stderr(contains("Ignored unknown field 'who'"));
}

#[test]
fn test_join_fills_roster_then_waitlist() {
    let db_path = init_test_db("cli_join");
    create_event(&db_path, "title=Tiny; limit=2; time=1-1-2031 19:00");

    for (user, name) in [("1", "Alice"), ("2", "Bob"), ("3", "Carol")] {
        kick()
            .args(["--db", &db_path, "join", "1", "--user", user, "--name", name])
            .assert()
            .success();
    }

    kick()
        .args(["--db", &db_path, "join", "1", "--user", "1", "--name", "Alice"])
        .assert()
        .success()
        .stdout(contains("already joined"))
        .stdout(contains("2 joins"));

    kick()
        .args(["--db", &db_path, "roster", "1"])
        .assert()
        .success()
        .stdout(contains("2/2 confirmed"))
        .stdout(contains("Waitlist"))
        .stdout(contains("Carol"));
}

#[test]
fn test_roster_json_split() {
    let db_path = init_test_db("cli_roster_json");
    create_event(&db_path, "title=Split; limit=1; time=1-1-2031 19:00");

    for user in ["10", "20"] {
        kick()
            .args(["--db", &db_path, "join", "1", "--user", user])
            .assert()
            .success();
    }

    let output = kick()
        .args(["--db", &db_path, "roster", "1", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["capacity"], 1);
    assert_eq!(value["confirmed"][0]["user_id"], 10);
    assert_eq!(value["waitlisted"][0]["user_id"], 20);
}

#[test]
fn test_update_with_flags_and_text() {
    let db_path = init_test_db("cli_update");
    create_event(&db_path, "title=Original; time=1-1-2031 19:00");

    kick()
        .args([
            "--db", &db_path, "update", "1", "--title", "Renamed", "--capacity", "8",
        ])
        .assert()
        .success()
        .stdout(contains("Renamed"))
        .stdout(contains("capacity 8"));

    kick()
        .args(["--db", &db_path, "update", "1", "time=+1 hour; address=Pitch 3"])
        .assert()
        .success()
        .stdout(contains("Pitch 3"))
        .stdout(contains("20:00"));

    kick()
        .args(["--db", &db_path, "update", "1", "--capacity", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid capacity"));

    kick()
        .args(["--db", &db_path, "update", "42", "--title", "Nope"])
        .assert()
        .failure()
        .stderr(contains("Event 42 not found"));
}

#[test]
fn test_ban_blocks_join_until_unban() {
    let db_path = init_test_db("cli_ban");
    create_event(&db_path, "title=Guarded; time=1-1-2031 19:00");

    kick()
        .args([
            "--db", &db_path, "ban", "--chat", "100", "--user", "13", "--for", "+7 day",
        ])
        .assert()
        .success()
        .stdout(contains("banned in chat 100"));

    kick()
        .args(["--db", &db_path, "join", "1", "--user", "13"])
        .assert()
        .failure()
        .stderr(contains("banned"));

    kick()
        .args(["--db", &db_path, "unban", "--chat", "100", "--user", "13"])
        .assert()
        .success()
        .stdout(contains("Ban lifted"));

    kick()
        .args(["--db", &db_path, "join", "1", "--user", "13"])
        .assert()
        .success();
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = init_test_db("cli_log");
    create_event(&db_path, "title=Logged; time=1-1-2031 19:00");
    kick()
        .args(["--db", &db_path, "join", "1", "--user", "1"])
        .assert()
        .success();

    kick()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("create"))
        .stdout(contains("join"))
        .stdout(contains("init"));
}

#[test]
fn test_json_output_on_fresh_database_is_clean() {
    let db_path = setup_test_db("cli_fresh_json");

    let output = kick()
        .args([
            "--db",
            &db_path,
            "create",
            "--chat",
            "100",
            "--message",
            "3",
            "--json",
            "title=Fresh; time=1-8-2031 18:00",
        ])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("only json on stdout");
    assert_eq!(value["title"], "Fresh");

    let fresh = setup_test_db("cli_fresh_init");
    kick()
        .args(["--db", &fresh, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied"));
}

#[test]
fn test_update_rejects_text_together_with_flags() {
    let db_path = init_test_db("cli_update_conflict");
    create_event(&db_path, "title=Original; time=1-1-2031 19:00");

    kick()
        .args([
            "--db",
            &db_path,
            "update",
            "1",
            "--title",
            "Renamed",
            "address=Pitch 9",
        ])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));

    kick()
        .args(["--db", &db_path, "list", "--chat", "100"])
        .assert()
        .success()
        .stdout(contains("Original"));
}

#[test]
fn test_roster_of_event_without_players() {
    let db_path = init_test_db("cli_roster_empty");
    create_event(&db_path, "title=Quiet; limit=4; time=1-1-2031 19:00");

    kick()
        .args(["--db", &db_path, "roster", "1"])
        .assert()
        .success()
        .stdout(contains("0/4 confirmed"))
        .stdout(contains("No players yet."));
}
