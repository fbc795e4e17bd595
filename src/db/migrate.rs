use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists; migration markers are stored there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the migration identified by `version` was already applied.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// `event` and `event_member` tables with the unique roster index.
fn create_event_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS event (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            title             TEXT NOT NULL CHECK(length(title) > 0),
            scheduled_time    INTEGER NOT NULL,
            address           TEXT NOT NULL DEFAULT '',
            capacity          INTEGER NOT NULL DEFAULT 21 CHECK(capacity >= 1),
            created_at        INTEGER NOT NULL,
            origin_message_id INTEGER NOT NULL,
            origin_chat_id    INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_event_chat_time ON event(origin_chat_id, scheduled_time);

        CREATE TABLE IF NOT EXISTS event_member (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id     INTEGER NOT NULL REFERENCES event(id),
            user_id      INTEGER NOT NULL,
            display_name TEXT NOT NULL DEFAULT '',
            handle       TEXT NOT NULL DEFAULT '',
            joined_at    INTEGER NOT NULL,
            join_count   INTEGER NOT NULL DEFAULT 1 CHECK(join_count >= 1)
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_member_event_user ON event_member(event_id, user_id);
        "#,
    )?;
    Ok(())
}

fn create_ban_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS ban (
            chat_id       INTEGER NOT NULL,
            user_id       INTEGER NOT NULL,
            end_timestamp INTEGER NOT NULL,
            PRIMARY KEY (chat_id, user_id)
        );
        "#,
    )?;
    Ok(())
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: &[Migration] = &[
    (
        "20240301_0001_create_event_tables",
        "Created event and event_member tables",
        create_event_tables,
    ),
    (
        "20240315_0002_create_ban_table",
        "Created ban table",
        create_ban_table,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Called from db::initialize::init_db(). Returns `(version, message)` for
/// each migration applied by this call; printing is left to the caller.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<(&'static str, &'static str)>> {
    ensure_log_table(conn)?;
    let mut applied = Vec::new();

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn)?;
        mark_applied(conn, version, message)?;
        applied.push((*version, *message));
    }

    Ok(applied)
}
