//! SQL DDL for initializing the database schema.

/// SQLite schema includes:
/// - `todos` table; timestamps are RFC3339 text written by the column defaults on insert
/// - `idx_todos_created_at` backing the newest-first listing
///
/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')), -- RFC3339
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')) -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos(created_at);
"#;
