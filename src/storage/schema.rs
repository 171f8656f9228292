//! Database schema definitions
//!
//! SQL schema for the SQLite storage backend.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Submitted websites and their analysis lifecycle status
CREATE TABLE IF NOT EXISTS websites (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- One immutable report per successfully analyzed website
CREATE TABLE IF NOT EXISTS reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    website_id INTEGER NOT NULL REFERENCES websites(id),
    seo_score INTEGER NOT NULL,
    performance_score INTEGER NOT NULL,
    security_score INTEGER NOT NULL,
    accessibility_score INTEGER NOT NULL,
    sentiment_score INTEGER NOT NULL,
    details TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_reports_website ON reports(website_id);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
