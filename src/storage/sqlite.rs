//! SQLite storage implementation
//!
//! Durable drop-in behind the same trait as the in-memory backend. The
//! report's `details` object is stored as JSON text and round-tripped
//! verbatim.

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{NewReport, Storage, StorageError, StorageResult};
use crate::storage::{Report, ReportDetails, Website, WebsiteStatus};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Opens (or creates) the database at the given path
    pub fn new(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Database("connection mutex poisoned".to_string()))
    }
}

fn website_from_row(row: &Row<'_>) -> rusqlite::Result<Website> {
    Ok(Website {
        id: row.get(0)?,
        url: row.get(1)?,
        status: WebsiteStatus::from_db_string(&row.get::<_, String>(2)?)
            .unwrap_or(WebsiteStatus::Pending),
        created_at: row.get(3)?,
    })
}

fn report_from_row(row: &Row<'_>) -> rusqlite::Result<(Report, String)> {
    let report = Report {
        id: row.get(0)?,
        website_id: row.get(1)?,
        seo_score: row.get(2)?,
        performance_score: row.get(3)?,
        security_score: row.get(4)?,
        accessibility_score: row.get(5)?,
        sentiment_score: row.get(6)?,
        details: ReportDetails::default(),
        created_at: row.get(8)?,
    };
    let details_json: String = row.get(7)?;
    Ok((report, details_json))
}

fn attach_details((mut report, details_json): (Report, String)) -> StorageResult<Report> {
    report.details = serde_json::from_str(&details_json)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    Ok(report)
}

const REPORT_COLUMNS: &str = "id, website_id, seo_score, performance_score, security_score, \
                              accessibility_score, sentiment_score, details, created_at";

impl Storage for SqliteStorage {
    fn create_website(&self, url: &str) -> StorageResult<Website> {
        let conn = self.conn()?;
        let now: DateTime<Utc> = Utc::now();
        conn.execute(
            "INSERT INTO websites (url, status, created_at) VALUES (?1, ?2, ?3)",
            params![url, WebsiteStatus::Pending.to_db_string(), now],
        )?;

        Ok(Website {
            id: conn.last_insert_rowid(),
            url: url.to_string(),
            status: WebsiteStatus::Pending,
            created_at: now,
        })
    }

    fn get_website(&self, id: i64) -> StorageResult<Option<Website>> {
        let conn = self.conn()?;
        let website = conn
            .query_row(
                "SELECT id, url, status, created_at FROM websites WHERE id = ?1",
                params![id],
                website_from_row,
            )
            .optional()?;
        Ok(website)
    }

    fn update_website_status(&self, id: i64, status: WebsiteStatus) -> StorageResult<Website> {
        {
            let conn = self.conn()?;
            let updated = conn.execute(
                "UPDATE websites SET status = ?1 WHERE id = ?2",
                params![status.to_db_string(), id],
            )?;
            if updated == 0 {
                return Err(StorageError::WebsiteNotFound(id));
            }
        }
        self.get_website(id)?.ok_or(StorageError::WebsiteNotFound(id))
    }

    fn create_report(&self, report: NewReport) -> StorageResult<Report> {
        let details_json = serde_json::to_string(&report.details)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let conn = self.conn()?;
        let now: DateTime<Utc> = Utc::now();
        conn.execute(
            "INSERT INTO reports (website_id, seo_score, performance_score, security_score, \
             accessibility_score, sentiment_score, details, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                report.website_id,
                report.seo_score,
                report.performance_score,
                report.security_score,
                report.accessibility_score,
                report.sentiment_score,
                details_json,
                now,
            ],
        )?;

        Ok(Report {
            id: conn.last_insert_rowid(),
            website_id: report.website_id,
            seo_score: report.seo_score,
            performance_score: report.performance_score,
            security_score: report.security_score,
            accessibility_score: report.accessibility_score,
            sentiment_score: report.sentiment_score,
            details: report.details,
            created_at: now,
        })
    }

    fn get_report(&self, id: i64) -> StorageResult<Option<Report>> {
        let row = {
            let conn = self.conn()?;
            conn.query_row(
                &format!("SELECT {} FROM reports WHERE id = ?1", REPORT_COLUMNS),
                params![id],
                report_from_row,
            )
            .optional()?
        };
        row.map(attach_details).transpose()
    }

    fn get_report_for_website(&self, website_id: i64) -> StorageResult<Option<Report>> {
        let row = {
            let conn = self.conn()?;
            conn.query_row(
                &format!(
                    "SELECT {} FROM reports WHERE website_id = ?1 ORDER BY id ASC LIMIT 1",
                    REPORT_COLUMNS
                ),
                params![website_id],
                report_from_row,
            )
            .optional()?
        };
        row.map(attach_details).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CategoryDetails, SentimentDetails};

    fn sample_details() -> ReportDetails {
        ReportDetails {
            seo: CategoryDetails {
                issues: vec!["Missing title tag".to_string()],
                suggestions: vec!["Add a descriptive <title> tag to the page".to_string()],
            },
            sentiment: SentimentDetails {
                score: 88.0,
                tone: "confident".to_string(),
                suggestions: vec!["Tighten the intro".to_string()],
            },
            ..Default::default()
        }
    }

    fn sample_report(website_id: i64) -> NewReport {
        NewReport {
            website_id,
            seo_score: 90,
            performance_score: 100,
            security_score: 60,
            accessibility_score: 80,
            sentiment_score: 88,
            details: sample_details(),
        }
    }

    #[test]
    fn test_create_and_get_website() {
        let storage = SqliteStorage::new_in_memory().unwrap();
        let website = storage.create_website("https://example.com").unwrap();
        assert_eq!(website.id, 1);
        assert_eq!(website.status, WebsiteStatus::Pending);

        let fetched = storage.get_website(website.id).unwrap().unwrap();
        assert_eq!(fetched, website);
    }

    #[test]
    fn test_update_website_status() {
        let storage = SqliteStorage::new_in_memory().unwrap();
        let website = storage.create_website("https://example.com").unwrap();
        let updated = storage
            .update_website_status(website.id, WebsiteStatus::Failed)
            .unwrap();
        assert_eq!(updated.status, WebsiteStatus::Failed);
    }

    #[test]
    fn test_update_unknown_website_errors() {
        let storage = SqliteStorage::new_in_memory().unwrap();
        let result = storage.update_website_status(9, WebsiteStatus::Completed);
        assert!(matches!(result, Err(StorageError::WebsiteNotFound(9))));
    }

    #[test]
    fn test_report_details_roundtrip() {
        let storage = SqliteStorage::new_in_memory().unwrap();
        let website = storage.create_website("https://example.com").unwrap();
        let created = storage.create_report(sample_report(website.id)).unwrap();

        let fetched = storage.get_report(created.id).unwrap().unwrap();
        assert_eq!(fetched.details, sample_details());
        assert_eq!(fetched.sentiment_score, 88);
    }

    #[test]
    fn test_report_for_website() {
        let storage = SqliteStorage::new_in_memory().unwrap();
        let website = storage.create_website("https://example.com").unwrap();
        let created = storage.create_report(sample_report(website.id)).unwrap();

        let fetched = storage
            .get_report_for_website(website.id)
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert!(storage.get_report_for_website(99).unwrap().is_none());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gauge.db");

        {
            let storage = SqliteStorage::new(&path).unwrap();
            storage.create_website("https://example.com").unwrap();
        }

        let storage = SqliteStorage::new(&path).unwrap();
        let website = storage.get_website(1).unwrap().unwrap();
        assert_eq!(website.url, "https://example.com");
    }
}
