//! In-memory storage implementation
//!
//! The default backend: two maps behind one mutex, with per-entity
//! monotonic id counters starting at 1. Records do not survive a restart.

use crate::storage::traits::{NewReport, Storage, StorageError, StorageResult};
use crate::storage::{Report, Website, WebsiteStatus};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory storage backend
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

struct Inner {
    websites: HashMap<i64, Website>,
    reports: HashMap<i64, Report>,
    next_website_id: i64,
    next_report_id: i64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                websites: HashMap::new(),
                reports: HashMap::new(),
                next_website_id: 1,
                next_report_id: 1,
            }),
        }
    }

    fn inner(&self) -> StorageResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Database("storage mutex poisoned".to_string()))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn create_website(&self, url: &str) -> StorageResult<Website> {
        let mut inner = self.inner()?;
        let id = inner.next_website_id;
        inner.next_website_id += 1;

        let website = Website {
            id,
            url: url.to_string(),
            status: WebsiteStatus::Pending,
            created_at: Utc::now(),
        };
        inner.websites.insert(id, website.clone());
        Ok(website)
    }

    fn get_website(&self, id: i64) -> StorageResult<Option<Website>> {
        Ok(self.inner()?.websites.get(&id).cloned())
    }

    fn update_website_status(&self, id: i64, status: WebsiteStatus) -> StorageResult<Website> {
        let mut inner = self.inner()?;
        let website = inner
            .websites
            .get_mut(&id)
            .ok_or(StorageError::WebsiteNotFound(id))?;
        website.status = status;
        Ok(website.clone())
    }

    fn create_report(&self, report: NewReport) -> StorageResult<Report> {
        let mut inner = self.inner()?;
        let id = inner.next_report_id;
        inner.next_report_id += 1;

        let record = Report {
            id,
            website_id: report.website_id,
            seo_score: report.seo_score,
            performance_score: report.performance_score,
            security_score: report.security_score,
            accessibility_score: report.accessibility_score,
            sentiment_score: report.sentiment_score,
            details: report.details,
            created_at: Utc::now(),
        };
        inner.reports.insert(id, record.clone());
        Ok(record)
    }

    fn get_report(&self, id: i64) -> StorageResult<Option<Report>> {
        Ok(self.inner()?.reports.get(&id).cloned())
    }

    fn get_report_for_website(&self, website_id: i64) -> StorageResult<Option<Report>> {
        Ok(self
            .inner()?
            .reports
            .values()
            .filter(|report| report.website_id == website_id)
            .min_by_key(|report| report.id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ReportDetails;

    fn sample_report(website_id: i64) -> NewReport {
        NewReport {
            website_id,
            seo_score: 75,
            performance_score: 100,
            security_score: 60,
            accessibility_score: 70,
            sentiment_score: 85,
            details: ReportDetails::default(),
        }
    }

    #[test]
    fn test_website_ids_start_at_one_and_increment() {
        let storage = MemoryStorage::new();
        let first = storage.create_website("https://a.example").unwrap();
        let second = storage.create_website("https://b.example").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, WebsiteStatus::Pending);
    }

    #[test]
    fn test_website_and_report_counters_are_independent() {
        let storage = MemoryStorage::new();
        storage.create_website("https://a.example").unwrap();
        storage.create_website("https://b.example").unwrap();
        let report = storage.create_report(sample_report(2)).unwrap();
        assert_eq!(report.id, 1);
    }

    #[test]
    fn test_get_unknown_website_returns_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get_website(42).unwrap().is_none());
    }

    #[test]
    fn test_update_status() {
        let storage = MemoryStorage::new();
        let website = storage.create_website("https://a.example").unwrap();
        let updated = storage
            .update_website_status(website.id, WebsiteStatus::Completed)
            .unwrap();
        assert_eq!(updated.status, WebsiteStatus::Completed);
        assert_eq!(
            storage.get_website(website.id).unwrap().unwrap().status,
            WebsiteStatus::Completed
        );
    }

    #[test]
    fn test_update_unknown_website_errors() {
        let storage = MemoryStorage::new();
        let result = storage.update_website_status(7, WebsiteStatus::Failed);
        assert!(matches!(result, Err(StorageError::WebsiteNotFound(7))));
    }

    #[test]
    fn test_report_lookup_by_website() {
        let storage = MemoryStorage::new();
        let website = storage.create_website("https://a.example").unwrap();
        let report = storage.create_report(sample_report(website.id)).unwrap();

        let by_id = storage.get_report(report.id).unwrap().unwrap();
        assert_eq!(by_id.website_id, website.id);

        let by_website = storage
            .get_report_for_website(website.id)
            .unwrap()
            .unwrap();
        assert_eq!(by_website.id, report.id);
    }

    #[test]
    fn test_report_for_website_prefers_lowest_id() {
        let storage = MemoryStorage::new();
        let website = storage.create_website("https://a.example").unwrap();
        let first = storage.create_report(sample_report(website.id)).unwrap();
        storage.create_report(sample_report(website.id)).unwrap();

        let found = storage
            .get_report_for_website(website.id)
            .unwrap()
            .unwrap();
        assert_eq!(found.id, first.id);
    }

    #[test]
    fn test_report_for_website_without_report() {
        let storage = MemoryStorage::new();
        let website = storage.create_website("https://a.example").unwrap();
        assert!(storage
            .get_report_for_website(website.id)
            .unwrap()
            .is_none());
    }
}
