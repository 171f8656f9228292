//! Static HTML audits
//!
//! Each audit is a pure function from a parsed document (plus response
//! headers for the security audit) to a 0-100 score with paired issue and
//! suggestion strings. Scores start at 100 and lose a fixed penalty per
//! failed check; the floor is clamped at 0. Checks are independent presence
//! and count predicates, so the same document always produces the same
//! findings.

mod accessibility;
mod performance;
mod security;
mod seo;

pub use accessibility::audit_accessibility;
pub use performance::audit_performance;
pub use security::audit_security;
pub use seo::audit_seo;

use crate::analyzer::PageDocument;
use crate::storage::CategoryDetails;
use reqwest::header::HeaderMap;

/// Result of one category audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFindings {
    pub score: u8,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl From<CategoryFindings> for CategoryDetails {
    fn from(findings: CategoryFindings) -> Self {
        CategoryDetails {
            issues: findings.issues,
            suggestions: findings.suggestions,
        }
    }
}

/// All four category audits for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAudit {
    pub seo: CategoryFindings,
    pub performance: CategoryFindings,
    pub security: CategoryFindings,
    pub accessibility: CategoryFindings,
}

/// Runs the four audits; they are independent and order-insensitive
pub fn run(doc: &PageDocument, headers: &HeaderMap) -> StaticAudit {
    StaticAudit {
        seo: audit_seo(doc),
        performance: audit_performance(doc),
        security: audit_security(headers),
        accessibility: audit_accessibility(doc),
    }
}

/// Clamps a penalized score at the floor; scores never start above 100
pub(crate) fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_floor() {
        assert_eq!(clamp_score(-30), 0);
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(75), 75);
        assert_eq!(clamp_score(100), 100);
    }
}
