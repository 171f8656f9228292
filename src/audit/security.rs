//! Security audit
//!
//! Inspects response headers only; the document plays no part. Issue strings
//! are static, one per missing header.

use super::{clamp_score, CategoryFindings};
use reqwest::header::HeaderMap;

const CSP_ISSUE: &str = "Missing Content Security Policy header";
const CSP_SUGGESTION: &str = "Implement Content Security Policy";

const FRAME_OPTIONS_ISSUE: &str = "Missing X-Frame-Options header";
const FRAME_OPTIONS_SUGGESTION: &str = "Add X-Frame-Options header to prevent clickjacking";

const XSS_PROTECTION_ISSUE: &str = "Missing X-XSS-Protection header";
const XSS_PROTECTION_SUGGESTION: &str = "Enable X-XSS-Protection header";

/// Scores response-header hardening
///
/// Penalties: no `Content-Security-Policy` -20, no `X-Frame-Options` -10,
/// no `X-XSS-Protection` -10.
pub fn audit_security(headers: &HeaderMap) -> CategoryFindings {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if headers.get("content-security-policy").is_none() {
        score -= 20;
        issues.push(CSP_ISSUE.to_string());
        suggestions.push(CSP_SUGGESTION.to_string());
    }

    if headers.get("x-frame-options").is_none() {
        score -= 10;
        issues.push(FRAME_OPTIONS_ISSUE.to_string());
        suggestions.push(FRAME_OPTIONS_SUGGESTION.to_string());
    }

    if headers.get("x-xss-protection").is_none() {
        score -= 10;
        issues.push(XSS_PROTECTION_ISSUE.to_string());
        suggestions.push(XSS_PROTECTION_SUGGESTION.to_string());
    }

    CategoryFindings {
        score: clamp_score(score),
        issues,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn headers_with(names: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for name in names {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static("enabled"),
            );
        }
        headers
    }

    #[test]
    fn test_all_headers_present_scores_100() {
        let headers = headers_with(&[
            "content-security-policy",
            "x-frame-options",
            "x-xss-protection",
        ]);
        let findings = audit_security(&headers);
        assert_eq!(findings.score, 100);
        assert!(findings.issues.is_empty());
    }

    #[test]
    fn test_no_headers_scores_60() {
        let findings = audit_security(&HeaderMap::new());
        assert_eq!(findings.score, 60);
        assert_eq!(findings.issues.len(), 3);
        assert_eq!(findings.suggestions.len(), 3);
    }

    #[test]
    fn test_missing_csp_costs_20() {
        let headers = headers_with(&["x-frame-options", "x-xss-protection"]);
        let findings = audit_security(&headers);
        assert_eq!(findings.score, 80);
        assert_eq!(findings.issues, vec![CSP_ISSUE.to_string()]);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Content-Security-Policy",
            HeaderValue::from_static("default-src 'self'"),
        );
        headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
        headers.insert("X-XSS-Protection", HeaderValue::from_static("1; mode=block"));
        assert_eq!(audit_security(&headers).score, 100);
    }

    #[test]
    fn test_audit_is_idempotent() {
        let headers = headers_with(&["x-frame-options"]);
        assert_eq!(audit_security(&headers), audit_security(&headers));
    }
}
