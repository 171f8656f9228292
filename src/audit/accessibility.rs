//! Accessibility audit
//!
//! Attribute-presence checks: image alt text, link aria labels, and the
//! document language attribute.

use super::{clamp_score, CategoryFindings};
use crate::analyzer::PageDocument;
use scraper::Selector;
use std::sync::OnceLock;

const IMG_ALT_ISSUE: &str = "Images missing alt text";
const IMG_ALT_SUGGESTION: &str = "Add descriptive alt text to all images";

const ARIA_LABEL_ISSUE: &str = "Links missing aria labels";
const ARIA_LABEL_SUGGESTION: &str = "Add aria labels to all navigation links";

const LANG_ISSUE: &str = "Language attribute missing on HTML tag";
const LANG_SUGGESTION: &str = "Specify language in HTML tag";

fn img_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("img").unwrap())
}

fn anchor_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("a").unwrap())
}

fn html_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("html").unwrap())
}

/// Scores accessibility signals
///
/// Penalties: any image without `alt` -10, any link without `aria-label`
/// -10, `<html>` without `lang` -10.
pub fn audit_accessibility(doc: &PageDocument) -> CategoryFindings {
    let document = doc.document();
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    let any_img_missing_alt = document
        .select(img_selector())
        .any(|img| img.value().attr("alt").is_none());
    if any_img_missing_alt {
        score -= 10;
        issues.push(IMG_ALT_ISSUE.to_string());
        suggestions.push(IMG_ALT_SUGGESTION.to_string());
    }

    let any_anchor_missing_label = document
        .select(anchor_selector())
        .any(|a| a.value().attr("aria-label").is_none());
    if any_anchor_missing_label {
        score -= 10;
        issues.push(ARIA_LABEL_ISSUE.to_string());
        suggestions.push(ARIA_LABEL_SUGGESTION.to_string());
    }

    let lang_present = document
        .select(html_selector())
        .next()
        .map(|html| html.value().attr("lang").is_some())
        .unwrap_or(false);
    if !lang_present {
        score -= 10;
        issues.push(LANG_ISSUE.to_string());
        suggestions.push(LANG_SUGGESTION.to_string());
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

    fn parse(html: &str) -> PageDocument {
        PageDocument::parse(html).unwrap()
    }

    #[test]
    fn test_accessible_page_scores_100() {
        let doc = parse(
            r#"<html lang="en"><body><img src="a.png" alt="logo">
            <a href="/about" aria-label="About us">About</a>Hello</body></html>"#,
        );
        let findings = audit_accessibility(&doc);
        assert_eq!(findings.score, 100);
        assert!(findings.issues.is_empty());
    }

    #[test]
    fn test_all_checks_fail_scores_70() {
        let doc = parse(
            r#"<html><body><img src="a.png"><a href="/x">x</a>Hello</body></html>"#,
        );
        let findings = audit_accessibility(&doc);
        assert_eq!(findings.score, 70);
        assert_eq!(findings.issues.len(), 3);
    }

    #[test]
    fn test_missing_lang_only() {
        let doc = parse(
            r#"<html><body><img src="a.png" alt="a">
            <a href="/x" aria-label="x">x</a>Hello</body></html>"#,
        );
        let findings = audit_accessibility(&doc);
        assert_eq!(findings.score, 90);
        assert_eq!(findings.issues, vec![LANG_ISSUE.to_string()]);
        assert_eq!(findings.suggestions, vec![LANG_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_one_unlabeled_link_among_many() {
        let doc = parse(
            r#"<html lang="en"><body>
            <a href="/a" aria-label="a">a</a>
            <a href="/b">b</a>
            Hello</body></html>"#,
        );
        let findings = audit_accessibility(&doc);
        assert_eq!(findings.score, 90);
        assert_eq!(findings.issues, vec![ARIA_LABEL_ISSUE.to_string()]);
    }

    #[test]
    fn test_page_without_images_or_links() {
        let doc = parse(r#"<html lang="en"><body>Hello</body></html>"#);
        assert_eq!(audit_accessibility(&doc).score, 100);
    }
}
