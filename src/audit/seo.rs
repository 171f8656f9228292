//! SEO audit
//!
//! Presence checks for the basic on-page signals: title, meta description,
//! a primary heading, and image alt text.

use super::{clamp_score, CategoryFindings};
use crate::analyzer::PageDocument;
use scraper::Selector;
use std::sync::OnceLock;

const MISSING_TITLE_ISSUE: &str = "Missing title tag";
const MISSING_TITLE_SUGGESTION: &str = "Add a descriptive <title> tag to the page";

const MISSING_DESCRIPTION_ISSUE: &str = "Missing meta description";
const MISSING_DESCRIPTION_SUGGESTION: &str = "Add a meta description summarizing the page content";

const MISSING_H1_ISSUE: &str = "Missing h1 heading";
const MISSING_H1_SUGGESTION: &str = "Add a primary h1 heading to structure the content";

const IMG_ALT_ISSUE: &str = "Images missing alt text";
const IMG_ALT_SUGGESTION: &str = "Add descriptive alt text to all images";

fn title_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("title").unwrap())
}

fn description_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse(r#"meta[name="description"]"#).unwrap())
}

fn h1_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("h1").unwrap())
}

fn img_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("img").unwrap())
}

/// Scores basic on-page SEO signals
///
/// Penalties: no title -10, no meta description -10, no h1 -5, any image
/// without an `alt` attribute -5.
pub fn audit_seo(doc: &PageDocument) -> CategoryFindings {
    let document = doc.document();
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if document.select(title_selector()).next().is_none() {
        score -= 10;
        issues.push(MISSING_TITLE_ISSUE.to_string());
        suggestions.push(MISSING_TITLE_SUGGESTION.to_string());
    }

    if document.select(description_selector()).next().is_none() {
        score -= 10;
        issues.push(MISSING_DESCRIPTION_ISSUE.to_string());
        suggestions.push(MISSING_DESCRIPTION_SUGGESTION.to_string());
    }

    if document.select(h1_selector()).next().is_none() {
        score -= 5;
        issues.push(MISSING_H1_ISSUE.to_string());
        suggestions.push(MISSING_H1_SUGGESTION.to_string());
    }

    let any_img_missing_alt = document
        .select(img_selector())
        .any(|img| img.value().attr("alt").is_none());
    if any_img_missing_alt {
        score -= 5;
        issues.push(IMG_ALT_ISSUE.to_string());
        suggestions.push(IMG_ALT_SUGGESTION.to_string());
    }

    CategoryFindings {
        score: clamp_score(score),
        issues,
        suggestions,
    }
}
