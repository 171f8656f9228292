//! Performance audit
//!
//! Count thresholds over the tags that dominate page weight: scripts,
//! external stylesheets, and images.

use super::{clamp_score, CategoryFindings};
use crate::analyzer::PageDocument;
use scraper::Selector;
use std::sync::OnceLock;

const MAX_SCRIPT_TAGS: usize = 15;
const MAX_STYLESHEETS: usize = 5;
const MAX_IMAGES: usize = 20;

const SCRIPTS_ISSUE: &str = "High number of script tags detected";
const SCRIPTS_SUGGESTION: &str = "Consider bundling JavaScript files";

const STYLESHEETS_ISSUE: &str = "Multiple external stylesheets found";
const STYLESHEETS_SUGGESTION: &str = "Combine CSS files to reduce HTTP requests";

const IMAGES_ISSUE: &str = "Large number of images may impact load time";
const IMAGES_SUGGESTION: &str = "Implement lazy loading for images";

fn script_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("script").unwrap())
}

fn stylesheet_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse(r#"link[rel="stylesheet"]"#).unwrap())
}

fn img_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("img").unwrap())
}

/// Scores page weight signals
///
/// Penalties: more than 15 scripts -10, more than 5 stylesheets -10, more
/// than 20 images -10.
pub fn audit_performance(doc: &PageDocument) -> CategoryFindings {
    let document = doc.document();
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if document.select(script_selector()).count() > MAX_SCRIPT_TAGS {
        score -= 10;
        issues.push(SCRIPTS_ISSUE.to_string());
        suggestions.push(SCRIPTS_SUGGESTION.to_string());
    }

    if document.select(stylesheet_selector()).count() > MAX_STYLESHEETS {
        score -= 10;
        issues.push(STYLESHEETS_ISSUE.to_string());
        suggestions.push(STYLESHEETS_SUGGESTION.to_string());
    }

    if document.select(img_selector()).count() > MAX_IMAGES {
        score -= 10;
        issues.push(IMAGES_ISSUE.to_string());
        suggestions.push(IMAGES_SUGGESTION.to_string());
    }

    CategoryFindings {
        score: clamp_score(score),
        issues,
        suggestions,
    }
}
