//! HTML parsing and content validation
//!
//! Wraps the parsed document and precomputes the visible text (concatenated
//! text nodes under `<body>`). Documents with no body or no visible text are
//! rejected before any scoring or LLM work happens.

use scraper::{Html, Selector};
use std::sync::OnceLock;
use thiserror::Error;

/// Content validation failures
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No body element found in document")]
    MissingBody,

    #[error("No visible text content found on the page")]
    EmptyContent,
}

fn body_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("body").unwrap())
}

/// A parsed page that passed content validation
pub struct PageDocument {
    html: Html,
    visible_text: String,
}

impl PageDocument {
    /// Parses raw HTML and validates that it has analyzable content
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw HTML text
    ///
    /// # Returns
    ///
    /// * `Ok(PageDocument)` - Parsed document with non-empty visible text
    /// * `Err(ValidationError)` - Document has no body or no visible text
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let html = Html::parse_document(raw);

        let body = html
            .select(body_selector())
            .next()
            .ok_or(ValidationError::MissingBody)?;

        let visible_text = body.text().collect::<String>().trim().to_string();
        if visible_text.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        Ok(Self { html, visible_text })
    }

    /// The concatenated, trimmed text content under `<body>`
    pub fn visible_text(&self) -> &str {
        &self.visible_text
    }

    /// The underlying document, for selector queries by the scorers
    pub fn document(&self) -> &Html {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_content() {
        let doc = PageDocument::parse(
            r#"<html><head><title>Test</title></head><body><p>Hello world</p></body></html>"#,
        )
        .unwrap();
        assert_eq!(doc.visible_text(), "Hello world");
    }

    #[test]
    fn test_visible_text_concatenates_nested_nodes() {
        let doc = PageDocument::parse(
            r#"<html><body><div>Hello <span>nested</span></div> world</body></html>"#,
        )
        .unwrap();
        assert!(doc.visible_text().contains("Hello"));
        assert!(doc.visible_text().contains("nested"));
        assert!(doc.visible_text().contains("world"));
    }

    #[test]
    fn test_empty_body_rejected() {
        let result = PageDocument::parse(r#"<html><head></head><body></body></html>"#);
        assert!(matches!(result, Err(ValidationError::EmptyContent)));
    }

    #[test]
    fn test_whitespace_only_body_rejected() {
        let result = PageDocument::parse("<html><body>   \n\t  </body></html>");
        assert!(matches!(result, Err(ValidationError::EmptyContent)));
    }

    #[test]
    fn test_head_text_does_not_count_as_visible() {
        // A title alone is not analyzable page content
        let result = PageDocument::parse(r#"<html><head><title>Only a title</title></head><body></body></html>"#);
        assert!(matches!(result, Err(ValidationError::EmptyContent)));
    }

    #[test]
    fn test_markup_without_explicit_body_still_parses() {
        // html5ever synthesizes the body element around bare content
        let doc = PageDocument::parse("<p>Fragment</p>").unwrap();
        assert_eq!(doc.visible_text(), "Fragment");
    }
}
