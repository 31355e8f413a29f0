//! Document back-ends.

use crate::error::{EngineError, EngineResult};

use super::layout::Document;

/// Turns a laid-out [`Document`] into file bytes.
///
/// Implementations must be pure with respect to the document: rendering the
/// same document twice yields the same bytes.
pub trait DocumentRenderer: Send + Sync {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// MIME type of the rendered bytes.
    fn media_type(&self) -> &'static str;

    /// Renders the document.
    fn render(&self, document: &Document) -> EngineResult<Vec<u8>>;
}

/// Writes the layout model itself as pretty-printed JSON.
///
/// Print services and PDF back-ends consume this format directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLayoutRenderer;

impl DocumentRenderer for JsonLayoutRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn media_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, document: &Document) -> EngineResult<Vec<u8>> {
        serde_json::to_vec_pretty(document).map_err(|e| EngineError::RenderError {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::{Orientation, Page, PaperSize, TextElement};

    #[test]
    fn test_json_layout_contains_pages_and_paper() {
        let mut document = Document::new("PAYSLIP", PaperSize::LETTER, Orientation::Portrait);
        let mut page = Page::default();
        page.text(TextElement::new(36.0, 48.0, "NET PAY: 6,110.50"));
        document.pages.push(page);

        let bytes = JsonLayoutRenderer.render(&document).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["title"], "PAYSLIP");
        assert_eq!(value["paper"]["name"], "letter");
        assert_eq!(value["orientation"], "portrait");
        assert_eq!(value["pages"][0]["elements"][0]["type"], "text");
        assert_eq!(value["pages"][0]["elements"][0]["text"], "NET PAY: 6,110.50");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let document = Document::new("PAYSLIP", PaperSize::LETTER, Orientation::Portrait);
        assert_eq!(
            JsonLayoutRenderer.render(&document).unwrap(),
            JsonLayoutRenderer.render(&document).unwrap()
        );
    }
}
