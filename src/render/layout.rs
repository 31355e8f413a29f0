//! Page layout model.
//!
//! Adapters describe a report as pages of positioned text and tables; a
//! [`DocumentRenderer`](super::DocumentRenderer) turns that description into
//! bytes. Coordinates are in points from the top-left corner of the page.

use serde::Serialize;

/// Page margin on every side.
pub const MARGIN: f32 = 36.0;

/// Vertical distance between consecutive text lines at body size.
pub const LINE_HEIGHT: f32 = 12.0;

/// Body text size.
pub const BODY_SIZE: f32 = 9.0;

/// Height of one table row, header included.
pub const ROW_HEIGHT: f32 = 14.0;

/// Paper orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

/// Paper size in points, portrait dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperSize {
    /// Name printed in print dialogs.
    pub name: &'static str,
    /// Portrait width.
    pub width: f32,
    /// Portrait height.
    pub height: f32,
}

impl PaperSize {
    /// US Letter, 8.5 x 11 in.
    pub const LETTER: PaperSize = PaperSize {
        name: "letter",
        width: 612.0,
        height: 792.0,
    };

    /// US Legal, 8.5 x 14 in.
    pub const LEGAL: PaperSize = PaperSize {
        name: "legal",
        width: 612.0,
        height: 1008.0,
    };

    /// Width and height for the given orientation.
    pub fn oriented(self, orientation: Orientation) -> (f32, f32) {
        match orientation {
            Orientation::Portrait => (self.width, self.height),
            Orientation::Landscape => (self.height, self.width),
        }
    }
}

/// Horizontal alignment relative to an element's x coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// x is the left edge.
    #[default]
    Left,
    /// x is the center.
    Center,
    /// x is the right edge.
    Right,
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    /// Horizontal anchor.
    pub x: f32,
    /// Baseline.
    pub y: f32,
    /// Font size in points.
    pub size: f32,
    /// Bold face.
    pub bold: bool,
    /// Alignment around `x`.
    pub align: Align,
    /// Content.
    pub text: String,
}

impl TextElement {
    /// Left-aligned body text.
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            size: BODY_SIZE,
            bold: false,
            align: Align::Left,
            text: text.into(),
        }
    }

    /// Sets bold face.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the font size.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Sets the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// A table column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Header cell.
    pub header: String,
    /// Width in points.
    pub width: f32,
    /// Cell alignment.
    pub align: Align,
}

impl Column {
    /// Left-aligned text column.
    pub fn text(header: impl Into<String>, width: f32) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Left,
        }
    }

    /// Right-aligned numeric column.
    pub fn number(header: impl Into<String>, width: f32) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Right,
        }
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// One cell per column.
    pub cells: Vec<String>,
    /// Printed bold with a rule above (section headings, totals).
    pub emphasis: bool,
}

impl TableRow {
    /// A plain row.
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            emphasis: false,
        }
    }

    /// A bold row.
    pub fn emphasized(cells: Vec<String>) -> Self {
        Self {
            cells,
            emphasis: true,
        }
    }
}

/// A table anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableElement {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Column definitions; headers are repeated on every page.
    pub columns: Vec<Column>,
    /// Body rows.
    pub rows: Vec<TableRow>,
}

impl TableElement {
    /// Height of the table including its header row.
    pub fn height(&self) -> f32 {
        (self.rows.len() + 1) as f32 * ROW_HEIGHT
    }

    /// Combined width of all columns.
    pub fn width(&self) -> f32 {
        self.columns.iter().map(|column| column.width).sum()
    }
}

/// Anything placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A text line.
    Text(TextElement),
    /// A table.
    Table(TableElement),
    /// A horizontal rule from `x1` to `x2` at `y`.
    Rule {
        /// Start.
        x1: f32,
        /// End.
        x2: f32,
        /// Vertical position.
        y: f32,
    },
}

/// One printed page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    /// Elements in drawing order.
    pub elements: Vec<Element>,
}

impl Page {
    /// Adds a text line.
    pub fn text(&mut self, element: TextElement) {
        self.elements.push(Element::Text(element));
    }

    /// Adds a table.
    pub fn table(&mut self, element: TableElement) {
        self.elements.push(Element::Table(element));
    }

    /// Adds a horizontal rule.
    pub fn rule(&mut self, x1: f32, x2: f32, y: f32) {
        self.elements.push(Element::Rule { x1, x2, y });
    }

    /// Iterates over the text lines on the page.
    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Iterates over the tables on the page.
    pub fn tables(&self) -> impl Iterator<Item = &TableElement> {
        self.elements.iter().filter_map(|element| match element {
            Element::Table(table) => Some(table),
            _ => None,
        })
    }
}

/// A complete paged document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Document title (metadata).
    pub title: String,
    /// Paper size.
    pub paper: PaperSize,
    /// Orientation for every page.
    pub orientation: Orientation,
    /// Pages in print order.
    pub pages: Vec<Page>,
}

impl Document {
    /// Creates an empty document.
    pub fn new(title: impl Into<String>, paper: PaperSize, orientation: Orientation) -> Self {
        Self {
            title: title.into(),
            paper,
            orientation,
            pages: Vec::new(),
        }
    }

    /// Printable width inside the margins.
    pub fn content_width(&self) -> f32 {
        self.paper.oriented(self.orientation).0 - 2.0 * MARGIN
    }

    /// Printable height inside the margins.
    pub fn content_height(&self) -> f32 {
        self.paper.oriented(self.orientation).1 - 2.0 * MARGIN
    }

    /// Horizontal center of the page.
    pub fn center_x(&self) -> f32 {
        self.paper.oriented(self.orientation).0 / 2.0
    }

    /// Every text line in the document, in page order.
    pub fn all_text(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| page.texts().map(|text| text.text.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_dimensions() {
        assert_eq!(
            PaperSize::LEGAL.oriented(Orientation::Landscape),
            (1008.0, 612.0)
        );
        assert_eq!(
            PaperSize::LETTER.oriented(Orientation::Portrait),
            (612.0, 792.0)
        );
    }

    #[test]
    fn test_content_area_excludes_margins() {
        let document = Document::new("Test", PaperSize::LETTER, Orientation::Portrait);
        assert_eq!(document.content_width(), 540.0);
        assert_eq!(document.content_height(), 720.0);
        assert_eq!(document.center_x(), 306.0);
    }

    #[test]
    fn test_text_builder() {
        let text = TextElement::new(10.0, 20.0, "NET PAY")
            .bold()
            .size(12.0)
            .align(Align::Right);
        assert!(text.bold);
        assert_eq!(text.size, 12.0);
        assert_eq!(text.align, Align::Right);
    }

    #[test]
    fn test_page_accessors() {
        let mut page = Page::default();
        page.text(TextElement::new(0.0, 0.0, "a"));
        page.rule(0.0, 10.0, 5.0);
        page.table(TableElement {
            x: 0.0,
            y: 0.0,
            columns: vec![Column::text("Name", 100.0)],
            rows: vec![TableRow::new(vec!["x".to_string()])],
        });
        assert_eq!(page.texts().count(), 1);
        assert_eq!(page.tables().count(), 1);
        assert_eq!(page.elements.len(), 3);
    }

    #[test]
    fn test_element_serialization_is_tagged() {
        let element = Element::Rule {
            x1: 0.0,
            x2: 10.0,
            y: 5.0,
        };
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"type\":\"rule\""));
    }
}
