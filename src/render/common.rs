//! Layout pieces shared by the report adapters: the report header, paginated
//! tables and the signatory block.

use crate::calculation::{format_coverage, format_long_date};
use crate::config::ReportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollRecord, ReportKind, ReportRequest};

use super::layout::{
    Align, Column, Document, LINE_HEIGHT, MARGIN, Page, ROW_HEIGHT, TableElement, TableRow,
    TextElement,
};

/// Vertical space taken by [`draw_signatories`], measured from its `top`.
pub(crate) const SIGNATORY_BLOCK_HEIGHT: f32 = LINE_HEIGHT * 5.5;

/// Fails on the first record without a printable employee name.
pub(crate) fn ensure_display_names(records: &[PayrollRecord]) -> EngineResult<()> {
    match records.iter().position(|record| !record.has_display_name()) {
        Some(record_index) => {
            tracing::warn!(record_index, "Record has no employee name");
            Err(EngineError::MissingDisplayField {
                field: "employee_name".to_string(),
                record_index,
            })
        }
        None => Ok(()),
    }
}

/// Header context captured once per document.
pub(crate) struct ReportHeader<'a> {
    pub config: &'a ReportConfig,
    pub kind: ReportKind,
    pub request: &'a ReportRequest,
    pub center_x: f32,
    pub right_x: f32,
}

impl<'a> ReportHeader<'a> {
    pub fn new(
        document: &Document,
        config: &'a ReportConfig,
        kind: ReportKind,
        request: &'a ReportRequest,
    ) -> Self {
        Self {
            config,
            kind,
            request,
            center_x: document.center_x(),
            right_x: MARGIN + document.content_width(),
        }
    }

    /// Draws the header starting at `top` and returns the y below it.
    pub fn draw(&self, page: &mut Page, top: f32) -> f32 {
        let organization = &self.config.organization;
        let mut y = top + LINE_HEIGHT;

        page.text(
            TextElement::new(self.center_x, y, &organization.name)
                .bold()
                .size(12.0)
                .align(Align::Center),
        );
        if let Some(address) = &organization.address {
            y += LINE_HEIGHT;
            page.text(TextElement::new(self.center_x, y, address).align(Align::Center));
        }

        y += LINE_HEIGHT * 1.5;
        page.text(
            TextElement::new(self.center_x, y, self.kind.title())
                .bold()
                .size(11.0)
                .align(Align::Center),
        );

        y += LINE_HEIGHT * 1.5;
        page.text(TextElement::new(
            MARGIN,
            y,
            format!("Pay Period: {}", self.request.pay_period),
        ));
        page.text(
            TextElement::new(
                self.right_x,
                y,
                format!("Pay Date: {}", format_long_date(self.request.pay_date)),
            )
            .align(Align::Right),
        );
        y += LINE_HEIGHT;
        page.text(TextElement::new(
            MARGIN,
            y,
            format!(
                "Coverage: {}",
                format_coverage(self.request.coverage_from, self.request.coverage_to)
            ),
        ));
        if self.kind == ReportKind::Contributions {
            if let Some(number) = &organization.sss_employer_number {
                page.text(
                    TextElement::new(self.right_x, y, format!("SSS Employer No.: {}", number))
                        .align(Align::Right),
                );
            }
        }

        y + LINE_HEIGHT
    }

    /// The y below the header when drawn at the top margin.
    pub fn bottom(&self) -> f32 {
        self.draw(&mut Page::default(), MARGIN)
    }

    /// Draws "Page n of m" in the bottom margin.
    pub fn draw_page_number(&self, page: &mut Page, bottom: f32, number: usize, count: usize) {
        page.text(
            TextElement::new(self.right_x, bottom, format!("Page {} of {}", number, count))
                .size(7.0)
                .align(Align::Right),
        );
    }
}

/// Splits rows across pages, repeating the report header and column headers.
///
/// An empty row set still yields one page so headers and zero totals print.
/// When the last table leaves less than `trailer_height` above the bottom
/// margin, a header-only page is appended for the trailing block.
pub(crate) fn table_pages(
    document: &Document,
    header: &ReportHeader<'_>,
    columns: &[Column],
    rows: Vec<TableRow>,
    rows_per_page: usize,
    trailer_height: f32,
) -> Vec<Page> {
    let mut chunks: Vec<Option<Vec<TableRow>>> = if rows.is_empty() {
        vec![Some(Vec::new())]
    } else {
        rows.chunks(rows_per_page.max(1))
            .map(|chunk| Some(chunk.to_vec()))
            .collect()
    };

    let content_bottom = MARGIN + document.content_height();
    let last_rows = chunks.last().and_then(Option::as_ref).map_or(0, Vec::len);
    let last_table_bottom = header.bottom() + (last_rows + 1) as f32 * ROW_HEIGHT;
    if trailer_height > 0.0 && last_table_bottom + trailer_height > content_bottom {
        chunks.push(None);
    }

    let page_count = chunks.len();
    let number_y = content_bottom + LINE_HEIGHT;

    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let mut page = Page::default();
            let y = header.draw(&mut page, MARGIN);
            if let Some(rows) = chunk {
                page.table(TableElement {
                    x: MARGIN,
                    y,
                    columns: columns.to_vec(),
                    rows,
                });
            }
            header.draw_page_number(&mut page, number_y, index + 1, page_count);
            page
        })
        .collect()
}

/// Draws "Prepared by / Checked by / Approved by" across the content width.
pub(crate) fn draw_signatories(page: &mut Page, config: &ReportConfig, width: f32, top: f32) {
    let signatories = &config.organization.signatories;
    let slots = [
        ("Prepared by:", signatories.prepared_by.as_str()),
        ("Checked by:", signatories.checked_by.as_str()),
        ("Approved by:", signatories.approved_by.as_str()),
    ];
    let slot_width = width / slots.len() as f32;
    let label_y = top + LINE_HEIGHT * 2.0;
    let line_y = label_y + LINE_HEIGHT * 2.5;

    for (index, (label, name)) in slots.into_iter().enumerate() {
        let x = MARGIN + slot_width * index as f32;
        page.text(TextElement::new(x, label_y, label));
        page.rule(x, x + slot_width - 24.0, line_y);
        page.text(TextElement::new(x, line_y + LINE_HEIGHT, name).bold());
    }
}

/// Appends the signatory block to the final page, below its table or, on a
/// header-only page, below the header.
///
/// Pair with [`table_pages`] called with [`SIGNATORY_BLOCK_HEIGHT`] so the
/// block always fits above the bottom margin.
pub(crate) fn sign_last_page(pages: &mut [Page], header: &ReportHeader<'_>, width: f32) {
    if let Some(page) = pages.last_mut() {
        let top = page
            .tables()
            .last()
            .map(|table| table.y + table.height())
            .unwrap_or_else(|| header.bottom());
        draw_signatories(page, header.config, width, top);
    }
}
