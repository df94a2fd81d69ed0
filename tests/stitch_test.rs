//! Integration tests for cross-page table stitching.

use restitch::{
    BoundingRegion, LayoutResult, Page, Paragraph, ParagraphRole, SkipReason, Span, Table,
    TableStitcher,
};

/// Builds a document and its layout metadata together so span offsets are
/// always consistent with the content string.
struct LayoutBuilder {
    layout: LayoutResult,
}

impl LayoutBuilder {
    fn new() -> Self {
        Self {
            layout: LayoutResult::from_content(String::new()),
        }
    }

    fn with_page(mut self, number: u32, width: f64) -> Self {
        self.layout.pages.push(Page::new(number, width));
        self
    }

    fn text(mut self, text: &str) -> Self {
        self.layout.content.push_str(text);
        self
    }

    /// Append table markdown and record its span and geometry.
    fn table(mut self, page: u32, rows: usize, cols: usize, polygon: Vec<f64>, md: &str) -> Self {
        let offset = self.layout.content.len();
        self.layout.content.push_str(md);
        self.layout.tables.push(
            Table::new(rows, cols)
                .with_region(BoundingRegion::new(page, polygon))
                .with_span(Span::new(offset, md.len())),
        );
        self
    }

    /// Append gap text and record a paragraph one byte into it.
    fn paragraph_in_next_gap(mut self, gap: &str, role: Option<ParagraphRole>) -> Self {
        let offset = self.layout.content.len() + 1;
        self.layout.content.push_str(gap);
        let span = Span::new(offset, gap.len().saturating_sub(1));
        self.layout.paragraphs.push(match role {
            Some(role) => Paragraph::with_role(span, role),
            None => Paragraph::body(span),
        });
        self
    }

    fn build(self) -> LayoutResult {
        self.layout
    }
}

// A polygon comfortably inside the page margins.
fn inner_polygon() -> Vec<f64> {
    vec![1.0, 0.5, 7.0, 0.5, 7.0, 9.0, 1.0, 9.0]
}

const TOP: &str = "| A | B | C | D |\n| - | - | - | - |\n| 1 | 2 | 3 | 4 |";
const BOTTOM: &str = "| A | B | C | D |\n| - | - | - | - |\n| 5 | 6 | 7 | 8 |";

#[test]
fn stitch_without_adjacent_tables_is_identity() {
    let layout = LayoutBuilder::new()
        .with_page(1, 8.5)
        .text("# Report\n\n")
        .table(1, 3, 4, inner_polygon(), TOP)
        .text("\n\nProse between tables.\n\n")
        .table(1, 3, 4, inner_polygon(), BOTTOM)
        .text("\n\nTail.\n")
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert_eq!(report.content, layout.content);
    assert!(report.groups.is_empty());
}

#[test]
fn vertical_merge_across_page_break() {
    let layout = LayoutBuilder::new()
        .with_page(3, 8.5)
        .with_page(4, 8.5)
        .text("# Report\n\nIntro.\n\n")
        .table(3, 3, 4, inner_polygon(), TOP)
        .paragraph_in_next_gap("\n\n", Some(ParagraphRole::PageFooter))
        .table(4, 3, 4, inner_polygon(), BOTTOM)
        .text("\n\nTail.\n")
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].table_indices, vec![0, 1]);

    let expected = format!(
        "# Report\n\nIntro.\n\n{TOP}\n| A | B | C | D |\n| 5 | 6 | 7 | 8 |\n\nTail.\n"
    );
    assert_eq!(report.content, expected);
}

#[test]
fn vertical_merge_blocked_by_body_paragraph() {
    let layout = LayoutBuilder::new()
        .with_page(3, 8.5)
        .with_page(4, 8.5)
        .text("start\n")
        .table(3, 3, 4, inner_polygon(), TOP)
        .paragraph_in_next_gap("\n\n", None)
        .table(4, 3, 4, inner_polygon(), BOTTOM)
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert_eq!(report.content, layout.content);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::NotAdjacent);
}

#[test]
fn horizontal_merge_preserves_remark() {
    // Left half reaches the right page margin, right half starts at the
    // left margin of the next page.
    let left_md = "| L1 | L2 |\n| - | - |\n| a | b |";
    let right_md = "| R1 |\n| - |\n| c |";
    let layout = LayoutBuilder::new()
        .with_page(5, 10.0)
        .with_page(6, 10.0)
        .text("lead\n")
        .table(5, 3, 2, vec![3.0, 0.5, 9.95, 0.5, 9.95, 9.0, 3.0, 9.0], left_md)
        .text("\n<!-- PageBreak -->\n")
        .table(6, 3, 1, vec![0.03, 0.5, 6.0, 0.5, 6.0, 9.0, 0.03, 9.0], right_md)
        .text("\ntail\n")
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert_eq!(report.groups.len(), 1);

    let expected =
        "lead\n| L1 | L2 | R1 |\n| - | - | - |\n| a | b | c |<!-- PageBreak -->\ntail\n";
    assert_eq!(report.content, expected);
}

#[test]
fn chained_vertical_merge_spans_three_pages() {
    let third = "| A | B | C | D |\n| - | - | - | - |\n| 9 | 10 | 11 | 12 |";
    let layout = LayoutBuilder::new()
        .with_page(7, 8.5)
        .with_page(8, 8.5)
        .with_page(9, 8.5)
        .text("intro\n")
        .table(7, 3, 4, inner_polygon(), TOP)
        .text("\n")
        .table(8, 3, 4, inner_polygon(), BOTTOM)
        .text("\n")
        .table(9, 3, 4, inner_polygon(), third)
        .text("\nend\n")
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].table_indices, vec![0, 1, 2]);

    let expected = "intro\n| A | B | C | D |\n| - | - | - | - |\n| 1 | 2 | 3 | 4 |\n| A | B | C | D |\n| 5 | 6 | 7 | 8 |\n| A | B | C | D |\n| 9 | 10 | 11 | 12 |\nend\n";
    assert_eq!(report.content, expected);
}

#[test]
fn markdown_column_mismatch_keeps_both_fragments() {
    // The layout metadata claims equal column counts but the markdown
    // disagrees; the safe outcome is no merge at all.
    let bottom_narrow = "| A | B |\n| - | - |\n| 5 | 6 |";
    let layout = LayoutBuilder::new()
        .with_page(3, 8.5)
        .with_page(4, 8.5)
        .text("start\n")
        .table(3, 3, 4, inner_polygon(), TOP)
        .text("\n")
        .table(4, 3, 4, inner_polygon(), bottom_narrow)
        .text("\nend\n")
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert_eq!(report.content, layout.content);
    assert!(report.groups.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::ColumnMismatch);
}

#[test]
fn separator_only_fragment_skipped_as_empty() {
    // The continuation carries no data rows, only a repeated header
    // separator; the skip is recorded as an empty fragment, not as a
    // column mismatch.
    let separator_only = "| - | - | - | - |";
    let layout = LayoutBuilder::new()
        .with_page(3, 8.5)
        .with_page(4, 8.5)
        .text("start\n")
        .table(3, 3, 4, inner_polygon(), TOP)
        .text("\n")
        .table(4, 1, 4, inner_polygon(), separator_only)
        .text("\nend\n")
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert_eq!(report.content, layout.content);
    assert!(report.groups.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::EmptyFragment);
}

#[test]
fn gap_above_threshold_is_not_vertical() {
    let layout = LayoutBuilder::new()
        .with_page(3, 8.5)
        .with_page(4, 8.5)
        .text("start\n")
        .table(3, 3, 4, inner_polygon(), TOP)
        .text("\n\n\n\n")
        .table(4, 3, 4, inner_polygon(), BOTTOM)
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert_eq!(report.content, layout.content);

    // Raising the knob makes the same pair merge.
    let stitcher = TableStitcher::with_options(
        restitch::StitchOptions::new().with_max_vertical_gap(4),
    );
    let report = stitcher.stitch_with_report(&layout);
    assert_eq!(report.groups.len(), 1);
}

#[test]
fn content_outside_merged_ranges_is_untouched() {
    let prefix = "# H\n\nbyte-exact prefix £→ئ\n\n";
    let suffix = "\n\nbyte-exact suffix £→ئ\n";
    let layout = LayoutBuilder::new()
        .with_page(3, 8.5)
        .with_page(4, 8.5)
        .text(prefix)
        .table(3, 3, 4, inner_polygon(), TOP)
        .text("\n")
        .table(4, 3, 4, inner_polygon(), BOTTOM)
        .text(suffix)
        .build();

    let report = TableStitcher::new().stitch_with_report(&layout);
    assert!(report.content.starts_with(prefix));
    assert!(report.content.ends_with(suffix));
}
