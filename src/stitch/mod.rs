//! Cross-page table stitching.
//!
//! A page-wise layout analyzer renders each page independently, so a table
//! that crosses a page boundary comes back as two (or more) fragments. This
//! module finds page-adjacent fragments, decides whether they continue
//! vertically or split horizontally, and rewrites the document text so each
//! logical table appears once. Every byte outside the rewritten ranges is
//! preserved verbatim.

mod candidates;
mod geometry;
mod markdown;
mod options;

pub use candidates::{MergeCandidate, TableExtent};
pub use markdown::{
    merge_horizontal, merge_vertical, remove_header_separator, MergeFailure, BORDER_SYMBOL,
};
pub use options::StitchOptions;

use serde::Serialize;

use crate::model::{LayoutResult, Paragraph};

use candidates::collect_candidates;
use geometry::is_horizontal_split;

/// How two page-adjacent fragments relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    /// Top/bottom halves of one table (page break between row sets)
    Vertical,
    /// Left/right halves of one wider table
    Horizontal,
}

/// A chain of table fragments merged into one logical table.
#[derive(Debug, Clone, Serialize)]
pub struct MergedGroup {
    /// Indices of the stitched tables, ascending
    pub table_indices: Vec<usize>,
    /// Start of the replaced range in the original content
    pub min_offset: usize,
    /// End of the replaced range in the original content
    pub max_offset: usize,
    /// Merged markdown table body
    pub content: String,
    /// Text found between horizontal halves, preserved after the body
    pub remark: String,
}

/// Why a candidate pair was not merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Markdown column counts disagreed on an otherwise-vertical pair
    ColumnMismatch,
    /// One fragment had no rows
    EmptyFragment,
    /// Neither the vertical nor the horizontal rule held
    NotAdjacent,
    /// A span pointed outside the document text
    OffsetOutOfBounds,
}

impl From<MergeFailure> for SkipReason {
    fn from(failure: MergeFailure) -> Self {
        match failure {
            MergeFailure::EmptyFragment => SkipReason::EmptyFragment,
            MergeFailure::ColumnMismatch => SkipReason::ColumnMismatch,
        }
    }
}

/// Diagnostic record for a skipped candidate pair.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedMerge {
    /// Index of the earlier table
    pub prev_index: usize,
    /// Index of the later table
    pub cur_index: usize,
    /// Why the pair stayed unmerged
    pub reason: SkipReason,
}

/// Result of a stitching pass: corrected text plus diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct StitchReport {
    /// Corrected document text
    pub content: String,
    /// Merged groups in document order
    pub groups: Vec<MergedGroup>,
    /// Candidate pairs that were considered but kept separate
    pub skipped: Vec<SkippedMerge>,
}

impl StitchReport {
    /// Whether any tables were actually stitched.
    pub fn changed(&self) -> bool {
        !self.groups.is_empty()
    }
}

/// Stitches cross-page table fragments back into single logical tables.
#[derive(Debug, Clone, Default)]
pub struct TableStitcher {
    options: StitchOptions,
}

impl TableStitcher {
    /// Create a stitcher with default options.
    pub fn new() -> Self {
        Self {
            options: StitchOptions::default(),
        }
    }

    /// Create a stitcher with custom options.
    pub fn with_options(options: StitchOptions) -> Self {
        Self { options }
    }

    /// Produce the corrected document text.
    pub fn stitch(&self, layout: &LayoutResult) -> String {
        self.stitch_with_report(layout).content
    }

    /// Produce the corrected document text together with merge diagnostics.
    ///
    /// Never fails: every anomaly in the layout data becomes a "do not
    /// merge" decision recorded in the report.
    pub fn stitch_with_report(&self, layout: &LayoutResult) -> StitchReport {
        let content = layout.content.as_str();
        let (candidates, extents) = collect_candidates(&layout.tables);

        let mut groups: Vec<MergedGroup> = Vec::new();
        let mut skipped: Vec<SkippedMerge> = Vec::new();

        // Candidates arrive in ascending table-index order; a later candidate
        // may extend the group a previous one opened.
        for candidate in candidates {
            let (Some(prev_extent), Some(cur_extent)) = (
                extents.get(candidate.prev_index).copied().flatten(),
                extents.get(candidate.cur_index).copied().flatten(),
            ) else {
                continue;
            };

            let orientation = match self.classify(&candidate, layout) {
                Some(orientation) => orientation,
                None => {
                    log::debug!(
                        "tables {} and {} are page-adjacent but not one table",
                        candidate.prev_index,
                        candidate.cur_index
                    );
                    skipped.push(SkippedMerge {
                        prev_index: candidate.prev_index,
                        cur_index: candidate.cur_index,
                        reason: SkipReason::NotAdjacent,
                    });
                    continue;
                }
            };

            let Some(cur_content) = content.get(cur_extent.min_offset..cur_extent.max_offset)
            else {
                log::warn!(
                    "table {} spans {}..{} outside document text ({} bytes)",
                    candidate.cur_index,
                    cur_extent.min_offset,
                    cur_extent.max_offset,
                    content.len()
                );
                skipped.push(SkippedMerge {
                    prev_index: candidate.prev_index,
                    cur_index: candidate.cur_index,
                    reason: SkipReason::OffsetOutOfBounds,
                });
                continue;
            };

            // Text caught between the two halves of a horizontal split,
            // usually a caption or footnote; kept after the merged body.
            let remark = match orientation {
                Orientation::Horizontal => content
                    .get(prev_extent.max_offset..cur_extent.min_offset)
                    .unwrap_or(""),
                Orientation::Vertical => "",
            };

            let extends_open_group = groups
                .last()
                .map_or(false, |group| group.table_indices.last() == Some(&candidate.prev_index));

            if extends_open_group {
                let last = groups.len() - 1;
                let merged = match orientation {
                    Orientation::Vertical => merge_vertical(&groups[last].content, cur_content),
                    Orientation::Horizontal => {
                        Ok(merge_horizontal(&groups[last].content, cur_content))
                    }
                };
                match merged {
                    Ok(merged_content) => {
                        let group = &mut groups[last];
                        group.table_indices.push(candidate.cur_index);
                        group.max_offset = cur_extent.max_offset;
                        group.content = merged_content;
                        if orientation == Orientation::Horizontal {
                            group.remark.push_str(remark);
                        }
                    }
                    Err(failure) => skipped.push(SkippedMerge {
                        prev_index: candidate.prev_index,
                        cur_index: candidate.cur_index,
                        reason: failure.into(),
                    }),
                }
            } else {
                let Some(prev_content) =
                    content.get(prev_extent.min_offset..prev_extent.max_offset)
                else {
                    log::warn!(
                        "table {} spans {}..{} outside document text ({} bytes)",
                        candidate.prev_index,
                        prev_extent.min_offset,
                        prev_extent.max_offset,
                        content.len()
                    );
                    skipped.push(SkippedMerge {
                        prev_index: candidate.prev_index,
                        cur_index: candidate.cur_index,
                        reason: SkipReason::OffsetOutOfBounds,
                    });
                    continue;
                };

                let merged = match orientation {
                    Orientation::Vertical => merge_vertical(prev_content, cur_content),
                    Orientation::Horizontal => Ok(merge_horizontal(prev_content, cur_content)),
                };
                match merged {
                    Ok(merged_content) => groups.push(MergedGroup {
                        table_indices: vec![candidate.prev_index, candidate.cur_index],
                        min_offset: prev_extent.min_offset,
                        max_offset: cur_extent.max_offset,
                        content: merged_content,
                        remark: match orientation {
                            Orientation::Horizontal => remark.trim().to_string(),
                            Orientation::Vertical => String::new(),
                        },
                    }),
                    Err(failure) => skipped.push(SkippedMerge {
                        prev_index: candidate.prev_index,
                        cur_index: candidate.cur_index,
                        reason: failure.into(),
                    }),
                }
            }
        }

        let content = reconstruct(content, &groups);
        StitchReport {
            content,
            groups,
            skipped,
        }
    }

    /// Orientation of a candidate pair, or `None` when neither rule holds.
    ///
    /// Vertical continuation wins when both rules would apply.
    fn classify(&self, candidate: &MergeCandidate, layout: &LayoutResult) -> Option<Orientation> {
        let prev = layout.tables.get(candidate.prev_index)?;
        let cur = layout.tables.get(candidate.cur_index)?;

        let interrupted = paragraph_between(
            &layout.paragraphs,
            candidate.gap_start,
            candidate.gap_end,
        );
        let gap = candidate.gap_end.saturating_sub(candidate.gap_start);
        let is_vertical = !interrupted
            && prev.column_count == cur.column_count
            && gap <= self.options.max_vertical_gap;

        if is_vertical {
            return Some(Orientation::Vertical);
        }
        if is_horizontal_split(prev, cur, layout, &self.options) {
            return Some(Orientation::Horizontal);
        }
        None
    }
}

/// Check whether real body text sits strictly between the two table
/// fragments.
///
/// Page headers, footers, and page numbers do not count. A paragraph that
/// reports no span data cannot be placed and is skipped with a diagnostic
/// rather than blocking or forcing the merge.
fn paragraph_between(paragraphs: &[Paragraph], start: usize, end: usize) -> bool {
    for paragraph in paragraphs {
        let Some(spans) = paragraph.spans.as_ref() else {
            log::warn!("paragraph without spans ignored while checking {start}..{end}");
            continue;
        };
        if !paragraph.is_body_text() {
            continue;
        }
        if spans
            .iter()
            .any(|span| span.starts_strictly_within(start, end))
        {
            return true;
        }
    }
    false
}

/// Splice merged groups back into the document text.
///
/// Groups must be in ascending offset order (they are, because candidates
/// walk tables in index order). Everything outside group ranges is copied
/// byte-for-byte.
fn reconstruct(content: &str, groups: &[MergedGroup]) -> String {
    if groups.is_empty() {
        return content.to_string();
    }

    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;
    for group in groups {
        output.push_str(content.get(cursor..group.min_offset).unwrap_or(""));
        output.push_str(&group.content);
        output.push_str(&group.remark);
        cursor = group.max_offset;
    }
    output.push_str(content.get(cursor..).unwrap_or(""));
    output
}
