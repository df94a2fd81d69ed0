//! Merge-candidate detection.
//!
//! A candidate is a pair of page-adjacent tables: the previous non-empty
//! table ends on page N and the current one starts on page N+1. Whether the
//! pair actually merges is decided later from paragraph presence, column and
//! row counts, and page geometry.

use crate::model::Table;

/// Integral span of one table, cached so orientation and merging never
/// recompute it.
#[derive(Debug, Clone, Copy)]
pub struct TableExtent {
    /// Smallest offset covered by any span
    pub min_offset: usize,
    /// Largest end offset covered by any span
    pub max_offset: usize,
}

/// A pair of page-adjacent tables proposed for stitching.
#[derive(Debug, Clone, Copy)]
pub struct MergeCandidate {
    /// Index of the earlier table
    pub prev_index: usize,
    /// Index of the later table
    pub cur_index: usize,
    /// End offset of the earlier table (start of the gap)
    pub gap_start: usize,
    /// Start offset of the later table (end of the gap)
    pub gap_end: usize,
}

/// Walk tables in index order and collect merge candidates together with
/// per-table extents.
///
/// Tables without spans have no position in the document text and are
/// excluded (their extent slot stays `None`). Tables without bounding
/// regions have no page and cannot participate either.
pub fn collect_candidates(tables: &[Table]) -> (Vec<MergeCandidate>, Vec<Option<TableExtent>>) {
    let mut extents: Vec<Option<TableExtent>> = Vec::with_capacity(tables.len());
    let mut candidates = Vec::new();

    // (index, page, max offset) of the previous table that had both spans
    // and a page.
    let mut previous: Option<(usize, u32, usize)> = None;

    for (index, table) in tables.iter().enumerate() {
        let Some((min_offset, max_offset)) = table.integral_span() else {
            log::debug!("table {index} has no spans, excluded from merging");
            extents.push(None);
            continue;
        };

        let Some(page) = table.first_page() else {
            log::warn!("table {index} has spans but no bounding regions, excluded from merging");
            extents.push(None);
            continue;
        };

        log::debug!("table {index} spans {min_offset}..{max_offset} on page {page}");

        if let Some((prev_index, prev_page, prev_max_offset)) = previous {
            if page == prev_page + 1 {
                candidates.push(MergeCandidate {
                    prev_index,
                    cur_index: index,
                    gap_start: prev_max_offset,
                    gap_end: min_offset,
                });
            }
        }

        extents.push(Some(TableExtent {
            min_offset,
            max_offset,
        }));
        previous = Some((index, page, max_offset));
    }

    (candidates, extents)
}
