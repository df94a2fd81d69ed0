//! Page-geometry test for horizontally split tables.

use crate::model::{LayoutResult, Table};

use super::StitchOptions;

/// Decide whether two page-adjacent tables are the left and right halves of
/// one wider table.
///
/// True iff both report the same row count, some region of the earlier table
/// reaches the right margin of its page, and some region of the later table
/// starts at the left margin of its page. Margin contact is measured as the
/// region edge divided by the page width, against the configured thresholds.
/// Regions on unknown pages or with short polygons are skipped.
pub fn is_horizontal_split(
    prev: &Table,
    cur: &Table,
    layout: &LayoutResult,
    options: &StitchOptions,
) -> bool {
    if prev.row_count != cur.row_count {
        return false;
    }

    let right_covered = prev.bounding_regions.iter().any(|region| {
        let Some(width) = layout.page_width(region.page_number) else {
            log::warn!("no page metadata for page {}", region.page_number);
            return false;
        };
        match region.right_edge() {
            Some(x_right) if width > 0.0 => x_right / width > options.right_cover_threshold,
            _ => false,
        }
    });
    if !right_covered {
        return false;
    }

    cur.bounding_regions.iter().any(|region| {
        let Some(width) = layout.page_width(region.page_number) else {
            log::warn!("no page metadata for page {}", region.page_number);
            return false;
        };
        match region.left_edge() {
            Some(x_left) if width > 0.0 => x_left / width < options.left_cover_threshold,
            _ => false,
        }
    })
}
