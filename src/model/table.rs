//! Table geometry and spans as reported by the layout analyzer.

use serde::{Deserialize, Serialize};

use super::Span;

// Corner X coordinates inside an 8-element polygon
// (top-left, top-right, bottom-right, bottom-left).
const INDEX_OF_X_LEFT_TOP: usize = 0;
const INDEX_OF_X_RIGHT_TOP: usize = 2;
const INDEX_OF_X_RIGHT_BOTTOM: usize = 4;
const INDEX_OF_X_LEFT_BOTTOM: usize = 6;

/// Where a table (or fragment of one) sits on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    /// Page the region belongs to (1-indexed)
    pub page_number: u32,

    /// Four corner x,y pairs: top-left, top-right, bottom-right, bottom-left
    pub polygon: Vec<f64>,
}

impl BoundingRegion {
    /// Create a region from a page number and an 8-element polygon.
    pub fn new(page_number: u32, polygon: Vec<f64>) -> Self {
        Self {
            page_number,
            polygon,
        }
    }

    /// Rightmost X of the region, or `None` for a short polygon.
    pub fn right_edge(&self) -> Option<f64> {
        if self.polygon.len() < 8 {
            return None;
        }
        Some(
            self.polygon[INDEX_OF_X_RIGHT_TOP].max(self.polygon[INDEX_OF_X_RIGHT_BOTTOM]),
        )
    }

    /// Leftmost X of the region, or `None` for a short polygon.
    pub fn left_edge(&self) -> Option<f64> {
        if self.polygon.len() < 8 {
            return None;
        }
        Some(self.polygon[INDEX_OF_X_LEFT_TOP].min(self.polygon[INDEX_OF_X_LEFT_BOTTOM]))
    }
}

/// A detected table: row/column counts, geometry, and character spans.
///
/// The table body itself is the markdown slice of the document content that
/// the spans cover; cells are never modeled individually here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Number of rows
    pub row_count: usize,

    /// Number of columns
    pub column_count: usize,

    /// Regions the table occupies, one per page it touches
    #[serde(default)]
    pub bounding_regions: Vec<BoundingRegion>,

    /// Character spans into the document content
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl Table {
    /// Create a table with the given shape and no geometry.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            bounding_regions: Vec::new(),
            spans: Vec::new(),
        }
    }

    /// Add a bounding region and return self.
    pub fn with_region(mut self, region: BoundingRegion) -> Self {
        self.bounding_regions.push(region);
        self
    }

    /// Add a span and return self.
    pub fn with_span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// The smallest offset range covering all of the table's spans.
    ///
    /// `None` when the table reports no spans at all; such tables are
    /// excluded from merge consideration.
    pub fn integral_span(&self) -> Option<(usize, usize)> {
        let first = self.spans.first()?;
        let mut min_offset = first.offset;
        let mut max_offset = first.end();
        for span in &self.spans {
            min_offset = min_offset.min(span.offset);
            max_offset = max_offset.max(span.end());
        }
        Some((min_offset, max_offset))
    }

    /// First (lowest) page the table appears on.
    pub fn first_page(&self) -> Option<u32> {
        self.bounding_regions.iter().map(|r| r.page_number).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_span_empty() {
        let table = Table::new(2, 3);
        assert_eq!(table.integral_span(), None);
    }

    #[test]
    fn test_integral_span_multiple() {
        let table = Table::new(2, 3)
            .with_span(Span::new(50, 10))
            .with_span(Span::new(10, 20));
        assert_eq!(table.integral_span(), Some((10, 60)));
    }

    #[test]
    fn test_first_page() {
        let table = Table::new(2, 3)
            .with_region(BoundingRegion::new(4, vec![0.0; 8]))
            .with_region(BoundingRegion::new(3, vec![0.0; 8]));
        assert_eq!(table.first_page(), Some(3));
    }

    #[test]
    fn test_edges() {
        let region = BoundingRegion::new(1, vec![0.5, 0.0, 8.4, 0.0, 8.3, 5.0, 0.6, 5.0]);
        assert_eq!(region.right_edge(), Some(8.4));
        assert_eq!(region.left_edge(), Some(0.5));
    }

    #[test]
    fn test_edges_short_polygon() {
        let region = BoundingRegion::new(1, vec![0.5, 0.0, 8.4, 0.0]);
        assert_eq!(region.right_edge(), None);
        assert_eq!(region.left_edge(), None);
    }

    #[test]
    fn test_table_deserialize() {
        let json = r#"{
            "rowCount": 4,
            "columnCount": 2,
            "boundingRegions": [{"pageNumber": 1, "polygon": [0,0, 8,0, 8,5, 0,5]}],
            "spans": [{"offset": 100, "length": 250}]
        }"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.row_count, 4);
        assert_eq!(table.integral_span(), Some((100, 350)));
        assert_eq!(table.first_page(), Some(1));
    }
}
