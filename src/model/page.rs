//! Page-level types.

use serde::{Deserialize, Serialize};

/// Page metadata from the layout analyzer.
///
/// Geometric coordinates in bounding regions are expressed in the same unit
/// as the page width.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Page width in the analyzer's coordinate unit
    pub width: f64,
}

impl Page {
    /// Create a new page.
    pub fn new(page_number: u32, width: f64) -> Self {
        Self { page_number, width }
    }
}
