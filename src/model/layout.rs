//! The layout-analysis result: the engine's input contract.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{Page, Paragraph, Table};

/// Output of the page-wise layout analyzer for one document.
///
/// `content` is the flat markdown rendering (pipe-delimited tables,
/// `#`-prefixed headings); tables, paragraphs, and pages describe its
/// structure through character spans and page geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// Flat markdown rendering of the whole document
    pub content: String,

    /// Detected tables in index order
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Detected paragraphs in reading order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Page metadata
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl LayoutResult {
    /// Create a result from content alone (no structure).
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tables: Vec::new(),
            paragraphs: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Deserialize a layout result from analyzer JSON.
    ///
    /// A result with empty `content` is rejected: there is nothing to
    /// stitch and every reported span would point outside the text.
    pub fn from_json(json: &str) -> Result<Self> {
        let result: Self = serde_json::from_str(json)?;
        if result.content.is_empty() {
            return Err(Error::InvalidLayout("content is empty".to_string()));
        }
        Ok(result)
    }

    /// Width of the given page, if the analyzer reported it.
    pub fn page_width(&self, page_number: u32) -> Option<f64> {
        self.pages
            .iter()
            .find(|p| p.page_number == page_number)
            .map(|p| p.width)
    }
}
