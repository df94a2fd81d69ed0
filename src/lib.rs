//! # restitch
//!
//! Document-structure reconstruction for page-wise layout-analysis output.
//!
//! A page-oriented layout analyzer renders each page on its own, so a table
//! crossing a page boundary comes back as two or more fragments embedded in
//! the document markdown. This library puts such tables back together and
//! extracts keyword-anchored context windows from the corrected text:
//!
//! - **Table stitching**: detects page-adjacent table fragments, classifies
//!   them as vertical continuations or horizontal splits from column/row
//!   counts and page geometry, and rewrites the document so each logical
//!   table appears once. Bytes outside merged regions are untouched.
//! - **Context extraction**: collects bounded word windows around keyword
//!   hits, merges touching windows, pulls adjacent tables in whole, and
//!   drops contexts subsumed by larger ones.
//!
//! ## Quick Start
//!
//! ```no_run
//! use restitch::{ContextExtractor, LayoutResult, TableStitcher};
//!
//! fn main() -> restitch::Result<()> {
//!     let json = std::fs::read_to_string("layout.json")?;
//!     let layout = LayoutResult::from_json(&json)?;
//!
//!     // Merge cross-page table fragments.
//!     let corrected = TableStitcher::new().stitch(&layout);
//!
//!     // Pull keyword contexts from the corrected text.
//!     let extractor = ContextExtractor::new(&["front-running", "insider"]);
//!     for context in extractor.extract(&corrected) {
//!         println!("{context}\n---");
//!     }
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod error;
pub mod model;
pub mod pagewise;
pub mod stitch;

// Re-export commonly used types
pub use context::{Chunk, ContextExtractor, ExtractOptions};
pub use error::{Error, Result};
pub use model::{BoundingRegion, LayoutResult, Page, Paragraph, ParagraphRole, Span, Table};
pub use pagewise::split_into_pages;
pub use stitch::{
    MergedGroup, SkipReason, SkippedMerge, StitchOptions, StitchReport, TableStitcher,
};

/// Stitch cross-page table fragments with default options.
///
/// Convenience wrapper over [`TableStitcher`].
pub fn stitch(layout: &LayoutResult) -> String {
    TableStitcher::new().stitch(layout)
}

/// Extract keyword context windows with default options.
///
/// Convenience wrapper over [`ContextExtractor`].
pub fn extract_contexts<S: AsRef<str>>(content: &str, keywords: &[S]) -> Vec<String> {
    ContextExtractor::new(keywords).extract(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stitch_passthrough() {
        let layout = LayoutResult::from_content("no tables here\n");
        assert_eq!(stitch(&layout), "no tables here\n");
    }

    #[test]
    fn test_extract_contexts_convenience() {
        let contexts = extract_contexts("the insider acted alone", &["insider"]);
        assert_eq!(contexts, vec!["the insider acted alone".to_string()]);
    }
}
