//! Data model for page-wise layout-analysis output.
//!
//! These types mirror the JSON contract of the layout-analysis collaborator
//! (markdown content plus tables, paragraphs, and page geometry). The engine
//! never inspects raster pixels; everything it knows about the document
//! arrives through this model.

mod layout;
mod page;
mod paragraph;
mod span;
mod table;

pub use layout::LayoutResult;
pub use page::Page;
pub use paragraph::{Paragraph, ParagraphRole};
pub use span::Span;
pub use table::{BoundingRegion, Table};
