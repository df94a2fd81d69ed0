//! Paragraph records and structural roles.

use serde::{Deserialize, Serialize};

use super::Span;

/// Structural role the analyzer assigned to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParagraphRole {
    /// Running header at the top of a page
    PageHeader,
    /// Running footer at the bottom of a page
    PageFooter,
    /// A bare page number
    PageNumber,
    /// Document title
    Title,
    /// Section heading
    SectionHeading,
    /// Footnote text
    Footnote,
}

impl ParagraphRole {
    /// Page furniture never counts as real body text between two table
    /// fragments, so it cannot block a vertical merge.
    pub fn is_page_furniture(&self) -> bool {
        matches!(
            self,
            ParagraphRole::PageHeader | ParagraphRole::PageFooter | ParagraphRole::PageNumber
        )
    }
}

/// A paragraph of document text with an optional structural role.
///
/// `spans` is optional because some analyzer versions omit it for empty
/// paragraphs. A paragraph without spans has no measurable presence in the
/// document and is skipped (with a diagnostic) when checking whether body
/// text separates two table fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Character spans into the document content
    pub spans: Option<Vec<Span>>,

    /// Structural role; absent means plain body text
    #[serde(default)]
    pub role: Option<ParagraphRole>,
}

impl Paragraph {
    /// Create a body paragraph covering one span.
    pub fn body(span: Span) -> Self {
        Self {
            spans: Some(vec![span]),
            role: None,
        }
    }

    /// Create a paragraph with an explicit role.
    pub fn with_role(span: Span, role: ParagraphRole) -> Self {
        Self {
            spans: Some(vec![span]),
            role: Some(role),
        }
    }

    /// Whether this paragraph is real body text (not page furniture).
    pub fn is_body_text(&self) -> bool {
        self.role.map_or(true, |role| !role.is_page_furniture())
    }
}
