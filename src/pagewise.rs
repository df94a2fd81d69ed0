//! Page-wise splitting of analyzer markdown.
//!
//! The layout analyzer embeds page furniture as HTML comments
//! (`<!-- PageFooter="…" -->`, `<!-- PageHeader="…" -->`,
//! `<!-- PageNumber="…" -->`). Splitting on footers recovers per-page text;
//! documents whose footers were not detected fall back to header splitting.

use std::collections::BTreeMap;

use regex::Regex;

/// Below this page count, a footer split is assumed to have missed most
/// page boundaries and the header markers are tried instead.
const MIN_FOOTER_SPLIT_PAGES: usize = 10;

/// Split document content into per-page text, keyed by 1-based page number.
///
/// Whitespace-only pages are omitted. A trailing remainder that is empty or
/// a lone page-number comment is dropped before numbering.
pub fn split_into_pages(content: &str) -> BTreeMap<u32, String> {
    let footer_re = Regex::new(r#"<!-- PageFooter="[^"]+" -->"#).unwrap();
    let header_re = Regex::new(r#"<!-- PageHeader="[^"]+" -->"#).unwrap();

    let mut pages = split_on_marker(&footer_re, content);
    if pages.len() < MIN_FOOTER_SPLIT_PAGES {
        log::debug!(
            "footer split produced only {} pages, retrying with headers",
            pages.len()
        );
        pages = split_on_marker(&header_re, content);
    }
    log::debug!("split document into {} pages", pages.len());

    pages
        .into_iter()
        .enumerate()
        .filter(|(_, page)| !page.trim().is_empty())
        .map(|(i, page)| (i as u32 + 1, page.trim().to_string()))
        .collect()
}

fn split_on_marker(marker_re: &Regex, content: &str) -> Vec<String> {
    let page_number_re = Regex::new(r#"^\s*<!-- PageNumber="\d+" -->\s*$"#).unwrap();

    let mut pages: Vec<String> = marker_re.split(content).map(|s| s.to_string()).collect();
    if let Some(last) = pages.last() {
        let trailing = last.trim();
        if trailing.is_empty() || page_number_re.is_match(trailing) {
            pages.pop();
        }
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer_doc(page_count: usize) -> String {
        (1..=page_count)
            .map(|i| format!("Page {i} body text.\n<!-- PageFooter=\"Annual Report\" -->\n"))
            .collect()
    }

    #[test]
    fn test_footer_split() {
        let content = footer_doc(12);
        let pages = split_into_pages(&content);
        assert_eq!(pages.len(), 12);
        assert_eq!(pages[&1], "Page 1 body text.");
        assert_eq!(pages[&12], "Page 12 body text.");
    }

    #[test]
    fn test_trailing_page_number_dropped() {
        let mut content = footer_doc(11);
        content.push_str("<!-- PageNumber=\"11\" -->\n");
        let pages = split_into_pages(&content);
        assert_eq!(pages.len(), 11);
    }

    #[test]
    fn test_header_fallback() {
        // Too few footers to trust; headers carry the real boundaries.
        let content = (1..=11)
            .map(|i| format!("<!-- PageHeader=\"Q3 Filing\" -->\nPage {i} content.\n"))
            .collect::<String>();
        let pages = split_into_pages(&content);
        assert_eq!(pages.len(), 11);
        assert!(pages[&2].contains("content."));
    }

    #[test]
    fn test_blank_pages_omitted() {
        let content = "First.\n<!-- PageFooter=\"f\" -->\n   \n<!-- PageFooter=\"f\" -->\nThird.";
        // Only 3 "pages", so this goes through the header fallback, which
        // finds no markers and returns the whole content as one page.
        let pages = split_into_pages(content);
        assert_eq!(pages.len(), 1);
    }
}
