//! Document segmentation into table, heading, and body chunks.

use regex::Regex;

/// One unit of the extractor's segmentation.
///
/// Tables are atomic: they are matched and emitted whole, never split
/// mid-row. Headings delimit body text but never produce matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A run of markdown table rows plus adjoining caption/footer lines
    Table(String),
    /// A `#`-prefixed heading line
    Heading(String),
    /// Prose between tables and headings
    Body(String),
}

impl Chunk {
    /// The chunk's text.
    pub fn text(&self) -> &str {
        match self {
            Chunk::Table(text) | Chunk::Heading(text) | Chunk::Body(text) => text,
        }
    }
}

/// Split a document into table and non-table chunks, then split the
/// non-table chunks around headings.
pub fn segment(content: &str, table_context_lines: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    for chunk in split_tables(content, table_context_lines) {
        match chunk {
            Chunk::Body(text) => chunks.extend(split_headings(&text)),
            table => chunks.push(table),
        }
    }
    chunks
}

/// First pass: a run of two or more consecutive `|…|` lines is a table.
///
/// The table slice is extended backward and forward by `context_lines` lines
/// so captions and footnotes travel with the table.
fn split_tables(content: &str, context_lines: usize) -> Vec<Chunk> {
    let table_re = Regex::new(r"\|.*?\|\n(?:\|.*?\|\n)+").unwrap();

    let mut chunks = Vec::new();
    let mut last_end = 0;

    for m in table_re.find_iter(content) {
        let start = extend_back(content, m.start(), context_lines).max(last_end);
        if start > last_end {
            push_nonempty(&mut chunks, Chunk::Body(content[last_end..start].to_string()));
        }
        let end = extend_forward(content, m.end(), context_lines);
        push_nonempty(&mut chunks, Chunk::Table(content[start..end].to_string()));
        last_end = end;
    }

    if last_end < content.len() {
        push_nonempty(&mut chunks, Chunk::Body(content[last_end..].to_string()));
    }
    chunks
}

/// Second pass: `#`-marker lines become standalone heading chunks.
fn split_headings(content: &str) -> Vec<Chunk> {
    let heading_re = Regex::new(r"(?m)^#+\s+.+$").unwrap();

    let mut chunks = Vec::new();
    let mut last_end = 0;

    for m in heading_re.find_iter(content) {
        if m.start() > last_end {
            push_nonempty(
                &mut chunks,
                Chunk::Body(content[last_end..m.start()].to_string()),
            );
        }
        push_nonempty(&mut chunks, Chunk::Heading(m.as_str().to_string()));
        last_end = m.end();
    }

    if last_end < content.len() {
        push_nonempty(&mut chunks, Chunk::Body(content[last_end..].to_string()));
    }
    chunks
}

/// Trim a chunk and keep it only if text remains.
fn push_nonempty(chunks: &mut Vec<Chunk>, chunk: Chunk) {
    let trimmed = chunk.text().trim();
    if trimmed.is_empty() {
        return;
    }
    let trimmed = trimmed.to_string();
    chunks.push(match chunk {
        Chunk::Table(_) => Chunk::Table(trimmed),
        Chunk::Heading(_) => Chunk::Heading(trimmed),
        Chunk::Body(_) => Chunk::Body(trimmed),
    });
}

/// Move `position` back by up to `lines` line starts; 0 when the text above
/// runs out.
fn extend_back(content: &str, position: usize, lines: usize) -> usize {
    let mut pos = position;
    for _ in 0..lines {
        match content[..pos].rfind('\n') {
            Some(newline) if newline > 0 => pos = newline,
            _ => return 0,
        }
    }
    pos
}

/// Move `position` forward past up to `lines` line ends; content length when
/// the text below runs out.
fn extend_forward(content: &str, position: usize, lines: usize) -> usize {
    let mut pos = position;
    for _ in 0..lines {
        match content[pos..].find('\n') {
            Some(newline) => pos += newline + 1,
            None => return content.len(),
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "Intro paragraph.\n\nTable 1: Trades\n| Deal | Qty |\n| - | - |\n| D1 | 10 |\nSource: desk blotter\n\nClosing remarks.\n";

    #[test]
    fn test_table_detected_with_context() {
        let chunks = split_tables(DOC, 2);
        assert_eq!(chunks.len(), 3);
        let Chunk::Table(table) = &chunks[1] else {
            panic!("expected table chunk");
        };
        // Caption above and footer below travel with the table.
        assert!(table.contains("Table 1: Trades"));
        assert!(table.contains("| D1 | 10 |"));
        assert!(table.contains("Source: desk blotter"));
        assert!(matches!(&chunks[0], Chunk::Body(b) if b == "Intro paragraph."));
        assert!(matches!(&chunks[2], Chunk::Body(b) if b == "Closing remarks."));
    }

    #[test]
    fn test_single_table_row_is_not_a_table() {
        let content = "before\n| lonely | row |\nafter\n";
        let chunks = split_tables(content, 2);
        assert_eq!(chunks.len(), 1);
        assert!(matches!(&chunks[0], Chunk::Body(_)));
    }

    #[test]
    fn test_headings_split_body() {
        let content = "# Top\nlead text\n## Section\ntail text";
        let chunks = split_headings(content);
        assert_eq!(
            chunks,
            vec![
                Chunk::Heading("# Top".to_string()),
                Chunk::Body("lead text".to_string()),
                Chunk::Heading("## Section".to_string()),
                Chunk::Body("tail text".to_string()),
            ]
        );
    }

    #[test]
    fn test_segment_does_not_rescan_tables_for_headings() {
        let content = "# Report\n\n| # A | B |\n| - | - |\n| 1 | 2 |\n";
        let chunks = segment(content, 0);
        assert!(matches!(&chunks[0], Chunk::Heading(_)));
        assert!(matches!(&chunks[1], Chunk::Table(_)));
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_extend_back_stops_at_start() {
        assert_eq!(extend_back("abc\ndef", 4, 2), 0);
        assert_eq!(extend_back("abc", 3, 2), 0);
    }

    #[test]
    fn test_extend_forward_stops_at_end() {
        assert_eq!(extend_forward("abc\ndef", 4, 2), 7);
        let content = "a\nb\nc\nd";
        assert_eq!(extend_forward(content, 2, 2), 6);
    }
}
