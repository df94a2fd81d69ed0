//! Window accumulation and deduplication.

use regex::Regex;

/// One hit's context: the text plus its character extent in the chunk.
///
/// The extent covers the included pre/post tokens, not just the match, so
/// two hits whose word windows touch are recognized as one hit region.
#[derive(Debug)]
pub struct WindowSpan {
    /// Chunk-local offset where the window begins
    pub start: usize,
    /// Chunk-local offset where the window ends
    pub end: usize,
    /// Context string (pre tokens, match, post tokens)
    pub text: String,
}

/// A context window being accumulated around one or more keyword hits.
#[derive(Debug)]
pub struct Window {
    /// End offset of the region folded into this window so far
    pub end: usize,
    /// Accumulated context text
    pub text: String,
}

impl Window {
    /// Open a window for one hit.
    pub fn open(span: WindowSpan) -> Self {
        Self {
            end: span.end,
            text: span.text,
        }
    }

    /// Fold another hit region into this window.
    pub fn absorb(&mut self, span: &WindowSpan) {
        self.text.push(' ');
        self.text.push_str(&span.text);
        self.end = self.end.max(span.end);
    }

    /// Append an adjacent table verbatim as supporting context.
    pub fn append_table(&mut self, table: &str) {
        self.text.push_str("\n\n");
        self.text.push_str(table);
        self.end += table.len();
    }
}

/// Build the context window for one match inside a chunk.
///
/// Takes up to `pre_words` tokens before the match and `post_words` after,
/// split on `token_re` (whitespace-delimited tokens), joined around the
/// matched text itself. The caller compiles `token_re` once per extractor;
/// this runs once per keyword hit.
pub fn build_window(
    token_re: &Regex,
    chunk: &str,
    match_start: usize,
    match_end: usize,
    pre_words: usize,
    post_words: usize,
) -> WindowSpan {
    let preceding: Vec<regex::Match> = token_re.find_iter(&chunk[..match_start]).collect();
    let preceding = &preceding[preceding.len().saturating_sub(pre_words)..];
    let following: Vec<regex::Match> = token_re
        .find_iter(&chunk[match_end..])
        .take(post_words)
        .collect();

    let start = preceding.first().map_or(match_start, |m| m.start());
    let end = following.last().map_or(match_end, |m| match_end + m.end());

    let mut parts: Vec<&str> = Vec::with_capacity(preceding.len() + following.len() + 1);
    parts.extend(preceding.iter().map(|m| m.as_str()));
    parts.push(&chunk[match_start..match_end]);
    parts.extend(following.iter().map(|m| m.as_str()));

    WindowSpan {
        start,
        end,
        text: parts.join(" "),
    }
}

/// Drop every context that is a substring of a different surviving context.
///
/// Exact duplicates keep their first occurrence; discovery order is
/// preserved.
pub fn dedup_contexts(contexts: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(contexts.len());
    for (i, context) in contexts.iter().enumerate() {
        let dominated = contexts.iter().enumerate().any(|(j, other)| {
            if i == j {
                return false;
            }
            if context == other {
                // Keep only the earliest copy of identical contexts.
                j < i
            } else {
                other.contains(context.as_str())
            }
        });
        if !dominated {
            unique.push(context.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_re() -> Regex {
        Regex::new(r"\S+").unwrap()
    }

    #[test]
    fn test_build_window_bounds() {
        let chunk = "one two three MATCH four five six";
        let span = build_window(&token_re(), chunk, 14, 19, 2, 2);
        assert_eq!(span.text, "two three MATCH four five");
        assert_eq!(span.start, 4); // offset of "two"
        assert_eq!(span.end, 29); // end of "five"
    }

    #[test]
    fn test_build_window_short_sides() {
        let chunk = "MATCH tail";
        let span = build_window(&token_re(), chunk, 0, 5, 10, 10);
        assert_eq!(span.text, "MATCH tail");
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 10);
    }

    #[test]
    fn test_build_window_no_context_budget() {
        let chunk = "a MATCH b";
        let span = build_window(&token_re(), chunk, 2, 7, 0, 0);
        assert_eq!(span.text, "MATCH");
        assert_eq!((span.start, span.end), (2, 7));
    }

    #[test]
    fn test_window_absorb() {
        let mut window = Window::open(WindowSpan {
            start: 0,
            end: 10,
            text: "a b c".to_string(),
        });
        window.absorb(&WindowSpan {
            start: 4,
            end: 8,
            text: "d e".to_string(),
        });
        assert_eq!(window.text, "a b c d e");
        assert_eq!(window.end, 10);
    }

    #[test]
    fn test_dedup_substring_dropped() {
        let contexts = vec!["x y z".to_string(), "w x y z v".to_string()];
        assert_eq!(dedup_contexts(contexts), vec!["w x y z v".to_string()]);
    }

    #[test]
    fn test_dedup_identical_keeps_first() {
        let contexts = vec!["same".to_string(), "same".to_string(), "other".to_string()];
        assert_eq!(
            dedup_contexts(contexts),
            vec!["same".to_string(), "other".to_string()]
        );
    }

    #[test]
    fn test_dedup_order_preserved() {
        let contexts = vec!["b".repeat(3), "a".repeat(5)];
        assert_eq!(dedup_contexts(contexts.clone()), contexts);
    }
}
