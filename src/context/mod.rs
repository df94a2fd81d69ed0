//! Keyword-anchored context extraction.
//!
//! The extractor segments the (corrected) document into table, heading, and
//! body chunks, then collects bounded word windows around every keyword hit.
//! Touching windows merge, tables adjacent to a hit are pulled in whole, and
//! contexts subsumed by larger ones are dropped, so the downstream relevance
//! stage sees a minimal, non-redundant excerpt set.

mod options;
mod segment;
mod window;

pub use options::ExtractOptions;
pub use segment::Chunk;

use regex::{Regex, RegexBuilder};

use segment::segment;
use window::{build_window, dedup_contexts, Window};

/// Extracts deduplicated keyword context windows from document text.
pub struct ContextExtractor {
    keyword_re: Option<Regex>,
    token_re: Regex,
    options: ExtractOptions,
}

impl ContextExtractor {
    /// Create an extractor for the given keywords with default options.
    ///
    /// Matching is case-insensitive and whole-word; keywords are treated
    /// literally, not as patterns.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self::with_options(keywords, ExtractOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options<S: AsRef<str>>(keywords: &[S], options: ExtractOptions) -> Self {
        let alternation: Vec<String> = keywords
            .iter()
            .map(|k| regex::escape(k.as_ref()))
            .filter(|k| !k.is_empty())
            .collect();

        let keyword_re = if alternation.is_empty() {
            None
        } else {
            let pattern = format!(r"\b({})\b", alternation.join("|"));
            RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .dot_matches_new_line(true)
                .build()
                .ok()
        };
        if keyword_re.is_none() {
            log::warn!("no usable keywords, extraction will yield nothing");
        }

        Self {
            keyword_re,
            token_re: Regex::new(r"\S+").unwrap(),
            options,
        }
    }

    /// Extract context windows from `content`, in discovery order.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let Some(keyword_re) = self.keyword_re.as_ref() else {
            return Vec::new();
        };

        let chunks = segment(content, self.options.table_context_lines);
        log::debug!("segmented document into {} chunks", chunks.len());

        let mut contexts: Vec<String> = Vec::new();
        let mut live: Option<Window> = None;

        for chunk in &chunks {
            match chunk {
                // Headings never match and never terminate a live window.
                Chunk::Heading(_) => continue,

                Chunk::Table(text) => {
                    if let Some(window) = live.as_mut() {
                        // A table following a hit region is supporting
                        // context whether or not it matches itself.
                        window.append_table(text);
                    } else if keyword_re.is_match(text) {
                        log::debug!("table chunk matched, emitted whole");
                        contexts.push(text.clone());
                    }
                }

                Chunk::Body(text) => {
                    for m in keyword_re.find_iter(text) {
                        let span = build_window(
                            &self.token_re,
                            text,
                            m.start(),
                            m.end(),
                            self.options.pre_words,
                            self.options.post_words,
                        );
                        match live.as_mut() {
                            None => live = Some(Window::open(span)),
                            Some(window) if span.start <= window.end => window.absorb(&span),
                            Some(window) => {
                                contexts
                                    .push(std::mem::replace(window, Window::open(span)).text);
                            }
                        }
                    }
                }
            }
        }

        if let Some(window) = live {
            if !window.text.is_empty() {
                contexts.push(window.text);
            }
        }

        dedup_contexts(contexts)
    }
}
