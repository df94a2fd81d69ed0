//! Extraction configuration.

/// Policy knobs for keyword context extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Maximum whitespace-delimited tokens taken before a match
    pub pre_words: usize,

    /// Maximum whitespace-delimited tokens taken after a match
    pub post_words: usize,

    /// Lines of surrounding text pulled into a table chunk to capture
    /// captions and footers
    pub table_context_lines: usize,
}

impl ExtractOptions {
    /// Create options with default window sizes.
    pub fn new() -> Self {
        Self {
            pre_words: 100,
            post_words: 200,
            table_context_lines: 2,
        }
    }

    /// Set the preceding-word budget and return self.
    pub fn with_pre_words(mut self, words: usize) -> Self {
        self.pre_words = words;
        self
    }

    /// Set the following-word budget and return self.
    pub fn with_post_words(mut self, words: usize) -> Self {
        self.post_words = words;
        self
    }

    /// Set the table context-line count and return self.
    pub fn with_table_context_lines(mut self, lines: usize) -> Self {
        self.table_context_lines = lines;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new()
    }
}
