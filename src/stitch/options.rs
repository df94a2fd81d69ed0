//! Stitching configuration.

/// Policy knobs for cross-page table stitching.
///
/// The defaults reproduce the analyzer's markdown conventions: two fragments
/// of one vertically split table are separated by at most the markdown line
/// separators (2 characters), and a horizontally split table touches the
/// right margin of one page and the left margin of the next.
#[derive(Debug, Clone)]
pub struct StitchOptions {
    /// Maximum character gap between two fragments of a vertical
    /// continuation (markdown line separators only)
    pub max_vertical_gap: usize,

    /// A fragment whose right edge exceeds this fraction of the page width
    /// touches the right margin
    pub right_cover_threshold: f64,

    /// A fragment whose left edge is below this fraction of the page width
    /// touches the left margin
    pub left_cover_threshold: f64,
}

impl StitchOptions {
    /// Create options with default thresholds.
    pub fn new() -> Self {
        Self {
            max_vertical_gap: 2,
            right_cover_threshold: 0.99,
            left_cover_threshold: 0.01,
        }
    }

    /// Set the maximum vertical gap and return self.
    pub fn with_max_vertical_gap(mut self, gap: usize) -> Self {
        self.max_vertical_gap = gap;
        self
    }

    /// Set the right-margin coverage threshold and return self.
    pub fn with_right_cover_threshold(mut self, threshold: f64) -> Self {
        self.right_cover_threshold = threshold;
        self
    }

    /// Set the left-margin coverage threshold and return self.
    pub fn with_left_cover_threshold(mut self, threshold: f64) -> Self {
        self.left_cover_threshold = threshold;
        self
    }
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = StitchOptions::default();
        assert_eq!(options.max_vertical_gap, 2);
        assert_eq!(options.right_cover_threshold, 0.99);
        assert_eq!(options.left_cover_threshold, 0.01);
    }

    #[test]
    fn test_builder() {
        let options = StitchOptions::new()
            .with_max_vertical_gap(4)
            .with_right_cover_threshold(0.95)
            .with_left_cover_threshold(0.05);
        assert_eq!(options.max_vertical_gap, 4);
        assert_eq!(options.right_cover_threshold, 0.95);
        assert_eq!(options.left_cover_threshold, 0.05);
    }
}
