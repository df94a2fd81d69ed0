//! Error types for the restitch library.
//!
//! The stitching and extraction contracts themselves are infallible: every
//! anomaly in the layout data collapses into a "do not merge" decision that
//! is logged and reported, never raised. Errors here cover the edges of the
//! crate only: reading layout JSON and I/O done on behalf of callers.

use std::io;
use thiserror::Error;

/// Result type alias for restitch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the crate boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout-analysis JSON could not be deserialized.
    #[error("Layout JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The layout result is structurally unusable (e.g. no content).
    #[error("Invalid layout result: {0}")]
    InvalidLayout(String),
}
