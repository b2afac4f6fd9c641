//! Error taxonomy for the `io` adapters.
//!
//! The CORE data structures (`graph`, `priority_queue`, `shortest_path`,
//! `quadtree`, `marching_squares`) never fail: their public APIs have no
//! `Result` anywhere. Only the plaintext and XML readers/writers in [`crate::io`]
//! touch the filesystem or parse caller-supplied text, so only they return
//! this error.

use std::path::PathBuf;

/// Failure surfaced by [`crate::io::plaintext`] or [`crate::io::xml`].
///
/// `E` is the caller's own vertex-parsing error type, threaded through
/// unchanged so callers don't lose information to a `String`-erased variant.
#[derive(Debug, thiserror::Error)]
pub enum GraphIoError<E: std::error::Error + 'static> {
    /// The text did not match the expected format, or a vertex/edge literal
    /// failed to parse.
    #[error("malformed graph input at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: E,
    },
    /// Malformed XML structure (missing attribute, wrong element, ...).
    #[error("malformed graph XML: {0}")]
    Xml(String),
    /// The underlying filesystem operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
