//! Content integrity errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::focus::FocusKey;

/// A content bundle failed to load or validate.
///
/// These are authoring mistakes, caught when the library is built rather
/// than surfaced to visitors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The bundle declares a different focus than the one it is stored under.
    #[error("content bundle for '{expected}' declares focus '{found}'")]
    FocusMismatch {
        /// Key the bundle was requested for
        expected: FocusKey,
        /// Key written in the bundle
        found: FocusKey,
    },

    /// A required field is missing or empty.
    #[error("content bundle for '{focus}' is missing required field '{field}'")]
    MissingField {
        /// Bundle being validated
        focus: FocusKey,
        /// Dotted path of the field
        field: &'static str,
    },

    /// A module identifier is not lowercase kebab-case.
    #[error("content bundle for '{focus}' has invalid module identifier '{module}'")]
    InvalidModule {
        /// Bundle being validated
        focus: FocusKey,
        /// Offending identifier
        module: String,
    },

    /// The document is not valid JSON for the bundle schema.
    #[error("failed to parse content bundle for '{focus}'")]
    Parse {
        /// Bundle being parsed
        focus: FocusKey,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The bundle file could not be read.
    #[error("failed to read content bundle {}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
