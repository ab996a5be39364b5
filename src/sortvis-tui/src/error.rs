//! Error types for the terminal front end.

use sortvis_core::SortError;
use thiserror::Error;

use crate::color::ColorParseError;

/// Terminal-side failures.
#[derive(Debug, Error)]
pub enum TuiError {
    /// I/O error talking to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An engine or sink reported a failure.
    #[error(transparent)]
    Sort(#[from] SortError),

    /// A palette entry could not be parsed.
    #[error("invalid color for `{key}`: {source}")]
    ColorParse {
        key: String,
        #[source]
        source: ColorParseError,
    },

    /// A palette entry names no known role.
    #[error("unknown palette key `{0}`")]
    UnknownPaletteKey(String),
}

impl From<TuiError> for SortError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(e) => SortError::Io(e),
            TuiError::Sort(e) => e,
            other => SortError::Sink(other.to_string()),
        }
    }
}

/// Result type alias for terminal operations.
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_kind_across_the_sink_boundary() {
        let err = TuiError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        match SortError::from(err) {
            SortError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_other_errors_become_sink_errors() {
        let err = TuiError::UnknownPaletteKey("sparkle".to_string());
        let sort: SortError = err.into();
        assert!(matches!(sort, SortError::Sink(msg) if msg.contains("sparkle")));
    }
}
