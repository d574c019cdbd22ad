//! Error types for the layout core
//!
//! Two taxonomies exist side by side. Caller configuration mistakes (an empty
//! font candidate list, malformed constraint values) surface as `Err` through
//! these types. "Content does not fit" is *not* an error: it travels as data
//! through [`crate::layout::LayoutResult`] with a NOTHING status and a cause
//! handle, and segmentation never fails on unshapeable input at all.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for layout-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the layout core.
#[derive(Error, Debug)]
pub enum Error {
  /// Font selection or shaping contract error
  #[error("Font error: {0}")]
  Font(#[from] FontError),

  /// Layout currency construction error
  #[error("Layout error: {0}")]
  Layout(#[from] LayoutError),
}

/// Errors raised by font selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
  /// A selector was constructed with no candidate fonts. The segmenter
  /// requires a designated best-overall font for its final fallback, so an
  /// empty candidate set is a caller configuration error.
  #[error("font candidate set is empty; a best-overall fallback font is required")]
  EmptyCandidateSet,

  /// A font's `append_any_glyph` reported zero consumed characters while
  /// input remained, violating the forward-progress contract.
  #[error("font {font:?} violated the append_any_glyph contract (consumed 0 of {remaining} chars)")]
  NoForwardProgress { font: String, remaining: usize },
}

/// Errors raised while constructing layout currency values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
  /// A constraint value was not representable (negative or non-finite).
  #[error("invalid constraint: {message}")]
  InvalidConstraints { message: String },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_messages_name_the_failing_contract() {
    let err = Error::from(FontError::EmptyCandidateSet);
    assert!(err.to_string().contains("candidate set is empty"));

    let err = Error::from(LayoutError::InvalidConstraints {
      message: "available width is NaN".to_string(),
    });
    assert!(err.to_string().contains("available width is NaN"));
  }

  #[test]
  fn progress_violation_reports_remaining_input() {
    let err = FontError::NoForwardProgress {
      font: "Fallback".to_string(),
      remaining: 3,
    };
    assert!(err.to_string().contains("consumed 0 of 3"));
  }
}
