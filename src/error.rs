//! Error types for the reconstruction library.
//!
//! This module defines all error types that can occur while rendering pages,
//! reconstructing structure, and serializing output documents.

/// Result type alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page source could not produce text fragments for a page.
    ///
    /// This aborts the whole conversion; partial results for earlier pages
    /// are discarded since a document archive cannot be emitted incompletely.
    #[error("Failed to render page {page}: {reason}")]
    RenderFailure {
        /// Zero-based index of the page that failed
        page: usize,
        /// Reason reported by the page source
        reason: String,
    },

    /// Requested page index is outside the source's page range.
    #[error("Page index {index} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// Requested zero-based page index
        index: usize,
        /// Number of pages in the document
        count: usize,
    },

    /// The document or spreadsheet serializer failed after structuring.
    ///
    /// Surfaced as a single terminal failure; no partial file is returned.
    #[error("Codec failure: {0}")]
    CodecFailure(String),

    /// The caller cancelled the conversion between pages.
    ///
    /// No partial output is emitted; the operation is safely re-invokable.
    #[error("Conversion cancelled after page {0}")]
    Cancelled(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_failure_display() {
        let err = Error::RenderFailure {
            page: 3,
            reason: "corrupted content stream".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 3"));
        assert!(msg.contains("corrupted content stream"));
    }

    #[test]
    fn test_codec_failure_display() {
        let err = Error::CodecFailure("archive write failed".to_string());
        assert!(format!("{}", err).contains("archive write failed"));
    }

    #[test]
    fn test_cancelled_display() {
        let err = Error::Cancelled(2);
        assert!(format!("{}", err).contains("after page 2"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
