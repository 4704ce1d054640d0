//! Error types for the extraction pipeline.

use std::path::PathBuf;

/// A single line could not be read as the requested field kind.
///
/// Builders never surface this: it only tells them to try the next
/// interpretation of the line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("couldn't construct function from line")]
    InvalidFunction,

    #[error("couldn't construct attribute from line")]
    InvalidAttribute,

    #[error("couldn't construct description from line")]
    InvalidDescription,

    #[error("couldn't construct enum member from line")]
    InvalidEnumMember,
}

/// Fatal errors that abort a whole scrape.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(
        "documentation structure changed ({reason}); this scraper is probably \
         not compatible with the current API docs"
    )]
    UpdatedDoc { reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    pub(crate) fn updated_doc(reason: impl Into<String>) -> Self {
        Self::UpdatedDoc {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
