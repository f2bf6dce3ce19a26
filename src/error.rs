//! Error types for presentation_pdf.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::markup::MarkupError;

#[cfg(feature = "bookmarks")]
use crate::bookmarks::BookmarkError;

/// Result type alias for presentation_pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the presentation PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// No usable font family could be loaded.
    #[error("Failed to load fonts")]
    FontLoad(#[source] genpdf::error::Error),

    /// A layout node carried markup the engine cannot decode.
    #[error("Invalid markup in layout node {index}")]
    Markup {
        index: usize,
        #[source]
        source: MarkupError,
    },

    /// Pagination or PDF serialization failed.
    #[error("Layout failed")]
    Layout(#[source] genpdf::error::Error),

    /// Reading the content or writing the output failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The outline could not be added to the rendered PDF.
    #[cfg(feature = "bookmarks")]
    #[error("Failed to add bookmarks")]
    Bookmarks(#[from] BookmarkError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
