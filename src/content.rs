//! The compiled-in presentation text.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Presentation notes rendered by default, paragraphs separated by blank lines.
pub const PRESENTATION: &str = include_str!("../assets/presentation.txt");

/// Reads replacement content from a UTF-8 text file.
pub fn read_content(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| Error::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_opens_with_preface() {
        assert!(PRESENTATION.trim_start().starts_with("Quick preface"));
        assert!(PRESENTATION.trim_end().ends_with("End of content."));
    }

    #[test]
    fn missing_content_file_reports_its_path() {
        let err = read_content("/__presentation_pdf_missing__/notes.txt").unwrap_err();
        match err {
            Error::Io { path, source } => {
                assert!(path.ends_with("notes.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
