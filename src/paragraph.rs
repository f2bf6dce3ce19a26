//! Splitting the content into blank-line delimited paragraphs.

/// Literal separator between paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A chunk of content between two blank lines.
///
/// Both views borrow from the content string; `text` is `raw` with leading
/// and trailing whitespace removed and is what every later stage looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paragraph<'a> {
    raw: &'a str,
    text: &'a str,
}

impl<'a> Paragraph<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            text: raw.trim(),
        }
    }

    /// Returns the chunk exactly as it appeared in the content.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Returns the trimmed paragraph text.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// Splits `content` on [`PARAGRAPH_SEPARATOR`] and drops whitespace-only chunks.
///
/// The returned paragraphs keep the reading order of the content.
pub fn extract_paragraphs(content: &str) -> Vec<Paragraph<'_>> {
    content
        .split(PARAGRAPH_SEPARATOR)
        .map(Paragraph::new)
        .filter(|paragraph| !paragraph.text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines_in_order() {
        let paragraphs = extract_paragraphs("First\n\nSecond line\nwraps\n\nThird");
        let texts: Vec<_> = paragraphs.iter().map(Paragraph::text).collect();
        assert_eq!(texts, ["First", "Second line\nwraps", "Third"]);
    }

    #[test]
    fn drops_whitespace_only_chunks() {
        let paragraphs = extract_paragraphs("\nAlpha\n\n   \n\n\t\n\nBeta\n");
        let texts: Vec<_> = paragraphs.iter().map(Paragraph::text).collect();
        assert_eq!(texts, ["Alpha", "Beta"]);
    }

    #[test]
    fn keeps_raw_chunk_alongside_trimmed_text() {
        let paragraphs = extract_paragraphs("  padded  \n\nnext");
        assert_eq!(paragraphs[0].raw(), "  padded  ");
        assert_eq!(paragraphs[0].text(), "padded");
    }

    #[test]
    fn extraction_is_repeatable() {
        let content = crate::content::PRESENTATION;
        assert_eq!(extract_paragraphs(content), extract_paragraphs(content));
    }

    #[test]
    fn empty_content_has_no_paragraphs() {
        assert!(extract_paragraphs("").is_empty());
        assert!(extract_paragraphs("\n\n\n\n").is_empty());
    }
}
