//! Decoding of the small inline markup carried by layout nodes.
//!
//! Block text reaches the layout engine escaped by [`crate::escape`].  The markup is a tiny
//! XML-flavoured subset:
//!
//! - `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;` and numeric `&#NN;` / `&#xHH;` references
//! - `<br/>` (also `<br>` and `<br />`) to start a new visual line
//!
//! A `<` that is not followed by a letter or `/` is kept as literal text.  Everything else that
//! looks like a tag or an entity is rejected with a [`MarkupError`] that points at the offending
//! byte, so unescaped input fails loudly instead of rendering garbage.

use std::fmt;

/// Longest entity name accepted between `&` and `;`.
const MAX_ENTITY_LEN: usize = 10;

/// Parse errors produced by [`parse_markup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupError {
    index: usize,
    message: String,
}

impl MarkupError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    /// Byte index in the original input string where the error was detected.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable description of the parsing error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.index)
    }
}

impl std::error::Error for MarkupError {}

/// Decodes `input` into the plain text of each visual line.
///
/// The result always holds at least one line; line breaks produce additional, possibly empty,
/// entries.
pub fn parse_markup(input: &str) -> Result<Vec<String>, MarkupError> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut index = 0;

    while index < input.len() {
        let rest = &input[index..];

        if rest.starts_with('&') {
            let (ch, consumed) = parse_entity(input, index)?;
            line.push(ch);
            index += consumed;
            continue;
        }

        if starts_tag(rest) {
            index += parse_line_break(input, index)?;
            lines.push(std::mem::take(&mut line));
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        line.push(ch);
        index += ch.len_utf8();
    }

    lines.push(line);
    Ok(lines)
}

fn starts_tag(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|next| next == '/' || next.is_ascii_alphabetic())
}

fn parse_entity(input: &str, index: usize) -> Result<(char, usize), MarkupError> {
    let body = &input[index + 1..];
    let end = body
        .char_indices()
        .take(MAX_ENTITY_LEN + 1)
        .find(|&(_, ch)| ch == ';')
        .map(|(offset, _)| offset)
        .ok_or_else(|| MarkupError::new(index, "unterminated entity; expected `;`"))?;

    let name = &body[..end];
    let decoded = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => decode_numeric_reference(name),
    };

    decoded
        .map(|ch| (ch, end + 2))
        .ok_or_else(|| MarkupError::new(index, format!("unknown entity `&{};`", name)))
}

fn decode_numeric_reference(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(|c| c == 'x' || c == 'X') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

fn parse_line_break(input: &str, index: usize) -> Result<usize, MarkupError> {
    let rest = &input[index..];
    let end = rest
        .find('>')
        .ok_or_else(|| MarkupError::new(index, "unterminated tag; expected `>`"))?;

    let tag = rest[1..end].trim_end();
    let name = tag.strip_suffix('/').unwrap_or(tag).trim_end();
    if name.eq_ignore_ascii_case("br") {
        Ok(end + 1)
    } else {
        Err(MarkupError::new(
            index,
            format!("unsupported tag `<{}>`; only `<br/>` is allowed", tag),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_text() {
        let lines = parse_markup("Hello world").expect("parse succeeds");
        assert_eq!(lines, ["Hello world"]);
    }

    #[test]
    fn decodes_entities() {
        let lines = parse_markup("A &amp; B &lt; C &gt; D &#65;&#x42;").expect("parse succeeds");
        assert_eq!(lines, ["A & B < C > D AB"]);
    }

    #[test]
    fn splits_on_line_breaks() {
        let lines = parse_markup("one<br/>two<br />three<BR>").expect("parse succeeds");
        assert_eq!(lines, ["one", "two", "three", ""]);
    }

    #[test]
    fn keeps_lone_angle_bracket() {
        let lines = parse_markup("A &amp; B < C").expect("parse succeeds");
        assert_eq!(lines, ["A & B < C"]);
    }

    #[test]
    fn error_on_unsupported_tag() {
        let err = parse_markup("Layout <div> wrapper:").unwrap_err();
        assert_eq!(err.index(), 7);
        assert!(err.message().contains("unsupported tag `<div>`"));
    }

    #[test]
    fn error_on_unterminated_tag() {
        let err = parse_markup("broken <br").unwrap_err();
        assert!(err.message().contains("unterminated tag"));
    }

    #[test]
    fn error_on_bare_ampersand() {
        let err = parse_markup("Q & A").unwrap_err();
        assert_eq!(err.index(), 2);
        assert!(err.message().contains("unterminated entity"));
    }

    #[test]
    fn error_on_unknown_entity() {
        let err = parse_markup("&nbsp;").unwrap_err();
        assert!(err.message().contains("unknown entity `&nbsp;`"));
    }
}
