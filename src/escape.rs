//! Escaping paragraph text into the markup understood by [`crate::markup`].

use crate::classify::Role;

/// Marker that starts a new visual line inside a block.
pub const LINE_BREAK: &str = "<br/>";

/// Escapes paragraph text for the given role.
///
/// `&` is always escaped.  `<` is only escaped for body text; headings keep it verbatim, so a
/// heading containing something that looks like a tag is rejected later by the markup parser.
/// Newlines inside the paragraph become [`LINE_BREAK`] markers.
pub fn escape(text: &str, role: Role) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' if role == Role::Body => escaped.push_str("&lt;"),
            '\n' => escaped.push_str(LINE_BREAK),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_escapes_ampersand_and_angle_bracket() {
        assert_eq!(escape("A & B < C", Role::Body), "A &amp; B &lt; C");
    }

    #[test]
    fn heading_keeps_angle_bracket() {
        assert_eq!(escape("A & B < C", Role::Heading), "A &amp; B < C");
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(
            escape("Quick preface\nBelow", Role::Heading),
            "Quick preface<br/>Below"
        );
        assert_eq!(escape("one\ntwo", Role::Body), "one<br/>two");
    }

    #[test]
    fn closing_angle_bracket_is_untouched() {
        assert_eq!(escape("a > b", Role::Body), "a > b");
    }
}
