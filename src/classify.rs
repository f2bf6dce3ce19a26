//! Heading detection for extracted paragraphs.
//!
//! Paragraphs carry no markup, so the visual role of each one is guessed from
//! its text alone.  The guess is a pure function of the trimmed paragraph text
//! and the selected [`HeadingRule`]; nothing about neighbouring paragraphs or
//! the position in the document is taken into account.

use std::fmt;

/// Paragraphs shorter than this many characters may be headings when they end with a colon.
pub const SHORT_LINE_LIMIT: usize = 80;

/// Paragraphs starting with this text are always headings.
pub const PREFACE_PREFIX: &str = "Quick preface";

/// Visual role assigned to a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Bold, larger heading presentation.
    Heading,
    /// Plain paragraph presentation.
    Body,
}

impl Role {
    /// Upper-case label used in logs and the outline listing.
    pub fn label(self) -> &'static str {
        match self {
            Role::Heading => "HEADING",
            Role::Body => "BODY",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the three heading conditions are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeadingRule {
    /// `(short AND ends with ':') OR all upper-case OR starts with the preface prefix`.
    #[default]
    Literal,
    /// `short AND (ends with ':' OR all upper-case OR starts with the preface prefix)`.
    ShortLine,
}

impl HeadingRule {
    /// Classifies trimmed paragraph text under this rule.
    pub fn classify(self, text: &str) -> Role {
        let short = text.chars().count() < SHORT_LINE_LIMIT;
        let colon = text.ends_with(':');
        let shouting = is_upper_case(text);
        let preface = text.starts_with(PREFACE_PREFIX);

        let heading = match self {
            HeadingRule::Literal => (short && colon) || shouting || preface,
            HeadingRule::ShortLine => short && (colon || shouting || preface),
        };

        if heading {
            Role::Heading
        } else {
            Role::Body
        }
    }
}

/// Classifies trimmed paragraph text with the default [`HeadingRule::Literal`].
pub fn classify(text: &str) -> Role {
    HeadingRule::Literal.classify(text)
}

/// Returns `true` when `text` has at least one cased character and none of them is lower-case.
///
/// Digits, punctuation and whitespace are ignored, so `"API 2.0"` counts as upper-case while
/// `"2024"` does not.
pub fn is_upper_case(text: &str) -> bool {
    let mut cased = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colon_line(len: usize) -> String {
        let mut text = "x".repeat(len - 1);
        text.push(':');
        text
    }

    #[test]
    fn short_colon_line_is_heading() {
        assert_eq!(classify("Heading One:"), Role::Heading);
        assert_eq!(classify(&colon_line(79)), Role::Heading);
    }

    #[test]
    fn eighty_character_colon_line_is_body() {
        assert_eq!(classify(&colon_line(80)), Role::Body);
    }

    #[test]
    fn long_upper_case_line_is_heading_under_literal_rule() {
        let text = "A".repeat(120);
        assert_eq!(classify(&text), Role::Heading);
        assert_eq!(HeadingRule::ShortLine.classify(&text), Role::Body);
    }

    #[test]
    fn all_caps_rule() {
        assert_eq!(classify("THIS IS ALL CAPS"), Role::Heading);
        assert_eq!(classify("This Is Not"), Role::Body);
    }

    #[test]
    fn preface_prefix_wins_regardless_of_length() {
        let text = format!("Quick preface\n{}", "words ".repeat(40));
        assert_eq!(classify(&text), Role::Heading);
        assert_eq!(HeadingRule::ShortLine.classify(&text), Role::Body);
        assert_eq!(classify("quick preface"), Role::Body);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let text = format!("{}:", "é".repeat(78));
        assert!(text.len() > SHORT_LINE_LIMIT);
        assert_eq!(classify(&text), Role::Heading);
    }

    #[test]
    fn upper_case_requires_a_cased_character() {
        assert!(is_upper_case("API 2.0 - READY!"));
        assert!(!is_upper_case("2024"));
        assert!(!is_upper_case(""));
        assert!(!is_upper_case("NOT quite"));
    }

    #[test]
    fn classification_is_pure() {
        for text in ["Heading One:", "Some body text about the project.", "UPPER"] {
            assert_eq!(classify(text), classify(text));
        }
    }

    #[test]
    fn rules_agree_on_short_lines() {
        for text in ["Tech stack:", "README", "Quick preface", "plain words"] {
            assert_eq!(
                HeadingRule::Literal.classify(text),
                HeadingRule::ShortLine.classify(text)
            );
        }
    }
}
