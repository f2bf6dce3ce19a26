//! Data structures passed between the pipeline stages.
//!
//! Paragraphs become [`ClassifiedBlock`]s once their role is known, and blocks become
//! [`LayoutNode`]s for the layout engine.  The node type deliberately avoids referencing the
//! rendering crate so engines other than the `genpdf` one (for example test doubles) can consume
//! the exact same sequence.

use crate::classify::{HeadingRule, Role};
use crate::escape;
use crate::paragraph::Paragraph;

/// Vertical space inserted after every block, in points.
pub const BLOCK_SPACING_PT: f64 = 6.0;

/// A paragraph tagged with its visual role and escaped for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedBlock<'a> {
    source: Paragraph<'a>,
    role: Role,
    text: String,
}

impl<'a> ClassifiedBlock<'a> {
    /// Classifies and escapes `paragraph` under `rule`.
    pub fn from_paragraph(paragraph: Paragraph<'a>, rule: HeadingRule) -> Self {
        let role = rule.classify(paragraph.text());
        Self {
            source: paragraph,
            role,
            text: escape::escape(paragraph.text(), role),
        }
    }

    /// Returns the paragraph this block was built from.
    pub fn source(&self) -> Paragraph<'a> {
        self.source
    }

    /// Returns the assigned role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the escaped markup text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Converts the block into its styled layout node.
    pub fn to_node(&self) -> LayoutNode {
        match self.role {
            Role::Heading => LayoutNode::Heading(self.text.clone()),
            Role::Body => LayoutNode::Body(self.text.clone()),
        }
    }
}

/// A unit of content consumed by a [`LayoutEngine`](crate::engine::LayoutEngine).
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutNode {
    /// Heading presentation of escaped markup.
    Heading(String),
    /// Body presentation of escaped markup.
    Body(String),
    /// Fixed vertical space.
    Spacer {
        /// Height of the gap in points.
        height_pt: f64,
    },
}

impl LayoutNode {
    /// The spacer emitted after every block.
    pub fn block_spacer() -> Self {
        Self::Spacer {
            height_pt: BLOCK_SPACING_PT,
        }
    }

    /// Returns the markup and role of text nodes, or `None` for spacers.
    pub fn text(&self) -> Option<(Role, &str)> {
        match self {
            Self::Heading(text) => Some((Role::Heading, text.as_str())),
            Self::Body(text) => Some((Role::Body, text.as_str())),
            Self::Spacer { .. } => None,
        }
    }
}
