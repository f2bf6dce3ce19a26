//! Generation settings, built once at startup and passed down explicitly.

use std::path::PathBuf;

use crate::classify::HeadingRule;
use crate::geometry::PageGeometry;

/// File written when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "SkillHatch_Presentation.pdf";

/// Title stored in the PDF metadata by default.
pub const DEFAULT_TITLE: &str = "SkillHatch Presentation";

/// Everything a generation run needs besides the content itself.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    pub output_path: PathBuf,
    pub title: String,
    pub geometry: PageGeometry,
    pub heading_rule: HeadingRule,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            title: DEFAULT_TITLE.to_owned(),
            geometry: PageGeometry::a4(),
            heading_rule: HeadingRule::Literal,
        }
    }
}

impl GenerationConfig {
    /// Sets the output path and returns the updated config.
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Sets the document title and returns the updated config.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the heading rule and returns the updated config.
    pub fn with_heading_rule(mut self, heading_rule: HeadingRule) -> Self {
        self.heading_rule = heading_rule;
        self
    }
}
