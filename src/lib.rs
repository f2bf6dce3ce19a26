//! Renders blank-line separated notes into a paginated A4 PDF.
//!
//! The pipeline is strictly linear: [`paragraph`] splits the content, [`classify`] decides which
//! paragraphs are headings, [`escape`] prepares their markup, [`assemble`] turns them into
//! [`model::LayoutNode`]s and a [`engine::LayoutEngine`] paginates the nodes into a file.

pub mod assemble;
pub mod builder;
pub mod classify;
pub mod config;
pub mod content;
pub mod elements;
pub mod engine;
pub mod error;
pub mod escape;
pub mod fonts;
pub mod geometry;
pub mod markup;
pub mod model;
pub mod paragraph;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use assemble::{assemble, classify_paragraphs, generate, layout_nodes};
pub use classify::{classify, HeadingRule, Role};
pub use config::GenerationConfig;
pub use engine::{BuildReport, GenpdfEngine, HeadingAnchor, LayoutEngine};
pub use error::{Error, Result};
pub use geometry::{PageGeometry, PageMargins, PaperSize};
pub use model::{ClassifiedBlock, LayoutNode};
