//! The layout engine seam and its `genpdf` implementation.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::builder::{DocumentBuilder, PageCounter};
use crate::classify::Role;
use crate::config::GenerationConfig;
use crate::elements::{role_style, text_block, PageAnchor, VerticalSpace};
use crate::error::{Error, Result};
use crate::geometry::PageGeometry;
use crate::markup;
use crate::model::LayoutNode;

/// Paginates layout nodes and writes the resulting document.
///
/// `build` is the single entry point: it either produces the complete output or fails, and no
/// partially built document is observable through it.
pub trait LayoutEngine {
    fn build(&mut self, geometry: &PageGeometry, nodes: &[LayoutNode]) -> Result<BuildReport>;
}

/// Page on which a heading was first drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingAnchor {
    /// First visual line of the heading, as plain text.
    pub title: String,
    /// 1-based page number, `None` if the heading was never drawn.
    pub page: Option<usize>,
}

/// Summary of a finished build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of pages in the document.
    pub pages: usize,
    /// Size of the written file in bytes.
    pub bytes: usize,
    /// Heading positions in document order.
    pub headings: Vec<HeadingAnchor>,
}

/// A PDF rendered into memory.
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
    pub headings: Vec<HeadingAnchor>,
}

/// [`LayoutEngine`] that lays the nodes out with `genpdf` and writes a PDF file.
pub struct GenpdfEngine {
    output: PathBuf,
    title: Option<String>,
    #[cfg(feature = "bookmarks")]
    bookmarks: bool,
}

impl GenpdfEngine {
    /// Creates an engine writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            title: None,
            #[cfg(feature = "bookmarks")]
            bookmarks: false,
        }
    }

    /// Creates an engine for the output path and title of `config`.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(&config.output_path).with_title(config.title.clone())
    }

    /// Sets the document title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a PDF outline entry for every heading.
    #[cfg(feature = "bookmarks")]
    pub fn with_bookmarks(mut self, bookmarks: bool) -> Self {
        self.bookmarks = bookmarks;
        self
    }

    /// Lays out `nodes` and returns the PDF without touching the file system.
    pub fn render(&self, geometry: &PageGeometry, nodes: &[LayoutNode]) -> Result<RenderedPdf> {
        let prepared = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| PreparedNode::from_node(index, node))
            .collect::<Result<Vec<_>>>()?;

        let pages = PageCounter::default();
        let mut builder = DocumentBuilder::new(*geometry).with_page_counter(pages.clone());
        if let Some(title) = &self.title {
            builder = builder.with_title(title.clone());
        }
        let mut document = builder.build()?;

        let mut anchors = Vec::new();
        for node in prepared {
            match node {
                PreparedNode::Spacer(height_pt) => {
                    document.push(VerticalSpace::from_points(height_pt));
                }
                PreparedNode::Text(Role::Heading, lines) => {
                    let block = text_block(&lines, role_style(Role::Heading));
                    let anchor = PageAnchor::new(block, pages.clone());
                    let title = lines.into_iter().next().unwrap_or_default();
                    anchors.push((title, anchor.page_slot()));
                    document.push(anchor);
                }
                PreparedNode::Text(Role::Body, lines) => {
                    document.push(text_block(&lines, role_style(Role::Body)));
                }
            }
        }

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(Error::Layout)?;

        let headings = anchors
            .into_iter()
            .map(|(title, page)| HeadingAnchor {
                title,
                page: page.get(),
            })
            .collect();

        Ok(RenderedPdf {
            bytes,
            pages: pages.current(),
            headings,
        })
    }
}

impl LayoutEngine for GenpdfEngine {
    fn build(&mut self, geometry: &PageGeometry, nodes: &[LayoutNode]) -> Result<BuildReport> {
        #[allow(unused_mut)]
        let mut pdf = self.render(geometry, nodes)?;

        #[cfg(feature = "bookmarks")]
        if self.bookmarks {
            pdf.bytes = crate::bookmarks::apply_heading_bookmarks(&pdf.bytes, &pdf.headings)?;
        }

        fs::write(&self.output, &pdf.bytes).map_err(|err| Error::io(&self.output, err))?;
        info!(
            "Wrote {} ({} bytes, {} pages)",
            self.output.display(),
            pdf.bytes.len(),
            pdf.pages
        );

        Ok(BuildReport {
            pages: pdf.pages,
            bytes: pdf.bytes.len(),
            headings: pdf.headings,
        })
    }
}

enum PreparedNode {
    Text(Role, Vec<String>),
    Spacer(f64),
}

impl PreparedNode {
    fn from_node(index: usize, node: &LayoutNode) -> Result<Self> {
        match node {
            LayoutNode::Spacer { height_pt } => Ok(Self::Spacer(*height_pt)),
            LayoutNode::Heading(text) => Ok(Self::Text(Role::Heading, decode(index, text)?)),
            LayoutNode::Body(text) => Ok(Self::Text(Role::Body, decode(index, text)?)),
        }
    }
}

fn decode(index: usize, text: &str) -> Result<Vec<String>> {
    let lines = markup::parse_markup(text).map_err(|source| Error::Markup { index, source })?;
    debug!("Node {} decoded into {} line(s)", index, lines.len());
    Ok(lines)
}
