//! Turning content into layout nodes and handing them to a layout engine.

use log::debug;

use crate::classify::{HeadingRule, Role};
use crate::config::GenerationConfig;
use crate::engine::{BuildReport, LayoutEngine};
use crate::error::Result;
use crate::model::{ClassifiedBlock, LayoutNode};
use crate::paragraph::extract_paragraphs;

/// Extracts and classifies every paragraph of `content`, in reading order.
pub fn classify_paragraphs(content: &str, rule: HeadingRule) -> Vec<ClassifiedBlock<'_>> {
    extract_paragraphs(content)
        .into_iter()
        .map(|paragraph| ClassifiedBlock::from_paragraph(paragraph, rule))
        .collect()
}

/// Emits each block's text node followed by the block spacer.
pub fn assemble(blocks: &[ClassifiedBlock<'_>]) -> Vec<LayoutNode> {
    blocks
        .iter()
        .flat_map(|block| [block.to_node(), LayoutNode::block_spacer()])
        .collect()
}

/// Classifies `content` and assembles its layout nodes in one go.
pub fn layout_nodes(content: &str, rule: HeadingRule) -> Vec<LayoutNode> {
    assemble(&classify_paragraphs(content, rule))
}

/// Runs the whole pipeline and builds the document with `engine`.
///
/// The engine is called exactly once, with the complete node sequence.
pub fn generate<E>(config: &GenerationConfig, content: &str, engine: &mut E) -> Result<BuildReport>
where
    E: LayoutEngine + ?Sized,
{
    let blocks = classify_paragraphs(content, config.heading_rule);
    let headings = blocks
        .iter()
        .filter(|block| block.role() == Role::Heading)
        .count();
    debug!(
        "Classified {} paragraphs ({} headings) with {:?} rule",
        blocks.len(),
        headings,
        config.heading_rule
    );

    let nodes = assemble(&blocks);
    debug!("Assembled {} layout nodes", nodes.len());

    engine.build(&config.geometry, &nodes)
}
