//! Markdown to HTML node conversion.
//!
//! Each block becomes one [`ParentNode`] subtree, and all blocks of a
//! document are collected under a single `div`.

use crate::block::{Block, BlockType, markdown_to_blocks};
use crate::inline::{InlineError, text_to_spans};
use crate::node::{HtmlNode, LeafNode, NodeError, ParentNode};
use crate::span::{SpanKind, TextSpan};

const CODE_FENCE: &str = "```";

/// Error converting a single block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    /// Heading marker with no text after it.
    #[error("heading has no text after its marker")]
    EmptyHeading,
    /// Code block missing an opening or closing fence.
    #[error("code block must start and end with ```")]
    InvalidCodeFence,
    /// Quote block containing a line without `>`.
    #[error("quote line does not start with `>`: {line:?}")]
    InvalidQuoteLine {
        /// The offending line.
        line: String,
    },
    /// Inline markdown could not be split.
    #[error(transparent)]
    Inline(#[from] InlineError),
    /// Node construction failed.
    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Error converting a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Document has no blocks after trimming.
    #[error("document contains no blocks")]
    EmptyDocument,
    /// A block failed to convert.
    #[error("{kind} block {index}: {source}")]
    Block {
        /// Zero-based block position in the document.
        index: usize,
        /// Classification of the failed block.
        kind: BlockType,
        /// Underlying failure.
        source: BlockError,
    },
}

/// Convert a single span to a leaf node.
///
/// # Errors
///
/// Returns [`NodeError::EmptyText`] for spans with empty content other than
/// images.
pub fn span_to_html_node(span: TextSpan) -> Result<HtmlNode, NodeError> {
    let (content, kind) = span.into_parts();
    let leaf = match kind {
        SpanKind::Plain => LeafNode::new(None, content)?,
        SpanKind::Bold => LeafNode::new(Some("b"), content)?,
        SpanKind::Italic => LeafNode::new(Some("i"), content)?,
        SpanKind::Code => LeafNode::new(Some("code"), content)?,
        SpanKind::Link(url) => LeafNode::new(Some("a"), content)?.with_attribute("href", url),
        SpanKind::Image(url) => LeafNode::new(Some("img"), "")?
            .with_attribute("src", url)
            .with_attribute("alt", content),
    };
    Ok(leaf.into())
}

/// Convert inline markdown to leaf nodes.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, BlockError> {
    text_to_spans(text)?
        .into_iter()
        .map(|span| span_to_html_node(span).map_err(BlockError::from))
        .collect()
}

/// Drop the first `count` characters of `text`.
fn skip_chars(text: &str, count: usize) -> &str {
    text.char_indices()
        .nth(count)
        .map_or("", |(offset, _)| &text[offset..])
}

fn wrap(tag: &str, children: Vec<HtmlNode>) -> Result<HtmlNode, BlockError> {
    Ok(ParentNode::new(tag, children)?.into())
}

fn paragraph_to_html_node(block: &str) -> Result<HtmlNode, BlockError> {
    let paragraph = block.split('\n').collect::<Vec<_>>().join(" ");
    wrap("p", text_to_children(&paragraph)?)
}

fn heading_to_html_node(block: &str, level: u8) -> Result<HtmlNode, BlockError> {
    let text = block
        .get(usize::from(level) + 1..)
        .filter(|text| !text.is_empty())
        .ok_or(BlockError::EmptyHeading)?;
    wrap(&format!("h{level}"), text_to_children(text)?)
}

/// Strip the fences: the opening fence plus the line break after it, and the
/// closing fence. Interior text is not parsed as inline markdown.
fn code_to_html_node(block: &str) -> Result<HtmlNode, BlockError> {
    if !block.starts_with(CODE_FENCE) || !block.ends_with(CODE_FENCE) {
        return Err(BlockError::InvalidCodeFence);
    }
    let start = block
        .char_indices()
        .nth(CODE_FENCE.len() + 1)
        .map_or(block.len(), |(offset, _)| offset);
    let end = block.len() - CODE_FENCE.len();
    let interior = block.get(start..end).unwrap_or("");

    let code = wrap("code", vec![HtmlNode::leaf(None, interior)?])?;
    wrap("pre", vec![code])
}

/// Build a list, stripping a fixed-width marker from every line.
///
/// Ordered markers are assumed to be `N. ` with a single digit.
fn list_to_html_node(
    block: &str,
    tag: &str,
    marker_width: usize,
) -> Result<HtmlNode, BlockError> {
    let items = block
        .split('\n')
        .map(|line| wrap("li", text_to_children(skip_chars(line, marker_width))?))
        .collect::<Result<Vec<_>, _>>()?;
    wrap(tag, items)
}

fn quote_to_html_node(block: &str) -> Result<HtmlNode, BlockError> {
    let lines = block
        .split('\n')
        .map(|line| {
            if line.starts_with('>') {
                Ok(line.trim_start_matches('>').trim())
            } else {
                Err(BlockError::InvalidQuoteLine {
                    line: line.to_owned(),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    wrap("blockquote", text_to_children(&lines.join(" "))?)
}

fn classified_block_to_html_node(block: Block<'_>) -> Result<HtmlNode, BlockError> {
    match block.kind {
        BlockType::Paragraph => paragraph_to_html_node(block.raw),
        BlockType::Heading(level) => heading_to_html_node(block.raw, level),
        BlockType::Code => code_to_html_node(block.raw),
        BlockType::Quote => quote_to_html_node(block.raw),
        BlockType::UnorderedList => list_to_html_node(block.raw, "ul", 2),
        BlockType::OrderedList => list_to_html_node(block.raw, "ol", 3),
    }
}

/// Classify and convert a single block.
///
/// # Errors
///
/// Returns [`BlockError`] if the block structure or its inline markdown is
/// invalid.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, BlockError> {
    classified_block_to_html_node(Block::new(block))
}

/// Convert a markdown document to a `div` containing one node per block.
///
/// # Errors
///
/// Returns [`ConvertError::EmptyDocument`] if the document has no blocks and
/// [`ConvertError::Block`] for the first block that fails to convert.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, ConvertError> {
    let children = markdown_to_blocks(document)
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let block = Block::new(raw);
            classified_block_to_html_node(block).map_err(|source| ConvertError::Block {
                index,
                kind: block.kind,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // "div" is non-empty, so an empty child list is the only failure.
    ParentNode::new("div", children)
        .map(HtmlNode::from)
        .map_err(|_| ConvertError::EmptyDocument)
}
