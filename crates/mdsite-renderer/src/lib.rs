//! Markdown to HTML conversion for mdsite.
//!
//! The pipeline is pure and synchronous:
//!
//! 1. [`markdown_to_blocks`] splits a document on blank lines
//! 2. [`block_to_block_type`] classifies each block
//! 3. inline text is split into [`TextSpan`]s by [`text_to_spans`]
//! 4. spans and blocks are assembled into an [`HtmlNode`] tree
//!
//! All types are `Send + Sync`, so independent documents can be converted in
//! parallel without coordination.
//!
//! # Example
//!
//! ```
//! use mdsite_renderer::{extract_title, markdown_to_html_node};
//!
//! let markdown = "# Hello\n\n**Bold** text";
//! let html = markdown_to_html_node(markdown)?.render();
//! assert_eq!(html, "<div><h1>Hello</h1><p><b>Bold</b> text</p></div>");
//! assert_eq!(extract_title(markdown)?, "Hello");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod block;
mod convert;
mod inline;
mod node;
mod span;
mod title;

pub use block::{Block, BlockType, block_to_block_type, markdown_to_blocks};
pub use convert::{
    BlockError, ConvertError, block_to_html_node, markdown_to_html_node, span_to_html_node,
};
pub use inline::{
    Delimiter, InlineError, extract_markdown_images, extract_markdown_links, split_nodes_delimiter,
    split_nodes_image, split_nodes_link, text_to_spans,
};
pub use node::{Attributes, HtmlNode, LeafNode, NodeError, ParentNode};
pub use span::{SpanKind, TextSpan};
pub use title::{MissingTitleError, extract_title};
