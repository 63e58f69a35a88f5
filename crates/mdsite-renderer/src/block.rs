//! Block segmentation and classification.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Two or more consecutive line breaks.
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").unwrap());

/// One to six `#` followed by a space.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6}) ").unwrap());

/// Ordered list marker: `N. `
static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)\. ").unwrap());

const CODE_FENCE: &str = "```";

/// Structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    /// Heading with level 1..=6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => f.write_str("paragraph"),
            Self::Heading(level) => write!(f, "heading {level}"),
            Self::Code => f.write_str("code"),
            Self::Quote => f.write_str("quote"),
            Self::UnorderedList => f.write_str("unordered list"),
            Self::OrderedList => f.write_str("ordered list"),
        }
    }
}

/// A classified chunk of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub raw: &'a str,
    pub kind: BlockType,
}

impl<'a> Block<'a> {
    /// Classify a raw block.
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            kind: block_to_block_type(raw),
        }
    }
}

/// Split a document into trimmed, non-empty blocks separated by blank lines.
pub fn markdown_to_blocks(document: &str) -> Vec<&str> {
    BLANK_LINES_RE
        .split(document.trim())
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block by its leading syntax.
///
/// Checked in order: heading, code fence, quote, unordered list, ordered
/// list. Anything else is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if let Some(caps) = HEADING_RE.captures(block) {
        let level = caps.get(1).map_or(1, |m| m.len());
        // HEADING_RE caps the marker at six characters.
        return BlockType::Heading(u8::try_from(level).unwrap_or(6));
    }

    if block.len() >= 2 * CODE_FENCE.len()
        && block.starts_with(CODE_FENCE)
        && block.ends_with(CODE_FENCE)
    {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.trim().split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }

    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Every line is `N. ` with N counting up from 1.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines.iter().enumerate().all(|(index, line)| {
        ORDERED_ITEM_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|number| number.as_str().parse::<usize>().ok())
            == Some(index + 1)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_markdown_to_blocks() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_markdown_to_blocks_collapses_extra_blank_lines() {
        let md = "\n\n\nfirst\n\n\n\n   second  \n\n \n\nthird\n";
        assert_eq!(markdown_to_blocks(md), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_markdown_to_blocks_crlf() {
        assert_eq!(markdown_to_blocks("a\r\n\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_markdown_to_blocks_empty_document() {
        assert!(markdown_to_blocks("  \n\n \n").is_empty());
    }

    #[test]
    fn test_scenario_paragraphs_and_list() {
        let kinds: Vec<BlockType> =
            markdown_to_blocks("This is **bolded** paragraph\n\npara2\n\n- item1\n- item2")
                .into_iter()
                .map(block_to_block_type)
                .collect();
        assert_eq!(
            kinds,
            vec![
                BlockType::Paragraph,
                BlockType::Paragraph,
                BlockType::UnorderedList
            ]
        );
    }

    #[test]
    fn test_classify_headings() {
        for level in 1..=6u8 {
            let block = format!("{} Heading", "#".repeat(usize::from(level)));
            assert_eq!(block_to_block_type(&block), BlockType::Heading(level));
        }
    }

    #[test]
    fn test_classify_heading_requires_space_and_max_six() {
        assert_eq!(block_to_block_type("#NoSpace"), BlockType::Paragraph);
        assert_eq!(block_to_block_type("####### Seven"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_code() {
        assert_eq!(
            block_to_block_type("```\nfn main() {}\n\nlet x = 1;\n```"),
            BlockType::Code
        );
        assert_eq!(block_to_block_type("```"), BlockType::Paragraph);
        assert_eq!(block_to_block_type("```\nunterminated"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(block_to_block_type(">one\n> two"), BlockType::Quote);
        assert_eq!(block_to_block_type(">one\ntwo"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(
            block_to_block_type("- This is an unordered list\n- with items"),
            BlockType::UnorderedList
        );
        assert_eq!(block_to_block_type("- item\n-missing space"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(
            block_to_block_type("1. This is an ordered list\n2. with items\n3. and items"),
            BlockType::OrderedList
        );
    }

    #[test]
    fn test_classify_ordered_list_requires_sequence() {
        assert_eq!(block_to_block_type("1. a\n3. b"), BlockType::Paragraph);
        assert_eq!(block_to_block_type("2. a\n3. b"), BlockType::Paragraph);
        assert_eq!(block_to_block_type("1.a"), BlockType::Paragraph);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let block = "1. first\n2. second";
        assert_eq!(block_to_block_type(block), block_to_block_type(block));
    }

    #[test]
    fn test_block_new_classifies() {
        let block = Block::new("> quoted");
        assert_eq!(block.kind, BlockType::Quote);
        assert_eq!(block.raw, "> quoted");
    }

    #[test]
    fn test_block_type_display() {
        assert_eq!(BlockType::Heading(3).to_string(), "heading 3");
        assert_eq!(BlockType::OrderedList.to_string(), "ordered list");
    }
}
