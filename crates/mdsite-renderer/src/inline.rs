//! Inline markdown span splitting.
//!
//! Text is decomposed in a fixed order of passes. Each pass only re-splits
//! [`SpanKind::Plain`](crate::SpanKind::Plain) spans left by earlier passes:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)` not preceded by `!`
//! 3. `**bold**`, then `_italic_`, then `` `code` ``
//!
//! Unmatched link or image syntax stays literal text. An opening delimiter
//! without a closing one is an error.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::span::TextSpan;

/// Image reference: `![alt](url)` without nested brackets or parentheses.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Link reference: `[text](url)`. Matches preceded by `!` are skipped in
/// [`link_references`].
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Error from inline span splitting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    /// Delimiter opened without a matching close.
    #[error("no closing delimiter found for `{delimiter}` in {text:?}")]
    UnclosedDelimiter {
        /// The unmatched delimiter.
        delimiter: &'static str,
        /// Text of the span being split.
        text: String,
    },
}

/// Paired inline delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
}

impl Delimiter {
    /// Delimiter passes in the order they are applied.
    pub const ALL: [Self; 3] = [Self::Bold, Self::Italic, Self::Code];

    pub fn marker(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "_",
            Self::Code => "`",
        }
    }

    fn span(self, content: &str) -> TextSpan {
        match self {
            Self::Bold => TextSpan::bold(content),
            Self::Italic => TextSpan::italic(content),
            Self::Code => TextSpan::code(content),
        }
    }
}

/// Position and parts of a matched image or link.
struct Reference<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

impl<'a> Reference<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let whole = caps.get_match();
        Self {
            start: whole.start(),
            end: whole.end(),
            label: caps.get(1).map_or("", |m| m.as_str()),
            url: caps.get(2).map_or("", |m| m.as_str()),
        }
    }
}

fn image_references(text: &str) -> Vec<Reference<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| Reference::from_captures(&caps))
        .collect()
}

fn link_references(text: &str) -> Vec<Reference<'_>> {
    let mut refs = Vec::new();
    let mut pos = 0;
    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let reference = Reference::from_captures(&caps);
        if text[..reference.start].ends_with('!') {
            // `[` is one byte, so resuming right after it stays on a char boundary.
            pos = reference.start + 1;
            continue;
        }
        pos = reference.end;
        refs.push(reference);
    }
    refs
}

/// Find all `![alt](url)` references, returning `(alt, url)` pairs.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    image_references(text)
        .into_iter()
        .map(|r| (r.label, r.url))
        .collect()
}

/// Find all `[text](url)` references that are not images, returning
/// `(text, url)` pairs.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    link_references(text)
        .into_iter()
        .map(|r| (r.label, r.url))
        .collect()
}

/// Split plain spans around references found by `find`.
///
/// Empty plain spans are dropped; non-plain spans pass through.
fn split_references<F>(
    spans: Vec<TextSpan>,
    find: F,
    build: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan>
where
    F: Fn(&str) -> Vec<Reference<'_>>,
{
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let text = span.content();
        if text.is_empty() {
            continue;
        }

        let refs = find(text);
        if refs.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for reference in refs {
            if reference.start > cursor {
                out.push(TextSpan::plain(&text[cursor..reference.start]));
            }
            out.push(build(reference.label, reference.url));
            cursor = reference.end;
        }
        if cursor < text.len() {
            out.push(TextSpan::plain(&text[cursor..]));
        }
    }
    out
}

/// Split image references out of plain spans.
pub fn split_nodes_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_references(spans, image_references, |alt, url| TextSpan::image(alt, url))
}

/// Split link references out of plain spans.
pub fn split_nodes_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_references(spans, link_references, |text, url| TextSpan::link(text, url))
}

/// Split plain spans on a paired delimiter.
///
/// Text between an opening and the next closing delimiter becomes a span of
/// the delimiter's kind, even when empty.
///
/// # Errors
///
/// Returns [`InlineError::UnclosedDelimiter`] if a delimiter has no match.
pub fn split_nodes_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, InlineError> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut rest = span.content();
        while let Some(open) = rest.find(marker) {
            let inner = &rest[open + marker.len()..];
            let close = inner
                .find(marker)
                .ok_or_else(|| InlineError::UnclosedDelimiter {
                    delimiter: marker,
                    text: span.content().to_owned(),
                })?;

            if open > 0 {
                out.push(TextSpan::plain(&rest[..open]));
            }
            out.push(delimiter.span(&inner[..close]));
            rest = &inner[close + marker.len()..];
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }

    Ok(out)
}

/// Convert inline markdown to an ordered sequence of spans.
///
/// # Errors
///
/// Returns [`InlineError`] if a bold, italic or code delimiter is unclosed.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let spans = split_nodes_image(vec![TextSpan::plain(text)]);
    let spans = split_nodes_link(spans);
    Delimiter::ALL
        .into_iter()
        .try_fold(spans, split_nodes_delimiter)
}
