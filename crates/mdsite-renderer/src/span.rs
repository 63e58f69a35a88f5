//! Typed inline text fragments.

/// Inline formatting of a [`TextSpan`].
///
/// Link and image kinds carry their URL, so a target exists exactly when
/// the span is a link or an image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link(String),
    Image(String),
}

/// A fragment of inline text produced by the span splitter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Code)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Link(url.into()))
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image(url.into()))
    }

    /// Text of the span; the alt text for images.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> &SpanKind {
        &self.kind
    }

    /// URL of a link or image span.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link(url) | SpanKind::Image(url) => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    pub fn into_parts(self) -> (String, SpanKind) {
        (self.content, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_only_for_links_and_images() {
        assert_eq!(TextSpan::plain("a").target(), None);
        assert_eq!(TextSpan::bold("a").target(), None);
        assert_eq!(TextSpan::code("a").target(), None);
        assert_eq!(TextSpan::link("a", "/x").target(), Some("/x"));
        assert_eq!(TextSpan::image("a", "/x.png").target(), Some("/x.png"));
    }

    #[test]
    fn test_equality_includes_target() {
        assert_eq!(TextSpan::link("a", "u"), TextSpan::link("a", "u"));
        assert_ne!(TextSpan::link("a", "u"), TextSpan::link("a", "v"));
        assert_ne!(TextSpan::link("a", "u"), TextSpan::image("a", "u"));
        assert_ne!(TextSpan::bold("a"), TextSpan::italic("a"));
    }
}
