//! Page title extraction.

use std::sync::LazyLock;

use regex::Regex;

/// A line starting with a single `#` followed by horizontal whitespace.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());

/// Error returned when a document has no top-level heading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing or incorrect title: no top-level `# ` heading found")]
pub struct MissingTitleError;

/// Extract the text of the first `# ` heading.
///
/// Only level-one headings at the start of a line count; `##` and deeper are
/// skipped.
///
/// # Errors
///
/// Returns [`MissingTitleError`] if no such heading exists.
pub fn extract_title(markdown: &str) -> Result<String, MissingTitleError> {
    TITLE_RE
        .captures_iter(markdown)
        .filter_map(|caps| caps.get(1))
        .map(|title| title.as_str().trim())
        .find(|title| !title.is_empty())
        .map(str::to_owned)
        .ok_or(MissingTitleError)
}
