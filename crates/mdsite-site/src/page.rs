//! Single page rendering.

use std::fs;
use std::path::Path;

use mdsite_renderer::{extract_title, markdown_to_html_node};

use crate::error::{BuildError, IoResultExt};

/// Template placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Template placeholder replaced with the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Substitute title and content into a page template.
///
/// Every occurrence of each placeholder is replaced; the title is
/// substituted first.
#[must_use]
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Render a markdown document into a full HTML page.
///
/// `path` identifies the source in errors.
///
/// # Errors
///
/// Returns [`BuildError::Title`] if the document has no `# ` heading and
/// [`BuildError::Render`] if conversion fails.
pub fn render_page(markdown: &str, template: &str, path: &Path) -> Result<String, BuildError> {
    let title = extract_title(markdown).map_err(|source| BuildError::Title {
        path: path.to_path_buf(),
        source,
    })?;
    let content = markdown_to_html_node(markdown)
        .map_err(|source| BuildError::Render {
            path: path.to_path_buf(),
            source,
        })?
        .render();
    Ok(render_template(template, &title, &content))
}

/// Generate one HTML page from a markdown file and a template file.
///
/// Parent directories of `dest` are created. Nothing is written unless the
/// page renders successfully.
///
/// # Errors
///
/// Returns [`BuildError::DestinationIsDirectory`] if `dest` is an existing
/// directory, and any error from reading, rendering, or writing.
pub fn generate_page(source: &Path, template: &Path, dest: &Path) -> Result<(), BuildError> {
    tracing::info!(
        source = %source.display(),
        template = %template.display(),
        dest = %dest.display(),
        "Generating page"
    );
    let template = fs::read_to_string(template).at(template)?;
    write_page(source, &template, dest)
}

/// Render `source` through an already loaded template and write it to `dest`.
pub(crate) fn write_page(source: &Path, template: &str, dest: &Path) -> Result<(), BuildError> {
    if dest.is_dir() {
        return Err(BuildError::DestinationIsDirectory(dest.to_path_buf()));
    }
    let markdown = fs::read_to_string(source).at(source)?;
    let html = render_page(&markdown, template, source)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).at(parent)?;
    }
    fs::write(dest, html).at(dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    #[test]
    fn test_render_template_replaces_all_occurrences() {
        let html = render_template("{{ Title }}|{{ Title }}|{{ Content }}", "T", "<p>c</p>");
        assert_eq!(html, "T|T|<p>c</p>");
    }

    #[test]
    fn test_render_template_without_placeholders() {
        assert_eq!(render_template("static", "T", "C"), "static");
    }

    #[test]
    fn test_render_page() {
        let html = render_page("# Hello\n\nSome **bold** text", TEMPLATE, Path::new("a.md")).unwrap();
        assert_eq!(
            html,
            "<title>Hello</title><main><div><h1>Hello</h1><p>Some <b>bold</b> text</p></div></main>"
        );
    }

    #[test]
    fn test_render_page_missing_title() {
        let err = render_page("## Only h2", TEMPLATE, Path::new("a.md")).unwrap_err();
        assert!(matches!(err, BuildError::Title { .. }));
        assert!(err.to_string().starts_with("a.md: "));
    }

    #[test]
    fn test_render_page_conversion_error() {
        let err = render_page("# Title\n\nunclosed **bold", TEMPLATE, Path::new("a.md")).unwrap_err();
        assert!(matches!(err, BuildError::Render { .. }));
    }

    #[test]
    fn test_generate_page_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("index.md");
        let template = dir.path().join("template.html");
        let dest = dir.path().join("public/nested/index.html");
        fs::write(&source, "# Home\n\nWelcome").unwrap();
        fs::write(&template, TEMPLATE).unwrap();

        generate_page(&source, &template, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<title>Home</title><main><div><h1>Home</h1><p>Welcome</p></div></main>"
        );
    }

    #[test]
    fn test_generate_page_destination_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("index.md");
        let template = dir.path().join("template.html");
        fs::write(&source, "# Home").unwrap();
        fs::write(&template, TEMPLATE).unwrap();

        let err = generate_page(&source, &template, dir.path()).unwrap_err();
        assert!(matches!(err, BuildError::DestinationIsDirectory(_)));
    }

    #[test]
    fn test_generate_page_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("index.md");
        let template = dir.path().join("template.html");
        let dest = dir.path().join("out/index.html");
        fs::write(&source, "no title here").unwrap();
        fs::write(&template, TEMPLATE).unwrap();

        assert!(generate_page(&source, &template, &dest).is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_generate_page_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("index.md");
        fs::write(&source, "# Home").unwrap();

        let err = generate_page(&source, &dir.path().join("nope.html"), &dir.path().join("o.html"))
            .unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}
