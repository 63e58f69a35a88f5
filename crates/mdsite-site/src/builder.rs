//! Full site build.

use std::fs;

use mdsite_config::{BuildConfig, SiteConfig};
use rayon::prelude::*;

use crate::copy::copy_static;
use crate::error::{BuildError, IoResultExt};
use crate::page::write_page;
use crate::scanner::{PageRef, discover_pages};

/// Counts from a completed build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// HTML pages written.
    pub pages: usize,
    /// Static files copied.
    pub static_files: usize,
}

/// Builds a static site from a content directory.
///
/// A build runs in order:
/// 1. remove the public directory (when `clean` is set)
/// 2. copy the static directory into it, if present
/// 3. render every markdown page through the template
///
/// Pages are independent and rendered on the global rayon thread pool when
/// `parallel` is set. Any failing page fails the build.
pub struct SiteBuilder {
    site: SiteConfig,
    build: BuildConfig,
}

impl SiteBuilder {
    #[must_use]
    pub fn new(site: SiteConfig, build: BuildConfig) -> Self {
        Self { site, build }
    }

    /// Run the build.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. With parallel rendering, which
    /// failing page is reported is unspecified.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let public_dir = &self.site.public_dir;

        if self.build.clean && public_dir.exists() {
            tracing::info!(path = %public_dir.display(), "Removing public directory");
            fs::remove_dir_all(public_dir).at(public_dir)?;
        }

        let static_files = if self.site.static_dir.exists() {
            let copied = copy_static(&self.site.static_dir, public_dir)?;
            tracing::info!(
                from = %self.site.static_dir.display(),
                files = copied,
                "Copied static files"
            );
            copied
        } else {
            tracing::warn!(path = %self.site.static_dir.display(), "Static directory not found, skipping");
            fs::create_dir_all(public_dir).at(public_dir)?;
            0
        };

        let template = fs::read_to_string(&self.site.template).at(&self.site.template)?;
        let pages = discover_pages(&self.site.content_dir, public_dir)?;
        tracing::info!(pages = pages.len(), parallel = self.build.parallel, "Rendering pages");

        let render = |page: &PageRef| {
            tracing::info!(
                source = %page.source.display(),
                dest = %page.dest.display(),
                "Generating page"
            );
            write_page(&page.source, &template, &page.dest)
        };
        if self.build.parallel {
            pages.par_iter().try_for_each(render)?;
        } else {
            pages.iter().try_for_each(render)?;
        }

        Ok(BuildReport {
            pages: pages.len(),
            static_files,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    const TEMPLATE: &str = "<html><title>{{ Title }}</title>{{ Content }}</html>";

    fn site(root: &Path) -> SiteConfig {
        SiteConfig {
            content_dir: root.join("content"),
            static_dir: root.join("static"),
            public_dir: root.join("public"),
            template: root.join("template.html"),
        }
    }

    fn write_site(root: &Path) {
        fs::create_dir_all(root.join("content/blog")).unwrap();
        fs::create_dir_all(root.join("static/images")).unwrap();
        fs::write(root.join("template.html"), TEMPLATE).unwrap();
        fs::write(root.join("content/index.md"), "# Home\n\n- one\n- two").unwrap();
        fs::write(root.join("content/blog/post.md"), "# Post\n\n> quoted").unwrap();
        fs::write(root.join("static/index.css"), "body {}").unwrap();
        fs::write(root.join("static/images/logo.svg"), "<svg/>").unwrap();
    }

    fn build_config(parallel: bool) -> BuildConfig {
        BuildConfig {
            clean: true,
            parallel,
        }
    }

    #[test]
    fn test_build_site() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());

        let report = SiteBuilder::new(site(dir.path()), build_config(true))
            .build()
            .unwrap();

        assert_eq!(
            report,
            BuildReport {
                pages: 2,
                static_files: 2
            }
        );
        let public = dir.path().join("public");
        assert_eq!(
            fs::read_to_string(public.join("index.html")).unwrap(),
            "<html><title>Home</title><div><h1>Home</h1><ul><li>one</li><li>two</li></ul></div></html>"
        );
        assert_eq!(
            fs::read_to_string(public.join("blog/post.html")).unwrap(),
            "<html><title>Post</title><div><h1>Post</h1><blockquote>quoted</blockquote></div></html>"
        );
        assert!(public.join("images/logo.svg").is_file());
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_site(a.path());
        write_site(b.path());

        SiteBuilder::new(site(a.path()), build_config(true)).build().unwrap();
        SiteBuilder::new(site(b.path()), build_config(false)).build().unwrap();

        for page in ["index.html", "blog/post.html"] {
            assert_eq!(
                fs::read_to_string(a.path().join("public").join(page)).unwrap(),
                fs::read_to_string(b.path().join("public").join(page)).unwrap()
            );
        }
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());
        fs::create_dir_all(dir.path().join("public")).unwrap();
        fs::write(dir.path().join("public/stale.html"), "old").unwrap();

        SiteBuilder::new(site(dir.path()), build_config(false)).build().unwrap();
        assert!(!dir.path().join("public/stale.html").exists());
    }

    #[test]
    fn test_no_clean_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());
        fs::create_dir_all(dir.path().join("public")).unwrap();
        fs::write(dir.path().join("public/stale.html"), "old").unwrap();

        let config = BuildConfig {
            clean: false,
            parallel: false,
        };
        SiteBuilder::new(site(dir.path()), config).build().unwrap();
        assert!(dir.path().join("public/stale.html").exists());
    }

    #[test]
    fn test_missing_static_dir_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());
        fs::remove_dir_all(dir.path().join("static")).unwrap();

        let report = SiteBuilder::new(site(dir.path()), build_config(true))
            .build()
            .unwrap();
        assert_eq!(report.static_files, 0);
        assert_eq!(report.pages, 2);
    }

    #[test]
    fn test_failing_page_fails_build() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());
        fs::write(dir.path().join("content/broken.md"), "no heading").unwrap();

        let err = SiteBuilder::new(site(dir.path()), build_config(false))
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Title { .. }));
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());
        fs::remove_file(dir.path().join("template.html")).unwrap();

        let err = SiteBuilder::new(site(dir.path()), build_config(true))
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}

