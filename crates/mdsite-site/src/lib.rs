//! Static site generation for mdsite.
//!
//! This crate provides:
//! - [`SiteBuilder`]: full site build (clean, static copy, page generation)
//! - [`generate_page`]: render a single markdown file through a template
//! - [`copy_static`]: recursive static asset copy
//! - [`discover_pages`]: markdown page discovery
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mdsite_config::Config;
//! use mdsite_site::SiteBuilder;
//!
//! let config = Config::load(None, None)?;
//! let report = SiteBuilder::new(config.site_resolved, config.build).build()?;
//! println!("{} pages", report.pages);
//! # Ok(())
//! # }
//! ```

mod builder;
mod copy;
mod error;
mod page;
mod scanner;

pub use builder::{BuildReport, SiteBuilder};
pub use copy::copy_static;
pub use error::BuildError;
pub use page::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, generate_page, render_page, render_template};
pub use scanner::{PageRef, discover_pages};

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::SiteBuilder: Send, Sync);
    static_assertions::assert_impl_all!(super::BuildError: Send, Sync);
}
