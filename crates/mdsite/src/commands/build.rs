//! `mdsite build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_config::{CliSettings, Config};
use mdsite_site::SiteBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover mdsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Static assets directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// Page template (overrides config).
    #[arg(long)]
    template: Option<PathBuf>,

    /// Keep the existing output directory.
    #[arg(long)]
    no_clean: bool,

    /// Render pages one at a time.
    #[arg(long)]
    sequential: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn cli_settings(&self) -> CliSettings {
        CliSettings {
            content_dir: self.content_dir.clone(),
            static_dir: self.static_dir.clone(),
            public_dir: self.public_dir.clone(),
            template: self.template.clone(),
            clean: self.no_clean.then_some(false),
            parallel: self.sequential.then_some(false),
        }
    }

    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let site = config.site_resolved;
        output.info(&format!("Content: {}", site.content_dir.display()));
        output.info(&format!("Output: {}", site.public_dir.display()));

        let public_dir = site.public_dir.clone();
        let report = SiteBuilder::new(site, config.build).build()?;

        output.success(&format!(
            "Built {} pages and copied {} static files to {}",
            report.pages,
            report.static_files,
            public_dir.display()
        ));
        Ok(())
    }
}
