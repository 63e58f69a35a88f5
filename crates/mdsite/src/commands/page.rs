//! `mdsite page` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Markdown source file.
    #[arg(short, long)]
    input: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    #[arg(short, long)]
    template: PathBuf,

    /// Destination HTML file.
    #[arg(short, long)]
    output: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PageArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        mdsite_site::generate_page(&self.input, &self.template, &self.output)?;
        Output::new().success(&format!("Page written to {}", self.output.display()));
        Ok(())
    }
}
