//! `weldify render` command implementation.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markup file to render (default: stdin).
    file: Option<PathBuf>,

    /// Wrap the HTML in the prose container.
    #[arg(long)]
    fragment: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };

        let html = if self.fragment {
            weldify_markup::render_fragment(&text)
        } else {
            weldify_markup::render(&text)
        };
        Output::new().result(&html);
        Ok(())
    }
}
