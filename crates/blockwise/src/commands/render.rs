//! `blockwise render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use blockwise_config::{CliSettings, Config};
use blockwise_renderer::Diagnostic;
use clap::Args;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Class for a wrapping root `<div>` (overrides config).
    #[arg(long)]
    root_class: Option<String>,

    /// HTML-escape text payloads instead of emitting them verbatim.
    #[arg(long)]
    escape_text: bool,

    /// Omit all class attributes.
    #[arg(long)]
    no_classes: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read or
    /// parsed, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            root_class: self.root_class,
            escape_text: self.escape_text.then_some(true),
            classes_enabled: self.no_classes.then_some(false),
            pointer: self.input.pointer.clone(),
        };
        let config = Config::load(self.input.config.as_deref(), Some(&cli_settings))?;

        let document = self.input.load_document(config.render.pointer.as_deref())?;
        tracing::info!(blocks = document.blocks.len(), "Parsed document");

        let mut html = String::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        config
            .renderer()
            .render_into(&document.blocks, &mut html, &mut diagnostics);

        for diagnostic in &diagnostics {
            output.warning(&format!("Warning: {diagnostic}"));
        }

        if let Some(path) = &self.output {
            std::fs::write(path, &html)?;
            output.success(&format!("Wrote {}", path.display()));
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }

        Ok(())
    }
}
