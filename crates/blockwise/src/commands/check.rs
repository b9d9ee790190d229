//! `blockwise check` command implementation.

use blockwise_config::{CliSettings, Config};
use blockwise_renderer::Diagnostic;
use clap::Args;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Fail if any content would be skipped or neutralized.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, or, with
    /// `--strict`, if any diagnostic is reported.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            pointer: self.input.pointer.clone(),
            ..Default::default()
        };
        let config = Config::load(self.input.config.as_deref(), Some(&cli_settings))?;
        let document = self.input.load_document(config.render.pointer.as_deref())?;

        let mut html = String::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        config
            .renderer()
            .render_into(&document.blocks, &mut html, &mut diagnostics);

        for diagnostic in &diagnostics {
            output.warning(&format!("  {diagnostic}"));
        }

        let summary = format!(
            "{} blocks, {} diagnostics, {} bytes of HTML",
            document.blocks.len(),
            diagnostics.len(),
            html.len()
        );

        if diagnostics.is_empty() {
            output.success(&summary);
            return Ok(());
        }

        if self.strict {
            return Err(CliError::Validation(summary));
        }
        output.info(&summary);
        Ok(())
    }
}
