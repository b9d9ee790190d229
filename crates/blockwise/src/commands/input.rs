//! Shared input handling for commands that read a blocks document.

use std::io::Read;
use std::path::PathBuf;

use blockwise_renderer::{Document, ParseError};
use clap::Args;
use serde_json::Value;

use crate::error::CliError;

/// Input arguments shared by `render` and `check`.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// JSON input file (default: stdin, or `-`).
    pub input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover blockwise.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON pointer to the blocks array, e.g. `/data/content` (overrides config).
    #[arg(long)]
    pub pointer: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl InputArgs {
    /// Read and parse the input document.
    ///
    /// `pointer` selects the blocks array inside the input; `None` or an empty
    /// pointer uses the whole input.
    pub(crate) fn load_document(&self, pointer: Option<&str>) -> Result<Document, CliError> {
        let json = self.read_input()?;
        let value: Value = serde_json::from_str(&json).map_err(ParseError::from)?;
        select_document(&value, pointer)
    }

    fn read_input(&self) -> Result<String, CliError> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                tracing::info!(path = %path.display(), "Reading input file");
                Ok(std::fs::read_to_string(path)?)
            }
            _ => {
                tracing::info!("Reading input from stdin");
                let mut json = String::new();
                std::io::stdin().read_to_string(&mut json)?;
                Ok(json)
            }
        }
    }
}

/// Pick the blocks array out of a parsed input value.
fn select_document(value: &Value, pointer: Option<&str>) -> Result<Document, CliError> {
    let blocks = match pointer.filter(|p| !p.is_empty()) {
        Some(pointer) => value.pointer(pointer).ok_or_else(|| {
            CliError::Validation(format!("JSON pointer {pointer} not found in input"))
        })?,
        None => value,
    };
    Ok(Document::from_value(blocks))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_select_whole_input() {
        let value = json!([{"type": "quote", "children": []}]);
        let document = select_document(&value, None).unwrap();
        assert_eq!(document.blocks.len(), 1);
    }

    #[test]
    fn test_select_with_pointer() {
        let value = json!({"data": {"content": [
            {"type": "paragraph", "children": []},
            {"type": "paragraph", "children": []}
        ]}});
        let document = select_document(&value, Some("/data/content")).unwrap();
        assert_eq!(document.blocks.len(), 2);
    }

    #[test]
    fn test_empty_pointer_selects_whole_input() {
        let value = json!([]);
        let document = select_document(&value, Some("")).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_missing_pointer_is_error() {
        let value = json!({"data": []});
        let err = select_document(&value, Some("/data/content")).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("/data/content"));
    }
}
