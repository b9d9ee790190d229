//! Non-fatal reports about skipped or neutralized content.
//!
//! Rendering never fails. Content the renderer refuses to emit is reported
//! through a [`DiagnosticSink`] supplied by the caller, so the core stays free
//! of process-wide logging state and tests can assert on what was dropped.

use std::fmt;

/// Something the renderer skipped or rewrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// URL with a denylisted scheme was replaced by `#`.
    UnsafeUrl {
        /// The rejected URL, as given.
        url: String,
    },
    /// Block with an unknown type tag produced no output.
    UnsupportedBlock {
        /// The unknown type tag.
        kind: String,
    },
    /// Inline node with an unknown type tag produced no output.
    UnsupportedInline {
        /// The unknown type tag.
        kind: String,
    },
}

impl Diagnostic {
    /// Emit this diagnostic as a `tracing` warning.
    pub fn log(&self) {
        match self {
            Self::UnsafeUrl { url } => {
                tracing::warn!(url = %url, "Blocked unsafe URL");
            }
            Self::UnsupportedBlock { kind } => {
                tracing::warn!(kind = %kind, "Skipping unsupported block type");
            }
            Self::UnsupportedInline { kind } => {
                tracing::warn!(kind = %kind, "Skipping unsupported inline type");
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsafeUrl { url } => write!(f, "unsafe URL blocked: {url}"),
            Self::UnsupportedBlock { kind } => write!(f, "unsupported block type: {kind}"),
            Self::UnsupportedInline { kind } => write!(f, "unsupported inline type: {kind}"),
        }
    }
}

/// Receiver for diagnostics produced while rendering.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that forwards every diagnostic to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
    }
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
