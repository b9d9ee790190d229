//! HTML renderer for CMS rich-text block documents.
//!
//! Headless CMS APIs deliver rich text as a JSON array of typed blocks
//! (paragraphs, headings, lists, quotes, code, images, links), each holding
//! inline text runs with formatting flags. This crate turns that array into an
//! HTML fragment.
//!
//! # Architecture
//!
//! - [`Document::from_json_str`] / [`Document::from_value`] parse the payload
//!   into the typed tree in [`Block`] and [`Inline`], dropping malformed nodes.
//! - [`BlockRenderer`] walks the tree and writes HTML. Rendering never fails;
//!   skipped or neutralized content is reported as [`Diagnostic`]s.
//! - [`validate_url`] keeps script-capable URL schemes out of `href`s.
//!
//! Text payloads are emitted verbatim unless [`TextEscaping::Escape`] is
//! selected. Attribute values are always escaped.
//!
//! # Example
//!
//! ```
//! use blockwise_renderer::{BlockRenderer, ClassNames, Document};
//!
//! let json = r#"[
//!     {"type": "heading", "level": 1, "children": [{"type": "text", "text": "Hello"}]},
//!     {"type": "paragraph", "children": [{"type": "text", "text": "World", "italic": true}]}
//! ]"#;
//!
//! let document = Document::from_json_str(json).unwrap();
//! let result = BlockRenderer::new()
//!     .with_class_names(ClassNames::none())
//!     .render_document(&document);
//!
//! assert_eq!(result.html, "<h1>Hello</h1><p><em>World</em></p>");
//! ```

mod classes;
mod diagnostic;
mod html;
mod inline;
mod model;
mod parse;
mod renderer;
mod url;

pub use classes::ClassNames;
pub use diagnostic::{Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use html::escape_html;
pub use model::{
    Block, Document, HeadingLevel, ImageAsset, Inline, LinkNode, ListFormat, ListItem, TextNode,
};
pub use parse::ParseError;
pub use renderer::{BlockRenderer, RenderResult, TextEscaping};
pub use url::{URL_PLACEHOLDER, validate_url};

/// Render blocks with the default renderer.
///
/// Shorthand for `BlockRenderer::new().render(blocks)`.
pub fn render_document(blocks: &[Block]) -> RenderResult {
    BlockRenderer::new().render(blocks)
}
