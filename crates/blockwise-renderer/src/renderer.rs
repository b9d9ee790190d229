//! Block renderer.

use crate::classes::ClassNames;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::html::{close_tag, open_tag};
use crate::inline::{push_children, push_link, push_payload, push_text};
use crate::model::{Block, Document, ImageAsset, Inline, LinkNode, TextNode};

/// Language marker used for code blocks without a language tag.
const DEFAULT_CODE_LANGUAGE: &str = "plaintext";

/// How text payloads are written.
///
/// CMS content is trusted by default so that editors can embed markup, for
/// example inside code samples. Attribute values are escaped in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEscaping {
    /// Emit text and code payloads verbatim.
    #[default]
    Trusted,
    /// HTML-escape text and code payloads.
    Escape,
}

/// Renderer settings shared by the block and inline renderers.
#[derive(Clone, Debug, Default)]
pub(crate) struct RenderOptions {
    pub(crate) classes: ClassNames,
    pub(crate) escaping: TextEscaping,
    pub(crate) root_class: Option<String>,
}

/// Result of rendering a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered HTML fragment.
    pub html: String,
    /// Content that was skipped or neutralized, in document order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Renders block documents to HTML.
///
/// The renderer holds configuration only, so one instance can be shared and
/// reused across documents and threads.
///
/// # Example
///
/// ```
/// use blockwise_renderer::{Block, BlockRenderer, ClassNames, TextNode};
///
/// let blocks = vec![Block::Paragraph(vec![
///     TextNode::new("Hi ").into(),
///     TextNode::new("there").bold().into(),
/// ])];
///
/// let result = BlockRenderer::new()
///     .with_class_names(ClassNames::none())
///     .render(&blocks);
/// assert_eq!(result.html, "<p>Hi <strong>there</strong></p>");
/// ```
#[derive(Clone, Debug, Default)]
pub struct BlockRenderer {
    options: RenderOptions,
}

impl BlockRenderer {
    /// Create a renderer with default class names and trusted text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap non-empty output in `<div class="...">`.
    ///
    /// The class string is not validated.
    #[must_use]
    pub fn with_root_class(mut self, class: impl Into<String>) -> Self {
        self.options.root_class = Some(class.into());
        self
    }

    /// Replace the class vocabulary.
    #[must_use]
    pub fn with_class_names(mut self, classes: ClassNames) -> Self {
        self.options.classes = classes;
        self
    }

    /// Choose how text payloads are written.
    #[must_use]
    pub fn with_text_escaping(mut self, escaping: TextEscaping) -> Self {
        self.options.escaping = escaping;
        self
    }

    /// Render a parsed document.
    pub fn render_document(&self, document: &Document) -> RenderResult {
        self.render(&document.blocks)
    }

    /// Render blocks, collecting diagnostics and logging each through `tracing`.
    pub fn render(&self, blocks: &[Block]) -> RenderResult {
        let mut html = String::with_capacity(blocks.len() * 64);
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        self.render_into(blocks, &mut html, &mut diagnostics);

        for diagnostic in &diagnostics {
            diagnostic.log();
        }

        RenderResult { html, diagnostics }
    }

    /// Render blocks into `out`, reporting diagnostics to `sink`.
    ///
    /// The root container is only written around non-empty output, so a
    /// document of skipped blocks renders as nothing.
    pub fn render_into(&self, blocks: &[Block], out: &mut String, sink: &mut dyn DiagnosticSink) {
        let Some(class) = &self.options.root_class else {
            for block in blocks {
                self.push_block(block, out, sink);
            }
            return;
        };

        let mut body = String::new();
        for block in blocks {
            self.push_block(block, &mut body, sink);
        }
        if body.is_empty() {
            return;
        }
        open_tag(out, "div").attr("class", class).close();
        out.push_str(&body);
        close_tag(out, "div");
    }

    /// Render a single text run.
    #[must_use]
    pub fn render_text(&self, node: &TextNode) -> String {
        let mut out = String::new();
        push_text(node, self.options.escaping, &mut out);
        out
    }

    /// Render a sequence of inline nodes.
    pub fn render_children(&self, children: &[Inline], sink: &mut dyn DiagnosticSink) -> String {
        let mut out = String::new();
        push_children(children, &self.options, &mut out, sink);
        out
    }

    fn push_block(&self, block: &Block, out: &mut String, sink: &mut dyn DiagnosticSink) {
        let classes = &self.options.classes;
        match block {
            Block::Paragraph(children) => {
                self.push_container("p", &classes.paragraph, children, out, sink);
            }
            Block::Heading { level, children } => {
                self.push_container(level.tag_name(), classes.heading(*level), children, out, sink);
            }
            Block::List { format, items } => {
                let tag = format.tag_name();
                open_tag(out, tag).class(classes.list(*format)).close();
                for item in items {
                    self.push_container("li", &classes.list_item, &item.children, out, sink);
                }
                close_tag(out, tag);
            }
            Block::Quote(children) => {
                open_tag(out, "blockquote").class(&classes.quote).close();
                self.push_container("p", "", children, out, sink);
                close_tag(out, "blockquote");
            }
            Block::Code { language, children } => {
                self.push_code(language.as_deref(), children, out);
            }
            Block::Image(image) => self.push_image(image, out),
            Block::Link(link) => self.push_link_block(link, out, sink),
            Block::Unsupported(kind) => {
                sink.report(Diagnostic::UnsupportedBlock { kind: kind.clone() });
            }
        }
    }

    fn push_container(
        &self,
        tag: &str,
        class: &str,
        children: &[Inline],
        out: &mut String,
        sink: &mut dyn DiagnosticSink,
    ) {
        open_tag(out, tag).class(class).close();
        push_children(children, &self.options, out, sink);
        close_tag(out, tag);
    }

    fn push_code(&self, language: Option<&str>, children: &[Inline], out: &mut String) {
        let language = language.unwrap_or(DEFAULT_CODE_LANGUAGE);

        open_tag(out, "pre")
            .class(&self.options.classes.code_block)
            .close();
        open_tag(out, "code")
            .attr("class", &format!("language-{language}"))
            .close();
        for child in children {
            if let Inline::Text(node) = child {
                push_payload(&node.text, self.options.escaping, out);
            }
        }
        close_tag(out, "code");
        close_tag(out, "pre");
    }

    fn push_image(&self, image: &ImageAsset, out: &mut String) {
        let classes = &self.options.classes;

        open_tag(out, "figure").class(&classes.figure).close();
        open_tag(out, "img")
            .attr("src", &image.url)
            .attr("alt", &image.alternative_text)
            .attr_opt("width", image.width)
            .attr_opt("height", image.height)
            .attr("loading", "lazy")
            .class(&classes.image)
            .close();
        if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
            open_tag(out, "figcaption").class(&classes.caption).close();
            push_payload(caption, self.options.escaping, out);
            close_tag(out, "figcaption");
        }
        close_tag(out, "figure");
    }

    fn push_link_block(&self, link: &LinkNode, out: &mut String, sink: &mut dyn DiagnosticSink) {
        // Constructed values may still carry an empty URL; treat it as missing.
        if link.url.is_empty() {
            tracing::debug!("Skipping link block without URL");
            return;
        }

        open_tag(out, "p")
            .class(&self.options.classes.link_block)
            .close();
        push_link(link, &self.options, out, sink);
        close_tag(out, "p");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{HeadingLevel, ListFormat, ListItem};

    fn bare() -> BlockRenderer {
        BlockRenderer::new().with_class_names(ClassNames::none())
    }

    fn render_json(value: &serde_json::Value) -> RenderResult {
        bare().render_document(&Document::from_value(value))
    }

    #[test]
    fn test_empty_document() {
        let result = BlockRenderer::new().with_root_class("prose").render(&[]);
        assert_eq!(result, RenderResult::default());
    }

    #[test]
    fn test_paragraph_with_bold() {
        let result = render_json(&json!([{
            "type": "paragraph",
            "children": [
                {"type": "text", "text": "Hi "},
                {"type": "text", "text": "there", "bold": true}
            ]
        }]));
        assert_eq!(result.html, "<p>Hi <strong>there</strong></p>");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_flag_order_in_source_irrelevant() {
        let a = render_json(&json!([{"type": "paragraph", "children": [
            {"type": "text", "text": "x", "bold": true, "code": true}
        ]}]));
        let b = render_json(&json!([{"type": "paragraph", "children": [
            {"code": true, "text": "x", "type": "text", "bold": true}
        ]}]));
        assert_eq!(a.html, "<p><strong><code>x</code></strong></p>");
        assert_eq!(a, b);
    }

    #[test]
    fn test_heading_levels() {
        for (level, tag) in [(1, "h1"), (2, "h2"), (3, "h3"), (4, "h4"), (5, "h5"), (6, "h6")] {
            let result = render_json(&json!([{
                "type": "heading",
                "level": level,
                "children": [{"type": "text", "text": "T"}]
            }]));
            assert_eq!(result.html, format!("<{tag}>T</{tag}>"));
        }
    }

    #[test]
    fn test_heading_invalid_level_defaults_to_h2() {
        for level in [json!(0), json!(7), json!(null), json!("big")] {
            let result = render_json(&json!([{
                "type": "heading",
                "level": level,
                "children": [{"type": "text", "text": "T"}]
            }]));
            assert_eq!(result.html, "<h2>T</h2>");
        }
        let result = render_json(&json!([{"type": "heading", "children": []}]));
        assert_eq!(result.html, "<h2></h2>");
    }

    #[test]
    fn test_heading_class() {
        let blocks = vec![Block::Heading {
            level: HeadingLevel::H1,
            children: vec![TextNode::new("Title").into()],
        }];
        let result = BlockRenderer::new().render(&blocks);
        assert_eq!(
            result.html,
            format!(r#"<h1 class="{}">Title</h1>"#, ClassNames::default().h1)
        );
    }

    #[test]
    fn test_image_without_payload_produces_nothing() {
        let result = render_json(&json!([{"type": "image", "children": []}]));
        assert_eq!(result.html, "");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_image_full() {
        let result = render_json(&json!([{
            "type": "image",
            "image": {
                "url": "/uploads/cat.png",
                "alternativeText": "A \"cat\"",
                "caption": "Our cat",
                "width": 800,
                "height": 600
            }
        }]));
        assert_eq!(
            result.html,
            concat!(
                r#"<figure><img src="/uploads/cat.png" alt="A &quot;cat&quot;" "#,
                r#"width="800" height="600" loading="lazy">"#,
                "<figcaption>Our cat</figcaption></figure>"
            )
        );
    }

    #[test]
    fn test_image_without_caption_or_size() {
        let blocks = vec![Block::Image(ImageAsset {
            url: "a.png".to_owned(),
            caption: Some(String::new()),
            ..ImageAsset::default()
        })];
        let result = bare().render(&blocks);
        assert_eq!(
            result.html,
            r#"<figure><img src="a.png" alt="" loading="lazy"></figure>"#
        );
    }

    #[test]
    fn test_ordered_list() {
        let result = render_json(&json!([{
            "type": "list",
            "format": "ordered",
            "children": [
                {"type": "list-item", "children": [{"type": "text", "text": "one"}]},
                {"type": "list-item", "children": [{"type": "text", "text": "two"}]}
            ]
        }]));
        assert_eq!(result.html, "<ol><li>one</li><li>two</li></ol>");
    }

    #[test]
    fn test_unordered_list_with_empty_item() {
        let blocks = vec![Block::List {
            format: ListFormat::Unordered,
            items: vec![
                ListItem {
                    children: vec![TextNode::new("a").into()],
                },
                ListItem::default(),
            ],
        }];
        let result = bare().render(&blocks);
        assert_eq!(result.html, "<ul><li>a</li><li></li></ul>");
    }

    #[test]
    fn test_list_classes() {
        let blocks = vec![Block::List {
            format: ListFormat::Ordered,
            items: vec![ListItem::default()],
        }];
        let classes = ClassNames::default();
        let result = BlockRenderer::new().render(&blocks);
        assert_eq!(
            result.html,
            format!(
                r#"<ol class="{}"><li class="{}"></li></ol>"#,
                classes.ordered_list, classes.list_item
            )
        );
    }

    #[test]
    fn test_quote() {
        let result = render_json(&json!([{
            "type": "quote",
            "children": [
                {"type": "text", "text": "To be"},
                {"type": "text", "text": " or not", "italic": true}
            ]
        }]));
        assert_eq!(
            result.html,
            "<blockquote><p>To be<em> or not</em></p></blockquote>"
        );
    }

    #[test]
    fn test_code_ignores_formatting() {
        let result = render_json(&json!([{
            "type": "code",
            "children": [
                {"type": "text", "text": "a", "bold": true},
                {"type": "text", "text": "b"}
            ]
        }]));
        assert_eq!(
            result.html,
            r#"<pre><code class="language-plaintext">ab</code></pre>"#
        );
    }

    #[test]
    fn test_code_language_and_verbatim_markup() {
        let result = render_json(&json!([{
            "type": "code",
            "language": "html",
            "children": [{"type": "text", "text": "<div>hi</div>"}]
        }]));
        assert_eq!(
            result.html,
            r#"<pre><code class="language-html"><div>hi</div></code></pre>"#
        );
    }

    #[test]
    fn test_code_escaped_when_configured() {
        let blocks = vec![Block::Code {
            language: Some("html".to_owned()),
            children: vec![TextNode::new("<div>").into()],
        }];
        let result = bare()
            .with_text_escaping(TextEscaping::Escape)
            .render(&blocks);
        assert_eq!(
            result.html,
            r#"<pre><code class="language-html">&lt;div&gt;</code></pre>"#
        );
    }

    #[test]
    fn test_standalone_link() {
        let result = render_json(&json!([{
            "type": "link",
            "url": "https://example.com",
            "newTab": true,
            "children": [{"type": "text", "text": "Visit"}]
        }]));
        assert_eq!(
            result.html,
            r#"<p><a href="https://example.com" target="_blank" rel="noopener noreferrer">Visit</a></p>"#
        );
    }

    #[test]
    fn test_standalone_link_without_url_skipped() {
        let blocks = vec![Block::Link(LinkNode::new("", vec![TextNode::new("x")]))];
        let result = bare().render(&blocks);
        assert_eq!(result.html, "");
    }

    #[test]
    fn test_standalone_link_unsafe_url() {
        let blocks = vec![Block::Link(LinkNode::new(
            "data:text/html,hi",
            vec![TextNode::new("x")],
        ))];
        let result = bare().render(&blocks);
        assert_eq!(result.html, r##"<p><a href="#">x</a></p>"##);
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::UnsafeUrl {
                url: "data:text/html,hi".to_owned()
            }]
        );
    }

    #[test]
    fn test_unknown_block_skipped_and_rendering_continues() {
        let result = render_json(&json!([
            {"type": "paragraph", "children": [{"type": "text", "text": "before"}]},
            {"type": "embed", "children": []},
            {"type": "paragraph", "children": [{"type": "text", "text": "after"}]}
        ]));
        assert_eq!(result.html, "<p>before</p><p>after</p>");
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::UnsupportedBlock {
                kind: "embed".to_owned()
            }]
        );
    }

    #[test]
    fn test_order_preserved_without_merging() {
        let result = render_json(&json!([
            {"type": "paragraph", "children": [{"type": "text", "text": "1"}]},
            {"type": "paragraph", "children": [{"type": "text", "text": "2"}]},
            {"type": "image", "children": []},
            {"type": "quote", "children": [{"type": "text", "text": "3"}]},
            {"type": "paragraph", "children": [{"type": "text", "text": "1"}]}
        ]));
        assert_eq!(
            result.html,
            "<p>1</p><p>2</p><blockquote><p>3</p></blockquote><p>1</p>"
        );
    }

    #[test]
    fn test_root_class_wraps_output() {
        let blocks = vec![Block::Paragraph(vec![TextNode::new("x").into()])];
        let result = bare().with_root_class("prose \"lg\"").render(&blocks);
        assert_eq!(
            result.html,
            r#"<div class="prose &quot;lg&quot;"><p>x</p></div>"#
        );
    }

    #[test]
    fn test_root_class_omitted_when_nothing_rendered() {
        let document = Document::from_value(&json!([{"type": "embed"}]));
        let result = BlockRenderer::new()
            .with_root_class("prose")
            .render_document(&document);
        assert_eq!(result.html, "");
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::UnsupportedBlock {
                kind: "embed".to_owned()
            }]
        );
    }

    #[test]
    fn test_text_with_null_flag_rendered() {
        let result = render_json(&json!([{
            "type": "paragraph",
            "children": [{"type": "text", "text": "keep me", "bold": null}]
        }]));
        assert_eq!(result.html, "<p>keep me</p>");
    }

    #[test]
    fn test_integral_float_heading_level() {
        let result = render_json(&json!([{
            "type": "heading",
            "level": 3.0,
            "children": [{"type": "text", "text": "T"}]
        }]));
        assert_eq!(result.html, "<h3>T</h3>");
    }

    #[test]
    fn test_deterministic() {
        let doc = json!([
            {"type": "heading", "level": 3, "children": [{"type": "text", "text": "H"}]},
            {"type": "paragraph", "children": [
                {"type": "text", "text": "a", "underline": true},
                {"type": "link", "url": "/b", "children": [{"type": "text", "text": "b"}]}
            ]}
        ]);
        let renderer = BlockRenderer::new().with_root_class("prose");
        let document = Document::from_value(&doc);
        assert_eq!(
            renderer.render_document(&document),
            renderer.render_document(&document)
        );
    }

    #[test]
    fn test_render_into_custom_sink() {
        let blocks = vec![
            Block::Unsupported("video".to_owned()),
            Block::Paragraph(vec![Inline::Unsupported("emoji".to_owned())]),
        ];
        let mut out = String::new();
        let mut sink: Vec<Diagnostic> = Vec::new();
        bare().render_into(&blocks, &mut out, &mut sink);
        assert_eq!(out, "<p></p>");
        assert_eq!(
            sink,
            vec![
                Diagnostic::UnsupportedBlock {
                    kind: "video".to_owned()
                },
                Diagnostic::UnsupportedInline {
                    kind: "emoji".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_render_text_and_children() {
        let renderer = bare();
        assert_eq!(
            renderer.render_text(&TextNode::new("x").italic()),
            "<em>x</em>"
        );
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert_eq!(
            renderer.render_children(&[TextNode::new("a").into()], &mut sink),
            "a"
        );
    }

    #[test]
    fn test_renderer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BlockRenderer>();
    }
}
