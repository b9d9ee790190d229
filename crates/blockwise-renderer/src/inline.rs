//! Inline content rendering: formatted text runs and links.

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::html::{close_tag, escape_into, open_tag};
use crate::model::{Inline, LinkNode, TextNode};
use crate::renderer::{RenderOptions, TextEscaping};
use crate::url::validate_url;

/// Formatting wrappers, outermost first.
const MARKS: [(fn(&TextNode) -> bool, &str); 5] = [
    (|node| node.bold, "strong"),
    (|node| node.italic, "em"),
    (|node| node.underline, "u"),
    (|node| node.strikethrough, "s"),
    (|node| node.code, "code"),
];

/// Append a text payload, escaping it if configured.
pub(crate) fn push_payload(text: &str, escaping: TextEscaping, out: &mut String) {
    match escaping {
        TextEscaping::Trusted => out.push_str(text),
        TextEscaping::Escape => escape_into(text, out),
    }
}

/// Render one text run with its formatting wrappers.
///
/// Wrapper order is fixed regardless of flag order in the source: code is
/// innermost, then strikethrough, underline, italic, and bold outermost.
pub(crate) fn push_text(node: &TextNode, escaping: TextEscaping, out: &mut String) {
    if node.text.is_empty() {
        return;
    }

    for (enabled, tag) in MARKS {
        if enabled(node) {
            open_tag(out, tag).close();
        }
    }
    push_payload(&node.text, escaping, out);
    for (enabled, tag) in MARKS.into_iter().rev() {
        if enabled(node) {
            close_tag(out, tag);
        }
    }
}

/// Render a link with its sanitized target and text label.
pub(crate) fn push_link(
    link: &LinkNode,
    options: &RenderOptions,
    out: &mut String,
    sink: &mut dyn DiagnosticSink,
) {
    let href = validate_url(&link.url, sink);
    let mut tag = open_tag(out, "a").attr("href", href);
    if link.new_tab {
        tag = tag.attr("target", "_blank").attr("rel", "noopener noreferrer");
    }
    tag.class(&options.classes.link).close();

    for child in &link.children {
        push_text(child, options.escaping, out);
    }
    close_tag(out, "a");
}

/// Render a sequence of inline nodes, concatenated in order.
pub(crate) fn push_children(
    children: &[Inline],
    options: &RenderOptions,
    out: &mut String,
    sink: &mut dyn DiagnosticSink,
) {
    for child in children {
        match child {
            Inline::Text(node) => push_text(node, options.escaping, out),
            Inline::Link(link) => push_link(link, options, out, sink),
            Inline::Unsupported(kind) => sink.report(Diagnostic::UnsupportedInline {
                kind: kind.clone(),
            }),
        }
    }
}
