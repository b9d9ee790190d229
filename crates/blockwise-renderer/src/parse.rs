//! JSON input boundary.
//!
//! Converts the CMS payload into the typed tree in [`crate::model`]. Parsing
//! only fails on syntactically invalid JSON; malformed nodes are dropped and
//! unknown type tags are kept as `Unsupported` so the renderer can report them.

use serde::Deserialize;
use serde_json::Value;

use crate::model::{
    Block, Document, HeadingLevel, ImageAsset, Inline, LinkNode, ListFormat, ListItem, TextNode,
};

/// Error parsing a document from JSON text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Document {
    /// Parse a blocks array from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the text is not valid JSON. Any valid
    /// JSON value yields a document (possibly empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockwise_renderer::Document;
    ///
    /// let doc = Document::from_json_str(r#"[{"type": "paragraph", "children": []}]"#).unwrap();
    /// assert_eq!(doc.blocks.len(), 1);
    ///
    /// let doc = Document::from_json_str(r#"{"not": "a list"}"#).unwrap();
    /// assert!(doc.is_empty());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Build a document from an already-parsed JSON value.
    ///
    /// Non-array values give an empty document.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let blocks = value
            .as_array()
            .map(|nodes| nodes.iter().filter_map(parse_block).collect())
            .unwrap_or_default();
        Self { blocks }
    }
}

fn type_tag(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

fn parse_block(value: &Value) -> Option<Block> {
    let Some(kind) = type_tag(value) else {
        tracing::debug!("Dropping block without type tag");
        return None;
    };

    let block = match kind {
        "paragraph" => Block::Paragraph(parse_inlines(value)),
        "heading" => Block::Heading {
            level: value
                .get("level")
                .and_then(parse_level)
                .unwrap_or_default(),
            children: parse_inlines(value),
        },
        "list" => Block::List {
            format: value
                .get("format")
                .and_then(Value::as_str)
                .map(ListFormat::from_tag)
                .unwrap_or_default(),
            items: children_of(value).iter().filter_map(parse_list_item).collect(),
        },
        "quote" => Block::Quote(parse_inlines(value)),
        "code" => Block::Code {
            language: value
                .get("language")
                .and_then(Value::as_str)
                .filter(|lang| !lang.is_empty())
                .map(str::to_owned),
            children: parse_inlines(value),
        },
        "image" => match value.get("image").and_then(parse_image) {
            Some(image) => Block::Image(image),
            None => {
                tracing::debug!("Dropping image block without image payload");
                return None;
            }
        },
        "link" => match parse_link(value) {
            Some(link) if !link.url.is_empty() => Block::Link(link),
            _ => {
                tracing::debug!("Dropping link block without URL");
                return None;
            }
        },
        other => Block::Unsupported(other.to_owned()),
    };

    Some(block)
}

/// Heading level from an integer or an integral float such as `3.0`.
fn parse_level(value: &Value) -> Option<HeadingLevel> {
    if let Some(number) = value.as_i64() {
        return HeadingLevel::from_number(number);
    }
    let number = value.as_f64()?;
    if number.fract() != 0.0 || !(1.0..=6.0).contains(&number) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let number = number as i64;
    HeadingLevel::from_number(number)
}

fn children_of(value: &Value) -> &[Value] {
    value
        .get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn parse_inlines(value: &Value) -> Vec<Inline> {
    children_of(value).iter().filter_map(parse_inline).collect()
}

fn parse_inline(value: &Value) -> Option<Inline> {
    match type_tag(value)? {
        "text" => parse_text(value).map(Inline::Text),
        "link" => parse_link(value).map(Inline::Link),
        other => Some(Inline::Unsupported(other.to_owned())),
    }
}

fn parse_text(value: &Value) -> Option<TextNode> {
    TextNode::deserialize(value)
        .inspect_err(|e| tracing::debug!(error = %e, "Dropping malformed text node"))
        .ok()
}

/// Parse a link node. Label children other than text are dropped.
fn parse_link(value: &Value) -> Option<LinkNode> {
    let url = match value.get("url") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(url)) => url.clone(),
        Some(_) => return None,
    };
    let new_tab = value.get("newTab").and_then(Value::as_bool).unwrap_or(false);
    let children = children_of(value)
        .iter()
        .filter(|child| type_tag(child) == Some("text"))
        .filter_map(parse_text)
        .collect();

    Some(LinkNode {
        url,
        new_tab,
        children,
    })
}

fn parse_list_item(value: &Value) -> Option<ListItem> {
    type_tag(value)?;
    Some(ListItem {
        children: parse_inlines(value),
    })
}

fn parse_image(value: &Value) -> Option<ImageAsset> {
    let url = value.get("url").and_then(Value::as_str)?;
    if url.is_empty() {
        return None;
    }

    let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
    let dimension = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    Some(ImageAsset {
        url: url.to_owned(),
        alternative_text: text("alternativeText").unwrap_or_default(),
        caption: text("caption").filter(|caption| !caption.is_empty()),
        width: dimension("width"),
        height: dimension("height"),
    })
}
