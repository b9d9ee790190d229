//! Typed block tree.
//!
//! Documents arrive from the CMS as loosely-typed JSON. [`crate::parse`] turns
//! them into these types once, at the boundary, so the renderer only ever sees
//! well-formed nodes. Payloads a block cannot render without (the image asset,
//! the standalone link URL) are plain fields rather than options.

use serde::{Deserialize, Deserializer};

/// An ordered sequence of top-level blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Blocks in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a document from blocks.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Whether the document has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Top-level structural content unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Paragraph of inline content.
    Paragraph(Vec<Inline>),
    /// Heading of a given tier.
    Heading {
        /// Heading tier.
        level: HeadingLevel,
        /// Heading content.
        children: Vec<Inline>,
    },
    /// Ordered or unordered list.
    List {
        /// Ordered vs. unordered container.
        format: ListFormat,
        /// List items in order.
        items: Vec<ListItem>,
    },
    /// Block quotation.
    Quote(Vec<Inline>),
    /// Code listing.
    ///
    /// Only the text payload of the children is used; formatting flags and
    /// links inside a code block are ignored.
    Code {
        /// Language tag, `None` renders as `plaintext`.
        language: Option<String>,
        /// Children whose text forms the listing.
        children: Vec<Inline>,
    },
    /// Figure with an image and optional caption.
    Image(ImageAsset),
    /// Standalone block-level link.
    Link(LinkNode),
    /// Block with a type tag the renderer does not know.
    Unsupported(String),
}

/// Inline content within a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Formatted text run.
    Text(TextNode),
    /// Hyperlink with text label.
    Link(LinkNode),
    /// Inline node with a type tag the renderer does not know.
    Unsupported(String),
}

/// Text run with independent formatting flags.
///
/// Missing and `null` fields both deserialize to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextNode {
    /// Literal text payload.
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// Render inside `<strong>`.
    #[serde(deserialize_with = "null_as_default")]
    pub bold: bool,
    /// Render inside `<em>`.
    #[serde(deserialize_with = "null_as_default")]
    pub italic: bool,
    /// Render inside `<u>`.
    #[serde(deserialize_with = "null_as_default")]
    pub underline: bool,
    /// Render inside `<s>`.
    #[serde(deserialize_with = "null_as_default")]
    pub strikethrough: bool,
    /// Render inside `<code>`.
    #[serde(deserialize_with = "null_as_default")]
    pub code: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TextNode {
    /// Plain text run without formatting.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    #[must_use]
    pub fn code(mut self) -> Self {
        self.code = true;
        self
    }
}

impl From<TextNode> for Inline {
    fn from(node: TextNode) -> Self {
        Inline::Text(node)
    }
}

impl From<LinkNode> for Inline {
    fn from(node: LinkNode) -> Self {
        Inline::Link(node)
    }
}

/// Hyperlink. Labels are text runs only; links never nest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkNode {
    /// Target URL, sanitized at render time.
    pub url: String,
    /// Open in a new browsing context.
    pub new_tab: bool,
    /// Label content.
    pub children: Vec<TextNode>,
}

impl LinkNode {
    /// Link to `url` with the given label.
    #[must_use]
    pub fn new(url: impl Into<String>, children: Vec<TextNode>) -> Self {
        Self {
            url: url.into(),
            new_tab: false,
            children,
        }
    }

    #[must_use]
    pub fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }
}

/// One entry of a list block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListItem {
    /// Item content; empty renders an empty item.
    pub children: Vec<Inline>,
}

/// Image payload of an image block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageAsset {
    /// Image source URL.
    pub url: String,
    /// Alternative text.
    pub alternative_text: String,
    /// Caption shown below the image when non-empty.
    pub caption: Option<String>,
    /// Intrinsic width in pixels.
    pub width: Option<u32>,
    /// Intrinsic height in pixels.
    pub height: Option<u32>,
}

/// Ordered vs. unordered list container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    Ordered,
    #[default]
    Unordered,
}

impl ListFormat {
    /// Parse the CMS `format` string. Anything but `"ordered"` is unordered.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "ordered" {
            Self::Ordered
        } else {
            Self::Unordered
        }
    }

    pub(crate) fn tag_name(self) -> &'static str {
        match self {
            Self::Ordered => "ol",
            Self::Unordered => "ul",
        }
    }
}

/// Heading tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Map a numeric level to its tier, `None` outside 1-6.
    #[must_use]
    pub fn from_number(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    /// Numeric level (1-6).
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    pub(crate) fn tag_name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}
