//! Low-level HTML writing helpers.

/// Escape special HTML characters.
///
/// # Examples
///
/// ```
/// use blockwise_renderer::escape_html;
///
/// assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    escape_into(s, &mut result);
    result
}

/// Escape special HTML characters, appending to `out`.
pub(crate) fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

/// Start tag being written into an output buffer.
///
/// Attribute values are always escaped. Call [`StartTag::close`] to emit `>`.
pub(crate) struct StartTag<'a> {
    out: &'a mut String,
}

/// Begin writing `<name`.
pub(crate) fn open_tag<'a>(out: &'a mut String, name: &str) -> StartTag<'a> {
    out.push('<');
    out.push_str(name);
    StartTag { out }
}

/// Write `</name>`.
pub(crate) fn close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

impl StartTag<'_> {
    pub(crate) fn attr(self, name: &str, value: &str) -> Self {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        escape_into(value, self.out);
        self.out.push('"');
        self
    }

    /// Attach `class` unless the token string is empty.
    pub(crate) fn class(self, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.attr("class", value)
        }
    }

    pub(crate) fn attr_opt(self, name: &str, value: Option<u32>) -> Self {
        match value {
            Some(value) => self.attr(name, &value.to_string()),
            None => self,
        }
    }

    pub(crate) fn close(self) {
        self.out.push('>');
    }
}
