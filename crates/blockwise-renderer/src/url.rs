//! URL scheme denylist.
//!
//! This is not a sanitizer. It rejects a handful of script-capable schemes and
//! passes everything else through untouched: no well-formedness check, no
//! handling of embedded whitespace or control characters inside the scheme,
//! no coverage of other dangerous schemes.

use crate::diagnostic::{Diagnostic, DiagnosticSink};

/// Value substituted for empty or rejected URLs.
pub const URL_PLACEHOLDER: &str = "#";

/// Scheme prefixes that are never emitted.
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

/// Check `url` against the unsafe scheme denylist.
///
/// Returns the input unchanged when it is allowed, or [`URL_PLACEHOLDER`] when
/// it is empty or starts (after trimming, ignoring case) with a denylisted
/// scheme. Rejections are reported to `sink`.
///
/// # Examples
///
/// ```
/// use blockwise_renderer::{NullSink, validate_url};
///
/// assert_eq!(validate_url("https://example.com", &mut NullSink), "https://example.com");
/// assert_eq!(validate_url("  JavaScript:alert(1)", &mut NullSink), "#");
/// assert_eq!(validate_url("", &mut NullSink), "#");
/// ```
pub fn validate_url<'a>(url: &'a str, sink: &mut dyn DiagnosticSink) -> &'a str {
    if url.is_empty() {
        return URL_PLACEHOLDER;
    }

    if is_unsafe(url) {
        sink.report(Diagnostic::UnsafeUrl {
            url: url.to_owned(),
        });
        return URL_PLACEHOLDER;
    }

    url
}

fn is_unsafe(url: &str) -> bool {
    let trimmed = url.trim();
    UNSAFE_SCHEMES.iter().any(|scheme| {
        trimmed
            .get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}
