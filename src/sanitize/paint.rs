//! Paint color rewriting
//!
//! Rewrites hardcoded `fill`/`stroke` attribute values to `currentColor` so
//! icons inherit their paint from CSS, then repairs `path` elements that were
//! stroked but never filled: without an explicit `fill="none"` such outlines
//! would acquire a solid fill once every paint resolves to the same color.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PAINT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(fill|stroke)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

static PATH_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<path\b[^>]*>").unwrap());

static FILL_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bfill\s*=\s*["']"#).unwrap());

static STROKE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bstroke\s*=\s*["']"#).unwrap());

/// Values that keep their meaning only if left alone: explicit no-paint,
/// the inheritance token itself, and paint-server references.
fn is_protected(value: &str) -> bool {
    let bytes = value.as_bytes();
    value.eq_ignore_ascii_case("none")
        || value.eq_ignore_ascii_case("transparent")
        || value.eq_ignore_ascii_case("currentColor")
        || (bytes.len() >= 4 && bytes[..4].eq_ignore_ascii_case(b"url("))
}

/// Rewrite hardcoded paint colors to `currentColor`
///
/// Every `fill`/`stroke` attribute in the document, either quote style, has
/// its value replaced by `currentColor` unless the value is protected
/// (`none`, `transparent`, `currentColor` or a `url(...)` reference, compared
/// case-insensitively). Rewritten attributes come out double-quoted;
/// protected occurrences are left untouched. Stroked `path` elements without
/// any `fill` attribute gain an explicit `fill="none"` in the same pass.
pub fn rewrite_paints(markup: &str) -> String {
    let recolored = PAINT_ATTR_RE.replace_all(markup, |caps: &Captures<'_>| {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        if is_protected(value) {
            caps[0].to_string()
        } else {
            format!(r#"{}="currentColor""#, &caps[1])
        }
    });

    repair_path_fills(&recolored)
}

/// Insert `fill="none"` into `path` tags that carry a `stroke` but no `fill`
///
/// Only fires when `fill` is completely absent, whatever the `stroke` value;
/// other elements are never touched. Handles open and self-closing tags.
fn repair_path_fills(markup: &str) -> String {
    PATH_TAG_RE
        .replace_all(markup, |caps: &Captures<'_>| {
            let tag = &caps[0];
            if !STROKE_ATTR_RE.is_match(tag) || FILL_ATTR_RE.is_match(tag) {
                return tag.to_string();
            }

            let (body, closing) = match tag.strip_suffix("/>") {
                Some(body) => (body, "/>"),
                None => (&tag[..tag.len() - 1], ">"),
            };
            format!(r#"{} fill="none"{closing}"#, body.trim_end())
        })
        .into_owned()
}
