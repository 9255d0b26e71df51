//! SVG markup sanitization
//!
//! Untrusted SVG text is cleaned by an ordered pipeline: script elements are
//! removed, inline event-handler attributes are stripped, and (optionally)
//! hardcoded paint colors are rewritten so the icon inherits its color from
//! CSS. All transforms are pattern-based on attribute syntax; markup is never
//! parsed into a DOM tree, and malformed input passes through best-effort.

mod paint;

pub use paint::rewrite_paints;

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").unwrap());

// Fixed set of stripped handlers; leading whitespace is consumed so the
// attribute list stays single-spaced.
static EVENT_HANDLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\s*\bon(?:click|load|error|mouseover|mouseout|mousemove|mousedown|mouseup|focus|blur)\s*=\s*(?:"[^"]*"|'[^']*')"#,
    )
    .unwrap()
});

/// Sanitize raw SVG markup
///
/// Always removes `<script>` elements (including their bodies) and the known
/// inline event-handler attributes, case-insensitively and document-wide.
/// When `replace_colors` is set, hardcoded `fill`/`stroke` values are
/// additionally rewritten to `currentColor` (see [`rewrite_paints`]).
///
/// Total over any input string; idempotent.
pub fn sanitize(markup: &str, replace_colors: bool) -> String {
    let stripped = SCRIPT_RE.replace_all(markup, "");
    let stripped = EVENT_HANDLER_RE.replace_all(&stripped, "");

    if replace_colors {
        rewrite_paints(&stripped)
    } else {
        stripped.into_owned()
    }
}
