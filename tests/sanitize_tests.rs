//! Integration tests for the SVG sanitizer and color rewriter

use pretty_assertions::assert_eq;

use svgflex::sanitize;

const ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <script>document.location = "https://evil.example";</script>
  <path onclick="steal()" fill="#e91e63" d="M4 4h16v16H4z"/>
  <path stroke="#3f51b5" stroke-width="2" d="M2 12h20"/>
  <circle fill="none" stroke="#009688" r="10" cx="12" cy="12"/>
</svg>"##;

#[test]
fn test_full_pipeline_on_realistic_icon() {
    let clean = sanitize(ICON, true);

    assert!(!clean.contains("script"));
    assert!(!clean.contains("evil.example"));
    assert!(!clean.contains("onclick"));

    // Hardcoded paints unified, protected values preserved
    assert!(clean.contains(r#"<path fill="currentColor" d="M4 4h16v16H4z"/>"#));
    assert!(clean.contains(r#"stroke="currentColor" stroke-width="2""#));
    assert!(clean.contains(r#"<circle fill="none" stroke="currentColor""#));

    // The stroked-but-unfilled path gains an explicit no-fill
    assert!(clean.contains(r#"d="M2 12h20" fill="none"/>"#));
}

#[test]
fn test_keep_colors_still_sanitizes() {
    let clean = sanitize(ICON, false);

    assert!(!clean.contains("script"));
    assert!(!clean.contains("onclick"));
    assert!(clean.contains(r##"fill="#e91e63""##));
    assert!(clean.contains(r##"stroke="#3f51b5""##));
    assert!(!clean.contains(r#"d="M2 12h20" fill"#));
}

#[test]
fn test_rewritten_fill_appears_exactly_once() {
    let clean = sanitize(r##"<path fill="#ff0000" d="M10 10"/>"##, true);
    assert!(clean.contains(r#"fill="currentColor""#));
    assert_eq!(clean.matches("fill=").count(), 1);
}

#[test]
fn test_stroked_path_gains_no_fill() {
    let clean = sanitize(r##"<path stroke="#0000ff" d="M10 10"/>"##, true);
    assert!(clean.contains(r#"fill="none""#));
    assert!(clean.contains(r#"stroke="currentColor""#));
}

#[test]
fn test_explicit_no_fill_is_not_duplicated() {
    let clean = sanitize(r##"<path fill="none" stroke="#0000ff" d="M10 10"/>"##, true);
    assert_eq!(clean.matches(r#"fill="none""#).count(), 1);
    assert_eq!(clean.matches("fill=").count(), 1);
}

#[test]
fn test_gradient_fill_survives() {
    let clean = sanitize(
        r##"<path fill="url(#gradient)" stroke="#0000ff" d="M10 10"/>"##,
        true,
    );
    assert!(clean.contains(r##"fill="url(#gradient)""##));
}

#[test]
fn test_repair_applies_per_path_element() {
    let markup = r##"<svg>
  <path stroke="red" d="M0 0"/>
  <path stroke="green" d="M1 1"></path>
  <path fill="blue" stroke="yellow" d="M2 2"/>
</svg>"##;
    let clean = sanitize(markup, true);
    assert_eq!(clean.matches(r#"fill="none""#).count(), 2);
}

#[test]
fn test_non_path_shapes_are_not_repaired() {
    let clean = sanitize(r##"<circle stroke="#0000ff" r="10"/>"##, true);
    assert_eq!(clean, r#"<circle stroke="currentColor" r="10"/>"#);
}

#[test]
fn test_rewriting_already_rewritten_markup_is_stable() {
    let once = sanitize(ICON, true);
    assert_eq!(sanitize(&once, true), once);
}

#[test]
fn test_handler_values_with_embedded_markup() {
    let markup = r#"<rect onload="a < b && fire()" width="4"/>"#;
    assert_eq!(sanitize(markup, false), r#"<rect width="4"/>"#);
}

#[test]
fn test_empty_input() {
    assert_eq!(sanitize("", true), "");
    assert_eq!(sanitize("", false), "");
}
