//! SVGFlex - Render SVG icons with configurable color and size
//!
//! This library provides the pure core of an icon rendering pipeline: a
//! config normalizer that resolves loosely-specified icon configuration into
//! concrete rendering values, and a sanitizer that strips active content from
//! untrusted SVG markup and rewrites hardcoded paint colors to the
//! CSS-inheritable `currentColor` token. A caching [`SvgLoader`] ties the two
//! together for callers that read icons from disk.
//!
//! # Example
//!
//! ```rust
//! use svgflex::{resolve_config, sanitize, IconConfig};
//!
//! let config = IconConfig {
//!     src: "icons/home.svg".to_string(),
//!     color: Some("#336699".to_string()),
//!     ..IconConfig::default()
//! };
//! let resolved = resolve_config(&config);
//! assert_eq!(resolved.width, "24px");
//! assert_eq!(resolved.color, "#336699");
//!
//! let clean = sanitize(r##"<path fill="#ff0000" d="M10 10"/>"##, resolved.replace_colors);
//! assert!(clean.contains(r#"fill="currentColor""#));
//! ```

pub mod config;
pub mod loader;
pub mod sanitize;

pub use config::{
    resolve_config, resolve_size, ConfigError, Dimension, IconConfig, IconSize, ResolvedConfig,
    ResolvedSize,
};
pub use loader::SvgLoader;
pub use sanitize::{rewrite_paints, sanitize};
