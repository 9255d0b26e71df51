//! Icon configuration and normalization
//!
//! This module turns a loosely-specified [`IconConfig`] into a fully-resolved
//! [`ResolvedConfig`] with concrete width/height strings, a concrete color and
//! resolved flags. Configurations can also be loaded from TOML files.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default icon size in pixels
pub const DEFAULT_SIZE: f64 = 24.0;

/// Default paint color, inherited from the surrounding CSS context
pub const DEFAULT_COLOR: &str = "currentColor";

/// Errors that can occur when loading or parsing icon configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read icon config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One side of an icon size: a bare pixel magnitude or a CSS length string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Bare number, interpreted as pixels
    Magnitude(f64),
    /// Pre-unitized CSS length (e.g. `"2rem"`, `"50%"`), used verbatim
    Unitized(String),
}

impl Dimension {
    /// Parse a dimension from user input: numeric text becomes a pixel
    /// magnitude, anything else is kept as a unitized string.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<f64>() {
            Ok(n) => Dimension::Magnitude(n),
            Err(_) => Dimension::Unitized(input.to_string()),
        }
    }

    fn to_css(&self) -> String {
        match self {
            Dimension::Magnitude(n) => format!("{n}px"),
            Dimension::Unitized(s) => s.clone(),
        }
    }
}

/// Icon size: one dimension for both sides, or an explicit width/height pair
/// whose sides are resolved independently
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IconSize {
    /// Single dimension applied to width and height
    Uniform(Dimension),
    /// Independent width and height
    Pair { width: Dimension, height: Dimension },
}

/// Icon configuration as supplied by a caller, CLI flags or a TOML file
///
/// Every field except `src` is optional; [`resolve_config`] supplies the
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Path or URL of the SVG source
    pub src: String,
    /// Paint color (defaults to `currentColor` for CSS inheritance)
    pub color: Option<String>,
    /// Icon size
    pub size: Option<IconSize>,
    /// Additional CSS classes for the icon host
    pub class: Option<String>,
    /// Accessibility label
    pub aria_label: Option<String>,
    /// Alternative text, used when `aria_label` is absent
    pub alt: Option<String>,
    /// Whether to inline the SVG markup (default: true)
    pub inline: Option<bool>,
    /// Whether to rewrite hardcoded paints to `currentColor` (default: true)
    pub replace_colors: Option<bool>,
}

impl IconConfig {
    /// Load an icon configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load an icon configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Fully-resolved icon configuration, ready for rendering
///
/// `width` and `height` are always unit-suffixed strings, never bare numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub src: String,
    pub color: String,
    pub width: String,
    pub height: String,
    pub class: String,
    /// Absent, never empty, when neither `aria_label` nor `alt` was supplied
    pub aria_label: Option<String>,
    pub inline: bool,
    pub replace_colors: bool,
}

/// Width and height resolved to unit-suffixed strings
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSize {
    pub width: String,
    pub height: String,
}

/// Resolve an optional icon size into concrete width/height strings
///
/// Absent and falsy sizes (a `0` magnitude, an empty string) resolve to the
/// 24px default. A uniform size applies to both sides; a pair resolves each
/// side independently, suffixing bare magnitudes with `px`.
pub fn resolve_size(size: Option<&IconSize>) -> ResolvedSize {
    let uniform = |css: String| ResolvedSize {
        width: css.clone(),
        height: css,
    };

    match size {
        None => uniform(Dimension::Magnitude(DEFAULT_SIZE).to_css()),
        Some(IconSize::Uniform(Dimension::Magnitude(n))) if *n == 0.0 => {
            uniform(Dimension::Magnitude(DEFAULT_SIZE).to_css())
        }
        Some(IconSize::Uniform(Dimension::Unitized(s))) if s.is_empty() => {
            uniform(Dimension::Magnitude(DEFAULT_SIZE).to_css())
        }
        Some(IconSize::Uniform(dim)) => uniform(dim.to_css()),
        Some(IconSize::Pair { width, height }) => ResolvedSize {
            width: width.to_css(),
            height: height.to_css(),
        },
    }
}

/// Resolve an [`IconConfig`] into a [`ResolvedConfig`]
///
/// Total over its input: every field has a defined fallback and no branch can
/// fail. Empty strings count as absent for `color`, `aria_label` and `alt`.
pub fn resolve_config(config: &IconConfig) -> ResolvedConfig {
    let ResolvedSize { width, height } = resolve_size(config.size.as_ref());

    let non_empty = |value: &Option<String>| value.clone().filter(|s| !s.is_empty());

    ResolvedConfig {
        src: config.src.clone(),
        color: non_empty(&config.color).unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        width,
        height,
        class: config.class.clone().unwrap_or_default(),
        aria_label: non_empty(&config.aria_label).or_else(|| non_empty(&config.alt)),
        inline: config.inline.unwrap_or(true),
        replace_colors: config.replace_colors.unwrap_or(true),
    }
}
