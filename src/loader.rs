//! SVG source loading and caching
//!
//! [`SvgLoader`] retrieves SVG text from the filesystem, sanitizes it and
//! memoizes the result keyed by `(source, replace_colors)`. Each distinct key
//! is retrieved and sanitized at most once; retrieval failures degrade to an
//! empty string (also cached) instead of surfacing an error into rendering.

use std::collections::HashMap;
use std::fs;

use crate::sanitize::sanitize;

/// Caching loader for sanitized SVG sources
#[derive(Debug, Default)]
pub struct SvgLoader {
    cache: HashMap<(String, bool), String>,
}

impl SvgLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and sanitize the SVG at `src`, reusing the cached result when the
    /// same `(src, replace_colors)` pair was loaded before.
    ///
    /// A source that cannot be read yields the empty string; the failure is
    /// logged and cached like any other result.
    pub fn load(&mut self, src: &str, replace_colors: bool) -> &str {
        self.cache
            .entry((src.to_string(), replace_colors))
            .or_insert_with(|| match fs::read_to_string(src) {
                Ok(raw) => {
                    tracing::debug!(src, replace_colors, bytes = raw.len(), "loaded svg source");
                    sanitize(&raw, replace_colors)
                }
                Err(error) => {
                    tracing::warn!(src, %error, "failed to load svg source");
                    String::new()
                }
            })
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop all cached entries
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
