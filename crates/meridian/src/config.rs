//! Configuration types for Meridian diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are styled. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Presentation knobs that are not per-diagram.
//!
//! Colors are deliberately absent: every stroke and fill in the output uses
//! `currentColor`, so rendered diagrams inherit the host document's theme.
//!
//! # Example
//!
//! ```
//! # use meridian::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().font_family(), "sans-serif");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Stroke width | `2.0` |
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Font family used for plain text labels and measurement.
    #[serde(default = "default_font_family")]
    font_family: String,

    /// Stroke width in pixels for axis lines, tics, and arrows.
    #[serde(default = "default_stroke_width")]
    stroke_width: f32,
}

impl StyleConfig {
    /// Returns the configured font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the configured stroke width.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            stroke_width: default_stroke_width(),
        }
    }
}

fn default_font_family() -> String {
    String::from("sans-serif")
}

fn default_stroke_width() -> f32 {
    2.0
}
