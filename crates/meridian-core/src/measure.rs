//! The label measurement capability.
//!
//! Layout needs to know how large a label will render before it can place
//! the label, its arrow, and everything downstream of it. This module
//! defines that capability as a trait so the layout engine never depends on
//! a concrete rendering environment:
//!
//! - [`LabelMeasurer`] - the capability interface
//! - [`ShapedMeasurer`] - font-shaping implementation backed by cosmic-text
//! - [`FixedMetrics`] - deterministic per-character metrics table
//!
//! Labels come in two kinds ([`LabelKind`]): plain text, and markup arriving
//! pre-typeset from an external renderer. Markup labels are measured on
//! their character data with tags stripped.
//!
//! Measurement failures propagate to the caller unhandled; there is no
//! retry.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use thiserror::Error;

use crate::geometry::Size;

/// Width of an average glyph relative to the font size, used when no shaped
/// glyph data is available.
const FALLBACK_ADVANCE_EM: f32 = 0.55;

/// Line height relative to the font size.
const LINE_HEIGHT_EM: f32 = 1.15;

/// Distinguishes how a label string should be interpreted for measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// The label is literal text.
    Plain,
    /// The label is pre-rendered markup; only its character data is
    /// measured.
    Markup,
}

/// Errors produced by the measurement capability.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("font system unavailable: {0}")]
    FontSystem(String),
}

/// Converts label text into rendered pixel dimensions.
///
/// Implementations must be deterministic for deterministic input: calling
/// [`measure`](LabelMeasurer::measure) twice with identical arguments must
/// return identical sizes, since diagram output is expected to be
/// reproducible.
pub trait LabelMeasurer {
    /// Measures `text` at `font_size` pixels, returning its rendered size.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError`] if the underlying measurement backend is
    /// unavailable.
    fn measure(&self, text: &str, font_size: f32, kind: LabelKind) -> Result<Size, MeasureError>;
}

/// Strips markup tags, leaving only character data.
///
/// Unterminated tags swallow the rest of the string; measurement of broken
/// markup is best-effort, not validation.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Font-shaping label measurement backed by cosmic-text.
///
/// Maintains a lazily-initialized [`FontSystem`] (expensive to construct)
/// behind a mutex so a single measurer can serve many diagrams.
///
/// # Examples
///
/// ```
/// # use meridian_core::measure::{LabelMeasurer, LabelKind, ShapedMeasurer};
/// let measurer = ShapedMeasurer::new("sans-serif");
/// let size = measurer.measure("Median voter", 16.0, LabelKind::Plain).unwrap();
/// assert!(size.width() > 0.0);
/// assert!(size.height() > 0.0);
/// ```
pub struct ShapedMeasurer {
    font_system: OnceLock<Mutex<FontSystem>>,
    font_family: String,
}

impl ShapedMeasurer {
    /// Creates a measurer shaping with the given font family.
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_system: OnceLock::new(),
            font_family: font_family.into(),
        }
    }

    fn font_system(&self) -> &Mutex<FontSystem> {
        self.font_system.get_or_init(|| {
            info!("Initializing FontSystem");
            Mutex::new(FontSystem::new())
        })
    }
}

impl LabelMeasurer for ShapedMeasurer {
    /// Calculates the actual size of text in pixels using cosmic-text.
    ///
    /// Shaping handles ligatures, kerning, and other advanced typography,
    /// so the measurement reflects real font metrics. When the shaper
    /// produces no layout runs (no usable fonts on the host), the size
    /// falls back to a per-character estimate so layout can still proceed.
    fn measure(&self, text: &str, font_size: f32, kind: LabelKind) -> Result<Size, MeasureError> {
        let text = match kind {
            LabelKind::Plain => text.to_string(),
            LabelKind::Markup => strip_markup(text),
        };
        if text.is_empty() {
            return Ok(Size::default());
        }

        let mut font_system = self
            .font_system()
            .lock()
            .map_err(|err| MeasureError::FontSystem(err.to_string()))?;

        let line_height = font_size * LINE_HEIGHT_EM;
        let metrics = Metrics::new(font_size, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(&self.font_family));

        // Unlimited buffer size lets the text flow naturally on one line
        // per input line.
        buffer.set_size(None, None);
        buffer.set_text(&text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            for line in text.lines() {
                let estimate = line.chars().count() as f32 * font_size * FALLBACK_ADVANCE_EM;
                max_width = max_width.max(estimate);
                total_height += line_height;
            }
        } else {
            for run in &layout_runs {
                // Rightmost glyph position determines the run width
                if let Some(last) = run.glyphs.last() {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        Ok(Size::new(max_width, total_height))
    }
}

/// Deterministic label measurement from a precomputed metrics table.
///
/// Every character advances by the same fraction of the font size, every
/// line is the same fraction tall. Coarse, but fully reproducible without a
/// font stack, which makes it the measurer of choice for tests and for
/// callers that need byte-identical output across hosts.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    advance_em: f32,
    line_height_em: f32,
}

impl FixedMetrics {
    /// Creates a metrics table with explicit advance and line-height
    /// fractions.
    pub fn new(advance_em: f32, line_height_em: f32) -> Self {
        Self {
            advance_em,
            line_height_em,
        }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance_em: FALLBACK_ADVANCE_EM,
            line_height_em: LINE_HEIGHT_EM,
        }
    }
}

impl LabelMeasurer for FixedMetrics {
    fn measure(&self, text: &str, font_size: f32, kind: LabelKind) -> Result<Size, MeasureError> {
        let text = match kind {
            LabelKind::Plain => text.to_string(),
            LabelKind::Markup => strip_markup(text),
        };
        if text.is_empty() {
            return Ok(Size::default());
        }

        let mut max_chars = 0usize;
        let mut lines = 0usize;
        for line in text.lines() {
            max_chars = max_chars.max(line.chars().count());
            lines += 1;
        }

        Ok(Size::new(
            max_chars as f32 * font_size * self.advance_em,
            lines as f32 * font_size * self.line_height_em,
        ))
    }
}
