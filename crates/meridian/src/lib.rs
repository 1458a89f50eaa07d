//! Meridian - a spatial diagram layout engine for slide decks.
//!
//! Meridian maps declarative diagram descriptions - labeled points placed
//! proportionally along one or two axes - to absolute pixel coordinates
//! and emits self-contained SVG document strings. Output inherits the host
//! document's foreground color, so diagrams blend into whatever theme
//! surrounds them; the host is responsible for positioning the string and
//! for layering diagram variants to simulate animation.
//!
//! Layout is a pure, synchronous, one-shot computation. The only external
//! capability involved is label measurement, injected as a
//! [`measure::LabelMeasurer`] so the engine never depends on a live
//! rendering surface.

pub mod config;
pub mod diagram;

mod axis;
mod error;
mod export;
mod layout;

pub use meridian_core::{draw, geometry, measure};

pub use error::MeridianError;

use log::{debug, info, trace};

use config::AppConfig;
use diagram::{Diagram, Plane, Spectrum};
use measure::{LabelMeasurer, ShapedMeasurer};

/// Renders diagram descriptions to SVG strings.
///
/// A renderer owns the application configuration and the label measurement
/// capability, and can be reused across any number of diagrams; each render
/// call is an independent computation with no shared state.
///
/// # Examples
///
/// ```
/// use meridian::{DiagramRenderer, diagram::{LabeledPoint, Spectrum}};
///
/// let spectrum = Spectrum {
///     id: String::from("left-right"),
///     width: 900.0,
///     height: 150.0,
///     margin_x: 40.0,
///     margin_y: 10.0,
///     font_size: 16.0,
///     orientation: Default::default(),
///     persons: vec![LabeledPoint {
///         position: 0.5,
///         label: String::from("Median voter"),
///         markup: false,
///     }],
///     policies: Vec::new(),
///     scale: None,
///     caption: None,
/// };
///
/// let renderer = DiagramRenderer::default();
/// let svg = renderer.render_spectrum(&spectrum).expect("renders");
/// assert!(svg.contains("<svg"));
/// ```
pub struct DiagramRenderer {
    config: AppConfig,
    measurer: Box<dyn LabelMeasurer>,
}

impl DiagramRenderer {
    /// Creates a renderer measuring labels with font shaping
    /// ([`ShapedMeasurer`]) in the configured font family.
    pub fn new(config: AppConfig) -> Self {
        let measurer = ShapedMeasurer::new(config.style().font_family());
        Self {
            config,
            measurer: Box::new(measurer),
        }
    }

    /// Creates a renderer with an explicit measurement capability.
    ///
    /// Useful for deterministic output across hosts (see
    /// [`measure::FixedMetrics`]) or for supplying custom metrics.
    pub fn with_measurer(config: AppConfig, measurer: Box<dyn LabelMeasurer>) -> Self {
        Self { config, measurer }
    }

    /// Renders a diagram description of either dimensionality.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError`] when label measurement fails.
    pub fn render(&self, diagram: &Diagram) -> Result<String, MeridianError> {
        match diagram {
            Diagram::Spectrum(spectrum) => self.render_spectrum(spectrum),
            Diagram::Plane(plane) => self.render_plane(plane),
        }
    }

    /// Renders a one-dimensional spectrum diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError`] when label measurement fails.
    pub fn render_spectrum(&self, spectrum: &Spectrum) -> Result<String, MeridianError> {
        info!(id = spectrum.id; "Laying out spectrum diagram");
        trace!(spectrum:?; "Spectrum description");

        let scene = layout::layout_spectrum(spectrum, self.config.style(), self.measurer.as_ref())?;
        let svg = export::render_document(scene);

        debug!(id = spectrum.id, bytes = svg.len(); "Spectrum rendered");
        Ok(svg)
    }

    /// Renders a two-dimensional plane diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError`] when label measurement fails.
    pub fn render_plane(&self, plane: &Plane) -> Result<String, MeridianError> {
        info!(id = plane.id; "Laying out plane diagram");
        trace!(plane:?; "Plane description");

        let scene = layout::layout_plane(plane, self.config.style(), self.measurer.as_ref())?;
        let svg = export::render_document(scene);

        debug!(id = plane.id, bytes = svg.len(); "Plane rendered");
        Ok(svg)
    }
}

impl Default for DiagramRenderer {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
