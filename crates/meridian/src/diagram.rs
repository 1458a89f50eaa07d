//! The diagram model.
//!
//! A diagram description is plain, immutable-per-call data: canvas geometry
//! plus lists of labeled points along one axis ([`Spectrum`]) or two
//! ([`Plane`]). Nothing here outlives a single render call and there is no
//! identity beyond the caller-supplied `id`, which namespaces marker
//! definitions in the emitted markup.
//!
//! Positions are proportions in `[0, 1]` along an axis: `0` is the axis
//! start, `1` the axis end. Out-of-range positions are not rejected; they
//! simply land outside the nominal drawing area. Likewise, margins larger
//! than half the canvas produce degenerate layouts without complaint -
//! validation is a non-goal.
//!
//! All types deserialize with [`serde`], so descriptions can be embedded in
//! TOML documents (see [`Diagram`]) or constructed directly in code.

use serde::Deserialize;

/// Axis direction for one-dimensional diagrams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Axis runs left to right.
    #[default]
    Horizontal,
    /// Axis runs top to bottom.
    Vertical,
}

/// Direction of a caption's indicator arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A named position along an axis, rendered with a connecting arrow and a
/// label.
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledPoint {
    /// Proportion along the axis, nominally in `[0, 1]`.
    pub position: f32,
    /// Label text, or pre-typeset markup when `markup` is set.
    pub label: String,
    /// Treat `label` as markup from an external typesetter.
    #[serde(default)]
    pub markup: bool,
}

/// A dot on a two-dimensional plane with an offset label.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanePoint {
    /// Proportion along the horizontal axis.
    pub x: f32,
    /// Proportion along the vertical axis (0 = bottom, 1 = top).
    pub y: f32,
    /// Label text, or pre-typeset markup when `markup` is set.
    pub label: String,
    /// Treat `label` as markup from an external typesetter.
    #[serde(default)]
    pub markup: bool,
    /// Draw dashed guide lines from the dot to each axis.
    #[serde(default)]
    pub guides: bool,
}

/// A small perpendicular mark at a given proportion along an axis,
/// optionally captioned.
#[derive(Debug, Clone, Deserialize)]
pub struct TicMark {
    /// Proportion along the axis.
    pub position: f32,
    /// Optional caption under (or beside) the mark.
    #[serde(default)]
    pub label: Option<String>,
}

/// Scale decoration for an axis: a list of tic marks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scale {
    #[serde(default)]
    pub tics: Vec<TicMark>,
    /// Treat the tic labels of this scale as markup.
    #[serde(default)]
    pub markup: bool,
}

/// A summary label for an axis, optionally paired with a directional
/// arrow.
#[derive(Debug, Clone, Deserialize)]
pub struct Caption {
    /// Caption text, or pre-typeset markup when `markup` is set.
    pub label: String,
    /// Treat `label` as markup from an external typesetter.
    #[serde(default)]
    pub markup: bool,
    /// Directional arrow drawn beside the caption.
    #[serde(default)]
    pub direction: Option<Direction>,
}

/// A one-dimensional diagram: persons on one side of a single axis,
/// policies on the other, both with arrows pointing toward the axis line.
#[derive(Debug, Clone, Deserialize)]
pub struct Spectrum {
    /// Identifier namespacing marker definitions; must be unique across
    /// diagrams composited into the same document.
    pub id: String,
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Horizontal inset from the canvas edges.
    #[serde(default)]
    pub margin_x: f32,
    /// Vertical inset from the canvas edges.
    #[serde(default)]
    pub margin_y: f32,
    /// Label font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub persons: Vec<LabeledPoint>,
    #[serde(default)]
    pub policies: Vec<LabeledPoint>,
    /// Optional tic decoration along the axis.
    #[serde(default)]
    pub scale: Option<Scale>,
    /// Optional caption centered past the last label.
    #[serde(default)]
    pub caption: Option<Caption>,
}

/// A two-dimensional diagram: two perpendicular axes crossing at the
/// canvas center, with point entities placed on the plane between them.
#[derive(Debug, Clone, Deserialize)]
pub struct Plane {
    /// Identifier namespacing marker definitions; must be unique across
    /// diagrams composited into the same document.
    pub id: String,
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Horizontal inset from the canvas edges.
    #[serde(default)]
    pub margin_x: f32,
    /// Vertical inset from the canvas edges.
    #[serde(default)]
    pub margin_y: f32,
    /// Label font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub points: Vec<PlanePoint>,
    #[serde(default)]
    pub horizontal_scale: Option<Scale>,
    #[serde(default)]
    pub vertical_scale: Option<Scale>,
    #[serde(default)]
    pub horizontal_label: Option<Caption>,
    #[serde(default)]
    pub vertical_label: Option<Caption>,
}

/// A diagram description of either dimensionality, tagged by `kind`.
///
/// This is the shape the CLI deserializes from TOML:
///
/// ```toml
/// kind = "spectrum"
/// id = "left-right"
/// width = 900
/// height = 150
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Diagram {
    Spectrum(Spectrum),
    Plane(Plane),
}

fn default_font_size() -> f32 {
    16.0
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_spectrum_defaults() {
        let spectrum: Spectrum = toml::from_str(
            r#"
            id = "s"
            width = 900
            height = 150
            "#,
        )
        .unwrap();
        assert_approx_eq!(f32, spectrum.font_size, 16.0);
        assert_approx_eq!(f32, spectrum.margin_x, 0.0);
        assert_eq!(spectrum.orientation, Orientation::Horizontal);
        assert!(spectrum.persons.is_empty());
        assert!(spectrum.policies.is_empty());
        assert!(spectrum.scale.is_none());
        assert!(spectrum.caption.is_none());
    }

    #[test]
    fn test_labeled_point_markup_defaults_off() {
        let point: LabeledPoint = toml::from_str(
            r#"
            position = 0.5
            label = "median"
            "#,
        )
        .unwrap();
        assert!(!point.markup);
    }

    #[test]
    fn test_diagram_tagged_by_kind() {
        let diagram: Diagram = toml::from_str(
            r#"
            kind = "plane"
            id = "p"
            width = 600
            height = 600
            "#,
        )
        .unwrap();
        assert!(matches!(diagram, Diagram::Plane(_)));
    }

    #[test]
    fn test_diagram_unknown_kind_is_rejected() {
        let result: Result<Diagram, _> = toml::from_str(
            r#"
            kind = "scatter"
            id = "p"
            width = 600
            height = 600
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_direction_lowercase_names() {
        let caption: Caption = toml::from_str(
            r#"
            label = "Ideology"
            direction = "right"
            "#,
        )
        .unwrap();
        assert_eq!(caption.direction, Some(Direction::Right));
    }

    #[test]
    fn test_spectrum_with_points_and_scale() {
        let spectrum: Spectrum = toml::from_str(
            r#"
            id = "left-right"
            width = 900
            height = 150
            margin_x = 40
            margin_y = 10

            [[persons]]
            position = 0.25
            label = "Alice"

            [[policies]]
            position = 0.75
            label = "Reform"

            [scale]
            tics = [
                { position = 0.0, label = "Left" },
                { position = 1.0, label = "Right" },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(spectrum.persons.len(), 1);
        assert_eq!(spectrum.policies.len(), 1);
        let scale = spectrum.scale.expect("scale present");
        assert_eq!(scale.tics.len(), 2);
        assert_eq!(scale.tics[0].label.as_deref(), Some("Left"));
    }
}
