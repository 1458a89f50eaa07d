//! Layout passes turning diagram descriptions into layered output.
//!
//! Both passes share the same shape: measure every label through the
//! injected capability, compute absolute coordinates via the axis core,
//! and collect typed primitives into a [`LayeredOutput`]. Serialization
//! happens once, afterwards, in [`export`](crate::export).

mod plane;
mod spectrum;

pub(crate) use plane::layout_plane;
pub(crate) use spectrum::layout_spectrum;

use meridian_core::{
    draw::{self, LayeredOutput, RenderLayer, SvgNode},
    geometry::{Bounds, Point, Size},
    measure::{LabelKind, LabelMeasurer},
};

use crate::{
    axis::Axis,
    config::StyleConfig,
    diagram::{Caption, Direction, Scale},
    error::MeridianError,
};

/// Half-length of a tic mark, perpendicular to its axis.
const TIC_HALF: f32 = 4.0;

/// Gap between a tic mark and its label.
const TIC_LABEL_GAP: f32 = 2.0;

/// Length of a point arrow's triangular head.
const HEAD_SIZE: f32 = 8.0;

/// Radius of a plane point's dot.
pub(crate) const DOT_RADIUS: f32 = 3.0;

/// Gap between a dot and its label.
pub(crate) const POINT_LABEL_OFFSET: f32 = 6.0;

/// Caption clearance and direction-arrow gap, as a fraction of font size.
pub(crate) const CAPTION_GAP_EM: f32 = 0.5;

/// Length of a caption's direction arrow, as a fraction of font size.
const DIRECTION_ARROW_EM: f32 = 2.0;

/// A laid-out diagram: canvas size, layered nodes, and the diagram id to
/// key the arrowhead marker definition by, when one is needed.
pub(crate) struct Scene {
    pub(crate) size: Size,
    pub(crate) output: LayeredOutput,
    pub(crate) marker_id: Option<String>,
}

pub(crate) fn label_kind(markup: bool) -> LabelKind {
    if markup {
        LabelKind::Markup
    } else {
        LabelKind::Plain
    }
}

/// Builds the node for a measured label: markup goes into a
/// foreign-content block at its top-left corner, plain text into a
/// centered SVG text element. Placement comes entirely from the measured
/// size either way.
pub(crate) fn label_node(
    top_left: Point,
    size: Size,
    text: &str,
    markup: bool,
    font_size: f32,
    font_family: &str,
) -> SvgNode {
    if markup {
        Box::new(draw::markup_label(top_left, size, text))
    } else {
        let center = Bounds::new_from_top_left(top_left, size).center();
        Box::new(draw::text_label(center, size, text, font_size, font_family))
    }
}

/// Emits an axis scale: one tic line per mark, plus measured labels on the
/// positive-cross side of the axis.
///
/// Returns the farthest positive-cross edge the scale reached, so callers
/// can keep later content clear of it.
pub(crate) fn emit_scale(
    output: &mut LayeredOutput,
    axis: Axis,
    scale: &Scale,
    font_size: f32,
    style: &StyleConfig,
    measurer: &dyn LabelMeasurer,
) -> Result<f32, MeridianError> {
    let orientation = axis.orientation();
    let mut far_edge = axis.cross() + TIC_HALF;

    for tic in &scale.tics {
        let along = axis.coordinate(tic.position);
        output.add_to_layer(
            RenderLayer::Tic,
            Box::new(draw::line(
                axis.place(along, axis.cross() - TIC_HALF),
                axis.place(along, axis.cross() + TIC_HALF),
                style.stroke_width(),
            )),
        );

        if let Some(text) = &tic.label {
            let size = measurer.measure(text, font_size, label_kind(scale.markup))?;
            let cross_min = axis.cross() + TIC_HALF + TIC_LABEL_GAP;
            let top_left = axis.place(along - orientation.along_size(size) / 2.0, cross_min);
            output.add_to_layer(
                RenderLayer::Label,
                label_node(top_left, size, text, scale.markup, font_size, style.font_family()),
            );
            far_edge = far_edge.max(cross_min + orientation.cross_size(size));
        }
    }

    Ok(far_edge)
}

/// Emits a caption label and, when a direction is present, its arrow.
///
/// Returns `true` when a direction arrow was emitted, in which case the
/// document needs the marker definition keyed by `diagram_id`.
pub(crate) fn emit_caption(
    output: &mut LayeredOutput,
    top_left: Point,
    size: Size,
    caption: &Caption,
    diagram_id: &str,
    font_size: f32,
    style: &StyleConfig,
) -> bool {
    output.add_to_layer(
        RenderLayer::Caption,
        label_node(
            top_left,
            size,
            &caption.label,
            caption.markup,
            font_size,
            style.font_family(),
        ),
    );

    match caption.direction {
        Some(direction) => {
            let bounds = Bounds::new_from_top_left(top_left, size);
            let (from, to) = direction_arrow(bounds, direction, font_size);
            output.add_to_layer(
                RenderLayer::Caption,
                Box::new(draw::marker_line(from, to, style.stroke_width(), diagram_id)),
            );
            true
        }
        None => false,
    }
}

/// Endpoints of the short direction arrow beside a caption.
///
/// Horizontal directions sit on the pointing side of the caption box;
/// vertical directions hang off its trailing edge, centered on the
/// caption's mid-line.
fn direction_arrow(around: Bounds, direction: Direction, font_size: f32) -> (Point, Point) {
    let gap = font_size * CAPTION_GAP_EM;
    let length = font_size * DIRECTION_ARROW_EM;
    let mid_y = around.center().y();

    match direction {
        Direction::Right => (
            Point::new(around.max_x() + gap, mid_y),
            Point::new(around.max_x() + gap + length, mid_y),
        ),
        Direction::Left => (
            Point::new(around.min_x() - gap, mid_y),
            Point::new(around.min_x() - gap - length, mid_y),
        ),
        Direction::Up => (
            Point::new(around.max_x() + gap, mid_y + length / 2.0),
            Point::new(around.max_x() + gap, mid_y - length / 2.0),
        ),
        Direction::Down => (
            Point::new(around.max_x() + gap, mid_y - length / 2.0),
            Point::new(around.max_x() + gap, mid_y + length / 2.0),
        ),
    }
}
