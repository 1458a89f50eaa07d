//! Layout for one-dimensional spectrum diagrams.
//!
//! The axis runs along the canvas mid-line. Persons occupy one side with
//! labels anchored against the margin and arrows spanning the gap to the
//! axis; policies occupy the other side, floating at a fixed offset from
//! the axis so their far edges vary with label height. The caption, when
//! present, is centered past the running maximum of far edges on the
//! positive-cross side.
//!
//! Horizontal diagrams put persons above the axis (arrows pointing down)
//! and policies below (arrows pointing up). Vertical diagrams are the
//! rotated analogue - down maps to left and up maps to right - so persons
//! sit right of the axis and policies left of it.

use log::debug;

use meridian_core::{
    draw::{self, LayeredOutput, RenderLayer},
    geometry::Size,
    measure::LabelMeasurer,
};

use crate::{
    axis::Axis,
    config::StyleConfig,
    diagram::{LabeledPoint, Orientation, Spectrum},
    error::MeridianError,
    layout::{CAPTION_GAP_EM, HEAD_SIZE, Scene, emit_caption, emit_scale, label_kind, label_node},
};

/// Label offset from the axis for axis-floating bands, as a fraction of
/// font size.
const FLOAT_OFFSET_EM: f32 = 1.5;

/// Which side of the axis a band of labels occupies, in cross-coordinate
/// terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Smaller cross coordinates than the axis (above / left of it).
    Negative,
    /// Larger cross coordinates than the axis (below / right of it).
    Positive,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}

/// How a band's labels are pinned in the cross direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Far edge against the canvas margin; the arrow gap varies with label
    /// height.
    Margin,
    /// Near edge at a fixed offset from the axis; the far edge varies with
    /// label height.
    Axis,
}

pub(crate) fn layout_spectrum(
    diagram: &Spectrum,
    style: &StyleConfig,
    measurer: &dyn LabelMeasurer,
) -> Result<Scene, MeridianError> {
    let orientation = diagram.orientation;
    let canvas = Size::new(diagram.width, diagram.height);
    let (along_margin, cross_margin) = match orientation {
        Orientation::Horizontal => (diagram.margin_x, diagram.margin_y),
        Orientation::Vertical => (diagram.margin_y, diagram.margin_x),
    };
    let along_extent = orientation.along_size(canvas);
    let cross_extent = orientation.cross_size(canvas);
    let axis = Axis::new(
        orientation,
        along_margin,
        along_extent - along_margin,
        cross_extent / 2.0,
    );

    debug!(
        id = diagram.id,
        orientation:? = orientation,
        axis_length = along_extent - 2.0 * along_margin;
        "Spectrum axis computed"
    );

    let mut output = LayeredOutput::new();
    output.add_to_layer(
        RenderLayer::Axis,
        Box::new(draw::line(
            axis.endpoint(0.0),
            axis.endpoint(1.0),
            style.stroke_width(),
        )),
    );

    // Running maximum of positive-cross far edges; the caption clears this
    let mut far_edge = axis.cross();

    let person_side = match orientation {
        Orientation::Horizontal => Side::Negative,
        Orientation::Vertical => Side::Positive,
    };

    for person in &diagram.persons {
        let edge = place_labeled_point(
            &mut output,
            axis,
            person,
            person_side,
            Anchor::Margin,
            cross_margin,
            cross_extent,
            diagram.font_size,
            style,
            measurer,
        )?;
        far_edge = far_edge.max(edge);
    }
    for policy in &diagram.policies {
        let edge = place_labeled_point(
            &mut output,
            axis,
            policy,
            person_side.opposite(),
            Anchor::Axis,
            cross_margin,
            cross_extent,
            diagram.font_size,
            style,
            measurer,
        )?;
        far_edge = far_edge.max(edge);
    }

    if let Some(scale) = &diagram.scale {
        let edge = emit_scale(&mut output, axis, scale, diagram.font_size, style, measurer)?;
        far_edge = far_edge.max(edge);
    }

    let mut marker_id = None;
    if let Some(caption) = &diagram.caption {
        let size = measurer.measure(&caption.label, diagram.font_size, label_kind(caption.markup))?;
        let along_center = axis.coordinate(0.5);
        let cross_min = far_edge + diagram.font_size * CAPTION_GAP_EM;
        let top_left = axis.place(along_center - orientation.along_size(size) / 2.0, cross_min);

        if emit_caption(
            &mut output,
            top_left,
            size,
            caption,
            &diagram.id,
            diagram.font_size,
            style,
        ) {
            marker_id = Some(diagram.id.clone());
        }
    }

    Ok(Scene {
        size: canvas,
        output,
        marker_id,
    })
}

/// Places one labeled point: its label in the band selected by `side` and
/// `anchor`, and an arrow from the label's near edge to the axis line.
///
/// Returns the label's positive-cross far edge for caption tracking.
#[allow(clippy::too_many_arguments)]
fn place_labeled_point(
    output: &mut LayeredOutput,
    axis: Axis,
    point: &LabeledPoint,
    side: Side,
    anchor: Anchor,
    cross_margin: f32,
    cross_extent: f32,
    font_size: f32,
    style: &StyleConfig,
    measurer: &dyn LabelMeasurer,
) -> Result<f32, MeridianError> {
    let orientation = axis.orientation();
    let along = axis.coordinate(point.position);
    let size = measurer.measure(&point.label, font_size, label_kind(point.markup))?;
    let along_size = orientation.along_size(size);
    let cross_size = orientation.cross_size(size);
    let float_offset = font_size * FLOAT_OFFSET_EM;

    // The near edge is the one facing the axis
    let (band_min, near_edge) = match (side, anchor) {
        (Side::Negative, Anchor::Margin) => (cross_margin, cross_margin + cross_size),
        (Side::Positive, Anchor::Margin) => {
            let band_min = cross_extent - cross_margin - cross_size;
            (band_min, band_min)
        }
        (Side::Positive, Anchor::Axis) => {
            let band_min = axis.cross() + float_offset;
            (band_min, band_min)
        }
        (Side::Negative, Anchor::Axis) => {
            let band_min = axis.cross() - float_offset - cross_size;
            (band_min, band_min + cross_size)
        }
    };

    let top_left = axis.place(along - along_size / 2.0, band_min);
    output.add_to_layer(
        RenderLayer::Label,
        label_node(
            top_left,
            size,
            &point.label,
            point.markup,
            font_size,
            style.font_family(),
        ),
    );

    let arrow_length = match side {
        Side::Negative => axis.cross() - near_edge,
        Side::Positive => near_edge - axis.cross(),
    };
    // Label too close to or past the axis: no arrow
    if arrow_length > 0.0 {
        output.add_to_layer(
            RenderLayer::Arrow,
            Box::new(draw::arrow(
                axis.place(along, near_edge),
                axis.place(along, axis.cross()),
                style.stroke_width(),
                HEAD_SIZE,
            )),
        );
    }

    Ok(band_min + cross_size)
}
