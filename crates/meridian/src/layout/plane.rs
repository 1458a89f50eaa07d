//! Layout for two-dimensional plane diagrams.
//!
//! Two perpendicular axes cross at the canvas center. The horizontal axis
//! grows rightward from the left margin; the vertical axis grows upward
//! from the bottom margin. Points are dots with a label offset up and to
//! the right, optionally connected to both axes by dashed guides. Each
//! axis takes its own scale and caption; captions sit past the positive
//! end of their axis, inside the margin budgeted for them.

use log::debug;

use meridian_core::{
    draw::{self, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
    measure::LabelMeasurer,
};

use crate::{
    axis::Axis,
    config::StyleConfig,
    diagram::{Orientation, Plane},
    error::MeridianError,
    layout::{
        CAPTION_GAP_EM, DOT_RADIUS, POINT_LABEL_OFFSET, Scene, emit_caption, emit_scale,
        label_kind, label_node,
    },
};

pub(crate) fn layout_plane(
    diagram: &Plane,
    style: &StyleConfig,
    measurer: &dyn LabelMeasurer,
) -> Result<Scene, MeridianError> {
    let canvas = Size::new(diagram.width, diagram.height);
    let center = Point::new(diagram.width / 2.0, diagram.height / 2.0);

    let horizontal = Axis::new(
        Orientation::Horizontal,
        diagram.margin_x,
        diagram.width - diagram.margin_x,
        center.y(),
    );
    // Proportion 0 at the bottom margin, growing upward
    let vertical = Axis::new(
        Orientation::Vertical,
        diagram.height - diagram.margin_y,
        diagram.margin_y,
        center.x(),
    );

    debug!(
        id = diagram.id,
        horizontal_length = diagram.width - 2.0 * diagram.margin_x,
        vertical_length = diagram.height - 2.0 * diagram.margin_y;
        "Plane axes computed"
    );

    let mut output = LayeredOutput::new();
    for axis in [horizontal, vertical] {
        output.add_to_layer(
            RenderLayer::Axis,
            Box::new(draw::line(
                axis.endpoint(0.0),
                axis.endpoint(1.0),
                style.stroke_width(),
            )),
        );
    }

    if let Some(scale) = &diagram.horizontal_scale {
        emit_scale(&mut output, horizontal, scale, diagram.font_size, style, measurer)?;
    }
    if let Some(scale) = &diagram.vertical_scale {
        emit_scale(&mut output, vertical, scale, diagram.font_size, style, measurer)?;
    }

    for point in &diagram.points {
        let dot_center = Point::new(
            horizontal.coordinate(point.x),
            vertical.coordinate(point.y),
        );

        if point.guides {
            // One dashed guide per axis, perpendicular to it
            output.add_to_layer(
                RenderLayer::Guide,
                Box::new(draw::dashed_guide(
                    dot_center,
                    Point::new(dot_center.x(), horizontal.cross()),
                    style.stroke_width(),
                )),
            );
            output.add_to_layer(
                RenderLayer::Guide,
                Box::new(draw::dashed_guide(
                    dot_center,
                    Point::new(vertical.cross(), dot_center.y()),
                    style.stroke_width(),
                )),
            );
        }

        output.add_to_layer(
            RenderLayer::Dot,
            Box::new(draw::dot(dot_center, DOT_RADIUS)),
        );

        let size = measurer.measure(&point.label, diagram.font_size, label_kind(point.markup))?;
        let top_left = Point::new(
            dot_center.x() + POINT_LABEL_OFFSET,
            dot_center.y() - POINT_LABEL_OFFSET - size.height(),
        );
        output.add_to_layer(
            RenderLayer::Label,
            label_node(
                top_left,
                size,
                &point.label,
                point.markup,
                diagram.font_size,
                style.font_family(),
            ),
        );
    }

    let mut marker_id = None;

    if let Some(caption) = &diagram.horizontal_label {
        let size = measurer.measure(&caption.label, diagram.font_size, label_kind(caption.markup))?;
        let top_left = Point::new(
            diagram.width - diagram.margin_x + diagram.font_size * CAPTION_GAP_EM,
            center.y() - size.height() / 2.0,
        );
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

    if let Some(caption) = &diagram.vertical_label {
        let size = measurer.measure(&caption.label, diagram.font_size, label_kind(caption.markup))?;
        let top_left = Point::new(
            center.x() - size.width() / 2.0,
            diagram.margin_y - diagram.font_size * CAPTION_GAP_EM - size.height(),
        );
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
