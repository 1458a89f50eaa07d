//! Typed constructors for the SVG primitives diagrams are built from.
//!
//! Each constructor returns a ready-to-place `svg` node. Layout code
//! composes these into a [`LayeredOutput`](crate::draw::LayeredOutput);
//! nothing here knows about diagram semantics, only about shapes.
//!
//! Point arrows carry their heads as explicit filled triangles. Marker
//! definitions are reserved for caption direction arrows, where a single
//! `<marker>` keyed by the diagram id serves every direction arrow in the
//! document (see [`arrow_marker`] and [`marker_reference`]).

use svg::{
    Node,
    node::{Blob as RawMarkup, Text as RawText, element as svg_element, element::Element},
};

use crate::geometry::{Point, Size};

/// Fraction of the head length used as the triangle's half-width.
const HEAD_ASPECT: f32 = 0.4;

/// Creates a path data string from two points
pub(crate) fn path_data(start: Point, end: Point) -> String {
    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
}

/// A solid line between two points, stroked in the host's foreground color.
///
/// Used for axis lines and tic marks.
pub fn line(from: Point, to: Point, stroke_width: f32) -> svg_element::Line {
    svg_element::Line::new()
        .set("x1", from.x())
        .set("y1", from.y())
        .set("x2", to.x())
        .set("y2", to.y())
        .set("stroke", "currentColor")
        .set("stroke-width", stroke_width)
}

/// An arrow from `from` to `to`: a stroked path plus a filled triangular
/// head at `to`, oriented along the segment.
///
/// A zero-length segment yields the bare path with no head; callers are
/// expected to omit arrows whose length is not positive in the first place.
pub fn arrow(from: Point, to: Point, stroke_width: f32, head_size: f32) -> svg_element::Group {
    let shaft = svg_element::Path::new()
        .set("d", path_data(from, to))
        .set("fill", "none")
        .set("stroke", "currentColor")
        .set("stroke-width", stroke_width);

    let mut group = svg_element::Group::new().add(shaft);

    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    let length = dx.hypot(dy);
    if length > 0.0 {
        let (ux, uy) = (dx / length, dy / length);
        let base = Point::new(to.x() - ux * head_size, to.y() - uy * head_size);
        let half_width = head_size * HEAD_ASPECT;
        let (px, py) = (-uy * half_width, ux * half_width);

        let head = svg_element::Path::new()
            .set(
                "d",
                format!(
                    "M {} {} L {} {} L {} {} Z",
                    to.x(),
                    to.y(),
                    base.x() + px,
                    base.y() + py,
                    base.x() - px,
                    base.y() - py,
                ),
            )
            .set("fill", "currentColor");
        group = group.add(head);
    }

    group
}

/// A dashed guide line between two points.
pub fn dashed_guide(from: Point, to: Point, stroke_width: f32) -> svg_element::Path {
    svg_element::Path::new()
        .set("d", path_data(from, to))
        .set("fill", "none")
        .set("stroke", "currentColor")
        .set("stroke-width", stroke_width)
        .set("stroke-dasharray", "5,5")
}

/// A filled dot marking a point on the plane.
pub fn dot(center: Point, radius: f32) -> svg_element::Circle {
    svg_element::Circle::new()
        .set("cx", center.x())
        .set("cy", center.y())
        .set("r", radius)
        .set("fill", "currentColor")
}

/// A plain text label centered on `center`, one `<tspan>` per input line.
///
/// The measured `size` supplies the uniform line height for multi-line
/// content; placement itself comes entirely from the caller's coordinates.
pub fn text_label(
    center: Point,
    size: Size,
    content: &str,
    font_size: f32,
    font_family: &str,
) -> svg_element::Text {
    let lines: Vec<&str> = content.lines().collect();
    let line_height = if lines.is_empty() {
        0.0
    } else {
        size.height() / lines.len() as f32
    };

    // Shift up so the line stack is centered on the anchor point
    let y_offset = -(size.height() + line_height) / 2.0;

    let mut text = svg_element::Text::new("")
        .set("x", center.x())
        .set("y", center.y() + y_offset)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
        .set("font-family", font_family)
        .set("font-size", font_size)
        .set("fill", "currentColor");

    for line in lines {
        let tspan = svg_element::TSpan::new("")
            .set("x", center.x())
            .set("dy", line_height)
            .add(RawText::new(line));
        text = text.add(tspan);
    }

    text
}

/// A pre-typeset markup label embedded via a `<foreignObject>` block sized
/// exactly to the measured label dimensions.
///
/// The markup is emitted verbatim; the block's x/y/width/height keep the
/// SVG coordinate system the single source of truth for placement.
pub fn markup_label(top_left: Point, size: Size, markup: &str) -> Element {
    let mut block = Element::new("foreignObject");
    block.assign("x", top_left.x());
    block.assign("y", top_left.y());
    block.assign("width", size.width());
    block.assign("height", size.height());
    block.append(RawMarkup::new(markup));
    block
}

/// The arrowhead marker definition for a diagram's caption direction
/// arrows, keyed by the diagram id.
///
/// Ids must be unique across diagrams composited into the same document,
/// otherwise marker definitions collide.
pub fn arrow_marker(diagram_id: &str) -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", marker_id(diagram_id))
        .set("viewBox", "0 0 10 10")
        .set("refX", 9)
        .set("refY", 5)
        .set("markerWidth", 6)
        .set("markerHeight", 6)
        .set("orient", "auto")
        .add(
            svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", "currentColor"),
        )
}

fn marker_id(diagram_id: &str) -> String {
    format!("arrow-{diagram_id}")
}

/// The `url(#...)` reference matching [`arrow_marker`] for the same diagram.
pub fn marker_reference(diagram_id: &str) -> String {
    format!("url(#{})", marker_id(diagram_id))
}

/// A line carrying the diagram's arrowhead marker at its end; used for
/// caption direction arrows.
pub fn marker_line(from: Point, to: Point, stroke_width: f32, diagram_id: &str) -> svg_element::Path {
    svg_element::Path::new()
        .set("d", path_data(from, to))
        .set("fill", "none")
        .set("stroke", "currentColor")
        .set("stroke-width", stroke_width)
        .set("marker-end", marker_reference(diagram_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_data_format() {
        let data = path_data(Point::new(10.0, 20.0), Point::new(100.0, 50.0));
        assert_eq!(data, "M 10 20 L 100 50");
    }

    #[test]
    fn test_line_uses_current_color() {
        let rendered = line(Point::new(0.0, 75.0), Point::new(900.0, 75.0), 2.0).to_string();
        assert!(rendered.contains("<line"));
        assert!(rendered.contains("stroke=\"currentColor\""));
        assert!(rendered.contains("x2=\"900\""));
    }

    #[test]
    fn test_arrow_has_shaft_and_head() {
        let rendered = arrow(Point::new(450.0, 30.0), Point::new(450.0, 75.0), 2.0, 6.0).to_string();
        assert_eq!(rendered.matches("<path").count(), 2);
        assert!(rendered.contains("M 450 30 L 450 75"));
        assert!(rendered.contains("Z"));
        assert!(rendered.contains("fill=\"currentColor\""));
    }

    #[test]
    fn test_arrow_zero_length_omits_head() {
        let rendered = arrow(Point::new(10.0, 10.0), Point::new(10.0, 10.0), 2.0, 6.0).to_string();
        assert_eq!(rendered.matches("<path").count(), 1);
    }

    #[test]
    fn test_dashed_guide_dasharray() {
        let rendered = dashed_guide(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0).to_string();
        assert!(rendered.contains("stroke-dasharray=\"5,5\""));
    }

    #[test]
    fn test_dot_is_filled_circle() {
        let rendered = dot(Point::new(3.0, 4.0), 3.0).to_string();
        assert!(rendered.contains("<circle"));
        assert!(rendered.contains("fill=\"currentColor\""));
    }

    #[test]
    fn test_text_label_tspan_per_line() {
        let rendered = text_label(
            Point::new(50.0, 20.0),
            Size::new(40.0, 36.0),
            "one\ntwo",
            16.0,
            "sans-serif",
        )
        .to_string();
        assert_eq!(rendered.matches("<tspan").count(), 2);
        assert!(rendered.contains("text-anchor=\"middle\""));
        assert!(rendered.contains("fill=\"currentColor\""));
    }

    #[test]
    fn test_markup_label_foreign_object() {
        let rendered = markup_label(
            Point::new(10.0, 20.0),
            Size::new(30.0, 15.0),
            "<span class=\"math\">x</span>",
        )
        .to_string();
        assert!(rendered.contains("<foreignObject"));
        assert!(rendered.contains("width=\"30\""));
        assert!(rendered.contains("height=\"15\""));
        // Markup is embedded verbatim
        assert!(rendered.contains("<span class=\"math\">x</span>"));
    }

    #[test]
    fn test_arrow_marker_keyed_by_diagram_id() {
        let rendered = arrow_marker("space").to_string();
        assert!(rendered.contains("id=\"arrow-space\""));
        assert!(rendered.contains("orient=\"auto\""));
    }

    #[test]
    fn test_marker_line_references_marker() {
        let rendered =
            marker_line(Point::new(0.0, 0.0), Point::new(32.0, 0.0), 2.0, "space").to_string();
        assert!(rendered.contains("marker-end=\"url(#arrow-space)\""));
        assert_eq!(marker_reference("space"), "url(#arrow-space)");
    }
}
