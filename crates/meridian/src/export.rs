//! SVG document assembly.
//!
//! A laid-out [`Scene`] serializes to a single self-contained SVG string:
//! viewBox matching the canvas, the arrowhead marker definition when a
//! caption direction arrow referenced one, then the layered groups in
//! z-order. Rendering happens entirely in memory; the string embeds
//! directly into a host document.

use svg::node::element as svg_element;

use meridian_core::draw;

use crate::layout::Scene;

pub(crate) fn render_document(scene: Scene) -> String {
    let size = scene.size;
    let mut document = svg::Document::new()
        .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
        .set("width", size.width())
        .set("height", size.height());

    if let Some(id) = &scene.marker_id {
        let defs = svg_element::Definitions::new().add(draw::arrow_marker(id));
        document = document.add(defs);
    }

    for node in scene.output.render() {
        document = document.add(node);
    }

    document.to_string()
}
