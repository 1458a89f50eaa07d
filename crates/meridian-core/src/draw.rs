//! Drawing primitives and layered SVG output.
//!
//! Diagrams are built from a small set of typed primitives (axis lines,
//! tics, arrows, dots, labels, guides) collected into a [`LayeredOutput`]
//! and serialized once at the end. Nothing in this module concatenates
//! markup by hand.
//!
//! All strokes and fills use `currentColor`, so the emitted document
//! inherits the foreground color of whatever host it is embedded in.

mod layer;
mod primitives;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitives::{
    arrow, arrow_marker, dashed_guide, dot, line, marker_line, marker_reference, markup_label,
    text_label,
};
