//! Layer-based rendering system for SVG output.
//!
//! Drawable primitives specify which z-order layer their SVG nodes belong
//! to; layers are serialized bottom-to-top so arrows never hide under axis
//! decoration and labels always render on top.
//!
//! # Overview
//!
//! - [`RenderLayer`]: the available rendering layers, in z-order
//! - [`LayeredOutput`]: collects SVG nodes by layer
//!
//! # Example
//!
//! ```
//! # use meridian_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Line;
//! let mut output = LayeredOutput::new();
//!
//! let axis = Line::new().set("stroke", "currentColor");
//! output.add_to_layer(RenderLayer::Axis, Box::new(axis));
//!
//! let label = svg::node::element::Text::new("median");
//! output.add_to_layer(RenderLayer::Label, Box::new(label));
//!
//! // Render all layers in order
//! let svg_nodes = output.render();
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers render from bottom to top in declaration order; the `Ord` derive
/// uses declaration order, so the first variant renders first (bottom) and
/// the last renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Dashed guide lines from points to axes - renders first
    Guide,
    /// Axis lines
    Axis,
    /// Tic marks along axes
    Tic,
    /// Arrows connecting labels and points to axes
    Arrow,
    /// Dots marking points on a plane
    Dot,
    /// Point and tic labels
    Label,
    /// Axis captions and their direction arrows - renders last
    Caption,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Axis => "axis",
            Self::Tic => "tic",
            Self::Arrow => "arrow",
            Self::Dot => "dot",
            Self::Label => "label",
            Self::Caption => "caption",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// Collects SVG nodes and organizes them by layer; when rendered, nodes are
/// emitted in layer order (bottom to top), ensuring correct z-ordering.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are appended to the layer in the order they are added.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    ///
    /// Nodes from the other output are appended to the corresponding layers
    /// of this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a
    /// `data-layer` attribute identifying the layer. Layers render from
    /// bottom to top based on the `Ord` implementation of [`RenderLayer`].
    ///
    /// This method consumes the `LayeredOutput` to avoid cloning SVG nodes.
    ///
    /// # Example
    ///
    /// ```
    /// # use meridian_core::draw::{RenderLayer, LayeredOutput};
    /// # use svg::node::element::Line;
    /// let mut output = LayeredOutput::new();
    /// output.add_to_layer(RenderLayer::Label, Box::new(Line::new()));
    /// output.add_to_layer(RenderLayer::Axis, Box::new(Line::new()));
    ///
    /// let svg_nodes = output.render(); // Axis group first, then Label
    /// assert_eq!(svg_nodes.len(), 2);
    /// ```
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
