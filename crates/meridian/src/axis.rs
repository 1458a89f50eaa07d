//! The orientation-parameterized axis core.
//!
//! Both diagram variants reduce to the same three primitives: an along-axis
//! coordinate for a `[0, 1]` proportion, a mapping from (along, cross)
//! axis-space coordinates to canvas points, and the split of a measured
//! label [`Size`] into its along/cross components. An [`Axis`] packages the
//! first two; [`Orientation`] carries the third. Horizontal and vertical
//! one-dimensional layouts and the two axes of a plane are all
//! configurations of this one type rather than separate code paths.
//!
//! An axis may run in either canvas direction: `start` and `end` are the
//! absolute along-axis pixel coordinates of proportions `0` and `1`, so a
//! bottom-up vertical axis simply has `start > end`.

use meridian_core::geometry::{Point, Size};

use crate::diagram::Orientation;

impl Orientation {
    /// The component of `size` that extends along the axis.
    pub(crate) fn along_size(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width(),
            Self::Vertical => size.height(),
        }
    }

    /// The component of `size` that extends across the axis.
    pub(crate) fn cross_size(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.height(),
            Self::Vertical => size.width(),
        }
    }
}

/// A single straight reference line in canvas space.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Axis {
    orientation: Orientation,
    start: f32,
    end: f32,
    cross: f32,
}

impl Axis {
    /// Creates an axis running from along-coordinate `start` (proportion 0)
    /// to `end` (proportion 1) at perpendicular coordinate `cross`.
    pub(crate) fn new(orientation: Orientation, start: f32, end: f32, cross: f32) -> Self {
        Self {
            orientation,
            start,
            end,
            cross,
        }
    }

    /// The orientation this axis runs in.
    pub(crate) fn orientation(self) -> Orientation {
        self.orientation
    }

    /// Absolute along-axis coordinate for a `[0, 1]` proportion.
    ///
    /// No clamping: out-of-range proportions produce coordinates outside
    /// the nominal drawing area, which is accepted behavior.
    pub(crate) fn coordinate(self, position: f32) -> f32 {
        self.start + position * (self.end - self.start)
    }

    /// The perpendicular coordinate of the axis line.
    pub(crate) fn cross(self) -> f32 {
        self.cross
    }

    /// Maps axis-space `(along, cross)` to a canvas point.
    pub(crate) fn place(self, along: f32, cross: f32) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(along, cross),
            Orientation::Vertical => Point::new(cross, along),
        }
    }

    /// The canvas endpoint of the axis line at a `[0, 1]` proportion.
    pub(crate) fn endpoint(self, position: f32) -> Point {
        self.place(self.coordinate(position), self.cross)
    }
}
