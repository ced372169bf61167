//! Axis descriptor table.
//!
//! Each axis maps to the geometry properties the scrollbar reads and writes,
//! so bar and container logic is written once and parameterized by axis.

use lotus_dom::{ClientCoordinate, Edge, Extent, ScrollProperty, TransformAxis};

/// Space between the wrapper's edges and the scrollbar tracks, in pixels.
/// Subtracted from the wrapper's rendered size to get the usable extent.
pub const GAP: f64 = 4.0;

/// Default minimum thumb length, in pixels.
pub const DEFAULT_MIN_SIZE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    pub fn descriptor(self) -> &'static AxisDescriptor {
        match self {
            Axis::Horizontal => &HORIZONTAL,
            Axis::Vertical => &VERTICAL,
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// The other axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Position in per-axis arrays.
    pub fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

/// Geometry properties for one axis.
#[derive(Debug, PartialEq, Eq)]
pub struct AxisDescriptor {
    pub axis: Axis,
    /// Used in class names and element ids.
    pub name: &'static str,
    /// Rendered size of an element (offsetWidth/offsetHeight).
    pub offset_extent: Extent,
    /// Total scrollable size of the wrapper (scrollWidth/scrollHeight).
    pub scroll_extent: Extent,
    /// Scroll offset of the wrapper (scrollLeft/scrollTop).
    pub scroll_position: ScrollProperty,
    /// Pointer coordinate (clientX/clientY).
    pub client_coordinate: ClientCoordinate,
    /// Leading edge of a bounding rect (left/top).
    pub bounds_edge: Edge,
    pub transform_axis: TransformAxis,
    /// CSS property carrying the thumb length.
    pub size_style_property: &'static str,
}

impl AxisDescriptor {
    /// CSS transform moving the thumb by `percent` of its own length.
    pub fn translate(&self, percent: f64) -> String {
        format!("translate{}({}%)", self.transform_axis.as_str(), percent)
    }
}

pub static HORIZONTAL: AxisDescriptor = AxisDescriptor {
    axis: Axis::Horizontal,
    name: "horizontal",
    offset_extent: Extent::Width,
    scroll_extent: Extent::Width,
    scroll_position: ScrollProperty::ScrollLeft,
    client_coordinate: ClientCoordinate::ClientX,
    bounds_edge: Edge::Left,
    transform_axis: TransformAxis::X,
    size_style_property: "width",
};

pub static VERTICAL: AxisDescriptor = AxisDescriptor {
    axis: Axis::Vertical,
    name: "vertical",
    offset_extent: Extent::Height,
    scroll_extent: Extent::Height,
    scroll_position: ScrollProperty::ScrollTop,
    client_coordinate: ClientCoordinate::ClientY,
    bounds_edge: Edge::Top,
    transform_axis: TransformAxis::Y,
    size_style_property: "height",
};
