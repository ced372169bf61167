//! Custom scrollbar component.
//!
//! A [`Scrollbar`] wraps a scrollable content node, hides its native
//! scrollbars and renders one [`Bar`] per axis in their place. The bars are
//! sized from the wrapper's geometry, follow its scroll position, and write
//! back to it when the user drags a thumb or clicks a track.

pub mod axis;
pub mod bar;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod handle;
pub mod scrollbar;
pub mod unit;

pub use axis::{Axis, AxisDescriptor, DEFAULT_MIN_SIZE, GAP};
pub use bar::{Bar, BarPart, BarProps};
pub use config::{Always, ConfigError, ScrollCallback, ScrollEvent, ScrollbarProps, ScrollbarSize};
pub use drag::{ActiveDrag, DragSession};
pub use geometry::AxisGeometry;
pub use handle::{ScrollbarControl, ScrollbarHandle};
pub use scrollbar::{Scrollbar, ScrollbarId};
pub use unit::{add_unit, Dimension};
