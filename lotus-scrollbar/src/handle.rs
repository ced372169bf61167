//! Imperative control of a mounted scrollbar.

use crate::axis::Axis;
use crate::scrollbar::Scrollbar;

/// Operations a host can perform on a scrollbar outside of input events.
///
/// Every operation is a no-op while nothing is mounted. Scroll writes
/// resynchronize the thumbs, and fire `on_scroll`, before returning.
pub trait ScrollbarControl {
    /// Scroll both axes. Ignored unless both coordinates are finite.
    fn scroll_to(&self, x: f64, y: f64);

    /// Set the vertical offset. Non-finite values are ignored.
    fn set_scroll_top(&self, value: f64);

    /// Set the horizontal offset. Non-finite values are ignored.
    fn set_scroll_left(&self, value: f64);

    /// Remeasure now.
    fn update(&self);

    /// Resynchronize the thumbs with the current scroll position now.
    fn on_scroll(&self);
}

/// Cloneable handle to a [`Scrollbar`].
#[derive(Debug, Clone)]
pub struct ScrollbarHandle {
    scrollbar: Scrollbar,
}

impl ScrollbarHandle {
    pub(crate) fn new(scrollbar: Scrollbar) -> Self {
        Self { scrollbar }
    }
}

impl ScrollbarControl for ScrollbarHandle {
    fn scroll_to(&self, x: f64, y: f64) {
        self.scrollbar.scroll_to(x, y);
    }

    fn set_scroll_top(&self, value: f64) {
        self.scrollbar.set_scroll_position(Axis::Vertical, value);
    }

    fn set_scroll_left(&self, value: f64) {
        self.scrollbar.set_scroll_position(Axis::Horizontal, value);
    }

    fn update(&self) {
        self.scrollbar.update();
    }

    fn on_scroll(&self) {
        self.scrollbar.handle_scroll();
    }
}
