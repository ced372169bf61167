//! Pure scrollbar geometry.
//!
//! The thumb length is proportional to the visible share of the content
//! (`wrapper² / content`), floored at a minimum size. When the floor kicks
//! in the thumb no longer moves at the same rate as the content, and `ratio`
//! corrects for it: it scales thumb-space percentages so that the thumb
//! still spans exactly the track when the content spans its scroll range.

use crate::axis::GAP;

/// Measured geometry of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    /// Usable viewport extent (rendered extent minus [`GAP`]).
    pub wrapper_extent: f64,
    /// Total scrollable extent.
    pub content_extent: f64,
    /// Proportional thumb length before the minimum-size floor.
    pub raw_thumb_extent: f64,
    /// Thumb length after the floor.
    pub thumb_extent: f64,
    /// Whether the content overflows enough to need a thumb.
    pub visible: bool,
    /// Thumb-space to scroll-space correction factor.
    pub ratio: f64,
}

impl AxisGeometry {
    /// Measure one axis from the wrapper's rendered and scrollable extents.
    pub fn measure(offset_extent: f64, content_extent: f64, min_size: f64) -> Self {
        let wrapper_extent = offset_extent - GAP;
        let raw_thumb_extent = if content_extent > 0.0 {
            wrapper_extent.powi(2) / content_extent
        } else {
            wrapper_extent
        };
        let thumb_extent = raw_thumb_extent.max(min_size);
        let visible = wrapper_extent > 0.0 && thumb_extent + GAP < wrapper_extent;

        // Both remaining spaces are positive whenever the thumb is visible.
        let ratio = if visible {
            (raw_thumb_extent / (wrapper_extent - raw_thumb_extent))
                / (thumb_extent / (wrapper_extent - thumb_extent))
        } else {
            1.0
        };

        Self {
            wrapper_extent,
            content_extent,
            raw_thumb_extent,
            thumb_extent,
            visible,
            ratio,
        }
    }

    /// Thumb length to render, or `None` when no thumb is needed.
    pub fn size(&self) -> Option<f64> {
        self.visible.then_some(self.thumb_extent)
    }
}

/// Thumb offset, as a percentage of the thumb's own length, for a scroll
/// position.
pub fn move_percent(scroll_position: f64, wrapper_extent: f64, ratio: f64) -> f64 {
    if wrapper_extent <= 0.0 {
        return 0.0;
    }
    scroll_position * 100.0 / wrapper_extent * ratio
}

/// Factor converting track pixels into scroll-extent percentages.
///
/// Returns `None` when any of the extents is degenerate.
pub fn offset_ratio(
    track_extent: f64,
    scroll_extent: f64,
    ratio: f64,
    thumb_extent: f64,
) -> Option<f64> {
    if scroll_extent <= 0.0 || ratio <= 0.0 || thumb_extent <= 0.0 {
        return None;
    }
    let value = track_extent.powi(2) / scroll_extent / ratio / thumb_extent;
    value.is_finite().then_some(value)
}

/// Scroll position for a thumb whose leading edge sits `thumb_offset` pixels
/// into the track.
pub fn scroll_for_thumb_offset(
    thumb_offset: f64,
    offset_ratio: f64,
    track_extent: f64,
    scroll_extent: f64,
) -> Option<f64> {
    if track_extent <= 0.0 {
        return None;
    }
    let percentage = thumb_offset * 100.0 * offset_ratio / track_extent;
    Some(percentage * scroll_extent / 100.0)
}
