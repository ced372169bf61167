use std::sync::{Arc, RwLock};

use crate::types::{Extent, ScrollProperty};

/// A scrollable container as seen by components.
///
/// This is the host capability behind a scroll wrapper element: its rendered
/// size, its scrollable content size, and its scroll position. Writes are
/// clamped to the node's native bounds. Position changes and size changes are
/// reported through pending notifications the owner drains.
pub trait ScrollNode: Send + Sync {
    /// Rendered size along one axis (offsetWidth/offsetHeight).
    fn offset_extent(&self, extent: Extent) -> f64;

    /// Total scrollable size along one axis (scrollWidth/scrollHeight).
    fn scroll_extent(&self, extent: Extent) -> f64;

    fn scroll_position(&self, property: ScrollProperty) -> f64;

    fn set_scroll_position(&self, property: ScrollProperty, value: f64);

    fn scroll_to(&self, x: f64, y: f64) {
        self.set_scroll_position(ScrollProperty::ScrollLeft, x);
        self.set_scroll_position(ScrollProperty::ScrollTop, y);
    }

    /// Drain the pending native scroll notification.
    fn take_scroll_event(&self) -> bool;

    /// Drain the pending resize notification. Nodes that cannot observe
    /// their own size never report one.
    fn take_resize_event(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
struct MemoryScrollInner {
    viewport: (f64, f64),
    content: (f64, f64),
    offset: (f64, f64),
    scroll_pending: bool,
    resize_pending: bool,
}

impl MemoryScrollInner {
    fn max_offset(&self) -> (f64, f64) {
        (
            (self.content.0 - self.viewport.0).max(0.0),
            (self.content.1 - self.viewport.1).max(0.0),
        )
    }

    fn clamp(&mut self) {
        let (max_x, max_y) = self.max_offset();
        let clamped = (
            self.offset.0.clamp(0.0, max_x),
            self.offset.1.clamp(0.0, max_y),
        );
        if clamped != self.offset {
            self.offset = clamped;
            self.scroll_pending = true;
        }
    }
}

/// Headless scroll node: a viewport over content of a known size.
///
/// Cloning yields another handle to the same node, so a host can keep one
/// clone to resize content while a component holds the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryScrollNode {
    inner: Arc<RwLock<MemoryScrollInner>>,
}

impl MemoryScrollNode {
    pub fn new(viewport: (f64, f64), content: (f64, f64)) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryScrollInner {
                viewport,
                content,
                ..Default::default()
            })),
        }
    }

    /// Current scroll offset (left, top).
    pub fn offset(&self) -> (f64, f64) {
        self.inner
            .read()
            .map(|guard| guard.offset)
            .unwrap_or((0.0, 0.0))
    }

    pub fn content_size(&self) -> (f64, f64) {
        self.inner
            .read()
            .map(|guard| guard.content)
            .unwrap_or((0.0, 0.0))
    }

    pub fn viewport_size(&self) -> (f64, f64) {
        self.inner
            .read()
            .map(|guard| guard.viewport)
            .unwrap_or((0.0, 0.0))
    }

    /// Change the content size, as when children are added or removed.
    pub fn set_content_size(&self, width: f64, height: f64) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.content != (width, height) {
                guard.content = (width, height);
                guard.resize_pending = true;
                guard.clamp();
            }
        }
    }

    /// Change the rendered viewport size.
    pub fn set_viewport_size(&self, width: f64, height: f64) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.viewport != (width, height) {
                guard.viewport = (width, height);
                guard.resize_pending = true;
                guard.clamp();
            }
        }
    }
}

impl ScrollNode for MemoryScrollNode {
    fn offset_extent(&self, extent: Extent) -> f64 {
        self.inner
            .read()
            .map(|guard| match extent {
                Extent::Width => guard.viewport.0,
                Extent::Height => guard.viewport.1,
            })
            .unwrap_or(0.0)
    }

    fn scroll_extent(&self, extent: Extent) -> f64 {
        // Like scrollWidth/scrollHeight, never smaller than the viewport.
        self.inner
            .read()
            .map(|guard| match extent {
                Extent::Width => guard.content.0.max(guard.viewport.0),
                Extent::Height => guard.content.1.max(guard.viewport.1),
            })
            .unwrap_or(0.0)
    }

    fn scroll_position(&self, property: ScrollProperty) -> f64 {
        self.inner
            .read()
            .map(|guard| match property {
                ScrollProperty::ScrollLeft => guard.offset.0,
                ScrollProperty::ScrollTop => guard.offset.1,
            })
            .unwrap_or(0.0)
    }

    fn set_scroll_position(&self, property: ScrollProperty, value: f64) {
        if !value.is_finite() {
            return;
        }
        if let Ok(mut guard) = self.inner.write() {
            let (max_x, max_y) = guard.max_offset();
            let previous = guard.offset;
            match property {
                ScrollProperty::ScrollLeft => guard.offset.0 = value.clamp(0.0, max_x),
                ScrollProperty::ScrollTop => guard.offset.1 = value.clamp(0.0, max_y),
            }
            if guard.offset != previous {
                guard.scroll_pending = true;
            }
        }
    }

    fn take_scroll_event(&self) -> bool {
        self.inner
            .write()
            .map(|mut guard| std::mem::take(&mut guard.scroll_pending))
            .unwrap_or(false)
    }

    fn take_resize_event(&self) -> bool {
        self.inner
            .write()
            .map(|mut guard| std::mem::take(&mut guard.resize_pending))
            .unwrap_or(false)
    }
}
