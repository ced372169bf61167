//! Drag state shared by the bars of one scrollbar.

use std::sync::{Arc, RwLock};

use lotus_dom::{Document, ListenerId, ListenerKind, SelectStart};

use crate::axis::Axis;

/// An open thumb drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub axis: Axis,
    /// Pointer position minus the thumb's leading edge at press time.
    pub anchor: f64,
    listeners: [ListenerId; 2],
}

impl ActiveDrag {
    /// Document-level move and up listeners held for the drag.
    pub fn listeners(&self) -> [ListenerId; 2] {
        self.listeners
    }
}

#[derive(Debug)]
struct DragInner {
    active: Option<ActiveDrag>,
    cursor_left: bool,
    /// Policy to restore once the drag ends.
    saved_select_start: SelectStart,
}

/// Drag flags owned by a scrollbar and passed to both of its bars.
///
/// Only one drag can be open at a time; a press on the other bar's thumb
/// while one is open is ignored.
#[derive(Debug, Clone)]
pub struct DragSession {
    inner: Arc<RwLock<DragInner>>,
}

impl DragSession {
    /// Create a session, remembering the document's current select-start
    /// policy as the one to restore.
    pub fn new(document: &Document) -> Self {
        Self {
            inner: Arc::new(RwLock::new(DragInner {
                active: None,
                cursor_left: false,
                saved_select_start: document.select_start(),
            })),
        }
    }

    /// Open a drag. Returns false if one is already open.
    ///
    /// Registers document-level move/up listeners for `owner` and suppresses
    /// text selection until [`end`](Self::end).
    pub fn begin(&self, axis: Axis, anchor: f64, document: &Document, owner: &str) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if guard.active.is_some() {
            log::trace!("[drag] {} press ignored, drag already open", owner);
            return false;
        }

        let listeners = [
            document.add_listener(ListenerKind::MouseMove, owner),
            document.add_listener(ListenerKind::MouseUp, owner),
        ];
        guard.saved_select_start = document.set_select_start(SelectStart::Suppress);
        guard.active = Some(ActiveDrag {
            axis,
            anchor,
            listeners,
        });

        log::debug!("[drag] {} started on {} axis, anchor {}", owner, axis.name(), anchor);
        true
    }

    /// Close the open drag, if any, releasing its listeners and restoring the
    /// select-start policy.
    pub fn end(&self, document: &Document) -> Option<ActiveDrag> {
        let drag = {
            let mut guard = self.inner.write().ok()?;
            guard.active.take()?
        };

        for id in drag.listeners {
            document.remove_listener(id);
        }
        self.restore_select_start(document);

        log::debug!("[drag] ended on {} axis", drag.axis.name());
        Some(drag)
    }

    /// Put back the saved select-start policy if the document differs.
    pub fn restore_select_start(&self, document: &Document) {
        let Ok(guard) = self.inner.read() else {
            return;
        };
        if document.select_start() != guard.saved_select_start {
            log::trace!("[drag] restoring select-start {:?}", guard.saved_select_start);
            document.set_select_start(guard.saved_select_start);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.active.is_some())
            .unwrap_or(false)
    }

    pub fn active(&self) -> Option<ActiveDrag> {
        self.inner.read().ok().and_then(|guard| guard.active)
    }

    /// Whether the pointer has left the scrollbar region.
    pub fn cursor_left(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.cursor_left)
            .unwrap_or(false)
    }

    pub fn set_cursor_left(&self, left: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor_left = left;
        }
    }
}
