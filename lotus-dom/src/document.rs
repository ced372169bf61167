//! Document-level state shared by every component of one host.
//!
//! Components use the document for the things a page-wide DOM offers:
//! - the select-start policy (whether pressing and dragging starts a text
//!   selection), which drag interactions suppress and later restore
//! - document-level listeners, so a drag keeps receiving pointer moves after
//!   the pointer leaves the component
//! - the current text selection

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// What happens when the user starts a text selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectStart {
    #[default]
    Allow,
    Suppress,
}

/// Identifier of a registered document-level listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    MouseMove,
    MouseUp,
}

#[derive(Debug, Clone)]
struct Listener {
    id: ListenerId,
    kind: ListenerKind,
    owner: String,
}

#[derive(Debug, Default)]
struct DocumentInner {
    select_start: SelectStart,
    listeners: Vec<Listener>,
    selection: Option<String>,
}

/// Shared handle to the host document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Arc<RwLock<DocumentInner>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn select_start(&self) -> SelectStart {
        self.inner
            .read()
            .map(|guard| guard.select_start)
            .unwrap_or_default()
    }

    /// Replace the select-start policy, returning the previous one.
    pub fn set_select_start(&self, policy: SelectStart) -> SelectStart {
        match self.inner.write() {
            Ok(mut guard) => std::mem::replace(&mut guard.select_start, policy),
            Err(_) => SelectStart::default(),
        }
    }

    pub fn selection(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.selection.clone())
    }

    /// Select text. Ignored while selection is suppressed.
    pub fn select(&self, text: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.select_start == SelectStart::Allow {
                guard.selection = Some(text.into());
            }
        }
    }

    pub fn clear_selection(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection = None;
        }
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn add_listener(&self, kind: ListenerKind, owner: &str) -> ListenerId {
        let id = ListenerId::new();
        if let Ok(mut guard) = self.inner.write() {
            guard.listeners.push(Listener {
                id,
                kind,
                owner: owner.to_string(),
            });
        }
        log::trace!("[document] {:?} listener {:?} added for {}", kind, id, owner);
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let before = guard.listeners.len();
        guard.listeners.retain(|l| l.id != id);
        before != guard.listeners.len()
    }

    /// Owners of the listeners registered for `kind`, in registration order.
    pub fn listeners(&self, kind: ListenerKind) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .listeners
                    .iter()
                    .filter(|l| l.kind == kind)
                    .map(|l| l.owner.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.listeners.len())
            .unwrap_or(0)
    }
}
