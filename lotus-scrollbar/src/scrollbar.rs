//! Scrollbar container.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use lotus_dom::{
    Document, Element, Event, EventResult, LayoutResult, ListenerKind, ScrollNode, Style,
};

use crate::axis::{Axis, GAP};
use crate::bar::{Bar, BarPart, BarProps};
use crate::config::{ConfigError, ScrollEvent, ScrollbarProps, ScrollbarSize};
use crate::drag::DragSession;
use crate::geometry::{self, AxisGeometry};
use crate::handle::ScrollbarHandle;
use crate::unit::add_unit;

/// Unique identifier for a Scrollbar instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollbarId(usize);

impl ScrollbarId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ScrollbarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__scrollbar_{}", self.0)
    }
}

/// Internal state for the Scrollbar component.
struct ScrollbarInner {
    props: ScrollbarProps,
    /// Scroll node behind the wrapper element, once mounted.
    node: Option<Arc<dyn ScrollNode>>,
    /// Per-axis geometry from the last measurement.
    geometry: [Option<AxisGeometry>; 2],
    /// Per-axis thumb offsets from the last synchronization.
    move_percent: [f64; 2],
    /// Pointer is inside the root element.
    hovered: bool,
}

/// A scroll container with custom scrollbars.
///
/// The host renders it with [`render`](Self::render), lays the tree out,
/// reports the result with [`after_layout`](Self::after_layout) and feeds
/// input through [`dispatch`](Self::dispatch). Cloning yields another handle
/// to the same component.
///
/// # Example
///
/// ```ignore
/// let node = MemoryScrollNode::new((404.0, 404.0), (404.0, 1000.0));
/// let scrollbar = Scrollbar::new(ScrollbarProps::new().height(404));
/// scrollbar.mount(Arc::new(node));
///
/// let tree = scrollbar.render(items);
/// let layout = layout(&tree, Rect::from_size(404.0, 404.0));
/// scrollbar.after_layout(&layout);
///
/// scrollbar.handle().set_scroll_top(120.0);
/// ```
#[derive(Clone)]
pub struct Scrollbar {
    id: ScrollbarId,
    inner: Arc<RwLock<ScrollbarInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
    document: Document,
    session: DragSession,
    /// Horizontal then vertical.
    bars: [Bar; 2],
}

impl fmt::Debug for Scrollbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrollbar")
            .field("id", &self.id)
            .field("mounted", &self.is_mounted())
            .field("dirty", &self.is_dirty())
            .finish()
    }
}

impl Scrollbar {
    /// Create a scrollbar attached to a fresh document.
    pub fn new(props: ScrollbarProps) -> Self {
        Self::with_document(props, Document::new())
    }

    /// Validate the props before creating the scrollbar.
    pub fn try_new(props: ScrollbarProps) -> Result<Self, ConfigError> {
        props.validate()?;
        Ok(Self::new(props))
    }

    /// Create a scrollbar sharing a host document with other components.
    pub fn with_document(props: ScrollbarProps, document: Document) -> Self {
        let id = ScrollbarId::new();
        let owner = id.to_string();
        let session = DragSession::new(&document);
        let bars = Axis::ALL.map(|axis| {
            let mut bar_props = BarProps::new(props.prefix_cls.clone(), axis);
            bar_props.always = props.always;
            bar_props.variant = props.size;
            Bar::new(&owner, bar_props, session.clone())
        });

        Self {
            id,
            inner: Arc::new(RwLock::new(ScrollbarInner {
                props,
                node: None,
                geometry: [None, None],
                move_percent: [0.0, 0.0],
                hovered: false,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            document,
            session,
            bars,
        }
    }

    pub fn id(&self) -> ScrollbarId {
        self.id
    }

    /// Id of the root element.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Id of the wrapper element holding the content.
    pub fn wrap_id(&self) -> String {
        format!("{}-wrap", self.id)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn bar(&self, axis: Axis) -> &Bar {
        &self.bars[axis.index()]
    }

    /// Imperative control handle.
    pub fn handle(&self) -> ScrollbarHandle {
        ScrollbarHandle::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Whether the rendered tree is out of date.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Attach the scroll node behind the wrapper element and measure it.
    pub fn mount(&self, node: Arc<dyn ScrollNode>) {
        // Notifications queued before mount are covered by the measurement.
        node.take_resize_event();
        node.take_scroll_event();

        if let Ok(mut guard) = self.inner.write() {
            guard.node = Some(node);
        }
        for bar in &self.bars {
            bar.mount(&self.document);
        }
        log::debug!("[scrollbar] {} mounted", self.id);

        self.measure();
        self.sync_moves();
        self.mark_dirty();
    }

    /// Detach the scroll node. Every operation is a no-op until the next
    /// mount.
    pub fn unmount(&self) {
        self.session.end(&self.document);
        if let Ok(mut guard) = self.inner.write() {
            guard.node = None;
            guard.geometry = [None, None];
            guard.hovered = false;
        }
        log::debug!("[scrollbar] {} unmounted", self.id);
        self.mark_dirty();
    }

    pub fn is_mounted(&self) -> bool {
        self.node().is_some()
    }

    fn node(&self) -> Option<Arc<dyn ScrollNode>> {
        self.inner.read().ok().and_then(|guard| guard.node.clone())
    }

    pub fn props(&self) -> Option<ScrollbarProps> {
        self.inner.read().ok().map(|guard| guard.props.clone())
    }

    /// Replace the props and remeasure.
    pub fn set_props(&self, props: ScrollbarProps) {
        if let Ok(mut guard) = self.inner.write() {
            guard.props = props;
        }
        self.measure();
        self.sync_moves();
        self.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Measurement
    // -------------------------------------------------------------------------

    /// Remeasure both axes from the mounted node.
    pub fn update(&self) {
        if self.measure() {
            self.sync_moves();
            self.mark_dirty();
        }
    }

    /// Recompute per-axis geometry. Returns false when nothing is mounted.
    fn measure(&self) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let Some(node) = guard.node.clone() else {
            log::trace!("[scrollbar] {} measure skipped, not mounted", self.id);
            return false;
        };

        let min_size = guard.props.min_size;
        guard.geometry = Axis::ALL.map(|axis| {
            let descriptor = axis.descriptor();
            Some(AxisGeometry::measure(
                node.offset_extent(descriptor.offset_extent),
                node.scroll_extent(descriptor.scroll_extent),
                min_size,
            ))
        });

        log::debug!(
            "[scrollbar] {} measured: horizontal {:?}, vertical {:?}",
            self.id,
            guard.geometry[0].and_then(|g| g.size()),
            guard.geometry[1].and_then(|g| g.size()),
        );
        true
    }

    /// Recompute thumb offsets from the node's scroll position and pass the
    /// new props down to the bars. Returns the positions read.
    fn sync_moves(&self) -> Option<ScrollEvent> {
        let event = {
            let mut guard = self.inner.write().ok()?;
            let node = guard.node.clone()?;

            for axis in Axis::ALL {
                let descriptor = axis.descriptor();
                let ratio = guard.geometry[axis.index()].map_or(1.0, |g| g.ratio);
                let wrapper = node.offset_extent(descriptor.offset_extent) - GAP;
                let position = node.scroll_position(descriptor.scroll_position);
                guard.move_percent[axis.index()] =
                    geometry::move_percent(position, wrapper, ratio);
            }

            ScrollEvent {
                scroll_top: node.scroll_position(Axis::Vertical.descriptor().scroll_position),
                scroll_left: node.scroll_position(Axis::Horizontal.descriptor().scroll_position),
            }
        };

        for bar in &self.bars {
            if let Some(props) = self.bar_props(bar.axis()) {
                bar.set_props(props);
            }
        }
        Some(event)
    }

    fn bar_props(&self, axis: Axis) -> Option<BarProps> {
        let guard = self.inner.read().ok()?;
        let geometry = guard.geometry[axis.index()];
        Some(BarProps {
            prefix_cls: guard.props.prefix_cls.clone(),
            axis,
            size: geometry.and_then(|g| g.size()),
            move_percent: guard.move_percent[axis.index()],
            ratio: geometry.map_or(1.0, |g| g.ratio),
            always: guard.props.always,
            variant: guard.props.size,
        })
    }

    // -------------------------------------------------------------------------
    // Scroll synchronization
    // -------------------------------------------------------------------------

    /// Follow the node's scroll position and notify `on_scroll`.
    pub fn handle_scroll(&self) {
        let Some(event) = self.sync_moves() else {
            log::trace!("[scrollbar] {} scroll ignored, not mounted", self.id);
            return;
        };
        self.mark_dirty();

        let callback = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.props.on_scroll.clone());
        if let Some(callback) = callback {
            callback(event);
        }
    }

    /// Drain a pending native scroll notification.
    fn flush_scroll(&self) {
        if self.node().is_some_and(|node| node.take_scroll_event()) {
            self.handle_scroll();
        }
    }

    pub(crate) fn scroll_to(&self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let Some(node) = self.node() else {
            return;
        };
        node.scroll_to(x, y);
        self.flush_scroll();
    }

    pub(crate) fn set_scroll_position(&self, axis: Axis, value: f64) {
        if !value.is_finite() {
            return;
        }
        let Some(node) = self.node() else {
            return;
        };
        node.set_scroll_position(axis.descriptor().scroll_position, value);
        self.flush_scroll();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn geometry(&self, axis: Axis) -> Option<AxisGeometry> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.geometry[axis.index()])
    }

    /// Thumb length, or `None` when the axis does not overflow.
    pub fn size(&self, axis: Axis) -> Option<f64> {
        self.geometry(axis).and_then(|g| g.size())
    }

    pub fn ratio(&self, axis: Axis) -> f64 {
        self.geometry(axis).map_or(1.0, |g| g.ratio)
    }

    pub fn move_percent(&self, axis: Axis) -> f64 {
        self.inner
            .read()
            .map(|guard| guard.move_percent[axis.index()])
            .unwrap_or(0.0)
    }

    pub fn offset_ratio(&self, axis: Axis) -> f64 {
        self.bar(axis).offset_ratio()
    }

    pub fn bar_displayed(&self, axis: Axis) -> bool {
        self.bar(axis).is_displayed()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the root, the wrapper holding `children`, and the bars.
    pub fn render(&self, children: impl IntoIterator<Item = Element>) -> Element {
        let Some(props) = self.props() else {
            return Element::div().id(self.id_string());
        };
        let prefix = &props.prefix_cls;

        let mut wrap_style = Style::new().set("overflow", "auto").merge(&props.wrap_style);
        let height = add_unit(props.height.as_ref(), "px");
        if !height.is_empty() {
            wrap_style.insert("height", height);
        }
        let max_height = add_unit(props.max_height.as_ref(), "px");
        if !max_height.is_empty() {
            wrap_style.insert("max-height", max_height);
        }

        let mut wrap = Element::div()
            .id(self.wrap_id())
            .class(format!("{prefix}-wrap"))
            .class_if(format!("{prefix}-wrap-native-hidden"), !props.native)
            .style(wrap_style)
            .children(children);
        if let Some(class) = &props.wrap_class_name {
            wrap = wrap.class(class.clone());
        }

        let mut root = Element::div()
            .id(self.id_string())
            .class(prefix.clone())
            .class_if(format!("{prefix}-small"), props.size == ScrollbarSize::Small)
            .style(Style::new().set("position", "relative").merge(&props.style))
            .child(wrap);
        if let Some(class) = &props.class_name {
            root = root.class(class.clone());
        }

        if !props.native && self.is_mounted() {
            root = root.children(self.bars.iter().map(Bar::render));
        }
        root
    }

    /// Report the layout of the last rendered tree.
    pub fn after_layout(&self, layout: &LayoutResult) {
        let Some(node) = self.node() else {
            return;
        };
        for bar in &self.bars {
            bar.after_layout(layout, node.as_ref());
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Route one event, using the layout of the last rendered tree.
    pub fn dispatch(&self, event: &Event, layout: &LayoutResult) -> EventResult {
        let Some(node) = self.node() else {
            log::trace!("[scrollbar] {} event ignored, not mounted", self.id);
            return EventResult::Ignored;
        };
        let Some(props) = self.props() else {
            return EventResult::Ignored;
        };

        if node.take_resize_event() && !props.no_resize {
            log::trace!("[scrollbar] {} wrapper resized", self.id);
            self.update();
        }

        let result = match event {
            Event::Resize { .. } => {
                self.update();
                EventResult::Ignored
            }
            Event::MouseMove { x, y } => {
                let result = self.route_document(ListenerKind::MouseMove, |bar| {
                    bar.on_document_move(layout, node.as_ref(), *x, *y)
                });
                self.track_hover(layout, *x, *y);
                result
            }
            Event::MouseDown {
                x,
                y,
                button,
                modifiers,
            } if !props.native => {
                // Vertical is rendered last and sits on top.
                let hit = self
                    .bars
                    .iter()
                    .rev()
                    .find_map(|bar| bar.hit(layout, *x, *y).map(|part| (bar, part)));
                match hit {
                    Some((bar, BarPart::Thumb)) => {
                        bar.on_thumb_down(layout, &self.document, *x, *y, *button, *modifiers)
                    }
                    Some((bar, BarPart::Track)) => {
                        bar.on_track_down(layout, node.as_ref(), *x, *y)
                    }
                    None => EventResult::Ignored,
                }
            }
            Event::MouseUp { .. } => {
                let result = self.route_document(ListenerKind::MouseUp, |bar| {
                    bar.on_document_up(&self.document)
                });
                if result.is_handled() {
                    for bar in &self.bars {
                        bar.on_drag_end();
                    }
                    self.mark_dirty();
                }
                result
            }
            Event::Scroll { target } if *target == self.wrap_id() => {
                node.take_scroll_event();
                self.handle_scroll();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        };

        self.flush_scroll();
        result
    }

    /// Deliver a document-level event to the bars listening for it.
    fn route_document(
        &self,
        kind: ListenerKind,
        handler: impl Fn(&Bar) -> EventResult,
    ) -> EventResult {
        let owners = self.document.listeners(kind);
        let mut result = EventResult::Ignored;
        for bar in &self.bars {
            if owners.iter().any(|owner| owner == bar.track_id()) && handler(bar).is_handled() {
                result = EventResult::Consumed;
            }
        }
        result
    }

    fn track_hover(&self, layout: &LayoutResult, x: f64, y: f64) {
        let inside = layout
            .get(&self.id_string())
            .is_some_and(|rect| rect.contains(x, y));

        let was_hovered = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            std::mem::replace(&mut guard.hovered, inside)
        };

        let mut changed = false;
        if inside {
            for bar in &self.bars {
                changed |= bar.on_region_move();
            }
        } else if was_hovered {
            for bar in &self.bars {
                changed |= bar.on_region_leave();
            }
        }
        if changed {
            self.mark_dirty();
        }
    }
}
