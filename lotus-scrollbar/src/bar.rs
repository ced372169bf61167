//! One axis of a custom scrollbar: a track and its draggable thumb.
//!
//! A [`Bar`] renders from the props its [`Scrollbar`](crate::Scrollbar)
//! passes down and turns pointer input into scroll writes on the wrapper's
//! [`ScrollNode`]. It never reads the scroll position back; the container
//! does that and hands a new `move_percent` down.

use std::sync::{Arc, RwLock};

use lotus_dom::{
    Document, Element, EventResult, LayoutResult, Modifiers, MouseButton, ScrollNode, Style,
    hit_path,
};

use crate::axis::{Axis, AxisDescriptor, GAP};
use crate::config::{Always, ScrollbarSize};
use crate::drag::DragSession;
use crate::geometry;

/// Inputs of a bar, recomputed by the container.
#[derive(Debug, Clone, PartialEq)]
pub struct BarProps {
    pub prefix_cls: String,
    pub axis: Axis,
    /// Thumb length, or `None` when the content does not overflow.
    pub size: Option<f64>,
    /// Thumb offset as a percentage of its own length.
    pub move_percent: f64,
    pub ratio: f64,
    pub always: Option<Always>,
    pub variant: ScrollbarSize,
}

impl BarProps {
    pub fn new(prefix_cls: impl Into<String>, axis: Axis) -> Self {
        Self {
            prefix_cls: prefix_cls.into(),
            axis,
            size: None,
            move_percent: 0.0,
            ratio: 1.0,
            always: None,
            variant: ScrollbarSize::default(),
        }
    }
}

/// Which part of a bar a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPart {
    Thumb,
    Track,
}

#[derive(Debug)]
struct BarInner {
    props: BarProps,
    /// Hover visibility, before the `always` override.
    visible: bool,
    offset_ratio: f64,
    /// `offset_ratio` must be recomputed on the next layout pass.
    stale: bool,
}

#[derive(Debug, Clone)]
pub struct Bar {
    descriptor: &'static AxisDescriptor,
    track_id: String,
    thumb_id: String,
    inner: Arc<RwLock<BarInner>>,
    session: DragSession,
}

impl Bar {
    /// Create the bar for one axis of the scrollbar with id `owner`.
    pub fn new(owner: &str, props: BarProps, session: DragSession) -> Self {
        let descriptor = props.axis.descriptor();
        let track_id = format!("{}-bar-{}", owner, descriptor.name);
        let thumb_id = format!("{}-thumb", track_id);
        Self {
            descriptor,
            track_id,
            thumb_id,
            inner: Arc::new(RwLock::new(BarInner {
                props,
                visible: false,
                offset_ratio: 1.0,
                stale: true,
            })),
            session,
        }
    }

    pub fn axis(&self) -> Axis {
        self.descriptor.axis
    }

    pub fn track_id(&self) -> &str {
        &self.track_id
    }

    pub fn thumb_id(&self) -> &str {
        &self.thumb_id
    }

    pub fn props(&self) -> Option<BarProps> {
        self.inner.read().ok().map(|guard| guard.props.clone())
    }

    /// Replace the props. A changed size or ratio invalidates the cached
    /// offset ratio.
    pub fn set_props(&self, props: BarProps) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.props.size != props.size || guard.props.ratio != props.ratio {
                guard.stale = true;
            }
            guard.props = props;
        }
    }

    /// Track-pixels to scroll-percent factor. 1 until first computed.
    pub fn offset_ratio(&self) -> f64 {
        self.inner
            .read()
            .map(|guard| guard.offset_ratio)
            .unwrap_or(1.0)
    }

    /// Whether the track is rendered with `display: block`.
    pub fn is_displayed(&self) -> bool {
        self.inner
            .read()
            .map(|guard| match guard.props.always {
                Some(Always::Show) => true,
                Some(Always::Hidden) => false,
                None => guard.visible,
            })
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Attach to a document. Restores a select-start policy left suppressed
    /// by an earlier drag.
    pub fn mount(&self, document: &Document) {
        self.session.restore_select_start(document);
        if let Ok(mut guard) = self.inner.write() {
            guard.stale = true;
        }
        log::debug!("[bar] {} mounted", self.track_id);
    }

    /// Recompute the offset ratio once the track and thumb have been laid
    /// out. A hidden bar keeps its ratio stale until it is displayed.
    pub fn after_layout(&self, layout: &LayoutResult, node: &dyn ScrollNode) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        if !guard.stale {
            return;
        }
        let (Some(track), Some(thumb)) = (layout.get(&self.track_id), layout.get(&self.thumb_id))
        else {
            return;
        };

        let extent = self.descriptor.offset_extent;
        let offset_ratio = geometry::offset_ratio(
            track.extent(extent),
            node.scroll_extent(self.descriptor.scroll_extent),
            guard.props.ratio,
            thumb.extent(extent),
        );
        if let Some(offset_ratio) = offset_ratio {
            log::trace!("[bar] {} offset ratio {}", self.track_id, offset_ratio);
            guard.offset_ratio = offset_ratio;
            guard.stale = false;
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render(&self) -> Element {
        let Ok(guard) = self.inner.read() else {
            return Element::div().id(self.track_id.clone());
        };
        let props = &guard.props;
        let displayed = match props.always {
            Some(Always::Show) => true,
            Some(Always::Hidden) => false,
            None => guard.visible,
        };

        let inset = format!("{}px", GAP / 2.0);
        let thickness = format!("{}px", props.variant.thickness());
        let mut track_style = Style::new().set("position", "absolute");
        track_style = match self.descriptor.axis {
            Axis::Horizontal => track_style
                .set("left", inset.as_str())
                .set("right", inset.as_str())
                .set("bottom", inset.as_str())
                .set("height", thickness),
            Axis::Vertical => track_style
                .set("top", inset.as_str())
                .set("right", inset.as_str())
                .set("bottom", inset.as_str())
                .set("width", thickness),
        };
        track_style.insert("display", if displayed { "block" } else { "none" });

        let mut track = Element::div()
            .id(self.track_id.clone())
            .class(format!("{}-bar", props.prefix_cls))
            .class(format!("{}-bar-{}", props.prefix_cls, self.descriptor.name))
            .style(track_style);

        if let Some(size) = props.size {
            let cross = self.descriptor.axis.cross().descriptor();
            track = track.child(
                Element::div()
                    .id(self.thumb_id.clone())
                    .class(format!("{}-bar-thumb", props.prefix_cls))
                    .css(self.descriptor.size_style_property, format!("{size}px"))
                    .css(cross.size_style_property, "100%")
                    .css("transform", self.descriptor.translate(props.move_percent)),
            );
        }

        track
    }

    /// Locate a point on the bar as laid out.
    pub fn hit(&self, layout: &LayoutResult, x: f64, y: f64) -> Option<BarPart> {
        let path = hit_path(layout, &self.render(), x, y);
        match path.last() {
            Some(id) if *id == self.thumb_id => Some(BarPart::Thumb),
            Some(_) => Some(BarPart::Track),
            None => None,
        }
    }

    // -------------------------------------------------------------------------
    // Hover
    // -------------------------------------------------------------------------

    /// Pointer moved inside the scrollbar region. Returns true if the
    /// visibility changed.
    pub fn on_region_move(&self) -> bool {
        self.session.set_cursor_left(false);
        let visible = self.props().is_some_and(|props| props.size.is_some());
        self.set_visible(visible)
    }

    /// Pointer left the scrollbar region. The bar stays visible while any
    /// drag is open.
    pub fn on_region_leave(&self) -> bool {
        self.session.set_cursor_left(true);
        self.set_visible(self.session.is_dragging())
    }

    /// A drag ended. Hides the bar if the pointer is outside the region.
    pub fn on_drag_end(&self) -> bool {
        if self.session.cursor_left() {
            self.set_visible(false)
        } else {
            false
        }
    }

    fn set_visible(&self, visible: bool) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if guard.visible == visible {
            return false;
        }
        guard.visible = visible;
        guard.stale = true;
        true
    }

    // -------------------------------------------------------------------------
    // Pointer
    // -------------------------------------------------------------------------

    /// Press on the track: jump so the thumb is centered on the pointer.
    pub fn on_track_down(
        &self,
        layout: &LayoutResult,
        node: &dyn ScrollNode,
        x: f64,
        y: f64,
    ) -> EventResult {
        let (Some(track), Some(thumb)) = (layout.get(&self.track_id), layout.get(&self.thumb_id))
        else {
            log::trace!("[bar] {} track press without layout", self.track_id);
            return EventResult::Ignored;
        };

        let extent = self.descriptor.offset_extent;
        let pointer = self.descriptor.client_coordinate.of(x, y);
        let offset = (track.edge(self.descriptor.bounds_edge) - pointer).abs();
        let thumb_half = thumb.extent(extent) / 2.0;

        let scroll = geometry::scroll_for_thumb_offset(
            offset - thumb_half,
            self.offset_ratio(),
            track.extent(extent),
            node.scroll_extent(self.descriptor.scroll_extent),
        );
        if let Some(scroll) = scroll {
            log::trace!("[bar] {} track press scrolls to {}", self.track_id, scroll);
            node.set_scroll_position(self.descriptor.scroll_position, scroll);
        }
        EventResult::Consumed
    }

    /// Press on the thumb: open a drag.
    ///
    /// The press never reaches the track, even when it is ignored for a held
    /// modifier or a non-primary button.
    pub fn on_thumb_down(
        &self,
        layout: &LayoutResult,
        document: &Document,
        x: f64,
        y: f64,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> EventResult {
        if !modifiers.none() || !button.is_primary() {
            log::trace!("[bar] {} thumb press ignored ({:?})", self.thumb_id, button);
            return EventResult::Consumed;
        }
        let Some(thumb) = layout.get(&self.thumb_id) else {
            return EventResult::Consumed;
        };

        document.clear_selection();
        let pointer = self.descriptor.client_coordinate.of(x, y);
        let anchor = pointer - thumb.edge(self.descriptor.bounds_edge);

        if self
            .session
            .begin(self.descriptor.axis, anchor, document, &self.track_id)
        {
            EventResult::StartDrag
        } else {
            EventResult::Consumed
        }
    }

    /// Document-level move while this bar's thumb is dragged. Applies
    /// wherever the pointer is.
    pub fn on_document_move(
        &self,
        layout: &LayoutResult,
        node: &dyn ScrollNode,
        x: f64,
        y: f64,
    ) -> EventResult {
        let Some(drag) = self
            .session
            .active()
            .filter(|drag| drag.axis == self.descriptor.axis)
        else {
            return EventResult::Ignored;
        };
        let Some(track) = layout.get(&self.track_id) else {
            log::trace!("[bar] {} drag move without layout", self.track_id);
            return EventResult::Ignored;
        };

        let pointer = self.descriptor.client_coordinate.of(x, y);
        let offset = pointer - track.edge(self.descriptor.bounds_edge);

        let scroll = geometry::scroll_for_thumb_offset(
            offset - drag.anchor,
            self.offset_ratio(),
            track.extent(self.descriptor.offset_extent),
            node.scroll_extent(self.descriptor.scroll_extent),
        );
        if let Some(scroll) = scroll {
            node.set_scroll_position(self.descriptor.scroll_position, scroll);
        }
        EventResult::Consumed
    }

    /// Document-level mouse up: close this bar's drag.
    pub fn on_document_up(&self, document: &Document) -> EventResult {
        let owns_drag = self
            .session
            .active()
            .is_some_and(|drag| drag.axis == self.descriptor.axis);
        if !owns_drag {
            return EventResult::Ignored;
        }

        self.session.end(document);
        self.on_drag_end();
        EventResult::Consumed
    }
}
