use std::sync::{Arc, Mutex};

use lotus_dom::element::find_element;
use lotus_dom::layout::layout;
use lotus_dom::{
    Document, Element, Event, EventResult, LayoutResult, MemoryScrollNode, Modifiers,
    MouseButton, Rect, ScrollNode, ScrollProperty, SelectStart,
};
use lotus_scrollbar::{
    Always, Axis, ScrollEvent, Scrollbar, ScrollbarControl, ScrollbarProps, ScrollbarSize,
};

struct Scene {
    scrollbar: Scrollbar,
    node: MemoryScrollNode,
    viewport: (f64, f64),
}

impl Scene {
    fn new(props: ScrollbarProps, viewport: (f64, f64), content: (f64, f64)) -> Self {
        Self::with_document(props, viewport, content, Document::new())
    }

    fn with_document(
        props: ScrollbarProps,
        viewport: (f64, f64),
        content: (f64, f64),
        document: Document,
    ) -> Self {
        let node = MemoryScrollNode::new(viewport, content);
        let scrollbar = Scrollbar::with_document(props.height(viewport.1), document);
        scrollbar.mount(Arc::new(node.clone()));
        Self {
            scrollbar,
            node,
            viewport,
        }
    }

    /// Viewport 404x404 over 1000px of vertical content: 400px usable, thumb 160.
    fn tall() -> Self {
        Self::new(ScrollbarProps::new(), (404.0, 404.0), (404.0, 1000.0))
    }

    fn render(&self) -> Element {
        self.scrollbar.render([Element::text("p", "item")])
    }

    /// Render, lay out and report the layout back.
    fn frame(&self) -> LayoutResult {
        let tree = self.render();
        let result = layout(&tree, Rect::from_size(self.viewport.0, self.viewport.1));
        self.scrollbar.after_layout(&result);
        result
    }

    /// Hover the region so the bars show, then lay out again.
    fn hovered_frame(&self) -> LayoutResult {
        let result = self.frame();
        self.dispatch(&Event::MouseMove { x: 200.0, y: 200.0 }, &result);
        self.frame()
    }

    fn dispatch(&self, event: &Event, layout: &LayoutResult) -> EventResult {
        self.scrollbar.dispatch(event, layout)
    }

    fn press(&self, x: f64, y: f64, layout: &LayoutResult) -> EventResult {
        self.dispatch(
            &Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
                modifiers: Modifiers::new(),
            },
            layout,
        )
    }

    fn thumb_rect(&self, axis: Axis, layout: &LayoutResult) -> Rect {
        *layout.get(self.scrollbar.bar(axis).thumb_id()).unwrap()
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Measurement
// ============================================================================

#[test]
fn test_thumb_size_from_geometry() {
    let scene = Scene::tall();

    assert_close(scene.scrollbar.size(Axis::Vertical).unwrap(), 160.0);
    assert_close(scene.scrollbar.ratio(Axis::Vertical), 1.0);
    // Content is exactly as wide as the viewport
    assert_eq!(scene.scrollbar.size(Axis::Horizontal), None);
}

#[test]
fn test_no_overflow_has_no_thumb() {
    let scene = Scene::new(ScrollbarProps::new(), (100.0, 100.0), (100.0, 100.0));

    assert_eq!(scene.scrollbar.size(Axis::Vertical), None);
    assert_eq!(scene.scrollbar.size(Axis::Horizontal), None);

    let tree = scene.render();
    for axis in Axis::ALL {
        let bar = scene.scrollbar.bar(axis);
        assert!(find_element(&tree, bar.track_id()).is_some());
        assert!(find_element(&tree, bar.thumb_id()).is_none());
    }

    // Still passed through to the node, which has nowhere to go
    scene.scrollbar.handle().scroll_to(10.0, 10.0);
    assert_eq!(scene.node.offset(), (0.0, 0.0));
}

#[test]
fn test_update_is_idempotent() {
    let scene = Scene::tall();
    scene.scrollbar.handle().set_scroll_top(100.0);

    let geometry = scene.scrollbar.geometry(Axis::Vertical);
    let moved = scene.scrollbar.move_percent(Axis::Vertical);

    scene.scrollbar.update();
    scene.scrollbar.update();

    assert_eq!(scene.scrollbar.geometry(Axis::Vertical), geometry);
    assert_eq!(scene.scrollbar.move_percent(Axis::Vertical), moved);
}

#[test]
fn test_wrapper_resize_remeasures() {
    let scene = Scene::tall();
    let result = scene.frame();

    scene.node.set_content_size(404.0, 2000.0);
    scene.dispatch(&Event::MouseMove { x: 900.0, y: 900.0 }, &result);

    assert_close(scene.scrollbar.size(Axis::Vertical).unwrap(), 80.0);
}

#[test]
fn test_no_resize_ignores_wrapper_resize() {
    let scene = Scene::new(
        ScrollbarProps::new().no_resize(),
        (404.0, 404.0),
        (404.0, 1000.0),
    );
    let result = scene.frame();

    scene.node.set_content_size(404.0, 2000.0);
    scene.dispatch(&Event::MouseMove { x: 900.0, y: 900.0 }, &result);
    assert_close(scene.scrollbar.size(Axis::Vertical).unwrap(), 160.0);

    // A window resize still remeasures
    scene.dispatch(
        &Event::Resize {
            width: 800.0,
            height: 600.0,
        },
        &result,
    );
    assert_close(scene.scrollbar.size(Axis::Vertical).unwrap(), 80.0);
}

#[test]
fn test_offset_ratio_computed_after_layout() {
    let scene = Scene::tall();
    assert_eq!(scene.scrollbar.offset_ratio(Axis::Vertical), 1.0);

    scene.hovered_frame();

    assert_close(scene.scrollbar.offset_ratio(Axis::Vertical), 1.0);
}

#[test]
fn test_offset_ratio_with_floored_thumb() {
    let scene = Scene::new(ScrollbarProps::new(), (404.0, 404.0), (404.0, 100_000.0));
    let result = scene.hovered_frame();

    assert_close(scene.thumb_rect(Axis::Vertical, &result).height, 20.0);
    let ratio = scene.scrollbar.ratio(Axis::Vertical);
    assert_close(
        scene.scrollbar.offset_ratio(Axis::Vertical),
        400.0 * 400.0 / 100_000.0 / ratio / 20.0,
    );
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_structure() {
    let scene = Scene::new(
        ScrollbarProps::new()
            .class_name("custom")
            .wrap_class_name("inner")
            .max_height("50vh"),
        (404.0, 404.0),
        (404.0, 1000.0),
    );

    let tree = scene.render();

    assert!(tree.has_class("l-scrollbar"));
    assert!(tree.has_class("custom"));
    assert!(!tree.has_class("l-scrollbar-small"));
    assert_eq!(tree.style.get("position"), Some("relative"));

    let wrap = find_element(&tree, &scene.scrollbar.wrap_id()).unwrap();
    assert!(wrap.has_class("l-scrollbar-wrap"));
    assert!(wrap.has_class("l-scrollbar-wrap-native-hidden"));
    assert!(wrap.has_class("inner"));
    assert_eq!(wrap.style.get("overflow"), Some("auto"));
    assert_eq!(wrap.style.get("height"), Some("404px"));
    assert_eq!(wrap.style.get("max-height"), Some("50vh"));
    assert_eq!(wrap.child_elements().len(), 1);

    let vertical = find_element(&tree, scene.scrollbar.bar(Axis::Vertical).track_id()).unwrap();
    assert!(vertical.has_class("l-scrollbar-bar"));
    assert!(vertical.has_class("l-scrollbar-bar-vertical"));
    assert_eq!(vertical.style.get("width"), Some("6px"));

    let thumb = &vertical.child_elements()[0];
    assert!(thumb.has_class("l-scrollbar-bar-thumb"));
    assert_eq!(thumb.style.get("height"), Some("160px"));
    assert_eq!(thumb.style.get("transform"), Some("translateY(0%)"));
}

#[test]
fn test_bars_follow_wrapper() {
    let scene = Scene::tall();
    let tree = scene.render();

    let ids: Vec<&str> = tree.child_elements().iter().map(|c| c.id.as_str()).collect();
    let wrap_id = scene.scrollbar.wrap_id();
    assert_eq!(
        ids,
        vec![
            wrap_id.as_str(),
            scene.scrollbar.bar(Axis::Horizontal).track_id(),
            scene.scrollbar.bar(Axis::Vertical).track_id(),
        ]
    );
}

#[test]
fn test_native_renders_no_bars() {
    let scene = Scene::new(ScrollbarProps::new().native(), (404.0, 404.0), (404.0, 1000.0));

    let tree = scene.render();

    assert_eq!(tree.child_elements().len(), 1);
    let wrap = &tree.child_elements()[0];
    assert!(!wrap.has_class("l-scrollbar-wrap-native-hidden"));
}

#[test]
fn test_unmounted_renders_no_bars() {
    let scrollbar = Scrollbar::new(ScrollbarProps::new());

    let tree = scrollbar.render([Element::div()]);

    assert_eq!(tree.child_elements().len(), 1);
}

#[test]
fn test_small_variant() {
    let scene = Scene::new(
        ScrollbarProps::new().size(ScrollbarSize::Small),
        (404.0, 404.0),
        (1000.0, 1000.0),
    );

    let tree = scene.render();

    assert!(tree.has_class("l-scrollbar-small"));
    let horizontal =
        find_element(&tree, scene.scrollbar.bar(Axis::Horizontal).track_id()).unwrap();
    assert_eq!(horizontal.style.get("height"), Some("4px"));
}

#[test]
fn test_custom_prefix() {
    let scene = Scene::new(
        ScrollbarProps::new().prefix_cls("x-sb"),
        (404.0, 404.0),
        (404.0, 1000.0),
    );

    let markup = scene.render().to_markup();

    assert!(markup.contains("class=\"x-sb\""));
    assert!(markup.contains("x-sb-bar-vertical"));
    assert!(markup.contains("x-sb-bar-thumb"));
    assert!(!markup.contains("l-scrollbar"));
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_hover_shows_sized_bars() {
    let scene = Scene::tall();
    let result = scene.frame();
    assert!(!scene.scrollbar.bar_displayed(Axis::Vertical));

    scene.dispatch(&Event::MouseMove { x: 200.0, y: 200.0 }, &result);

    assert!(scene.scrollbar.bar_displayed(Axis::Vertical));
    assert!(!scene.scrollbar.bar_displayed(Axis::Horizontal));

    scene.dispatch(&Event::MouseMove { x: 900.0, y: 200.0 }, &result);

    assert!(!scene.scrollbar.bar_displayed(Axis::Vertical));
}

#[test]
fn test_hidden_bar_is_not_laid_out() {
    let scene = Scene::tall();

    let result = scene.frame();
    assert!(!result.contains_key(scene.scrollbar.bar(Axis::Vertical).track_id()));

    let result = scene.hovered_frame();
    assert!(result.contains_key(scene.scrollbar.bar(Axis::Vertical).track_id()));
}

#[test]
fn test_always_show() {
    let scene = Scene::new(
        ScrollbarProps::new().always(Always::Show),
        (404.0, 404.0),
        (404.0, 1000.0),
    );

    assert!(scene.scrollbar.bar_displayed(Axis::Vertical));
    // Shown without a thumb
    assert!(scene.scrollbar.bar_displayed(Axis::Horizontal));
    let tree = scene.render();
    assert!(find_element(&tree, scene.scrollbar.bar(Axis::Horizontal).thumb_id()).is_none());
}

#[test]
fn test_always_hidden() {
    let scene = Scene::new(
        ScrollbarProps::new().always(Always::Hidden),
        (404.0, 404.0),
        (404.0, 1000.0),
    );

    scene.hovered_frame();

    assert!(!scene.scrollbar.bar_displayed(Axis::Vertical));
}

#[test]
fn test_dirty_flag() {
    let scene = Scene::tall();
    assert!(scene.scrollbar.is_dirty());
    scene.scrollbar.clear_dirty();

    let result = scene.frame();
    scene.dispatch(&Event::MouseMove { x: 200.0, y: 200.0 }, &result);

    assert!(scene.scrollbar.is_dirty());
}

// ============================================================================
// Thumb Drag
// ============================================================================

#[test]
fn test_drag_scrolls_content() {
    let scene = Scene::tall();
    let result = scene.hovered_frame();

    // Thumb spans 2..162; grab it 48px below its top edge
    assert_eq!(scene.press(399.0, 50.0, &result), EventResult::StartDrag);
    assert!(scene.scrollbar.is_dragging());

    let moved = scene.dispatch(&Event::MouseMove { x: 399.0, y: 98.0 }, &result);

    assert_eq!(moved, EventResult::Consumed);
    assert_close(scene.node.offset().1, 120.0);
    assert_close(scene.scrollbar.move_percent(Axis::Vertical), 30.0);
}

#[test]
fn test_drag_matches_direct_set() {
    let dragged = Scene::tall();
    let result = dragged.hovered_frame();
    dragged.press(399.0, 50.0, &result);
    dragged.dispatch(&Event::MouseMove { x: 399.0, y: 98.0 }, &result);

    let direct = Scene::tall();
    direct.scrollbar.handle().set_scroll_top(dragged.node.offset().1);

    assert_close(
        direct.scrollbar.move_percent(Axis::Vertical),
        dragged.scrollbar.move_percent(Axis::Vertical),
    );
    let result = dragged.frame();
    let thumb = dragged.thumb_rect(Axis::Vertical, &result);
    // The grab point follows the pointer
    assert_close(thumb.y + 48.0, 98.0);
}

#[test]
fn test_drag_outside_every_element_still_scrolls() {
    let scene = Scene::tall();
    let result = scene.hovered_frame();
    scene.press(399.0, 50.0, &result);

    scene.dispatch(&Event::MouseMove { x: 1000.0, y: 5000.0 }, &result);

    // Clamped by the node
    assert_close(scene.node.offset().1, 596.0);
    // Leaving the region mid-drag keeps the bar up
    assert!(scene.scrollbar.bar_displayed(Axis::Vertical));

    scene.dispatch(&Event::MouseMove { x: 1000.0, y: -5000.0 }, &result);
    assert_eq!(scene.node.offset().1, 0.0);
}

#[test]
fn test_mouse_up_ends_drag_and_hides_when_left() {
    let scene = Scene::tall();
    let result = scene.hovered_frame();
    scene.press(399.0, 50.0, &result);
    scene.dispatch(&Event::MouseMove { x: 1000.0, y: 300.0 }, &result);

    let up = scene.dispatch(
        &Event::MouseUp {
            x: 1000.0,
            y: 300.0,
            button: MouseButton::Left,
        },
        &result,
    );

    assert_eq!(up, EventResult::Consumed);
    assert!(!scene.scrollbar.is_dragging());
    assert!(!scene.scrollbar.bar_displayed(Axis::Vertical));

    // Moves after the drag no longer scroll
    let offset = scene.node.offset();
    scene.dispatch(&Event::MouseMove { x: 399.0, y: 10.0 }, &result);
    assert_eq!(scene.node.offset(), offset);
}

#[test]
fn test_mouse_up_inside_keeps_bar() {
    let scene = Scene::tall();
    let result = scene.hovered_frame();
    scene.press(399.0, 50.0, &result);

    scene.dispatch(
        &Event::MouseUp {
            x: 399.0,
            y: 50.0,
            button: MouseButton::Left,
        },
        &result,
    );

    assert!(scene.scrollbar.bar_displayed(Axis::Vertical));
}

#[test]
fn test_drag_suppresses_selection_and_restores() {
    let scene = Scene::tall();
    let document = scene.scrollbar.document().clone();
    let result = scene.hovered_frame();
    document.select("some text");

    scene.press(399.0, 50.0, &result);

    assert_eq!(document.selection(), None);
    assert_eq!(document.select_start(), SelectStart::Suppress);
    assert_eq!(document.listener_count(), 2);

    scene.dispatch(
        &Event::MouseUp {
            x: 0.0,
            y: 0.0,
            button: MouseButton::Left,
        },
        &result,
    );

    assert_eq!(document.select_start(), SelectStart::Allow);
    assert_eq!(document.listener_count(), 0);
}

#[test]
fn test_mount_restores_select_start() {
    let document = Document::new();
    let node = MemoryScrollNode::new((404.0, 404.0), (404.0, 1000.0));
    let scrollbar = Scrollbar::with_document(ScrollbarProps::new(), document.clone());

    document.set_select_start(SelectStart::Suppress);
    scrollbar.mount(Arc::new(node));

    assert_eq!(document.select_start(), SelectStart::Allow);
}

#[test]
fn test_modified_press_is_ignored() {
    let scene = Scene::tall();
    let result = scene.hovered_frame();

    for (button, modifiers) in [
        (MouseButton::Left, Modifiers::shift()),
        (MouseButton::Left, Modifiers::ctrl()),
        (MouseButton::Right, Modifiers::new()),
        (MouseButton::Middle, Modifiers::new()),
    ] {
        let outcome = scene.dispatch(
            &Event::MouseDown {
                x: 399.0,
                y: 50.0,
                button,
                modifiers,
            },
            &result,
        );

        // Swallowed by the thumb without reaching the track
        assert_eq!(outcome, EventResult::Consumed);
        assert!(!scene.scrollbar.is_dragging());
        assert_eq!(scene.node.offset(), (0.0, 0.0));
    }
    assert_eq!(scene.scrollbar.document().listener_count(), 0);
}

#[test]
fn test_second_press_ignored_while_dragging() {
    let scene = Scene::new(ScrollbarProps::new(), (404.0, 404.0), (1000.0, 1000.0));
    let result = scene.hovered_frame();

    assert_eq!(scene.press(399.0, 50.0, &result), EventResult::StartDrag);
    // Horizontal thumb spans x 2..162 along the bottom edge
    assert_eq!(scene.press(50.0, 399.0, &result), EventResult::Consumed);

    let document = scene.scrollbar.document();
    assert_eq!(document.listener_count(), 2);

    scene.dispatch(&Event::MouseMove { x: 300.0, y: 98.0 }, &result);
    assert_eq!(scene.node.offset().0, 0.0);
    assert_close(scene.node.offset().1, 120.0);
}

#[test]
fn test_horizontal_drag() {
    let scene = Scene::new(ScrollbarProps::new(), (404.0, 404.0), (1000.0, 404.0));
    let result = scene.hovered_frame();
    assert_eq!(scene.thumb_rect(Axis::Horizontal, &result).x, 2.0);

    assert_eq!(scene.press(50.0, 399.0, &result), EventResult::StartDrag);
    scene.dispatch(&Event::MouseMove { x: 90.0, y: 399.0 }, &result);

    assert_close(scene.node.offset().0, 100.0);
    assert_close(scene.scrollbar.move_percent(Axis::Horizontal), 25.0);
}

// ============================================================================
// Track Click
// ============================================================================

#[test]
fn test_track_click_centers_thumb() {
    let scene = Scene::tall();
    let result = scene.hovered_frame();

    let outcome = scene.press(399.0, 300.0, &result);

    assert_eq!(outcome, EventResult::Consumed);
    assert!(!scene.scrollbar.is_dragging());
    assert_close(scene.node.offset().1, 545.0);

    let result = scene.frame();
    let thumb = scene.thumb_rect(Axis::Vertical, &result);
    assert_close(thumb.y + thumb.height / 2.0, 300.0);
}

#[test]
fn test_press_outside_bars_is_ignored() {
    let scene = Scene::tall();
    let result = scene.hovered_frame();

    assert_eq!(scene.press(100.0, 100.0, &result), EventResult::Ignored);
    assert_eq!(scene.node.offset(), (0.0, 0.0));
}

// ============================================================================
// Scroll Synchronization
// ============================================================================

#[test]
fn test_native_scroll_event_syncs() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let scene = Scene::new(
        ScrollbarProps::new().on_scroll(move |event| sink.lock().unwrap().push(event)),
        (404.0, 404.0),
        (404.0, 1000.0),
    );
    let result = scene.frame();

    // Host-driven scroll, e.g. the mouse wheel
    scene.node.set_scroll_position(ScrollProperty::ScrollTop, 200.0);
    let outcome = scene.dispatch(
        &Event::Scroll {
            target: scene.scrollbar.wrap_id(),
        },
        &result,
    );

    assert_eq!(outcome, EventResult::Consumed);
    assert_close(scene.scrollbar.move_percent(Axis::Vertical), 50.0);
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_scroll_callback_payload() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let scene = Scene::new(
        ScrollbarProps::new().on_scroll(move |event| sink.lock().unwrap().push(event)),
        (404.0, 404.0),
        (1000.0, 1000.0),
    );
    assert!(events.lock().unwrap().is_empty(), "mount is quiet");

    let handle = scene.scrollbar.handle();
    handle.set_scroll_top(50.0);
    handle.set_scroll_left(30.0);
    // Unchanged position: no native scroll, no callback
    handle.set_scroll_top(50.0);

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            ScrollEvent {
                scroll_top: 50.0,
                scroll_left: 0.0,
            },
            ScrollEvent {
                scroll_top: 50.0,
                scroll_left: 30.0,
            },
        ]
    );
}

#[test]
fn test_callback_can_use_handle() {
    let scene = Scene::tall();
    let handle = scene.scrollbar.handle();
    let inner = handle.clone();
    scene.scrollbar.set_props(
        ScrollbarProps::new()
            .height(404)
            .on_scroll(move |event| {
                if event.scroll_top > 500.0 {
                    inner.set_scroll_top(500.0);
                }
            }),
    );

    handle.set_scroll_top(590.0);

    assert_eq!(scene.node.offset().1, 500.0);
    assert_close(scene.scrollbar.move_percent(Axis::Vertical), 125.0);
}

// ============================================================================
// Control Handle
// ============================================================================

#[test]
fn test_set_scroll_left_writes_horizontal() {
    let scene = Scene::new(ScrollbarProps::new(), (404.0, 404.0), (1000.0, 1000.0));

    scene.scrollbar.handle().set_scroll_left(100.0);

    assert_eq!(scene.node.offset(), (100.0, 0.0));
    assert_close(scene.scrollbar.move_percent(Axis::Horizontal), 25.0);
    assert_eq!(scene.scrollbar.move_percent(Axis::Vertical), 0.0);
}

#[test]
fn test_scroll_to_and_set_scroll_top() {
    let scene = Scene::new(ScrollbarProps::new(), (404.0, 404.0), (1000.0, 1000.0));
    let handle = scene.scrollbar.handle();

    handle.scroll_to(40.0, 80.0);
    assert_eq!(scene.node.offset(), (40.0, 80.0));
    assert_close(scene.scrollbar.move_percent(Axis::Vertical), 20.0);

    handle.set_scroll_top(200.0);
    assert_eq!(scene.node.offset(), (40.0, 200.0));
}

#[test]
fn test_non_finite_input_is_ignored() {
    let scene = Scene::new(ScrollbarProps::new(), (404.0, 404.0), (1000.0, 1000.0));
    let handle = scene.scrollbar.handle();
    handle.scroll_to(10.0, 20.0);

    handle.set_scroll_top(f64::NAN);
    handle.set_scroll_left(f64::INFINITY);
    handle.scroll_to(f64::NAN, 50.0);
    handle.scroll_to(50.0, f64::NEG_INFINITY);

    assert_eq!(scene.node.offset(), (10.0, 20.0));
}

#[test]
fn test_handle_without_mount_is_noop() {
    let scrollbar = Scrollbar::new(ScrollbarProps::new());
    let handle = scrollbar.handle();

    handle.scroll_to(10.0, 10.0);
    handle.set_scroll_top(10.0);
    handle.set_scroll_left(10.0);
    handle.update();
    handle.on_scroll();

    assert!(!scrollbar.is_mounted());
    assert_eq!(scrollbar.geometry(Axis::Vertical), None);
    assert_eq!(scrollbar.move_percent(Axis::Vertical), 0.0);
}

#[test]
fn test_unmount_detaches() {
    let scene = Scene::tall();
    let handle = scene.scrollbar.handle();

    scene.scrollbar.unmount();
    handle.set_scroll_top(100.0);

    assert_eq!(scene.node.offset(), (0.0, 0.0));
    assert_eq!(
        scene.dispatch(&Event::MouseMove { x: 1.0, y: 1.0 }, &LayoutResult::new()),
        EventResult::Ignored
    );
}

#[test]
fn test_handle_on_scroll_resyncs() {
    let scene = Scene::tall();

    // Written behind the scrollbar's back, no event delivered
    scene.node.set_scroll_position(ScrollProperty::ScrollTop, 100.0);
    assert_eq!(scene.scrollbar.move_percent(Axis::Vertical), 0.0);

    scene.scrollbar.handle().on_scroll();

    assert_close(scene.scrollbar.move_percent(Axis::Vertical), 25.0);
}

#[test]
fn test_handle_update_after_content_change() {
    let scene = Scene::new(
        ScrollbarProps::new().no_resize(),
        (404.0, 404.0),
        (404.0, 1000.0),
    );

    scene.node.set_content_size(404.0, 2000.0);
    scene.scrollbar.handle().update();

    assert_close(scene.scrollbar.size(Axis::Vertical).unwrap(), 80.0);
    assert_eq!(scene.node.scroll_extent(lotus_dom::Extent::Height), 2000.0);
}
