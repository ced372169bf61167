//! Headless walkthrough of the scrollbar variants.
//!
//! Each section mounts a scrollbar over an in-memory scroll node, drives it
//! with pointer events and prints the resulting state. Debug logs go to
//! `scrollbar.log`.

use std::fs::File;
use std::sync::Arc;

use lotus_dom::element::find_element;
use lotus_dom::layout::layout;
use lotus_dom::{Element, Event, LayoutResult, MemoryScrollNode, Modifiers, MouseButton, Rect};
use lotus_scrollbar::{Axis, Scrollbar, ScrollbarControl, ScrollbarProps, ScrollbarSize};
use simplelog::{Config, LevelFilter, WriteLogger};

const ITEM_HEIGHT: f64 = 60.0;

fn items(count: usize) -> Vec<Element> {
    (1..=count)
        .map(|index| Element::text("p", index.to_string()).class("scrollbar-demo-item"))
        .collect()
}

fn frame(scrollbar: &Scrollbar, count: usize, viewport: (f64, f64)) -> LayoutResult {
    let tree = scrollbar.render(items(count));
    let result = layout(&tree, Rect::from_size(viewport.0, viewport.1));
    scrollbar.after_layout(&result);
    result
}

fn report(title: &str, scrollbar: &Scrollbar) {
    println!("{title}");
    for axis in Axis::ALL {
        match scrollbar.size(axis) {
            Some(size) => println!(
                "  {:<10} thumb {:>6.1}px at {:>6.1}%{}",
                axis.name(),
                size,
                scrollbar.move_percent(axis),
                if scrollbar.bar_displayed(axis) { " (shown)" } else { "" },
            ),
            None => println!("  {:<10} no overflow", axis.name()),
        }
    }
}

fn basic() {
    let viewport = (404.0, 404.0);
    let count = 20;
    let node = MemoryScrollNode::new(viewport, (viewport.0, count as f64 * ITEM_HEIGHT));
    let scrollbar = Scrollbar::new(
        ScrollbarProps::new()
            .height(400)
            .on_scroll(|event| println!("  on_scroll top={} left={}", event.scroll_top, event.scroll_left)),
    );
    scrollbar.mount(Arc::new(node));

    let result = frame(&scrollbar, count, viewport);
    scrollbar.dispatch(&Event::MouseMove { x: 200.0, y: 200.0 }, &result);
    let result = frame(&scrollbar, count, viewport);
    report("basic: hovered", &scrollbar);

    // Grab the thumb and drag it down 100px
    scrollbar.dispatch(
        &Event::MouseDown {
            x: 399.0,
            y: 20.0,
            button: MouseButton::Left,
            modifiers: Modifiers::new(),
        },
        &result,
    );
    scrollbar.dispatch(&Event::MouseMove { x: 399.0, y: 120.0 }, &result);
    scrollbar.dispatch(
        &Event::MouseUp {
            x: 399.0,
            y: 120.0,
            button: MouseButton::Left,
        },
        &result,
    );
    report("basic: after drag", &scrollbar);

    scrollbar.handle().scroll_to(0.0, 0.0);
    println!("{}", scrollbar.render(items(2)).to_markup());
}

fn horizontal() {
    let viewport = (404.0, 120.0);
    let node = MemoryScrollNode::new(viewport, (50.0 * 110.0, viewport.1));
    let scrollbar = Scrollbar::new(ScrollbarProps::new());
    scrollbar.mount(Arc::new(node));

    scrollbar.handle().set_scroll_left(1200.0);
    report("horizontal: scrolled right", &scrollbar);
}

fn max_height() {
    let viewport = (404.0, 404.0);
    let node = MemoryScrollNode::new(viewport, (viewport.0, 3.0 * ITEM_HEIGHT));
    let scrollbar = Scrollbar::new(ScrollbarProps::new().max_height(400));
    scrollbar.mount(Arc::new(node.clone()));
    report("max-height: 3 items", &scrollbar);

    // Adding items grows the content; the wrapper reports a resize
    let result = frame(&scrollbar, 10, viewport);
    node.set_content_size(viewport.0, 10.0 * ITEM_HEIGHT);
    scrollbar.dispatch(&Event::MouseMove { x: 10.0, y: 10.0 }, &result);
    report("max-height: 10 items", &scrollbar);
}

fn sizes() {
    for size in [ScrollbarSize::Default, ScrollbarSize::Small] {
        let viewport = (404.0, 404.0);
        let node = MemoryScrollNode::new(viewport, (viewport.0, 20.0 * ITEM_HEIGHT));
        let scrollbar = Scrollbar::new(ScrollbarProps::new().height(400).size(size));
        scrollbar.mount(Arc::new(node));

        let tree = scrollbar.render(items(20));
        let track = find_element(&tree, scrollbar.bar(Axis::Vertical).track_id());
        println!(
            "size {:?}: classes {:?}, track width {:?}",
            size,
            tree.classes,
            track.and_then(|t| t.style.get("width")),
        );
    }
}

fn main() {
    if let Ok(log_file) = File::create("scrollbar.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    basic();
    horizontal();
    max_height();
    sizes();
}
