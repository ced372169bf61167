//! Box layout for element trees.
//!
//! A small subset of CSS box layout:
//! - `display: none` elements (and their subtrees) are not laid out
//! - flow children stack top to bottom, filling the container's width
//! - an auto height fills the container, unless the element has flow
//!   children, in which case it wraps them (absolutely positioned elements
//!   with both `top` and `bottom` insets keep the height they span)
//! - `position: absolute` elements resolve `top/right/bottom/left` insets
//!   against their parent's box
//! - `width`, `height` and `max-height` accept `px` and `%`
//! - `translateX/Y(p%)` moves the box by a percentage of its own size
//! - children of scroll containers (`overflow: auto|scroll`) belong to the
//!   host's scroll node and are not laid out here

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::Element;
use crate::types::{Display, Position, Style, TransformAxis};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, available, &mut result);
    result
}

/// Lay out one element in the space left in `available` and return its
/// untransformed box. Percentages resolve against the parent's box.
fn layout_element(
    element: &Element,
    available: Rect,
    parent: Rect,
    result: &mut LayoutResult,
) -> Option<Rect> {
    let style = &element.style;
    if style.display() == Display::None {
        return None;
    }

    let mut rect = match style.position() {
        Position::Absolute => absolute_rect(style, parent),
        Position::Static | Position::Relative => flow_rect(style, available, parent),
    };

    let children = element.child_elements();
    let owns_children = !style.overflow().is_scroll_container();

    // Flow children first: an auto height wraps them.
    if owns_children {
        let mut cursor = rect.y;
        let mut any_flow = false;
        for child in children
            .iter()
            .filter(|c| c.style.position() != Position::Absolute)
        {
            let remaining = Rect::new(rect.x, cursor, rect.width, (rect.bottom() - cursor).max(0.0));
            if let Some(child_rect) = layout_element(child, remaining, rect, result) {
                cursor = child_rect.bottom();
                any_flow = true;
            }
        }
        if any_flow && !has_definite_height(style) {
            rect.height = clamp_max(style, cursor - rect.y, parent.height);
        }
    }

    let transformed = match style.translate() {
        Some((TransformAxis::X, percent)) => rect.offset(rect.width * percent / 100.0, 0.0),
        Some((TransformAxis::Y, percent)) => rect.offset(0.0, rect.height * percent / 100.0),
        None => rect,
    };
    result.insert(element.id.clone(), transformed);

    if owns_children {
        for child in children
            .iter()
            .filter(|c| c.style.position() == Position::Absolute)
        {
            layout_element(child, transformed, transformed, result);
        }
    }

    Some(rect)
}

fn flow_rect(style: &Style, available: Rect, parent: Rect) -> Rect {
    let width = style
        .length("width")
        .map(|l| l.resolve(parent.width))
        .unwrap_or(available.width);
    let height = style
        .length("height")
        .map(|l| l.resolve(parent.height))
        .unwrap_or(available.height);
    Rect::new(
        available.x,
        available.y,
        width.max(0.0),
        clamp_max(style, height, parent.height),
    )
}

fn absolute_rect(style: &Style, container: Rect) -> Rect {
    let inset = |property: &str, base: f64| style.length(property).map(|l| l.resolve(base));
    let left = inset("left", container.width);
    let right = inset("right", container.width);
    let top = inset("top", container.height);
    let bottom = inset("bottom", container.height);

    let width = style
        .length("width")
        .map(|l| l.resolve(container.width))
        .unwrap_or_else(|| container.width - left.unwrap_or(0.0) - right.unwrap_or(0.0))
        .max(0.0);
    let height = style
        .length("height")
        .map(|l| l.resolve(container.height))
        .unwrap_or_else(|| container.height - top.unwrap_or(0.0) - bottom.unwrap_or(0.0));
    let height = clamp_max(style, height, container.height);

    let x = match (left, right) {
        (Some(left), _) => container.x + left,
        (None, Some(right)) => container.right() - right - width,
        (None, None) => container.x,
    };
    let y = match (top, bottom) {
        (Some(top), _) => container.y + top,
        (None, Some(bottom)) => container.bottom() - bottom - height,
        (None, None) => container.y,
    };

    Rect::new(x, y, width, height)
}

fn has_definite_height(style: &Style) -> bool {
    style.length("height").is_some()
        || (style.position() == Position::Absolute
            && style.length("top").is_some()
            && style.length("bottom").is_some())
}

fn clamp_max(style: &Style, height: f64, base: f64) -> f64 {
    let height = height.max(0.0);
    match style.length("max-height").map(|l| l.resolve(base)) {
        Some(max) => height.min(max),
        None => height,
    }
}
