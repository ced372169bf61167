use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest element at the given coordinates.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: f64, y: f64) -> Option<String> {
    hit_path(layout, root, x, y).pop()
}

/// Ids from `root` down to the deepest element containing the point.
///
/// Elements missing from the layout (not displayed, or owned by a scroll
/// node) are never hit. Empty if the point is outside `root`.
pub fn hit_path(layout: &LayoutResult, root: &Element, x: f64, y: f64) -> Vec<String> {
    let mut path = Vec::new();
    hit_element(layout, root, x, y, &mut path);
    path
}

fn hit_element(
    layout: &LayoutResult,
    element: &Element,
    x: f64,
    y: f64,
    path: &mut Vec<String>,
) -> bool {
    let Some(rect) = layout.get(&element.id) else {
        return false;
    };

    // Transformed children may overflow their parent, so descend first
    if let Content::Children(children) = &element.content {
        // Last rendered = on top
        for child in children.iter().rev() {
            let mut child_path = Vec::new();
            if hit_element(layout, child, x, y, &mut child_path) {
                path.push(element.id.clone());
                path.append(&mut child_path);
                return true;
            }
        }
    }

    if rect.contains(x, y) {
        path.push(element.id.clone());
        true
    } else {
        false
    }
}
