use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: &'static str,

    // Styling hooks
    pub classes: Vec<String>,
    pub style: Style,

    // Content
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div",
            classes: Vec::new(),
            style: Style::default(),
            content: Content::None,
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn text(tag: &'static str, content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes

    /// Add a class name. Empty names are dropped.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() && !self.classes.contains(&name) {
            self.classes.push(name);
        }
        self
    }

    pub fn class_if(self, name: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.class(name)
        } else {
            self
        }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    // Style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn css(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property, value);
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Serialize the tree as HTML-like markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        out.push_str(&format!(" id=\"{}\"", escape(&self.id)));
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape(&self.classes.join(" "))));
        }
        if !self.style.is_empty() {
            out.push_str(&format!(" style=\"{}\"", escape(&self.style.to_css())));
        }
        out.push('>');
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(&escape(text)),
            Content::Children(children) => {
                for child in children {
                    child.write_markup(out);
                }
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
