use super::{Display, Length, Overflow, Position, TransformAxis};

/// Inline style of an element: an ordered list of CSS declarations.
///
/// Setting a property that is already present replaces its value in place,
/// so serialization order follows first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self.declarations.iter().position(|(p, _)| p == property)?;
        Some(self.declarations.remove(index).1)
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Apply `other` on top of this style; its declarations win.
    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in &other.declarations {
            self.insert(property.clone(), value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    // Typed accessors used by layout

    pub fn length(&self, property: &str) -> Option<Length> {
        self.get(property).and_then(Length::parse)
    }

    pub fn display(&self) -> Display {
        self.get("display").map(Display::from_css).unwrap_or_default()
    }

    pub fn position(&self) -> Position {
        self.get("position").map(Position::from_css).unwrap_or_default()
    }

    pub fn overflow(&self) -> Overflow {
        self.get("overflow").map(Overflow::from_css).unwrap_or_default()
    }

    pub fn translate(&self) -> Option<(TransformAxis, f64)> {
        self.get("transform").and_then(parse_translate)
    }

    /// Serialize as inline CSS text (`a: b; c: d`).
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Parse a single-axis percentage translation such as `translateY(12.5%)`.
pub fn parse_translate(value: &str) -> Option<(TransformAxis, f64)> {
    let rest = value.trim().strip_prefix("translate")?;
    let (axis, rest) = match rest.chars().next()? {
        'X' => (TransformAxis::X, &rest[1..]),
        'Y' => (TransformAxis::Y, &rest[1..]),
        _ => return None,
    };
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    match Length::parse(inner)? {
        Length::Percent(percent) => Some((axis, percent)),
        Length::Px(_) => None,
    }
}
