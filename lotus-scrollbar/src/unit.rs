//! CSS length formatting for numeric-or-string size props.

/// A size prop: a number of pixels, or a CSS length string used verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Format a size prop as a CSS length.
///
/// Absent, zero and empty values yield an empty string. Numbers get
/// `default_unit` appended; strings pass through unchanged.
pub fn add_unit(value: Option<&Dimension>, default_unit: &str) -> String {
    match value {
        Some(Dimension::Number(number)) if *number != 0.0 && !number.is_nan() => {
            format!("{number}{default_unit}")
        }
        Some(Dimension::Text(text)) => text.clone(),
        _ => String::new(),
    }
}
