/// Box dimension along one axis.
///
/// Used both for rendered sizes (offsetWidth/offsetHeight) and for total
/// scrollable sizes (scrollWidth/scrollHeight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    Width,
    Height,
}

/// Leading edge of a bounding rect along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
}

/// Scroll offset property of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollProperty {
    ScrollLeft,
    ScrollTop,
}

/// Pointer coordinate carried by mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientCoordinate {
    ClientX,
    ClientY,
}

impl ClientCoordinate {
    /// Pick this coordinate out of an `(x, y)` pointer position.
    pub fn of(self, x: f64, y: f64) -> f64 {
        match self {
            Self::ClientX => x,
            Self::ClientY => y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformAxis {
    X,
    Y,
}

impl TransformAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

impl Display {
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "none" => Self::None,
            _ => Self::Block,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
}

impl Position {
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "relative" => Self::Relative,
            "absolute" => Self::Absolute,
            _ => Self::Static,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

impl Overflow {
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "hidden" => Self::Hidden,
            "scroll" => Self::Scroll,
            "auto" => Self::Auto,
            _ => Self::Visible,
        }
    }

    /// Whether the element clips and scrolls its children.
    pub fn is_scroll_container(self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }
}

/// A resolved CSS length. Units other than `px` and `%` are not interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(number) = value.strip_suffix("px") {
            return number.trim().parse().ok().map(Self::Px);
        }
        if let Some(number) = value.strip_suffix('%') {
            return number.trim().parse().ok().map(Self::Percent);
        }
        // Bare numbers are only valid CSS for zero.
        match value.parse::<f64>() {
            Ok(number) if number == 0.0 => Some(Self::Px(0.0)),
            _ => None,
        }
    }

    /// Resolve against the size of the containing block.
    pub fn resolve(self, base: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(percent) => base * percent / 100.0,
        }
    }
}
