//! Scrollbar configuration.

use std::fmt;
use std::sync::Arc;

use lotus_dom::Style;
use thiserror::Error;

use crate::axis::DEFAULT_MIN_SIZE;
use crate::unit::Dimension;

/// Forced bar visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Always {
    /// Bars are shown even when the pointer is elsewhere.
    Show,
    /// Bars are never shown.
    Hidden,
}

/// Bar thickness variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollbarSize {
    Small,
    #[default]
    Default,
}

impl ScrollbarSize {
    /// Track thickness in pixels.
    pub fn thickness(self) -> f64 {
        match self {
            ScrollbarSize::Small => 4.0,
            ScrollbarSize::Default => 6.0,
        }
    }
}

/// Payload of the scroll callback.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollEvent {
    pub scroll_top: f64,
    pub scroll_left: f64,
}

pub type ScrollCallback = Arc<dyn Fn(ScrollEvent) + Send + Sync>;

/// Properties of a [`Scrollbar`](crate::Scrollbar).
#[derive(Clone)]
pub struct ScrollbarProps {
    /// Class name prefix for every element the scrollbar renders.
    pub prefix_cls: String,
    /// Extra class on the root element.
    pub class_name: Option<String>,
    /// Inline style of the root element.
    pub style: Style,
    /// Wrapper height. Numbers are pixels.
    pub height: Option<Dimension>,
    /// Wrapper max height. Numbers are pixels.
    pub max_height: Option<Dimension>,
    /// Keep the native scrollbars and render no custom bars.
    pub native: bool,
    pub wrap_class_name: Option<String>,
    pub wrap_style: Style,
    /// Ignore wrapper resize notifications.
    pub no_resize: bool,
    pub always: Option<Always>,
    pub size: ScrollbarSize,
    /// Minimum thumb length in pixels.
    pub min_size: f64,
    pub on_scroll: Option<ScrollCallback>,
}

impl fmt::Debug for ScrollbarProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollbarProps")
            .field("prefix_cls", &self.prefix_cls)
            .field("class_name", &self.class_name)
            .field("style", &self.style)
            .field("height", &self.height)
            .field("max_height", &self.max_height)
            .field("native", &self.native)
            .field("wrap_class_name", &self.wrap_class_name)
            .field("wrap_style", &self.wrap_style)
            .field("no_resize", &self.no_resize)
            .field("always", &self.always)
            .field("size", &self.size)
            .field("min_size", &self.min_size)
            .field("on_scroll", &self.on_scroll.as_ref().map(|_| "Fn(ScrollEvent)"))
            .finish()
    }
}

impl Default for ScrollbarProps {
    fn default() -> Self {
        Self {
            prefix_cls: "l-scrollbar".to_string(),
            class_name: None,
            style: Style::default(),
            height: None,
            max_height: None,
            native: false,
            wrap_class_name: None,
            wrap_style: Style::default(),
            no_resize: false,
            always: None,
            size: ScrollbarSize::default(),
            min_size: DEFAULT_MIN_SIZE,
            on_scroll: None,
        }
    }
}

impl ScrollbarProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix_cls(mut self, prefix: impl Into<String>) -> Self {
        self.prefix_cls = prefix.into();
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn max_height(mut self, max_height: impl Into<Dimension>) -> Self {
        self.max_height = Some(max_height.into());
        self
    }

    pub fn native(mut self) -> Self {
        self.native = true;
        self
    }

    pub fn wrap_class_name(mut self, class: impl Into<String>) -> Self {
        self.wrap_class_name = Some(class.into());
        self
    }

    pub fn wrap_style(mut self, style: Style) -> Self {
        self.wrap_style = style;
        self
    }

    pub fn no_resize(mut self) -> Self {
        self.no_resize = true;
        self
    }

    pub fn always(mut self, always: Always) -> Self {
        self.always = Some(always);
        self
    }

    pub fn size(mut self, size: ScrollbarSize) -> Self {
        self.size = size;
        self
    }

    pub fn min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the callback invoked after every scroll synchronization.
    pub fn on_scroll(mut self, callback: impl Fn(ScrollEvent) + Send + Sync + 'static) -> Self {
        self.on_scroll = Some(Arc::new(callback));
        self
    }

    /// Check the props for values the scrollbar cannot measure with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix_cls.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if !self.min_size.is_finite() || self.min_size < 0.0 {
            return Err(ConfigError::InvalidMinSize(self.min_size));
        }
        for (property, value) in [("height", &self.height), ("max-height", &self.max_height)] {
            if let Some(Dimension::Number(number)) = value
                && (!number.is_finite() || *number < 0.0)
            {
                return Err(ConfigError::InvalidLength {
                    property,
                    value: *number,
                });
            }
        }
        Ok(())
    }
}

/// Errors reported by [`ScrollbarProps::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Minimum thumb size must be a finite, non-negative number (got {0})")]
    InvalidMinSize(f64),

    #[error("Invalid {property} '{value}': must be a finite, non-negative number")]
    InvalidLength { property: &'static str, value: f64 },

    #[error("Class prefix must not be empty")]
    EmptyPrefix,
}
