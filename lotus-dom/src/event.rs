use crossterm::event::{Event as CrosstermEvent, MouseEventKind};

/// Pointer and window events, in CSS pixel coordinates.
///
/// Mouse events carry no target: components locate themselves in the
/// `LayoutResult` they were laid out with. Moves are delivered whether or not
/// a button is held, so a component that owns a drag keeps receiving them
/// after the pointer leaves its bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed
    MouseDown {
        x: f64,
        y: f64,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// Mouse moved (with or without a held button)
    MouseMove { x: f64, y: f64 },
    /// Mouse button released
    MouseUp {
        x: f64,
        y: f64,
        button: MouseButton,
    },
    /// A scroll container's position changed
    Scroll { target: String },
    /// Window resized
    Resize { width: f64, height: f64 },
}

/// Key modifiers held during a mouse event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn is_primary(self) -> bool {
        self == Self::Left
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag operation.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

// Conversion from crossterm types

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            meta: mods.contains(KeyModifiers::SUPER) || mods.contains(KeyModifiers::META),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Translate a terminal event into pixel space.
///
/// `cell_size` is the `(width, height)` of one terminal cell in pixels; the
/// pointer is placed at the center of the reported cell. Wheel input is left
/// to the host, which scrolls its nodes directly.
pub fn translate(raw: &CrosstermEvent, cell_size: (f64, f64)) -> Option<Event> {
    let (cell_width, cell_height) = cell_size;
    match raw {
        CrosstermEvent::Mouse(mouse_event) => {
            let x = (mouse_event.column as f64 + 0.5) * cell_width;
            let y = (mouse_event.row as f64 + 0.5) * cell_height;

            match mouse_event.kind {
                MouseEventKind::Down(button) => Some(Event::MouseDown {
                    x,
                    y,
                    button: button.into(),
                    modifiers: mouse_event.modifiers.into(),
                }),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Event::MouseMove { x, y }),
                MouseEventKind::Up(button) => Some(Event::MouseUp {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::ScrollUp
                | MouseEventKind::ScrollDown
                | MouseEventKind::ScrollLeft
                | MouseEventKind::ScrollRight => None,
            }
        }
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width as f64 * cell_width,
            height: *height as f64 * cell_height,
        }),
        _ => None,
    }
}
