pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod scroll;
pub mod types;

pub use document::{Document, ListenerId, ListenerKind, SelectStart};
pub use element::Element;
pub use event::{Event, EventResult, Modifiers, MouseButton};
pub use hit::{hit_path, hit_test};
pub use layout::{LayoutResult, Rect};
pub use scroll::{MemoryScrollNode, ScrollNode};
pub use types::*;
