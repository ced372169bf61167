mod enums;
mod style;

pub use enums::{
    ClientCoordinate, Display, Edge, Extent, Length, Overflow, Position, ScrollProperty,
    TransformAxis,
};
pub use style::{parse_translate, Style};
