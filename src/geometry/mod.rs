mod point;
mod rect;

pub use point::Point;
pub use rect::{AdjacencyKind, Rectangle};
