mod coordinates;
mod loader;

pub use coordinates::Coordinates;
pub use loader::{CoordinateSet, load_coordinates};
pub(crate) use loader::is_supported_file;
