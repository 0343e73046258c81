pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod output;
pub mod relation;

pub use batch::{BatchEntry, BatchEvaluator};
pub use cli::{CliArgs, Command, ReportFormat};
pub use error::{CoordinateError, InvalidRectangle, RectanglesError};
pub use geometry::{AdjacencyKind, Point, Rectangle};
pub use input::Coordinates;
pub use relation::{Adjacency, Containment, Relationship, evaluate};
