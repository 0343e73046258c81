mod evaluator;
mod types;

pub use crate::geometry::AdjacencyKind;
pub use evaluator::evaluate;
pub use types::{Adjacency, Containment, Relationship};
