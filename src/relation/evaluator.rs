use log::debug;

use super::{Adjacency, Containment, Relationship};
use crate::geometry::Rectangle;

/// Compute adjacency, containment and intersection between `a` and `b`.
///
/// All three are evaluated independently. Containment is only checked with
/// `a` as the container.
pub fn evaluate(a: Rectangle, b: Rectangle) -> Relationship {
    debug!(
        "Calculating adjacency, intersection and containment between: {} and {}",
        a, b
    );

    let adjacency = a.is_adjacent(&b).then(|| Adjacency {
        kind: a.adjacency_kind(&b),
    });

    let containment = a.contains(&b).then_some(Containment {
        container: a,
        containee: b,
    });

    let intersection = a.intersection(&b);

    if let Some(adj) = adjacency
        && adj.kind.is_none()
    {
        debug!("Adjacent rectangles matched no adjacency kind: {} and {}", a, b);
    }

    Relationship {
        adjacency,
        containment,
        intersection,
    }
}
