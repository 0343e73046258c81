use crate::geometry::{AdjacencyKind, Rectangle};

/// Two rectangles share a boundary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    /// `None` when the pair is adjacent but matches none of the kinds
    pub kind: Option<AdjacencyKind>,
}

/// The first rectangle strictly encloses the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Containment {
    pub container: Rectangle,
    pub containee: Rectangle,
}

/// Relationship between an ordered pair of rectangles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Relationship {
    pub adjacency: Option<Adjacency>,
    pub containment: Option<Containment>,
    pub intersection: Option<Rectangle>,
}

impl Relationship {
    pub fn is_adjacent(&self) -> bool {
        self.adjacency.is_some()
    }

    pub fn is_contained(&self) -> bool {
        self.containment.is_some()
    }

    pub fn is_intersected(&self) -> bool {
        self.intersection.is_some()
    }

    pub fn adjacency_kind(&self) -> Option<AdjacencyKind> {
        self.adjacency.and_then(|a| a.kind)
    }
}
