use std::fmt;

use serde::Serialize;

use super::Point;
use crate::error::InvalidRectangle;

/// How the touching sides of two adjacent rectangles line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdjacencyKind {
    /// The touching sides coincide over their full length
    Proper,
    /// The touching sides overlap, neither one enclosing the other
    Partial,
    /// One touching side lies strictly inside the other
    Subline,
}

impl fmt::Display for AdjacencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AdjacencyKind::Proper => "PROPER",
            AdjacencyKind::Partial => "PARTIAL",
            AdjacencyKind::Subline => "SUBLINE",
        };
        f.write_str(name)
    }
}

/// An axis-aligned rectangle with strictly positive width and height.
///
/// Boundary tests compare coordinates with `==`. Callers supplying values
/// carrying rounding error will see different classifications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    bottom_left: Point,
    upper_right: Point,
}

impl Rectangle {
    /// Build a rectangle from its bottom-left and upper-right corners.
    pub fn new(bottom_left: Point, upper_right: Point) -> Result<Self, InvalidRectangle> {
        if !Self::is_valid(bottom_left, upper_right) {
            return Err(InvalidRectangle {
                x1: bottom_left.x,
                y1: bottom_left.y,
                x2: upper_right.x,
                y2: upper_right.y,
            });
        }

        Ok(Self {
            bottom_left,
            upper_right,
        })
    }

    /// Build a rectangle from the raw corner coordinates.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, InvalidRectangle> {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Check that the corners are ordered bottom-left to upper-right on both axes
    pub fn is_valid(bottom_left: Point, upper_right: Point) -> bool {
        bottom_left.x < upper_right.x && bottom_left.y < upper_right.y
    }

    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    pub fn upper_right(&self) -> Point {
        self.upper_right
    }

    pub fn width(&self) -> f64 {
        self.upper_right.x - self.bottom_left.x
    }

    pub fn height(&self) -> f64 {
        self.upper_right.y - self.bottom_left.y
    }

    /// Check if the two rectangles share a boundary line on either axis
    pub fn is_adjacent(&self, other: &Rectangle) -> bool {
        self.y_adjacent(other) || self.x_adjacent(other)
    }

    /// Horizontal touch: one rectangle sits on top of the other
    pub fn x_adjacent(&self, other: &Rectangle) -> bool {
        self.bottom_left.y == other.upper_right.y || self.upper_right.y == other.bottom_left.y
    }

    /// Vertical touch: the rectangles sit side by side
    pub fn y_adjacent(&self, other: &Rectangle) -> bool {
        self.bottom_left.x == other.upper_right.x || self.upper_right.x == other.bottom_left.x
    }

    /// Classify the adjacency, first match wins: proper, partial, subline.
    ///
    /// Returns `None` when no rule matches, which includes pairs that are
    /// adjacent but whose touching sides meet in a single point, share exactly
    /// one endpoint, or where `self`'s side lies inside `other`'s.
    pub fn adjacency_kind(&self, other: &Rectangle) -> Option<AdjacencyKind> {
        if self.has_proper_adjacency_with(other) {
            Some(AdjacencyKind::Proper)
        } else if self.has_partial_adjacency_with(other) {
            Some(AdjacencyKind::Partial)
        } else if self.has_subline_adjacency_with(other) {
            Some(AdjacencyKind::Subline)
        } else {
            None
        }
    }

    /// Check if the spans on either axis are identical
    pub fn has_proper_adjacency_with(&self, other: &Rectangle) -> bool {
        Span::y(self) == Span::y(other) || Span::x(self) == Span::x(other)
    }

    /// Check if the spans along the touching sides overlap without either enclosing the other.
    ///
    /// The Y span is used for side-by-side rectangles, the X span for stacked ones.
    pub fn has_partial_adjacency_with(&self, other: &Rectangle) -> bool {
        if self.y_adjacent(other) {
            Span::y(self).straddles(Span::y(other))
        } else if self.x_adjacent(other) {
            Span::x(self).straddles(Span::x(other))
        } else {
            false
        }
    }

    /// Check if this rectangle's span strictly encloses the other's on either axis
    pub fn has_subline_adjacency_with(&self, other: &Rectangle) -> bool {
        Span::y(self).encloses(Span::y(other)) || Span::x(self).encloses(Span::x(other))
    }

    /// Check if this rectangle strictly encloses another, sharing no edge
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.bottom_left.y < other.bottom_left.y
            && self.bottom_left.x < other.bottom_left.x
            && self.upper_right.y > other.upper_right.y
            && self.upper_right.x > other.upper_right.x
    }

    /// Overlapping region of the two rectangles.
    ///
    /// Rectangles that only touch along an edge or at a corner do not intersect.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        if Span::y(self).separated_from(Span::y(other))
            || Span::x(self).separated_from(Span::x(other))
        {
            return None;
        }

        // Both spans overlap with positive length, so the corners stay ordered
        Some(Rectangle {
            bottom_left: Point::new(
                self.bottom_left.x.max(other.bottom_left.x),
                self.bottom_left.y.max(other.bottom_left.y),
            ),
            upper_right: Point::new(
                self.upper_right.x.min(other.upper_right.x),
                self.upper_right.y.min(other.upper_right.y),
            ),
        })
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle: (bottomLeft: x={}, y={}, upperRight: x={}, y={})",
            self.bottom_left.x, self.bottom_left.y, self.upper_right.x, self.upper_right.y
        )
    }
}

/// Extent of a rectangle projected onto one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    low: f64,
    high: f64,
}

impl Span {
    fn x(rect: &Rectangle) -> Self {
        Self {
            low: rect.bottom_left.x,
            high: rect.upper_right.x,
        }
    }

    fn y(rect: &Rectangle) -> Self {
        Self {
            low: rect.bottom_left.y,
            high: rect.upper_right.y,
        }
    }

    /// Strictly crosses exactly one end of `other`
    fn straddles(self, other: Span) -> bool {
        (self.high > other.high && self.low < other.high && self.low > other.low)
            || (self.high > other.low && self.low < other.low && self.high < other.high)
    }

    fn encloses(self, other: Span) -> bool {
        self.high > other.high && self.low < other.low
    }

    fn separated_from(self, other: Span) -> bool {
        self.high <= other.low || self.low >= other.high
    }
}
