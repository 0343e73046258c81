use std::fmt;

use serde::Serialize;

/// A point on the plane.
///
/// Equality is exact component-wise comparison with no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-1.0, 2.5).to_string(), "(-1, 2.5)");
    }

    #[test]
    fn test_exact_equality() {
        assert_eq!(Point::from((0.3, 1.0)), Point::new(0.3, 1.0));
        assert_ne!(Point::new(0.1 + 0.2, 1.0), Point::new(0.3, 1.0));
    }
}
