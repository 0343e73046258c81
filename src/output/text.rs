use crate::relation::Relationship;

/// Render a relationship as human-readable lines
pub fn relationship_to_text(rel: &Relationship) -> String {
    let mut out = String::new();

    match rel.adjacency.map(|adj| adj.kind) {
        Some(Some(kind)) => out.push_str(&format!("adjacent: yes ({})\n", kind)),
        Some(None) => out.push_str("adjacent: yes (unclassified)\n"),
        None => out.push_str("adjacent: no\n"),
    }

    match &rel.containment {
        Some(c) => out.push_str(&format!(
            "contained: yes\n  container: {}\n  containee: {}\n",
            c.container, c.containee
        )),
        None => out.push_str("contained: no\n"),
    }

    match &rel.intersection {
        Some(r) => out.push_str(&format!("intersected: yes\n  intersection: {}\n", r)),
        None => out.push_str("intersected: no\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;
    use crate::relation::evaluate;

    fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rectangle {
        Rectangle::from_corners(x1, y1, x2, y2).unwrap()
    }

    #[test]
    fn test_intersection_text() {
        let rel = evaluate(rect(-1.0, 0.0, 2.0, 2.0), rect(-3.0, -1.0, 1.0, 1.0));

        assert_eq!(
            relationship_to_text(&rel),
            "adjacent: no\n\
             contained: no\n\
             intersected: yes\n  intersection: Rectangle: (bottomLeft: x=-1, y=0, upperRight: x=1, y=1)\n"
        );
    }

    #[test]
    fn test_containment_text() {
        let rel = evaluate(rect(3.0, -8.0, 10.0, -4.0), rect(4.0, -7.0, 9.0, -5.0));
        let text = relationship_to_text(&rel);

        assert!(text.contains(
            "contained: yes\n  container: Rectangle: (bottomLeft: x=3, y=-8, upperRight: x=10, y=-4)\n"
        ));
        assert!(text.contains("  containee: Rectangle: (bottomLeft: x=4, y=-7, upperRight: x=9, y=-5)\n"));
    }

    #[test]
    fn test_unclassified_adjacency_text() {
        let rel = evaluate(rect(0.0, 0.0, 1.0, 1.0), rect(1.0, 1.0, 2.0, 2.0));
        assert!(relationship_to_text(&rel).starts_with("adjacent: yes (unclassified)\n"));
    }

    #[test]
    fn test_subline_text() {
        let rel = evaluate(rect(6.0, 2.0, 11.0, 6.0), rect(3.0, 3.0, 6.0, 5.0));
        assert!(relationship_to_text(&rel).starts_with("adjacent: yes (SUBLINE)\n"));
    }
}
