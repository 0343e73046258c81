use proptest::prelude::*;
use rectangles::{Rectangle, evaluate};

// Small integer grid so shared edges and coincident spans come up often
fn rectangle() -> impl Strategy<Value = Rectangle> {
    (-10i32..10, -10i32..10, 1i32..6, 1i32..6).prop_map(|(x, y, w, h)| {
        Rectangle::from_corners(
            f64::from(x),
            f64::from(y),
            f64::from(x + w),
            f64::from(y + h),
        )
        .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]
    #[test]
    fn should_keep_corners_ordered(x1 in -100.0f64..100.0, y1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0, y2 in -100.0f64..100.0)
    {
        match Rectangle::from_corners(x1, y1, x2, y2) {
            Ok(rect) => {
                prop_assert!(rect.bottom_left().x < rect.upper_right().x);
                prop_assert!(rect.bottom_left().y < rect.upper_right().y);
            }
            Err(err) => {
                prop_assert!(x1 >= x2 || y1 >= y2);
                prop_assert_eq!((err.x1, err.y1, err.x2, err.y2), (x1, y1, x2, y2));
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]
    #[test]
    fn should_be_symmetric(a in rectangle(), b in rectangle()) {
        prop_assert_eq!(a.is_adjacent(&b), b.is_adjacent(&a));
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]
    #[test]
    fn should_not_overlap_when_adjacent(a in rectangle(), b in rectangle()) {
        let result = evaluate(a, b);

        if result.is_adjacent() {
            prop_assert!(!result.is_intersected());
            prop_assert!(!result.is_contained());
        }
        if result.is_contained() {
            prop_assert_eq!(result.intersection, Some(b));
        }
        prop_assert!(!a.contains(&a));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]
    #[test]
    fn should_intersect_inside_both(a in rectangle(), b in rectangle()) {
        if let Some(i) = a.intersection(&b) {
            for r in [a, b] {
                prop_assert!(i.bottom_left().x >= r.bottom_left().x);
                prop_assert!(i.bottom_left().y >= r.bottom_left().y);
                prop_assert!(i.upper_right().x <= r.upper_right().x);
                prop_assert!(i.upper_right().y <= r.upper_right().y);
            }
        }
    }
}
