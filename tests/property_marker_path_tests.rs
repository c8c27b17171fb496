use cmp_plot::core::{LimF, MarkerType, marker_path};
use proptest::prelude::*;

fn marker_type() -> impl Strategy<Value = MarkerType> {
    prop_oneof![
        Just(MarkerType::Circle),
        Just(MarkerType::Pentagram),
        Just(MarkerType::Square),
        Just(MarkerType::UpTriangle),
        Just(MarkerType::RightTriangle),
        Just(MarkerType::DownTriangle),
        Just(MarkerType::LeftTriangle),
    ]
}

proptest! {
    #[test]
    fn marker_paths_stay_within_half_length(
        marker_type in marker_type(),
        length in 0.5f64..500.0,
    ) {
        let path = marker_path(marker_type, length);
        prop_assert!(!path.is_empty());

        let tolerance = length * 1e-9;
        let half = length / 2.0;
        for point in path.points() {
            prop_assert!(point.x.abs() <= half + tolerance);
            prop_assert!(point.y.abs() <= half + tolerance);
        }
    }

    #[test]
    fn lim_division_scales_both_bounds(
        min in -1.0e4f32..1.0e4,
        max in -1.0e4f32..1.0e4,
        divisor in 1.0f32..100.0,
    ) {
        let divided = LimF::new(min, max) / divisor;
        prop_assert_eq!(divided.min, min / divisor);
        prop_assert_eq!(divided.max, max / divisor);
    }
}
