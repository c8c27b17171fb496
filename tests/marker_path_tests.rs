use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use cmp_plot::core::{Bounds, Marker, MarkerType, Point, marker_path};
use cmp_plot::render::{AffineTransform, Color, EndCapStyle, JointStyle, Path, RenderFrame};

const ALL_MARKERS: [MarkerType; 7] = [
    MarkerType::Circle,
    MarkerType::Pentagram,
    MarkerType::Square,
    MarkerType::UpTriangle,
    MarkerType::RightTriangle,
    MarkerType::DownTriangle,
    MarkerType::LeftTriangle,
];

fn assert_paths_close(actual: &Path, expected: &Path) {
    let actual: Vec<Point> = actual.points().collect();
    let expected: Vec<Point> = expected.points().collect();
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(&expected) {
        assert_abs_diff_eq!(a.x, e.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, e.y, epsilon = 1e-9);
    }
}

#[test]
fn every_marker_path_is_non_empty_and_fits_its_box() {
    let length = 10.0;
    for marker_type in ALL_MARKERS {
        let path = marker_path(marker_type, length);
        assert!(!path.is_empty(), "{marker_type:?} produced an empty path");

        let bounds = path.bounds();
        assert!(bounds.x >= -length / 2.0 - 1e-9, "{marker_type:?}");
        assert!(bounds.y >= -length / 2.0 - 1e-9, "{marker_type:?}");
        assert!(bounds.right() <= length / 2.0 + 1e-9, "{marker_type:?}");
        assert!(bounds.bottom() <= length / 2.0 + 1e-9, "{marker_type:?}");
    }
}

#[test]
fn circle_and_square_fill_their_box_exactly() {
    for marker_type in [MarkerType::Circle, MarkerType::Square] {
        let bounds = marker_path(marker_type, 8.0).bounds();
        assert_abs_diff_eq!(bounds.x, -4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds.y, -4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds.width, 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds.height, 8.0, epsilon = 1e-12);
    }
}

#[test]
fn up_triangle_has_apex_on_top_and_base_on_bottom() {
    let points: Vec<Point> = marker_path(MarkerType::UpTriangle, 6.0).points().collect();
    assert_eq!(points, vec![
        Point::new(0.0, -3.0),
        Point::new(-3.0, 3.0),
        Point::new(3.0, 3.0),
    ]);
}

#[test]
fn turned_triangles_match_rotated_up_triangle() {
    let up = marker_path(MarkerType::UpTriangle, 12.0);
    for (marker_type, angle) in [
        (MarkerType::RightTriangle, FRAC_PI_2),
        (MarkerType::DownTriangle, PI),
        (MarkerType::LeftTriangle, 3.0 * FRAC_PI_2),
    ] {
        let rotated = up
            .clone()
            .transformed(AffineTransform::rotation(angle, 0.0, 0.0));
        assert_paths_close(&marker_path(marker_type, 12.0), &rotated);
    }
}

#[test]
fn right_triangle_apex_points_right() {
    let apex = marker_path(MarkerType::RightTriangle, 4.0)
        .points()
        .next()
        .expect("apex");
    assert_abs_diff_eq!(apex.x, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(apex.y, 0.0, epsilon = 1e-12);
}

#[test]
fn pentagram_has_ten_vertices_with_expected_radii() {
    let radii: Vec<f64> = marker_path(MarkerType::Pentagram, 20.0)
        .points()
        .map(|point| point.x.hypot(point.y))
        .collect();
    assert_eq!(radii.len(), 10);
    assert_abs_diff_eq!(radii[0], 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(radii[1], 5.0, epsilon = 1e-9);
}

#[test]
fn non_finite_length_yields_empty_path() {
    assert!(marker_path(MarkerType::Circle, f64::NAN).is_empty());
    assert!(Marker::path_from(Marker::new(MarkerType::Square), f64::INFINITY).is_empty());
}

#[test]
fn marker_defaults_to_rounded_mitered_unit_stroke() {
    let marker = Marker::new(MarkerType::Square);
    assert_eq!(marker.edge_colour, None);
    assert_eq!(marker.face_colour, None);
    assert_eq!(marker.edge_stroke.width, 1.0);
    assert_eq!(marker.edge_stroke.joint, JointStyle::Mitered);
    assert_eq!(marker.edge_stroke.end_cap, EndCapStyle::Rounded);
}

#[test]
fn marker_draws_fill_then_outline_at_graph_point() {
    let graph_colour = Color::rgb(0.2, 0.4, 0.6);
    let face = Color::rgb(1.0, 0.0, 0.0);
    let marker = Marker::new(MarkerType::Square).with_face_colour(face);
    let mut frame = RenderFrame::new(Bounds::new(0, 0, 100, 100));

    marker.draw_at(&mut frame, Point::new(50.0, 40.0), 6.0, graph_colour);
    frame.validate().expect("valid frame");

    assert_eq!(frame.paths.len(), 2);
    assert_eq!(frame.paths[0].fill_color, Some(face));
    let outline = frame.paths[1].stroke.as_ref().expect("outline stroke");
    assert_eq!(outline.color, graph_colour);

    let bounds = frame.paths[1].path.bounds();
    assert_abs_diff_eq!(bounds.centre().x, 50.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.centre().y, 40.0, epsilon = 1e-12);
}

#[test]
fn hollow_marker_draws_outline_only() {
    let edge = Color::rgb(0.0, 1.0, 0.0);
    let marker = Marker::new(MarkerType::Circle).with_edge_colour(edge);
    let mut frame = RenderFrame::new(Bounds::new(0, 0, 10, 10));

    marker.draw_at(&mut frame, Point::new(5.0, 5.0), 4.0, Color::rgb(0.0, 0.0, 0.0));

    assert_eq!(frame.paths.len(), 1);
    assert_eq!(frame.paths[0].fill_color, None);
    assert_eq!(frame.paths[0].stroke.as_ref().map(|s| s.color), Some(edge));
}
