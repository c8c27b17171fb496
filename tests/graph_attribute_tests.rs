use std::cell::Cell;
use std::rc::Rc;

use cmp_plot::core::{Bounds, GraphAttribute, GraphSpreadIndex, Marker, MarkerType, Point};
use cmp_plot::render::{
    Color, EndCapStyle, JointStyle, PathPrimitive, PathStroke, RenderFrame, StrokeStyle,
};

#[test]
fn unset_attributes_resolve_to_defaults() {
    let default_colour = Color::rgb(0.1, 0.2, 0.3);
    let default_stroke = StrokeStyle::default();

    let attribute = GraphAttribute::default();
    let resolved = attribute.resolve(default_colour, default_stroke);

    assert_eq!(resolved.colour, default_colour);
    assert_eq!(resolved.stroke, default_stroke);
    assert!(resolved.dash_lengths.is_empty());
    assert_eq!(resolved.marker, None);
}

#[test]
fn overrides_replace_defaults_and_opacity_scales_alpha() {
    let stroke = StrokeStyle::new(2.5, JointStyle::Curved, EndCapStyle::Rounded);
    let marker = Marker::new(MarkerType::Pentagram);
    let attribute = GraphAttribute::default()
        .with_graph_colour(Color::rgba(1.0, 0.0, 0.0, 0.8))
        .with_path_stroke_type(stroke)
        .with_dashed_lengths(vec![2.0, 2.0, 4.0, 6.0])
        .with_graph_line_opacity(0.5)
        .with_marker(marker);
    attribute.validate().expect("valid attribute");

    let resolved = attribute.resolve(Color::rgb(0.0, 0.0, 0.0), StrokeStyle::default());
    assert_eq!(resolved.colour, Color::rgba(1.0, 0.0, 0.0, 0.4));
    assert_eq!(resolved.stroke, stroke);
    assert_eq!(resolved.dash_lengths, &[2.0, 2.0, 4.0, 6.0]);
    assert_eq!(resolved.marker, Some(marker));
}

#[test]
fn validation_rejects_out_of_range_opacity_and_bad_dashes() {
    assert!(GraphAttribute::default()
        .with_graph_line_opacity(1.5)
        .validate()
        .is_err());
    assert!(GraphAttribute::default()
        .with_graph_line_opacity(f64::NAN)
        .validate()
        .is_err());
    assert!(GraphAttribute::default()
        .with_dashed_lengths(Vec::new())
        .validate()
        .is_err());
    assert!(GraphAttribute::default()
        .with_dashed_lengths(vec![2.0, -1.0])
        .validate()
        .is_err());
    assert!(GraphAttribute::default()
        .with_path_stroke_type(StrokeStyle::new(0.0, JointStyle::Mitered, EndCapStyle::Butt))
        .validate()
        .is_err());
}

#[test]
fn graph_point_callback_runs_synchronously_per_point() {
    let calls = Rc::new(Cell::new(0usize));
    let seen = Rc::clone(&calls);
    let attribute = GraphAttribute::default().with_on_graph_point_paint(
        move |frame: &mut RenderFrame, data_point: Point, graph_point: Point| {
            seen.set(seen.get() + 1);
            let mut path = cmp_plot::render::Path::new();
            path.add_rectangle(graph_point.x - 1.0, graph_point.y - 1.0, 2.0, 2.0);
            frame.paths.push(PathPrimitive::stroked(
                path,
                PathStroke::solid(
                    Color::rgb(data_point.x / 10.0, 0.0, 0.0),
                    StrokeStyle::default(),
                ),
            ));
        },
    );

    let mut frame = RenderFrame::new(Bounds::new(0, 0, 50, 50));
    for i in 0..3 {
        let value = f64::from(i);
        assert!(attribute.paint_point(
            &mut frame,
            Point::new(value, value),
            Point::new(value * 10.0, 20.0),
        ));
    }

    assert_eq!(calls.get(), 3);
    assert_eq!(frame.paths.len(), 3);
    frame.validate().expect("valid frame");
}

#[test]
fn missing_callback_is_a_no_op() {
    let mut frame = RenderFrame::new(Bounds::new(0, 0, 10, 10));
    assert!(!GraphAttribute::default().paint_point(
        &mut frame,
        Point::default(),
        Point::default(),
    ));
    assert!(frame.is_empty());
}

#[test]
fn debug_output_hides_callback_body() {
    let attribute = GraphAttribute::default().with_on_graph_point_paint(|_, _, _| {});
    let debug = format!("{attribute:?}");
    assert!(debug.contains("on_graph_point_paint: Some(\"Fn(..)\")"));
}

#[test]
fn spread_index_requires_two_distinct_lines_in_range() {
    assert!(GraphSpreadIndex::new(0, 1).is_valid_for(2));
    assert!(!GraphSpreadIndex::new(1, 1).is_valid_for(2));
    assert!(!GraphSpreadIndex::new(0, 2).is_valid_for(2));
    assert!(GraphSpreadIndex::new(3, 0).is_valid_for(4));
}
