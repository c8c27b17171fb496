use cmp_plot::PlotError;
use cmp_plot::core::{Bounds, Point, Rect};
use cmp_plot::render::{
    Color, NullRenderer, Path, PathPrimitive, PathStroke, RectPrimitive, RenderFrame, Renderer,
    StrokeStyle, TextHAlign, TextPrimitive,
};

fn triangle() -> Path {
    let mut path = Path::new();
    path.add_triangle(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(5.0, 8.0),
    );
    path
}

#[test]
fn null_renderer_records_primitive_counts_and_texts() {
    let frame = RenderFrame::new(Bounds::new(0, 0, 120, 80))
        .with_rect(RectPrimitive::filled(
            Rect::new(0.0, 0.0, 20.0, 10.0),
            Color::rgb(0.5, 0.5, 0.5),
        ))
        .with_path(PathPrimitive::filled(triangle(), Color::rgb(1.0, 0.0, 0.0)))
        .with_text(TextPrimitive::new(
            "Title",
            60.0,
            10.0,
            14.0,
            Color::rgb(0.0, 0.0, 0.0),
            TextHAlign::Center,
        ));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_text_count, 1);
    assert_eq!(renderer.last_texts, vec!["Title".to_owned()]);
}

#[test]
fn frame_validation_rejects_invalid_primitives() {
    let bounds = Bounds::new(0, 0, 10, 10);

    let empty_text = RenderFrame::new(bounds).with_text(TextPrimitive::new(
        "",
        0.0,
        0.0,
        12.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Left,
    ));
    assert!(matches!(empty_text.validate(), Err(PlotError::InvalidData(_))));

    let unpainted = RenderFrame::new(bounds).with_path(PathPrimitive {
        path: triangle(),
        fill_color: None,
        stroke: None,
    });
    assert!(unpainted.validate().is_err());

    let bad_dash = RenderFrame::new(bounds).with_path(PathPrimitive::stroked(
        triangle(),
        PathStroke::solid(Color::rgb(0.0, 0.0, 0.0), StrokeStyle::default())
            .with_dash_lengths(&[0.0, 0.0]),
    ));
    assert!(bad_dash.validate().is_err());

    let mut non_finite = Path::new();
    non_finite.move_to(Point::new(f64::NAN, 0.0));
    let nan_path = RenderFrame::new(bounds)
        .with_path(PathPrimitive::filled(non_finite, Color::rgb(0.0, 0.0, 0.0)));
    assert!(nan_path.validate().is_err());

    let bad_colour = RenderFrame::new(bounds).with_rect(RectPrimitive::filled(
        Rect::new(0.0, 0.0, 1.0, 1.0),
        Color::rgba(0.0, 0.0, 0.0, 1.5),
    ));
    assert!(bad_colour.validate().is_err());
}

#[test]
fn frame_with_empty_bounds_is_rejected() {
    let err = RenderFrame::new(Bounds::new(0, 0, 0, 20))
        .validate()
        .expect_err("zero width must fail");
    assert!(matches!(err, PlotError::InvalidBounds { width: 0, height: 20 }));
}

#[test]
fn dashed_stroke_is_accepted() {
    let frame = RenderFrame::new(Bounds::new(0, 0, 10, 10)).with_path(PathPrimitive::stroked(
        triangle(),
        PathStroke::solid(Color::rgb(0.0, 0.0, 0.0), StrokeStyle::default())
            .with_dash_lengths(&[2.0, 2.0, 4.0, 6.0]),
    ));
    frame.validate().expect("valid dashed frame");
}
