#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use cmp_plot::PlotError;
use cmp_plot::api::{PlotLabel, PlotLookAndFeel};
use cmp_plot::core::{Bounds, Marker, MarkerType, Point};
use cmp_plot::render::{CairoContextRenderer, CairoRenderer, Color, RenderFrame};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidBounds { width: 0, height: 480 }));
}

#[test]
fn cairo_renderer_draws_plot_labels() {
    let mut renderer = CairoRenderer::new(400, 300).expect("renderer");
    let mut label = PlotLabel::new();
    let bounds = Bounds::new(0, 0, 400, 300);
    let graph_bounds = label.look_and_feel().graph_bounds(bounds);
    label.resized(bounds, graph_bounds);
    label.set_x_label("Freq");
    label.set_y_label("Level");
    label.set_title("Spectrum");

    label.render(&mut renderer).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.texts_drawn, 3);
    assert_eq!(stats.rects_drawn, 0);
}

#[test]
fn cairo_renderer_draws_markers_on_external_context() {
    let surface = ImageSurface::create(Format::ARgb32, 64, 64).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut renderer = CairoRenderer::new(1, 1).expect("renderer");
    renderer
        .set_clear_color(Some(Color::rgb(1.0, 1.0, 1.0)))
        .expect("clear colour");

    let mut frame = RenderFrame::new(Bounds::new(0, 0, 64, 64));
    let marker_types = [
        MarkerType::Circle,
        MarkerType::Pentagram,
        MarkerType::LeftTriangle,
    ];
    for (index, marker_type) in marker_types.into_iter().enumerate() {
        Marker::new(marker_type)
            .with_face_colour(Color::rgb(0.2, 0.6, 0.2))
            .draw_at(
                &mut frame,
                Point::new(12.0 + 20.0 * index as f64, 32.0),
                10.0,
                Color::rgb(0.0, 0.0, 0.0),
            );
    }

    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");
    assert_eq!(renderer.last_stats().paths_drawn, 6);
}
