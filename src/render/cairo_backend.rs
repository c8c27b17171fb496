use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;

use crate::error::{PlotError, PlotResult};
use crate::render::{
    Color, EndCapStyle, JointStyle, Path, PathElement, PathStroke, RenderFrame, Renderer,
    TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidBounds { width, height });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: None,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Colour painted over the whole target before a frame; `None` keeps
    /// whatever the host already drew underneath.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> PlotResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        if let Some(clear_color) = self.clear_color {
            apply_color(context, clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            context.new_path();
            context.rectangle(rect.rect.x, rect.rect.y, rect.rect.width, rect.rect.height);
            apply_color(context, rect.fill_color);
            if rect.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                apply_color(context, rect.border_color);
                context.set_line_width(rect.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            stats.rects_drawn += 1;
        }

        for primitive in &frame.paths {
            context.new_path();
            append_path(context, &primitive.path);
            if let Some(fill_color) = primitive.fill_color {
                apply_color(context, fill_color);
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill path", err))?;
            }
            if let Some(stroke) = &primitive.stroke {
                apply_stroke(context, stroke);
                context
                    .stroke_preserve()
                    .map_err(|err| map_backend_error("failed to stroke path", err))?;
                context.set_dash(&[], 0.0);
            }
            context.new_path();
            stats.paths_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x_offset = match text.h_align {
                TextHAlign::Left => 0.0,
                TextHAlign::Center => -f64::from(text_width) / 2.0,
                TextHAlign::Right => -f64::from(text_width),
            };

            context
                .save()
                .map_err(|err| map_backend_error("failed to save cairo state", err))?;
            context.translate(text.x, text.y);
            context.rotate(text.rotation_rad);
            apply_color(context, text.color);
            context.move_to(x_offset, -f64::from(text_height) / 2.0);
            pangocairo::functions::show_layout(context, &layout);
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke(context: &Context, stroke: &PathStroke) {
    apply_color(context, stroke.color);
    context.set_line_width(stroke.style.width);
    context.set_line_join(match stroke.style.joint {
        JointStyle::Mitered => LineJoin::Miter,
        JointStyle::Curved => LineJoin::Round,
        JointStyle::Beveled => LineJoin::Bevel,
    });
    context.set_line_cap(match stroke.style.end_cap {
        EndCapStyle::Butt => LineCap::Butt,
        EndCapStyle::Square => LineCap::Square,
        EndCapStyle::Rounded => LineCap::Round,
    });
    context.set_dash(&stroke.dash_lengths, 0.0);
}

fn append_path(context: &Context, path: &Path) {
    for element in path.elements() {
        match *element {
            PathElement::MoveTo(point) => context.move_to(point.x, point.y),
            PathElement::LineTo(point) => context.line_to(point.x, point.y),
            PathElement::CubicTo {
                control1,
                control2,
                end,
            } => context.curve_to(control1.x, control1.y, control2.x, control2.y, end.x, end.y),
            PathElement::Close => context.close_path(),
        }
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::InvalidData(format!("{prefix}: {err}"))
}
