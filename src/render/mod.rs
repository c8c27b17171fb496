mod frame;
mod null_renderer;
mod path;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use path::{AffineTransform, Path, PathElement};
pub use primitives::{
    Color, DashLengths, EndCapStyle, JointStyle, PathPrimitive, PathStroke, RectPrimitive,
    StrokeStyle, TextHAlign, TextPrimitive, validate_dash_lengths,
};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from component layout and plot state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
