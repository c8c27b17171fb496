use crate::core::lim::LimF;
use crate::core::scale::ScaleTransform;
use crate::core::types::{Bounds, DownsamplingType, Point, Scaling};
use crate::error::PlotResult;

/// Borrowed view over the plot parameters shared by rendering and
/// interaction code.
///
/// The view never owns its fields, so it cannot outlive the plot state it
/// was built from:
///
/// ```compile_fail
/// use cmp_plot::core::{Bounds, CommonPlotParameterView, DownsamplingType, LimF, Scaling};
///
/// fn dangling<'a>() -> CommonPlotParameterView<'a> {
///     let bounds = Bounds::new(0, 0, 100, 100);
///     let lim = LimF::new(0.0, 1.0);
///     CommonPlotParameterView::new(
///         &bounds,
///         &lim,
///         &lim,
///         &Scaling::Linear,
///         &Scaling::Linear,
///         &DownsamplingType::NoDownsampling,
///     )
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CommonPlotParameterView<'a> {
    pub graph_bounds: &'a Bounds,
    pub x_lim: &'a LimF,
    pub y_lim: &'a LimF,
    pub x_scaling: &'a Scaling,
    pub y_scaling: &'a Scaling,
    pub downsampling_type: &'a DownsamplingType,
}

impl<'a> CommonPlotParameterView<'a> {
    #[must_use]
    pub fn new(
        graph_bounds: &'a Bounds,
        x_lim: &'a LimF,
        y_lim: &'a LimF,
        x_scaling: &'a Scaling,
        y_scaling: &'a Scaling,
        downsampling_type: &'a DownsamplingType,
    ) -> Self {
        Self {
            graph_bounds,
            x_lim,
            y_lim,
            x_scaling,
            y_scaling,
            downsampling_type,
        }
    }

    pub fn x_transform(&self) -> PlotResult<ScaleTransform> {
        ScaleTransform::horizontal(self.x_lim.to_f64(), *self.x_scaling, *self.graph_bounds)
    }

    pub fn y_transform(&self) -> PlotResult<ScaleTransform> {
        ScaleTransform::vertical(self.y_lim.to_f64(), *self.y_scaling, *self.graph_bounds)
    }

    pub fn x_to_pixel(&self, x: f64) -> PlotResult<f64> {
        self.x_transform()?.value_to_pixel(x)
    }

    pub fn y_to_pixel(&self, y: f64) -> PlotResult<f64> {
        self.y_transform()?.value_to_pixel(y)
    }

    pub fn data_to_pixel(&self, data_point: Point) -> PlotResult<Point> {
        Ok(Point::new(
            self.x_to_pixel(data_point.x)?,
            self.y_to_pixel(data_point.y)?,
        ))
    }
}
