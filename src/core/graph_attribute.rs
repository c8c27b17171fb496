use std::fmt;
use std::rc::Rc;

use crate::core::marker::Marker;
use crate::core::types::Point;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, RenderFrame, StrokeStyle, validate_dash_lengths};

/// Callback run for every plotted graph point, receiving the data-space and
/// pixel-space position.
pub type GraphPointPaintFn = dyn Fn(&mut RenderFrame, Point, Point);

/// Optional per-graph-line overrides; unset fields keep the default look.
#[derive(Clone, Default)]
pub struct GraphAttribute {
    pub graph_colour: Option<Color>,
    pub path_stroke_type: Option<StrokeStyle>,
    /// Alternating draw/skip lengths in pixels, e.g. `[2, 2, 4, 6]`.
    pub dashed_lengths: Option<Vec<f64>>,
    /// Opacity in `[0, 1]` applied on top of the line colour.
    pub graph_line_opacity: Option<f64>,
    pub marker: Option<Marker>,
    pub on_graph_point_paint: Option<Rc<GraphPointPaintFn>>,
}

pub type GraphAttributeList = Vec<GraphAttribute>;

/// Style of one graph line after overrides were applied to the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedGraphStyle<'a> {
    pub colour: Color,
    pub stroke: StrokeStyle,
    pub dash_lengths: &'a [f64],
    pub marker: Option<Marker>,
}

impl GraphAttribute {
    #[must_use]
    pub fn with_graph_colour(mut self, colour: Color) -> Self {
        self.graph_colour = Some(colour);
        self
    }

    #[must_use]
    pub fn with_path_stroke_type(mut self, stroke: StrokeStyle) -> Self {
        self.path_stroke_type = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_dashed_lengths(mut self, dashed_lengths: impl Into<Vec<f64>>) -> Self {
        self.dashed_lengths = Some(dashed_lengths.into());
        self
    }

    #[must_use]
    pub fn with_graph_line_opacity(mut self, opacity: f64) -> Self {
        self.graph_line_opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    #[must_use]
    pub fn with_on_graph_point_paint(
        mut self,
        callback: impl Fn(&mut RenderFrame, Point, Point) + 'static,
    ) -> Self {
        self.on_graph_point_paint = Some(Rc::new(callback));
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if let Some(colour) = self.graph_colour {
            colour.validate()?;
        }
        if let Some(stroke) = self.path_stroke_type {
            stroke.validate()?;
        }
        if let Some(dashed_lengths) = &self.dashed_lengths {
            validate_dash_lengths(dashed_lengths)?;
        }
        if let Some(opacity) = self.graph_line_opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(PlotError::InvalidData(
                    "graph line opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        if let Some(marker) = self.marker {
            if let Some(colour) = marker.edge_colour {
                colour.validate()?;
            }
            if let Some(colour) = marker.face_colour {
                colour.validate()?;
            }
            marker.edge_stroke.validate()?;
        }
        Ok(())
    }

    /// Layers the overrides on top of the given defaults.
    #[must_use]
    pub fn resolve(
        &self,
        default_colour: Color,
        default_stroke: StrokeStyle,
    ) -> ResolvedGraphStyle<'_> {
        let colour = self.graph_colour.unwrap_or(default_colour);
        let colour = match self.graph_line_opacity {
            Some(opacity) => colour.with_multiplied_alpha(opacity),
            None => colour,
        };

        ResolvedGraphStyle {
            colour,
            stroke: self.path_stroke_type.unwrap_or(default_stroke),
            dash_lengths: self.dashed_lengths.as_deref().unwrap_or(&[]),
            marker: self.marker,
        }
    }

    /// Runs the per-point paint callback, returning whether one was set.
    pub fn paint_point(
        &self,
        frame: &mut RenderFrame,
        data_point: Point,
        graph_point: Point,
    ) -> bool {
        match &self.on_graph_point_paint {
            Some(callback) => {
                callback(frame, data_point, graph_point);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for GraphAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphAttribute")
            .field("graph_colour", &self.graph_colour)
            .field("path_stroke_type", &self.path_stroke_type)
            .field("dashed_lengths", &self.dashed_lengths)
            .field("graph_line_opacity", &self.graph_line_opacity)
            .field("marker", &self.marker)
            .field(
                "on_graph_point_paint",
                &self.on_graph_point_paint.as_ref().map(|_| "Fn(..)"),
            )
            .finish()
    }
}
