use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::{Point, Rect};
use crate::render::{
    AffineTransform, Color, EndCapStyle, JointStyle, Path, PathPrimitive, PathStroke,
    RenderFrame, StrokeStyle,
};

/// Shape drawn at each graph point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerType {
    Circle,
    Pentagram,
    Square,
    UpTriangle,
    RightTriangle,
    DownTriangle,
    LeftTriangle,
}

/// Marker configuration for one graph line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub marker_type: MarkerType,
    /// Outline colour. Falls back to the graph line colour.
    pub edge_colour: Option<Color>,
    /// Interior colour. The marker is left hollow when unset.
    pub face_colour: Option<Color>,
    /// Stroke used for the outline.
    pub edge_stroke: StrokeStyle,
}

impl Marker {
    #[must_use]
    pub fn new(marker_type: MarkerType) -> Self {
        Self {
            marker_type,
            edge_colour: None,
            face_colour: None,
            edge_stroke: StrokeStyle::new(1.0, JointStyle::Mitered, EndCapStyle::Rounded),
        }
    }

    #[must_use]
    pub fn with_edge_colour(mut self, colour: Color) -> Self {
        self.edge_colour = Some(colour);
        self
    }

    #[must_use]
    pub fn with_face_colour(mut self, colour: Color) -> Self {
        self.face_colour = Some(colour);
        self
    }

    #[must_use]
    pub fn with_edge_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.edge_stroke = stroke;
        self
    }

    /// Path of `marker` centred on the origin with bounding dimension `length`.
    #[must_use]
    pub fn path_from(marker: Marker, length: f64) -> Path {
        marker_path(marker.marker_type, length)
    }

    #[must_use]
    pub fn path(&self, length: f64) -> Path {
        marker_path(self.marker_type, length)
    }

    /// Path centred on `centre` instead of the origin.
    #[must_use]
    pub fn path_at(&self, centre: Point, length: f64) -> Path {
        self.path(length)
            .transformed(AffineTransform::translation(centre.x, centre.y))
    }

    /// Pushes the marker at `centre` into `frame`: fill first, then outline.
    pub fn draw_at(
        &self,
        frame: &mut RenderFrame,
        centre: Point,
        length: f64,
        graph_colour: Color,
    ) {
        let path = self.path_at(centre, length);
        if path.is_empty() {
            return;
        }

        if let Some(face_colour) = self.face_colour {
            frame
                .paths
                .push(PathPrimitive::filled(path.clone(), face_colour));
        }
        let edge_colour = self.edge_colour.unwrap_or(graph_colour);
        frame.paths.push(PathPrimitive::stroked(
            path,
            PathStroke::solid(edge_colour, self.edge_stroke),
        ));
    }
}

/// Builds the path for `marker_type`, centred on the origin within a
/// `length` x `length` box.
///
/// A non-finite `length` yields an empty path.
#[must_use]
pub fn marker_path(marker_type: MarkerType, length: f64) -> Path {
    if !length.is_finite() {
        trace!(length, "skipping marker path with non-finite length");
        return Path::new();
    }

    let half = length / 2.0;
    let mut path = Path::new();
    match marker_type {
        MarkerType::Circle => path.add_ellipse(Rect::new(-half, -half, length, length)),
        MarkerType::Pentagram => path.add_star(Point::default(), 5, length / 4.0, half),
        MarkerType::Square => path.add_rectangle(-half, -half, length, length),
        MarkerType::UpTriangle => return turned_triangle(length, 0),
        MarkerType::RightTriangle => return turned_triangle(length, 1),
        MarkerType::DownTriangle => return turned_triangle(length, 2),
        MarkerType::LeftTriangle => return turned_triangle(length, 3),
    }
    path
}

/// Apex-up triangle turned clockwise by `quarter_turns` x 90° about the origin.
fn turned_triangle(length: f64, quarter_turns: u8) -> Path {
    let half = length / 2.0;
    let mut path = Path::new();
    path.add_triangle(
        Point::new(0.0, -half),
        Point::new(-half, half),
        Point::new(half, half),
    );
    if quarter_turns % 4 != 0 {
        path.apply_transform(AffineTransform::rotation(
            FRAC_PI_2 * f64::from(quarter_turns),
            0.0,
            0.0,
        ));
    }
    path
}
