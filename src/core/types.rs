use serde::{Deserialize, Serialize};

/// Point in pixel or data space, depending on the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Integer component bounds, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn right(self) -> i32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Shrinks each side independently; sizes never go below zero.
    #[must_use]
    pub fn reduced(self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            self.x + left,
            self.y + top,
            (self.width - left - right).max(0),
            (self.height - top - bottom).max(0),
        )
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= f64::from(self.x)
            && point.x <= f64::from(self.right())
            && point.y >= f64::from(self.y)
            && point.y <= f64::from(self.bottom())
    }

    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.width),
            f64::from(self.height),
        )
    }
}

/// Floating-point rectangle used for label areas and path bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn centre(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Scaling of one plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    #[default]
    Linear,
    /// Base-10 logarithmic scaling. Limits must be strictly positive.
    Logarithmic,
}

/// Point reduction strategy applied before a graph line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownsamplingType {
    /// Every value is plotted. Slow for large graph lines.
    NoDownsampling,
    /// One value per x pixel column. Fastest; meant for real-time plotting.
    #[default]
    XDownsampling,
    /// Skips values that land on the same pixel as the previously kept one.
    XyDownsampling,
}

/// Two graph lines between which a filled spread is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphSpreadIndex {
    pub first_graph: usize,
    pub second_graph: usize,
}

impl GraphSpreadIndex {
    #[must_use]
    pub const fn new(first_graph: usize, second_graph: usize) -> Self {
        Self {
            first_graph,
            second_graph,
        }
    }

    /// Returns `true` when both indices address distinct lines among `graph_line_count`.
    #[must_use]
    pub fn is_valid_for(self, graph_line_count: usize) -> bool {
        self.first_graph != self.second_graph
            && self.first_graph < graph_line_count
            && self.second_graph < graph_line_count
    }
}
