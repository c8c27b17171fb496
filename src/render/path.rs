use std::f64::consts::PI;

use smallvec::SmallVec;

use crate::core::{Point, Rect};

/// Cubic Bézier control distance approximating a quarter ellipse.
const ELLIPSE_KAPPA: f64 = 0.552_284_749_830_793_4;

/// One drawing instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

impl PathElement {
    fn map_points(self, mut f: impl FnMut(Point) -> Point) -> Self {
        match self {
            Self::MoveTo(point) => Self::MoveTo(f(point)),
            Self::LineTo(point) => Self::LineTo(f(point)),
            Self::CubicTo {
                control1,
                control2,
                end,
            } => Self::CubicTo {
                control1: f(control1),
                control2: f(control2),
                end: f(end),
            },
            Self::Close => Self::Close,
        }
    }
}

/// 2D affine transform stored as the top two rows of a 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub mat00: f64,
    pub mat01: f64,
    pub mat02: f64,
    pub mat10: f64,
    pub mat11: f64,
    pub mat12: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            mat00: 1.0,
            mat01: 0.0,
            mat02: 0.0,
            mat10: 0.0,
            mat11: 1.0,
            mat12: 0.0,
        }
    }

    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            mat02: dx,
            mat12: dy,
            ..Self::identity()
        }
    }

    /// Rotation by `angle_rad` around `(pivot_x, pivot_y)`.
    ///
    /// With y pointing down, positive angles turn clockwise on screen.
    #[must_use]
    pub fn rotation(angle_rad: f64, pivot_x: f64, pivot_y: f64) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        Self {
            mat00: cos,
            mat01: -sin,
            mat02: -cos * pivot_x + sin * pivot_y + pivot_x,
            mat10: sin,
            mat11: cos,
            mat12: -sin * pivot_x - cos * pivot_y + pivot_y,
        }
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.mat00 * point.x + self.mat01 * point.y + self.mat02,
            self.mat10 * point.x + self.mat11 * point.y + self.mat12,
        )
    }
}

/// Resolution-independent outline made of lines and cubic curves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    elements: SmallVec<[PathElement; 16]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathElement::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.elements.push(PathElement::LineTo(point));
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.elements.push(PathElement::CubicTo {
            control1,
            control2,
            end,
        });
    }

    pub fn close_sub_path(&mut self) {
        self.elements.push(PathElement::Close);
    }

    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(Point::new(x, y));
        self.line_to(Point::new(x + width, y));
        self.line_to(Point::new(x + width, y + height));
        self.line_to(Point::new(x, y + height));
        self.close_sub_path();
    }

    pub fn add_triangle(&mut self, p1: Point, p2: Point, p3: Point) {
        self.move_to(p1);
        self.line_to(p2);
        self.line_to(p3);
        self.close_sub_path();
    }

    /// Adds an ellipse inscribed in `area`, starting at its top and running clockwise.
    pub fn add_ellipse(&mut self, area: Rect) {
        let centre = area.centre();
        let rx = area.width / 2.0;
        let ry = area.height / 2.0;
        let kx = rx * ELLIPSE_KAPPA;
        let ky = ry * ELLIPSE_KAPPA;
        let (cx, cy) = (centre.x, centre.y);

        self.move_to(Point::new(cx, cy - ry));
        self.cubic_to(
            Point::new(cx + kx, cy - ry),
            Point::new(cx + rx, cy - ky),
            Point::new(cx + rx, cy),
        );
        self.cubic_to(
            Point::new(cx + rx, cy + ky),
            Point::new(cx + kx, cy + ry),
            Point::new(cx, cy + ry),
        );
        self.cubic_to(
            Point::new(cx - kx, cy + ry),
            Point::new(cx - rx, cy + ky),
            Point::new(cx - rx, cy),
        );
        self.cubic_to(
            Point::new(cx - rx, cy - ky),
            Point::new(cx - kx, cy - ry),
            Point::new(cx, cy - ry),
        );
        self.close_sub_path();
    }

    /// Adds a star whose tips alternate between `outer_radius` and `inner_radius`.
    ///
    /// The first tip sits straight above `centre`; nothing is added for fewer
    /// than two points.
    pub fn add_star(
        &mut self,
        centre: Point,
        number_of_points: usize,
        inner_radius: f64,
        outer_radius: f64,
    ) {
        if number_of_points < 2 {
            return;
        }

        let step = PI / number_of_points as f64;
        for vertex in 0..number_of_points * 2 {
            let angle = step * vertex as f64;
            let radius = if vertex % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            let point = Point::new(
                centre.x + radius * angle.sin(),
                centre.y - radius * angle.cos(),
            );
            if vertex == 0 {
                self.move_to(point);
            } else {
                self.line_to(point);
            }
        }
        self.close_sub_path();
    }

    pub fn apply_transform(&mut self, transform: AffineTransform) {
        for element in &mut self.elements {
            *element = element.map_points(|point| transform.apply(point));
        }
    }

    #[must_use]
    pub fn transformed(mut self, transform: AffineTransform) -> Self {
        self.apply_transform(transform);
        self
    }

    /// Iterates every stored point, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.elements.iter().flat_map(|element| {
            let points: SmallVec<[Point; 3]> = match *element {
                PathElement::MoveTo(point) | PathElement::LineTo(point) => {
                    SmallVec::from_slice(&[point])
                }
                PathElement::CubicTo {
                    control1,
                    control2,
                    end,
                } => SmallVec::from_slice(&[control1, control2, end]),
                PathElement::Close => SmallVec::new(),
            };
            points
        })
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points().all(Point::is_finite)
    }

    /// Bounding box of all stored points; zero-sized at the origin for empty paths.
    ///
    /// Bézier control points are included, so curves are bounded
    /// conservatively.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let mut points = self.points();
        let Some(first) = points.next() else {
            return Rect::default();
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for point in points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
