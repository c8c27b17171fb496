use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Rect;
use crate::error::{PlotError, PlotResult};
use crate::render::Path;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_multiplied_alpha(self, factor: f64) -> Self {
        Self {
            alpha: (self.alpha * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// How stroke segments are joined at corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointStyle {
    #[default]
    Mitered,
    Curved,
    Beveled,
}

/// How open stroke ends are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCapStyle {
    #[default]
    Butt,
    Square,
    Rounded,
}

/// Stroke parameters for path outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub joint: JointStyle,
    pub end_cap: EndCapStyle,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(1.0, JointStyle::Mitered, EndCapStyle::Butt)
    }
}

impl StrokeStyle {
    #[must_use]
    pub const fn new(width: f64, joint: JointStyle, end_cap: EndCapStyle) -> Self {
        Self {
            width,
            joint,
            end_cap,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PlotError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Dash pattern as alternating draw/skip lengths in pixels.
pub type DashLengths = SmallVec<[f64; 4]>;

pub fn validate_dash_lengths(dash_lengths: &[f64]) -> PlotResult<()> {
    if dash_lengths.is_empty() {
        return Err(PlotError::InvalidData(
            "dash pattern must not be empty".to_owned(),
        ));
    }
    if dash_lengths
        .iter()
        .any(|length| !length.is_finite() || *length < 0.0)
    {
        return Err(PlotError::InvalidData(
            "dash lengths must be finite and >= 0".to_owned(),
        ));
    }
    if dash_lengths.iter().all(|length| *length == 0.0) {
        return Err(PlotError::InvalidData(
            "dash pattern must contain a positive length".to_owned(),
        ));
    }
    Ok(())
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `rotation_rad` rotates the text clockwise around its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub rotation_rad: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_rad: 0.0,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_rad: f64) -> Self {
        self.rotation_rad = rotation_rad;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_rad.is_finite() {
            return Err(PlotError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle with an optional border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(rect: Rect, fill_color: Color) -> Self {
        Self {
            rect,
            fill_color,
            border_color: fill_color,
            border_width: 0.0,
        }
    }

    #[must_use]
    pub fn with_border(mut self, border_color: Color, border_width: f64) -> Self {
        self.border_color = border_color;
        self.border_width = border_width;
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.rect;
        if !x.is_finite() || !y.is_finite() || !width.is_finite() || !height.is_finite() {
            return Err(PlotError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if width < 0.0 || height < 0.0 {
            return Err(PlotError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(PlotError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Stroke paint applied to a path outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStroke {
    pub color: Color,
    pub style: StrokeStyle,
    pub dash_lengths: DashLengths,
}

impl PathStroke {
    #[must_use]
    pub fn solid(color: Color, style: StrokeStyle) -> Self {
        Self {
            color,
            style,
            dash_lengths: DashLengths::new(),
        }
    }

    #[must_use]
    pub fn with_dash_lengths(mut self, dash_lengths: &[f64]) -> Self {
        self.dash_lengths = DashLengths::from_slice(dash_lengths);
        self
    }
}

/// Draw command for a path, filled and/or stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub path: Path,
    pub fill_color: Option<Color>,
    pub stroke: Option<PathStroke>,
}

impl PathPrimitive {
    #[must_use]
    pub fn filled(path: Path, fill_color: Color) -> Self {
        Self {
            path,
            fill_color: Some(fill_color),
            stroke: None,
        }
    }

    #[must_use]
    pub fn stroked(path: Path, stroke: PathStroke) -> Self {
        Self {
            path,
            fill_color: None,
            stroke: Some(stroke),
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.path.is_finite() {
            return Err(PlotError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if self.fill_color.is_none() && self.stroke.is_none() {
            return Err(PlotError::InvalidData(
                "path primitive must be filled or stroked".to_owned(),
            ));
        }
        if let Some(color) = self.fill_color {
            color.validate()?;
        }
        if let Some(stroke) = &self.stroke {
            stroke.color.validate()?;
            stroke.style.validate()?;
            if !stroke.dash_lengths.is_empty() {
                validate_dash_lengths(&stroke.dash_lengths)?;
            }
        }
        Ok(())
    }
}
