use std::f64::consts::FRAC_PI_2;
use std::fmt::Debug;

use crate::core::{Bounds, Rect};
use crate::render::Color;

use super::PlotTheme;

/// Which of the three plot labels is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    X,
    Y,
    Title,
}

/// Visual parameters for drawing one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub colour: Color,
    pub font_size_px: f64,
    pub background_colour: Option<Color>,
    /// Clockwise rotation around the label centre.
    pub rotation_rad: f64,
}

/// Label areas in component coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelLayout {
    pub x_label: Rect,
    pub y_label: Rect,
    pub title: Rect,
}

impl LabelLayout {
    #[must_use]
    pub fn area(&self, kind: LabelKind) -> Rect {
        match kind {
            LabelKind::X => self.x_label,
            LabelKind::Y => self.y_label,
            LabelKind::Title => self.title,
        }
    }
}

/// Theme object consulted by plot components for colours, fonts, and layout.
///
/// Only `theme` is required; the layout methods have defaults that place the
/// x label under the graph area, the rotated y label to its left, and the
/// title above it.
pub trait PlotLookAndFeel: Debug {
    fn theme(&self) -> &PlotTheme;

    fn background_colour(&self) -> Color {
        self.theme().background_colour
    }

    fn label_style(&self, kind: LabelKind) -> LabelStyle {
        let theme = self.theme();
        let (colour, font_size_px, rotation_rad) = match kind {
            LabelKind::X => (theme.x_label_colour, theme.label_font_size_px, 0.0),
            LabelKind::Y => (theme.y_label_colour, theme.label_font_size_px, -FRAC_PI_2),
            LabelKind::Title => (theme.title_colour, theme.title_font_size_px, 0.0),
        };
        LabelStyle {
            colour,
            font_size_px,
            background_colour: theme.label_background_colour,
            rotation_rad,
        }
    }

    /// Graph area left inside `bounds` once room for the labels is reserved.
    fn graph_bounds(&self, bounds: Bounds) -> Bounds {
        let theme = self.theme();
        let label_band = label_band_px(theme.label_font_size_px, theme.label_margin_px);
        let title_band = label_band_px(theme.title_font_size_px, theme.label_margin_px);
        let gap = theme.graph_margin_px;

        bounds.reduced(
            (label_band + gap).ceil() as i32,
            (title_band + gap).ceil() as i32,
            gap.ceil() as i32,
            (label_band + gap).ceil() as i32,
        )
    }

    fn label_layout(&self, bounds: Bounds, graph_bounds: Bounds) -> LabelLayout {
        let theme = self.theme();
        let margin = theme.label_margin_px;
        let label_height = theme.label_font_size_px * LINE_HEIGHT_FACTOR;
        let title_height = theme.title_font_size_px * LINE_HEIGHT_FACTOR;
        let bounds = bounds.to_rect();
        let graph = graph_bounds.to_rect();

        LabelLayout {
            x_label: Rect::new(
                graph.x,
                bounds.bottom() - margin - label_height,
                graph.width,
                label_height,
            ),
            y_label: Rect::new(bounds.x + margin, graph.y, label_height, graph.height),
            title: Rect::new(graph.x, bounds.y + margin, graph.width, title_height),
        }
    }
}

const LINE_HEIGHT_FACTOR: f64 = 1.5;

fn label_band_px(font_size_px: f64, margin_px: f64) -> f64 {
    font_size_px * LINE_HEIGHT_FACTOR + margin_px
}

/// Look-and-feel driven purely by a [`PlotTheme`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DefaultPlotLookAndFeel {
    theme: PlotTheme,
}

impl DefaultPlotLookAndFeel {
    #[must_use]
    pub fn new(theme: PlotTheme) -> Self {
        Self { theme }
    }
}

impl PlotLookAndFeel for DefaultPlotLookAndFeel {
    fn theme(&self) -> &PlotTheme {
        &self.theme
    }
}
