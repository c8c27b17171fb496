use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::{Bounds, Rect};
use crate::error::PlotResult;
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{DefaultPlotLookAndFeel, LabelKind, PlotLookAndFeel};

/// One positioned, styled label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelText {
    pub text: String,
    pub area: Rect,
    pub colour: Color,
    pub font_size_px: f64,
    pub background_colour: Option<Color>,
    pub rotation_rad: f64,
}

impl LabelText {
    fn styled(look_and_feel: &dyn PlotLookAndFeel, kind: LabelKind) -> Self {
        let mut label = Self {
            text: String::new(),
            area: Rect::default(),
            colour: Color::rgb(0.0, 0.0, 0.0),
            font_size_px: 1.0,
            background_colour: None,
            rotation_rad: 0.0,
        };
        label.apply_style(look_and_feel, kind);
        label
    }

    fn apply_style(&mut self, look_and_feel: &dyn PlotLookAndFeel, kind: LabelKind) {
        let style = look_and_feel.label_style(kind);
        self.colour = style.colour;
        self.font_size_px = style.font_size_px;
        self.background_colour = style.background_colour;
        self.rotation_rad = style.rotation_rad;
    }

    fn paint(&self, frame: &mut RenderFrame) {
        if self.text.is_empty() {
            return;
        }

        if let Some(background) = self.background_colour {
            frame.rects.push(RectPrimitive::filled(self.area, background));
        }
        let centre = self.area.centre();
        frame.texts.push(
            TextPrimitive::new(
                self.text.clone(),
                centre.x,
                centre.y,
                self.font_size_px,
                self.colour,
                TextHAlign::Center,
            )
            .with_rotation(self.rotation_rad),
        );
    }
}

/// Component drawing the x-axis, y-axis, and title labels around a graph area.
///
/// Setters and look-and-feel changes only mark the component dirty; the
/// host repaints it on its next paint pass.
#[derive(Debug)]
pub struct PlotLabel {
    x_label: LabelText,
    y_label: LabelText,
    title_label: LabelText,
    bounds: Bounds,
    graph_bounds: Bounds,
    look_and_feel: Rc<dyn PlotLookAndFeel>,
    needs_repaint: bool,
}

impl Default for PlotLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotLabel {
    #[must_use]
    pub fn new() -> Self {
        Self::with_look_and_feel(Rc::new(DefaultPlotLookAndFeel::default()))
    }

    #[must_use]
    pub fn with_look_and_feel(look_and_feel: Rc<dyn PlotLookAndFeel>) -> Self {
        Self {
            x_label: LabelText::styled(look_and_feel.as_ref(), LabelKind::X),
            y_label: LabelText::styled(look_and_feel.as_ref(), LabelKind::Y),
            title_label: LabelText::styled(look_and_feel.as_ref(), LabelKind::Title),
            bounds: Bounds::default(),
            graph_bounds: Bounds::default(),
            look_and_feel,
            needs_repaint: true,
        }
    }

    pub fn set_x_label(&mut self, x_label: impl Into<String>) {
        self.set_text(LabelKind::X, x_label.into());
    }

    pub fn set_y_label(&mut self, y_label: impl Into<String>) {
        self.set_text(LabelKind::Y, y_label.into());
    }

    pub fn set_title(&mut self, title_label: impl Into<String>) {
        self.set_text(LabelKind::Title, title_label.into());
    }

    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label.text
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label.text
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title_label.text
    }

    #[must_use]
    pub fn label(&self, kind: LabelKind) -> &LabelText {
        match kind {
            LabelKind::X => &self.x_label,
            LabelKind::Y => &self.y_label,
            LabelKind::Title => &self.title_label,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn graph_bounds(&self) -> Bounds {
        self.graph_bounds
    }

    #[must_use]
    pub fn look_and_feel(&self) -> &Rc<dyn PlotLookAndFeel> {
        &self.look_and_feel
    }

    #[must_use]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Recomputes label areas for new component and graph bounds.
    pub fn resized(&mut self, bounds: Bounds, graph_bounds: Bounds) {
        self.bounds = bounds;
        self.graph_bounds = graph_bounds;
        self.update_layout();
        self.needs_repaint = true;
    }

    /// Applies `look_and_feel` to all three labels and lays them out again.
    ///
    /// Once the component has been sized, the graph area is re-derived from the
    /// new look-and-feel so the labels keep clear of it.
    pub fn look_and_feel_changed(&mut self, look_and_feel: Rc<dyn PlotLookAndFeel>) {
        debug!(?look_and_feel, "plot label look-and-feel changed");
        self.look_and_feel = look_and_feel;
        if self.bounds.is_valid() {
            self.graph_bounds = self.look_and_feel.graph_bounds(self.bounds);
        }
        for kind in [LabelKind::X, LabelKind::Y, LabelKind::Title] {
            let look_and_feel = Rc::clone(&self.look_and_feel);
            self.label_mut(kind).apply_style(look_and_feel.as_ref(), kind);
        }
        self.update_layout();
        self.needs_repaint = true;
    }

    /// Pushes the label primitives into `frame` and clears the dirty flag.
    pub fn paint(&mut self, frame: &mut RenderFrame) {
        for label in [&self.x_label, &self.y_label, &self.title_label] {
            label.paint(frame);
        }
        trace!(texts = frame.texts.len(), "painted plot labels");
        self.needs_repaint = false;
    }

    /// Paints into a fresh frame covering the component bounds and hands it to `renderer`.
    ///
    /// The component stays dirty when the renderer rejects the frame.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> PlotResult<()> {
        let mut frame = RenderFrame::new(self.bounds);
        self.paint(&mut frame);
        let result = renderer.render(&frame);
        if result.is_err() {
            self.needs_repaint = true;
        }
        result
    }

    fn set_text(&mut self, kind: LabelKind, text: String) {
        let label = self.label_mut(kind);
        if label.text == text {
            return;
        }
        debug!(?kind, text = %text, "set plot label text");
        label.text = text;
        self.needs_repaint = true;
    }

    fn label_mut(&mut self, kind: LabelKind) -> &mut LabelText {
        match kind {
            LabelKind::X => &mut self.x_label,
            LabelKind::Y => &mut self.y_label,
            LabelKind::Title => &mut self.title_label,
        }
    }

    fn update_layout(&mut self) {
        let layout = self
            .look_and_feel
            .label_layout(self.bounds, self.graph_bounds);
        self.x_label.area = layout.x_label;
        self.y_label.area = layout.y_label;
        self.title_label.area = layout.title;
        trace!(?layout, "plot label layout updated");
    }
}
