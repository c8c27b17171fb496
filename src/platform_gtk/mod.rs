use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::{PlotLabel, PlotLookAndFeel};
use crate::core::Bounds;
use crate::error::PlotResult;
use crate::render::{CairoContextRenderer, CairoRenderer, RenderFrame};

/// Hosts a [`PlotLabel`] inside a GTK `DrawingArea`.
///
/// Size changes reach the component as `resized` calls with the graph area
/// chosen by its look-and-feel; paints go through the Cairo backend.
pub struct GtkPlotLabelAdapter {
    drawing_area: gtk::DrawingArea,
    label: Rc<RefCell<PlotLabel>>,
}

impl GtkPlotLabelAdapter {
    pub fn new(label: PlotLabel) -> PlotResult<Self> {
        let drawing_area = gtk::DrawingArea::new();
        let label = Rc::new(RefCell::new(label));
        let renderer = RefCell::new(CairoRenderer::new(1, 1)?);

        let draw_label = Rc::clone(&label);
        drawing_area.set_draw_func(move |_, context, width, height| {
            let mut label = draw_label.borrow_mut();
            let bounds = Bounds::new(0, 0, width, height);
            if label.bounds() != bounds {
                let graph_bounds = label.look_and_feel().graph_bounds(bounds);
                label.resized(bounds, graph_bounds);
            }

            let mut frame = RenderFrame::new(bounds);
            label.paint(&mut frame);
            if let Err(err) = renderer
                .borrow_mut()
                .render_on_cairo_context(context, &frame)
            {
                warn!(error = %err, "failed to draw plot labels");
            }
        });

        Ok(Self {
            drawing_area,
            label,
        })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Runs `update` on the hosted label and queues a redraw when it became dirty.
    pub fn update_label<T>(&self, update: impl FnOnce(&mut PlotLabel) -> T) -> T {
        let (output, needs_repaint) = {
            let mut label = self.label.borrow_mut();
            let output = update(&mut label);
            (output, label.needs_repaint())
        };
        if needs_repaint {
            self.drawing_area.queue_draw();
        }
        output
    }
}
