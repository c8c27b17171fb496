use crate::core::lim::Lim;
use crate::core::types::{Bounds, Scaling};
use crate::error::{PlotError, PlotResult};

/// Maps axis values into one pixel dimension of the graph bounds.
///
/// Horizontal transforms grow left to right. Vertical transforms are flipped
/// so that `max` lands on the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    scaling: Scaling,
    domain_start: f64,
    domain_end: f64,
    start_px: f64,
    length_px: f64,
    flipped: bool,
}

impl ScaleTransform {
    pub fn horizontal(lim: Lim<f64>, scaling: Scaling, bounds: Bounds) -> PlotResult<Self> {
        Self::new(
            lim,
            scaling,
            f64::from(bounds.x),
            f64::from(bounds.width),
            false,
        )
    }

    pub fn vertical(lim: Lim<f64>, scaling: Scaling, bounds: Bounds) -> PlotResult<Self> {
        Self::new(
            lim,
            scaling,
            f64::from(bounds.y),
            f64::from(bounds.height),
            true,
        )
    }

    fn new(
        lim: Lim<f64>,
        scaling: Scaling,
        start_px: f64,
        length_px: f64,
        flipped: bool,
    ) -> PlotResult<Self> {
        if !lim.min.is_finite() || !lim.max.is_finite() {
            return Err(PlotError::InvalidData(
                "axis limits must be finite".to_owned(),
            ));
        }
        if scaling == Scaling::Logarithmic && (lim.min <= 0.0 || lim.max <= 0.0) {
            return Err(PlotError::InvalidData(
                "logarithmic axis limits must be > 0".to_owned(),
            ));
        }

        let domain_start = map_value(lim.min, scaling);
        let domain_end = map_value(lim.max, scaling);
        if domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "axis limits must span a non-zero range".to_owned(),
            ));
        }

        Ok(Self {
            scaling,
            domain_start,
            domain_end,
            start_px,
            length_px,
            flipped,
        })
    }

    #[must_use]
    pub fn scaling(self) -> Scaling {
        self.scaling
    }

    pub fn value_to_pixel(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }
        if self.scaling == Scaling::Logarithmic && value <= 0.0 {
            return Err(PlotError::InvalidData(
                "logarithmic axis value must be > 0".to_owned(),
            ));
        }

        let normalized = (map_value(value, self.scaling) - self.domain_start)
            / (self.domain_end - self.domain_start);
        let offset = if self.flipped {
            (1.0 - normalized) * self.length_px
        } else {
            normalized * self.length_px
        };
        Ok(self.start_px + offset)
    }

    pub fn pixel_to_value(self, pixel: f64) -> PlotResult<f64> {
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }
        if self.length_px == 0.0 {
            return Err(PlotError::InvalidData(
                "axis pixel length must be non-zero".to_owned(),
            ));
        }

        let mut normalized = (pixel - self.start_px) / self.length_px;
        if self.flipped {
            normalized = 1.0 - normalized;
        }
        let mapped = self.domain_start + normalized * (self.domain_end - self.domain_start);
        Ok(invert_value(mapped, self.scaling))
    }
}

fn map_value(value: f64, scaling: Scaling) -> f64 {
    match scaling {
        Scaling::Linear => value,
        Scaling::Logarithmic => value.log10(),
    }
}

fn invert_value(value: f64, scaling: Scaling) -> f64 {
    match scaling {
        Scaling::Linear => value,
        Scaling::Logarithmic => 10f64.powf(value),
    }
}
