use tracing::trace;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::plot_params::CommonPlotParameterView;
use crate::core::scale::ScaleTransform;
use crate::core::types::DownsamplingType;
use crate::error::{PlotError, PlotResult};

/// Returns the indices of the values that should be plotted for one graph line.
///
/// Reduction follows `view.downsampling_type`. The last index is always kept
/// so the line reaches its final value.
pub fn downsample_indices(
    view: &CommonPlotParameterView<'_>,
    x_values: &[f32],
    y_values: &[f32],
) -> PlotResult<Vec<usize>> {
    if x_values.len() != y_values.len() {
        return Err(PlotError::InvalidData(format!(
            "x/y value count mismatch: {} vs {}",
            x_values.len(),
            y_values.len()
        )));
    }
    if x_values.is_empty() {
        return Ok(Vec::new());
    }

    let indices = match *view.downsampling_type {
        DownsamplingType::NoDownsampling => (0..x_values.len()).collect(),
        DownsamplingType::XDownsampling => {
            let x_pixels = project_values(view.x_transform()?, x_values)?;
            x_downsample(&x_pixels)
        }
        DownsamplingType::XyDownsampling => {
            let x_pixels = project_values(view.x_transform()?, x_values)?;
            let y_pixels = project_values(view.y_transform()?, y_values)?;
            xy_downsample(&x_pixels, &y_pixels)
        }
    };

    trace!(
        total = x_values.len(),
        kept = indices.len(),
        mode = ?view.downsampling_type,
        "downsampled graph line"
    );
    Ok(indices)
}

#[cfg(not(feature = "parallel-projection"))]
fn project_values(transform: ScaleTransform, values: &[f32]) -> PlotResult<Vec<f64>> {
    values
        .iter()
        .map(|value| transform.value_to_pixel(f64::from(*value)))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_values(transform: ScaleTransform, values: &[f32]) -> PlotResult<Vec<f64>> {
    values
        .par_iter()
        .map(|value| transform.value_to_pixel(f64::from(*value)))
        .collect()
}

fn x_downsample(x_pixels: &[f64]) -> Vec<usize> {
    let mut kept = Vec::with_capacity(x_pixels.len().min(4096));
    let mut last_column = None;
    for (index, pixel) in x_pixels.iter().enumerate() {
        let column = pixel.floor() as i64;
        if last_column != Some(column) {
            kept.push(index);
            last_column = Some(column);
        }
    }
    push_last_index(&mut kept, x_pixels.len());
    kept
}

fn xy_downsample(x_pixels: &[f64], y_pixels: &[f64]) -> Vec<usize> {
    let mut kept = Vec::with_capacity(x_pixels.len().min(4096));
    let mut last_pixel = None;
    for (index, (x, y)) in x_pixels.iter().zip(y_pixels).enumerate() {
        let pixel = (x.round() as i64, y.round() as i64);
        if last_pixel != Some(pixel) {
            kept.push(index);
            last_pixel = Some(pixel);
        }
    }
    push_last_index(&mut kept, x_pixels.len());
    kept
}

fn push_last_index(kept: &mut Vec<usize>, len: usize) {
    let last = len - 1;
    if kept.last() != Some(&last) {
        kept.push(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_downsample_keeps_first_per_column_and_last() {
        let kept = x_downsample(&[0.1, 0.4, 0.9, 1.2, 1.8, 3.0, 3.5]);
        assert_eq!(kept, vec![0, 3, 5, 6]);
    }

    #[test]
    fn xy_downsample_skips_repeated_pixels_only() {
        let kept = xy_downsample(&[0.0, 0.2, 0.3, 1.0, 1.1], &[5.0, 5.1, 7.0, 7.0, 7.2]);
        assert_eq!(kept, vec![0, 2, 3, 4]);
    }
}
