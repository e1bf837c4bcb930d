//! Angular error under 2π periodicity.
use crate::{FeaturizeError, Result};
use ndarray::ArrayView1;
use std::f64::consts::TAU;

/// Smallest absolute difference between two angles in radians.
///
/// The raw difference is reduced modulo 2π and the minimum of `|d|`, `|d + 2π|`
/// and `|d - 2π|` is returned, so the result lies in `[0, π]` and does not change
/// when either angle moves by a whole turn. NaN inputs give NaN.
pub fn periodic_difference(reference: f32, predicted: f32) -> f64 {
    let d = (predicted as f64 - reference as f64).rem_euclid(TAU);
    d.abs().min((d + TAU).abs()).min((d - TAU).abs())
}

/// Root-mean-square periodic difference between two angle arrays (radians).
///
/// Two empty arrays have an error of 0.
pub fn angular_rmse(reference: ArrayView1<'_, f32>, predicted: ArrayView1<'_, f32>) -> Result<f32> {
    if reference.len() != predicted.len() {
        return Err(FeaturizeError::ShapeMismatch {
            expected: reference.len(),
            found: predicted.len(),
        });
    }
    if reference.is_empty() {
        return Ok(0.0);
    }
    let sum_sq: f64 = reference
        .iter()
        .zip(predicted.iter())
        .map(|(&r, &p)| periodic_difference(r, p).powi(2))
        .sum();
    Ok((sum_sq / reference.len() as f64).sqrt() as f32)
}
