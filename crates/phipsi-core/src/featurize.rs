//! Aligned training arrays.
//!
//! Every builder walks the proteins in order and, per protein, the windows in
//! the order produced by [`windows`]. Row `i` of `X`, `Y`, `PHI` and `PSI` built
//! from the same records and window size therefore describes the same window.
//!
//! Per-protein extraction runs on the rayon pool; results are collected in
//! protein order before being concatenated.
use crate::window::{centers, window_count, windows};
use crate::{Clusterer, FeaturizeError, ProteinRecord, Result, ALPHABET_SIZE};
use bon::Builder;
use ndarray::{Array1, Array2};
use rayon::prelude::*;

// Helper Fns --------------------------------------

fn ensure_windows(rows: usize, window: usize) -> Result<()> {
    if rows == 0 {
        return Err(FeaturizeError::EmptyDataset { window });
    }
    Ok(())
}

/// One-hot rows for one protein, flattened row-major: `[n_windows * width]`.
fn one_hot_windows(record: &ProteinRecord, window: usize, width: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(window_count(record.len(), window) * width);
    for block in windows(record.sequence(), window) {
        let start = out.len();
        out.resize(start + width, 0);
        for (pos, aa) in block.iter().enumerate() {
            out[start + pos * ALPHABET_SIZE + aa.index()] = 1;
        }
    }
    out
}

/// Run `per_protein` on every record and concatenate the results in record order.
fn stack_centers<T, F>(records: &[ProteinRecord], window: usize, per_protein: F) -> Result<Vec<T>>
where
    T: Clone + Send,
    F: Fn(&ProteinRecord) -> Result<Vec<T>> + Sync + Send,
{
    let chunks = records
        .par_iter()
        .map(per_protein)
        .collect::<Result<Vec<Vec<T>>>>()?;
    let stacked = chunks.concat();
    ensure_windows(stacked.len(), window)?;
    Ok(stacked)
}

// Builders --------------------------------------

/// Feature matrix `X` of shape `[rows, 20 * window]`.
///
/// Each row is one window with every residue one-hot encoded and the window
/// flattened position-major. A row count whose `X` would not fit in `usize`
/// elements is reported as `ShapeMismatch`.
pub fn build_x(records: &[ProteinRecord], window: usize) -> Result<Array2<u8>> {
    let rows: usize = records
        .iter()
        .map(|record| window_count(record.len(), window))
        .sum();
    ensure_windows(rows, window)?;
    let width = ALPHABET_SIZE
        .checked_mul(window)
        .filter(|width| rows.checked_mul(*width).is_some())
        .ok_or(FeaturizeError::ShapeMismatch {
            expected: rows,
            found: 0,
        })?;

    let chunks: Vec<Vec<u8>> = records
        .par_iter()
        .map(|record| one_hot_windows(record, window, width))
        .collect();
    let data = chunks.concat();
    log::debug!("built X: {} rows x {} columns (window {})", rows, width, window);

    let found = data.len();
    Array2::from_shape_vec((rows, width), data).map_err(|_| FeaturizeError::ShapeMismatch {
        expected: rows * width,
        found,
    })
}

/// Label vector `Y`: the cluster ID of each window's center residue.
///
/// `clusterer` is applied to each protein's angle vectors before windowing.
pub fn build_y<C>(records: &[ProteinRecord], window: usize, clusterer: &C) -> Result<Array1<u32>>
where
    C: Clusterer + Sync + ?Sized,
{
    let labels = stack_centers(records, window, |record| {
        let ids = clusterer.assign(record.angle_vectors());
        if ids.len() != record.len() {
            return Err(FeaturizeError::ShapeMismatch {
                expected: record.len(),
                found: ids.len(),
            });
        }
        Ok(centers(&ids, window).collect())
    })?;
    log::debug!("built Y: {} labels (window {})", labels.len(), window);
    Ok(Array1::from_vec(labels))
}

/// Center phi angle of every window, aligned with [`build_x`].
pub fn build_phi(records: &[ProteinRecord], window: usize) -> Result<Array1<f32>> {
    let phi = stack_centers(records, window, |record| {
        Ok(centers(record.phi(), window).collect())
    })?;
    log::debug!("built PHI: {} angles (window {})", phi.len(), window);
    Ok(Array1::from_vec(phi))
}

/// Center psi angle of every window, aligned with [`build_x`].
pub fn build_psi(records: &[ProteinRecord], window: usize) -> Result<Array1<f32>> {
    let psi = stack_centers(records, window, |record| {
        Ok(centers(record.psi(), window).collect())
    })?;
    log::debug!("built PSI: {} angles (window {})", psi.len(), window);
    Ok(Array1::from_vec(psi))
}

/// The four aligned arrays for one window size.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    pub window: usize,
    /// one-hot windows `[rows, 20 * window]`
    pub x: Array2<u8>,
    /// center cluster IDs `[rows]`
    pub y: Array1<u32>,
    /// center phi `[rows]`
    pub phi: Array1<f32>,
    /// center psi `[rows]`
    pub psi: Array1<f32>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }
}

/// Build `X`, `Y`, `PHI` and `PSI` together and check that they line up.
pub fn build_training_set<C>(
    records: &[ProteinRecord],
    window: usize,
    clusterer: &C,
) -> Result<TrainingSet>
where
    C: Clusterer + Sync + ?Sized,
{
    let x = build_x(records, window)?;
    let y = build_y(records, window, clusterer)?;
    let phi = build_phi(records, window)?;
    let psi = build_psi(records, window)?;

    for found in [y.len(), phi.len(), psi.len()] {
        if found != x.nrows() {
            return Err(FeaturizeError::ShapeMismatch {
                expected: x.nrows(),
                found,
            });
        }
    }
    log::info!(
        "training set: {} windows of {} residues from {} proteins",
        x.nrows(),
        window,
        records.len()
    );
    Ok(TrainingSet {
        window,
        x,
        y,
        phi,
        psi,
    })
}

/// Window-size configuration shared by all builders.
///
/// ```ignore
/// let featurizer = Featurizer::builder().window(17).build();
/// let x = featurizer.features(&records)?;
/// ```
#[derive(Builder, Debug, Clone, Copy)]
pub struct Featurizer {
    window: usize,
}

impl Featurizer {
    pub fn window(&self) -> usize {
        self.window
    }

    /// Rows every builder will produce for `records`.
    pub fn rows(&self, records: &[ProteinRecord]) -> usize {
        records
            .iter()
            .map(|record| window_count(record.len(), self.window))
            .sum()
    }

    pub fn features(&self, records: &[ProteinRecord]) -> Result<Array2<u8>> {
        build_x(records, self.window)
    }

    pub fn labels<C>(&self, records: &[ProteinRecord], clusterer: &C) -> Result<Array1<u32>>
    where
        C: Clusterer + Sync + ?Sized,
    {
        build_y(records, self.window, clusterer)
    }

    pub fn phi(&self, records: &[ProteinRecord]) -> Result<Array1<f32>> {
        build_phi(records, self.window)
    }

    pub fn psi(&self, records: &[ProteinRecord]) -> Result<Array1<f32>> {
        build_psi(records, self.window)
    }

    pub fn training_set<C>(&self, records: &[ProteinRecord], clusterer: &C) -> Result<TrainingSet>
    where
        C: Clusterer + Sync + ?Sized,
    {
        build_training_set(records, self.window, clusterer)
    }
}
