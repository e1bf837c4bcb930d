use ndarray::ArrayView2;

/// Assigns a discrete backbone-state label to each residue.
///
/// Implementations are trained elsewhere (k-means over angle vectors, for
/// instance); this crate only consumes the assignment. `assign` receives the
/// `[L, 4]` angle vectors of one protein and must return exactly `L` IDs, and the
/// same input must always produce the same IDs.
pub trait Clusterer {
    fn assign(&self, angle_vectors: ArrayView2<'_, f32>) -> Vec<u32>;
}

impl<F> Clusterer for F
where
    F: Fn(ArrayView2<'_, f32>) -> Vec<u32>,
{
    fn assign(&self, angle_vectors: ArrayView2<'_, f32>) -> Vec<u32> {
        self(angle_vectors)
    }
}
