//! Per-protein data after loading.
use crate::{AminoAcid, FeaturizeError, Result};
use itertools::izip;
use ndarray::{Array2, ArrayView2};

/// Channels of an angle vector: `[sin phi, cos phi, sin psi, cos psi]`.
pub const ANGLE_CHANNELS: usize = 4;

/// One protein with its interior residues only.
///
/// `sequence`, `phi`, `psi` and the rows of `angle_vectors` always have the same
/// length `L`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinRecord {
    sequence: Vec<AminoAcid>,
    phi: Vec<f32>,
    psi: Vec<f32>,
    angle_vectors: Array2<f32>,
}

impl ProteinRecord {
    /// Build a record from already-trimmed residues and angles (radians).
    pub fn new(sequence: Vec<AminoAcid>, phi: Vec<f32>, psi: Vec<f32>) -> Result<Self> {
        if phi.len() != sequence.len() || psi.len() != sequence.len() {
            return Err(FeaturizeError::DatasetFormat(format!(
                "sequence has {} residues but phi has {} and psi has {} angles",
                sequence.len(),
                phi.len(),
                psi.len()
            )));
        }
        let angle_vectors = angle_vectors(&phi, &psi)?;
        Ok(Self {
            sequence,
            phi,
            psi,
            angle_vectors,
        })
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn sequence(&self) -> &[AminoAcid] {
        &self.sequence
    }

    pub fn phi(&self) -> &[f32] {
        &self.phi
    }

    pub fn psi(&self) -> &[f32] {
        &self.psi
    }

    /// `[L, 4]` view of the sin/cos encoded angle pairs.
    pub fn angle_vectors(&self) -> ArrayView2<'_, f32> {
        self.angle_vectors.view()
    }

    /// One-letter rendering of the sequence.
    pub fn to_one_letter(&self) -> String {
        self.sequence.iter().map(|aa| aa.code1()).collect()
    }
}

/// Elementwise sin/cos of each (phi, psi) pair as an `[L, 4]` array.
pub fn angle_vectors(phi: &[f32], psi: &[f32]) -> Result<Array2<f32>> {
    if phi.len() != psi.len() {
        return Err(FeaturizeError::ShapeMismatch {
            expected: phi.len(),
            found: psi.len(),
        });
    }
    let mut out = Array2::zeros((phi.len(), ANGLE_CHANNELS));
    for (mut row, &p, &s) in izip!(out.rows_mut(), phi, psi) {
        row[0] = p.sin();
        row[1] = p.cos();
        row[2] = s.sin();
        row[3] = s.cos();
    }
    Ok(out)
}
