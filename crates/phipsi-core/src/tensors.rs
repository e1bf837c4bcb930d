//!  TrainingSet->Tensor conversion for candle-based trainers
use crate::TrainingSet;
use candle_core::{Device, Result, Tensor};

/// The arrays of a [`TrainingSet`] as tensors on one device.
#[derive(Debug, Clone)]
pub struct TrainingTensors {
    /// `[rows, 20 * window]`, U8
    pub x: Tensor,
    /// `[rows]`, U32
    pub y: Tensor,
    /// `[rows]`, F32
    pub phi: Tensor,
    /// `[rows]`, F32
    pub psi: Tensor,
}

impl TrainingSet {
    pub fn to_tensors(&self, device: &Device) -> Result<TrainingTensors> {
        let (rows, cols) = self.x.dim();
        let x = Tensor::from_iter(self.x.iter().copied(), device)?.reshape((rows, cols))?;
        let y = Tensor::from_iter(self.y.iter().copied(), device)?;
        let phi = Tensor::from_iter(self.phi.iter().copied(), device)?;
        let psi = Tensor::from_iter(self.psi.iter().copied(), device)?;
        Ok(TrainingTensors { x, y, phi, psi })
    }
}
