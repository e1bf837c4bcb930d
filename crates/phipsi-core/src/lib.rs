//! # phipsi-core
//!
//! Turn per-protein sequences and backbone dihedrals into fixed-width arrays for
//! training a windowed sequence classifier.
//!
//! __phipsi-core__ provides:
//! * a fixed 20-letter amino-acid encoder ([`AminoAcid`])
//! * the [`ProteinRecord`] produced by the dataset loader
//! * the sliding-window engine ([`windows`]) shared by every array builder
//! * the aligned `X` / `Y` / `PHI` / `PSI` builders and the [`Featurizer`] wrapper
//! * a periodic angular RMSE ([`angular_rmse`])
//!
//! Row `i` of every builder output describes the same window, so the arrays can be
//! zipped into `(feature, label, target)` tuples.
//!
mod cluster;
mod error;
mod featurize;
mod metrics;
mod record;
mod residue;
mod tensors;
mod window;

pub use self::cluster::Clusterer;
pub use self::error::{FeaturizeError, Result};
pub use self::featurize::{
    build_phi, build_psi, build_training_set, build_x, build_y, Featurizer, TrainingSet,
};
pub use self::metrics::{angular_rmse, periodic_difference};
pub use self::record::{angle_vectors, ProteinRecord, ANGLE_CHANNELS};
pub use self::residue::{AminoAcid, ALPHABET_SIZE};
pub use self::tensors::TrainingTensors;
pub use self::window::{centers, window_count, windows};
