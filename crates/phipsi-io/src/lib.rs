//! # phipsi-io
//!
//! Read backbone-angle datasets into [`phipsi_core::ProteinRecord`]s.
//!
//! The expected resource is a gzipped JSON object holding one named table, a list of
//! entries shaped like
//!
//! ```json
//! {"phipsi10882": [{"sequence": "MKV...", "phi": [null, -1.1, ...], "psi": [2.3, ..., null]}]}
//! ```
//!
//! Angles are radians. The first and last residue of each entry are dropped on load.
//!
mod dataset;

pub use self::dataset::{load, read_dataset, DatasetLoader, RawEntry, DEFAULT_TABLE};
