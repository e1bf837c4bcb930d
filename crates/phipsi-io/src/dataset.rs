use bon::Builder;
use flate2::read::MultiGzDecoder;
use phipsi_core::{AminoAcid, FeaturizeError, ProteinRecord, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Table name of the reference dataset.
pub const DEFAULT_TABLE: &str = "phipsi10882";

/// One entry of the dataset table, as stored.
///
/// `phi` and `psi` have one value per residue of `sequence`; `null` marks an
/// undefined angle (usually the first phi and the last psi).
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub sequence: String,
    pub phi: Vec<Option<f32>>,
    pub psi: Vec<Option<f32>>,
}

impl RawEntry {
    /// Drop both termini, encode the interior residues and derive angle vectors.
    ///
    /// Terminal residues are not encoded, so a non-canonical symbol at either end
    /// is accepted. Missing interior angles become NaN.
    pub fn into_record(self) -> Result<ProteinRecord> {
        let n = self.sequence.chars().count();
        if self.phi.len() != n || self.psi.len() != n {
            return Err(FeaturizeError::DatasetFormat(format!(
                "sequence has {} residues but phi has {} and psi has {} angles",
                n,
                self.phi.len(),
                self.psi.len()
            )));
        }
        let interior = if n >= 2 { 1..n - 1 } else { 0..0 };

        let sequence = self
            .sequence
            .chars()
            .skip(interior.start)
            .take(interior.len())
            .map(AminoAcid::encode)
            .collect::<Result<Vec<_>>>()?;
        let phi = self.phi[interior.clone()]
            .iter()
            .map(|a| a.unwrap_or(f32::NAN))
            .collect();
        let psi = self.psi[interior]
            .iter()
            .map(|a| a.unwrap_or(f32::NAN))
            .collect();

        ProteinRecord::new(sequence, phi, psi)
    }
}

/// Loader configuration.
///
/// ```ignore
/// let records = DatasetLoader::builder()
///     .path("data/phipsi.json.gz")
///     .build()
///     .load()?;
/// ```
#[derive(Builder, Debug, Clone)]
pub struct DatasetLoader {
    #[builder(into)]
    path: PathBuf,
    #[builder(into, default = DEFAULT_TABLE.to_owned())]
    table: String,
}

impl DatasetLoader {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn load(&self) -> Result<Vec<ProteinRecord>> {
        let file = File::open(&self.path)?;
        let records = read_dataset(BufReader::new(file), &self.table)?;
        log::info!(
            "loaded {} proteins ({} residues) from {}",
            records.len(),
            records.iter().map(ProteinRecord::len).sum::<usize>(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Load `path` using the default table name.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ProteinRecord>> {
    DatasetLoader::builder()
        .path(path.as_ref())
        .build()
        .load()
}

/// Decompress and parse a dataset from any reader of gzipped JSON.
///
/// Concatenated gzip members are read as one stream.
pub fn read_dataset<R: Read>(reader: R, table: &str) -> Result<Vec<ProteinRecord>> {
    let mut root: Map<String, Value> = serde_json::from_reader(MultiGzDecoder::new(reader))
        .map_err(|e| FeaturizeError::DatasetFormat(format!("not a gzipped JSON object: {}", e)))?;

    let entries = root
        .remove(table)
        .ok_or_else(|| FeaturizeError::DatasetFormat(format!("table {:?} not found", table)))?;
    let entries: Vec<RawEntry> = serde_json::from_value(entries)
        .map_err(|e| FeaturizeError::DatasetFormat(format!("table {:?}: {}", table, e)))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let record = entry.into_record().map_err(|e| match e {
                FeaturizeError::DatasetFormat(msg) => {
                    FeaturizeError::DatasetFormat(format!("entry {}: {}", idx, msg))
                }
                other => other,
            })?;
            let missing = record
                .phi()
                .iter()
                .chain(record.psi())
                .filter(|a| a.is_nan())
                .count();
            if missing > 0 {
                log::warn!("entry {}: {} interior angles are missing", idx, missing);
            }
            Ok(record)
        })
        .collect()
}
