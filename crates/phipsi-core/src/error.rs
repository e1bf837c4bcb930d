use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeaturizeError {
    #[error("unknown residue symbol {0:?}")]
    UnknownResidue(char),
    #[error("malformed dataset: {0}")]
    DatasetFormat(String),
    #[error("window size {window} produced no windows for any protein")]
    EmptyDataset { window: usize },
    #[error("shape mismatch: expected length {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeaturizeError>;
