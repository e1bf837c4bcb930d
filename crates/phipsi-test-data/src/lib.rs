//! phipsi-test-data
//!
//! Dataset fixtures embedded in the crate for use in testing.
//!
//! The fixtures are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for loaders to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use phipsi_test_data::TestFile;
/// let (dataset, _temp) = TestFile::phipsi_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Three proteins in the `phipsi10882` table, gzipped JSON.
    ///
    /// | sequence               | raw length | trimmed length |
    /// |------------------------|------------|----------------|
    /// | `MKTAYIAKQR`           | 10         | 8              |
    /// | `GSHM`                 | 4          | 2              |
    /// | `ACDEFGHIKLMNPQRSTVWY` | 20         | 18             |
    ///
    /// Terminal angles (first phi, last psi) are `null`.
    pub fn phipsi_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/phipsi/phipsi_small.json.gz"),
            suffix: "json.gz",
        }
    }

    pub fn bytes(&self) -> &'static [u8] {
        self.filebinary
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
