use approx::assert_abs_diff_eq;
use flate2::write::GzEncoder;
use flate2::Compression;
use ndarray::ArrayView2;
use phipsi_core::{window_count, Featurizer, FeaturizeError, ANGLE_CHANNELS};
use phipsi_io::{load, read_dataset, DatasetLoader, DEFAULT_TABLE};
use phipsi_test_data::TestFile;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn gzip(value: &serde_json::Value) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(value.to_string().as_bytes())
        .expect("write to memory");
    encoder.finish().expect("finish gzip stream")
}

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

/// Two backbone states from the sign of sin(phi).
fn phi_sign(angle_vectors: ArrayView2<'_, f32>) -> Vec<u32> {
    angle_vectors
        .rows()
        .into_iter()
        .map(|row| u32::from(row[0] < 0.0))
        .collect()
}

#[test]
fn test_load_fixture() -> anyhow::Result<()> {
    let (path, _tmp) = TestFile::phipsi_01().create_temp()?;
    let records = load(&path)?;

    let lengths: Vec<usize> = records.iter().map(|r| r.len()).collect();
    assert_eq!(lengths, vec![8, 2, 18]);

    let first = &records[0];
    assert_eq!(first.to_one_letter(), "KTAYIAKQ");
    assert_abs_diff_eq!(first.phi()[0], -1.1, epsilon = 1e-6);
    assert_abs_diff_eq!(first.psi()[0], 1.9, epsilon = 1e-6);
    assert_abs_diff_eq!(first.phi()[7], -2.4832, epsilon = 1e-6);
    assert_abs_diff_eq!(first.psi()[7], -0.9, epsilon = 1e-6);
    assert!(records
        .iter()
        .all(|r| r.phi().iter().chain(r.psi()).all(|a| a.is_finite())));

    let av = first.angle_vectors();
    assert_eq!(av.dim(), (8, ANGLE_CHANNELS));
    assert_abs_diff_eq!(av[[0, 0]], (-1.1f32).sin(), epsilon = 1e-6);
    assert_abs_diff_eq!(av[[0, 1]], (-1.1f32).cos(), epsilon = 1e-6);
    assert_abs_diff_eq!(av[[0, 2]], 1.9f32.sin(), epsilon = 1e-6);
    assert_abs_diff_eq!(av[[0, 3]], 1.9f32.cos(), epsilon = 1e-6);

    assert_eq!(records[2].to_one_letter(), "CDEFGHIKLMNPQRSTVW");
    Ok(())
}

#[test]
fn test_read_from_memory_matches_file() -> anyhow::Result<()> {
    let fixture = TestFile::phipsi_01();
    let (path, _tmp) = fixture.create_temp()?;
    let from_file = DatasetLoader::builder().path(path).build().load()?;
    let from_memory = read_dataset(fixture.bytes(), DEFAULT_TABLE)?;
    assert_eq!(from_file, from_memory);
    Ok(())
}

#[test]
fn test_fixture_training_set() -> anyhow::Result<()> {
    let (path, _tmp) = TestFile::phipsi_01().create_temp()?;
    let records = load(&path)?;

    let featurizer = Featurizer::builder().window(3).build();
    let set = featurizer.training_set(&records, &phi_sign)?;

    let expected = window_count(8, 3) + window_count(2, 3) + window_count(18, 3);
    assert_eq!(expected, 22);
    assert_eq!(set.len(), expected);
    assert_eq!(set.x.dim(), (22, 60));
    assert_eq!(set.y.len(), 22);

    // first window is K T A; its center is T with phi = -0.4
    assert_abs_diff_eq!(set.phi[0], -0.4, epsilon = 1e-6);
    assert_eq!(set.y[0], 1);
    assert_abs_diff_eq!(set.psi[0], 1.5, epsilon = 1e-6);

    // GSHM trims to two residues, shorter than the window
    assert!(matches!(
        featurizer.features(&records[1..2]),
        Err(FeaturizeError::EmptyDataset { window: 3 })
    ));
    Ok(())
}

#[test]
fn test_unknown_residue() {
    let data = json!({
        "phipsi10882": [
            {"sequence": "MKVA", "phi": [null, 1.0, 1.0, 1.0], "psi": [1.0, 1.0, 1.0, null]},
            {"sequence": "MKJA", "phi": [null, 1.0, 1.0, 1.0], "psi": [1.0, 1.0, 1.0, null]},
        ]
    });
    let file = write_temp(&gzip(&data));
    assert!(matches!(
        load(file.path()),
        Err(FeaturizeError::UnknownResidue('J'))
    ));
}

#[test]
fn test_malformed_datasets() {
    let cases = [
        // wrong table name
        json!({"cullpdb": []}),
        // missing psi
        json!({"phipsi10882": [{"sequence": "MKVA", "phi": [0.0, 0.0, 0.0, 0.0]}]}),
        // angles do not match the sequence length
        json!({"phipsi10882": [{"sequence": "MKVA", "phi": [0.0, 0.0], "psi": [0.0, 0.0]}]}),
        // table is not a list
        json!({"phipsi10882": {"sequence": "MKVA"}}),
        // root is not an object
        json!([1, 2, 3]),
    ];
    for data in cases {
        let file = write_temp(&gzip(&data));
        let result = load(file.path());
        assert!(
            matches!(result, Err(FeaturizeError::DatasetFormat(_))),
            "expected DatasetFormat for {}",
            data
        );
    }
}

#[test]
fn test_multi_member_gzip() -> anyhow::Result<()> {
    let text = json!({
        "phipsi10882": [
            {"sequence": "MKVA", "phi": [null, -1.0, -1.1, -1.2], "psi": [2.0, 2.1, 2.2, null]},
            {"sequence": "GAVLG", "phi": [null, -1.0, -1.1, -1.2, -1.3], "psi": [2.0, 2.1, 2.2, 2.3, null]},
        ]
    })
    .to_string();
    let (head, tail) = text.split_at(text.len() / 2);

    let mut bytes = Vec::new();
    for part in [head, tail] {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(part.as_bytes())?;
        bytes.extend(encoder.finish()?);
    }

    let records = read_dataset(bytes.as_slice(), DEFAULT_TABLE)?;
    let sequences: Vec<String> = records.iter().map(|r| r.to_one_letter()).collect();
    assert_eq!(sequences, vec!["KV", "AVL"]);
    Ok(())
}

#[test]
fn test_not_gzipped() {
    let file = write_temp(br#"{"phipsi10882": []}"#);
    assert!(matches!(
        load(file.path()),
        Err(FeaturizeError::DatasetFormat(_))
    ));
}

#[test]
fn test_custom_table() -> anyhow::Result<()> {
    let data = json!({
        "cullpdb": [
            {"sequence": "GAVLG", "phi": [null, -1.0, -1.1, -1.2, -1.3], "psi": [2.0, 2.1, 2.2, 2.3, null]},
        ]
    });
    let file = write_temp(&gzip(&data));
    let records = DatasetLoader::builder()
        .path(file.path())
        .table("cullpdb")
        .build()
        .load()?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].to_one_letter(), "AVL");
    Ok(())
}

#[test]
fn test_missing_file() {
    let result = load("/nonexistent/phipsi.json.gz");
    assert!(matches!(result, Err(FeaturizeError::Io(_))));
}
