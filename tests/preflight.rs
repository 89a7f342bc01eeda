use std::collections::HashMap;
use std::sync::Arc;

use label_persistence::InMemoryRecordStore;
use labelflow_rust::errors::ConfigError;
use labelflow_rust::providers::inference::implementations::fixed_detector::FixedLabelDetector;
use labelflow_rust::providers::inference::DetectedLabel;
use labelflow_rust::providers::storage::implementations::memory_store::InMemoryObjectStore;
use labelflow_rust::{run_from_lookup, Pipeline, PipelineError};

fn lookup(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
    move |k| map.get(k).cloned()
}

fn fakes() -> (Pipeline, Arc<InMemoryObjectStore>, Arc<FixedLabelDetector>, Arc<InMemoryRecordStore>) {
    let objects = Arc::new(InMemoryObjectStore::new());
    let detector = Arc::new(FixedLabelDetector::new(vec![DetectedLabel::new("Bird", 90.0)]));
    let records = Arc::new(InMemoryRecordStore::new());
    (Pipeline::new(objects.clone(), detector.clone(), records.clone()), objects, detector, records)
}

#[tokio::test]
async fn test_missing_bucket_halts_before_upload() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("birds.jpg"), b"img").unwrap();
    let (pipeline, objects, detector, records) = fakes();

    let err = run_from_lookup(lookup(&[("DYNAMODB_TABLE_BETA", "labels-beta".into()), ("IMAGE_DIR", tmp.path().display().to_string())]),
                              &pipeline).await
                                        .unwrap_err();

    assert!(matches!(err, PipelineError::Configuration(ConfigError::Missing("S3_BUCKET"))));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(objects.puts().len(), 0);
    assert!(detector.calls().is_empty());
    assert!(records.puts().is_empty());
}

#[tokio::test]
async fn test_missing_prod_table_on_main_halts_before_upload() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("birds.jpg"), b"img").unwrap();
    let (pipeline, objects, _, _) = fakes();

    let err = run_from_lookup(lookup(&[("S3_BUCKET", "test-bucket".into()),
                                       ("DYNAMODB_TABLE_BETA", "labels-beta".into()),
                                       ("BRANCH_NAME", "main".into()),
                                       ("IMAGE_DIR", tmp.path().display().to_string())]),
                              &pipeline).await
                                        .unwrap_err();

    assert!(matches!(err, PipelineError::Configuration(ConfigError::Missing("DYNAMODB_TABLE_PROD"))));
    assert!(objects.puts().is_empty());
}

#[tokio::test]
async fn test_empty_image_directory_makes_no_external_calls() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("notes.txt"), b"not an image").unwrap();
    let (pipeline, objects, detector, records) = fakes();

    let err = run_from_lookup(lookup(&[("S3_BUCKET", "test-bucket".into()),
                                       ("DYNAMODB_TABLE_BETA", "labels-beta".into()),
                                       ("IMAGE_DIR", tmp.path().display().to_string())]),
                              &pipeline).await
                                        .unwrap_err();

    assert!(matches!(err, PipelineError::NoImagesFound(_)));
    assert_eq!(err.exit_code(), 3);
    assert!(objects.puts().is_empty());
    assert!(detector.calls().is_empty());
    assert!(records.puts().is_empty());
}
