use chrono::Utc;
use label_domain::{AnalysisRecord, Branch, LabelResult, TargetTable};
use label_persistence::{InMemoryRecordStore, RecordStore, TableConfig};

fn labels(raw: &[(&str, f32)]) -> Vec<LabelResult> {
    raw.iter().map(|(n, c)| LabelResult::from_detection(n, *c).unwrap()).collect()
}

#[tokio::test]
async fn test_written_record_reads_back_identical() {
    let store = InMemoryRecordStore::new();
    let branch = Branch::new("feature-x").unwrap();
    let rec = AnalysisRecord::new("rekognition-input/birds.jpg",
                                  labels(&[("Bird", 99.7712), ("Animal", 99.7712), ("Sparrow", 81.005), ("Plant", 55.5)]),
                                  &branch,
                                  Utc::now()).unwrap();
    store.put_record("labels-beta", &rec).await.unwrap();

    let back = store.get_record("labels-beta", "rekognition-input/birds.jpg").await.unwrap().expect("record present");
    assert_eq!(back.filename, rec.filename);
    assert_eq!(back.branch, "feature-x");
    let pairs: Vec<(String, String)> = back.labels.iter().map(|l| (l.name().to_string(), l.confidence().to_string())).collect();
    assert_eq!(pairs,
               vec![("Bird".to_string(), "99.77".to_string()),
                    ("Animal".to_string(), "99.77".to_string()),
                    ("Sparrow".to_string(), "81.01".to_string()),
                    ("Plant".to_string(), "55.50".to_string())]);
    assert_eq!(back, rec);
}

#[tokio::test]
async fn test_records_routed_per_branch_stay_in_their_table() {
    let cfg = TableConfig { prod: Some("labels-prod".into()), beta: Some("labels-beta".into()) };
    let store = InMemoryRecordStore::new();
    for name in ["main", "feature-x"] {
        let branch = Branch::new(name).unwrap();
        let table = cfg.table_for(branch.target()).unwrap();
        let rec = AnalysisRecord::new(&format!("k-{name}.jpg"), labels(&[("Cat", 90.0)]), &branch, Utc::now()).unwrap();
        store.put_record(table, &rec).await.unwrap();
    }
    assert_eq!(store.len("labels-prod"), 1);
    assert_eq!(store.len("labels-beta"), 1);
    assert!(store.get_record(cfg.table_for(TargetTable::Prod).unwrap(), "k-main.jpg").await.unwrap().is_some());
    assert!(store.get_record("labels-beta", "k-main.jpg").await.unwrap().is_none());
}
