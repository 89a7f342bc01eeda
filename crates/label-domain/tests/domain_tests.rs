use chrono::Utc;
use label_domain::{AnalysisRecord, Branch, ImageArtifact, LabelResult, TargetTable};

#[test]
fn test_record_keeps_label_order_and_exact_confidences() {
    // Las confianzas deben sobrevivir la serialización como decimales exactos
    let labels = vec![LabelResult::from_detection("Bird", 99.87654).unwrap(),
                      LabelResult::from_detection("Animal", 82.554321).unwrap(),
                      LabelResult::from_detection("Beak", 70.1).unwrap(),];
    let art = ImageArtifact::from_path("images/birds.jpg", "rekognition-input/").unwrap();
    let branch = Branch::new("feature-x").unwrap();
    let rec = AnalysisRecord::new(art.key(), labels, &branch, Utc::now()).unwrap();

    let json = serde_json::to_value(&rec).unwrap();
    let confidences: Vec<&str> = json["labels"].as_array()
                                               .unwrap()
                                               .iter()
                                               .map(|l| l["confidence"].as_str().unwrap())
                                               .collect();
    assert_eq!(confidences, vec!["99.88", "82.55", "70.10"]);

    let back: AnalysisRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, rec);
    assert_eq!(back.labels.iter().map(|l| l.name()).collect::<Vec<_>>(), vec!["Bird", "Animal", "Beak"]);
}

#[test]
fn test_branch_to_table_routing() {
    assert_eq!(Branch::new("main").unwrap().target(), TargetTable::Prod);
    assert_eq!(Branch::new("feature-x").unwrap().target(), TargetTable::Beta);
    assert_eq!(Branch::first_non_blank::<_, String>([None, None]).target(), TargetTable::Beta);
}

#[test]
fn test_every_confidence_within_bounds() {
    for raw in [0.0_f32, 0.004, 12.3456, 50.0, 99.995, 99.999, 100.0] {
        let label = LabelResult::from_detection("X", raw).unwrap();
        let c = label.confidence();
        assert!(c >= rust_decimal::Decimal::ZERO && c <= rust_decimal::Decimal::ONE_HUNDRED, "raw {raw} -> {c}");
        assert!(c.scale() <= 2, "raw {raw} -> {c}");
    }
}
