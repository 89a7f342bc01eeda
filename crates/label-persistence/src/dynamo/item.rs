//! Codec `AnalysisRecord` ↔ item DynamoDB.
//!
//! Forma del item:
//! - `filename`: S (clave de partición)
//! - `labels`: L de M `{Name: S, Confidence: N}` en el orden del servicio
//! - `timestamp`: S ISO-8601 UTC
//! - `branch`: S
//!
//! La confianza viaja como N con su representación decimal exacta, nunca
//! como float binario.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use label_domain::{AnalysisRecord, Branch, LabelResult};
use rust_decimal::Decimal;

use crate::error::PersistenceError;

pub const FILENAME_ATTR: &str = "filename";
pub const LABELS_ATTR: &str = "labels";
pub const TIMESTAMP_ATTR: &str = "timestamp";
pub const BRANCH_ATTR: &str = "branch";
pub const LABEL_NAME_ATTR: &str = "Name";
pub const LABEL_CONFIDENCE_ATTR: &str = "Confidence";

pub fn record_to_item(record: &AnalysisRecord) -> HashMap<String, AttributeValue> {
    let labels = record.labels
                       .iter()
                       .map(|l| {
                           AttributeValue::M(HashMap::from([(LABEL_NAME_ATTR.to_string(), AttributeValue::S(l.name().to_string())),
                                                            (LABEL_CONFIDENCE_ATTR.to_string(), AttributeValue::N(l.confidence().to_string()))]))
                       })
                       .collect();
    HashMap::from([(FILENAME_ATTR.to_string(), AttributeValue::S(record.filename.clone())),
                   (LABELS_ATTR.to_string(), AttributeValue::L(labels)),
                   (TIMESTAMP_ATTR.to_string(), AttributeValue::S(record.timestamp_iso())),
                   (BRANCH_ATTR.to_string(), AttributeValue::S(record.branch.clone()))])
}

pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<AnalysisRecord, PersistenceError> {
    let filename = string_attr(item, FILENAME_ATTR)?;
    let branch = Branch::new(string_attr(item, BRANCH_ATTR)?)?;
    let timestamp = AnalysisRecord::parse_timestamp(string_attr(item, TIMESTAMP_ATTR)?)?;
    let raw_labels = attr(item, LABELS_ATTR)?.as_l()
                                             .map_err(|_| PersistenceError::Decode(format!("attribute '{LABELS_ATTR}' is not a list")))?;
    let labels = raw_labels.iter().map(decode_label).collect::<Result<Vec<_>, _>>()?;
    Ok(AnalysisRecord::new(filename, labels, &branch, timestamp)?)
}

fn decode_label(value: &AttributeValue) -> Result<LabelResult, PersistenceError> {
    let map = value.as_m().map_err(|_| PersistenceError::Decode("label entry is not a map".into()))?;
    let name = string_attr(map, LABEL_NAME_ATTR)?;
    let raw = attr(map, LABEL_CONFIDENCE_ATTR)?.as_n()
                                               .map_err(|_| PersistenceError::Decode(format!("attribute '{LABEL_CONFIDENCE_ATTR}' is not a number")))?;
    let confidence = Decimal::from_str(raw).map_err(|e| PersistenceError::Decode(format!("confidence '{raw}': {e}")))?;
    Ok(LabelResult::new(name, confidence)?)
}

fn attr<'a>(item: &'a HashMap<String, AttributeValue>, name: &str) -> Result<&'a AttributeValue, PersistenceError> {
    item.get(name).ok_or_else(|| PersistenceError::Decode(format!("missing attribute '{name}'")))
}

fn string_attr<'a>(item: &'a HashMap<String, AttributeValue>, name: &str) -> Result<&'a str, PersistenceError> {
    attr(item, name)?.as_s()
                     .map(|s| s.as_str())
                     .map_err(|_| PersistenceError::Decode(format!("attribute '{name}' is not a string")))
}
