use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::InferenceError;
use crate::providers::inference::trait_inference::{DetectedLabel, LabelDetector};

/// Parámetros recibidos por una llamada a `detect_labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectCall {
    pub bucket: String,
    pub key: String,
    pub max_labels: i32,
    pub min_confidence: Option<f32>,
}

/// Detector con respuesta fija. Simula el comportamiento del servicio:
/// filtra por `min_confidence` y corta en `max_labels`, conservando el orden.
pub struct FixedLabelDetector {
    labels: Vec<DetectedLabel>,
    calls: Mutex<Vec<DetectCall>>,
}

impl FixedLabelDetector {
    pub fn new(labels: Vec<DetectedLabel>) -> Self {
        Self { labels, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<DetectCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LabelDetector for FixedLabelDetector {
    fn get_name(&self) -> &str {
        "fixed"
    }

    async fn detect_labels(&self, bucket: &str, key: &str, max_labels: i32, min_confidence: Option<f32>) -> Result<Vec<DetectedLabel>, InferenceError> {
        self.calls
            .lock()
            .map_err(|_| InferenceError::Service("fixed detector lock poisoned".into()))?
            .push(DetectCall { bucket: bucket.to_string(), key: key.to_string(), max_labels, min_confidence });
        let threshold = min_confidence.unwrap_or(0.0);
        Ok(self.labels
               .iter()
               .filter(|l| l.confidence >= threshold)
               .take(usize::try_from(max_labels).unwrap_or(0))
               .cloned()
               .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> FixedLabelDetector {
        FixedLabelDetector::new(vec![DetectedLabel::new("Bird", 99.1), DetectedLabel::new("Animal", 95.0), DetectedLabel::new("Plant", 40.2)])
    }

    #[tokio::test]
    async fn test_threshold_and_cap() {
        let d = detector();
        let all = d.detect_labels("b", "k", 10, None).await.unwrap();
        assert_eq!(all.len(), 3);
        let filtered = d.detect_labels("b", "k", 10, Some(70.0)).await.unwrap();
        assert_eq!(filtered.iter().map(|l| l.name.as_str()).collect::<Vec<_>>(), vec!["Bird", "Animal"]);
        let capped = d.detect_labels("b", "k", 1, None).await.unwrap();
        assert_eq!(capped, vec![DetectedLabel::new("Bird", 99.1)]);
        assert_eq!(d.calls().len(), 3);
        assert_eq!(d.calls()[1].min_confidence, Some(70.0));
    }
}
