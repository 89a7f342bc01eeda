use async_trait::async_trait;
use aws_sdk_rekognition::types::{Image, Label, S3Object};
use aws_sdk_rekognition::Client;
use log::debug;

use crate::errors::InferenceError;
use crate::providers::inference::trait_inference::{DetectedLabel, LabelDetector};

/// Detector respaldado por Amazon Rekognition `DetectLabels` sobre un objeto S3.
pub struct RekognitionDetector {
    client: Client,
}

impl RekognitionDetector {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LabelDetector for RekognitionDetector {
    fn get_name(&self) -> &str {
        "rekognition"
    }

    async fn detect_labels(&self, bucket: &str, key: &str, max_labels: i32, min_confidence: Option<f32>) -> Result<Vec<DetectedLabel>, InferenceError> {
        debug!("detect_labels bucket={bucket} key={key} max_labels={max_labels} min_confidence={min_confidence:?}");
        let image = Image::builder().s3_object(S3Object::builder().bucket(bucket).name(key).build()).build();
        let out = self.client
                      .detect_labels()
                      .image(image)
                      .max_labels(max_labels)
                      .set_min_confidence(min_confidence)
                      .send()
                      .await?;
        out.labels().iter().map(to_detected).collect()
    }
}

/// Una etiqueta de la respuesta sin nombre o sin confianza invalida la respuesta completa.
fn to_detected(label: &Label) -> Result<DetectedLabel, InferenceError> {
    match (label.name(), label.confidence()) {
        (Some(name), Some(confidence)) => Ok(DetectedLabel::new(name, confidence)),
        _ => Err(InferenceError::MalformedResponse(format!("label sin nombre o confianza: {label:?}"))),
    }
}
