//! Contrato del servicio de inferencia de etiquetas.
//! El objeto ya debe existir en `bucket/key`. El servicio devuelve las
//! etiquetas en su orden de ranking; el filtrado por confianza mínima, si se
//! pide, ocurre del lado del servicio.
use async_trait::async_trait;

use crate::errors::InferenceError;

/// Etiqueta tal como la devuelve el servicio, antes de normalizar.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLabel {
    pub name: String,
    pub confidence: f32,
}

impl DetectedLabel {
    pub fn new(name: &str, confidence: f32) -> Self {
        Self { name: name.to_string(), confidence }
    }
}

#[async_trait]
pub trait LabelDetector: Send + Sync {
    fn get_name(&self) -> &str;

    async fn detect_labels(&self, bucket: &str, key: &str, max_labels: i32, min_confidence: Option<f32>) -> Result<Vec<DetectedLabel>, InferenceError>;
}
