//! Las tres etapas por imagen: subir, etiquetar y registrar.
//!
//! - Las dependencias externas (object store, detector, almacén de registros)
//!   se inyectan al construir el `Pipeline`; nada es global.
//! - Cada etapa espera a que termine su llamada externa antes de seguir.
//! - Un error en cualquier etapa se devuelve tal cual; no hay reintentos ni
//!   limpieza del objeto ya subido.
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use label_domain::{AnalysisRecord, Branch, ImageArtifact, LabelResult};
use label_persistence::{PersistenceError, RecordStore};
use log::{debug, error, info};

use crate::config::AppConfig;
use crate::errors::{InferenceError, PipelineError, TransferError};
use crate::providers::inference::LabelDetector;
use crate::providers::storage::ObjectStore;
use crate::workflow::stage::ImageStage;

pub struct Pipeline {
    object_store: Arc<dyn ObjectStore>,
    detector: Arc<dyn LabelDetector>,
    records: Arc<dyn RecordStore>,
}

impl Pipeline {
    pub fn new(object_store: Arc<dyn ObjectStore>, detector: Arc<dyn LabelDetector>, records: Arc<dyn RecordStore>) -> Self {
        Self { object_store, detector, records }
    }

    /// Sube el archivo local a `bucket/key`, creando o reemplazando el objeto.
    pub async fn upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<(), TransferError> {
        if bucket.trim().is_empty() || key.trim().is_empty() {
            return Err(TransferError::InvalidTarget(format!("bucket='{bucket}' key='{key}'")));
        }
        let bytes = tokio::fs::read(local_path).await
                                               .map_err(|source| TransferError::Io { path: local_path.to_path_buf(), source })?;
        let size = bytes.len();
        self.object_store.put(bucket, key, bytes).await?;
        debug!("{} guardó {} bytes en {key}", self.object_store.get_name(), size);
        info!("Uploaded {} to s3://{bucket}/{key}", local_path.display());
        Ok(())
    }

    /// Pide hasta `max_labels` etiquetas para el objeto ya subido y normaliza
    /// la confianza de cada una a decimal exacto con dos decimales.
    pub async fn detect_labels(&self, bucket: &str, key: &str, max_labels: i32, min_confidence: Option<f32>) -> Result<Vec<LabelResult>, InferenceError> {
        let detected = self.detector.detect_labels(bucket, key, max_labels, min_confidence).await?;
        debug!("{} devolvió {} etiquetas para {key}", self.detector.get_name(), detected.len());
        Ok(detected.iter()
                   .map(|d| LabelResult::from_detection(&d.name, d.confidence))
                   .collect::<Result<Vec<_>, _>>()?)
    }

    /// Inserta un registro nuevo en `table` con el timestamp UTC actual.
    pub async fn record(&self, table: &str, filename: &str, labels: Vec<LabelResult>, branch: &Branch) -> Result<AnalysisRecord, PersistenceError> {
        if table.trim().is_empty() {
            return Err(PersistenceError::Validation("table name is empty".into()));
        }
        let record = AnalysisRecord::new(filename, labels, branch, Utc::now())?;
        self.records.put_record(table, &record).await?;
        info!("Inserted result for {filename} into DynamoDB table {table}");
        Ok(record)
    }

    /// Lleva una imagen de `Discovered` a `Recorded`.
    pub async fn process_image(&self, artifact: &ImageArtifact, config: &AppConfig) -> Result<AnalysisRecord, PipelineError> {
        let mut stage = ImageStage::Discovered;
        let result = self.run_stages(artifact, config, &mut stage).await;
        if let Err(e) = &result {
            error!("{} falló después de '{stage}': {e}", artifact.file_name());
        }
        result
    }

    async fn run_stages(&self, artifact: &ImageArtifact, config: &AppConfig, stage: &mut ImageStage) -> Result<AnalysisRecord, PipelineError> {
        let bucket = &config.storage.bucket;

        self.upload(artifact.local_path(), bucket, artifact.key()).await?;
        advance(artifact, stage);

        let labels = self.detect_labels(bucket, artifact.key(), config.labeling.max_labels, config.labeling.min_confidence)
                         .await?;
        advance(artifact, stage);

        let record = self.record(&config.table, artifact.key(), labels, &config.branch).await?;
        advance(artifact, stage);
        Ok(record)
    }
}

fn advance(artifact: &ImageArtifact, stage: &mut ImageStage) {
    if let Some(next) = stage.next() {
        debug!("{}: {stage} -> {next}", artifact.file_name());
        *stage = next;
    }
}
