use std::path::PathBuf;

use label_domain::DomainError;
use label_persistence::PersistenceError;
use thiserror::Error;

use super::{ConfigError, InferenceError, TransferError};

/// Error de nivel proceso: cualquier fallo termina la ejecución.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Error de configuración: {0}")]
    Configuration(#[from] ConfigError),
    #[error("No se encontraron imágenes en {}", .0.display())]
    NoImagesFound(PathBuf),
    #[error("Error en IO al buscar imágenes en {}: {source}", path.display())]
    Discovery { path: PathBuf, #[source] source: std::io::Error },
    #[error("Imagen inválida: {0}")]
    InvalidImage(#[from] DomainError),
    #[error("Error al subir: {0}")]
    Transfer(#[from] TransferError),
    #[error("Error de inferencia: {0}")]
    Inference(#[from] InferenceError),
    #[error("Error de persistencia: {0}")]
    Persistence(#[from] PersistenceError),
}

impl PipelineError {
    /// Código de salida del proceso para este error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Configuration(_) => 2,
            PipelineError::NoImagesFound(_) => 3,
            PipelineError::Discovery { .. } | PipelineError::InvalidImage(_) => 4,
            PipelineError::Transfer(_) | PipelineError::Inference(_) | PipelineError::Persistence(_) => 5,
        }
    }
}
