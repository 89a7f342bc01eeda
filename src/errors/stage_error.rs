//! Errores de las etapas que hablan con servicios externos (subida e
//! inferencia). Cada uno clasifica el `SdkError` por su código de servicio;
//! no se reintenta nada.
use std::path::PathBuf;

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use label_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("No se pudo leer {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },
    #[error("Destino inválido: {0}")]
    InvalidTarget(String),
    #[error("Bucket inexistente: {0}")]
    NoSuchBucket(String),
    #[error("Acceso denegado al object store: {0}")]
    AccessDenied(String),
    #[error("Error de transporte: {0}")]
    Transport(String),
    #[error("Error del object store: {0}")]
    Service(String),
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Imagen inválida para inferencia: {0}")]
    InvalidImage(String),
    #[error("Acceso denegado al servicio de inferencia: {0}")]
    AccessDenied(String),
    #[error("Cuota excedida: {0}")]
    Throttled(String),
    #[error("Servicio de inferencia no disponible: {0}")]
    Unavailable(String),
    #[error("Respuesta malformada: {0}")]
    MalformedResponse(String),
    #[error("Error del servicio de inferencia: {0}")]
    Service(String),
}

impl TransferError {
    pub fn from_code(code: Option<&str>, detail: String) -> Self {
        match code {
            Some("NoSuchBucket") => Self::NoSuchBucket(detail),
            Some("AccessDenied" | "InvalidAccessKeyId" | "SignatureDoesNotMatch" | "ExpiredToken") => Self::AccessDenied(detail),
            _ => Self::Service(detail),
        }
    }
}

impl InferenceError {
    pub fn from_code(code: Option<&str>, detail: String) -> Self {
        match code {
            Some("InvalidS3ObjectException" | "InvalidImageFormatException" | "ImageTooLargeException" | "InvalidParameterException") => Self::InvalidImage(detail),
            Some("AccessDeniedException") => Self::AccessDenied(detail),
            Some("ProvisionedThroughputExceededException" | "ThrottlingException" | "LimitExceededException") => Self::Throttled(detail),
            Some("InternalServerError") => Self::Unavailable(detail),
            _ => Self::Service(detail),
        }
    }
}

/// `true` si el fallo ocurrió antes de obtener respuesta del servicio.
fn is_transport<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(err, SdkError::TimeoutError(_) | SdkError::DispatchFailure(_))
}

impl<E, R> From<SdkError<E, R>> for TransferError
    where E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
          R: std::fmt::Debug + Send + Sync + 'static
{
    fn from(err: SdkError<E, R>) -> Self {
        let detail = DisplayErrorContext(&err).to_string();
        if is_transport(&err) {
            return Self::Transport(detail);
        }
        Self::from_code(err.code(), detail)
    }
}

impl<E, R> From<SdkError<E, R>> for InferenceError
    where E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
          R: std::fmt::Debug + Send + Sync + 'static
{
    fn from(err: SdkError<E, R>) -> Self {
        let detail = DisplayErrorContext(&err).to_string();
        if is_transport(&err) {
            return Self::Unavailable(detail);
        }
        Self::from_code(err.code(), detail)
    }
}

impl From<DomainError> for InferenceError {
    fn from(e: DomainError) -> Self {
        InferenceError::MalformedResponse(e.to_string())
    }
}
