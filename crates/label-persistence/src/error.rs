//! Errores de persistencia.
//! Mapea errores del SDK de DynamoDB a variantes semánticas según el código
//! de error que devuelve el servicio.

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use label_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("table not found: {0}")]
    TableNotFound(String),
    #[error("throughput exceeded / throttled: {0}")]
    Throttled(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("request rejected by validation: {0}")]
    Validation(String),
    #[error("transient IO / connection error: {0}")]
    TransientIo(String),
    #[error("item decode error: {0}")]
    Decode(String),
    #[error("invalid record: {0}")]
    Domain(#[from] DomainError),
    #[error("unknown store error: {0}")]
    Unknown(String),
}

impl PersistenceError {
    /// Clasifica a partir del código de error del servicio.
    pub fn from_code(code: Option<&str>, detail: String) -> Self {
        match code {
            Some("ResourceNotFoundException") => Self::TableNotFound(detail),
            Some("ProvisionedThroughputExceededException" | "ThrottlingException" | "RequestLimitExceeded") => Self::Throttled(detail),
            Some("AccessDeniedException" | "UnrecognizedClientException") => Self::AccessDenied(detail),
            Some("ValidationException") => Self::Validation(detail),
            _ => Self::Unknown(detail),
        }
    }
}

impl<E, R> From<SdkError<E, R>> for PersistenceError
    where E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
          R: std::fmt::Debug + Send + Sync + 'static
{
    fn from(err: SdkError<E, R>) -> Self {
        let detail = DisplayErrorContext(&err).to_string();
        match &err {
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => Self::TransientIo(detail),
            _ => Self::from_code(err.code(), detail),
        }
    }
}
