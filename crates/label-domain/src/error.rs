use thiserror::Error;

/// Errores de validación de los valores del dominio.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),

    #[error("Confianza fuera de rango para '{label}': {value}")]
    ConfidenceOutOfRange { label: String, value: String },
}
