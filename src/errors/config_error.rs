use thiserror::Error;

/// Errores de configuración detectados antes de cualquier llamada externa.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Falta la variable de configuración requerida: {0}")]
    Missing(&'static str),
    #[error("Valor inválido para {key}: '{value}' ({reason})")]
    Invalid { key: &'static str, value: String, reason: String },
}
