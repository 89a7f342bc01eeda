//! Etiqueta devuelta por el servicio de inferencia, normalizada para
//! persistencia. La confianza se guarda como `Decimal` exacto con dos
//! decimales: el float binario del servicio nunca llega al almacén.
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Número de decimales con que se almacena la confianza.
pub const CONFIDENCE_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelResult {
    name: String,
    confidence: Decimal,
}

impl LabelResult {
    /// Construye una etiqueta a partir de la salida cruda del servicio.
    /// La confianza se redondea a dos decimales (mitad lejos de cero) pasando
    /// por la representación decimal más corta del `f32`, de modo que
    /// `82.554321` termina en `82.55` sin artefactos de precisión.
    pub fn from_detection(name: &str, confidence: f32) -> Result<Self, DomainError> {
        if !confidence.is_finite() || !(0.0..=100.0).contains(&confidence) {
            return Err(DomainError::ConfidenceOutOfRange { label: name.to_string(), value: confidence.to_string() });
        }
        let exact = Decimal::from_str(&confidence.to_string()).map_err(|e| DomainError::ValidationError(format!("confianza no representable '{confidence}': {e}")))?;
        let mut rounded = exact.round_dp_with_strategy(CONFIDENCE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(CONFIDENCE_SCALE);
        Self::new(name, rounded)
    }

    /// Construye una etiqueta con una confianza ya decimal (p. ej. al leer del
    /// almacén). No vuelve a redondear.
    pub fn new(name: &str, confidence: Decimal) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError("nombre de etiqueta vacío".to_string()));
        }
        if confidence < Decimal::ZERO || confidence > Decimal::ONE_HUNDRED {
            return Err(DomainError::ConfidenceOutOfRange { label: name.to_string(), value: confidence.to_string() });
        }
        Ok(Self { name: name.to_string(), confidence })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn confidence(&self) -> Decimal { self.confidence }
}

impl fmt::Display for LabelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.name, self.confidence)
    }
}
