//! Registro de análisis: una fila por imagen y ejecución. Se crea una vez,
//! se escribe una vez y nunca se modifica.
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::{Branch, DomainError, LabelResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub filename: String,
    pub labels: Vec<LabelResult>,
    pub timestamp: DateTime<Utc>,
    pub branch: String,
}

impl AnalysisRecord {
    /// Crea el registro validando que `filename` no sea vacío. El orden de
    /// `labels` se conserva tal cual lo devolvió el servicio y el timestamp se
    /// trunca a microsegundos, la precisión con la que se persiste.
    pub fn new(filename: &str, labels: Vec<LabelResult>, branch: &Branch, timestamp: DateTime<Utc>) -> Result<Self, DomainError> {
        if filename.trim().is_empty() {
            return Err(DomainError::ValidationError("filename vacío".to_string()));
        }
        Ok(Self { filename: filename.to_string(), labels, timestamp: timestamp.trunc_subsecs(6), branch: branch.as_str().to_string() })
    }

    /// Timestamp ISO-8601 en UTC con microsegundos y offset explícito
    /// (`2026-10-16T08:30:00.123456+00:00`).
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
    }

    /// Inverso de `timestamp_iso`; acepta cualquier RFC 3339 y lo lleva a UTC.
    pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DomainError> {
        DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc))
                                         .map_err(|e| DomainError::ValidationError(format!("timestamp inválido '{raw}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_timestamp_iso_format() {
        let rec = AnalysisRecord::new("rekognition-input/a.jpg", vec![], &Branch::default(), sample_ts()).unwrap();
        assert_eq!(rec.timestamp_iso(), "2026-10-16T08:30:00.000000+00:00");
        assert_eq!(AnalysisRecord::parse_timestamp(&rec.timestamp_iso()).unwrap(), rec.timestamp);
    }

    #[test]
    fn test_timestamp_truncated_to_micros() {
        let ts = sample_ts() + chrono::Duration::nanoseconds(1_234_567);
        let rec = AnalysisRecord::new("k", vec![], &Branch::default(), ts).unwrap();
        assert_eq!(rec.timestamp_iso(), "2026-10-16T08:30:00.001234+00:00");
        assert_eq!(AnalysisRecord::parse_timestamp(&rec.timestamp_iso()).unwrap(), rec.timestamp);
    }

    #[test]
    fn test_branch_is_copied_as_string() {
        let branch = Branch::new("feature-x").unwrap();
        let rec = AnalysisRecord::new("k", vec![], &branch, sample_ts()).unwrap();
        assert_eq!(rec.branch, "feature-x");
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        assert!(AnalysisRecord::new(" ", vec![], &Branch::default(), sample_ts()).is_err());
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(AnalysisRecord::parse_timestamp("ayer").is_err());
    }
}
