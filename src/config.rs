//! Configuración central de la aplicación.
//! Se resuelve una sola vez al arrancar a partir de variables de entorno
//! (.env incluido) y se valida completa antes de cualquier llamada externa.
//! Aquí también se normalizan las credenciales (recorte de espacios), de
//! modo que el resto del código recibe valores limpios.
use std::env;
use std::fmt;
use std::path::PathBuf;

use label_domain::{Branch, TargetTable};
use label_persistence::TableConfig;

use crate::errors::ConfigError;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_PREFIX: &str = "rekognition-input/";
pub const DEFAULT_MAX_LABELS: i32 = 10;
pub const DEFAULT_IMAGE_DIR: &str = "images";

/// Variables consultadas, en orden de prioridad, para el nombre de rama.
pub const BRANCH_VARS: [&str; 3] = ["BRANCH_NAME", "GITHUB_HEAD_REF", "GITHUB_REF_NAME"];

/// Configuración global de la aplicación.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub aws: AwsSettings,
    pub storage: StorageConfig,
    pub labeling: LabelingConfig,
    pub discovery: DiscoveryConfig,
    pub branch: Branch,
    /// Tabla efectiva para `branch`, ya resuelta.
    pub table: String,
}

#[derive(Debug, Clone)]
pub struct AwsSettings {
    pub region: String,
    /// Credenciales explícitas; `None` delega en la cadena por defecto del SDK.
    pub credentials: Option<StaticCredentials>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
         .field("access_key_id", &self.access_key_id)
         .field("secret_access_key", &"** redacted **")
         .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
         .finish()
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub prefix: String,
}

#[derive(Debug, Clone)]
pub struct LabelingConfig {
    pub max_labels: i32,
    /// Umbral enviado al servicio; `None` no filtra.
    pub min_confidence: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub image_dir: PathBuf,
    /// Ruta fija; si está presente reemplaza la búsqueda en `image_dir`.
    pub image_path: Option<PathBuf>,
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso (cargando .env antes).
    pub fn from_env() -> Result<Self, ConfigError> {
        label_persistence::init_dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Construye y valida la configuración a partir de una función de
    /// búsqueda. Valores vacíos o sólo con espacios cuentan como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let read = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bucket = read("S3_BUCKET").ok_or(ConfigError::Missing("S3_BUCKET"))?;
        let prefix = read("S3_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let branch = Branch::first_non_blank(BRANCH_VARS.iter().map(|k| read(*k)));
        let tables = TableConfig::from_lookup(&lookup);
        let target: TargetTable = branch.target();
        let table = tables.table_for(target)
                          .map(str::to_string)
                          .ok_or(ConfigError::Missing(TableConfig::variable_for(target)))?;

        let max_labels = match read("MAX_LABELS") {
            Some(raw) => parse_max_labels(&raw)?,
            None => DEFAULT_MAX_LABELS,
        };
        let min_confidence = read("MIN_CONFIDENCE").map(|raw| parse_min_confidence(&raw)).transpose()?;

        let region = read("AWS_REGION").or_else(|| read("AWS_DEFAULT_REGION")).unwrap_or_else(|| DEFAULT_REGION.to_string());
        let credentials = normalize_credentials(read("AWS_ACCESS_KEY_ID"), read("AWS_SECRET_ACCESS_KEY"), read("AWS_SESSION_TOKEN"))?;

        let image_dir = read("IMAGE_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_DIR));
        let image_path = read("IMAGE_PATH").map(PathBuf::from);

        Ok(Self { aws: AwsSettings { region, credentials },
                  storage: StorageConfig { bucket, prefix },
                  labeling: LabelingConfig { max_labels, min_confidence },
                  discovery: DiscoveryConfig { image_dir, image_path },
                  branch,
                  table })
    }
}

fn parse_max_labels(raw: &str) -> Result<i32, ConfigError> {
    match raw.parse::<i32>() {
        Ok(n) if n >= 1 => Ok(n),
        Ok(_) => Err(ConfigError::Invalid { key: "MAX_LABELS", value: raw.to_string(), reason: "debe ser >= 1".into() }),
        Err(e) => Err(ConfigError::Invalid { key: "MAX_LABELS", value: raw.to_string(), reason: e.to_string() }),
    }
}

fn parse_min_confidence(raw: &str) -> Result<f32, ConfigError> {
    match raw.parse::<f32>() {
        Ok(v) if (0.0..=100.0).contains(&v) => Ok(v),
        Ok(_) => Err(ConfigError::Invalid { key: "MIN_CONFIDENCE", value: raw.to_string(), reason: "fuera de [0, 100]".into() }),
        Err(e) => Err(ConfigError::Invalid { key: "MIN_CONFIDENCE", value: raw.to_string(), reason: e.to_string() }),
    }
}

/// Las claves llegan ya recortadas; se exige el par completo o ninguno.
fn normalize_credentials(access_key_id: Option<String>,
                         secret_access_key: Option<String>,
                         session_token: Option<String>)
                         -> Result<Option<StaticCredentials>, ConfigError> {
    match (access_key_id, secret_access_key) {
        (Some(access_key_id), Some(secret_access_key)) => Ok(Some(StaticCredentials { access_key_id, secret_access_key, session_token })),
        (Some(_), None) => Err(ConfigError::Missing("AWS_SECRET_ACCESS_KEY")),
        (None, Some(_)) => Err(ConfigError::Missing("AWS_ACCESS_KEY_ID")),
        (None, None) => Ok(None),
    }
}
