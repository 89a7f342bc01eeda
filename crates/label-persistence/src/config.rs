//! Carga de la configuración de tablas desde variables de entorno.
//! Convención `DYNAMODB_TABLE_PROD` / `DYNAMODB_TABLE_BETA`; `DYNAMODB_TABLE`
//! se acepta como tabla única para ambas ramas cuando falta la específica.

use std::env;
use once_cell::sync::Lazy;
use dotenvy::dotenv;
use label_domain::TargetTable;

pub const TABLE_PROD_VAR: &str = "DYNAMODB_TABLE_PROD";
pub const TABLE_BETA_VAR: &str = "DYNAMODB_TABLE_BETA";
pub const TABLE_LEGACY_VAR: &str = "DYNAMODB_TABLE";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    pub prod: Option<String>,
    pub beta: Option<String>,
}

impl TableConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Lee las tablas con una función de búsqueda arbitraria. Valores vacíos
    /// o sólo con espacios cuentan como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let read = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let legacy = read(TABLE_LEGACY_VAR);
        Self { prod: read(TABLE_PROD_VAR).or_else(|| legacy.clone()),
               beta: read(TABLE_BETA_VAR).or(legacy) }
    }

    pub fn table_for(&self, target: TargetTable) -> Option<&str> {
        match target {
            TargetTable::Prod => self.prod.as_deref(),
            TargetTable::Beta => self.beta.as_deref(),
        }
    }

    /// Nombre de la variable que falta declarar para `target`.
    pub fn variable_for(target: TargetTable) -> &'static str {
        match target {
            TargetTable::Prod => TABLE_PROD_VAR,
            TargetTable::Beta => TABLE_BETA_VAR,
        }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
