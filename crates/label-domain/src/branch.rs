//! Rama de código a la que pertenece una ejecución. Sólo se usa como clave
//! de enrutamiento para elegir la tabla de destino.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Nombre de la rama que enruta a producción.
pub const PRODUCTION_BRANCH: &str = "main";
/// Rama usada cuando el entorno no declara ninguna.
pub const DEFAULT_BRANCH: &str = "local";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch(String);

/// Tabla lógica de destino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetTable {
    Prod,
    Beta,
}

impl Branch {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError("nombre de rama vacío".to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Toma el primer candidato no vacío; si no hay ninguno usa `local`.
    pub fn first_non_blank<I, S>(candidates: I) -> Self
        where I: IntoIterator<Item = Option<S>>,
              S: AsRef<str>
    {
        candidates.into_iter()
                  .flatten()
                  .find_map(|c| Branch::new(c.as_ref()).ok())
                  .unwrap_or_else(|| Self(DEFAULT_BRANCH.to_string()))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// `main` va a producción; cualquier otra rama va a beta.
    pub fn target(&self) -> TargetTable {
        if self.0 == PRODUCTION_BRANCH { TargetTable::Prod } else { TargetTable::Beta }
    }
}

impl Default for Branch {
    fn default() -> Self { Self(DEFAULT_BRANCH.to_string()) }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl fmt::Display for TargetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetTable::Prod => f.write_str("prod"),
            TargetTable::Beta => f.write_str("beta"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_routes_to_prod() {
        assert_eq!(Branch::new("main").unwrap().target(), TargetTable::Prod);
    }

    #[test]
    fn test_other_branches_route_to_beta() {
        for name in ["feature-x", "develop", "Main", "main-hotfix", DEFAULT_BRANCH] {
            assert_eq!(Branch::new(name).unwrap().target(), TargetTable::Beta, "branch {name}");
        }
        assert_eq!(Branch::default().target(), TargetTable::Beta);
    }

    #[test]
    fn test_first_non_blank_skips_empty_candidates() {
        let b = Branch::first_non_blank([None, Some(""), Some("  "), Some("feature-y"), Some("main")]);
        assert_eq!(b.as_str(), "feature-y");
    }

    #[test]
    fn test_first_non_blank_defaults_to_local() {
        let b = Branch::first_non_blank::<_, &str>([None, Some("")]);
        assert_eq!(b.as_str(), DEFAULT_BRANCH);
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(Branch::new(" main\n").unwrap().target(), TargetTable::Prod);
    }
}
