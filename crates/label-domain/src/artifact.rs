//! Imagen local lista para subirse al object store.
//! La clave remota se deriva una sola vez a partir del prefijo configurado y
//! del nombre de archivo; después de construida la estructura no cambia.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageArtifact {
    local_path: PathBuf,
    file_name: String,
    key: String,
}

impl ImageArtifact {
    /// Construye el artefacto a partir de una ruta local y un prefijo de clave.
    /// `prefix` puede venir con o sin `/` final; la clave resultante siempre
    /// tiene un único separador (`<prefix>/<file_name>`). Un prefijo vacío
    /// deja la clave igual al nombre de archivo.
    pub fn from_path(path: impl AsRef<Path>, prefix: &str) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file_name = path.file_name()
                            .and_then(|n| n.to_str())
                            .filter(|n| !n.is_empty())
                            .ok_or_else(|| DomainError::ValidationError(format!("ruta sin nombre de archivo válido: {}", path.display())))?
                            .to_string();
        let key = object_key(prefix, &file_name);
        Ok(Self { local_path: path.to_path_buf(), file_name, key })
    }

    pub fn local_path(&self) -> &Path { &self.local_path }
    pub fn file_name(&self) -> &str { &self.file_name }
    pub fn key(&self) -> &str { &self.key }
}

impl fmt::Display for ImageArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.local_path.display(), self.key)
    }
}

fn object_key(prefix: &str, file_name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        file_name.to_string()
    } else {
        format!("{prefix}/{file_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_with_trailing_slash_prefix() {
        let art = ImageArtifact::from_path("images/birds.jpg", "rekognition-input/").unwrap();
        assert_eq!(art.key(), "rekognition-input/birds.jpg");
        assert_eq!(art.file_name(), "birds.jpg");
        assert_eq!(art.local_path(), Path::new("images/birds.jpg"));
    }

    #[test]
    fn test_key_without_trailing_slash_prefix() {
        let art = ImageArtifact::from_path("images/birds.jpg", "rekognition-input").unwrap();
        assert_eq!(art.key(), "rekognition-input/birds.jpg");
    }

    #[test]
    fn test_empty_prefix_uses_file_name() {
        let art = ImageArtifact::from_path("/tmp/cat.PNG", "").unwrap();
        assert_eq!(art.key(), "cat.PNG");
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let err = ImageArtifact::from_path("/", "prefix").unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }
}
