//! Descubrimiento de imágenes de entrada.
//! Con ruta fija se procesa sólo esa imagen; si no, se listan los archivos
//! del directorio: primero los JPEG y luego los PNG, cada grupo ordenado por
//! nombre. No hay recursión en subdirectorios.
use std::fs;
use std::path::{Path, PathBuf};

use label_domain::ImageArtifact;
use log::debug;

use crate::config::DiscoveryConfig;
use crate::errors::PipelineError;

/// Grupos de extensiones aceptadas, en orden de procesamiento.
pub const EXTENSION_GROUPS: [&[&str]; 2] = [&["jpg", "jpeg"], &["png"]];

pub fn discover_images(cfg: &DiscoveryConfig, prefix: &str) -> Result<Vec<ImageArtifact>, PipelineError> {
    let paths = match &cfg.image_path {
        Some(path) if path.is_file() => vec![path.clone()],
        Some(path) => return Err(PipelineError::NoImagesFound(path.clone())),
        None => list_directory(&cfg.image_dir)?,
    };
    if paths.is_empty() {
        return Err(PipelineError::NoImagesFound(cfg.image_dir.clone()));
    }
    debug!("imágenes descubiertas: {}", paths.len());
    Ok(paths.iter().map(|p| ImageArtifact::from_path(p, prefix)).collect::<Result<Vec<_>, _>>()?)
}

fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let io_err = |source| PipelineError::Discovery { path: dir.to_path_buf(), source };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    let mut ordered = Vec::new();
    for group in EXTENSION_GROUPS {
        let mut matching: Vec<PathBuf> = files.iter().filter(|p| has_extension(p, group)).cloned().collect();
        matching.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        ordered.extend(matching);
    }
    Ok(ordered)
}

fn has_extension(path: &Path, group: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| group.iter().any(|g| e.eq_ignore_ascii_case(g)))
        .unwrap_or(false)
}
