//! Driver: valida configuración, descubre imágenes y las procesa una por
//! una en orden de descubrimiento. El primer fallo corta la ejecución.
use label_domain::{AnalysisRecord, Branch};
use log::info;

use crate::config::AppConfig;
use crate::discovery::discover_images;
use crate::errors::PipelineError;
use crate::workflow::pipeline::Pipeline;

/// Resultado de una ejecución completa.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub table: String,
    pub branch: Branch,
    /// Registros escritos, en orden de procesamiento.
    pub records: Vec<AnalysisRecord>,
}

pub async fn run(config: &AppConfig, pipeline: &Pipeline) -> Result<RunSummary, PipelineError> {
    let images = discover_images(&config.discovery, &config.storage.prefix)?;
    info!("branch '{}' -> tabla {} ({} imágenes)", config.branch, config.table, images.len());
    let mut records = Vec::with_capacity(images.len());
    for artifact in &images {
        records.push(pipeline.process_image(artifact, config).await?);
    }
    Ok(RunSummary { table: config.table.clone(), branch: config.branch.clone(), records })
}

/// Resuelve la configuración con `lookup` y ejecuta. Un error de
/// configuración corta antes de tocar el sistema de archivos o los servicios.
pub async fn run_from_lookup<F>(lookup: F, pipeline: &Pipeline) -> Result<RunSummary, PipelineError>
    where F: Fn(&str) -> Option<String>
{
    let config = AppConfig::from_lookup(lookup)?;
    run(&config, pipeline).await
}
