//! LabelFlow Rust Library
//!
//! Pipeline de etiquetado de imágenes: sube cada imagen a S3, pide etiquetas
//! a Rekognition y registra el resultado en DynamoDB, eligiendo la tabla
//! según la rama.
//! - `config`: configuración validada y normalizada al arrancar.
//! - `errors`: taxonomía de errores por etapa.
//! - `providers`: contratos del object store y del detector, con backends AWS
//!   y en memoria.
//! - `discovery`: búsqueda de imágenes de entrada.
//! - `workflow`: etapas por imagen y driver.
//! - `aws`: construcción de clientes para el binario.
//!
//! Los registros y su almacén viven en `label-domain` y `label-persistence`.

pub mod aws;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod providers;
pub mod workflow;

pub use config::AppConfig;
pub use errors::PipelineError;
pub use workflow::driver::{run, run_from_lookup, RunSummary};
pub use workflow::pipeline::Pipeline;
