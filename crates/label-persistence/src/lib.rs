//! label-persistence
//!
//! Almacén de registros de análisis. Expone el contrato `RecordStore` con dos
//! implementaciones con paridad 1:1: un backend en memoria (tests y
//! ejecuciones locales) y un backend DynamoDB. Ambos comparten el mismo
//! codec de items para que lo leído reproduzca exactamente lo escrito.
//!
//! Módulos:
//! - `config`: tablas destino por rama, cargadas desde el entorno / .env.
//! - `dynamo`: backend DynamoDB y codec `AnalysisRecord` ↔ item.
//! - `error`: clasificación de errores del almacén.
//! - `store`: trait `RecordStore` y backend en memoria.

pub mod config;
pub mod dynamo;
pub mod error;
pub mod store;

pub use config::{init_dotenv, TableConfig};
pub use dynamo::{item_to_record, record_to_item, DynamoRecordStore};
pub use error::PersistenceError;
pub use store::{InMemoryRecordStore, RecordStore};
