//! Contrato del object store: subir bytes a `bucket/key`. Crea o reemplaza
//! exactamente un objeto; los errores de transporte o permisos se devuelven
//! tal cual al llamador.
use async_trait::async_trait;

use crate::errors::TransferError;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    fn get_name(&self) -> &str;

    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<(), TransferError>;
}

/// Content-Type según la extensión de la clave.
pub fn content_type_for(key: &str) -> &'static str {
    match key.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
