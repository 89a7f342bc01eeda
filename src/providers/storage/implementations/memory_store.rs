use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::TransferError;
use crate::providers::storage::trait_storage::ObjectStore;

/// Object store en memoria para tests y ejecuciones en seco. Registra cada
/// `put` y puede configurarse para fallar siempre.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
    puts: Mutex<Vec<(String, String)>>,
    failure: Option<String>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store cuyo `put` siempre devuelve `TransferError::Service(message)`.
    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }

    /// Llamadas a `put` como pares `(bucket, key)`, en orden.
    pub fn puts(&self) -> Vec<(String, String)> {
        self.puts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().ok().and_then(|o| o.get(&(bucket.to_string(), key.to_string())).cloned())
    }
}

fn poisoned<T>(_: T) -> TransferError {
    TransferError::Service("in-memory store lock poisoned".into())
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    fn get_name(&self) -> &str {
        "in-memory"
    }

    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<(), TransferError> {
        self.puts.lock().map_err(poisoned)?.push((bucket.to_string(), key.to_string()));
        if let Some(message) = &self.failure {
            return Err(TransferError::Service(message.clone()));
        }
        self.objects.lock().map_err(poisoned)?.insert((bucket.to_string(), key.to_string()), bytes);
        Ok(())
    }
}
