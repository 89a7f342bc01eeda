//! Contrato del almacén de registros y backend en memoria.
//!
//! El backend en memoria guarda items ya codificados con el mismo codec que
//! DynamoDB, de modo que leer de vuelta ejercita la misma conversión que en
//! producción. Misma política de colisión: la clave es `filename` y la
//! última escritura gana.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use label_domain::AnalysisRecord;

use crate::dynamo::{item_to_record, record_to_item};
use crate::error::PersistenceError;

type Item = HashMap<String, AttributeValue>;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserta un registro en `table`. Un registro con el mismo `filename`
    /// reemplaza al existente.
    async fn put_record(&self, table: &str, record: &AnalysisRecord) -> Result<(), PersistenceError>;
    /// Lee el registro de `filename` en `table`, si existe.
    async fn get_record(&self, table: &str, filename: &str) -> Result<Option<AnalysisRecord>, PersistenceError>;
}

#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: Mutex<HashMap<String, HashMap<String, Item>>>,
    puts: Mutex<Vec<(String, String)>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self { Self::default() }

    /// Escrituras realizadas como pares `(tabla, filename)`, en orden.
    pub fn puts(&self) -> Vec<(String, String)> {
        self.puts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Cantidad de items almacenados en `table`.
    pub fn len(&self, table: &str) -> usize {
        self.tables.lock().map(|t| t.get(table).map_or(0, |items| items.len())).unwrap_or(0)
    }

    pub fn is_empty(&self, table: &str) -> bool { self.len(table) == 0 }
}

fn poisoned<T>(_: T) -> PersistenceError { PersistenceError::Unknown("in-memory store lock poisoned".into()) }

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn put_record(&self, table: &str, record: &AnalysisRecord) -> Result<(), PersistenceError> {
        let item = record_to_item(record);
        self.tables.lock().map_err(poisoned)?.entry(table.to_string()).or_default().insert(record.filename.clone(), item);
        self.puts.lock().map_err(poisoned)?.push((table.to_string(), record.filename.clone()));
        Ok(())
    }

    async fn get_record(&self, table: &str, filename: &str) -> Result<Option<AnalysisRecord>, PersistenceError> {
        let tables = self.tables.lock().map_err(poisoned)?;
        tables.get(table).and_then(|items| items.get(filename)).map(item_to_record).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use label_domain::{Branch, LabelResult};

    fn record(filename: &str, label: &str) -> AnalysisRecord {
        AnalysisRecord::new(filename, vec![LabelResult::from_detection(label, 88.8).unwrap()], &Branch::default(), Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryRecordStore::new();
        let rec = record("a.jpg", "Cat");
        store.put_record("beta", &rec).await.unwrap();
        assert_eq!(store.get_record("beta", "a.jpg").await.unwrap(), Some(rec));
        assert_eq!(store.get_record("prod", "a.jpg").await.unwrap(), None);
        assert_eq!(store.puts(), vec![("beta".to_string(), "a.jpg".to_string())]);
    }

    #[tokio::test]
    async fn test_same_filename_overwrites() {
        let store = InMemoryRecordStore::new();
        store.put_record("beta", &record("a.jpg", "Cat")).await.unwrap();
        store.put_record("beta", &record("a.jpg", "Dog")).await.unwrap();
        assert_eq!(store.len("beta"), 1);
        assert_eq!(store.puts().len(), 2);
        let back = store.get_record("beta", "a.jpg").await.unwrap().unwrap();
        assert_eq!(back.labels[0].name(), "Dog");
    }
}
