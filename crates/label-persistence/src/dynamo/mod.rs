//! Backend DynamoDB de `RecordStore`.
//!
//! - `put_record` inserta un item por registro; la clave es `filename`, por
//!   lo que una segunda ejecución con el mismo archivo sobrescribe el item
//!   anterior (última escritura gana).
//! - `get_record` hace una lectura consistente por `filename`.
//! - Sin reintentos: cualquier error del servicio se clasifica y se propaga.

mod item;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use label_domain::AnalysisRecord;
use log::{debug, error};

use crate::error::PersistenceError;
use crate::store::RecordStore;

pub use item::{item_to_record, record_to_item, FILENAME_ATTR};

pub struct DynamoRecordStore {
    client: Client,
}

impl DynamoRecordStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn put_record(&self, table: &str, record: &AnalysisRecord) -> Result<(), PersistenceError> {
        debug!("put_item table={table} filename={} labels={}", record.filename, record.labels.len());
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| {
                let err = PersistenceError::from(e);
                error!("put_item failed table={table} filename={}: {err}", record.filename);
                err
            })?;
        Ok(())
    }

    async fn get_record(&self, table: &str, filename: &str) -> Result<Option<AnalysisRecord>, PersistenceError> {
        let out = self.client
                      .get_item()
                      .table_name(table)
                      .key(FILENAME_ATTR, AttributeValue::S(filename.to_string()))
                      .consistent_read(true)
                      .send()
                      .await?;
        out.item().map(item_to_record).transpose()
    }
}
