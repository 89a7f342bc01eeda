use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use log::debug;

use crate::errors::TransferError;
use crate::providers::storage::trait_storage::{content_type_for, ObjectStore};

/// Object store sobre Amazon S3 (una sola `PutObject` por imagen).
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn get_name(&self) -> &str {
        "s3"
    }

    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<(), TransferError> {
        debug!("put_object bucket={bucket} key={key} size={}", bytes.len());
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type_for(key))
            .body(ByteStream::from(bytes))
            .send()
            .await?;
        Ok(())
    }
}
