//! Construcción explícita de los clientes AWS a partir de `AwsSettings`.
//! Los clientes se crean una vez en `main` y se inyectan en el pipeline.
use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::Credentials;
use label_persistence::DynamoRecordStore;

use crate::config::AwsSettings;
use crate::providers::inference::implementations::rekognition::RekognitionDetector;
use crate::providers::storage::implementations::s3_store::S3ObjectStore;
use crate::workflow::pipeline::Pipeline;

/// Nombre con que aparecen las credenciales normalizadas en los logs del SDK.
const CREDENTIALS_PROVIDER_NAME: &str = "labelflow-env";

pub async fn load_sdk_config(settings: &AwsSettings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(settings.region.clone()));
    if let Some(creds) = &settings.credentials {
        loader = loader.credentials_provider(Credentials::new(creds.access_key_id.clone(),
                                                              creds.secret_access_key.clone(),
                                                              creds.session_token.clone(),
                                                              None,
                                                              CREDENTIALS_PROVIDER_NAME));
    }
    loader.load().await
}

/// Pipeline respaldado por S3, Rekognition y DynamoDB.
pub async fn build_pipeline(settings: &AwsSettings) -> Pipeline {
    let sdk = load_sdk_config(settings).await;
    Pipeline::new(Arc::new(S3ObjectStore::new(aws_sdk_s3::Client::new(&sdk))),
                  Arc::new(RekognitionDetector::new(aws_sdk_rekognition::Client::new(&sdk))),
                  Arc::new(DynamoRecordStore::new(aws_sdk_dynamodb::Client::new(&sdk))))
}
