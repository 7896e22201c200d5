use aws_sdk_s3::primitives::ByteStream;
use translate_pipeline_core::contract::{GetObjectInput, PutObjectInput};
use translate_pipeline_core::error::{GatewayError, ServiceKind};

use super::{block_on, sdk_failure};
use crate::adapters::object_store::ObjectStore;

pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

impl ObjectStore for S3ObjectStore {
    fn get_object(&self, input: &GetObjectInput) -> Result<Vec<u8>, GatewayError> {
        let client = self.client.clone();
        let bucket = input.bucket_name.clone();
        let key = input.key.clone();

        block_on(async move {
            let output = client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|error| sdk_failure(ServiceKind::ObjectStorage, "GetObject", error))?;

            let body = output.body.collect().await.map_err(|error| {
                GatewayError::transient(format!("GetObject body read failed: {error}"))
            })?;
            Ok(body.into_bytes().to_vec())
        })
    }

    fn put_object(&self, input: &PutObjectInput) -> Result<(), GatewayError> {
        let client = self.client.clone();
        let bucket = input.bucket_name.clone();
        let key = input.key.clone();
        let body = input.body.clone();

        block_on(async move {
            client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(ByteStream::from(body))
                .send()
                .await
                .map(|_| ())
                .map_err(|error| sdk_failure(ServiceKind::ObjectStorage, "PutObject", error))
        })
    }
}
