use translate_pipeline_core::contract::{GetObjectInput, PutObjectInput};
use translate_pipeline_core::error::GatewayError;

pub trait ObjectStore {
    fn get_object(&self, input: &GetObjectInput) -> Result<Vec<u8>, GatewayError>;

    /// Unconditional write; an existing object at the key is replaced.
    fn put_object(&self, input: &PutObjectInput) -> Result<(), GatewayError>;
}
