use serde_json::Value;
use translate_pipeline_core::config::AppConfig;
use translate_pipeline_core::contract::{
    parse_object_event, GetObjectInput, PutObjectInput, TranslateDocumentInput,
    TranslateDocumentOutput,
};
use translate_pipeline_core::error::{PipelineError, PipelineStage};
use translate_pipeline_core::storage_keys::translated_object_key;
use tracing::{error, info, warn};

use crate::adapters::object_store::ObjectStore;
use crate::adapters::translation::DocumentTranslator;

/// Fetch, translate and store flow for one object event.
///
/// Steps run strictly in order; the first failure ends the invocation and
/// nothing is written unless translation succeeded.
pub struct TranslationPipeline<'a, S, T> {
    config: &'a AppConfig,
    object_store: &'a S,
    translator: &'a T,
}

impl<'a, S, T> TranslationPipeline<'a, S, T>
where
    S: ObjectStore,
    T: DocumentTranslator,
{
    pub fn new(config: &'a AppConfig, object_store: &'a S, translator: &'a T) -> Self {
        Self {
            config,
            object_store,
            translator,
        }
    }

    pub fn handle_event(&self, payload: Value) -> Result<Value, PipelineError> {
        info!(event = %payload, "received object event");

        match self.run(payload) {
            Ok(result) => {
                info!(result = %result, "translation completed");
                Ok(result)
            }
            Err(failure) => {
                log_failure(&failure);
                Err(failure)
            }
        }
    }

    fn run(&self, payload: Value) -> Result<Value, PipelineError> {
        let event = parse_object_event(payload)?;
        let bucket = event.bucket_name();
        let key = event.object_key();

        if bucket != self.config.source_bucket {
            warn!(
                bucket,
                configured_bucket = %self.config.source_bucket,
                "event bucket differs from configured source bucket"
            );
        }

        let source = self.fetch(bucket, key)?;
        let output = self.translate(bucket, key, source)?;
        self.store(key, &output)?;

        serde_json::to_value(&output)
            .map_err(|error| PipelineError::Serialization(error.to_string()))
    }

    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, PipelineError> {
        let input = GetObjectInput {
            bucket_name: bucket.to_string(),
            key: key.to_string(),
        };
        let body = self
            .object_store
            .get_object(&input)
            .map_err(|source| PipelineError::Gateway {
                stage: PipelineStage::ObjectFetched,
                bucket: input.bucket_name.clone(),
                key: input.key.clone(),
                source,
            })?;

        info!(bucket, key, bytes = body.len(), "source object fetched");
        Ok(body)
    }

    fn translate(
        &self,
        bucket: &str,
        key: &str,
        content: Vec<u8>,
    ) -> Result<TranslateDocumentOutput, PipelineError> {
        let input = TranslateDocumentInput::auto_detect_plain_text(
            content,
            &self.config.target_language_code,
        );
        let output = self
            .translator
            .translate_document(&input)
            .map_err(|source| PipelineError::Gateway {
                stage: PipelineStage::Translated,
                bucket: bucket.to_string(),
                key: key.to_string(),
                source,
            })?;

        info!(
            bucket,
            key,
            target_language = %output.target_language_code,
            detected_source_language = output.source_language_code.as_deref().unwrap_or("unknown"),
            "document translated"
        );
        Ok(output)
    }

    fn store(
        &self,
        source_key: &str,
        output: &TranslateDocumentOutput,
    ) -> Result<(), PipelineError> {
        let input = PutObjectInput {
            bucket_name: self.config.destination_bucket.clone(),
            key: translated_object_key(&self.config.target_language_code, source_key),
            body: output.translated_document.content.clone(),
        };

        self.object_store
            .put_object(&input)
            .map_err(|source| PipelineError::Gateway {
                stage: PipelineStage::ObjectStored,
                bucket: input.bucket_name.clone(),
                key: input.key.clone(),
                source,
            })?;

        info!(bucket = %input.bucket_name, key = %input.key, "translated object stored");
        Ok(())
    }
}

fn log_failure(failure: &PipelineError) {
    match failure {
        PipelineError::Gateway {
            stage,
            bucket,
            key,
            source,
        } => error!(
            stage = %stage,
            bucket = %bucket,
            key = %key,
            error_kind = %source.kind(),
            error = %source,
            "translation pipeline failed"
        ),
        other => error!(stage = %other.stage(), error = %other, "translation pipeline failed"),
    }
}
