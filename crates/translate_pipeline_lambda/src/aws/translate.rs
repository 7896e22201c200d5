use aws_sdk_translate::primitives::Blob;
use aws_sdk_translate::types::{Document, TranslatedDocument as ServiceDocument};
use translate_pipeline_core::contract::{
    TranslateDocumentInput, TranslateDocumentOutput, TranslatedDocument, AUTO_DETECT_LANGUAGE,
};
use translate_pipeline_core::error::{GatewayError, ServiceKind};

use super::{block_on, sdk_failure};
use crate::adapters::translation::DocumentTranslator;

pub struct AwsDocumentTranslator {
    client: aws_sdk_translate::Client,
}

impl AwsDocumentTranslator {
    pub fn new(client: aws_sdk_translate::Client) -> Self {
        Self { client }
    }
}

impl DocumentTranslator for AwsDocumentTranslator {
    fn translate_document(
        &self,
        input: &TranslateDocumentInput,
    ) -> Result<TranslateDocumentOutput, GatewayError> {
        let document = Document::builder()
            .content(Blob::new(input.content.clone()))
            .content_type(input.content_type.clone())
            .build()
            .map_err(|error| {
                GatewayError::unsupported_format(format!("invalid translation document: {error}"))
            })?;
        let source_language_code = input
            .source_language_code
            .clone()
            .unwrap_or_else(|| AUTO_DETECT_LANGUAGE.to_string());
        let target_language_code = input.target_language_code.clone();
        let client = self.client.clone();

        block_on(async move {
            let output = client
                .translate_document()
                .document(document)
                .source_language_code(source_language_code)
                .target_language_code(target_language_code)
                .send()
                .await
                .map_err(|error| {
                    sdk_failure(ServiceKind::Translation, "TranslateDocument", error)
                })?;

            translation_output(
                output.translated_document(),
                output.source_language_code(),
                output.target_language_code(),
            )
        })
    }
}

fn translation_output(
    document: Option<&ServiceDocument>,
    source_language_code: &str,
    target_language_code: &str,
) -> Result<TranslateDocumentOutput, GatewayError> {
    let document = document.ok_or_else(|| {
        GatewayError::transient("TranslateDocument returned no translated document")
    })?;

    Ok(TranslateDocumentOutput {
        translated_document: TranslatedDocument {
            content: document.content().as_ref().to_vec(),
        },
        source_language_code: Some(source_language_code.to_string())
            .filter(|code| !code.is_empty()),
        target_language_code: target_language_code.to_string(),
    })
}
