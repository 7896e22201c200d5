use translate_pipeline_core::contract::{TranslateDocumentInput, TranslateDocumentOutput};
use translate_pipeline_core::error::GatewayError;

pub trait DocumentTranslator {
    fn translate_document(
        &self,
        input: &TranslateDocumentInput,
    ) -> Result<TranslateDocumentOutput, GatewayError>;
}
