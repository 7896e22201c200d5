use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use translate_pipeline_core::config::AppConfig;
use translate_pipeline_core::contract::{
    GetObjectInput, PutObjectInput, TranslateDocumentInput, TranslateDocumentOutput,
    TranslatedDocument,
};
use translate_pipeline_core::error::GatewayError;
use translate_pipeline_lambda::adapters::object_store::ObjectStore;
use translate_pipeline_lambda::adapters::translation::DocumentTranslator;

/// Bucket/key addressed store that counts every call.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: Mutex<BTreeMap<(String, String), Vec<u8>>>,
    gets: Mutex<usize>,
    puts: Mutex<usize>,
}

impl InMemoryObjectStore {
    pub fn with_object(bucket: &str, key: &str, body: &str) -> Self {
        let store = Self::default();
        store
            .objects
            .lock()
            .expect("poisoned mutex")
            .insert((bucket.to_string(), key.to_string()), body.as_bytes().to_vec());
        store
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .expect("poisoned mutex")
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn keys_in(&self, bucket: &str) -> Vec<String> {
        self.objects
            .lock()
            .expect("poisoned mutex")
            .keys()
            .filter(|(object_bucket, _)| object_bucket == bucket)
            .map(|(_, key)| key.clone())
            .collect()
    }

    pub fn get_calls(&self) -> usize {
        *self.gets.lock().expect("poisoned mutex")
    }

    pub fn put_calls(&self) -> usize {
        *self.puts.lock().expect("poisoned mutex")
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn get_object(&self, input: &GetObjectInput) -> Result<Vec<u8>, GatewayError> {
        *self.gets.lock().expect("poisoned mutex") += 1;
        self.object(&input.bucket_name, &input.key)
            .ok_or_else(|| GatewayError::not_found(format!("NoSuchKey: {}", input.key)))
    }

    fn put_object(&self, input: &PutObjectInput) -> Result<(), GatewayError> {
        *self.puts.lock().expect("poisoned mutex") += 1;
        self.objects.lock().expect("poisoned mutex").insert(
            (input.bucket_name.clone(), input.key.clone()),
            input.body.clone(),
        );
        Ok(())
    }
}

/// Translates by phrasebook lookup and reports a fixed detected language.
pub struct PhrasebookTranslator {
    phrases: HashMap<String, String>,
    detected_language: String,
    supported_targets: Vec<String>,
    calls: Mutex<usize>,
}

impl PhrasebookTranslator {
    pub fn english_to_french() -> Self {
        Self {
            phrases: HashMap::from([
                ("Hello".to_string(), "Bonjour".to_string()),
                ("Thank you".to_string(), "Merci".to_string()),
            ]),
            detected_language: "en".to_string(),
            supported_targets: vec!["fr".to_string()],
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("poisoned mutex")
    }
}

impl DocumentTranslator for PhrasebookTranslator {
    fn translate_document(
        &self,
        input: &TranslateDocumentInput,
    ) -> Result<TranslateDocumentOutput, GatewayError> {
        *self.calls.lock().expect("poisoned mutex") += 1;

        if !self.supported_targets.contains(&input.target_language_code) {
            return Err(GatewayError::unsupported_language(format!(
                "UnsupportedLanguagePairException: {} -> {}",
                self.detected_language, input.target_language_code
            )));
        }

        let text = String::from_utf8(input.content.clone())
            .map_err(|error| GatewayError::unsupported_format(error.to_string()))?;
        let translated = self.phrases.get(&text).cloned().unwrap_or(text);

        Ok(TranslateDocumentOutput {
            translated_document: TranslatedDocument {
                content: translated.into_bytes(),
            },
            source_language_code: Some(self.detected_language.clone()),
            target_language_code: input.target_language_code.clone(),
        })
    }
}

pub fn config_with_target(target_language_code: &str) -> AppConfig {
    AppConfig {
        region: "eu-west-3".to_string(),
        source_bucket: "src".to_string(),
        destination_bucket: "dst".to_string(),
        target_language_code: target_language_code.to_string(),
    }
}
