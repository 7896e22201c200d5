use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EventParseError;

pub const AUTO_DETECT_LANGUAGE: &str = "auto";
pub const PLAIN_TEXT_CONTENT_TYPE: &str = "text/plain";
pub const MEDIA_SUBMITTED_STATUS: &str = "submitted";

/// EventBridge "Object Created" notification emitted by the object store.
///
/// Only `detail.bucket.name` and `detail.object.key` are required; the rest of
/// the envelope is kept so it can be logged alongside failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ObjectEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    pub detail: ObjectEventDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ObjectEventDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub bucket: BucketRef,
    pub object: ObjectRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectRef {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequencer: Option<String>,
}

impl ObjectEvent {
    pub fn bucket_name(&self) -> &str {
        &self.detail.bucket.name
    }

    pub fn object_key(&self) -> &str {
        &self.detail.object.key
    }
}

/// Parses a raw invocation payload into an [`ObjectEvent`].
///
/// Empty bucket names or object keys are rejected the same way as missing ones.
/// Whitespace is a legal key character and is kept as-is.
pub fn parse_object_event(payload: Value) -> Result<ObjectEvent, EventParseError> {
    if !payload.is_object() {
        return Err(EventParseError::Malformed(
            "event payload must be a JSON object".to_string(),
        ));
    }

    let event: ObjectEvent = serde_json::from_value(payload)
        .map_err(|error| EventParseError::Malformed(error.to_string()))?;

    if event.bucket_name().is_empty() {
        return Err(EventParseError::EmptyField("detail.bucket.name"));
    }
    if event.object_key().is_empty() {
        return Err(EventParseError::EmptyField("detail.object.key"));
    }

    Ok(event)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetObjectInput {
    pub bucket_name: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObjectInput {
    pub bucket_name: String,
    pub key: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateDocumentInput {
    pub content: Vec<u8>,
    pub content_type: String,
    /// `None` or [`AUTO_DETECT_LANGUAGE`] lets the service detect the language.
    pub source_language_code: Option<String>,
    pub target_language_code: String,
}

impl TranslateDocumentInput {
    pub fn auto_detect_plain_text(content: Vec<u8>, target_language_code: &str) -> Self {
        Self {
            content,
            content_type: PLAIN_TEXT_CONTENT_TYPE.to_string(),
            source_language_code: Some(AUTO_DETECT_LANGUAGE.to_string()),
            target_language_code: target_language_code.to_string(),
        }
    }
}

/// Translation result as returned to the invoker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslateDocumentOutput {
    pub translated_document: TranslatedDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    pub target_language_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatedDocument {
    #[serde(with = "text_content")]
    pub content: Vec<u8>,
}

// Plain-text documents are emitted as JSON strings rather than byte arrays.
mod text_content {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(content))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertMp4ToMp3Input {
    pub source_uri: String,
    pub destination_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaConversionSubmitted {
    pub status: String,
    pub source: String,
    pub destination: String,
    #[serde(
        rename = "jobId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub job_id: Option<String>,
}
