use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventParseError {
    #[error("malformed event: {0}")]
    Malformed(String),
    #[error("malformed event: `{0}` is empty")]
    EmptyField(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    NotFound,
    Access,
    Transient,
    UnsupportedLanguage,
    UnsupportedFormat,
}

impl GatewayErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Access => "access_denied",
            Self::Transient => "transient",
            Self::UnsupportedLanguage => "unsupported_language",
            Self::UnsupportedFormat => "unsupported_format",
        }
    }
}

impl fmt::Display for GatewayErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by any external service gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    kind: GatewayErrorKind,
    message: String,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::NotFound, message)
    }

    pub fn access(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Access, message)
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Transient, message)
    }

    pub fn unsupported_language(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::UnsupportedLanguage, message)
    }

    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::UnsupportedFormat, message)
    }

    pub fn kind(&self) -> GatewayErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// External service a gateway talks to. Each one reports failures with its
/// own error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    ObjectStorage,
    Translation,
    MediaConversion,
}

struct ServiceCodes {
    not_found: &'static [&'static str],
    access: &'static [&'static str],
    unsupported_language: &'static [&'static str],
    unsupported_format: &'static [&'static str],
}

// Credential and signing failures look the same from every service.
const CREDENTIAL_CODES: &[&str] = &[
    "AccessDeniedException",
    "UnrecognizedClientException",
    "InvalidSignatureException",
    "ExpiredTokenException",
];

const OBJECT_STORAGE_CODES: ServiceCodes = ServiceCodes {
    not_found: &["NoSuchKey", "NoSuchBucket", "NotFound"],
    access: &[
        "AccessDenied",
        "AllAccessDisabled",
        "InvalidAccessKeyId",
        "SignatureDoesNotMatch",
        "ExpiredToken",
    ],
    unsupported_language: &[],
    unsupported_format: &[],
};

const TRANSLATION_CODES: ServiceCodes = ServiceCodes {
    not_found: &["ResourceNotFoundException"],
    access: &[],
    unsupported_language: &[
        "UnsupportedLanguagePairException",
        "UnsupportedDisplayLanguageCodeException",
        "DetectedLanguageLowConfidenceException",
        "ValidationException",
    ],
    unsupported_format: &["InvalidRequestException", "TextSizeLimitExceededException"],
};

const MEDIA_CONVERSION_CODES: ServiceCodes = ServiceCodes {
    not_found: &["NotFoundException"],
    access: &["ForbiddenException"],
    unsupported_language: &[],
    unsupported_format: &["BadRequestException"],
};

impl ServiceKind {
    fn codes(self) -> &'static ServiceCodes {
        match self {
            Self::ObjectStorage => &OBJECT_STORAGE_CODES,
            Self::Translation => &TRANSLATION_CODES,
            Self::MediaConversion => &MEDIA_CONVERSION_CODES,
        }
    }
}

/// Maps a service error code, or failing that an HTTP status, onto a gateway
/// error kind. Anything unrecognised is treated as transient.
pub fn classify_service_error(
    service: ServiceKind,
    code: Option<&str>,
    http_status: Option<u16>,
) -> GatewayErrorKind {
    if let Some(code) = code {
        let codes = service.codes();
        if codes.not_found.contains(&code) {
            return GatewayErrorKind::NotFound;
        }
        if codes.access.contains(&code) || CREDENTIAL_CODES.contains(&code) {
            return GatewayErrorKind::Access;
        }
        if codes.unsupported_language.contains(&code) {
            return GatewayErrorKind::UnsupportedLanguage;
        }
        if codes.unsupported_format.contains(&code) {
            return GatewayErrorKind::UnsupportedFormat;
        }
    }

    match http_status {
        Some(403) => GatewayErrorKind::Access,
        Some(404) => GatewayErrorKind::NotFound,
        _ => GatewayErrorKind::Transient,
    }
}

/// States of the translation flow. A failure is reported against the state
/// that was being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Start,
    ObjectFetched,
    Translated,
    ObjectStored,
    Done,
}

impl PipelineStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::ObjectFetched => "object_fetched",
            Self::Translated => "translated",
            Self::ObjectStored => "object_stored",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    EventParse(#[from] EventParseError),
    #[error("{stage} failed for bucket `{bucket}` key `{key}`: {source}")]
    Gateway {
        stage: PipelineStage,
        bucket: String,
        key: String,
        source: GatewayError,
    },
    #[error("failed to serialize translation result: {0}")]
    Serialization(String),
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::EventParse(_) => PipelineStage::Start,
            Self::Gateway { stage, .. } => *stage,
            Self::Serialization(_) => PipelineStage::Done,
        }
    }

    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            Self::Gateway { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaConvertError {
    #[error(transparent)]
    EventParse(#[from] EventParseError),
    #[error("media conversion failed for bucket `{bucket}` key `{key}`: {source}")]
    Gateway {
        bucket: String,
        key: String,
        source: GatewayError,
    },
}

impl MediaConvertError {
    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            Self::Gateway { source, .. } => Some(source),
            Self::EventParse(_) => None,
        }
    }
}
