use crate::error::ConfigError;

pub const AWS_REGION_VAR: &str = "AWS_REGION";
pub const SOURCE_BUCKET_VAR: &str = "SOURCE_BUCKET_NAME";
pub const DESTINATION_BUCKET_VAR: &str = "DESTINATION_BUCKET_NAME";
pub const TARGET_LANGUAGE_VAR: &str = "TRANSLATION_TARGET_LANGUAGE_CODE";
pub const MEDIACONVERT_ROLE_VAR: &str = "MEDIACONVERT_ROLE_ARN";
pub const MEDIACONVERT_OUTPUT_PREFIX_VAR: &str = "MEDIACONVERT_OUTPUT_PREFIX";

pub const DEFAULT_MEDIA_OUTPUT_PREFIX: &str = "audio";

/// Settings for the translation flow, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub region: String,
    pub source_bucket: String,
    pub destination_bucket: String,
    pub target_language_code: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let [region, source_bucket, destination_bucket, target_language_code] = read_required(
            [
                AWS_REGION_VAR,
                SOURCE_BUCKET_VAR,
                DESTINATION_BUCKET_VAR,
                TARGET_LANGUAGE_VAR,
            ],
            &lookup,
        )?;

        Ok(Self {
            region,
            source_bucket,
            destination_bucket,
            target_language_code,
        })
    }
}

/// Settings for the MP4 to MP3 conversion flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConvertConfig {
    pub region: String,
    pub destination_bucket: String,
    pub role_arn: String,
    pub output_prefix: String,
}

impl MediaConvertConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let [region, destination_bucket, role_arn] = read_required(
            [AWS_REGION_VAR, DESTINATION_BUCKET_VAR, MEDIACONVERT_ROLE_VAR],
            &lookup,
        )?;
        let output_prefix = read_value(MEDIACONVERT_OUTPUT_PREFIX_VAR, &lookup)
            .unwrap_or_else(|| DEFAULT_MEDIA_OUTPUT_PREFIX.to_string());

        Ok(Self {
            region,
            destination_bucket,
            role_arn,
            output_prefix,
        })
    }
}

fn read_value(name: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_required<const N: usize>(
    names: [&'static str; N],
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<[String; N], ConfigError> {
    let values = names.map(|name| read_value(name, lookup));
    let missing: Vec<&'static str> = names
        .iter()
        .zip(values.iter())
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(ConfigError::Missing(missing));
    }

    Ok(values.map(Option::unwrap_or_default))
}
