use serde_json::Value;
use translate_pipeline_core::config::MediaConvertConfig;
use translate_pipeline_core::contract::{
    parse_object_event, ConvertMp4ToMp3Input, MediaConversionSubmitted, MEDIA_SUBMITTED_STATUS,
};
use translate_pipeline_core::error::{GatewayError, MediaConvertError};
use translate_pipeline_core::storage_keys::{is_mp4_key, media_destination_uri, object_uri};
use tracing::{error, info};

use crate::adapters::media_convert::MediaConverter;

/// Standalone MP4 to MP3 flow, triggered by the same object events as the
/// translation flow but deployed as its own function.
pub struct MediaConversionFlow<'a, M> {
    config: &'a MediaConvertConfig,
    converter: &'a M,
}

impl<'a, M: MediaConverter> MediaConversionFlow<'a, M> {
    pub fn new(config: &'a MediaConvertConfig, converter: &'a M) -> Self {
        Self { config, converter }
    }

    pub fn handle_event(
        &self,
        payload: Value,
    ) -> Result<MediaConversionSubmitted, MediaConvertError> {
        info!(event = %payload, "received media event");

        let result = self.run(payload);
        if let Err(failure) = &result {
            match failure {
                MediaConvertError::Gateway { bucket, key, source } => error!(
                    bucket = %bucket,
                    key = %key,
                    error_kind = %source.kind(),
                    error = %source,
                    "media conversion failed"
                ),
                MediaConvertError::EventParse(parse_error) => {
                    error!(error = %parse_error, "media conversion failed")
                }
            }
        }
        result
    }

    fn run(&self, payload: Value) -> Result<MediaConversionSubmitted, MediaConvertError> {
        let event = parse_object_event(payload)?;
        let bucket = event.bucket_name();
        let key = event.object_key();
        let gateway_failure = |source: GatewayError| MediaConvertError::Gateway {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source,
        };

        if !is_mp4_key(key) {
            return Err(gateway_failure(GatewayError::unsupported_format(format!(
                "expected an .mp4 object, got `{key}`"
            ))));
        }

        let input = ConvertMp4ToMp3Input {
            source_uri: object_uri(bucket, key),
            destination_uri: media_destination_uri(
                &self.config.destination_bucket,
                &self.config.output_prefix,
                key,
            ),
        };
        let job_id = self
            .converter
            .convert_mp4_to_mp3(&input)
            .map_err(gateway_failure)?;

        info!(
            source = %input.source_uri,
            destination = %input.destination_uri,
            job_id = job_id.as_deref().unwrap_or("unknown"),
            "media conversion submitted"
        );
        Ok(MediaConversionSubmitted {
            status: MEDIA_SUBMITTED_STATUS.to_string(),
            source: input.source_uri,
            destination: input.destination_uri,
            job_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;
    use translate_pipeline_core::error::GatewayErrorKind;

    use super::*;

    struct CapturingConverter {
        inputs: Mutex<Vec<ConvertMp4ToMp3Input>>,
        job_id: Option<String>,
        failure: Option<GatewayError>,
    }

    impl CapturingConverter {
        fn new() -> Self {
            Self {
                inputs: Mutex::new(Vec::new()),
                job_id: Some("1700000000000-keynote".to_string()),
                failure: None,
            }
        }

        fn inputs(&self) -> Vec<ConvertMp4ToMp3Input> {
            self.inputs.lock().expect("poisoned mutex").clone()
        }
    }

    impl MediaConverter for CapturingConverter {
        fn convert_mp4_to_mp3(
            &self,
            input: &ConvertMp4ToMp3Input,
        ) -> Result<Option<String>, GatewayError> {
            self.inputs.lock().expect("poisoned mutex").push(input.clone());
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(self.job_id.clone()),
            }
        }
    }

    fn sample_config() -> MediaConvertConfig {
        MediaConvertConfig {
            region: "us-east-1".to_string(),
            destination_bucket: "media-out".to_string(),
            role_arn: "arn:aws:iam::123456789012:role/mediaconvert".to_string(),
            output_prefix: "audio".to_string(),
        }
    }

    fn event_for(key: &str) -> Value {
        json!({
            "detail": {"bucket": {"name": "media-in"}, "object": {"key": key}}
        })
    }

    #[test]
    fn submits_conversion_for_mp4_object() {
        let config = sample_config();
        let converter = CapturingConverter::new();

        let submitted = MediaConversionFlow::new(&config, &converter)
            .handle_event(event_for("talks/keynote.mp4"))
            .expect("conversion should be submitted");

        assert_eq!(
            converter.inputs(),
            vec![ConvertMp4ToMp3Input {
                source_uri: "s3://media-in/talks/keynote.mp4".to_string(),
                destination_uri: "s3://media-out/audio/talks/".to_string(),
            }]
        );
        assert_eq!(submitted.status, "submitted");
        assert_eq!(submitted.source, "s3://media-in/talks/keynote.mp4");
        assert_eq!(submitted.job_id.as_deref(), Some("1700000000000-keynote"));
    }

    #[test]
    fn omits_job_id_when_service_reports_none() {
        let config = sample_config();
        let mut converter = CapturingConverter::new();
        converter.job_id = None;

        let submitted = MediaConversionFlow::new(&config, &converter)
            .handle_event(event_for("clip.mp4"))
            .expect("conversion should be submitted");

        assert_eq!(submitted.job_id, None);
        assert_eq!(submitted.destination, "s3://media-out/audio/");
    }

    #[test]
    fn rejects_non_mp4_object_without_calling_service() {
        let config = sample_config();
        let converter = CapturingConverter::new();

        let error = MediaConversionFlow::new(&config, &converter)
            .handle_event(event_for("talks/keynote.mkv"))
            .expect_err("non mp4 should fail");

        assert_eq!(
            error.gateway_error().map(GatewayError::kind),
            Some(GatewayErrorKind::UnsupportedFormat)
        );
        assert!(converter.inputs().is_empty());
    }

    #[test]
    fn surfaces_service_failure() {
        let config = sample_config();
        let mut converter = CapturingConverter::new();
        converter.failure = Some(GatewayError::transient("TooManyRequestsException"));

        let error = MediaConversionFlow::new(&config, &converter)
            .handle_event(event_for("clip.mp4"))
            .expect_err("service failure should fail");

        assert_eq!(
            error,
            MediaConvertError::Gateway {
                bucket: "media-in".to_string(),
                key: "clip.mp4".to_string(),
                source: GatewayError::transient("TooManyRequestsException"),
            }
        );
    }

    #[test]
    fn malformed_event_fails_before_service_call() {
        let config = sample_config();
        let converter = CapturingConverter::new();

        let error = MediaConversionFlow::new(&config, &converter)
            .handle_event(json!({"detail": {}}))
            .expect_err("malformed event should fail");

        assert!(matches!(error, MediaConvertError::EventParse(_)));
        assert!(converter.inputs().is_empty());
    }
}
