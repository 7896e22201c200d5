use aws_sdk_mediaconvert::types::{
    AudioCodec, AudioCodecSettings, AudioDefaultSelection, AudioDescription, AudioSelector,
    ContainerSettings, ContainerType, FileGroupSettings, Input, JobSettings, Mp3RateControlMode,
    Mp3Settings, Output, OutputGroup, OutputGroupSettings, OutputGroupType,
};
use translate_pipeline_core::contract::ConvertMp4ToMp3Input;
use translate_pipeline_core::error::{GatewayError, ServiceKind};
use tracing::info;

use super::{block_on, sdk_failure};
use crate::adapters::media_convert::MediaConverter;

const AUDIO_SELECTOR: &str = "Audio Selector 1";
const MP3_BITRATE: i32 = 192_000;
const MP3_SAMPLE_RATE: i32 = 48_000;
const MP3_CHANNELS: i32 = 2;

/// Submits MediaConvert jobs; completion is not awaited.
pub struct AwsMediaConverter {
    client: aws_sdk_mediaconvert::Client,
    role_arn: String,
}

impl AwsMediaConverter {
    pub fn new(client: aws_sdk_mediaconvert::Client, role_arn: impl Into<String>) -> Self {
        Self {
            client,
            role_arn: role_arn.into(),
        }
    }
}

impl MediaConverter for AwsMediaConverter {
    fn convert_mp4_to_mp3(
        &self,
        input: &ConvertMp4ToMp3Input,
    ) -> Result<Option<String>, GatewayError> {
        let settings = mp3_job_settings(&input.source_uri, &input.destination_uri);
        let client = self.client.clone();
        let role_arn = self.role_arn.clone();

        let job_id = block_on(async move {
            client
                .create_job()
                .role(role_arn)
                .settings(settings)
                .send()
                .await
                .map(|output| output.job().and_then(|job| job.id()).map(str::to_string))
                .map_err(|error| sdk_failure(ServiceKind::MediaConversion, "CreateJob", error))
        })?;

        info!(
            job_id = job_id.as_deref().unwrap_or("unknown"),
            source = %input.source_uri,
            "mediaconvert job created"
        );
        Ok(job_id)
    }
}

fn mp3_job_settings(source_uri: &str, destination_uri: &str) -> JobSettings {
    let input = Input::builder()
        .file_input(source_uri)
        .audio_selectors(
            AUDIO_SELECTOR,
            AudioSelector::builder()
                .default_selection(AudioDefaultSelection::Default)
                .build(),
        )
        .build();

    let audio = AudioDescription::builder()
        .audio_source_name(AUDIO_SELECTOR)
        .codec_settings(
            AudioCodecSettings::builder()
                .codec(AudioCodec::Mp3)
                .mp3_settings(
                    Mp3Settings::builder()
                        .bitrate(MP3_BITRATE)
                        .channels(MP3_CHANNELS)
                        .rate_control_mode(Mp3RateControlMode::Cbr)
                        .sample_rate(MP3_SAMPLE_RATE)
                        .build(),
                )
                .build(),
        )
        .build();

    let output = Output::builder()
        .container_settings(
            ContainerSettings::builder()
                .container(ContainerType::Raw)
                .build(),
        )
        .audio_descriptions(audio)
        .extension("mp3")
        .build();

    let output_group = OutputGroup::builder()
        .name("File Group")
        .output_group_settings(
            OutputGroupSettings::builder()
                .r#type(OutputGroupType::FileGroupSettings)
                .file_group_settings(
                    FileGroupSettings::builder()
                        .destination(destination_uri)
                        .build(),
                )
                .build(),
        )
        .outputs(output)
        .build();

    JobSettings::builder()
        .inputs(input)
        .output_groups(output_group)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_settings_target_raw_mp3_output() {
        let settings = mp3_job_settings("s3://in/clip.mp4", "s3://out/audio/");

        let input = &settings.inputs()[0];
        assert_eq!(input.file_input(), Some("s3://in/clip.mp4"));

        let group = &settings.output_groups()[0];
        let destination = group
            .output_group_settings()
            .and_then(|value| value.file_group_settings())
            .and_then(|value| value.destination());
        assert_eq!(destination, Some("s3://out/audio/"));

        let output = &group.outputs()[0];
        assert_eq!(output.extension(), Some("mp3"));
        assert_eq!(
            output
                .container_settings()
                .and_then(|value| value.container()),
            Some(&ContainerType::Raw)
        );
        let codec = output.audio_descriptions()[0]
            .codec_settings()
            .and_then(|value| value.codec());
        assert_eq!(codec, Some(&AudioCodec::Mp3));
    }
}
