use translate_pipeline_core::contract::ConvertMp4ToMp3Input;
use translate_pipeline_core::error::GatewayError;

pub trait MediaConverter {
    /// Submits the conversion and returns the service's job id when it reports one.
    fn convert_mp4_to_mp3(
        &self,
        input: &ConvertMp4ToMp3Input,
    ) -> Result<Option<String>, GatewayError>;
}
