use aws_config::BehaviorVersion;
use aws_sdk_mediaconvert::config::Region;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use translate_pipeline_core::config::MediaConvertConfig;
use translate_pipeline_core::contract::MediaConversionSubmitted;
use translate_pipeline_lambda::aws::mediaconvert::AwsMediaConverter;
use translate_pipeline_lambda::handlers::media_convert::MediaConversionFlow;
use translate_pipeline_lambda::telemetry::init_tracing;

async fn handle_request(
    event: LambdaEvent<Value>,
    flow: &MediaConversionFlow<'_, AwsMediaConverter>,
) -> Result<MediaConversionSubmitted, Error> {
    flow.handle_event(event.payload).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = MediaConvertConfig::from_env()?;
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;
    let converter = AwsMediaConverter::new(
        aws_sdk_mediaconvert::Client::new(&aws_config),
        config.role_arn.clone(),
    );
    let flow = MediaConversionFlow::new(&config, &converter);

    lambda_runtime::run(service_fn(|event| handle_request(event, &flow))).await
}
