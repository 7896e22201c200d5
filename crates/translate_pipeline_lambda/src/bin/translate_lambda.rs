use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use translate_pipeline_core::config::AppConfig;
use translate_pipeline_lambda::aws::s3::S3ObjectStore;
use translate_pipeline_lambda::aws::translate::AwsDocumentTranslator;
use translate_pipeline_lambda::handlers::translate::TranslationPipeline;
use translate_pipeline_lambda::telemetry::init_tracing;

type Pipeline<'a> = TranslationPipeline<'a, S3ObjectStore, AwsDocumentTranslator>;

async fn handle_request(
    event: LambdaEvent<Value>,
    pipeline: &Pipeline<'_>,
) -> Result<Value, Error> {
    pipeline.handle_event(event.payload).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;
    let object_store = S3ObjectStore::new(aws_sdk_s3::Client::new(&aws_config));
    let translator = AwsDocumentTranslator::new(aws_sdk_translate::Client::new(&aws_config));
    let pipeline = TranslationPipeline::new(&config, &object_store, &translator);

    lambda_runtime::run(service_fn(|event| handle_request(event, &pipeline))).await
}
