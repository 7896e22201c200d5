//! AWS SDK implementations of the gateway traits.
//!
//! Gateways are synchronous so handlers stay runtime-agnostic; each SDK call is
//! driven to completion on the current Tokio runtime.

use std::error::Error;
use std::fmt::Display;
use std::future::Future;

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use translate_pipeline_core::error::{classify_service_error, GatewayError, ServiceKind};

pub mod mediaconvert;
pub mod s3;
pub mod translate;

pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

pub(crate) fn service_failure(
    service: ServiceKind,
    operation: &str,
    code: Option<&str>,
    http_status: Option<u16>,
    detail: impl Display,
) -> GatewayError {
    GatewayError::new(
        classify_service_error(service, code, http_status),
        format!("{operation} failed: {detail}"),
    )
}

/// Classifies a modeled or generic service error by the code it carries.
pub(crate) fn operation_failure<E>(
    service: ServiceKind,
    operation: &str,
    error: &E,
    http_status: Option<u16>,
) -> GatewayError
where
    E: ProvideErrorMetadata + Error,
{
    service_failure(
        service,
        operation,
        error.code(),
        http_status,
        DisplayErrorContext(error),
    )
}

/// SDK error types are shared by every service client, so one mapping
/// covers S3, Translate and MediaConvert.
pub(crate) fn sdk_failure<E>(
    service: ServiceKind,
    operation: &str,
    error: SdkError<E>,
) -> GatewayError
where
    E: ProvideErrorMetadata + Error + 'static,
{
    let http_status = error
        .raw_response()
        .map(|response| response.status().as_u16());
    match error.as_service_error() {
        Some(service_error) => operation_failure(service, operation, service_error, http_status),
        None => service_failure(
            service,
            operation,
            None,
            http_status,
            DisplayErrorContext(&error),
        ),
    }
}
