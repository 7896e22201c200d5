//! AWS-oriented adapters and handlers for the translation pipeline.
//!
//! This crate owns runtime integration details (Lambda handlers, AWS SDK
//! gateway implementations, log setup). Domain contracts come from
//! `translate_pipeline_core`.

pub mod adapters;
pub mod aws;
pub mod handlers;
pub mod telemetry;
