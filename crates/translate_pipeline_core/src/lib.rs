//! Shared translation pipeline domain primitives.
//!
//! This crate owns the event contract, configuration loading, gateway value
//! types, the error taxonomy and object key derivation. It excludes AWS SDK and
//! Lambda runtime concerns, which live in `translate_pipeline_lambda`.

pub mod config;
pub mod contract;
pub mod error;
pub mod storage_keys;
