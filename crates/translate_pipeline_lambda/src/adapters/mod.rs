pub mod media_convert;
pub mod object_store;
pub mod translation;
