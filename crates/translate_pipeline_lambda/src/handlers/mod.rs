pub mod media_convert;
pub mod translate;
