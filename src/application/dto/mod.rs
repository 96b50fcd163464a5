//! # Application DTOs
//!
//! ユースケースへ渡す設定のData Transfer Object

pub mod extract_config;
pub mod submit_config;
