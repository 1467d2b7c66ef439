//! The conversion service: one prompt, one provider call, one validated
//! result.

pub mod error;
pub mod prompt;
pub mod service;
pub mod types;

pub use error::ConversionError;
pub use service::GeminiService;
pub use types::{ConversionRequest, ConversionResult};
