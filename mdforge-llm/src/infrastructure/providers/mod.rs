//! Hosted inference providers

mod endpoint;

pub mod chat;
pub mod text;

pub use chat::ChatInferenceProvider;
pub use text::TextInferenceProvider;
