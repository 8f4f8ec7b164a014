pub mod error;
pub mod messages;
pub mod provider;

pub use error::LlmError;
pub use messages::*;
pub use provider::{InferenceProvider, ProviderInfo, ProviderResult};
