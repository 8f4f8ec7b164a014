//! Domain types shared across the workspace

pub mod document;
pub mod project;
pub mod template;

pub use document::Document;
pub use project::{GenerationMode, GenerationRequest, ProjectInfo, ProjectInfoError, SocialLink};
pub use template::Template;
