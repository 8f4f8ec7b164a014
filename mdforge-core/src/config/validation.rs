//! Configuration validation module

use crate::config::{
    Config, DocumentBackend, DocumentsConfig, LlmConfig, LoggingConfig, ProviderEndpointConfig,
    ServerConfig, TemplatesConfig,
};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },

    #[error("LLM configuration error: {message}")]
    Llm { message: String },

    #[error("Documents configuration error: {message}")]
    Documents { message: String },

    #[error("Templates configuration error: {message}")]
    Templates { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }

    pub fn documents(message: impl Into<String>) -> Self {
        Self::Documents {
            message: message.into(),
        }
    }

    pub fn templates(message: impl Into<String>) -> Self {
        Self::Templates {
            message: message.into(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.logging.validate()?;
        self.llm.validate()?;
        self.documents.validate()?;
        self.templates.validate()?;

        // Both provider attempts must fit inside one HTTP request
        let attempts = self.llm.attempt_timeout_seconds.saturating_mul(2);
        if self.server.request_timeout_seconds < attempts {
            return Err(ValidationError::server(format!(
                "request_timeout_seconds ({}) must be at least twice llm.attempt_timeout_seconds ({})",
                self.server.request_timeout_seconds, self.llm.attempt_timeout_seconds
            )));
        }

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.host.trim().is_empty() {
            return Err(ValidationError::server("host cannot be empty"));
        }
        if self.port == 0 {
            return Err(ValidationError::server("port must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server(
                "request_timeout_seconds must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format.as_str() {
            "json" | "pretty" | "compact" => Ok(()),
            other => Err(ValidationError::logging(format!(
                "unknown format '{}', expected json, pretty or compact",
                other
            ))),
        }
    }
}

fn validate_endpoint(role: &str, endpoint: &ProviderEndpointConfig) -> Result<(), ValidationError> {
    if endpoint.name.trim().is_empty() {
        return Err(ValidationError::llm(format!("{} provider name cannot be empty", role)));
    }
    if !(endpoint.url.starts_with("http://") || endpoint.url.starts_with("https://")) {
        return Err(ValidationError::llm(format!(
            "{} provider url must be an http(s) URL, got '{}'",
            role, endpoint.url
        )));
    }
    Ok(())
}

impl Validate for LlmConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_endpoint("primary", &self.primary)?;
        validate_endpoint("fallback", &self.fallback)?;

        if self.attempt_timeout_seconds == 0 {
            return Err(ValidationError::llm(
                "attempt_timeout_seconds must be greater than 0",
            ));
        }
        if self.generation.max_new_tokens == 0 {
            return Err(ValidationError::llm("max_new_tokens must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ValidationError::llm("temperature must be between 0.0 and 2.0"));
        }
        if !(0.0..=1.0).contains(&self.generation.top_p) || self.generation.top_p == 0.0 {
            return Err(ValidationError::llm("top_p must be in (0.0, 1.0]"));
        }
        if self.quality.separator_run_length == 0 {
            return Err(ValidationError::llm(
                "separator_run_length must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl Validate for DocumentsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == DocumentBackend::File && self.path.as_os_str().is_empty() {
            return Err(ValidationError::documents(
                "path is required for the file backend",
            ));
        }
        Ok(())
    }
}

impl Validate for TemplatesConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.directory.as_os_str().is_empty() {
            return Err(ValidationError::templates("directory cannot be empty"));
        }
        Ok(())
    }
}
