//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
    pub documents: DocumentsConfig,
    pub templates: TemplatesConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve the OpenAPI document at `/api-docs/openapi.json`
    pub enable_docs: bool,
    /// Upper bound for a whole HTTP request, including both provider attempts
    pub request_timeout_seconds: u64,
    /// Allowed CORS origins; `*` allows any origin
    pub allowed_origins: Vec<String>,
    /// Time allowed for in-flight requests to finish on shutdown
    pub shutdown_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_docs: true,
            request_timeout_seconds: 180,
            allowed_origins: vec!["*".to_string()],
            shutdown_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

/// Wire format spoken by an inference endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderFormat {
    /// `inputs` is an array of role/content chat messages
    ChatMessages,
    /// `inputs` is one prompt string with the system instruction prepended
    TextPrompt,
}

/// One hosted inference endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEndpointConfig {
    /// Short name used in logs and error messages
    pub name: String,
    pub url: String,
    pub format: ProviderFormat,
}

impl ProviderEndpointConfig {
    pub fn gemma() -> Self {
        Self {
            name: "Gemma".to_string(),
            url: "https://api-inference.huggingface.co/models/google/gemma-3-27b-it".to_string(),
            format: ProviderFormat::ChatMessages,
        }
    }

    pub fn mistral() -> Self {
        Self {
            name: "Mistral".to_string(),
            url: "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2"
                .to_string(),
            format: ProviderFormat::TextPrompt,
        }
    }
}

/// Sampling parameters sent with every inference request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
    pub return_full_text: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 2048,
            temperature: 0.7,
            top_p: 0.95,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// Thresholds used to decide whether a provider answer is usable
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseQualityConfig {
    /// Minimum number of characters in a usable answer
    pub min_content_length: usize,
    /// A run of this many `-` marks the answer as separator filler
    pub separator_run_length: usize,
}

impl Default for ResponseQualityConfig {
    fn default() -> Self {
        Self {
            min_content_length: 100,
            separator_run_length: 50,
        }
    }
}

/// Text generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Bearer token for the inference endpoints (can also use HF_API_TOKEN env var)
    pub api_token: Option<String>,
    /// Endpoint tried first
    pub primary: ProviderEndpointConfig,
    /// Endpoint tried once when the primary answer is unusable
    pub fallback: ProviderEndpointConfig,
    /// Deadline for a single provider attempt
    pub attempt_timeout_seconds: u64,
    /// TCP connect timeout for the HTTP client
    pub connect_timeout_seconds: u64,
    pub generation: GenerationConfig,
    pub quality: ResponseQualityConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            primary: ProviderEndpointConfig::gemma(),
            fallback: ProviderEndpointConfig::mistral(),
            attempt_timeout_seconds: 60,
            connect_timeout_seconds: 10,
            generation: GenerationConfig::default(),
            quality: ResponseQualityConfig::default(),
        }
    }
}

impl LlmConfig {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Configured token, falling back to the `HF_API_TOKEN` environment variable
    pub fn resolve_api_token(&self) -> Option<String> {
        self.api_token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| std::env::var("HF_API_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
    }
}

/// Storage backend for documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentBackend {
    Memory,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub backend: DocumentBackend,
    /// JSON file used by the `file` backend
    pub path: PathBuf,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            backend: DocumentBackend::File,
            path: PathBuf::from("data/documents.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory holding one sub-directory per template category
    pub directory: PathBuf,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("templates"),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Local overrides and environment variables have the highest priority
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("MDFORGE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let config: Config = builder.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
