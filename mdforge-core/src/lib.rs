//! mdforge Core - shared foundation for the mdforge workspace
//!
//! # Modules
//!
//! - [`config`] - Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] - Project metadata, documents and templates shared by every crate
//! - [`logging`] - Structured logging with tracing
//!
//! # Configuration
//!
//! ```rust,ignore
//! use mdforge_core::Config;
//!
//! let config = Config::load()?;
//! mdforge_core::init_tracing(&config.logging)?;
//! ```

pub mod config;
pub mod domain;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
