//! # detbench Core
//!
//! Core library for detbench - a research toolkit for detection experiment
//! pipelines.
//!
//! This crate provides the layered configuration resolver used by the
//! pipeline: defaults, an optional local-override file, a session override
//! provider, and per-call overrides are merged in a fixed precedence order
//! into a single record, and the record's cache directory is guaranteed to
//! exist on disk.

// Core modules
pub mod config;
pub mod context;
pub mod error;

// Re-export commonly used types
pub use config::{ConfigRecord, ConfigResolver, DefaultPathProvider, PathProvider};
pub use context::{ExecutionContext, MainThreadContext};
pub use error::{ConfigError, Error, Result};

/// Current version of the detbench-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
