//! Layered configuration resolution
//!
//! Produces one [`ConfigRecord`] per call by applying, in increasing
//! precedence: built-in baselines, the local-override file, the registered
//! session override provider, and per-call key-path overrides, then filling
//! any still-unset required key and ensuring the cache directory exists.
//!
//! The two override layers are deliberately asymmetric: the local-override
//! file redefines the baseline *fallback values* consulted by the fill step,
//! while the session provider supplies the initial working *record*
//! wholesale. Per-call overrides are applied on top of that record.

use crate::config::local::{LocalOverrides, LOCAL_OVERRIDE_FILE};
use crate::config::paths::{cache_dir_for, DefaultPathProvider, PathProvider};
use crate::config::record::ConfigRecord;
use crate::context::{ExecutionContext, MainThreadContext};
use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::path::PathBuf;

/// Subpath of the detection directory holding detector experiments
const DETECTOR_SUBPATH: &str = "detector";

/// Session override provider: invoked with no arguments, returns the initial
/// working record for a resolution call.
pub type OverrideProvider = Box<dyn Fn() -> ConfigRecord + Send + Sync>;

/// Layered configuration resolver.
///
/// Holds the session override slot and the collaborators used during
/// resolution. Each [`resolve`](ConfigResolver::resolve) call recomputes the
/// record from scratch; nothing is cached across calls.
pub struct ConfigResolver {
    paths: Box<dyn PathProvider>,
    context: Box<dyn ExecutionContext>,
    local_override_path: PathBuf,
    override_provider: Option<OverrideProvider>,
}

impl ConfigResolver {
    /// Create a resolver with default collaborators
    pub fn new() -> Self {
        Self {
            paths: Box::new(DefaultPathProvider::new()),
            context: Box::new(MainThreadContext::new()),
            local_override_path: PathBuf::from(LOCAL_OVERRIDE_FILE),
            override_provider: None,
        }
    }

    /// Set the path provider
    pub fn with_path_provider(mut self, paths: impl PathProvider + 'static) -> Self {
        self.paths = Box::new(paths);
        self
    }

    /// Set the execution-context query
    pub fn with_context(mut self, context: impl ExecutionContext + 'static) -> Self {
        self.context = Box::new(context);
        self
    }

    /// Set where to look for the local-override file
    pub fn with_local_override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_override_path = path.into();
        self
    }

    /// Register the session override provider.
    ///
    /// Callers are expected to register at most once per session; a second
    /// registration replaces the first. The provider stays registered until
    /// [`clear_override_provider`](ConfigResolver::clear_override_provider)
    /// and is read at most once per resolution call.
    pub fn set_override_provider(
        &mut self,
        provider: impl Fn() -> ConfigRecord + Send + Sync + 'static,
    ) {
        self.override_provider = Some(Box::new(provider));
    }

    /// Clear the session override provider
    pub fn clear_override_provider(&mut self) {
        self.override_provider = None;
    }

    /// Whether a session override provider is currently registered
    pub fn has_override_provider(&self) -> bool {
        self.override_provider.is_some()
    }

    /// Resolve a configuration record.
    ///
    /// `overrides` are applied in order as dotted key-path assignments; later
    /// pairs win on duplicate paths. After resolution the record is
    /// guaranteed to contain `use_gpu`, `exp_dir`, `sub_dir` and `cache_dir`,
    /// and the directory at `cache_dir` exists on disk.
    pub fn resolve(&self, overrides: &[(&str, Value)]) -> Result<ConfigRecord> {
        // Precondition, checked before any session state is read.
        if self.context.is_parallel_worker() {
            return Err(ConfigError::InvalidContext.into());
        }

        // Baseline fallbacks, consulted only by the fill step below.
        let mut use_gpu = true;
        let mut exp_dir = self
            .paths
            .detection_dir()
            .join(DETECTOR_SUBPATH)
            .to_string_lossy()
            .into_owned();

        if let Some(local) = LocalOverrides::load_if_present(&self.local_override_path)? {
            local.apply(&mut use_gpu, &mut exp_dir);
        }

        let mut record = match &self.override_provider {
            Some(provider) => provider(),
            None => ConfigRecord::new(),
        };

        for (path, value) in overrides {
            record.set_path(path, value.clone())?;
        }

        record.set_if_absent("use_gpu", Value::Bool(use_gpu));
        record.set_if_absent("exp_dir", Value::String(exp_dir));
        record.set_if_absent("sub_dir", Value::String(String::new()));
        if !record.contains_key("cache_dir") {
            // Derived from the resolved exp_dir/sub_dir, not the baselines.
            let exp_dir = require_str(&record, "exp_dir")?;
            let sub_dir = require_str(&record, "sub_dir")?;
            let cache_dir = cache_dir_for(exp_dir, sub_dir);
            record.set("cache_dir", Value::String(cache_dir));
        }

        let cache_dir = require_str(&record, "cache_dir")?.to_string();
        std::fs::create_dir_all(&cache_dir)?;
        tracing::debug!("cache directory ready at {}", cache_dir);

        Ok(record)
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn require_str<'a>(record: &'a ConfigRecord, field: &str) -> Result<&'a str> {
    record.get_str(field).ok_or_else(|| {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: record
                .get(field)
                .map(ToString::to_string)
                .unwrap_or_else(|| "<missing>".to_string()),
        }
        .into()
    })
}
