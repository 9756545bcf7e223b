//! Local-override file support
//!
//! A machine may carry a `detbench.local.json` next to the working directory
//! to redefine the two baseline fallbacks (`use_gpu`, `exp_dir`) before
//! defaults are filled. Presence of the file is what triggers loading; a
//! missing file is not an error, a present but malformed one is.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Conventional name of the local-override file
pub const LOCAL_OVERRIDE_FILE: &str = "detbench.local.json";

/// Baseline overrides read from the local-override file.
///
/// Both fields are optional; an absent field leaves the corresponding
/// baseline untouched. These only affect the fallback values consulted when
/// the resolved record does not already define `use_gpu` / `exp_dir` — they
/// are not merged into the record itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalOverrides {
    /// Replacement for the baseline `use_gpu` fallback
    pub use_gpu: Option<bool>,

    /// Replacement for the baseline `exp_dir` fallback; `~` is expanded
    pub exp_dir: Option<String>,
}

impl LocalOverrides {
    /// Load the override file at `path` if it exists.
    pub fn load_if_present(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let mut overrides: LocalOverrides = serde_json::from_str(&content)?;

        if let Some(exp_dir) = overrides.exp_dir.take() {
            overrides.exp_dir = Some(shellexpand::tilde(&exp_dir).into_owned());
        }

        tracing::debug!("loaded local overrides from {}", path.display());
        Ok(Some(overrides))
    }

    /// Apply the overrides to the baseline fallback values.
    pub fn apply(&self, use_gpu: &mut bool, exp_dir: &mut String) {
        if let Some(gpu) = self.use_gpu {
            *use_gpu = gpu;
        }
        if let Some(dir) = &self.exp_dir {
            *exp_dir = dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(LOCAL_OVERRIDE_FILE);

        let loaded = LocalOverrides::load_if_present(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_and_apply_overrides() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(LOCAL_OVERRIDE_FILE);
        std::fs::write(&path, r#"{"use_gpu": false, "exp_dir": "/scratch/exp"}"#).unwrap();

        let loaded = LocalOverrides::load_if_present(&path).unwrap().unwrap();

        let mut use_gpu = true;
        let mut exp_dir = String::from("/data/detector");
        loaded.apply(&mut use_gpu, &mut exp_dir);

        assert!(!use_gpu);
        assert_eq!(exp_dir, "/scratch/exp");
    }

    #[test]
    fn test_partial_overrides_leave_baselines() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(LOCAL_OVERRIDE_FILE);
        std::fs::write(&path, r#"{"use_gpu": false}"#).unwrap();

        let loaded = LocalOverrides::load_if_present(&path).unwrap().unwrap();

        let mut use_gpu = true;
        let mut exp_dir = String::from("/data/detector");
        loaded.apply(&mut use_gpu, &mut exp_dir);

        assert!(!use_gpu);
        assert_eq!(exp_dir, "/data/detector");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(LOCAL_OVERRIDE_FILE);
        std::fs::write(&path, "not json").unwrap();

        assert!(LocalOverrides::load_if_present(&path).is_err());
    }

    #[test]
    fn test_tilde_expansion_in_exp_dir() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(LOCAL_OVERRIDE_FILE);
        std::fs::write(&path, r#"{"exp_dir": "~/detections"}"#).unwrap();

        let loaded = LocalOverrides::load_if_present(&path).unwrap().unwrap();
        let exp_dir = loaded.exp_dir.unwrap();
        assert!(!exp_dir.starts_with('~'));
        assert!(exp_dir.ends_with("detections"));
    }
}
