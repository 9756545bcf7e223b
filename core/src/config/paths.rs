//! Base path discovery for experiment data
//!
//! The resolver derives its default `exp_dir` from a [`PathProvider`]
//! collaborator rather than hard-coding a location, so tests and embedding
//! applications can redirect experiment data wholesale.

use std::path::{PathBuf, MAIN_SEPARATOR};

/// Supplies the base directory holding detection experiment data.
pub trait PathProvider: Send + Sync {
    /// Absolute base directory for detection data
    fn detection_dir(&self) -> PathBuf;
}

/// Default provider rooted in the platform data directory.
#[derive(Debug, Clone)]
pub struct DefaultPathProvider {
    root: PathBuf,
}

impl DefaultPathProvider {
    pub fn new() -> Self {
        let mut root = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("detbench");
        Self { root }
    }

    /// Provider rooted at an explicit directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PathProvider for DefaultPathProvider {
    fn detection_dir(&self) -> PathBuf {
        self.root.clone()
    }
}

impl Default for DefaultPathProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Join `exp_dir` and `sub_dir` into a cache directory path with a trailing
/// separator. An empty `sub_dir` contributes no extra segment.
pub fn cache_dir_for(exp_dir: &str, sub_dir: &str) -> String {
    let mut path = PathBuf::from(exp_dir);
    if !sub_dir.is_empty() {
        path.push(sub_dir);
    }
    let mut joined = path.to_string_lossy().into_owned();
    if !joined.ends_with(MAIN_SEPARATOR) {
        joined.push(MAIN_SEPARATOR);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_for_empty_sub_dir() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(
            cache_dir_for("/data/exp", ""),
            format!("{}data{}exp{}", sep, sep, sep)
        );
    }

    #[test]
    fn test_cache_dir_for_with_sub_dir() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(
            cache_dir_for("/data/exp", "run2"),
            format!("{}data{}exp{}run2{}", sep, sep, sep, sep)
        );
    }

    #[test]
    fn test_default_provider_with_root() {
        let provider = DefaultPathProvider::with_root("/srv/detections");
        assert_eq!(provider.detection_dir(), PathBuf::from("/srv/detections"));
    }
}
