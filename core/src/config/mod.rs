//! Layered configuration for detbench
//!
//! Resolution merges, in increasing precedence: built-in baselines, the
//! local-override file, the session override provider, and per-call
//! key-path overrides. See [`resolver::ConfigResolver`].

pub mod local;
pub mod paths;
pub mod record;
pub mod resolver;

pub use local::{LocalOverrides, LOCAL_OVERRIDE_FILE};
pub use paths::{DefaultPathProvider, PathProvider};
pub use record::ConfigRecord;
pub use resolver::{ConfigResolver, OverrideProvider};
