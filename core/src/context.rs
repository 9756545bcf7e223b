//! Execution-context capability query
//!
//! The resolver reads session-wide override state and therefore refuses to
//! run on worker threads spawned for parallel execution. The capability is a
//! trait so tests and embedding applications can substitute their own notion
//! of "worker".

use std::thread::{self, ThreadId};

/// Answers whether the current execution context is an isolated worker
/// spawned for parallel execution.
pub trait ExecutionContext: Send + Sync {
    fn is_parallel_worker(&self) -> bool;
}

/// Default context: the thread that constructed it is the main execution
/// context; every other thread is treated as a worker.
#[derive(Debug, Clone)]
pub struct MainThreadContext {
    main: ThreadId,
}

impl MainThreadContext {
    /// Capture the current thread as the main execution context.
    pub fn new() -> Self {
        Self {
            main: thread::current().id(),
        }
    }
}

impl ExecutionContext for MainThreadContext {
    fn is_parallel_worker(&self) -> bool {
        thread::current().id() != self.main
    }
}

impl Default for MainThreadContext {
    fn default() -> Self {
        Self::new()
    }
}
