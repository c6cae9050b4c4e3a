// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (dashboard loads, link resolves). Frontends implement this to surface
/// status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
