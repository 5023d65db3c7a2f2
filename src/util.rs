//! Small logging helpers.

use std::time::Instant;

/// RAII timer that logs how long a scope took when it is dropped.
///
/// # Example
/// ```ignore
/// let _t = Timed::info("batch ingest");
/// // ... work ...
/// // logs "batch ingest took 12.3ms" on drop
/// ```
pub struct Timed {
    label: &'static str,
    start: Instant,
    level: log::Level,
}

impl Timed {
    /// Start a timer that reports at the given level.
    pub fn new(label: &'static str, level: log::Level) -> Self {
        Self {
            label,
            start: Instant::now(),
            level,
        }
    }

    /// Timer reporting at INFO level.
    pub fn info(label: &'static str) -> Self {
        Self::new(label, log::Level::Info)
    }

    /// Timer reporting at DEBUG level.
    pub fn debug(label: &'static str) -> Self {
        Self::new(label, log::Level::Debug)
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        log::log!(self.level, "{} took {:.3?}", self.label, self.start.elapsed());
    }
}
