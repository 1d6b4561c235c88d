// src/metrics.rs
//
// Operation telemetry
//
// Managers wrap each use case in `scoped`, which opens the operation,
// runs it, and closes it with the outcome. The sink is injected, so tests
// can swap in a mock and production uses `LogMetrics`.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait Metrics: Send + Sync {
    fn begin(&self, operation: &str);
    fn end(&self, operation: &str, success: bool, elapsed: Duration);
}

/// Per-operation outcome counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationCounts {
    pub started: u64,
    pub succeeded: u64,
    pub failed: u64,
}

/// Default sink: logs every operation and keeps counters in memory
#[derive(Debug, Default)]
pub struct LogMetrics {
    counts: Mutex<HashMap<String, OperationCounts>>,
}

impl LogMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the counters recorded so far
    pub fn snapshot(&self) -> HashMap<String, OperationCounts> {
        match self.counts.lock() {
            Ok(counts) => counts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, operation: &str, update: impl FnOnce(&mut OperationCounts)) {
        let mut counts = match self.counts.lock() {
            Ok(counts) => counts,
            Err(poisoned) => poisoned.into_inner(),
        };
        update(counts.entry(operation.to_string()).or_default());
    }
}

impl Metrics for LogMetrics {
    fn begin(&self, operation: &str) {
        log::debug!("{} started", operation);
        self.record(operation, |c| c.started += 1);
    }

    fn end(&self, operation: &str, success: bool, elapsed: Duration) {
        if success {
            log::info!("{} completed in {:?}", operation, elapsed);
            self.record(operation, |c| c.succeeded += 1);
        } else {
            log::warn!("{} failed after {:?}", operation, elapsed);
            self.record(operation, |c| c.failed += 1);
        }
    }
}

/// Run `f` as one telemetry operation. The error, if any, is passed through
/// untouched after the operation is closed as failed.
pub fn scoped<T>(
    metrics: &dyn Metrics,
    operation: &str,
    f: impl FnOnce() -> AppResult<T>,
) -> AppResult<T> {
    let started = Instant::now();
    metrics.begin(operation);
    let result = f();
    metrics.end(operation, result.is_ok(), started.elapsed());
    result
}
