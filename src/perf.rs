//! Timing instrumentation for generation and event dispatch.
//!
//! - **Scoped timers**: RAII timing for a block, reported through `tracing`
//!   when the block exceeds its threshold
//! - **Timing statistics**: run count, min/max and a rolling average
//! - **Conditional compilation**: `profile_scope!` is zero-cost unless the
//!   `profiling` feature is enabled
//!
//! ```ignore
//! use mazemask::profile_scope;
//!
//! fn generate() {
//!     profile_scope!("generate", 50.0);
//!     // ... work ...
//! }
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

/// Number of samples kept per operation
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, 1.0);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// Enable or disable profiling output at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Timings of recent runs of one operation, in milliseconds.
///
/// `count` and the min/max range cover every run; the average only covers the
/// last `STATS_SAMPLE_COUNT` runs.
#[derive(Debug, Clone, Default)]
pub struct TimingStats {
    window: VecDeque<f64>,
    window_total: f64,
    runs: u64,
    range: Option<(f64, f64)>,
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ms: f64) {
        if self.window.len() == STATS_SAMPLE_COUNT {
            self.window_total -= self.window.pop_front().unwrap_or_default();
        }
        self.window.push_back(ms);
        self.window_total += ms;
        self.runs += 1;
        self.range = Some(match self.range {
            Some((lo, hi)) => (lo.min(ms), hi.max(ms)),
            None => (ms, ms),
        });
    }

    pub fn average(&self) -> f64 {
        match self.window.len() {
            0 => 0.0,
            n => self.window_total / n as f64,
        }
    }

    pub fn count(&self) -> u64 {
        self.runs
    }

    pub fn min(&self) -> Option<f64> {
        self.range.map(|(lo, _)| lo)
    }

    pub fn max(&self) -> Option<f64> {
        self.range.map(|(_, hi)| hi)
    }
}

impl fmt::Display for TimingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.range {
            None => write!(f, "no runs"),
            Some((lo, hi)) => write!(
                f,
                "{} runs, avg {:.2}ms, min {:.2}ms, max {:.2}ms",
                self.runs,
                self.average(),
                lo,
                hi
            ),
        }
    }
}

/// RAII timer that reports when its scope runs longer than `threshold_ms`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Elapsed time without stopping the timer
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "[PERF] slow {}",
                self.name
            );
        } else {
            debug!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }
    }
}
