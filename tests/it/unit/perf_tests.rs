//! Unit tests for timing instrumentation.

use mazemask::perf::{ScopedTimer, TimingStats, is_profiling_enabled, set_profiling_enabled};
use std::thread;
use std::time::Duration;

#[test]
fn test_scoped_timer_measures() {
    let timer = ScopedTimer::new("sleep", 1000.0);
    thread::sleep(Duration::from_millis(5));
    assert!(timer.elapsed_ms() >= 5.0);
}

#[test]
fn test_runtime_toggle() {
    let before = is_profiling_enabled();
    set_profiling_enabled(true);
    assert!(is_profiling_enabled());
    set_profiling_enabled(before);
}

#[test]
fn test_min_max_track_all_samples() {
    let mut stats = TimingStats::new();
    for ms in [3.0, 1.0, 7.0] {
        stats.record(ms);
    }
    assert_eq!(stats.min(), Some(1.0));
    assert_eq!(stats.max(), Some(7.0));
    assert_eq!(stats.count(), 3);
}

