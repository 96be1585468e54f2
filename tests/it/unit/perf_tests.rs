//! Unit tests for perf module.

use notecanvas::perf::{ScopedTimer, is_profiling_enabled, set_profiling_enabled};

#[test]
fn test_scoped_timer_creation() {
    // The timer should not warn because threshold is high
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_default_threshold_timer() {
    let _timer = ScopedTimer::with_default_threshold("pointer_move");
}

#[test]
fn test_runtime_toggle() {
    let initial = is_profiling_enabled();
    set_profiling_enabled(!initial);
    assert_eq!(is_profiling_enabled(), !initial);
    set_profiling_enabled(initial);
    assert_eq!(is_profiling_enabled(), initial);
}
