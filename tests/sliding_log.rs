use std::time::{Duration, Instant};

use rate_gate_core::limiters::SlidingWindowLog;
use rate_gate_core::RateLimiter;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn new_sliding_window_log() {
    let _ = SlidingWindowLog::new(100, ms(1_000));
}

#[test]
#[should_panic(expected = "max_requests must be greater than 0")]
fn new_with_zero_max_requests() {
    SlidingWindowLog::new(0, ms(1_000));
}

#[test]
#[should_panic(expected = "window must be greater than 0")]
fn new_with_zero_window() {
    SlidingWindowLog::new(100, Duration::ZERO);
}

#[test]
fn admits_up_to_limit_then_denies() {
    // max 3 per 1s window: three calls at t=0 admit, the fourth denies,
    // a call just past the window admits again once t=0 entries are pruned.
    let log = SlidingWindowLog::new(3, ms(1_000));
    let base = Instant::now();

    assert!(log.try_admit_at(base));
    assert!(log.try_admit_at(base));
    assert!(log.try_admit_at(base));
    assert!(!log.try_admit_at(base));

    assert!(log.try_admit_at(base + ms(1_001)));
}

#[test]
fn entry_on_window_boundary_is_still_live() {
    let log = SlidingWindowLog::new(3, ms(1_000));
    let base = Instant::now();

    for _ in 0..3 {
        assert!(log.try_admit_at(base));
    }

    // Pruning removes entries strictly older than now - window, so at
    // exactly base + 1s the t=0 entries still count.
    assert!(!log.try_admit_at(base + ms(1_000)));
    assert!(log.try_admit_at(base + ms(1_001)));
}

#[test]
fn rolling_window_of_any_alignment_holds_the_limit() {
    let log = SlidingWindowLog::new(3, ms(1_000));
    let base = Instant::now();

    assert!(log.try_admit_at(base));
    assert!(log.try_admit_at(base + ms(400)));
    assert!(log.try_admit_at(base + ms(800)));

    // [0, 900] already holds 3 admits
    assert!(!log.try_admit_at(base + ms(900)));

    // t=0 falls out at 1001; live entries are 400 and 800
    assert!(log.try_admit_at(base + ms(1_001)));

    // [400, 1200] holds 400, 800, 1001: still full
    assert!(!log.try_admit_at(base + ms(1_200)));

    // 400 falls out at 1401
    assert!(log.try_admit_at(base + ms(1_401)));
}

#[test]
fn available_capacity_counts_live_entries() {
    let log = SlidingWindowLog::new(3, ms(1_000));
    let base = Instant::now();

    assert_eq!(log.available_capacity_at(base), Some(3));

    assert!(log.try_admit_at(base));
    assert!(log.try_admit_at(base + ms(500)));
    assert_eq!(log.available_capacity_at(base + ms(500)), Some(1));

    // Both entries expire by t=1501
    assert_eq!(log.available_capacity_at(base + ms(1_501)), Some(3));
}

#[test]
fn denied_calls_are_not_recorded() {
    let log = SlidingWindowLog::new(2, ms(1_000));
    let base = Instant::now();

    assert!(log.try_admit_at(base));
    assert!(log.try_admit_at(base));

    // Hammering while full must not extend the log: once the two admitted
    // entries expire, capacity is back regardless of the denials in between.
    for i in 1..=9 {
        assert!(!log.try_admit_at(base + ms(i * 100)));
    }
    assert!(log.try_admit_at(base + ms(1_001)));
    assert!(log.try_admit_at(base + ms(1_001)));
    assert!(!log.try_admit_at(base + ms(1_001)));
}

#[test]
fn reset_empties_the_log() {
    let log = SlidingWindowLog::new(2, ms(60_000));
    let base = Instant::now();

    assert!(log.try_admit_at(base));
    assert!(log.try_admit_at(base));
    assert!(!log.try_admit_at(base));

    log.reset();
    assert_eq!(log.available_capacity(), Some(2));
    assert!(log.try_admit());
}
