use std::time::{Duration, Instant};

use rate_gate_core::limiters::FixedWindowCounter;
use rate_gate_core::RateLimiter;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn new_fixed_window_counter() {
    let _ = FixedWindowCounter::new(100, ms(1_000));
}

#[test]
#[should_panic(expected = "max_requests must be greater than 0")]
fn new_with_zero_max_requests() {
    FixedWindowCounter::new(0, ms(1_000));
}

#[test]
#[should_panic(expected = "window must be greater than 0")]
fn new_with_zero_window() {
    FixedWindowCounter::new(100, Duration::ZERO);
}

#[test]
fn window_admits_up_to_limit() {
    let counter = FixedWindowCounter::new(2, ms(1_000));
    let base = Instant::now();

    assert!(counter.try_admit_at(base + ms(100)));
    assert!(counter.try_admit_at(base + ms(200)));
    assert!(!counter.try_admit_at(base + ms(300)));
    assert!(!counter.try_admit_at(base + ms(900)));
}

#[test]
fn counter_resets_exactly_at_rotation() {
    let counter = FixedWindowCounter::new(2, ms(1_000));
    let base = Instant::now();

    // Fill the first window late
    assert!(counter.try_admit_at(base + ms(900)));
    assert!(counter.try_admit_at(base + ms(950)));
    assert!(!counter.try_admit_at(base + ms(970)));

    // One full window has elapsed: count drops to zero and the full
    // capacity is available again
    assert_eq!(counter.available_capacity_at(base + ms(1_000)), Some(2));
    assert!(counter.try_admit_at(base + ms(1_000)));
    assert!(counter.try_admit_at(base + ms(1_000)));
    assert!(!counter.try_admit_at(base + ms(1_000)));
}

#[test]
fn boundary_burst_is_preserved_not_fixed() {
    // The documented fixed-window artifact: max_requests at the very end of
    // one window plus max_requests at the very start of the next may all
    // admit. This is the accepted trade-off for O(1) memory; a rolling
    // window would reject the second burst.
    let counter = FixedWindowCounter::new(3, ms(1_000));
    let base = Instant::now();
    let mut admitted = 0;

    for _ in 0..3 {
        if counter.try_admit_at(base + ms(990)) {
            admitted += 1;
        }
    }
    for _ in 0..3 {
        if counter.try_admit_at(base + ms(1_000)) {
            admitted += 1;
        }
    }

    // 6 admits within 10ms of wall time, twice the per-window limit
    assert_eq!(admitted, 6);
    assert!(!counter.try_admit_at(base + ms(1_010)));
}

#[test]
fn rotation_is_a_hard_jump_to_now() {
    let counter = FixedWindowCounter::new(1, ms(1_000));
    let base = Instant::now();

    // First decision arrives mid-second-window: the new window starts at
    // that instant, so the next boundary is 1500 + 1000, not 2000.
    assert!(counter.try_admit_at(base + ms(1_500)));
    assert!(!counter.try_admit_at(base + ms(2_400)));
    assert!(counter.try_admit_at(base + ms(2_500)));
}

#[test]
fn count_is_monotonic_within_a_window() {
    let counter = FixedWindowCounter::new(3, ms(1_000));
    let base = Instant::now();

    assert_eq!(counter.available_capacity_at(base), Some(3));
    assert!(counter.try_admit_at(base + ms(100)));
    assert_eq!(counter.available_capacity_at(base + ms(200)), Some(2));
    assert!(counter.try_admit_at(base + ms(300)));
    assert_eq!(counter.available_capacity_at(base + ms(400)), Some(1));
    assert!(counter.try_admit_at(base + ms(500)));
    assert_eq!(counter.available_capacity_at(base + ms(600)), Some(0));
}

#[test]
fn reset_starts_a_fresh_window() {
    let counter = FixedWindowCounter::new(2, ms(60_000));
    let base = Instant::now();

    assert!(counter.try_admit_at(base));
    assert!(counter.try_admit_at(base));
    assert!(!counter.try_admit_at(base));

    counter.reset();
    assert_eq!(counter.available_capacity(), Some(2));
    assert!(counter.try_admit());
}
