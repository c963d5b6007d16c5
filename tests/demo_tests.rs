// Host-side tests for the demo-mode timer.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod demo {
    include!("../src/core/demo.rs");
}

use demo::DemoMode;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn demo() -> DemoMode {
    DemoMode::new(Duration::from_millis(250), Duration::from_secs(30))
}

#[test]
fn shuffles_immediately_then_once_per_interval() {
    let mut d = demo();
    assert!(d.advance(FRAME), "initial shuffle on first frame");

    // 15 frames = 240 ms: still inside the interval.
    for _ in 0..15 {
        assert!(!d.advance(FRAME));
    }
    assert!(d.advance(FRAME), "shuffle after the interval elapses");
}

#[test]
fn suspend_blocks_shuffles_until_the_delay_elapses() {
    let mut d = demo();
    d.suspend();
    assert!(!d.is_running());

    let frames_in_30s = 30_000 / 16; // delay hits zero on the last frame
    for _ in 0..frames_in_30s {
        assert!(!d.advance(FRAME), "no shuffles while suspended");
    }
    assert!(d.is_running(), "demo resumes after the delay");
    assert!(d.advance(FRAME), "cycling restarts immediately on resume");
}

#[test]
fn retrigger_restarts_the_resume_delay() {
    let mut d = demo();
    d.suspend();
    for _ in 0..1250 {
        d.advance(FRAME); // 20 s
    }
    d.suspend();
    for _ in 0..1250 {
        assert!(!d.advance(FRAME));
    }
    assert!(!d.is_running(), "delay was reset by the second suspend");
    for _ in 0..700 {
        d.advance(FRAME); // past the remaining 10 s
    }
    assert!(d.is_running());
}
