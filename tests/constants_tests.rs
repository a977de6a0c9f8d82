// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_constants_are_stable() {
    // smoothing outside (0, 1] overshoots or never moves
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING <= 1.0);
    assert!(CLOCK_STEP_PER_FRAME > 0.0);
    assert!(DEFAULT_ELEMENT_SPEED > 0.0 && DEFAULT_ELEMENT_SPEED.is_finite());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_never_goes_behind_the_plane() {
    assert!(DEPTH_BASE_PX - DEPTH_AMPLITUDE_PX >= 0.0);
    assert_eq!(DEPTH_BASE_PX - DEPTH_AMPLITUDE_PX, 10.0);
    assert_eq!(DEPTH_BASE_PX + DEPTH_AMPLITUDE_PX, 50.0);
}

#[test]
fn default_speed_scale() {
    assert!((1.0 + DEFAULT_ELEMENT_SPEED * SCALE_GAIN - 1.04).abs() < 1e-12);
}

#[test]
fn preference_values_are_distinct() {
    assert_ne!(SIDEBAR_COLLAPSED_KEY, DARK_MODE_KEY);
    assert_ne!(SIDEBAR_COLLAPSED_ON, SIDEBAR_COLLAPSED_OFF);
    assert_ne!(DARK_MODE_ON, DARK_MODE_OFF);
}
