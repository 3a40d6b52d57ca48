// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use hero_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(PX_PER_PARTICLE > 0.0);
    assert!(MAX_PARTICLES >= MIN_PARTICLES);
    assert!(MAX_SPEED > 0.0);

    // Alphas must be usable as CSS alpha
    assert!(PAIR_ALPHA > 0.0 && PAIR_ALPHA <= 1.0);
    assert!(POINTER_ALPHA > 0.0 && POINTER_ALPHA <= 1.0);
    assert!(OPACITY_MIN >= 0.0 && OPACITY_MAX <= 1.0);

    assert!(FPS_LOG_INTERVAL_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Ranges are ordered
    assert!(RADIUS_MAX > RADIUS_MIN);
    assert!(OPACITY_MAX > OPACITY_MIN);

    // The pointer reaches further and links brighter than particles do
    assert!(POINTER_REACH > 1.0);
    assert!(POINTER_ALPHA > PAIR_ALPHA);
    assert!(POINTER_LINE_WIDTH > PAIR_LINE_WIDTH);

    // A particle can't cross a whole link distance in one frame
    assert!(MAX_SPEED < LINK_DISTANCE);
}

#[test]
fn canvas_id_is_a_plain_dom_id() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!CANVAS_ID.contains(' ') && !CANVAS_ID.starts_with('#'));
}

#[test]
fn page_transition_events_are_distinct() {
    assert_ne!(EV_PAGE_HIDE, EV_PAGE_SHOW);
}
