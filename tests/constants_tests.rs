// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_is_within_reasonable_bounds() {
    // Easing and damping factors are fractions
    assert!(MOUSE_SMOOTHING > 0.0 && MOUSE_SMOOTHING <= 1.0);
    assert!(PARTICLE_DAMPING > 0.0 && PARTICLE_DAMPING < 1.0);
    assert!(PARTICLE_RETURN_FACTOR > 0.0 && PARTICLE_RETURN_FACTOR < 1.0);

    // Lens falls off inside the visible screen height
    assert!(LENS_RADIUS > 0.0 && LENS_RADIUS < 1.0);
    assert!(LENS_STRENGTH > 0.0 && LENS_STRENGTH < 1.0);
    assert!(GRID_SIZE >= 1.0);
    assert!(GRID_LINE_THICKNESS < 0.5);
    assert!(GRID_OPACITY > 0.0 && GRID_OPACITY < 1.0);

    assert!(PARTICLE_SAMPLE_STRIDE >= 1);
    assert!(SCROLL_TOTAL_BARS > 0);
}

#[test]
fn particle_spring_is_stable() {
    // Eigenvalues of the per-frame update must sit inside the unit circle.
    let k = PARTICLE_RETURN_FACTOR as f64;
    let d = PARTICLE_DAMPING as f64;
    let trace = 1.0 - k + d;
    let det = d;
    let disc = trace * trace - 4.0 * det;
    let max_mag = if disc < 0.0 {
        det.sqrt()
    } else {
        (trace.abs() + disc.sqrt()) / 2.0
    };
    assert!(max_mag < 1.0, "spectral radius {max_mag}");
}

#[test]
fn quad_covers_clip_space() {
    assert_eq!(QUAD_VERTICES.len(), 12);
    for v in QUAD_VERTICES {
        assert!(v == -1.0 || v == 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_are_ordered() {
    assert!(DECODE_TICK_MS > 0);
    assert!(DECODE_START_DELAY_MS >= DECODE_TICK_MS);
    assert!(CLOCK_INTERVAL_MS >= 1000);
    assert!(CURSOR_DURATION_SEC < FOLLOWER_DURATION_SEC);
    assert!(HERO_LINE_STAGGER_SEC < HERO_LINE_DURATION_SEC);
}

#[test]
fn particle_text_reads_digital_matter() {
    assert_eq!(PARTICLE_LINES.concat(), "DIGITAL/MATTER");
    assert_eq!(DECODE_LINES, PARTICLE_LINES);
}

#[test]
fn decode_heading_anchor() {
    assert_eq!(DECODE_TARGET_SELECTOR, "[data-decode]");
    assert_ne!(DECODE_TARGET_SELECTOR, HERO_TITLE_SELECTOR);
    assert_eq!(DECODE_FALLBACK_SOURCE, "WAARP");
}
