// Pointer smoothing and shader uniform bookkeeping, tested on the host.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod uniforms {
        include!("../src/core/uniforms.rs");
    }
}

use fx::constants::MOUSE_SMOOTHING;
use fx::pointer::*;
use fx::uniforms::*;
use glam::Vec2;

#[test]
fn one_step_moves_a_tenth_of_the_way() {
    let mut s = PointerSmoother::new(MOUSE_SMOOTHING);
    s.pos = Vec2::new(100.0, 200.0);
    s.set_target(Vec2::new(300.0, 0.0));
    let next = s.step();
    assert!((next - Vec2::new(120.0, 180.0)).length() < 1e-4);
    assert_eq!(s.pos, next);
}

#[test]
fn smoothing_converges_on_a_fixed_target() {
    let mut s = PointerSmoother::new(MOUSE_SMOOTHING);
    let target = Vec2::new(640.0, 360.0);
    s.set_target(target);
    let mut prev = (target - s.pos).length();
    for _ in 0..120 {
        s.step();
        let err = (target - s.pos).length();
        assert!(err <= prev);
        prev = err;
    }
    // 0.9^120 of the initial 734 px
    assert!(prev < 0.01, "residual {prev}");
}

#[test]
fn last_target_before_a_frame_wins() {
    let mut s = PointerSmoother::new(0.5);
    s.set_target(Vec2::new(1000.0, 1000.0));
    s.set_target(Vec2::new(10.0, 20.0));
    assert_eq!(s.step(), Vec2::new(5.0, 10.0));
}

#[test]
fn smoothing_factor_is_clamped() {
    assert_eq!(PointerSmoother::new(4.0).factor, 1.0);
    assert_eq!(PointerSmoother::new(-1.0).factor, 0.0);
}

#[test]
fn client_space_flips_to_gl_space() {
    assert_eq!(client_to_gl(Vec2::new(10.0, 0.0), 800.0), Vec2::new(10.0, 800.0));
    assert_eq!(client_to_gl(Vec2::new(10.0, 800.0), 800.0), Vec2::new(10.0, 0.0));
    assert_eq!(relative_to(Vec2::new(50.0, 60.0), 20.0, 5.0), Vec2::new(30.0, 55.0));
}

#[test]
fn resize_updates_resolution_and_viewport() {
    let mut u = ShaderUniforms::new(MOUSE_SMOOTHING);
    assert_eq!(u.resolution, Vec2::ONE);
    let vp = u.resize(1920, 1080);
    assert_eq!(u.resolution, Vec2::new(1920.0, 1080.0));
    assert_eq!(
        vp,
        Viewport {
            x: 0,
            y: 0,
            width: 1920,
            height: 1080
        }
    );
}

#[test]
fn mouse_uniform_is_smoothed_then_flipped() {
    let mut u = ShaderUniforms::new(1.0);
    u.resize(800, 600);
    u.pointer.set_target(Vec2::new(200.0, 100.0));
    u.advance(1.25);
    assert_eq!(u.time, 1.25);
    assert_eq!(u.mouse_gl(), Vec2::new(200.0, 500.0));
}

#[test]
fn grid_shader_reads_tuning_from_defines() {
    let body = include_str!("../shaders/grid.frag");
    let src = grid_fragment_source(body);
    let header: Vec<&str> = src.lines().take(5).collect();
    assert_eq!(
        header,
        [
            "#define GRID_SIZE 40.0",
            "#define GRID_LINE_THICKNESS 0.02",
            "#define GRID_OPACITY 0.15",
            "#define LENS_STRENGTH 0.1",
            "#define LENS_RADIUS 0.4",
        ]
    );
    assert!(src.ends_with(body));

    // Every define is consumed by the shader body, which carries no copies.
    let code: String = body
        .lines()
        .filter(|l| !l.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");
    for name in [
        "GRID_SIZE",
        "GRID_LINE_THICKNESS",
        "GRID_OPACITY",
        "LENS_STRENGTH",
        "LENS_RADIUS",
    ] {
        assert!(code.contains(name), "{name} unused in grid.frag");
    }
    assert!(!code.contains("const float"));
}
