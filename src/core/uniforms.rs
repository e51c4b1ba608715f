use glam::Vec2;

use super::constants::*;
use super::pointer::{client_to_gl, PointerSmoother};

/// Prefix `body` with `#define`s for the grid tuning constants.
///
/// Values are written with `{:?}` so whole numbers keep their `.0` and stay
/// GLSL floats.
pub fn grid_fragment_source(body: &str) -> String {
    let defines = [
        ("GRID_SIZE", GRID_SIZE),
        ("GRID_LINE_THICKNESS", GRID_LINE_THICKNESS),
        ("GRID_OPACITY", GRID_OPACITY),
        ("LENS_STRENGTH", LENS_STRENGTH),
        ("LENS_RADIUS", LENS_RADIUS),
    ];
    let mut src = String::with_capacity(body.len() + 160);
    for (name, value) in defines {
        src.push_str(&format!("#define {} {:?}\n", name, value));
    }
    src.push_str(body);
    src
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Host-side mirror of the grid shader's uniforms.
///
/// The WebGL layer uploads whatever this holds; nothing here touches GL.
#[derive(Clone, Copy, Debug)]
pub struct ShaderUniforms {
    pub resolution: Vec2,
    pub time: f32,
    pub pointer: PointerSmoother,
}

impl ShaderUniforms {
    pub fn new(smoothing: f32) -> Self {
        Self {
            resolution: Vec2::ONE,
            time: 0.0,
            pointer: PointerSmoother::new(smoothing),
        }
    }

    /// Record a new drawing-buffer size and return the matching viewport.
    pub fn resize(&mut self, width: u32, height: u32) -> Viewport {
        self.resolution = Vec2::new(width as f32, height as f32);
        Viewport {
            x: 0,
            y: 0,
            width: width as i32,
            height: height as i32,
        }
    }

    /// One frame: ease the pointer and stamp the elapsed time.
    pub fn advance(&mut self, elapsed_sec: f32) {
        self.pointer.step();
        self.time = elapsed_sec;
    }

    /// Smoothed pointer flipped into GL pixel space for `u_mouse`.
    pub fn mouse_gl(&self) -> Vec2 {
        client_to_gl(self.pointer.pos, self.resolution.y)
    }
}
