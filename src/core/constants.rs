// Effect tuning constants shared by the core state machines.
// Distances are in CSS pixels and rates are per animation frame unless the
// name says otherwise.

// Background pointer easing: pos += (target - pos) * MOUSE_SMOOTHING
pub const MOUSE_SMOOTHING: f32 = 0.1;

// Grid shader, injected into shaders/grid.frag as #defines
pub const GRID_SIZE: f32 = 40.0;
pub const GRID_LINE_THICKNESS: f32 = 0.02;
pub const GRID_OPACITY: f32 = 0.15;
pub const LENS_STRENGTH: f32 = 0.1;
pub const LENS_RADIUS: f32 = 0.4;

// Particle text
pub const PARTICLE_INTERACTION_RADIUS: f32 = 100.0;
pub const PARTICLE_REPEL_FORCE: f32 = 3.0;
pub const PARTICLE_RETURN_FACTOR: f32 = 0.15;
pub const PARTICLE_DAMPING: f32 = 0.85;
pub const PARTICLE_RADIUS: f32 = 1.5;
pub const PARTICLE_SAMPLE_STRIDE: usize = 3;
pub const PARTICLE_ALPHA_THRESHOLD: u8 = 128;

// Particle text layout
pub const TEXT_FONT_WIDTH_RATIO: f32 = 0.15;
pub const TEXT_FONT_MAX_PX: f32 = 200.0;
pub const TEXT_LINE_HEIGHT_RATIO: f32 = 0.8;

// Scroll indicator
pub const SCROLL_TOTAL_BARS: u32 = 15;
