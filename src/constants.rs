// Page anchors, selectors and timings used by the DOM wiring.

// Particle text
pub const HERO_ID: &str = "hero";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const PARTICLE_LINES: [&str; 3] = ["DIGITAL", "/", "MATTER"];
pub const PARTICLE_FILL: &str = "rgba(255, 255, 255, 0.9)";
pub const PARTICLE_FONT_WEIGHT: u32 = 900;
pub const PARTICLE_FONT_FAMILY: &str = "Inter, sans-serif";

// Shader background
pub const BACKGROUND_CANVAS_ID: &str = "webgl-background";
pub const BACKGROUND_CANVAS_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;z-index:0;pointer-events:none;";
/// Full-screen quad as two triangles in clip space.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, //
    1.0, -1.0, //
    -1.0, 1.0, //
    -1.0, 1.0, //
    1.0, -1.0, //
    1.0, 1.0,
];

// Hero timeline and decode heading
pub const HERO_LINE_SELECTOR: &str = ".line";
pub const HERO_LINE_DURATION_SEC: f64 = 1.5;
pub const HERO_LINE_STAGGER_SEC: f64 = 0.2;
pub const HERO_LINE_DELAY_SEC: f64 = 0.5;
pub const DECODE_LINES: [&str; 3] = PARTICLE_LINES;
pub const DECODE_TARGET_SELECTOR: &str = "[data-decode]";
pub const DECODE_FALLBACK_SOURCE: &str = "WAARP";
pub const DECODE_START_DELAY_MS: i32 = 500;
pub const DECODE_TICK_MS: i32 = 50;
pub const DECODE_SPACING_EXPANDED: &str = "0.5em";

// Interactive logo
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const LOGO_SRC: &str = "assets/images/ai.svg";
pub const LOGO_EXISTING_SELECTOR: &str = "img[src*=\"ai.svg\"]";
pub const LOGO_START_DELAY_MS: i32 = 3000;
pub const LOGO_TITLE_FADE_SEC: f64 = 1.5;
pub const LOGO_FADE_IN_SEC: f64 = 2.0;

// Cursor
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const HOVER_TARGETS_SELECTOR: &str = "a, .work-cell";
pub const CURSOR_DURATION_SEC: f64 = 0.1;
pub const FOLLOWER_DURATION_SEC: f64 = 0.3;
pub const FOLLOWER_HOVER_SCALE: f64 = 3.0;

// HUD
pub const CLOCK_ID: &str = "system-clock";
pub const COORDS_ID: &str = "mouse-coords";
pub const SCROLL_INDICATOR_ID: &str = "scroll-indicator";
pub const CLOCK_INTERVAL_MS: i32 = 1000;

// Scroll reveals
pub const BIO_TRIGGER: &str = "#bio";
pub const BIO_WORDS_SELECTOR: &str = "#bio-reveal .word";
pub const WORK_CELL_SELECTOR: &str = ".work-cell";

// Settings overlay
pub const EDITOR_PANEL_ID: &str = "visual-editor-panel";
