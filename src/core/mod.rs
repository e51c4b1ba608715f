pub mod constants;
pub mod decode;
pub mod editor;
pub mod hud;
pub mod logo;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod uniforms;

pub use constants::*;

// Shaders bundled as string constants
pub static GRID_VERT: &str = include_str!("../../shaders/grid.vert");
pub static GRID_FRAG: &str = include_str!("../../shaders/grid.frag");
