pub const MASK_RADIUS_PX: f32 = 180.0;
/// Where the mask is parked while the pointer is outside the logo.
pub const MASK_PARKED_PX: f32 = -1000.0;

/// Radial mask revealing the blurred logo around `(x, y)` in wrapper pixels.
pub fn reveal_mask(x: f32, y: f32) -> String {
    format!(
        "radial-gradient(circle {}px at {}px {}px, black 30%, transparent 80%)",
        MASK_RADIUS_PX, x, y
    )
}

pub fn hidden_mask() -> String {
    format!(
        "radial-gradient(circle {}px at {}px {}px, black 100%, transparent 100%)",
        MASK_RADIUS_PX, MASK_PARKED_PX, MASK_PARKED_PX
    )
}
