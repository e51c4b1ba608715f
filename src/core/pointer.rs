use glam::Vec2;

/// Eases a tracked position toward the last raw pointer sample.
///
/// Input handlers only write the target; the render loop calls `step` once
/// per frame, so the last write before a frame wins.
#[derive(Clone, Copy, Debug)]
pub struct PointerSmoother {
    pub pos: Vec2,
    pub target: Vec2,
    pub factor: f32,
}

impl PointerSmoother {
    pub fn new(factor: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            target: Vec2::ZERO,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.pos += (self.target - self.pos) * self.factor;
        self.pos
    }
}

/// Convert a Y-down client position to GL window space (origin bottom-left).
#[inline]
pub fn client_to_gl(client: Vec2, viewport_height: f32) -> Vec2 {
    Vec2::new(client.x, viewport_height - client.y)
}

/// Position relative to an element's top-left corner.
#[inline]
pub fn relative_to(client: Vec2, left: f32, top: f32) -> Vec2 {
    Vec2::new(client.x - left, client.y - top)
}
