use glam::Vec2;

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub origin: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn at_rest(origin: Vec2) -> Self {
        Self {
            pos: origin,
            origin,
            vel: Vec2::ZERO,
            radius: PARTICLE_RADIUS,
        }
    }

    #[inline]
    pub fn displacement(&self) -> f32 {
        (self.pos - self.origin).length()
    }
}

/// Integrator tuning. Defaults reproduce the hero "DIGITAL / MATTER" feel.
#[derive(Clone, Copy, Debug)]
pub struct ParticleParams {
    pub interaction_radius: f32,
    pub repel_force: f32,
    pub return_factor: f32,
    pub damping: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            interaction_radius: PARTICLE_INTERACTION_RADIUS,
            repel_force: PARTICLE_REPEL_FORCE,
            return_factor: PARTICLE_RETURN_FACTOR,
            damping: PARTICLE_DAMPING,
        }
    }
}

/// Velocity impulse pushing a particle at `pos` away from `pointer`.
///
/// Zero outside the interaction radius. A pointer sitting exactly on the
/// particle pushes it toward -X.
#[inline]
pub fn repulsion_impulse(pos: Vec2, pointer: Vec2, params: &ParticleParams) -> Vec2 {
    let away = pos - pointer;
    let distance = away.length();
    if distance >= params.interaction_radius {
        return Vec2::ZERO;
    }
    let falloff = (params.interaction_radius - distance) / params.interaction_radius;
    let dir = if distance > f32::EPSILON {
        away / distance
    } else {
        Vec2::NEG_X
    };
    dir * falloff * params.repel_force
}

/// A field of particles anchored to sampled glyph pixels.
pub struct ParticleField {
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    params: ParticleParams,
}

impl ParticleField {
    pub fn new(origins: impl IntoIterator<Item = Vec2>, params: ParticleParams) -> Self {
        Self {
            particles: origins.into_iter().map(Particle::at_rest).collect(),
            pointer: None,
            params,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// `None` disables repulsion until the pointer comes back.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let params = self.params;
        let pointer = self.pointer;
        for p in &mut self.particles {
            step_particle(p, pointer, &params);
        }
    }
}

#[inline]
pub fn step_particle(p: &mut Particle, pointer: Option<Vec2>, params: &ParticleParams) {
    if let Some(ptr) = pointer {
        p.vel += repulsion_impulse(p.pos, ptr, params);
    }
    p.vel += (p.origin - p.pos) * params.return_factor;
    p.pos += p.vel;
    p.vel *= params.damping;
}

// ---------------- Glyph sampling ----------------

/// Scan an RGBA buffer every `stride` pixels and return the positions of
/// pixels whose alpha exceeds `threshold`, translated by `offset`.
pub fn sample_coverage(
    rgba: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    threshold: u8,
    offset: Vec2,
) -> Vec<Vec2> {
    let stride = stride.max(1);
    let mut out = Vec::new();
    if rgba.len() < width * height * 4 {
        return out;
    }
    for py in (0..height).step_by(stride) {
        for px in (0..width).step_by(stride) {
            let alpha = rgba[(py * width + px) * 4 + 3];
            if alpha > threshold {
                out.push(offset + Vec2::new(px as f32, py as f32));
            }
        }
    }
    out
}

/// Responsive font size for the particle text, capped for wide screens.
#[inline]
pub fn font_size_for_width(width: f32) -> f32 {
    (width * TEXT_FONT_WIDTH_RATIO).min(TEXT_FONT_MAX_PX)
}

/// Vertical center of `line_index` when `line_count` lines are stacked
/// around the middle of a canvas of height `height`.
#[inline]
pub fn line_center_y(height: f32, font_size: f32, line_index: usize, line_count: usize) -> f32 {
    let line_height = font_size * TEXT_LINE_HEIGHT_RATIO;
    let mid = (line_count.max(1) - 1) as f32 * 0.5;
    height * 0.5 + (line_index as f32 - mid) * line_height
}
