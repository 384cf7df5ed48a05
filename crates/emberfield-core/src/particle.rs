//! A single animated point-mass in the decorative field.

use glam::Vec2;

use crate::config::FieldConfig;
use crate::field::Extent;
use crate::pointer::PointerState;
use crate::rng::Rng;
use crate::surface::DrawSurface;

/// Two-value palette for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Ember,
    Azure,
}

impl ParticleColor {
    /// CSS color string for canvas fills.
    pub fn css(self) -> &'static str {
        match self {
            ParticleColor::Ember => "#FF6B00",
            ParticleColor::Azure => "#2E86DE",
        }
    }
}

/// A particle with a home anchor it drifts back to when undisturbed.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Rest anchor, fixed at spawn.
    pub home: Vec2,
    /// Ambient per-frame velocity, sign flips on wall contact.
    pub drift: Vec2,
    pub radius: f32,
    /// Scales how far pointer proximity displaces this particle.
    pub density: f32,
    pub color: ParticleColor,
}

impl Particle {
    /// Spawn at a uniformly random position inside the extent.
    pub fn spawn(extent: Extent, cfg: &FieldConfig, rng: &mut Rng) -> Self {
        let pos = Vec2::new(
            rng.range_f32(0.0, extent.width),
            rng.range_f32(0.0, extent.height),
        );
        let drift = Vec2::new(
            rng.range_f32(-cfg.drift_limit, cfg.drift_limit),
            rng.range_f32(-cfg.drift_limit, cfg.drift_limit),
        );
        let color = if rng.coin() {
            ParticleColor::Ember
        } else {
            ParticleColor::Azure
        };

        Particle {
            pos,
            home: pos,
            drift,
            radius: rng.range_f32(cfg.radius_min, cfg.radius_min + cfg.radius_span),
            density: rng.range_f32(cfg.density_min, cfg.density_min + cfg.density_span),
            color,
        }
    }

    /// Advance one frame: pointer repulsion, home easing, ambient drift,
    /// and elastic reflection off the field bounds.
    pub fn update(&mut self, pointer: &PointerState, extent: Extent, cfg: &FieldConfig) {
        let d = pointer.pos - self.pos;
        let dist = d.length();

        if dist < pointer.influence_radius && dist > 0.0 {
            // Linear falloff: 1 at the pointer, 0 at the radius edge.
            // Push away, scaled by density.
            let force = (pointer.influence_radius - dist) / pointer.influence_radius;
            self.pos -= (d / dist) * force * self.density;
        } else if dist > 0.0 {
            // Outside influence: ease back toward home. The reference
            // recovers the x axis only; preserved as-is (see DESIGN.md).
            if self.pos.x != self.home.x {
                self.pos.x -= (self.pos.x - self.home.x) * cfg.home_pull;
            }
        }
        // dist == 0: pointer sits exactly on the particle; no force,
        // no easing, drift still applies.

        self.pos += self.drift;

        if self.pos.x > extent.width || self.pos.x < 0.0 {
            self.drift.x = -self.drift.x;
        }
        if self.pos.y > extent.height || self.pos.y < 0.0 {
            self.drift.y = -self.drift.y;
        }
    }

    /// Paint as a filled circle. No state mutation.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}
