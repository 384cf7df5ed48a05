//! Particle collection sized to the viewport, plus link drawing.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::rng::Rng;
use crate::surface::DrawSurface;

/// Logical viewport dimensions. Single source of truth for spawn bounds
/// and boundary reflection; the raster surface is sized to match on
/// every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn area(self) -> f32 {
        self.width * self.height
    }
}

/// Owns the particles. Order carries no meaning beyond render order.
pub struct ParticleField {
    particles: Vec<Particle>,
    extent: Extent,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            extent: Extent::new(0.0, 0.0),
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    /// Discard every particle and rebuild the field for the new extent.
    /// Count is `floor(area / area_per_particle)`; a degenerate extent
    /// yields an empty field rather than an error.
    pub fn populate(&mut self, extent: Extent, cfg: &FieldConfig, rng: &mut Rng) {
        self.extent = extent;
        self.particles.clear();

        let area = extent.area();
        if area <= 0.0 || cfg.area_per_particle <= 0.0 {
            return;
        }

        let count = (area / cfg.area_per_particle) as usize;
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(extent, cfg, rng));
        }
    }

    /// Draw a line between every pair of particles closer than
    /// `link_distance`, opacity fading linearly with distance. Quadratic
    /// in the particle count; the density constant keeps n small.
    pub fn draw_links(&self, surface: &mut dyn DrawSurface, cfg: &FieldConfig) {
        for a in 0..self.particles.len() {
            for b in a..self.particles.len() {
                let pa = self.particles[a].pos;
                let pb = self.particles[b].pos;
                let dist = pa.distance(pb);

                if dist < cfg.link_distance {
                    let alpha = (1.0 - dist / cfg.link_distance) * cfg.link_alpha;
                    surface.stroke_line(pa, pb, alpha);
                }
            }
        }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}
