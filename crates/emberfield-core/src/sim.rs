//! Per-tick orchestration: clear, links, update + render.
//!
//! Owns every piece of mutable state the animation touches (field,
//! pointer, RNG), so the web bridge only has to forward signals and
//! schedule ticks. Headless by construction; tests drive it with a
//! recording surface.

use crate::config::FieldConfig;
use crate::field::{Extent, ParticleField};
use crate::pointer::PointerState;
use crate::rng::Rng;
use crate::surface::DrawSurface;

pub struct Simulation {
    config: FieldConfig,
    field: ParticleField,
    pointer: PointerState,
    rng: Rng,
}

impl Simulation {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        let pointer = PointerState::new(config.influence_radius);
        Self {
            config,
            field: ParticleField::new(),
            pointer,
            rng: Rng::new(seed),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn extent(&self) -> Extent {
        self.field.extent()
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    /// Viewport-resized signal: adopt the new extent and rebuild the
    /// whole field. Stale home anchors must not survive a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        let extent = Extent::new(width, height);
        self.field.populate(extent, &self.config, &mut self.rng);
        log::debug!(
            "field repopulated: {}x{} -> {} particles",
            width,
            height,
            self.field.len()
        );
    }

    /// Pointer-moved signal: store the position verbatim. The frame
    /// cadence is independent; intermediate positions between ticks
    /// coalesce away.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    /// One frame: clear, draw links against the positions left by the
    /// previous tick, then update and repaint every particle.
    pub fn step(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear();

        self.field.draw_links(surface, &self.config);

        let extent = self.field.extent();
        for particle in self.field.iter_mut() {
            particle.update(&self.pointer, extent, &self.config);
            particle.render(surface);
        }
    }
}
