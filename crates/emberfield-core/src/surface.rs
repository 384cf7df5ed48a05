//! Drawing seam between the simulation and the host's raster surface.
//!
//! The simulation only ever talks to this trait, so the web bridge can
//! implement it over a 2D canvas context while tests inject a recording
//! fake and run headless.

use glam::Vec2;

use crate::particle::ParticleColor;

/// A drawable 2D raster surface.
pub trait DrawSurface {
    /// Wipe the whole surface back to transparent.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: ParticleColor);

    /// Draw a 1px line in the link color with the given opacity (0..=1).
    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every draw call for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub clears: usize,
        pub circles: Vec<(Vec2, f32, ParticleColor)>,
        pub lines: Vec<(Vec2, Vec2, f32)>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        /// Lines with visible extent (endpoints distinct).
        pub fn visible_lines(&self) -> impl Iterator<Item = &(Vec2, Vec2, f32)> {
            self.lines.iter().filter(|(a, b, _)| a != b)
        }
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: ParticleColor) {
            self.circles.push((center, radius, color));
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
            self.lines.push((from, to, alpha));
        }
    }
}
