pub mod config;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod rng;
pub mod sim;
pub mod surface;

// Re-export key types at crate root for convenience
pub use config::FieldConfig;
pub use field::{Extent, ParticleField};
pub use particle::{Particle, ParticleColor};
pub use pointer::PointerState;
pub use rng::Rng;
pub use sim::Simulation;
pub use surface::DrawSurface;
