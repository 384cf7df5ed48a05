use glam::Vec2;

/// Last known pointer position plus its repulsion range.
/// Written only by the host's pointer-moved signal; particles read it
/// during update but never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub pos: Vec2,
    pub influence_radius: f32,
}

impl PointerState {
    pub fn new(influence_radius: f32) -> Self {
        Self {
            // Matches the reference: origin until the first move event
            pos: Vec2::ZERO,
            influence_radius,
        }
    }

    /// Store raw surface coordinates verbatim.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let p = PointerState::new(150.0);
        assert_eq!(p.pos, Vec2::ZERO);
        assert_eq!(p.influence_radius, 150.0);
    }

    #[test]
    fn moved_stores_verbatim() {
        let mut p = PointerState::new(150.0);
        p.moved(12.5, -3.0);
        assert_eq!(p.pos, Vec2::new(12.5, -3.0));
    }
}
