use serde::{Deserialize, Serialize};

/// Tuning constants for the particle field.
/// The host can override individual values via a JSON options string;
/// anything omitted falls back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Viewport area (in px²) per spawned particle. Particle count is
    /// `floor(width * height / area_per_particle)`.
    #[serde(default = "default_area_per_particle")]
    pub area_per_particle: f32,
    /// Distance within which the pointer repels particles.
    #[serde(default = "default_influence_radius")]
    pub influence_radius: f32,
    /// Particles closer than this are joined by a line (strict `<`).
    #[serde(default = "default_link_distance")]
    pub link_distance: f32,
    /// Line opacity at distance zero; fades linearly to 0 at `link_distance`.
    #[serde(default = "default_link_alpha")]
    pub link_alpha: f32,
    /// Ambient drift speed limit per axis, px per frame.
    #[serde(default = "default_drift_limit")]
    pub drift_limit: f32,
    /// Smallest particle radius.
    #[serde(default = "default_radius_min")]
    pub radius_min: f32,
    /// Radius range above the minimum.
    #[serde(default = "default_radius_span")]
    pub radius_span: f32,
    /// Smallest density value (pointer displacement multiplier).
    #[serde(default = "default_density_min")]
    pub density_min: f32,
    /// Density range above the minimum.
    #[serde(default = "default_density_span")]
    pub density_span: f32,
    /// Fraction of the x-offset from home recovered per frame once the
    /// particle is outside pointer influence.
    #[serde(default = "default_home_pull")]
    pub home_pull: f32,
}

fn default_area_per_particle() -> f32 {
    9000.0
}

fn default_influence_radius() -> f32 {
    150.0
}

fn default_link_distance() -> f32 {
    120.0
}

fn default_link_alpha() -> f32 {
    0.2
}

fn default_drift_limit() -> f32 {
    0.2
}

fn default_radius_min() -> f32 {
    1.0
}

fn default_radius_span() -> f32 {
    3.0
}

fn default_density_min() -> f32 {
    1.0
}

fn default_density_span() -> f32 {
    30.0
}

fn default_home_pull() -> f32 {
    1.0 / 20.0
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: default_area_per_particle(),
            influence_radius: default_influence_radius(),
            link_distance: default_link_distance(),
            link_alpha: default_link_alpha(),
            drift_limit: default_drift_limit(),
            radius_min: default_radius_min(),
            radius_span: default_radius_span(),
            density_min: default_density_min(),
            density_span: default_density_span(),
            home_pull: default_home_pull(),
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON options string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.area_per_particle, 9000.0);
        assert_eq!(cfg.influence_radius, 150.0);
        assert_eq!(cfg.link_distance, 120.0);
        assert_eq!(cfg.link_alpha, 0.2);
        assert_eq!(cfg.home_pull, 0.05);
    }

    #[test]
    fn parse_partial_json_fills_defaults() {
        let cfg = FieldConfig::from_json(r#"{ "link_distance": 90.0 }"#).unwrap();
        assert_eq!(cfg.link_distance, 90.0);
        assert_eq!(cfg.influence_radius, 150.0);
        assert_eq!(cfg.drift_limit, 0.2);
    }

    #[test]
    fn parse_empty_object_is_default() {
        let cfg = FieldConfig::from_json("{}").unwrap();
        assert_eq!(cfg.area_per_particle, FieldConfig::default().area_per_particle);
    }

    #[test]
    fn parse_garbage_is_an_error() {
        assert!(FieldConfig::from_json("not json").is_err());
    }
}
