//! Gallery tuning loaded from config/gallery.toml
//!
//! Every value has a default from `constants`, so the file is optional and
//! may override any subset of fields.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use crate::constants::*;

// Serde default functions so partial config files work
fn default_grid_radius() -> i32 {
    GRID_RADIUS
}
fn default_grid_spacing() -> f32 {
    GRID_SPACING
}
fn default_eye_height() -> f32 {
    EYE_HEIGHT
}
fn default_hover_height() -> f32 {
    HOVER_HEIGHT
}
fn default_roam_speed() -> f32 {
    ROAM_SPEED
}
fn default_collision_radius() -> f32 {
    COLLISION_RADIUS
}
fn default_focus_distance() -> f32 {
    FOCUS_DISTANCE
}
fn default_exit_offset() -> f32 {
    EXIT_OFFSET
}
fn default_flight_secs() -> f32 {
    FLIGHT_SECS
}
fn default_stay_low_max_cells() -> i32 {
    STAY_LOW_MAX_CELLS
}
fn default_clearance_margin() -> f32 {
    CLEARANCE_MARGIN
}

/// Gallery tuning values
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_grid_radius")]
    pub grid_radius: i32,
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f32,
    #[serde(default = "default_eye_height")]
    pub eye_height: f32,
    #[serde(default = "default_hover_height")]
    pub hover_height: f32,
    #[serde(default = "default_roam_speed")]
    pub roam_speed: f32,
    #[serde(default = "default_collision_radius")]
    pub collision_radius: f32,
    #[serde(default = "default_focus_distance")]
    pub focus_distance: f32,
    #[serde(default = "default_exit_offset")]
    pub exit_offset: f32,
    #[serde(default = "default_flight_secs")]
    pub flight_secs: f32,
    #[serde(default = "default_stay_low_max_cells")]
    pub stay_low_max_cells: i32,
    #[serde(default = "default_clearance_margin")]
    pub clearance_margin: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            grid_radius: GRID_RADIUS,
            grid_spacing: GRID_SPACING,
            eye_height: EYE_HEIGHT,
            hover_height: HOVER_HEIGHT,
            roam_speed: ROAM_SPEED,
            collision_radius: COLLISION_RADIUS,
            focus_distance: FOCUS_DISTANCE,
            exit_offset: EXIT_OFFSET,
            flight_secs: FLIGHT_SECS,
            stay_low_max_cells: STAY_LOW_MAX_CELLS,
            clearance_margin: CLEARANCE_MARGIN,
        }
    }
}

impl GalleryConfig {
    /// Load tuning from file, returns defaults when missing or unparsable
    pub fn load_or_default(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    info!("Loaded gallery config from {}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                info!("No gallery config at {} ({}), using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_defaults() {
        let config: GalleryConfig = toml::from_str("").unwrap();
        assert_eq!(config.grid_radius, GRID_RADIUS);
        assert_eq!(config.grid_spacing, GRID_SPACING);
        assert_eq!(config.flight_secs, FLIGHT_SECS);
    }

    #[test]
    fn test_partial_override() {
        let config: GalleryConfig = toml::from_str(
            r#"
            grid_radius = 5
            roam_speed = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(config.grid_radius, 5);
        assert_eq!(config.roam_speed, 8.0);
        assert_eq!(config.hover_height, HOVER_HEIGHT);
    }
}
