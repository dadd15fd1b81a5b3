//! Tunable constants for framewalk
//!
//! Defaults for everything the gallery config can override, plus fixed
//! geometry and color values used by the scene.

use bevy::prelude::*;

// =============================================================================
// FILE PATHS
// =============================================================================

/// Gallery tuning config (optional, defaults apply when missing)
pub const CONFIG_FILE: &str = "config/gallery.toml";
/// Image manifest produced by the generate_manifest tool
pub const MANIFEST_FILE: &str = "assets/gallery.json";

// =============================================================================
// LATTICE
// =============================================================================

pub const GRID_RADIUS: i32 = 3; // -3..=3 per axis, 7x7 = 49 mount points
pub const GRID_SPACING: f32 = 5.0; // World units between adjacent mount points

// =============================================================================
// CAMERA HEIGHTS
// =============================================================================

pub const EYE_HEIGHT: f32 = 1.6; // Frames hang here; focused camera height
pub const HOVER_HEIGHT: f32 = 4.5; // Free-roam altitude, above the frames

// =============================================================================
// FREE-ROAM MOVEMENT
// =============================================================================

pub const ROAM_SPEED: f32 = 5.0; // World units per second
pub const COLLISION_RADIUS: f32 = 2.25; // Keep-out radius around occupied frames
pub const MOUSE_YAW_SENSITIVITY: f32 = 0.0035;
pub const MOUSE_PITCH_SENSITIVITY: f32 = 0.0030;
// Overview look band: 15 deg to 75 deg below horizontal
pub const PITCH_MIN: f32 = -75.0 * std::f32::consts::PI / 180.0;
pub const PITCH_MAX: f32 = -15.0 * std::f32::consts::PI / 180.0;

// =============================================================================
// CAMERA FLIGHTS
// =============================================================================

pub const FLIGHT_SECS: f32 = 1.5; // Fixed transition duration
pub const FOCUS_DISTANCE: f32 = 3.0; // Standoff from a focused frame face
pub const EXIT_OFFSET: f32 = 6.0; // Diagonal offset of the exit-to-overview pose
pub const STAY_LOW_MAX_CELLS: i32 = 3; // Hops at or under this grid distance stay at eye height
pub const CLEARANCE_MARGIN: f32 = 2.0; // Extra altitude when a frame sits on the flight line

// =============================================================================
// FRAME GEOMETRY
// =============================================================================

pub const FRAME_MAX_IMAGE_SIZE: f32 = 2.5; // Images aspect-fit into this square
pub const EMPTY_FRAME_IMAGE_SIZE: f32 = 2.0;
pub const MAT_BORDER: f32 = 0.15; // White mat around the image
pub const FRAME_BORDER: f32 = 0.08; // Dark outer frame
pub const FRAME_DEPTH: f32 = 0.05;

// =============================================================================
// SCENE DRESSING
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.96, 0.96, 0.95);
pub const FLOOR_COLOR: Color = Color::srgb(0.82, 0.81, 0.79);
pub const FRAME_BORDER_COLOR: Color = Color::srgb(0.10, 0.10, 0.10);
pub const MAT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_SPAWN_Z: f32 = 8.0;
