//! Framewalk - a walkable 3D photo gallery built with Bevy
//!
//! Photographs hang on double-sided frames across a square lattice; the
//! camera roams the overview or flies to a clicked image. This crate provides
//! the navigation and camera-control engine plus the scene plumbing,
//! organized into modules.

// Core modules
pub mod config;
pub mod constants;
pub mod helpers;
pub mod images;

// Engine modules
pub mod camera;
pub mod grid;
pub mod navigation;
pub mod scene;
pub mod transition;

// Re-export commonly used types for convenience
pub use camera::{RoamInput, collides, free_roam_movement, horizontal_heading, mouse_look, resolve_roam};
pub use config::GalleryConfig;
pub use constants::*;
pub use grid::{FrameSide, GalleryGrid, GridError, MountPoint, assign_images, coord_hash};
pub use helpers::{ease_in_out_cubic, quadratic_bezier};
pub use images::{CatalogError, GalleryImage, ImageCatalog, Orientation, orientation_paired};
pub use navigation::{
    GalleryNav, exit_to_overview, go_next, go_previous, jump_to, keyboard_navigation,
    roaming_active,
};
pub use scene::{EmptyFrame, PictureFrame, face_size, frame_click_system, pick_frame_face, spawn_gallery};
pub use transition::{
    ActiveFlight, Flight, FlightPath, advance_flight, begin_focus_flight, begin_overview_flight,
    plan_flight,
};
