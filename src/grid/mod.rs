//! Gallery lattice - mount point enumeration and deterministic facings

mod assign;

pub use assign::*;

use bevy::prelude::*;
use thiserror::Error;

/// Seed for the facing hash
const FACING_SEED: u32 = 0x51ED_270B;
/// Independent seed for the assignment shuffle
pub(crate) const SHUFFLE_SEED: u32 = 0xB529_7A4D;

/// Deterministic coordinate hash.
///
/// `h = (x * 0x9E3779B9) ^ (z * 0x85EBCA6B) ^ seed`, avalanched with two
/// xorshift-multiply rounds (`0x7FEB352D`, `0x846CA68B`) and a final shift.
/// Pure integer math, so every run and platform reproduces the same lattice.
pub fn coord_hash(grid_x: i32, grid_z: i32, seed: u32) -> u32 {
    let mut h = (grid_x as u32)
        .wrapping_mul(0x9E37_79B9)
        ^ (grid_z as u32).wrapping_mul(0x85EB_CA6B)
        ^ seed;
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846C_A68B);
    h ^= h >> 16;
    h
}

/// Which side of a double-sided frame an image hangs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSide {
    Front,
    Back,
}

/// A lattice cell that may hold a double-sided picture frame
#[derive(Debug, Clone, PartialEq)]
pub struct MountPoint {
    pub grid_x: i32,
    pub grid_z: i32,
    pub world_x: f32,
    pub world_z: f32,
    /// Quarter turns around Y; 0 faces +Z
    pub facing: u8,
    pub front_image: Option<usize>,
    pub back_image: Option<usize>,
}

impl MountPoint {
    pub fn is_occupied(&self) -> bool {
        self.front_image.is_some() || self.back_image.is_some()
    }

    /// Frame center in world space (all frames hang at eye height)
    pub fn world_pos(&self, eye_height: f32) -> Vec3 {
        Vec3::new(self.world_x, eye_height, self.world_z)
    }

    /// Yaw of the front face normal, radians
    pub fn yaw(&self) -> f32 {
        self.facing as f32 * std::f32::consts::FRAC_PI_2
    }

    /// Outward normal of the given side
    pub fn side_normal(&self, side: FrameSide) -> Vec3 {
        let yaw = match side {
            FrameSide::Front => self.yaw(),
            FrameSide::Back => self.yaw() + std::f32::consts::PI,
        };
        Quat::from_rotation_y(yaw) * Vec3::Z
    }

    /// Image hung on the given side, if any
    pub fn image_on(&self, side: FrameSide) -> Option<usize> {
        match side {
            FrameSide::Front => self.front_image,
            FrameSide::Back => self.back_image,
        }
    }
}

/// Configuration errors caught when building the lattice
#[derive(Debug, Error)]
pub enum GridError {
    #[error("lattice radius must be positive, got {0}")]
    InvalidRadius(i32),
    #[error("lattice spacing must be positive, got {0}")]
    InvalidSpacing(f32),
}

/// The full lattice of mount points
#[derive(Resource, Debug, Clone)]
pub struct GalleryGrid {
    pub points: Vec<MountPoint>,
    pub radius: i32,
    pub spacing: f32,
}

impl GalleryGrid {
    /// Enumerate every `(grid_x, grid_z)` in `[-radius, radius]^2`, row by
    /// row, with a hash-derived facing per point. Pure function of the inputs.
    pub fn generate(radius: i32, spacing: f32) -> Result<Self, GridError> {
        if radius <= 0 {
            return Err(GridError::InvalidRadius(radius));
        }
        if spacing <= 0.0 {
            return Err(GridError::InvalidSpacing(spacing));
        }

        let side = (2 * radius + 1) as usize;
        let mut points = Vec::with_capacity(side * side);
        for grid_z in -radius..=radius {
            for grid_x in -radius..=radius {
                points.push(MountPoint {
                    grid_x,
                    grid_z,
                    world_x: grid_x as f32 * spacing,
                    world_z: grid_z as f32 * spacing,
                    facing: (coord_hash(grid_x, grid_z, FACING_SEED) % 4) as u8,
                    front_image: None,
                    back_image: None,
                });
            }
        }

        Ok(Self {
            points,
            radius,
            spacing,
        })
    }

    /// Occupied mount points (at least one image hung)
    pub fn occupied(&self) -> impl Iterator<Item = &MountPoint> {
        self.points.iter().filter(|p| p.is_occupied())
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn free_count(&self) -> usize {
        self.points.len() - self.occupied_count()
    }

    /// Where a catalog image hangs: point index plus front/back side
    pub fn point_for_image(&self, image: usize) -> Option<(usize, FrameSide)> {
        self.points.iter().enumerate().find_map(|(index, point)| {
            if point.front_image == Some(image) {
                Some((index, FrameSide::Front))
            } else if point.back_image == Some(image) {
                Some((index, FrameSide::Back))
            } else {
                None
            }
        })
    }

    /// Manhattan distance in grid cells between the frames of two images
    pub fn grid_distance_between_images(&self, image_a: usize, image_b: usize) -> Option<i32> {
        let (a, _) = self.point_for_image(image_a)?;
        let (b, _) = self.point_for_image(image_b)?;
        let a = &self.points[a];
        let b = &self.points[b];
        Some((a.grid_x - b.grid_x).abs() + (a.grid_z - b.grid_z).abs())
    }

    /// Half-extent of the walkable area: lattice edge plus half a cell
    pub fn roam_bound(&self) -> f32 {
        self.radius as f32 * self.spacing + self.spacing / 2.0
    }
}
