//! Free-roam camera controller - heading movement, boundaries, collision sliding

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::config::GalleryConfig;
use crate::constants::*;
use crate::grid::GalleryGrid;

/// Held movement keys for one roam tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoamInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl RoamInput {
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            forward: keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp),
            backward: keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown),
            left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
            right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// True when the candidate position stands inside an occupied frame's
/// keep-out radius. Distance is horizontal (XZ): frames hang at eye height
/// while the camera hovers above them, so only the footprint matters.
/// Empty frames never collide.
pub fn collides(grid: &GalleryGrid, candidate: Vec3, radius: f32) -> bool {
    grid.occupied().any(|point| {
        let dx = candidate.x - point.world_x;
        let dz = candidate.z - point.world_z;
        dx * dx + dz * dz < radius * radius
    })
}

/// Resolve one roam tick: move along the horizontal heading, clamp to the
/// walkable bounds, and slide along whichever axis stays collision-free when
/// the full move would enter a frame's keep-out sphere.
pub fn resolve_roam(
    position: Vec3,
    heading: Vec3,
    input: RoamInput,
    speed: f32,
    dt: f32,
    grid: &GalleryGrid,
    collision_radius: f32,
) -> Vec3 {
    if !input.any() {
        return position;
    }

    let right = heading.cross(Vec3::Y).normalize();
    let mut direction = Vec3::ZERO;
    if input.forward {
        direction += heading;
    }
    if input.backward {
        direction -= heading;
    }
    if input.right {
        direction += right;
    }
    if input.left {
        direction -= right;
    }
    if direction.length_squared() == 0.0 {
        return position;
    }

    let bound = grid.roam_bound();
    let step = direction.normalize() * speed * dt;
    let mut candidate = position + step;
    candidate.x = candidate.x.clamp(-bound, bound);
    candidate.z = candidate.z.clamp(-bound, bound);

    if !collides(grid, candidate, collision_radius) {
        return candidate;
    }

    // Blocked: apply the X and Z components separately, keeping whichever
    // partial move stays clear (tangential slide along the obstacle)
    let mut resolved = position;
    let x_only = Vec3::new(candidate.x, position.y, resolved.z);
    if !collides(grid, x_only, collision_radius) {
        resolved.x = candidate.x;
    }
    let z_only = Vec3::new(resolved.x, position.y, candidate.z);
    if !collides(grid, z_only, collision_radius) {
        resolved.z = candidate.z;
    }
    resolved
}

/// Horizontal look direction, or None when the camera points straight down
pub fn horizontal_heading(transform: &Transform) -> Option<Vec3> {
    let forward = transform.forward();
    let flat = Vec3::new(forward.x, 0.0, forward.z);
    (flat.length_squared() > 1e-8).then(|| flat.normalize())
}

/// Runs while roaming: WASD / arrow movement in the camera heading, with the
/// altitude pinned to the hover height.
pub fn free_roam_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GalleryConfig>,
    grid: Res<GalleryGrid>,
    mut camera: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    transform.translation.y = config.hover_height;

    let input = RoamInput::from_keyboard(&keyboard);
    if !input.any() {
        return;
    }
    let Some(heading) = horizontal_heading(&transform) else {
        return;
    };

    transform.translation = resolve_roam(
        transform.translation,
        heading,
        input,
        config.roam_speed,
        time.delta_secs(),
        &grid,
        config.collision_radius,
    );
}

/// Runs while roaming: yaw/pitch from mouse motion while the right button is
/// held, with pitch clamped to the overview band (always looking down at the
/// frames, never past vertical).
pub fn mouse_look(
    mouse_button: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    mut camera: Query<&mut Transform, With<Camera3d>>,
) {
    if !mouse_button.pressed(MouseButton::Right) || motion.delta == Vec2::ZERO {
        return;
    }
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    let forward = transform.forward();
    let mut yaw = (-forward.x).atan2(-forward.z);
    let mut pitch = forward.y.asin();

    yaw -= motion.delta.x * MOUSE_YAW_SENSITIVITY;
    pitch = (pitch - motion.delta.y * MOUSE_PITCH_SENSITIVITY).clamp(PITCH_MIN, PITCH_MAX);

    transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::assign_images;

    fn occupied_grid() -> GalleryGrid {
        // R=1 lattice with every frame occupied
        let mut grid = GalleryGrid::generate(1, 5.0).unwrap();
        assign_images(&mut grid, 18);
        grid
    }

    fn forward_key() -> RoamInput {
        RoamInput {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_input_no_move() {
        let grid = occupied_grid();
        let pos = Vec3::new(2.5, 4.5, 2.5);
        let out = resolve_roam(pos, Vec3::NEG_Z, RoamInput::default(), 5.0, 0.016, &grid, 2.25);
        assert_eq!(out, pos);
    }

    #[test]
    fn test_boundary_clamp_holds() {
        let grid = GalleryGrid::generate(1, 5.0).unwrap(); // empty, bound = 7.5
        let mut pos = Vec3::new(7.4, 4.5, 0.0);
        let heading = Vec3::X;
        for _ in 0..100 {
            pos = resolve_roam(pos, heading, forward_key(), 5.0, 0.1, &grid, 2.25);
        }
        assert!(pos.x <= 7.5);
        assert_eq!(pos.x, 7.5);
    }

    #[test]
    fn test_collision_rejects_full_move() {
        let grid = occupied_grid();
        // Heading straight at the frame at the origin
        let pos = Vec3::new(0.0, 4.5, 3.0);
        let out = resolve_roam(pos, Vec3::NEG_Z, forward_key(), 5.0, 0.5, &grid, 2.25);
        // Full move would land at z=0.5, inside the keep-out sphere
        assert!(!collides(&grid, out, 2.25));
        assert_eq!(out, pos);
    }

    #[test]
    fn test_axis_slide_keeps_free_axis() {
        let grid = occupied_grid();
        // Diagonal approach toward the origin frame: Z entry is blocked but
        // X stays clear, so the camera slides sideways along the frame
        let pos = Vec3::new(1.8, 4.5, 2.4);
        let heading = Vec3::new(-1.0, 0.0, -1.0).normalize();
        let out = resolve_roam(pos, heading, forward_key(), 5.0, 0.2, &grid, 2.25);
        assert!(!collides(&grid, out, 2.25));
        assert!(out.x < pos.x, "x axis should slide: {} -> {}", pos.x, out.x);
        assert_eq!(out.z, pos.z);
    }

    #[test]
    fn test_empty_points_never_collide() {
        let grid = GalleryGrid::generate(1, 5.0).unwrap();
        let pos = Vec3::new(0.0, 4.5, 1.0);
        let out = resolve_roam(pos, Vec3::NEG_Z, forward_key(), 5.0, 0.1, &grid, 2.25);
        assert!(out.z < pos.z);
    }

    #[test]
    fn test_horizontal_heading_zeroes_pitch() {
        let transform =
            Transform::from_xyz(0.0, 4.5, 8.0).looking_at(Vec3::new(0.0, 1.6, 0.0), Vec3::Y);
        let heading = horizontal_heading(&transform).unwrap();
        assert!(heading.y.abs() < 1e-6);
        assert!((heading.length() - 1.0).abs() < 1e-5);
        assert!(heading.z < 0.0);
    }
}
