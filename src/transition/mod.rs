//! Camera flight animator - Bezier paths, altitude planning, token cancellation

use bevy::prelude::*;

use crate::config::GalleryConfig;
use crate::grid::{FrameSide, GalleryGrid};
use crate::helpers::{ease_in_out_cubic, quadratic_bezier};
use crate::navigation::GalleryNav;

/// Quadratic Bezier flight path through a raised midpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightPath {
    pub start: Vec3,
    pub mid: Vec3,
    pub end: Vec3,
}

impl FlightPath {
    pub fn sample(&self, t: f32) -> Vec3 {
        quadratic_bezier(self.start, self.mid, self.end, t)
    }
}

/// Build the flight path between two camera positions.
///
/// Short focused-to-focused hops stay at eye height; everything else arcs
/// over the frames at hover height, raised by the clearance margin when an
/// occupied frame sits on the straight start-to-end line.
pub fn plan_flight(
    start: Vec3,
    end: Vec3,
    grid: &GalleryGrid,
    config: &GalleryConfig,
    stay_low: bool,
) -> FlightPath {
    let mut altitude = if stay_low {
        config.eye_height
    } else {
        config.hover_height
    };
    if !stay_low && path_obstructed(start, end, grid, config) {
        altitude = altitude.max(config.hover_height + config.clearance_margin);
    }

    FlightPath {
        start,
        mid: Vec3::new(
            (start.x + end.x) / 2.0,
            altitude,
            (start.z + end.z) / 2.0,
        ),
        end,
    }
}

/// Does any occupied frame project onto the open start-end segment within the
/// collision radius? Only interior projections count; frames at or past the
/// endpoints are the ones being flown from and to.
fn path_obstructed(start: Vec3, end: Vec3, grid: &GalleryGrid, config: &GalleryConfig) -> bool {
    let direction = end - start;
    let length = direction.length();
    if length <= f32::EPSILON {
        return false;
    }
    let along = direction / length;

    grid.occupied().any(|point| {
        let frame = point.world_pos(config.eye_height);
        let projection = (frame - start).dot(along);
        projection > 0.0
            && projection < length
            && frame.distance(start + along * projection) < config.collision_radius
    })
}

/// One in-flight camera move
#[derive(Debug, Clone)]
pub struct Flight {
    /// Generation token; only the latest token may write the pose
    pub token: u64,
    pub path: FlightPath,
    pub start_rotation: Quat,
    pub end_rotation: Quat,
    pub elapsed: f32,
    pub duration: f32,
    /// Focus mode engages on arrival (false for exit-to-overview)
    pub engage_focus: bool,
}

impl Flight {
    /// Eased pose at a raw progress in [0, 1]
    pub fn pose_at(&self, progress: f32) -> (Vec3, Quat) {
        let eased = ease_in_out_cubic(progress.clamp(0.0, 1.0));
        (
            self.path.sample(eased),
            self.start_rotation.slerp(self.end_rotation, eased),
        )
    }
}

/// The current flight plus the monotonic cancellation token counter.
/// Starting a new flight supersedes whatever was in the air - the old flight
/// never writes again, with no explicit teardown.
#[derive(Resource, Debug, Default)]
pub struct ActiveFlight {
    pub current: Option<Flight>,
    next_token: u64,
}

impl ActiveFlight {
    /// Issue the next token and put a new flight in the air
    pub fn begin(
        &mut self,
        path: FlightPath,
        start_rotation: Quat,
        end_rotation: Quat,
        duration: f32,
        engage_focus: bool,
    ) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        self.current = Some(Flight {
            token,
            path,
            start_rotation,
            end_rotation,
            elapsed: 0.0,
            duration,
            engage_focus,
        });
        token
    }

    pub fn is_flying(&self) -> bool {
        self.current.is_some()
    }

    pub fn latest_token(&self) -> u64 {
        self.next_token
    }
}

/// Start a flight to a frame face: standoff along the face normal at eye
/// height, looking back at the frame. Unknown point indices are ignored.
pub fn begin_focus_flight(
    flights: &mut ActiveFlight,
    camera: &Transform,
    grid: &GalleryGrid,
    config: &GalleryConfig,
    point_index: usize,
    side: FrameSide,
    grid_distance: i32,
    from_focus: bool,
) {
    let Some(point) = grid.points.get(point_index) else {
        return;
    };
    let frame = point.world_pos(config.eye_height);
    let end = frame + point.side_normal(side) * config.focus_distance;
    let end_rotation = Transform::from_translation(end)
        .looking_at(frame, Vec3::Y)
        .rotation;

    let stay_low =
        from_focus && grid_distance > 0 && grid_distance <= config.stay_low_max_cells;
    let path = plan_flight(camera.translation, end, grid, config, stay_low);
    flights.begin(path, camera.rotation, end_rotation, config.flight_secs, true);
}

/// Start the exit flight: diagonally offset from the focused frame at hover
/// height, still looking back at it, with focus disengaging on arrival.
pub fn begin_overview_flight(
    flights: &mut ActiveFlight,
    camera: &Transform,
    grid: &GalleryGrid,
    config: &GalleryConfig,
    point_index: usize,
) {
    let Some(point) = grid.points.get(point_index) else {
        return;
    };
    let frame = point.world_pos(config.eye_height);
    let facing = Quat::from_rotation_y(point.yaw());
    let diagonal = (facing * Vec3::Z + facing * Vec3::X).normalize() * config.exit_offset;
    let end = Vec3::new(
        frame.x + diagonal.x,
        config.hover_height,
        frame.z + diagonal.z,
    );
    let end_rotation = Transform::from_translation(end)
        .looking_at(frame, Vec3::Y)
        .rotation;

    let path = plan_flight(camera.translation, end, grid, config, false);
    flights.begin(path, camera.rotation, end_rotation, config.flight_secs, false);
}

/// Steps the active flight each frame, writing the camera pose, and settles
/// the navigation flags on arrival.
pub fn advance_flight(
    time: Res<Time>,
    mut flights: ResMut<ActiveFlight>,
    mut nav: ResMut<GalleryNav>,
    mut camera: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    let latest = flights.latest_token();
    let mut finished = false;
    if let Some(flight) = flights.current.as_mut() {
        // A superseded flight must never write the pose
        if flight.token != latest {
            finished = true;
        } else {
            flight.elapsed += time.delta_secs();
            let progress = (flight.elapsed / flight.duration).min(1.0);
            let (position, rotation) = flight.pose_at(progress);
            transform.translation = position;
            transform.rotation = rotation;

            if progress >= 1.0 {
                nav.transitioning = false;
                nav.focus_engaged = flight.engage_focus;
                finished = true;
            }
        }
    }
    if finished {
        flights.current = None;
    }
}
