//! Gallery scene - floor, frame meshes, and pointer picking

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::GalleryConfig;
use crate::constants::*;
use crate::grid::{FrameSide, GalleryGrid};
use crate::images::{GalleryImage, ImageCatalog};
use crate::navigation::{self, GalleryNav};
use crate::transition::ActiveFlight;

/// Marker for a spawned picture frame, pointing back at its lattice cell
#[derive(Component)]
pub struct PictureFrame {
    pub point_index: usize,
}

/// Marker for bare frames with no images
#[derive(Component)]
pub struct EmptyFrame;

/// Aspect-fit an image into the frame's maximum face size
pub fn face_size(image: &GalleryImage) -> Vec2 {
    let aspect = image.aspect();
    if aspect > 1.0 {
        Vec2::new(FRAME_MAX_IMAGE_SIZE, FRAME_MAX_IMAGE_SIZE / aspect)
    } else {
        Vec2::new(FRAME_MAX_IMAGE_SIZE * aspect, FRAME_MAX_IMAGE_SIZE)
    }
}

/// Spawn the floor and one frame per mount point
pub fn spawn_gallery(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    grid: &GalleryGrid,
    catalog: &ImageCatalog,
    config: &GalleryConfig,
) {
    let floor_extent = 2.0 * grid.roam_bound() + grid.spacing;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(floor_extent, floor_extent))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: FLOOR_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    let border_material = materials.add(StandardMaterial {
        base_color: FRAME_BORDER_COLOR,
        perceptual_roughness: 0.3,
        metallic: 0.1,
        ..default()
    });
    let mat_material = materials.add(StandardMaterial {
        base_color: MAT_COLOR,
        emissive: LinearRgba::WHITE * 0.4,
        perceptual_roughness: 0.7,
        ..default()
    });

    for (point_index, point) in grid.points.iter().enumerate() {
        let transform = Transform::from_translation(point.world_pos(config.eye_height))
            .with_rotation(Quat::from_rotation_y(point.yaw()));

        if point.is_occupied() {
            spawn_picture_frame(
                commands,
                meshes,
                materials,
                asset_server,
                catalog,
                point_index,
                point.front_image,
                point.back_image,
                transform,
                &border_material,
                &mat_material,
            );
        } else {
            spawn_empty_frame(commands, meshes, transform, &border_material, &mat_material);
        }
    }
}

/// A frame with an image on one or both sides: dark border box, white mat,
/// and a textured face quad per hung side
#[allow(clippy::too_many_arguments)]
fn spawn_picture_frame(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    catalog: &ImageCatalog,
    point_index: usize,
    front_image: Option<usize>,
    back_image: Option<usize>,
    transform: Transform,
    border_material: &Handle<StandardMaterial>,
    mat_material: &Handle<StandardMaterial>,
) {
    // The border box wraps the larger face
    let sides = [front_image, back_image];
    let outer = sides
        .iter()
        .flatten()
        .filter_map(|&image| catalog.get(image))
        .map(face_size)
        .fold(Vec2::ZERO, Vec2::max)
        + Vec2::splat(2.0 * (MAT_BORDER + FRAME_BORDER));

    let parent = commands
        .spawn((
            transform,
            Visibility::default(),
            PictureFrame { point_index },
        ))
        .id();

    commands.entity(parent).with_children(|builder| {
        builder.spawn((
            Mesh3d(meshes.add(Cuboid::new(outer.x, outer.y, FRAME_DEPTH))),
            MeshMaterial3d(border_material.clone()),
            Transform::IDENTITY,
        ));

        for (side_index, image) in sides.into_iter().enumerate() {
            let Some(image) = image.and_then(|index| catalog.get(index)) else {
                continue;
            };
            let size = face_size(image);
            let flip = if side_index == 0 {
                Quat::IDENTITY
            } else {
                Quat::from_rotation_y(std::f32::consts::PI)
            };

            // White mat behind the image
            builder.spawn((
                Mesh3d(meshes.add(Cuboid::new(
                    size.x + 2.0 * MAT_BORDER,
                    size.y + 2.0 * MAT_BORDER,
                    0.02,
                ))),
                MeshMaterial3d(mat_material.clone()),
                Transform::from_rotation(flip)
                    .with_translation(flip * Vec3::new(0.0, 0.0, FRAME_DEPTH / 2.0 + 0.01)),
            ));

            // The photograph itself
            builder.spawn((
                Mesh3d(meshes.add(Rectangle::new(size.x, size.y))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color_texture: Some(asset_server.load(image.source.clone())),
                    perceptual_roughness: 0.6,
                    ..default()
                })),
                Transform::from_rotation(flip)
                    .with_translation(flip * Vec3::new(0.0, 0.0, FRAME_DEPTH / 2.0 + 0.03)),
            ));
        }
    });
}

/// A bare frame: border box and white mats on both sides
fn spawn_empty_frame(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    transform: Transform,
    border_material: &Handle<StandardMaterial>,
    mat_material: &Handle<StandardMaterial>,
) {
    let outer = EMPTY_FRAME_IMAGE_SIZE + 2.0 * (MAT_BORDER + FRAME_BORDER);
    let mat = EMPTY_FRAME_IMAGE_SIZE + 2.0 * MAT_BORDER;

    let parent = commands
        .spawn((transform, Visibility::default(), EmptyFrame))
        .id();
    commands.entity(parent).with_children(|builder| {
        builder.spawn((
            Mesh3d(meshes.add(Cuboid::new(outer, outer, FRAME_DEPTH))),
            MeshMaterial3d(border_material.clone()),
            Transform::IDENTITY,
        ));
        for z in [FRAME_DEPTH / 2.0 + 0.01, -(FRAME_DEPTH / 2.0 + 0.01)] {
            builder.spawn((
                Mesh3d(meshes.add(Cuboid::new(mat, mat, 0.02))),
                MeshMaterial3d(mat_material.clone()),
                Transform::from_xyz(0.0, 0.0, z),
            ));
        }
    });
}

/// Ray-pick against occupied frame faces. Returns the nearest hit as
/// (point index, side); a side with no image hung is not clickable.
pub fn pick_frame_face(
    origin: Vec3,
    direction: Vec3,
    grid: &GalleryGrid,
    catalog: &ImageCatalog,
    config: &GalleryConfig,
) -> Option<(usize, FrameSide)> {
    let mut best: Option<(f32, usize, FrameSide)> = None;

    for (point_index, point) in grid.points.iter().enumerate() {
        if !point.is_occupied() {
            continue;
        }
        let normal = point.side_normal(FrameSide::Front);
        let denom = direction.dot(normal);
        if denom.abs() < 1e-6 {
            continue;
        }
        let center = point.world_pos(config.eye_height);
        let t = (center - origin).dot(normal) / denom;
        if t <= 0.0 {
            continue;
        }

        // Running against the front normal means we see the front face
        let side = if denom < 0.0 {
            FrameSide::Front
        } else {
            FrameSide::Back
        };
        let Some(image) = point.image_on(side).and_then(|index| catalog.get(index)) else {
            continue;
        };

        let hit = origin + direction * t;
        let half = face_size(image) / 2.0;
        let right = Quat::from_rotation_y(point.yaw()) * Vec3::X;
        let u = (hit - center).dot(right);
        let v = hit.y - center.y;
        if u.abs() > half.x || v.abs() > half.y {
            continue;
        }

        if best.is_none_or(|(best_t, _, _)| t < best_t) {
            best = Some((t, point_index, side));
        }
    }

    best.map(|(_, point_index, side)| (point_index, side))
}

/// Left-click selects the frame face under the cursor and flies to its image.
/// Clicks are ignored while a flight is in the air.
pub fn frame_click_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform, &Transform), With<Camera3d>>,
    grid: Res<GalleryGrid>,
    catalog: Res<ImageCatalog>,
    config: Res<GalleryConfig>,
    mut nav: ResMut<GalleryNav>,
    mut flights: ResMut<ActiveFlight>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || nav.transitioning {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_global, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_global, cursor) else {
        return;
    };

    let Some((point_index, side)) =
        pick_frame_face(ray.origin, *ray.direction, &grid, &catalog, &config)
    else {
        return;
    };
    let Some(image_index) = grid.points[point_index].image_on(side) else {
        return;
    };

    navigation::jump_to(
        image_index,
        &grid,
        &catalog,
        &config,
        &mut nav,
        &mut flights,
        camera_transform,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::GalleryImage;

    fn image(id: &str, width: u32, height: u32) -> GalleryImage {
        GalleryImage {
            id: id.to_string(),
            source: format!("images/{id}.png"),
            width,
            height,
            title: None,
        }
    }

    /// One double-sided frame at the origin facing +Z
    fn fixture() -> (GalleryGrid, ImageCatalog, GalleryConfig) {
        let mut grid = GalleryGrid::generate(1, 5.0).unwrap();
        for point in &mut grid.points {
            if point.grid_x == 0 && point.grid_z == 0 {
                point.facing = 0;
                point.front_image = Some(0);
                point.back_image = Some(1);
            }
        }
        let catalog = ImageCatalog {
            images: vec![image("front", 1600, 1067), image("back", 1067, 1600)],
        };
        (grid, catalog, GalleryConfig::default())
    }

    #[test]
    fn test_face_size_aspect_fit() {
        let landscape = face_size(&image("l", 1600, 1067));
        assert_eq!(landscape.x, FRAME_MAX_IMAGE_SIZE);
        assert!(landscape.y < FRAME_MAX_IMAGE_SIZE);

        let portrait = face_size(&image("p", 1067, 1600));
        assert_eq!(portrait.y, FRAME_MAX_IMAGE_SIZE);
        assert!(portrait.x < FRAME_MAX_IMAGE_SIZE);
    }

    #[test]
    fn test_pick_front_face() {
        let (grid, catalog, config) = fixture();
        // Looking at the frame center from the front (+Z side)
        let origin = Vec3::new(0.0, config.eye_height, 6.0);
        let hit = pick_frame_face(origin, Vec3::NEG_Z, &grid, &catalog, &config);
        let (point_index, side) = hit.unwrap();
        assert_eq!(side, FrameSide::Front);
        assert_eq!(grid.points[point_index].front_image, Some(0));
    }

    #[test]
    fn test_pick_back_face() {
        let (grid, catalog, config) = fixture();
        let origin = Vec3::new(0.0, config.eye_height, -6.0);
        let hit = pick_frame_face(origin, Vec3::Z, &grid, &catalog, &config);
        let (_, side) = hit.unwrap();
        assert_eq!(side, FrameSide::Back);
    }

    #[test]
    fn test_pick_misses_outside_face_bounds() {
        let (grid, catalog, config) = fixture();
        // Ray passes well above the frame
        let origin = Vec3::new(0.0, config.eye_height + 3.0, 6.0);
        assert!(pick_frame_face(origin, Vec3::NEG_Z, &grid, &catalog, &config).is_none());
        // And wide of the narrow portrait back face
        let origin = Vec3::new(1.2, config.eye_height, -6.0);
        assert!(pick_frame_face(origin, Vec3::Z, &grid, &catalog, &config).is_none());
    }

    #[test]
    fn test_pick_ignores_bare_side() {
        let (mut grid, catalog, config) = fixture();
        for point in &mut grid.points {
            point.back_image = None;
        }
        let origin = Vec3::new(0.0, config.eye_height, -6.0);
        assert!(pick_frame_face(origin, Vec3::Z, &grid, &catalog, &config).is_none());
    }

    #[test]
    fn test_pick_ignores_rays_pointing_away() {
        let (grid, catalog, config) = fixture();
        let origin = Vec3::new(0.0, config.eye_height, 6.0);
        assert!(pick_frame_face(origin, Vec3::Z, &grid, &catalog, &config).is_none());
    }

    #[test]
    fn test_pick_nearest_of_stacked_frames() {
        let (mut grid, _, config) = fixture();
        // Hang a second frame directly behind the first, also facing +Z
        for point in &mut grid.points {
            if point.grid_x == 0 && point.grid_z == -1 {
                point.facing = 0;
                point.front_image = Some(2);
            }
        }
        let catalog = ImageCatalog {
            images: vec![
                image("front", 1600, 1067),
                image("back", 1067, 1600),
                image("behind", 1600, 1067),
            ],
        };
        let origin = Vec3::new(0.0, config.eye_height, 6.0);
        let (point_index, _) =
            pick_frame_face(origin, Vec3::NEG_Z, &grid, &catalog, &config).unwrap();
        assert_eq!(grid.points[point_index].front_image, Some(0));
    }
}
