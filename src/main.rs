//! Framewalk - a walkable 3D photo gallery built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;

use framewalk::{
    ActiveFlight, GalleryConfig, GalleryGrid, GalleryNav, ImageCatalog, camera, constants::*,
    grid, navigation, scene, transition,
};

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let manifest_override = args
        .iter()
        .position(|a| a == "--manifest")
        .and_then(|i| args.get(i + 1).cloned());

    let config = GalleryConfig::load_or_default(CONFIG_FILE);
    let manifest_path = manifest_override.unwrap_or_else(|| MANIFEST_FILE.to_string());
    let catalog = ImageCatalog::load_or_empty(&manifest_path);

    // Lattice config errors are fatal; everything downstream needs the grid
    let mut gallery_grid = GalleryGrid::generate(config.grid_radius, config.grid_spacing)
        .expect("gallery config produced an invalid lattice");
    grid::assign_images(&mut gallery_grid, catalog.len());
    info!(
        "Gallery lattice: {} frames, {} hung, {} free",
        gallery_grid.points.len(),
        gallery_grid.occupied_count(),
        gallery_grid.free_count()
    );

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: bevy::window::WindowResolution::new(1600, 900)
                    .with_scale_factor_override(1.0),
                title: "Framewalk".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 350.0,
            ..default()
        })
        .insert_resource(config)
        .insert_resource(catalog)
        .insert_resource(gallery_grid)
        .init_resource::<GalleryNav>()
        .init_resource::<ActiveFlight>()
        .add_systems(Startup, setup)
        // Free-roam input - suppressed while focused or mid-flight
        .add_systems(
            Update,
            (camera::mouse_look, camera::free_roam_movement)
                .chain()
                .run_if(navigation::roaming_active),
        )
        // Navigation triggers first, then the flight steps the pose
        .add_systems(
            Update,
            (
                scene::frame_click_system,
                navigation::keyboard_navigation,
                transition::advance_flight,
            )
                .chain(),
        )
        .run();
}

/// Spawn the camera, lights, floor and every frame on the lattice
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    gallery_grid: Res<GalleryGrid>,
    catalog: Res<ImageCatalog>,
    config: Res<GalleryConfig>,
) {
    // Camera - perspective, starting in the overview looking into the lattice
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, config.hover_height, CAMERA_SPAWN_Z)
            .looking_at(Vec3::new(0.0, config.eye_height, 0.0), Vec3::Y),
    ));

    // Key light with shadows plus a softer fill from the opposite corner
    commands.spawn((
        DirectionalLight {
            illuminance: 4000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 2500.0,
            ..default()
        },
        Transform::from_xyz(-5.0, 10.0, -5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    scene::spawn_gallery(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &gallery_grid,
        &catalog,
        &config,
    );
}
