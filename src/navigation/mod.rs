//! Navigation state - focused image tracking and gallery traversal

use bevy::prelude::*;

use crate::config::GalleryConfig;
use crate::grid::GalleryGrid;
use crate::images::ImageCatalog;
use crate::transition::{self, ActiveFlight};

/// Which image is focused and whether a camera flight is in progress.
/// Single instance for the life of the gallery session.
#[derive(Resource, Debug, Default)]
pub struct GalleryNav {
    /// Focused image index, None in free-roam overview
    pub active_image: Option<usize>,
    /// A flight is in the air; roam input and frame clicks are ignored
    pub transitioning: bool,
    /// Set once a focus flight lands; camera rests at eye height
    pub focus_engaged: bool,
}

/// Run condition: free-roam input is live (no flight, nothing focused)
pub fn roaming_active(nav: Res<GalleryNav>) -> bool {
    !nav.transitioning && nav.active_image.is_none()
}

/// Step to the next image, wrapping; starts at 0 from the overview.
/// May supersede an in-flight transition.
pub fn go_next(
    grid: &GalleryGrid,
    catalog: &ImageCatalog,
    config: &GalleryConfig,
    nav: &mut GalleryNav,
    flights: &mut ActiveFlight,
    camera: &Transform,
) {
    if catalog.is_empty() {
        return;
    }
    let next = match nav.active_image {
        Some(index) => (index + 1) % catalog.len(),
        None => 0,
    };
    focus_image(next, grid, config, nav, flights, camera);
}

/// Step to the previous image, wrapping; starts at 0 from the overview
pub fn go_previous(
    grid: &GalleryGrid,
    catalog: &ImageCatalog,
    config: &GalleryConfig,
    nav: &mut GalleryNav,
    flights: &mut ActiveFlight,
    camera: &Transform,
) {
    if catalog.is_empty() {
        return;
    }
    let previous = match nav.active_image {
        Some(index) => (index + catalog.len() - 1) % catalog.len(),
        None => 0,
    };
    focus_image(previous, grid, config, nav, flights, camera);
}

/// Fly to a specific image. Out-of-range indices are silently ignored.
pub fn jump_to(
    index: usize,
    grid: &GalleryGrid,
    catalog: &ImageCatalog,
    config: &GalleryConfig,
    nav: &mut GalleryNav,
    flights: &mut ActiveFlight,
    camera: &Transform,
) {
    if index >= catalog.len() {
        return;
    }
    focus_image(index, grid, config, nav, flights, camera);
}

fn focus_image(
    index: usize,
    grid: &GalleryGrid,
    config: &GalleryConfig,
    nav: &mut GalleryNav,
    flights: &mut ActiveFlight,
    camera: &Transform,
) {
    // An image the assignment pass dropped has no frame to fly to
    let Some((point_index, side)) = grid.point_for_image(index) else {
        return;
    };
    let from = nav.active_image;
    let grid_distance = from
        .and_then(|previous| grid.grid_distance_between_images(previous, index))
        .unwrap_or(0);

    transition::begin_focus_flight(
        flights,
        camera,
        grid,
        config,
        point_index,
        side,
        grid_distance,
        from.is_some(),
    );
    nav.active_image = Some(index);
    nav.transitioning = true;
}

/// Leave focus mode: fly to a diagonal overview pose in front of the focused
/// frame, looking back at it. No-op when nothing is focused.
pub fn exit_to_overview(
    grid: &GalleryGrid,
    config: &GalleryConfig,
    nav: &mut GalleryNav,
    flights: &mut ActiveFlight,
    camera: &Transform,
) {
    let Some(active) = nav.active_image else {
        return;
    };
    let Some((point_index, _)) = grid.point_for_image(active) else {
        return;
    };

    transition::begin_overview_flight(flights, camera, grid, config, point_index);
    nav.active_image = None;
    nav.transitioning = true;
}

/// Arrow keys step through images while one is focused; Escape returns to
/// the overview. In the overview the arrows belong to roaming instead.
pub fn keyboard_navigation(
    keyboard: Res<ButtonInput<KeyCode>>,
    grid: Res<GalleryGrid>,
    catalog: Res<ImageCatalog>,
    config: Res<GalleryConfig>,
    mut nav: ResMut<GalleryNav>,
    mut flights: ResMut<ActiveFlight>,
    camera: Query<&Transform, With<Camera3d>>,
) {
    if nav.active_image.is_none() {
        return;
    }
    let Ok(camera) = camera.single() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::ArrowRight) {
        go_next(&grid, &catalog, &config, &mut nav, &mut flights, camera);
    } else if keyboard.just_pressed(KeyCode::ArrowLeft) {
        go_previous(&grid, &catalog, &config, &mut nav, &mut flights, camera);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        exit_to_overview(&grid, &config, &mut nav, &mut flights, camera);
    }
}
