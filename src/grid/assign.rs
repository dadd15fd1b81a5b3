//! Image assignment - deterministic distribution of images across the lattice

use super::{GalleryGrid, SHUFFLE_SEED, coord_hash};

/// Hang images on mount points, two per point (front then back), consuming
/// the catalog strictly in order.
///
/// Points are visited in a deterministically shuffled order (coordinate hash
/// with its own seed) so the occupied frames don't form an obvious row
/// pattern, while consecutive images still land on the same frame - the
/// catalog is pre-sorted into same-orientation pairs upstream. Excess images
/// are dropped; leftover points stay empty. Re-running on the same lattice
/// and count reproduces the identical assignment.
pub fn assign_images(grid: &mut GalleryGrid, image_count: usize) {
    for point in &mut grid.points {
        point.front_image = None;
        point.back_image = None;
    }

    let mut order: Vec<usize> = (0..grid.points.len()).collect();
    order.sort_by_key(|&index| {
        let point = &grid.points[index];
        (
            coord_hash(point.grid_x, point.grid_z, SHUFFLE_SEED),
            point.grid_x,
            point.grid_z,
        )
    });

    let mut next_image = 0;
    for &index in &order {
        if next_image >= image_count {
            break;
        }
        let point = &mut grid.points[index];
        point.front_image = Some(next_image);
        next_image += 1;
        if next_image < image_count {
            point.back_image = Some(next_image);
            next_image += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FrameSide;
    use std::collections::HashSet;

    #[test]
    fn test_assigns_min_of_images_and_capacity() {
        // More capacity than images
        let mut grid = GalleryGrid::generate(3, 5.0).unwrap();
        assign_images(&mut grid, 10);
        let assigned: Vec<usize> = grid
            .points
            .iter()
            .flat_map(|p| p.front_image.into_iter().chain(p.back_image))
            .collect();
        assert_eq!(assigned.len(), 10);

        // More images than capacity: 9 points hold at most 18
        let mut grid = GalleryGrid::generate(1, 5.0).unwrap();
        assign_images(&mut grid, 100);
        let assigned: Vec<usize> = grid
            .points
            .iter()
            .flat_map(|p| p.front_image.into_iter().chain(p.back_image))
            .collect();
        assert_eq!(assigned.len(), 18);
    }

    #[test]
    fn test_no_image_assigned_twice() {
        let mut grid = GalleryGrid::generate(3, 5.0).unwrap();
        assign_images(&mut grid, 40);
        let assigned: Vec<usize> = grid
            .points
            .iter()
            .flat_map(|p| p.front_image.into_iter().chain(p.back_image))
            .collect();
        let distinct: HashSet<usize> = assigned.iter().copied().collect();
        assert_eq!(distinct.len(), assigned.len());
    }

    #[test]
    fn test_front_back_drawn_consecutively() {
        let mut grid = GalleryGrid::generate(2, 5.0).unwrap();
        assign_images(&mut grid, 20);
        for point in grid.occupied() {
            let front = point.front_image.unwrap();
            if let Some(back) = point.back_image {
                assert_eq!(back, front + 1);
            }
        }
    }

    #[test]
    fn test_assignment_is_idempotent() {
        let mut a = GalleryGrid::generate(3, 5.0).unwrap();
        assign_images(&mut a, 30);
        let mut b = a.clone();
        assign_images(&mut b, 30);
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn test_four_images_on_nine_points() {
        // R=1: 9 points, 4 images -> two full frames, seven empty
        let mut grid = GalleryGrid::generate(1, 5.0).unwrap();
        assign_images(&mut grid, 4);
        assert_eq!(grid.occupied_count(), 2);
        assert_eq!(grid.free_count(), 7);
        for point in grid.occupied() {
            assert!(point.front_image.is_some());
            assert!(point.back_image.is_some());
        }
    }

    #[test]
    fn test_odd_count_leaves_single_sided_frame() {
        let mut grid = GalleryGrid::generate(1, 5.0).unwrap();
        assign_images(&mut grid, 3);
        assert_eq!(grid.occupied_count(), 2);
        let single: Vec<_> = grid.occupied().filter(|p| p.back_image.is_none()).collect();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].front_image, Some(2));
    }

    #[test]
    fn test_point_lookup_roundtrip() {
        let mut grid = GalleryGrid::generate(2, 5.0).unwrap();
        assign_images(&mut grid, 12);
        for image in 0..12 {
            let (index, side) = grid.point_for_image(image).unwrap();
            assert_eq!(grid.points[index].image_on(side), Some(image));
        }
        assert!(grid.point_for_image(12).is_none());
    }

    #[test]
    fn test_grid_distance_between_images() {
        let mut grid = GalleryGrid::generate(2, 5.0).unwrap();
        assign_images(&mut grid, 8);
        // Front and back of one frame are zero cells apart
        let (point_index, _) = grid.point_for_image(0).unwrap();
        if grid.points[point_index].back_image == Some(1) {
            assert_eq!(grid.grid_distance_between_images(0, 1), Some(0));
        }
        // Distance is symmetric
        assert_eq!(
            grid.grid_distance_between_images(0, 6),
            grid.grid_distance_between_images(6, 0)
        );
        assert_eq!(grid.grid_distance_between_images(0, 99), None);
    }

    #[test]
    fn test_zero_images_leaves_lattice_empty() {
        let mut grid = GalleryGrid::generate(3, 5.0).unwrap();
        assign_images(&mut grid, 0);
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.free_count(), 49);
    }

    #[test]
    fn test_reassignment_clears_previous_pass() {
        let mut grid = GalleryGrid::generate(1, 5.0).unwrap();
        assign_images(&mut grid, 18);
        assign_images(&mut grid, 2);
        assert_eq!(grid.occupied_count(), 1);
        let point = grid.occupied().next().unwrap();
        assert_eq!(point.image_on(FrameSide::Front), Some(0));
        assert_eq!(point.image_on(FrameSide::Back), Some(1));
    }
}
