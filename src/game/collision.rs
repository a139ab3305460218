// Ball vs paddle contact test

use glam::Vec2;
use parry2d::math::{Isometry, Vector};
use parry2d::query;
use parry2d::shape::{Ball, Cuboid};

use crate::core::Rect;

/// Check whether a circle overlaps or touches an axis-aligned rectangle
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let rect_center = rect.center();
    let half = rect.half_extents();

    let circle_pos = Isometry::translation(center.x, center.y);
    let rect_pos = Isometry::translation(rect_center.x, rect_center.y);

    // Ball vs cuboid is always supported, so the error arm never triggers
    query::intersection_test(
        &circle_pos,
        &Ball::new(radius),
        &rect_pos,
        &Cuboid::new(Vector::new(half.x, half.y)),
    )
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Rect {
        Rect::new(Vec2::new(50.0, 415.0), Vec2::new(20.0, 250.0))
    }

    #[test]
    fn test_center_inside_rect() {
        assert!(circle_intersects_rect(Vec2::new(60.0, 500.0), 10.0, &paddle()));
    }

    #[test]
    fn test_overlapping_face() {
        // Right face at x = 70, ball reaches x = 75
        assert!(circle_intersects_rect(Vec2::new(75.0, 500.0), 10.0, &paddle()));
    }

    #[test]
    fn test_clear_of_face() {
        assert!(!circle_intersects_rect(Vec2::new(81.0, 500.0), 10.0, &paddle()));
    }

    #[test]
    fn test_corner_uses_round_distance() {
        // 8px right and 8px above the top-right corner: ~11.3px away
        assert!(!circle_intersects_rect(Vec2::new(78.0, 407.0), 10.0, &paddle()));
        // 6px right and 6px above: ~8.5px away
        assert!(circle_intersects_rect(Vec2::new(76.0, 409.0), 10.0, &paddle()));
    }

    #[test]
    fn test_far_away() {
        assert!(!circle_intersects_rect(Vec2::new(960.0, 540.0), 10.0, &paddle()));
    }
}
