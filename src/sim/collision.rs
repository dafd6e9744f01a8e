//! Axis-aligned rectangle overlap
//!
//! Every entity is a rectangle given by its center and full size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Center + size rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y * 0.5
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }
}

/// Full two-axis overlap: center distance below the half-size sum on both axes
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let delta = (a.center - b.center).abs();
    let reach = a.half_extents() + b.half_extents();
    delta.x < reach.x && delta.y < reach.y
}

/// Vertical-only overlap, for entities already known to share a lane
pub fn rects_overlap_vertical(a: &Rect, b: &Rect) -> bool {
    (a.center.y - b.center.y).abs() < a.half_extents().y + b.half_extents().y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_both_axes() {
        let a = rect(100.0, 100.0, 40.0, 40.0);
        assert!(rects_overlap(&a, &rect(120.0, 110.0, 40.0, 40.0)));
        // Separated horizontally
        assert!(!rects_overlap(&a, &rect(200.0, 100.0, 40.0, 40.0)));
        // Separated vertically
        assert!(!rects_overlap(&a, &rect(100.0, 200.0, 40.0, 40.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(0.0, 0.0, 50.0, 80.0);
        let b = rect(30.0, 50.0, 30.0, 30.0);
        assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(20.0, 0.0, 20.0, 20.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_vertical_overlap_ignores_x() {
        let bullet = rect(0.0, 100.0, 6.0, 16.0);
        let zombie = rect(500.0, 110.0, 40.0, 40.0);
        assert!(rects_overlap_vertical(&bullet, &zombie));
        assert!(!rects_overlap(&bullet, &zombie));

        let far = rect(0.0, 200.0, 40.0, 40.0);
        assert!(!rects_overlap_vertical(&bullet, &far));
    }

    #[test]
    fn test_edges() {
        let r = rect(10.0, 50.0, 4.0, 20.0);
        assert_eq!(r.top(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }
}
