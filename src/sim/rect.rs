//! Axis-aligned rectangle geometry
//!
//! Scene coordinates: x grows rightward, y grows upward. A rectangle is
//! stored by its minimum corner plus extent; entity frames are derived from
//! center-anchored positions via [`Rect::centered`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, origin at the minimum corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict-overlap intersection test.
    ///
    /// Open-interval convention: rectangles that merely share an edge do
    /// not intersect. The same convention is used for every pair tested in
    /// the game.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Shrink by per-side margins. Degenerate insets clamp to a zero-size
    /// rectangle at the frame center rather than inverting.
    pub fn inset(&self, left: f32, right: f32, bottom: f32, top: f32) -> Rect {
        let w = (self.w - left - right).max(0.0);
        let h = (self.h - bottom - top).max(0.0);
        let x = if w > 0.0 { self.x + left } else { self.center().x };
        let y = if h > 0.0 { self.y + bottom } else { self.center().y };
        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(10.0, 10.0, 40.0, 40.0);
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Rect::new(10.0, 10.0, 40.0, 40.0);
        let b = Rect::new(100.0, 100.0, 30.0, 30.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_shared_edge_does_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_centered() {
        let r = Rect::centered(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.min_x(), 40.0);
        assert_eq!(r.max_x(), 60.0);
        assert_eq!(r.min_y(), 45.0);
        assert_eq!(r.max_y(), 55.0);
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_inset_asymmetric() {
        let r = Rect::new(0.0, 0.0, 60.0, 90.0).inset(5.0, 5.0, 40.0, 10.0);
        assert_eq!(r.min_x(), 5.0);
        assert_eq!(r.max_x(), 55.0);
        assert_eq!(r.min_y(), 40.0);
        assert_eq!(r.max_y(), 80.0);
    }

    #[test]
    fn test_inset_degenerate_clamps() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(20.0, 20.0, 20.0, 20.0);
        assert_eq!(r.w, 0.0);
        assert_eq!(r.h, 0.0);
        assert_eq!(r.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(5.0, 5.0)));
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(10.1, 5.0)));
    }
}
