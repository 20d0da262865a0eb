//! Axis-aligned bounding boxes
//!
//! Screen convention: +x right, +y down. A box is defined by its
//! min (top-left) and max (bottom-right) corners.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box centred on `center` extending `half` on each side
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Inclusive point containment
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Shrink by `inset` on every side.
    ///
    /// The result may be inverted (min > max) when the box is smaller than
    /// twice the inset; `clamp_point` handles that case.
    pub fn shrink(&self, inset: Vec2) -> Self {
        Self {
            min: self.min + inset,
            max: self.max - inset,
        }
    }

    /// Clamp a point into the box. On an inverted axis the point collapses
    /// to that axis' midpoint.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        let center = self.center();
        let clamp_axis = |v: f32, lo: f32, hi: f32, mid: f32| {
            if lo > hi { mid } else { v.clamp(lo, hi) }
        };
        Vec2::new(
            clamp_axis(point.x, self.min.x, self.max.x, center.x),
            clamp_axis(point.y, self.min.y, self.max.y, center.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_and_touching() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(15.0, 5.0), Vec2::splat(10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Sharing an edge is not an overlap
        let c = Aabb::from_center(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_shrink_and_clamp() {
        let field = Aabb::new(Vec2::new(50.0, 150.0), Vec2::new(750.0, 460.0));
        let inner = field.shrink(Vec2::splat(15.0));
        assert_eq!(inner.min, Vec2::new(65.0, 165.0));
        assert_eq!(inner.max, Vec2::new(735.0, 445.0));

        assert_eq!(inner.clamp_point(Vec2::new(0.0, 1000.0)), Vec2::new(65.0, 445.0));
        assert!(inner.contains(inner.clamp_point(Vec2::new(400.0, 300.0))));
    }

    #[test]
    fn test_clamp_inverted_axis_uses_midpoint() {
        let tiny = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 100.0)).shrink(Vec2::splat(15.0));
        let p = tiny.clamp_point(Vec2::new(3.0, 3.0));
        assert_eq!(p, Vec2::new(10.0, 15.0));
    }
}
