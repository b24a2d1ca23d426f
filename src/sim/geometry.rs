//! Axis-aligned bounding boxes
//!
//! Sprites carry an inset rectangle tighter than the full image. Collision
//! boxes are that inset translated by the entity's position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision rectangle relative to a sprite's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsetBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl InsetBox {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Scale the box around its centre, snapping every edge to whole pixels
    pub fn shrink(&self, factor: f32) -> Self {
        let width = self.width * factor;
        let height = self.height * factor;
        Self {
            left: (self.left + (self.width - width) / 2.0).round(),
            top: (self.top + (self.height - height) / 2.0).round(),
            width: width.round(),
            height: height.round(),
        }
    }

    /// Place the box at a sprite position
    pub fn at(&self, pos: Vec2) -> Aabb {
        Aabb::new(
            pos.x + self.left,
            pos.y + self.top,
            pos.x + self.left + self.width,
            pos.y + self.top + self.height,
        )
    }
}

/// World-space bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        debug_assert!(
            left <= right && top <= bottom,
            "inverted bounding box: ({left}, {top}) -> ({right}, {bottom})"
        );
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Edge contact counts as overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlap(self, other)
    }
}

/// True unless the boxes are disjoint on either axis
#[inline]
pub fn overlap(a: &Aabb, b: &Aabb) -> bool {
    !(a.bottom < b.top || a.top > b.bottom || a.left > b.right || a.right < b.left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, x + w, y + h))
    }

    #[test]
    fn test_inset_translates_with_position() {
        let inset = InsetBox::new(1.0, 77.0, 98.0, 66.0);
        let aabb = inset.at(Vec2::new(100.0, 10.0));
        assert_eq!(aabb, Aabb::new(101.0, 87.0, 199.0, 153.0));
    }

    #[test]
    fn test_shrink_is_centred_and_rounded() {
        // Player art inset: 67x76 at (17, 63)
        let inset = InsetBox::new(17.0, 63.0, 67.0, 76.0);
        let small = inset.shrink(0.8);
        // 67 * 0.8 = 53.6 -> 54, left = 17 + 6.7 = 23.7 -> 24
        assert_eq!(small.width, 54.0);
        assert_eq!(small.left, 24.0);
        // 76 * 0.8 = 60.8 -> 61, top = 63 + 7.6 = 70.6 -> 71
        assert_eq!(small.height, 61.0);
        assert_eq!(small.top, 71.0);
    }

    #[test]
    fn test_shrink_identity() {
        let inset = InsetBox::new(1.0, 77.0, 98.0, 66.0);
        assert_eq!(inset.shrink(1.0), inset);
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 20.0, 10.0);
        assert!(overlap(&a, &b));
        let c = Aabb::new(10.5, 0.0, 20.0, 10.0);
        assert!(!overlap(&a, &c));
    }

    #[test]
    fn test_vertical_separation() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(0.0, 11.0, 10.0, 20.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    proptest! {
        #[test]
        fn prop_self_overlap(a in arb_box()) {
            prop_assert!(overlap(&a, &a));
        }

        #[test]
        fn prop_overlap_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(overlap(&a, &b), overlap(&b, &a));
        }

        #[test]
        fn prop_disjoint_on_x_never_overlaps(a in arb_box(), gap in 0.01f32..100.0, w in 0.0f32..100.0) {
            let b = Aabb::new(a.right + gap, a.top, a.right + gap + w, a.bottom);
            prop_assert!(!overlap(&a, &b));
        }
    }
}
