//! Collision footprints and overlap tests
//!
//! Everything that can touch carries a `Bounds`: an axis-aligned box for the
//! runner and the fires, a circle for coins. All comparisons are strict, so
//! footprints that merely touch do not collide.

use glam::Vec2;

/// Collision footprint shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Box,
    Circle,
}

/// Position-plus-size footprint, anchored at the top-left corner.
///
/// For `Shape::Circle` the width is the diameter and the center sits at
/// `pos + width/2` on both axes; any extra sprite height hangs below the
/// circle and never collides.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
    pub shape: Shape,
}

impl Bounds {
    /// Circle center; only meaningful for `Shape::Circle`
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size.x / 2.0)
    }

    /// Circle radius; only meaningful for `Shape::Circle`
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }
}

/// Symmetric overlap test over every shape pairing
///
/// Exactly one implementation exists per unordered pair; a Box-vs-Circle
/// query runs the Circle-vs-Box test with the arguments swapped.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    match (a.shape, b.shape) {
        (Shape::Box, Shape::Box) => box_box(a, b),
        (Shape::Circle, Shape::Circle) => circle_circle(a, b),
        (Shape::Circle, Shape::Box) => circle_box(a, b),
        (Shape::Box, Shape::Circle) => circle_box(b, a),
    }
}

/// Interval overlap on both axes, open at the boundary
fn box_box(a: &Bounds, b: &Bounds) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && b.pos.x < a.pos.x + a.size.x
        && a.pos.y < b.pos.y + b.size.y
        && b.pos.y < a.pos.y + a.size.y
}

/// Center distance strictly under the radius sum
fn circle_circle(a: &Bounds, b: &Bounds) -> bool {
    let r_sum = a.radius() + b.radius();
    a.center().distance_squared(b.center()) < r_sum * r_sum
}

/// Rounded-rectangle test: the circle overlaps the box when its center lies
/// in the box expanded by r along one axis, or within r of a corner.
fn circle_box(c: &Bounds, b: &Bounds) -> bool {
    let center = c.center();
    let r = c.radius();
    let lo = b.pos;
    let hi = b.pos + b.size;

    // Expanded along x only: circle near the left or right face
    let in_horizontal =
        center.x > lo.x - r && center.x < hi.x + r && center.y > lo.y && center.y < hi.y;
    // Expanded along y only: circle near the top or bottom face
    let in_vertical =
        center.y > lo.y - r && center.y < hi.y + r && center.x > lo.x && center.x < hi.x;

    let near_corner = [lo, Vec2::new(hi.x, lo.y), Vec2::new(lo.x, hi.y), hi]
        .into_iter()
        .any(|corner| center.distance_squared(corner) < r * r);

    in_horizontal || in_vertical || near_corner
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Bounds {
        Bounds {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            shape: Shape::Box,
        }
    }

    fn circle(x: f32, y: f32, diameter: f32) -> Bounds {
        Bounds {
            pos: Vec2::new(x, y),
            size: Vec2::splat(diameter),
            shape: Shape::Circle,
        }
    }

    #[test]
    fn test_box_box_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_box_box_touching_edges_do_not_collide() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        // Shares the x = 10 edge exactly
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        // Shares only the corner at (10, 10)
        let c = boxed(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_box_box_disjoint() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(25.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_circle_circle_boundary_is_open() {
        // Radii 15 + 15; centers exactly 30 apart
        let a = circle(0.0, 0.0, 30.0);
        let b = circle(30.0, 0.0, 30.0);
        assert!(!overlaps(&a, &b));
        // A hair closer collides
        let c = circle(29.9, 0.0, 30.0);
        assert!(overlaps(&a, &c));
    }

    #[test]
    fn test_circle_center_inside_box() {
        let b = boxed(100.0, 100.0, 50.0, 50.0);
        // Center at (125, 125), well inside
        let c = circle(110.0, 110.0, 30.0);
        assert!(overlaps(&c, &b));
    }

    #[test]
    fn test_circle_near_box_face() {
        let b = boxed(100.0, 100.0, 50.0, 50.0);
        // Center at (95, 125): 5 left of the box, radius 15
        let c = circle(80.0, 110.0, 30.0);
        assert!(overlaps(&c, &b));
    }

    #[test]
    fn test_circle_near_box_corner() {
        let b = boxed(100.0, 100.0, 50.0, 50.0);
        // Center at (92, 92): 8√2 ≈ 11.3 from the (100, 100) corner, radius 15
        let c = circle(77.0, 77.0, 30.0);
        assert!(overlaps(&c, &b));
        // Center at (85, 85): 15√2 ≈ 21.2 away, outside both slabs and radius
        let d = circle(70.0, 70.0, 30.0);
        assert!(!overlaps(&d, &b));
    }

    #[test]
    fn test_circle_far_from_box() {
        let b = boxed(100.0, 100.0, 50.0, 50.0);
        let c = circle(0.0, 0.0, 30.0);
        assert!(!overlaps(&c, &b));
    }

    #[test]
    fn test_degenerate_zero_size_never_collides() {
        let a = boxed(50.0, 50.0, 0.0, 0.0);
        let b = boxed(50.0, 50.0, 0.0, 0.0);
        assert!(!overlaps(&a, &b));
        let c = circle(50.0, 50.0, 0.0);
        let d = circle(50.0, 50.0, 0.0);
        assert!(!overlaps(&c, &d));
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_box_circle_dispatch_swaps_roles() {
        let b = boxed(100.0, 100.0, 50.0, 50.0);
        let c = circle(110.0, 110.0, 30.0);
        assert_eq!(overlaps(&b, &c), overlaps(&c, &b));
        assert!(overlaps(&b, &c));
    }

    fn any_bounds() -> impl Strategy<Value = Bounds> {
        (
            -400.0f32..400.0,
            -400.0f32..400.0,
            0.0f32..200.0,
            0.0f32..200.0,
            any::<bool>(),
        )
            .prop_map(|(x, y, w, h, is_circle)| Bounds {
                pos: Vec2::new(x, y),
                size: Vec2::new(w, h),
                shape: if is_circle { Shape::Circle } else { Shape::Box },
            })
    }

    proptest! {
        #[test]
        fn prop_overlaps_is_symmetric(a in any_bounds(), b in any_bounds()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_disjoint_x_boxes_never_collide(
            ax in -400.0f32..400.0,
            aw in 0.0f32..200.0,
            ay in -400.0f32..400.0,
            by in -400.0f32..400.0,
            gap in 0.001f32..100.0,
            h in 0.0f32..200.0,
        ) {
            let a = boxed(ax, ay, aw, h);
            let b = boxed(ax + aw + gap, by, aw, h);
            prop_assert!(!overlaps(&a, &b));
        }

        #[test]
        fn prop_center_inside_box_collides(
            bx in -400.0f32..400.0,
            by in -400.0f32..400.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
            fx in 0.01f32..0.99,
            fy in 0.01f32..0.99,
            diameter in 0.0f32..100.0,
        ) {
            let b = boxed(bx, by, w, h);
            let center = Vec2::new(bx + fx * w, by + fy * h);
            let c = Bounds {
                pos: center - Vec2::splat(diameter / 2.0),
                size: Vec2::splat(diameter),
                shape: Shape::Circle,
            };
            prop_assert!(overlaps(&c, &b));
        }
    }
}
