#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::linalg::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// An axis-aligned bounding box in 2D, stored as min/max corners.
///
/// All overlap and containment tests are boundary-inclusive: boxes sharing
/// only an edge overlap, and a box contains itself.
///
/// # Examples
///
/// ```
/// use glint::core::prelude::*;
///
/// let outer = Aabb2::new(Vec2::zero(), Vec2::one());
/// let inner = Aabb2::new(Vec2::splat(0.1), Vec2::splat(0.9));
/// assert!(outer.overlaps(&inner));
/// assert!(outer.contains(&inner));
/// assert!(!inner.contains(&outer));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

/// An axis-aligned bounding box in 3D, stored as min/max corners.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Aabb3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb2 {
    pub fn new(min: Vec2, max: Vec2) -> Aabb2 {
        Aabb2 { min, max }
    }

    pub fn centre(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Full width and height of the box.
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn half_widths(&self) -> Vec2 {
        self.extent() / 2.0
    }

    /// The four corners, min-x before max-x, min-y before max-y within each x.
    pub fn corners(&self) -> Vec<Vec2> {
        [self.min.x, self.max.x]
            .into_iter()
            .cartesian_product([self.min.y, self.max.y])
            .map(|(x, y)| Vec2 { x, y })
            .collect_vec()
    }

    pub fn overlaps(&self, other: &Aabb2) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn contains(&self, other: &Aabb2) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl Aabb3 {
    pub fn new(min: Vec3, max: Vec3) -> Aabb3 {
        Aabb3 { min, max }
    }

    pub fn centre(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Full width, height, and depth of the box.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn half_widths(&self) -> Vec3 {
        self.extent() / 2.0
    }

    /// The eight corners, in x-major then y-major then z order.
    pub fn corners(&self) -> Vec<Vec3> {
        [self.min.x, self.max.x]
            .into_iter()
            .cartesian_product([self.min.y, self.max.y])
            .cartesian_product([self.min.z, self.max.z])
            .map(|((x, y), z)| Vec3 { x, y, z })
            .collect_vec()
    }

    pub fn overlaps(&self, other: &Aabb3) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains(&self, other: &Aabb3) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
            && self.min.z <= other.min.z
            && self.max.z >= other.max.z
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// A circle: centre plus radius.
///
/// Overlap against another circle compares centre distance with the radius
/// sum (boundary-inclusive); containment requires the other circle to fit
/// entirely within this one's radius.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Circle {
    pub centre: Vec2,
    pub radius: f32,
}

/// A sphere: centre plus radius. Tests mirror [`Circle`] in 3D.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Sphere {
    pub centre: Vec3,
    pub radius: f32,
}

impl Circle {
    pub fn new(centre: Vec2, radius: f32) -> Circle {
        Circle { centre, radius }
    }

    pub fn area(&self) -> f32 {
        PI * self.radius * self.radius
    }

    pub fn overlaps(&self, other: &Circle) -> bool {
        self.centre.dist(other.centre) <= self.radius + other.radius
    }

    pub fn contains(&self, other: &Circle) -> bool {
        self.radius >= other.radius
            && self.centre.dist(other.centre) <= self.radius - other.radius
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.centre.dist_squared(point) <= self.radius * self.radius
    }

    /// Overlap test against a box via the closest point on the box to the
    /// circle's centre.
    pub fn overlaps_aabb(&self, aabb: &Aabb2) -> bool {
        let closest = self.centre.clamped(aabb.min, aabb.max);
        self.centre.dist_squared(closest) <= self.radius * self.radius
    }

    /// True when every corner of the box lies within the circle.
    pub fn contains_aabb(&self, aabb: &Aabb2) -> bool {
        aabb.corners().into_iter().all(|corner| self.contains_point(corner))
    }
}

impl Sphere {
    pub fn new(centre: Vec3, radius: f32) -> Sphere {
        Sphere { centre, radius }
    }

    /// Surface area, `4πr²`.
    pub fn area(&self) -> f32 {
        4.0 * PI * self.radius * self.radius
    }

    /// Volume, `4/3·πr³`.
    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * PI * self.radius * self.radius * self.radius
    }

    pub fn overlaps(&self, other: &Sphere) -> bool {
        self.centre.dist(other.centre) <= self.radius + other.radius
    }

    pub fn contains(&self, other: &Sphere) -> bool {
        self.radius >= other.radius
            && self.centre.dist(other.centre) <= self.radius - other.radius
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.centre.dist_squared(point) <= self.radius * self.radius
    }

    /// Overlap test against a box via the closest point on the box to the
    /// sphere's centre.
    pub fn overlaps_aabb(&self, aabb: &Aabb3) -> bool {
        let closest = self.centre.clamped(aabb.min, aabb.max);
        self.centre.dist_squared(closest) <= self.radius * self.radius
    }

    /// True when every corner of the box lies within the sphere.
    pub fn contains_aabb(&self, aabb: &Aabb3) -> bool {
        aabb.corners().into_iter().all(|corner| self.contains_point(corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb2_overlap_and_containment() {
        let outer = Aabb2::new(Vec2::zero(), Vec2::one());
        let inner = Aabb2::new(Vec2::splat(0.1), Vec2::splat(0.9));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn aabb2_contains_itself() {
        let a = Aabb2::new(Vec2 { x: -1.0, y: -2.0 }, Vec2 { x: 3.0, y: 4.0 });
        assert!(a.contains(&a));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn aabb2_touching_edges_overlap() {
        let a = Aabb2::new(Vec2::zero(), Vec2::one());
        let b = Aabb2::new(Vec2 { x: 1.0, y: 0.0 }, Vec2 { x: 2.0, y: 1.0 });
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        let c = Aabb2::new(Vec2 { x: 1.5, y: 0.0 }, Vec2 { x: 2.5, y: 1.0 });
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn aabb2_geometry_queries() {
        let a = Aabb2::new(Vec2::zero(), Vec2 { x: 4.0, y: 2.0 });
        assert_eq!(a.centre(), Vec2 { x: 2.0, y: 1.0 });
        assert_eq!(a.extent(), Vec2 { x: 4.0, y: 2.0 });
        assert_eq!(a.half_widths(), Vec2 { x: 2.0, y: 1.0 });
        let corners = a.corners();
        assert_eq!(corners.len(), 4);
        assert!(corners.contains(&Vec2::zero()));
        assert!(corners.contains(&Vec2 { x: 4.0, y: 2.0 }));
        assert!(corners.contains(&Vec2 { x: 0.0, y: 2.0 }));
        assert!(corners.contains(&Vec2 { x: 4.0, y: 0.0 }));
    }

    #[test]
    fn aabb3_overlap_and_containment() {
        let outer = Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let inner = Aabb3::new(Vec3::splat(-0.5), Vec3::splat(0.5));
        assert!(outer.overlaps(&inner));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));

        let disjoint = Aabb3::new(Vec3::splat(2.0), Vec3::splat(3.0));
        assert!(!outer.overlaps(&disjoint));
        // Separated along z only.
        let above = Aabb3::new(
            Vec3 { x: -0.5, y: -0.5, z: 1.5 },
            Vec3 { x: 0.5, y: 0.5, z: 2.5 },
        );
        assert!(!outer.overlaps(&above));
    }

    #[test]
    fn aabb3_corners() {
        let a = Aabb3::new(Vec3::zero(), Vec3::one());
        let corners = a.corners();
        assert_eq!(corners.len(), 8);
        assert!(corners.contains(&Vec3::zero()));
        assert!(corners.contains(&Vec3::one()));
        assert!(corners.contains(&Vec3 { x: 1.0, y: 0.0, z: 1.0 }));
    }

    #[test]
    fn circle_overlap() {
        let a = Circle::new(Vec2::zero(), 1.0);
        let b = Circle::new(Vec2 { x: 1.5, y: 0.0 }, 1.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Externally tangent circles touch.
        let c = Circle::new(Vec2 { x: 2.0, y: 0.0 }, 1.0);
        assert!(a.overlaps(&c));
        let d = Circle::new(Vec2 { x: 2.5, y: 0.0 }, 1.0);
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn circle_containment() {
        let big = Circle::new(Vec2::zero(), 2.0);
        let small = Circle::new(Vec2 { x: 0.5, y: 0.0 }, 1.0);
        assert!(big.contains(&small));
        assert!(!small.contains(&big));
        assert!(big.contains(&big));
        // Overlapping but poking out.
        let poking = Circle::new(Vec2 { x: 1.5, y: 0.0 }, 1.0);
        assert!(big.overlaps(&poking));
        assert!(!big.contains(&poking));
    }

    #[test]
    fn circle_vs_aabb() {
        let circle = Circle::new(Vec2::zero(), 1.0);
        assert!(circle.overlaps_aabb(&Aabb2::new(Vec2::splat(0.5), Vec2::splat(2.0))));
        assert!(!circle.overlaps_aabb(&Aabb2::new(Vec2::splat(1.0), Vec2::splat(2.0))));
        assert!(circle.contains_aabb(&Aabb2::new(Vec2::splat(-0.5), Vec2::splat(0.5))));
        assert!(!circle.contains_aabb(&Aabb2::new(Vec2::splat(-0.9), Vec2::splat(0.9))));
    }

    #[test]
    fn circle_area() {
        let c = Circle::new(Vec2::zero(), 2.0);
        assert!((c.area() - 4.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn sphere_overlap_and_containment() {
        let a = Sphere::new(Vec3::zero(), 2.0);
        let b = Sphere::new(Vec3 { x: 3.0, y: 0.0, z: 0.0 }, 1.5);
        assert!(a.overlaps(&b));
        assert!(!a.contains(&b));
        let inner = Sphere::new(Vec3 { x: 0.5, y: 0.0, z: 0.0 }, 1.0);
        assert!(a.contains(&inner));
        assert!(a.contains(&a));
    }

    #[test]
    fn sphere_vs_aabb() {
        let sphere = Sphere::new(Vec3::zero(), 1.0);
        assert!(sphere.overlaps_aabb(&Aabb3::new(Vec3::splat(0.5), Vec3::splat(2.0))));
        assert!(!sphere.overlaps_aabb(&Aabb3::new(Vec3::splat(1.0), Vec3::splat(2.0))));
        assert!(sphere.contains_aabb(&Aabb3::new(Vec3::splat(-0.5), Vec3::splat(0.5))));
        assert!(!sphere.contains_aabb(&Aabb3::new(Vec3::splat(-0.9), Vec3::splat(0.9))));
    }

    #[test]
    fn sphere_area_and_volume() {
        let s = Sphere::new(Vec3::zero(), 1.0);
        assert!((s.area() - 4.0 * PI).abs() < EPSILON);
        assert!((s.volume() - 4.0 / 3.0 * PI).abs() < EPSILON);
    }
}
