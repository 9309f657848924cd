#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::bounds::{Aabb2, Aabb3, Circle, Sphere};
use crate::util::glint_float::sign_zero;
use crate::util::linalg::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Result of a 2D ray cast. `distance` is measured in world units along the
/// ray's unit direction, and starts at `+inf` so that a miss always compares
/// further than any hit.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitInfo2 {
    pub hit: bool,
    pub distance: f32,
    pub hit_point: Vec2,
    pub hit_normal: Vec2,
}

impl Default for HitInfo2 {
    fn default() -> Self {
        Self {
            hit: false,
            distance: f32::INFINITY,
            hit_point: Vec2::zero(),
            hit_normal: Vec2::zero(),
        }
    }
}

impl HitInfo2 {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Result of a 3D ray cast; see [`HitInfo2`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitInfo3 {
    pub hit: bool,
    pub distance: f32,
    pub hit_point: Vec3,
    pub hit_normal: Vec3,
}

impl Default for HitInfo3 {
    fn default() -> Self {
        Self {
            hit: false,
            distance: f32::INFINITY,
            hit_point: Vec3::zero(),
            hit_normal: Vec3::zero(),
        }
    }
}

impl HitInfo3 {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A 2D ray: origin plus direction, with the unit direction cached.
///
/// The cache is computed in the constructor body after `direction` is
/// assigned, so it can never observe an uninitialized field. All intersection
/// distances are measured along the unit direction, making them true world
/// distances regardless of the magnitude of `direction`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub struct Ray2 {
    origin: Vec2,
    direction: Vec2,
    unit_direction: Vec2,
}

impl Ray2 {
    pub fn new(origin: Vec2, direction: Vec2) -> Ray2 {
        let mut ray = Ray2 {
            origin,
            direction,
            unit_direction: Vec2::zero(),
        };
        ray.unit_direction = ray.direction.normed();
        ray
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn unit_direction(&self) -> Vec2 {
        self.unit_direction
    }

    /// The point `t` world units along the ray from its origin.
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.unit_direction * t
    }

    /// Casts against a circle, reporting the nearest intersection strictly
    /// closer than `max_distance`.
    ///
    /// Uses the projection of the centre offset onto the unit direction: a
    /// circle whose centre lies behind the origin is rejected outright, as is
    /// one whose perpendicular distance from the ray exceeds its radius.
    /// When the origin is inside the circle the reported hit is the exit
    /// point. On a hit, `hit_normal` is the outward radial at the hit point.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint::core::prelude::*;
    ///
    /// let ray = Ray2::new(Vec2 { x: -2.0, y: 0.0 }, Vec2::unit_x());
    /// let info = ray.intersect_circle(&Circle::new(Vec2::zero(), 1.0), f32::INFINITY);
    /// assert!(info.hit);
    /// assert_eq!(info.distance, 1.0);
    /// ```
    pub fn intersect_circle(&self, circle: &Circle, max_distance: f32) -> HitInfo2 {
        let mut info = HitInfo2::default();
        let to_centre = circle.centre - self.origin;
        let d = to_centre.dot(self.unit_direction);
        if d < 0.0 {
            return info;
        }
        let perp_squared = to_centre.len_squared() - d * d;
        let radius_squared = circle.radius * circle.radius;
        if perp_squared > radius_squared {
            return info;
        }
        let offset = (radius_squared - perp_squared).sqrt();
        let t = [d - offset, d + offset]
            .into_iter()
            .filter(|&t| t >= 0.0 && t < max_distance)
            .fold(None, |best: Option<f32>, t| {
                Some(best.map_or(t, |b| b.min(t)))
            });
        let Some(t) = t else {
            return info;
        };
        info.hit = true;
        info.distance = t;
        info.hit_point = self.point_at(t);
        info.hit_normal = (info.hit_point - circle.centre).normed();
        info
    }

    /// Casts against a box using the slab method on the unit direction.
    ///
    /// Axis-parallel rays rely on IEEE semantics: dividing by a zero
    /// component produces infinite slab bounds that drop out of the min/max
    /// comparisons. A box entirely behind the origin, or one the ray passes
    /// beside, is a miss with `distance` recording the far slab parameter.
    /// A ray starting inside the box hits at its exit point, with the normal
    /// facing out of the exit face.
    pub fn intersect_aabb(&self, aabb: &Aabb2, max_distance: f32) -> HitInfo2 {
        let mut info = HitInfo2::default();
        // Screens out the NaN unit direction of a zero-length ray; subnormal
        // components are fine, so this is the lenient IEEE finiteness test.
        if !(self.unit_direction.x.is_finite() && self.unit_direction.y.is_finite()) {
            return info;
        }
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;
        let mut entry_axis = 0;
        let mut exit_axis = 0;
        for axis in 0..2 {
            let inv = 1.0 / self.unit_direction[axis];
            let mut t1 = (aabb.min[axis] - self.origin[axis]) * inv;
            let mut t2 = (aabb.max[axis] - self.origin[axis]) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            if t1 > tmin {
                tmin = t1;
                entry_axis = axis;
            }
            if t2 < tmax {
                tmax = t2;
                exit_axis = axis;
            }
        }
        if tmax < 0.0 || tmin > tmax {
            info.distance = tmax;
            return info;
        }
        let (t, axis, facing) = if tmin < 0.0 {
            (tmax, exit_axis, 1.0)
        } else {
            (tmin, entry_axis, -1.0)
        };
        if t >= max_distance {
            return info;
        }
        info.hit = true;
        info.distance = t;
        info.hit_point = self.point_at(t);
        let mut normal = Vec2::zero();
        normal[axis] = facing * sign_zero(self.unit_direction[axis]);
        info.hit_normal = normal;
        info
    }
}

/// A 3D ray; see [`Ray2`] for the caching and distance conventions.
#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub struct Ray3 {
    origin: Vec3,
    direction: Vec3,
    unit_direction: Vec3,
}

impl Ray3 {
    pub fn new(origin: Vec3, direction: Vec3) -> Ray3 {
        let mut ray = Ray3 {
            origin,
            direction,
            unit_direction: Vec3::zero(),
        };
        ray.unit_direction = ray.direction.normed();
        ray
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn unit_direction(&self) -> Vec3 {
        self.unit_direction
    }

    /// The point `t` world units along the ray from its origin.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.unit_direction * t
    }

    /// Casts against a sphere; the algorithm mirrors
    /// [`Ray2::intersect_circle`].
    pub fn intersect_sphere(&self, sphere: &Sphere, max_distance: f32) -> HitInfo3 {
        let mut info = HitInfo3::default();
        let to_centre = sphere.centre - self.origin;
        let d = to_centre.dot(self.unit_direction);
        if d < 0.0 {
            return info;
        }
        let perp_squared = to_centre.len_squared() - d * d;
        let radius_squared = sphere.radius * sphere.radius;
        if perp_squared > radius_squared {
            return info;
        }
        let offset = (radius_squared - perp_squared).sqrt();
        let t = [d - offset, d + offset]
            .into_iter()
            .filter(|&t| t >= 0.0 && t < max_distance)
            .fold(None, |best: Option<f32>, t| {
                Some(best.map_or(t, |b| b.min(t)))
            });
        let Some(t) = t else {
            return info;
        };
        info.hit = true;
        info.distance = t;
        info.hit_point = self.point_at(t);
        info.hit_normal = (info.hit_point - sphere.centre).normed();
        info
    }

    /// Casts against a box; the algorithm mirrors [`Ray2::intersect_aabb`].
    pub fn intersect_aabb(&self, aabb: &Aabb3, max_distance: f32) -> HitInfo3 {
        let mut info = HitInfo3::default();
        if !(self.unit_direction.x.is_finite()
            && self.unit_direction.y.is_finite()
            && self.unit_direction.z.is_finite())
        {
            return info;
        }
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;
        let mut entry_axis = 0;
        let mut exit_axis = 0;
        for axis in 0..3 {
            let inv = 1.0 / self.unit_direction[axis];
            let mut t1 = (aabb.min[axis] - self.origin[axis]) * inv;
            let mut t2 = (aabb.max[axis] - self.origin[axis]) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            if t1 > tmin {
                tmin = t1;
                entry_axis = axis;
            }
            if t2 < tmax {
                tmax = t2;
                exit_axis = axis;
            }
        }
        if tmax < 0.0 || tmin > tmax {
            info.distance = tmax;
            return info;
        }
        let (t, axis, facing) = if tmin < 0.0 {
            (tmax, exit_axis, 1.0)
        } else {
            (tmin, entry_axis, -1.0)
        };
        if t >= max_distance {
            return info;
        }
        info.hit = true;
        info.distance = t;
        info.hit_point = self.point_at(t);
        let mut normal = Vec3::zero();
        normal[axis] = facing * sign_zero(self.unit_direction[axis]);
        info.hit_normal = normal;
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::SQRT_2;

    #[test]
    fn unit_direction_cached_on_construction() {
        let ray = Ray2::new(Vec2::zero(), Vec2 { x: 3.0, y: 4.0 });
        assert_eq!(ray.direction(), Vec2 { x: 3.0, y: 4.0 });
        assert_eq!(ray.unit_direction(), Vec2 { x: 0.6, y: 0.8 });
        assert_eq!(ray.point_at(5.0), Vec2 { x: 3.0, y: 4.0 });
    }

    #[test]
    fn circle_head_on_hit() {
        let ray = Ray2::new(Vec2 { x: -2.0, y: 0.0 }, Vec2::unit_x());
        let info = ray.intersect_circle(&Circle::new(Vec2::zero(), 1.0), f32::INFINITY);
        assert!(info.hit);
        assert_eq!(info.distance, 1.0);
        assert_eq!(info.hit_point, Vec2 { x: -1.0, y: 0.0 });
        assert_eq!(info.hit_normal, Vec2 { x: -1.0, y: 0.0 });
    }

    #[test]
    fn circle_near_miss_with_non_unit_direction() {
        let ray = Ray2::new(Vec2 { x: -1.0, y: -2.5 }, Vec2::one());
        let info = ray.intersect_circle(&Circle::new(Vec2::zero(), 1.0), f32::INFINITY);
        assert!(!info.hit);
        assert_eq!(info.distance, f32::INFINITY);
    }

    #[test]
    fn circle_behind_origin_misses() {
        let ray = Ray2::new(Vec2 { x: 2.0, y: 0.0 }, Vec2::unit_x());
        let info = ray.intersect_circle(&Circle::new(Vec2::zero(), 1.0), f32::INFINITY);
        assert!(!info.hit);
    }

    #[test]
    fn circle_origin_inside_hits_exit_point() {
        let ray = Ray2::new(Vec2::zero(), Vec2::unit_x());
        let info = ray.intersect_circle(&Circle::new(Vec2::zero(), 1.0), f32::INFINITY);
        assert!(info.hit);
        assert_eq!(info.distance, 1.0);
        assert_eq!(info.hit_point, Vec2 { x: 1.0, y: 0.0 });
        assert_eq!(info.hit_normal, Vec2 { x: 1.0, y: 0.0 });
    }

    #[test]
    fn circle_max_distance_cut_off() {
        let ray = Ray2::new(Vec2 { x: -5.0, y: 0.0 }, Vec2::unit_x());
        let circle = Circle::new(Vec2::zero(), 1.0);
        assert!(!ray.intersect_circle(&circle, 2.0).hit);
        assert!(ray.intersect_circle(&circle, 4.5).hit);
    }

    #[test]
    fn circle_max_distance_is_exclusive() {
        // The hit lies at exactly t = 4.0, which a cut-off of 4.0 excludes.
        let ray = Ray2::new(Vec2 { x: -5.0, y: 0.0 }, Vec2::unit_x());
        let circle = Circle::new(Vec2::zero(), 1.0);
        let info = ray.intersect_circle(&circle, 4.0);
        assert!(!info.hit);
        assert_eq!(info.distance, f32::INFINITY);
        assert!(ray.intersect_circle(&circle, 4.0 + EPSILON).hit);
    }

    #[test]
    fn circle_distance_is_metric_for_diagonal_rays() {
        let ray = Ray2::new(Vec2 { x: -2.0, y: -2.0 }, Vec2::one());
        let info = ray.intersect_circle(&Circle::new(Vec2::zero(), 1.0), f32::INFINITY);
        assert!(info.hit);
        assert!((info.distance - (2.0 * SQRT_2 - 1.0)).abs() < EPSILON);
        assert!((info.hit_point.len() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn aabb_diagonal_hit_from_inside() {
        let ray = Ray2::new(Vec2 { x: -0.1, y: -0.1 }, Vec2::one());
        let aabb = Aabb2::new(Vec2::splat(-0.5), Vec2::splat(0.5));
        let info = ray.intersect_aabb(&aabb, f32::INFINITY);
        assert!(info.hit);
        assert!((info.distance - 0.6 * SQRT_2).abs() < EPSILON);
        assert_eq!(info.hit_point, Vec2::splat(0.5));
    }

    #[test]
    fn aabb_entry_hit_and_normal() {
        let ray = Ray2::new(Vec2 { x: -5.0, y: 0.0 }, Vec2::unit_x());
        let aabb = Aabb2::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        let info = ray.intersect_aabb(&aabb, f32::INFINITY);
        assert!(info.hit);
        assert_eq!(info.distance, 4.0);
        assert_eq!(info.hit_point, Vec2 { x: -1.0, y: 0.0 });
        assert_eq!(info.hit_normal, Vec2 { x: -1.0, y: 0.0 });
    }

    #[test]
    fn aabb_origin_inside_hits_exit_face() {
        let ray = Ray2::new(Vec2::zero(), Vec2::unit_x());
        let aabb = Aabb2::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        let info = ray.intersect_aabb(&aabb, f32::INFINITY);
        assert!(info.hit);
        assert_eq!(info.distance, 1.0);
        assert_eq!(info.hit_point, Vec2 { x: 1.0, y: 0.0 });
        assert_eq!(info.hit_normal, Vec2 { x: 1.0, y: 0.0 });
    }

    #[test]
    fn aabb_miss_beside_records_far_slab() {
        let ray = Ray2::new(Vec2 { x: -2.0, y: -2.0 }, Vec2::unit_x());
        let aabb = Aabb2::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        let info = ray.intersect_aabb(&aabb, f32::INFINITY);
        assert!(!info.hit);
        assert_eq!(info.distance, 3.0);
    }

    #[test]
    fn aabb_behind_origin_misses() {
        let ray = Ray2::new(Vec2 { x: 5.0, y: 0.0 }, Vec2::unit_x());
        let aabb = Aabb2::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        let info = ray.intersect_aabb(&aabb, f32::INFINITY);
        assert!(!info.hit);
        assert_eq!(info.distance, -4.0);
    }

    #[test]
    fn aabb_max_distance_cut_off() {
        let ray = Ray2::new(Vec2 { x: -5.0, y: 0.0 }, Vec2::unit_x());
        let aabb = Aabb2::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        assert!(!ray.intersect_aabb(&aabb, 3.0).hit);
        // The entry point lies at exactly t = 4.0; the cut-off is exclusive.
        assert!(!ray.intersect_aabb(&aabb, 4.0).hit);
        assert!(ray.intersect_aabb(&aabb, 4.5).hit);
    }

    #[test]
    fn subnormal_direction_component_does_not_trip_the_guard() {
        let ray = Ray2::new(Vec2 { x: -5.0, y: 0.0 }, Vec2 { x: 1.0, y: 1e-40 });
        let aabb = Aabb2::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        let info = ray.intersect_aabb(&aabb, f32::INFINITY);
        assert!(info.hit);
        assert!((info.distance - 4.0).abs() < EPSILON);
    }

    #[test]
    fn zero_direction_ray_misses_everything() {
        let ray = Ray2::new(Vec2::zero(), Vec2::zero());
        let aabb = Aabb2::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        assert!(!ray.intersect_aabb(&aabb, f32::INFINITY).hit);
        assert!(!ray
            .intersect_circle(&Circle::new(Vec2::zero(), 1.0), f32::INFINITY)
            .hit);
    }

    #[test]
    fn hit_info_reset() {
        let ray = Ray2::new(Vec2 { x: -2.0, y: 0.0 }, Vec2::unit_x());
        let mut info = ray.intersect_circle(&Circle::new(Vec2::zero(), 1.0), f32::INFINITY);
        assert!(info.hit);
        info.reset();
        assert_eq!(info, HitInfo2::default());
        assert_eq!(info.distance, f32::INFINITY);
    }

    #[test]
    fn sphere_head_on_hit() {
        let ray = Ray3::new(
            Vec3 { x: 0.0, y: 0.0, z: -5.0 },
            Vec3::unit_z(),
        );
        let info = ray.intersect_sphere(&Sphere::new(Vec3::zero(), 1.0), f32::INFINITY);
        assert!(info.hit);
        assert_eq!(info.distance, 4.0);
        assert_eq!(info.hit_point, Vec3 { x: 0.0, y: 0.0, z: -1.0 });
        assert_eq!(info.hit_normal, Vec3 { x: 0.0, y: 0.0, z: -1.0 });
    }

    #[test]
    fn sphere_max_distance_is_exclusive() {
        let ray = Ray3::new(
            Vec3 { x: 0.0, y: 0.0, z: -5.0 },
            Vec3::unit_z(),
        );
        let sphere = Sphere::new(Vec3::zero(), 1.0);
        assert!(!ray.intersect_sphere(&sphere, 4.0).hit);
        assert!(ray.intersect_sphere(&sphere, 4.0 + EPSILON).hit);
    }

    #[test]
    fn sphere_grazing_miss() {
        let ray = Ray3::new(
            Vec3 { x: -5.0, y: 1.5, z: 0.0 },
            Vec3::unit_x(),
        );
        let info = ray.intersect_sphere(&Sphere::new(Vec3::zero(), 1.0), f32::INFINITY);
        assert!(!info.hit);
    }

    #[test]
    fn ray3_aabb_entry_normal() {
        let ray = Ray3::new(
            Vec3 { x: -5.0, y: 0.2, z: 0.3 },
            Vec3::unit_x(),
        );
        let aabb = Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let info = ray.intersect_aabb(&aabb, f32::INFINITY);
        assert!(info.hit);
        assert_eq!(info.distance, 4.0);
        assert_eq!(info.hit_normal, Vec3 { x: -1.0, y: 0.0, z: 0.0 });
        assert_eq!(info.hit_point, Vec3 { x: -1.0, y: 0.2, z: 0.3 });
    }

    #[test]
    fn ray3_aabb_inside_exit() {
        let ray = Ray3::new(Vec3::zero(), -Vec3::unit_y());
        let aabb = Aabb3::new(Vec3::splat(-2.0), Vec3::splat(2.0));
        let info = ray.intersect_aabb(&aabb, f32::INFINITY);
        assert!(info.hit);
        assert_eq!(info.distance, 2.0);
        assert_eq!(info.hit_point, Vec3 { x: 0.0, y: -2.0, z: 0.0 });
        assert_eq!(info.hit_normal, Vec3 { x: 0.0, y: -1.0, z: 0.0 });
    }
}
