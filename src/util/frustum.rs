#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::bounds::{Aabb3, Sphere};
use crate::util::linalg::{Vec3, Vec4};
use crate::util::matrix::Mat4;
use crate::util::plane::Plane;

/// A view frustum as six inward-facing planes extracted from a
/// view-projection matrix.
///
/// Extraction follows Gribb-Hartmann for the column-vector convention used
/// by [`Mat4`]: each clip plane is the w row of the matrix plus or minus one
/// of the x/y/z rows, normalized. Points on the positive side of all six
/// planes are inside.
#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub struct Frustum {
    view_projection: Mat4,
    planes: [Plane; 6],
}

impl Frustum {
    pub fn new(view_projection: Mat4) -> Frustum {
        Frustum {
            view_projection,
            planes: Self::calculate_planes(&view_projection),
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    /// The six planes in order: near, far, left, right, bottom, top.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Replaces the view-projection matrix and recomputes all six planes.
    pub fn set_view_projection(&mut self, view_projection: Mat4) {
        self.view_projection = view_projection;
        self.planes = Self::calculate_planes(&view_projection);
    }

    fn calculate_planes(m: &Mat4) -> [Plane; 6] {
        let sum = |row: Vec4, sign: f32, axis_row: Vec4| {
            let coeffs = row + axis_row * sign;
            Plane::from_coefficients(coeffs.x, coeffs.y, coeffs.z, coeffs.w)
        };
        let w = m.rows[3];
        [
            sum(w, 1.0, m.rows[2]),  // near
            sum(w, -1.0, m.rows[2]), // far
            sum(w, 1.0, m.rows[0]),  // left
            sum(w, -1.0, m.rows[0]), // right
            sum(w, 1.0, m.rows[1]),  // bottom
            sum(w, -1.0, m.rows[1]), // top
        ]
    }

    /// True when the point is on or inside all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.distance(point) >= 0.0)
    }

    /// True when the sphere is inside or intersects the frustum: its centre
    /// may be up to one radius outside any plane.
    pub fn contains_sphere(&self, sphere: &Sphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance(sphere.centre) >= -sphere.radius)
    }

    /// True when the box is inside or intersects the frustum. Per plane, only
    /// the corner furthest along the plane normal needs testing: if that
    /// corner is outside, the whole box is.
    pub fn contains_aabb(&self, aabb: &Aabb3) -> bool {
        self.planes.iter().all(|plane| {
            let pick = |min: f32, max: f32, n: f32| if n >= 0.0 { max } else { min };
            let corner = Vec3 {
                x: pick(aabb.min.x, aabb.max.x, plane.normal.x),
                y: pick(aabb.min.y, aabb.max.y, plane.normal.y),
                z: pick(aabb.min.z, aabb.max.z, plane.normal.z),
            };
            plane.distance(corner) >= 0.0
        })
    }
}
