#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::linalg::Vec3;
use serde::{Deserialize, Serialize};

/// An infinite plane in point-normal form.
///
/// `normal` is expected to be unit length; the constructors that derive it
/// ([`Plane::from_points`], [`Plane::from_coefficients`]) normalize for you,
/// while [`Plane::new`] trusts the caller.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Plane {
        Plane { point, normal }
    }

    /// Builds the plane through three points, anchored at `b`. The normal is
    /// `normalize((a - b) × (c - b))`, so winding determines which side is
    /// positive.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Plane {
        Plane {
            point: b,
            normal: (a - b).cross(c - b).normed(),
        }
    }

    /// Builds the plane from implicit-equation coefficients
    /// `ax + by + cz + d = 0`, normalizing by the normal's length. The anchor
    /// point is the projection of the origin onto the plane.
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Plane {
        let normal = Vec3 { x: a, y: b, z: c };
        let len = normal.len();
        let normal = normal / len;
        Plane {
            point: normal * (-d / len),
            normal,
        }
    }

    /// Signed distance from `point` to the plane: positive on the side the
    /// normal points towards, zero on the plane.
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.point)
    }
}
