#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        bounds::{Aabb2, Aabb3, Circle, Sphere},
        frustum::Frustum,
        glint_float,
        linalg,
        linalg::{Vec2, Vec3, Vec4},
        matrix::{Axis, Mat2, Mat3, Mat4},
        plane::Plane,
        ray::{HitInfo2, HitInfo3, Ray2, Ray3},
    },
};
