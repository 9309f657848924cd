#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::glint_float;
use crate::util::glint_float::GlintFloat;
use crate::util::matrix::Mat2;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector representation using 32-bit floating point coordinates.
///
/// [`Vec2`] provides the usual vector operations: addition, subtraction,
/// scaling, normalisation, dot and cross products, interpolation, and rotation
/// by an angle.
///
/// # Examples
///
/// ```
/// use glint::core::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality and ordering
/// Two vectors are considered equal if their components differ by less than
/// [`EPSILON`](crate::core::config::EPSILON). This handles floating point
/// imprecision while still ensuring reflexivity and transitivity in practice.
///
/// Since floating point values don't have a natural total ordering due to
/// `NaN` values, the [`Ord`] implementation creates a deterministic ordering
/// by comparing `x` first and falling back to
/// [`total_cmp`](f32::total_cmp) where [`partial_cmp`](f32::partial_cmp)
/// fails. This ordering has no geometric meaning; it exists so vectors can be
/// kept in ordered collections.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}
impl Eq for Vec2 {}

impl PartialOrd<Self> for Vec2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vec2 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if (self.x - other.x).abs() < EPSILON {
            return self.y.partial_cmp(&other.y).unwrap_or_else(|| {
                warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                self.y.total_cmp(&other.y)
            });
        }
        if let Some(o) = self.x.partial_cmp(&other.x) {
            o
        } else {
            warn!("Vec2: partial_cmp() failed for x: {} vs. {}", self, other);
            match self.x.total_cmp(&other.x) {
                Ordering::Equal => self.y.partial_cmp(&other.y).unwrap_or_else(|| {
                    warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                    self.y.total_cmp(&other.y)
                }),
                o => o,
            }
        }
    }
}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Vec2 {
    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Returns the unit vector along the positive x-axis.
    #[must_use]
    pub fn unit_x() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns the unit vector along the positive y-axis.
    #[must_use]
    pub fn unit_y() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }

    /// Creates a new vector with both components set to the given value.
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths, to avoid
    /// the square root.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector.
    ///
    /// A zero-length input divides by zero magnitude and yields NaN
    /// components per IEEE 754; a shape with a zero-length direction is
    /// itself a malformed input, so the division is deliberately not
    /// special-cased. Negative zero components are mapped to positive zero.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        let rv = *self / self.len();
        Vec2 {
            x: glint_float::force_positive_zero(rv.x),
            y: glint_float::force_positive_zero(rv.y),
        }
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Returns a new vector with each component clamped to the corresponding
    /// `[min, max]` interval. Callers must guarantee `min[i] <= max[i]`.
    #[must_use]
    pub fn clamped(&self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }

    /// Returns a new vector rotated anticlockwise by the given angle in
    /// radians.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint::core::prelude::*;
    /// let vec = Vec2::unit_x();
    /// let rotated = vec.rotated(std::f32::consts::FRAC_PI_2); // 90 degrees
    /// assert_eq!(rotated, Vec2::unit_y());
    /// ```
    #[must_use]
    pub fn rotated(&self, radians: f32) -> Vec2 {
        Mat2::rotation(radians) * *self
    }

    /// Reflects the vector about a normal vector.
    ///
    /// # Parameters
    ///
    /// * `normal` - The normal vector to reflect about. Must be already
    ///   normalised.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint::core::prelude::*;
    /// let vec = Vec2 { x: 1.0, y: 1.0 };
    /// let reflected = vec.reflect(Vec2::unit_y());
    /// assert_eq!(reflected, Vec2 { x: 1.0, y: -1.0 });
    /// ```
    #[must_use]
    pub fn reflect(&self, normal: Vec2) -> Vec2 {
        *self - 2.0 * self.dot(normal) * normal
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.dot(v2), 23.0); // 2*4 + 3*5
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product of two vectors.
    ///
    /// The result is the 3D bivector with only its z component set: its
    /// magnitude is the signed area of the parallelogram formed by the two
    /// vectors, positive if `other` is anticlockwise from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 0.0 };
    /// let v2 = Vec2 { x: 0.0, y: 3.0 };
    /// assert_eq!(v1.cross(v2), Vec3 { x: 0.0, y: 0.0, z: 6.0 });
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the angle in radians between two vectors.
    ///
    /// The result is always in the range [0, π]. The cosine argument is
    /// clamped to [-1, 1] before `acos`, since floating-point rounding can
    /// push a mathematically valid dot product slightly outside that range.
    #[must_use]
    pub fn angle_radians(&self, other: Vec2) -> f32 {
        self.normed().dot(other.normed()).clamp(-1.0, 1.0).acos()
    }

    /// Projects this vector onto the given axis.
    #[must_use]
    pub fn project(&self, axis: Vec2) -> Vec2 {
        self.dot(axis.normed()) * axis.normed()
    }

    /// Computes the Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint::core::prelude::*;
    /// let p1 = Vec2 { x: 0.0, y: 0.0 };
    /// let p2 = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(p1.dist(p2), 5.0);
    /// ```
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f32 {
        (other - *self).len()
    }

    /// Computes the squared Euclidean distance between two points.
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> f32 {
        (other - *self).len_squared()
    }

    /// Linearly interpolates between this vector and another vector.
    ///
    /// `t` is clamped to [0, 1]; `t = 0.0` returns this vector and `t = 1.0`
    /// returns `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint::core::prelude::*;
    /// let v1 = Vec2 { x: 0.0, y: 0.0 };
    /// let v2 = Vec2 { x: 10.0, y: 20.0 };
    /// assert_eq!(v1.lerp(v2, 0.5), Vec2 { x: 5.0, y: 10.0 });
    /// ```
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        Vec2 {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
        }
    }

    /// Spherically interpolates between this vector and another vector.
    ///
    /// Interpolates along the arc between the two directions at constant
    /// angular velocity, preserving magnitude for same-length inputs. Falls
    /// back to [`lerp`](Vec2::lerp) when the angle between the vectors is too
    /// small for the spherical formula to be stable.
    #[must_use]
    pub fn slerp(&self, to: Vec2, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let theta = self.angle_radians(to);
        if theta < EPSILON {
            return self.lerp(to, t);
        }
        let sin_theta = theta.sin();
        (*self * ((1.0 - t) * theta).sin() + to * (t * theta).sin()) / sin_theta
    }

    /// Compares two vectors based on their squared length, falling back to
    /// [`total_cmp`](f32::total_cmp) if either length is NaN.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec2) -> Ordering {
        let self_len = self.len_squared();
        let other_len = other.len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {})", self.x, self.y)
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2: index out of range: {index}"),
        }
    }
}
impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2: index out of range: {index}"),
        }
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 3D vector representation using 32-bit floating point coordinates.
///
/// Equality is tolerant to [`EPSILON`](crate::core::config::EPSILON) in each
/// component, as for [`Vec2`].
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON
                && (self.y - other.y).abs() < EPSILON
                && (self.z - other.z).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y && self.z == other.z
        }
    }
}

impl Vec3 {
    #[must_use]
    pub fn zero() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
    #[must_use]
    pub fn one() -> Vec3 {
        Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
    #[must_use]
    pub fn unit_x() -> Vec3 {
        Vec3 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }
    #[must_use]
    pub fn unit_y() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }
    #[must_use]
    pub fn unit_z() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }
    #[must_use]
    pub fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector. Zero-length inputs yield NaN components per IEEE 754, as for
    /// [`Vec2::normed`].
    #[must_use]
    pub fn normed(&self) -> Vec3 {
        let rv = *self / self.len();
        Vec3 {
            x: glint_float::force_positive_zero(rv.x),
            y: glint_float::force_positive_zero(rv.y),
            z: glint_float::force_positive_zero(rv.z),
        }
    }

    #[must_use]
    pub fn abs(&self) -> Vec3 {
        Vec3 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Returns a new vector with each component clamped to the corresponding
    /// `[min, max]` interval. Callers must guarantee `min[i] <= max[i]`.
    #[must_use]
    pub fn clamped(&self, min: Vec3, max: Vec3) -> Vec3 {
        Vec3 {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
            z: self.z.clamp(min.z, max.z),
        }
    }

    #[must_use]
    pub fn reflect(&self, normal: Vec3) -> Vec3 {
        *self - 2.0 * self.dot(normal) * normal
    }

    #[must_use]
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the standard 3D cross product.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint::core::prelude::*;
    /// assert_eq!(Vec3::unit_x().cross(Vec3::unit_y()), Vec3::unit_z());
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the angle in radians between two vectors, in [0, π]. The
    /// cosine argument is clamped to [-1, 1] before `acos`.
    #[must_use]
    pub fn angle_radians(&self, other: Vec3) -> f32 {
        self.normed().dot(other.normed()).clamp(-1.0, 1.0).acos()
    }

    #[must_use]
    pub fn project(&self, axis: Vec3) -> Vec3 {
        self.dot(axis.normed()) * axis.normed()
    }

    #[must_use]
    pub fn dist(&self, other: Vec3) -> f32 {
        (other - *self).len()
    }
    #[must_use]
    pub fn dist_squared(&self, other: Vec3) -> f32 {
        (other - *self).len_squared()
    }

    /// Linearly interpolates between this vector and another vector, with `t`
    /// clamped to [0, 1].
    #[must_use]
    pub fn lerp(&self, to: Vec3, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        Vec3 {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            z: lerp(self.z, to.z, t),
        }
    }

    /// Spherically interpolates between this vector and another vector; see
    /// [`Vec2::slerp`].
    #[must_use]
    pub fn slerp(&self, to: Vec3, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let theta = self.angle_radians(to);
        if theta < EPSILON {
            return self.lerp(to, t);
        }
        let sin_theta = theta.sin();
        (*self * ((1.0 - t) * theta).sin() + to * (t * theta).sin()) / sin_theta
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}
impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3: index out of range: {index}"),
        }
    }
}
impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3: index out of range: {index}"),
        }
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// A 4D vector, used as the row type of [`Mat4`](crate::util::matrix::Mat4)
/// and for homogeneous coordinates.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON
                && (self.y - other.y).abs() < EPSILON
                && (self.z - other.z).abs() < EPSILON
                && (self.w - other.w).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
        }
    }
}

impl Vec4 {
    #[must_use]
    pub fn zero() -> Vec4 {
        Vec4 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        }
    }
    #[must_use]
    pub fn splat(v: f32) -> Vec4 {
        Vec4 {
            x: v,
            y: v,
            z: v,
            w: v,
        }
    }

    #[must_use]
    pub fn dot(&self, other: Vec4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// See [`Vec2::normed`] on zero-length inputs.
    #[must_use]
    pub fn normed(&self) -> Vec4 {
        *self / self.len()
    }

    /// The x/y/z components, dropping w.
    #[must_use]
    pub fn xyz(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl Zero for Vec4 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Vec4 {
            x: value[0],
            y: value[1],
            z: value[2],
            w: value[3],
        }
    }
}
impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4: index out of range: {index}"),
        }
    }
}
impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4: index out of range: {index}"),
        }
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl AddAssign<Vec4> for Vec4 {
    fn add_assign(&mut self, rhs: Vec4) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl SubAssign<Vec4> for Vec4 {
    fn sub_assign(&mut self, rhs: Vec4) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec4 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}
impl Mul<Vec4> for f32 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        Vec4 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}
impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
        self.w /= rhs;
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Vec4 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

/// A linear interpolation between two values.
///
/// # Examples
/// ```
/// use glint::core::prelude::*;
/// assert_eq!(linalg::lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(linalg::lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(linalg::lerp(0.0, 10.0, 0.5), 5.0);
/// ```
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};

    // ==================== Vec2 ====================

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a + b, Vec2 { x: 4.0, y: 6.0 });
        assert_eq!(b - a, Vec2 { x: 2.0, y: 2.0 });
        assert_eq!(a * 2.0, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(2.0 * a, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(b / 2.0, Vec2 { x: 1.5, y: 2.0 });
        assert_eq!(-a, Vec2 { x: -1.0, y: -2.0 });
    }

    #[test]
    fn vec2_compound_assignment() {
        let mut a = Vec2 { x: 1.0, y: 2.0 };
        a += Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a, Vec2 { x: 4.0, y: 6.0 });
        a -= Vec2 { x: 1.0, y: 1.0 };
        assert_eq!(a, Vec2 { x: 3.0, y: 5.0 });
        a *= 2.0;
        assert_eq!(a, Vec2 { x: 6.0, y: 10.0 });
        a /= 2.0;
        assert_eq!(a, Vec2 { x: 3.0, y: 5.0 });
    }

    #[test]
    fn vec2_length_and_distance() {
        let a = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a.len(), 5.0);
        assert_eq!(a.len_squared(), 25.0);
        assert_eq!(Vec2::zero().dist(a), 5.0);
        assert_eq!(Vec2::zero().dist_squared(a), 25.0);
    }

    #[test]
    fn vec2_normed() {
        let a = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a.normed(), Vec2 { x: 0.6, y: 0.8 });
        assert!((a.normed().len() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn vec2_normed_zero_length_propagates_nan() {
        let n = Vec2::zero().normed();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
    }

    #[test]
    fn vec2_normed_negative_zero() {
        let n = Vec2 { x: -0.0, y: 1.0 }.normed();
        assert!(n.x.is_sign_positive());
    }

    #[test]
    fn vec2_dot_and_cross() {
        let a = Vec2 { x: 2.0, y: 3.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a.dot(b), 23.0);
        let c = Vec2 { x: 2.0, y: 0.0 }.cross(Vec2 { x: 0.0, y: 3.0 });
        assert_eq!(
            c,
            Vec3 {
                x: 0.0,
                y: 0.0,
                z: 6.0
            }
        );
        let c = Vec2 { x: 2.0, y: 0.0 }.cross(Vec2 { x: 0.0, y: -3.0 });
        assert_eq!(c.z, -6.0);
    }

    #[test]
    fn vec2_rotated() {
        assert_eq!(Vec2::unit_x().rotated(FRAC_PI_2), Vec2::unit_y());
        assert_eq!(Vec2::unit_x().rotated(PI), -Vec2::unit_x());
    }

    #[test]
    fn vec2_angle_radians() {
        assert_eq!(Vec2::unit_x().angle_radians(Vec2::unit_y()), FRAC_PI_2);
        // Clamp keeps acos in-domain for (anti-)parallel vectors.
        let v = Vec2 { x: 0.3, y: 0.7 };
        assert_eq!(v.angle_radians(v), 0.0);
        assert!((v.angle_radians(-v) - PI).abs() < EPSILON);
    }

    #[test]
    fn vec2_lerp() {
        let a = Vec2::zero();
        let b = Vec2 { x: 10.0, y: 20.0 };
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2 { x: 5.0, y: 10.0 });
        // t is clamped.
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn vec2_slerp() {
        let a = Vec2::unit_x();
        let b = Vec2::unit_y();
        assert_eq!(a.slerp(b, 0.0), a);
        assert_eq!(a.slerp(b, 1.0), b);
        let mid = a.slerp(b, 0.5);
        assert_eq!(
            mid,
            Vec2 {
                x: FRAC_1_SQRT_2,
                y: FRAC_1_SQRT_2
            }
        );
        assert!((mid.len() - 1.0).abs() < EPSILON);
        // Near-parallel inputs fall back to lerp.
        assert_eq!(a.slerp(a, 0.5), a);
    }

    #[test]
    fn vec2_reflect_and_project() {
        let v = Vec2 { x: 1.0, y: 1.0 };
        assert_eq!(v.reflect(Vec2::unit_y()), Vec2 { x: 1.0, y: -1.0 });
        assert_eq!(
            Vec2 { x: 3.0, y: 4.0 }.project(Vec2::unit_x()),
            Vec2 { x: 3.0, y: 0.0 }
        );
    }

    #[test]
    fn vec2_clamped() {
        let v = Vec2 { x: 5.0, y: -3.0 };
        assert_eq!(
            v.clamped(Vec2::zero(), Vec2::one()),
            Vec2 { x: 1.0, y: 0.0 }
        );
    }

    #[test]
    fn vec2_index() {
        let mut v = Vec2 { x: 1.0, y: 2.0 };
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        v[1] = 5.0;
        assert_eq!(v.y, 5.0);
    }

    #[test]
    fn vec2_ordering_is_deterministic() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 2.0, y: 0.0 };
        assert!(a < b);
        assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
        assert_eq!(a.cmp_by_length(&b), std::cmp::Ordering::Greater);
    }

    // ==================== Vec3 ====================

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        let b = Vec3 {
            x: 4.0,
            y: 5.0,
            z: 6.0,
        };
        assert_eq!(
            a + b,
            Vec3 {
                x: 5.0,
                y: 7.0,
                z: 9.0
            }
        );
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(
            a * 2.0,
            Vec3 {
                x: 2.0,
                y: 4.0,
                z: 6.0
            }
        );
        assert_eq!(-a + a, Vec3::zero());
    }

    #[test]
    fn vec3_cross_follows_right_hand_rule() {
        assert_eq!(Vec3::unit_x().cross(Vec3::unit_y()), Vec3::unit_z());
        assert_eq!(Vec3::unit_y().cross(Vec3::unit_z()), Vec3::unit_x());
        assert_eq!(Vec3::unit_z().cross(Vec3::unit_x()), Vec3::unit_y());
        assert_eq!(Vec3::unit_y().cross(Vec3::unit_x()), -Vec3::unit_z());
    }

    #[test]
    fn vec3_normed_zero_length_propagates_nan() {
        let n = Vec3::zero().normed();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn vec3_angle_radians_clamps_cosine() {
        let v = Vec3 {
            x: 0.1,
            y: 0.2,
            z: 0.3,
        };
        assert_eq!(v.angle_radians(v), 0.0);
        assert!((v.angle_radians(-v) - PI).abs() < EPSILON);
        assert_eq!(Vec3::unit_x().angle_radians(Vec3::unit_z()), FRAC_PI_2);
    }

    #[test]
    fn vec3_slerp_quarter_arc() {
        let a = Vec3::unit_x();
        let b = Vec3::unit_y();
        let quarter = a.slerp(b, 0.5);
        assert!((quarter.len() - 1.0).abs() < EPSILON);
        assert!((quarter.angle_radians(a) - FRAC_PI_4).abs() < EPSILON);
    }

    // ==================== Vec4 ====================

    #[test]
    fn vec4_dot_and_len() {
        let a = Vec4 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            w: 4.0,
        };
        assert_eq!(a.dot(a), 30.0);
        assert_eq!(a.len_squared(), 30.0);
        assert_eq!(
            a.xyz(),
            Vec3 {
                x: 1.0,
                y: 2.0,
                z: 3.0
            }
        );
    }

    #[test]
    fn vec4_arithmetic() {
        let a = Vec4::splat(1.0);
        let b = Vec4 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            w: 4.0,
        };
        assert_eq!(
            a + b,
            Vec4 {
                x: 2.0,
                y: 3.0,
                z: 4.0,
                w: 5.0
            }
        );
        assert_eq!(b * 2.0 - b, b);
        assert_eq!(b / 1.0, b);
    }

    #[test]
    fn scalar_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
    }
}
