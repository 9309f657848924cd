#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::assert::check;
use crate::util::linalg::{Vec2, Vec3, Vec4};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

/// One of the three coordinate axes. Used to select the rotation plane of
/// [`Mat4::rotation`].
///
/// Being a closed enum, an invalid axis selector is unrepresentable; the
/// string form ([`FromStr`]) rejects anything but `x`/`y`/`z`
/// (case-insensitive).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl FromStr for Axis {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            _ => bail!("Axis: unknown axis selector: {s:?}"),
        }
    }
}

/// Determinant/cofactor engine shared by all matrix sizes, operating on flat
/// row-major slices so the recursion is dimension-agnostic. The same Laplace
/// expansion previously tended to be hand-copied per size and drift; one
/// routine removes that failure mode.
mod detail {
    use itertools::Itertools;

    /// Laplace expansion along the first row; direct formulas below 3x3.
    pub(super) fn determinant(m: &[f32], n: usize) -> f32 {
        debug_assert_eq!(m.len(), n * n);
        if n == 1 {
            return m[0];
        }
        if n == 2 {
            return m[0] * m[3] - m[1] * m[2];
        }
        (0..n).map(|col| m[col] * cofactor(m, n, 0, col)).sum()
    }

    /// Signed minor: the determinant of the submatrix with `row` and `col`
    /// deleted, negated when `row + col` is odd.
    pub(super) fn cofactor(m: &[f32], n: usize, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        let minor = (0..n)
            .cartesian_product(0..n)
            .filter(|&(i, j)| i != row && j != col)
            .map(|(i, j)| m[i * n + j])
            .collect_vec();
        sign * determinant(&minor, n - 1)
    }

    /// `out[i][j] = cofactor(j, i)`: the transposed cofactor matrix.
    pub(super) fn adjugate(m: &[f32], n: usize, out: &mut [f32]) {
        for (i, j) in (0..n).cartesian_product(0..n) {
            out[i * n + j] = cofactor(m, n, j, i);
        }
    }
}

/// A 2x2 matrix stored as two row vectors.
///
/// # Examples
///
/// ```
/// use glint::core::prelude::*;
///
/// let m = Mat2::from_rows([[1.0, 2.0].into(), [3.0, 1.0].into()]);
/// assert_eq!(m.det(), -5.0);
/// assert_eq!(m * m.inverse(), Mat2::identity());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Mat2 {
    pub rows: [Vec2; 2],
}

/// A 3x3 matrix stored as three row vectors, indexable by `(row, col)`.
///
/// As an affine 2D transformation the elements are arranged as:
/// ```text
/// | xx xy xw |
/// | yx yy yw |
/// | wx wy ww |
/// ```
/// where the first two columns hold the linear part and the third column the
/// translation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Mat3 {
    pub rows: [Vec3; 3],
}

/// A 4x4 matrix stored as four row vectors, indexable by `(row, col)`.
///
/// Transforms column vectors: `m * v` treats `v` as a column on the right.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Mat4 {
    pub rows: [Vec4; 4],
}

impl Mat2 {
    pub fn from_rows(rows: [Vec2; 2]) -> Mat2 {
        Mat2 { rows }
    }

    /// Creates an identity matrix.
    pub fn identity() -> Mat2 {
        Mat2::from_rows([[1.0, 0.0].into(), [0.0, 1.0].into()])
    }

    /// Creates a zero matrix.
    pub fn zero() -> Mat2 {
        Mat2::from_rows([Vec2::zero(), Vec2::zero()])
    }

    /// Creates a matrix rotating anticlockwise by the given angle:
    /// ```text
    /// | cos(θ)  -sin(θ) |
    /// | sin(θ)   cos(θ) |
    /// ```
    pub fn rotation(radians: f32) -> Mat2 {
        let (sin, cos) = radians.sin_cos();
        Mat2::from_rows([[cos, -sin].into(), [sin, cos].into()])
    }

    /// Creates a matrix scaling each axis by the corresponding component.
    pub fn scaling(scale: Vec2) -> Mat2 {
        Mat2::from_rows([[scale.x, 0.0].into(), [0.0, scale.y].into()])
    }

    pub fn col(&self, j: usize) -> Vec2 {
        Vec2 {
            x: self.rows[0][j],
            y: self.rows[1][j],
        }
    }

    fn to_flat(&self) -> [f32; 4] {
        std::array::from_fn(|k| self.rows[k / 2][k % 2])
    }

    fn from_flat(flat: [f32; 4]) -> Mat2 {
        Mat2::from_rows(std::array::from_fn(|i| Vec2 {
            x: flat[i * 2],
            y: flat[i * 2 + 1],
        }))
    }

    /// Calculates the determinant (`ad - bc` at this size).
    pub fn det(&self) -> f32 {
        detail::determinant(&self.to_flat(), 2)
    }

    /// The signed minor obtained by deleting `row` and `col`.
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        detail::cofactor(&self.to_flat(), 2, row, col)
    }

    /// The transposed cofactor matrix. `adjugate() / det()` is the inverse.
    pub fn adjugate(&self) -> Mat2 {
        let mut out = [0.0; 4];
        detail::adjugate(&self.to_flat(), 2, &mut out);
        Mat2::from_flat(out)
    }

    pub fn transposed(&self) -> Mat2 {
        Mat2::from_rows(std::array::from_fn(|i| self.col(i)))
    }

    /// Whether `M * Mᵗ` is the identity (within
    /// [`EPSILON`](crate::core::config::EPSILON) per element). Holds for
    /// rotation matrices, whose inverse is then just the transpose.
    pub fn is_orthogonal(&self) -> bool {
        *self * self.transposed() == Mat2::identity()
    }

    /// Calculates the inverse of the matrix.
    ///
    /// Orthogonal matrices take the transpose shortcut. Otherwise the matrix
    /// must not be singular: `det() == 0.0` is a fatal precondition failure,
    /// not a recoverable error, so callers must check the determinant first
    /// if singularity is possible.
    pub fn inverse(&self) -> Mat2 {
        if self.is_orthogonal() {
            return self.transposed();
        }
        let det = self.det();
        check!(det != 0.0);
        self.adjugate() * (1.0 / det)
    }
}

impl Mat3 {
    pub fn from_rows(rows: [Vec3; 3]) -> Mat3 {
        Mat3 { rows }
    }

    /// Creates an identity matrix.
    pub fn identity() -> Mat3 {
        Mat3::from_rows([
            [1.0, 0.0, 0.0].into(),
            [0.0, 1.0, 0.0].into(),
            [0.0, 0.0, 1.0].into(),
        ])
    }

    /// Creates a zero matrix.
    pub fn zero() -> Mat3 {
        Mat3::from_rows([Vec3::zero(), Vec3::zero(), Vec3::zero()])
    }

    /// Creates an in-plane rotation matrix, rotating anticlockwise by the
    /// given angle:
    /// ```text
    /// | cos(θ)  -sin(θ)  0 |
    /// | sin(θ)   cos(θ)  0 |
    /// | 0        0       1 |
    /// ```
    pub fn rotation(radians: f32) -> Mat3 {
        let (sin, cos) = radians.sin_cos();
        Mat3::from_rows([
            [cos, -sin, 0.0].into(),
            [sin, cos, 0.0].into(),
            [0.0, 0.0, 1.0].into(),
        ])
    }

    /// Creates a matrix scaling each axis by the corresponding component.
    pub fn scaling(scale: Vec3) -> Mat3 {
        Mat3::from_rows([
            [scale.x, 0.0, 0.0].into(),
            [0.0, scale.y, 0.0].into(),
            [0.0, 0.0, scale.z].into(),
        ])
    }

    /// Creates an affine translation matrix, with the offset in the last
    /// column:
    /// ```text
    /// | 1 0 dx |
    /// | 0 1 dy |
    /// | 0 0 1  |
    /// ```
    pub fn translation(by: Vec2) -> Mat3 {
        Mat3::from_rows([
            [1.0, 0.0, by.x].into(),
            [0.0, 1.0, by.y].into(),
            [0.0, 0.0, 1.0].into(),
        ])
    }

    pub fn col(&self, j: usize) -> Vec3 {
        Vec3 {
            x: self.rows[0][j],
            y: self.rows[1][j],
            z: self.rows[2][j],
        }
    }

    fn to_flat(&self) -> [f32; 9] {
        std::array::from_fn(|k| self.rows[k / 3][k % 3])
    }

    fn from_flat(flat: [f32; 9]) -> Mat3 {
        Mat3::from_rows(std::array::from_fn(|i| Vec3 {
            x: flat[i * 3],
            y: flat[i * 3 + 1],
            z: flat[i * 3 + 2],
        }))
    }

    /// Calculates the determinant by Laplace expansion along the first row.
    ///
    /// # Examples
    /// ```
    /// use glint::core::prelude::*;
    ///
    /// assert_eq!(Mat3::rotation(0.0).det(), 1.0);
    /// ```
    pub fn det(&self) -> f32 {
        detail::determinant(&self.to_flat(), 3)
    }

    /// The signed minor obtained by deleting `row` and `col`.
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        detail::cofactor(&self.to_flat(), 3, row, col)
    }

    /// The transposed cofactor matrix. `adjugate() / det()` is the inverse.
    pub fn adjugate(&self) -> Mat3 {
        let mut out = [0.0; 9];
        detail::adjugate(&self.to_flat(), 3, &mut out);
        Mat3::from_flat(out)
    }

    pub fn transposed(&self) -> Mat3 {
        Mat3::from_rows(std::array::from_fn(|i| self.col(i)))
    }

    /// Whether `M * Mᵗ` is the identity (within
    /// [`EPSILON`](crate::core::config::EPSILON) per element).
    pub fn is_orthogonal(&self) -> bool {
        *self * self.transposed() == Mat3::identity()
    }

    /// Calculates the inverse of the matrix; see [`Mat2::inverse`] for the
    /// singularity precondition.
    pub fn inverse(&self) -> Mat3 {
        if self.is_orthogonal() {
            return self.transposed();
        }
        let det = self.det();
        check!(det != 0.0);
        self.adjugate() * (1.0 / det)
    }
}

impl Mat4 {
    pub fn from_rows(rows: [Vec4; 4]) -> Mat4 {
        Mat4 { rows }
    }

    /// Creates an identity matrix.
    pub fn identity() -> Mat4 {
        Mat4::from_rows([
            [1.0, 0.0, 0.0, 0.0].into(),
            [0.0, 1.0, 0.0, 0.0].into(),
            [0.0, 0.0, 1.0, 0.0].into(),
            [0.0, 0.0, 0.0, 1.0].into(),
        ])
    }

    /// Creates a zero matrix.
    pub fn zero() -> Mat4 {
        Mat4::from_rows([Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero()])
    }

    /// Creates a matrix rotating anticlockwise by the given angle about the
    /// given axis.
    pub fn rotation(radians: f32, axis: Axis) -> Mat4 {
        let (sin, cos) = radians.sin_cos();
        match axis {
            Axis::X => Mat4::from_rows([
                [1.0, 0.0, 0.0, 0.0].into(),
                [0.0, cos, -sin, 0.0].into(),
                [0.0, sin, cos, 0.0].into(),
                [0.0, 0.0, 0.0, 1.0].into(),
            ]),
            Axis::Y => Mat4::from_rows([
                [cos, 0.0, sin, 0.0].into(),
                [0.0, 1.0, 0.0, 0.0].into(),
                [-sin, 0.0, cos, 0.0].into(),
                [0.0, 0.0, 0.0, 1.0].into(),
            ]),
            Axis::Z => Mat4::from_rows([
                [cos, -sin, 0.0, 0.0].into(),
                [sin, cos, 0.0, 0.0].into(),
                [0.0, 0.0, 1.0, 0.0].into(),
                [0.0, 0.0, 0.0, 1.0].into(),
            ]),
        }
    }

    /// Creates a matrix scaling each axis by the corresponding component
    /// (w is left unscaled).
    pub fn scaling(scale: Vec3) -> Mat4 {
        Mat4::from_rows([
            [scale.x, 0.0, 0.0, 0.0].into(),
            [0.0, scale.y, 0.0, 0.0].into(),
            [0.0, 0.0, scale.z, 0.0].into(),
            [0.0, 0.0, 0.0, 1.0].into(),
        ])
    }

    /// Creates an affine translation matrix, with the offset in the last
    /// column.
    pub fn translation(by: Vec3) -> Mat4 {
        Mat4::from_rows([
            [1.0, 0.0, 0.0, by.x].into(),
            [0.0, 1.0, 0.0, by.y].into(),
            [0.0, 0.0, 1.0, by.z].into(),
            [0.0, 0.0, 0.0, 1.0].into(),
        ])
    }

    pub fn col(&self, j: usize) -> Vec4 {
        Vec4 {
            x: self.rows[0][j],
            y: self.rows[1][j],
            z: self.rows[2][j],
            w: self.rows[3][j],
        }
    }

    fn to_flat(&self) -> [f32; 16] {
        std::array::from_fn(|k| self.rows[k / 4][k % 4])
    }

    fn from_flat(flat: [f32; 16]) -> Mat4 {
        Mat4::from_rows(std::array::from_fn(|i| Vec4 {
            x: flat[i * 4],
            y: flat[i * 4 + 1],
            z: flat[i * 4 + 2],
            w: flat[i * 4 + 3],
        }))
    }

    /// Calculates the determinant by Laplace expansion along the first row.
    pub fn det(&self) -> f32 {
        detail::determinant(&self.to_flat(), 4)
    }

    /// The signed minor obtained by deleting `row` and `col`.
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        detail::cofactor(&self.to_flat(), 4, row, col)
    }

    /// The transposed cofactor matrix. `adjugate() / det()` is the inverse.
    pub fn adjugate(&self) -> Mat4 {
        let mut out = [0.0; 16];
        detail::adjugate(&self.to_flat(), 4, &mut out);
        Mat4::from_flat(out)
    }

    pub fn transposed(&self) -> Mat4 {
        Mat4::from_rows(std::array::from_fn(|i| self.col(i)))
    }

    /// Whether `M * Mᵗ` is the identity (within
    /// [`EPSILON`](crate::core::config::EPSILON) per element).
    pub fn is_orthogonal(&self) -> bool {
        *self * self.transposed() == Mat4::identity()
    }

    /// Calculates the inverse of the matrix; see [`Mat2::inverse`] for the
    /// singularity precondition.
    pub fn inverse(&self) -> Mat4 {
        if self.is_orthogonal() {
            return self.transposed();
        }
        let det = self.det();
        check!(det != 0.0);
        self.adjugate() * (1.0 / det)
    }
}

impl One for Mat2 {
    fn one() -> Self {
        Self::identity()
    }
}
impl Zero for Mat2 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl One for Mat3 {
    fn one() -> Self {
        Self::identity()
    }
}
impl Zero for Mat3 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl One for Mat4 {
    fn one() -> Self {
        Self::identity()
    }
}
impl Zero for Mat4 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Index<(usize, usize)> for Mat2 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.rows[row][col]
    }
}
impl IndexMut<(usize, usize)> for Mat2 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.rows[row][col]
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.rows[row][col]
    }
}
impl IndexMut<(usize, usize)> for Mat3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.rows[row][col]
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.rows[row][col]
    }
}
impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.rows[row][col]
    }
}

impl Add<Mat2> for Mat2 {
    type Output = Mat2;

    fn add(self, rhs: Mat2) -> Self::Output {
        Mat2::from_rows(std::array::from_fn(|i| self.rows[i] + rhs.rows[i]))
    }
}
impl AddAssign<Mat2> for Mat2 {
    fn add_assign(&mut self, rhs: Mat2) {
        *self = *self + rhs;
    }
}
impl Sub<Mat2> for Mat2 {
    type Output = Mat2;

    fn sub(self, rhs: Mat2) -> Self::Output {
        Mat2::from_rows(std::array::from_fn(|i| self.rows[i] - rhs.rows[i]))
    }
}
impl SubAssign<Mat2> for Mat2 {
    fn sub_assign(&mut self, rhs: Mat2) {
        *self = *self - rhs;
    }
}
impl Mul<f32> for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: f32) -> Self::Output {
        Mat2::from_rows(std::array::from_fn(|i| self.rows[i] * rhs))
    }
}
impl Mul<Mat2> for f32 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Mat2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl Div<f32> for Mat2 {
    type Output = Mat2;

    fn div(self, rhs: f32) -> Self::Output {
        Mat2::from_rows(std::array::from_fn(|i| self.rows[i] / rhs))
    }
}
impl DivAssign<f32> for Mat2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.rows[0].dot(rhs),
            y: self.rows[1].dot(rhs),
        }
    }
}
impl Mul<Mat2> for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Self::Output {
        Mat2::from_rows(std::array::from_fn(|i| Vec2 {
            x: self.rows[i].dot(rhs.col(0)),
            y: self.rows[i].dot(rhs.col(1)),
        }))
    }
}
impl MulAssign<Mat2> for Mat2 {
    fn mul_assign(&mut self, rhs: Mat2) {
        *self = *self * rhs;
    }
}

impl Add<Mat3> for Mat3 {
    type Output = Mat3;

    fn add(self, rhs: Mat3) -> Self::Output {
        Mat3::from_rows(std::array::from_fn(|i| self.rows[i] + rhs.rows[i]))
    }
}
impl AddAssign<Mat3> for Mat3 {
    fn add_assign(&mut self, rhs: Mat3) {
        *self = *self + rhs;
    }
}
impl Sub<Mat3> for Mat3 {
    type Output = Mat3;

    fn sub(self, rhs: Mat3) -> Self::Output {
        Mat3::from_rows(std::array::from_fn(|i| self.rows[i] - rhs.rows[i]))
    }
}
impl SubAssign<Mat3> for Mat3 {
    fn sub_assign(&mut self, rhs: Mat3) {
        *self = *self - rhs;
    }
}
impl Mul<f32> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: f32) -> Self::Output {
        Mat3::from_rows(std::array::from_fn(|i| self.rows[i] * rhs))
    }
}
impl Mul<Mat3> for f32 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Mat3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl Div<f32> for Mat3 {
    type Output = Mat3;

    fn div(self, rhs: f32) -> Self::Output {
        Mat3::from_rows(std::array::from_fn(|i| self.rows[i] / rhs))
    }
}
impl DivAssign<f32> for Mat3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.rows[0].dot(rhs),
            y: self.rows[1].dot(rhs),
            z: self.rows[2].dot(rhs),
        }
    }
}
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        Mat3::from_rows(std::array::from_fn(|i| Vec3 {
            x: self.rows[i].dot(rhs.col(0)),
            y: self.rows[i].dot(rhs.col(1)),
            z: self.rows[i].dot(rhs.col(2)),
        }))
    }
}
impl MulAssign<Mat3> for Mat3 {
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = *self * rhs;
    }
}

impl Add<Mat4> for Mat4 {
    type Output = Mat4;

    fn add(self, rhs: Mat4) -> Self::Output {
        Mat4::from_rows(std::array::from_fn(|i| self.rows[i] + rhs.rows[i]))
    }
}
impl AddAssign<Mat4> for Mat4 {
    fn add_assign(&mut self, rhs: Mat4) {
        *self = *self + rhs;
    }
}
impl Sub<Mat4> for Mat4 {
    type Output = Mat4;

    fn sub(self, rhs: Mat4) -> Self::Output {
        Mat4::from_rows(std::array::from_fn(|i| self.rows[i] - rhs.rows[i]))
    }
}
impl SubAssign<Mat4> for Mat4 {
    fn sub_assign(&mut self, rhs: Mat4) {
        *self = *self - rhs;
    }
}
impl Mul<f32> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: f32) -> Self::Output {
        Mat4::from_rows(std::array::from_fn(|i| self.rows[i] * rhs))
    }
}
impl Mul<Mat4> for f32 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl Div<f32> for Mat4 {
    type Output = Mat4;

    fn div(self, rhs: f32) -> Self::Output {
        Mat4::from_rows(std::array::from_fn(|i| self.rows[i] / rhs))
    }
}
impl DivAssign<f32> for Mat4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.rows[0].dot(rhs),
            y: self.rows[1].dot(rhs),
            z: self.rows[2].dot(rhs),
            w: self.rows[3].dot(rhs),
        }
    }
}
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        Mat4::from_rows(std::array::from_fn(|i| Vec4 {
            x: self.rows[i].dot(rhs.col(0)),
            y: self.rows[i].dot(rhs.col(1)),
            z: self.rows[i].dot(rhs.col(2)),
            w: self.rows[i].dot(rhs.col(3)),
        }))
    }
}
impl MulAssign<Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}
