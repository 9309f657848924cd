pub mod bounds;
pub mod frustum;
pub mod linalg;
pub mod matrix;
pub mod plane;
pub mod ray;

pub mod glint_float {
    use crate::util::linalg::{Vec2, Vec3, Vec4};
    use num_traits::Zero;
    use std::num::FpCategory;

    /// Finiteness check usable across scalars and vectors. For `f32` this is
    /// strict: subnormals fail as well as NaN/infinity.
    pub trait GlintFloat {
        fn is_finite(&self) -> bool;
    }

    impl GlintFloat for f32 {
        fn is_finite(&self) -> bool {
            is_finite(*self)
        }
    }

    impl GlintFloat for Vec2 {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite()
        }
    }

    impl GlintFloat for Vec3 {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }
    }

    impl GlintFloat for Vec4 {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
        }
    }

    pub fn is_finite(x: f32) -> bool {
        matches!(x.classify(), FpCategory::Zero | FpCategory::Normal)
    }

    /// Maps -0.0 to 0.0; any other value (NaN and infinities included) passes
    /// through unchanged.
    pub fn force_positive_zero(x: f32) -> f32 {
        if x.is_zero() { 0.0 } else { x }
    }

    pub fn sign_zero(x: f32) -> f32 {
        if x.is_zero() { 0.0 } else { x.signum() }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn strict_finiteness() {
            assert!(is_finite(0.0));
            assert!(is_finite(-1.5));
            assert!(!is_finite(f32::NAN));
            assert!(!is_finite(f32::INFINITY));
            // Subnormals fail the strict test.
            assert!(!is_finite(1e-40));
            assert!(!GlintFloat::is_finite(&1e-40_f32));
            assert!(GlintFloat::is_finite(&Vec2 { x: 1.0, y: 0.0 }));
            assert!(!GlintFloat::is_finite(&Vec2 {
                x: f32::NAN,
                y: 0.0
            }));
        }

        #[test]
        fn zero_signs() {
            assert!(force_positive_zero(-0.0).is_sign_positive());
            assert_eq!(sign_zero(-3.0), -1.0);
            assert_eq!(sign_zero(0.0), 0.0);
            assert_eq!(sign_zero(-0.0), 0.0);
        }
    }
}
