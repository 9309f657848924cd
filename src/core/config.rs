/// Tolerance used by all approximate floating-point comparisons in the crate.
pub const EPSILON: f32 = 1e-5;
