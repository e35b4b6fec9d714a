/// Tolerance used by all approximate comparisons (`almost_eq`,
/// `is_equal_approx` and friends).
pub const EPSILON: f32 = 1e-5;
