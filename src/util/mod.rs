pub mod bounds;
pub mod colour;
pub mod linalg;
pub mod log;
pub mod rotation;
pub mod transform;

pub mod real {
    //! Scalar helpers shared by the geometry types.
    use crate::core::config::EPSILON;
    use anyhow::{bail, Result};

    /// A linear interpolation between two values, unclamped in `t`.
    ///
    /// # Examples
    /// ```
    /// use spindle::core::prelude::*;
    /// assert_eq!(real::lerp(0.0, 10.0, 0.5), 5.0);
    /// assert_eq!(real::lerp(0.0, 10.0, 1.5), 15.0);
    /// ```
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + t * (b - a)
    }

    /// Snaps `s` to the nearest multiple of `step`. A zero `step` returns `s`
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use spindle::core::prelude::*;
    /// assert_eq!(real::stepify(1.3, 0.5), 1.5);
    /// assert_eq!(real::stepify(-0.7, 0.5), -0.5);
    /// assert_eq!(real::stepify(1.3, 0.0), 1.3);
    /// ```
    pub fn stepify(s: f32, step: f32) -> f32 {
        if step != 0.0 {
            (s / step + 0.5).floor() * step
        } else {
            s
        }
    }

    /// Floating-point modulo whose result has the same sign as `m`, so that
    /// positive `m` always yields a value in `[0, m)`.
    pub fn posmod(x: f32, m: f32) -> f32 {
        let mut r = x % m;
        if (r < 0.0 && m > 0.0) || (r > 0.0 && m < 0.0) {
            r += m;
        }
        r
    }

    pub fn is_equal_approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    pub fn is_zero_approx(x: f32) -> bool {
        x.abs() < EPSILON
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn f32_to_u32(x: f32) -> Result<u32> {
        if x > u32::MAX as f32 || x < 0.0 {
            bail!("{x} does not fit in range of u32");
        }
        Ok(x as u32)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn lerp_endpoints() {
            assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
            assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
            assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
            // Unclamped on both sides.
            assert_eq!(lerp(2.0, 6.0, -1.0), -2.0);
            assert_eq!(lerp(2.0, 6.0, 2.0), 10.0);
        }

        #[test]
        fn stepify_rounds_to_step() {
            assert_eq!(stepify(7.8, 2.0), 8.0);
            assert_eq!(stepify(-7.8, 2.0), -8.0);
            assert_eq!(stepify(0.4, 1.0), 0.0);
            assert_eq!(stepify(0.6, 1.0), 1.0);
            assert_eq!(stepify(3.1, 0.0), 3.1);
        }

        #[test]
        fn posmod_wraps_negative() {
            assert!(is_equal_approx(posmod(-0.25, 1.0), 0.75));
            assert!(is_equal_approx(posmod(1.25, 1.0), 0.25));
            assert!(is_equal_approx(posmod(0.25, -1.0), -0.75));
        }

        #[test]
        fn f32_to_u32_rejects_out_of_range() {
            assert_eq!(f32_to_u32(12.0).unwrap(), 12);
            assert!(f32_to_u32(-1.0).is_err());
            assert!(f32_to_u32(f32::MAX).is_err());
        }
    }
}
