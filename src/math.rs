//! Numeric helpers shared by the accumulators
//!
//! Float intrinsics use the standard library when available and fall back
//! to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

/// Sum with Neumaier compensation
///
/// Carries the low-order bits lost by each addition in a separate term, so
/// the error does not grow with the number of values.
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for x in values {
        let t = sum + x;
        if abs(sum) >= abs(x) {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }
    // Non-finite sums poison the compensation term with NaN (inf - inf).
    if sum.is_finite() {
        sum + compensation
    } else {
        sum
    }
}

/// Smaller of two values, NaN if either is NaN
///
/// `-0.0` is smaller than `+0.0`, so the result does not depend on
/// argument order.
#[inline]
pub fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if b < a || (b == a && b.is_sign_negative()) {
        b
    } else {
        a
    }
}

/// Larger of two values, NaN if either is NaN
///
/// `+0.0` is larger than `-0.0`, so the result does not depend on
/// argument order.
#[inline]
pub fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if b > a || (b == a && b.is_sign_positive()) {
        b
    } else {
        a
    }
}

/// Halfway point between `a <= b` without overflowing
#[inline]
pub fn midpoint(a: f64, b: f64) -> f64 {
    let diff = b - a;
    if diff.is_finite() {
        a + diff / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1), for `a <= b`
///
/// Finite endpoints never overflow and the result stays within `[a, b]`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if a == b {
        return a;
    }
    let v = a * (1.0 - t) + b * t;
    if v.is_nan() {
        v
    } else {
        v.max(a).min(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compensated_sum_recovers_small_terms() {
        // Naive summation loses every 1.0 against 1e16.
        let values = [1e16, 1.0, 1.0, 1.0, 1.0, -1e16];
        assert_eq!(compensated_sum(values), 4.0);
    }

    #[test]
    fn test_compensated_sum_empty() {
        assert_eq!(compensated_sum(core::iter::empty()), 0.0);
    }

    #[test]
    fn test_compensated_sum_non_finite() {
        assert_eq!(compensated_sum([1.0, f64::INFINITY]), f64::INFINITY);
        assert!(compensated_sum([1.0, f64::NAN]).is_nan());
        assert!(compensated_sum([f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }

    #[test]
    fn test_nan_min_max() {
        assert_eq!(nan_min(1.0, 2.0), 1.0);
        assert_eq!(nan_max(1.0, 2.0), 2.0);
        assert!(nan_min(f64::NAN, 2.0).is_nan());
        assert!(nan_min(1.0, f64::NAN).is_nan());
        assert!(nan_max(f64::NAN, 2.0).is_nan());
        assert!(nan_max(1.0, f64::NAN).is_nan());
        assert_eq!(nan_min(f64::NEG_INFINITY, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_signed_zero_is_order_independent() {
        assert!(nan_min(0.0, -0.0).is_sign_negative());
        assert!(nan_min(-0.0, 0.0).is_sign_negative());
        assert!(nan_max(0.0, -0.0).is_sign_positive());
        assert!(nan_max(-0.0, 0.0).is_sign_positive());
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(2.0, 3.0), 2.5);
        assert_eq!(midpoint(-4.0, 4.0), 0.0);
        assert_eq!(midpoint(f64::MAX, f64::MAX), f64::MAX);
        assert_eq!(midpoint(-f64::MAX, f64::MAX), 0.0);
        assert!(midpoint(f64::MAX / 2.0, f64::MAX).is_finite());
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(1.0, 2.0, 0.5), 1.5);
        assert_eq!(lerp(0.1, 0.1, 0.3), 0.1);
        assert!(lerp(f64::MAX / 2.0, f64::MAX, 0.999_999).is_finite());
        assert!(lerp(f64::MAX / 3.0, f64::MAX, 0.7) <= f64::MAX);
        assert!(lerp(f64::NEG_INFINITY, f64::INFINITY, 0.5).is_nan());
        assert_eq!(lerp(f64::MAX, f64::MAX, 0.5), f64::MAX);
        assert!((lerp(-f64::MAX, f64::MAX, 0.75) - f64::MAX / 2.0).abs() <= f64::MAX * 1e-15);
    }
}
