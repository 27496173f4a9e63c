//! Binomial coefficient helper for the combinatorial likelihood measures.

/// Compute the binomial coefficient `n choose k` as a float.
///
/// Returns 0 for invalid arguments (negative, non-integral, `k > n`).
/// Accumulates multiplicatively in `f64`, so very large arguments lose
/// precision and eventually overflow to infinity; the likelihood measures
/// built on top of this are documented as numerically unstable for large
/// counts.
pub fn choose(n: f64, k: f64) -> f64 {
    if !n.is_finite() || !k.is_finite() {
        return 0.0;
    }
    if n < 0.0 || k < 0.0 || k > n || n.fract() != 0.0 || k.fract() != 0.0 {
        return 0.0;
    }
    // Symmetry keeps the loop short.
    let k = k.min(n - k);
    let mut result = 1.0;
    let mut i = 1.0;
    while i <= k {
        result *= (n - k + i) / i;
        i += 1.0;
    }
    result.round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(choose(0.0, 0.0), 1.0);
        assert_eq!(choose(5.0, 0.0), 1.0);
        assert_eq!(choose(5.0, 5.0), 1.0);
        assert_eq!(choose(5.0, 2.0), 10.0);
        assert_eq!(choose(10.0, 3.0), 120.0);
        assert_eq!(choose(52.0, 5.0), 2598960.0);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(choose(-1.0, 0.0), 0.0);
        assert_eq!(choose(5.0, -1.0), 0.0);
        assert_eq!(choose(3.0, 5.0), 0.0);
        assert_eq!(choose(2.5, 1.0), 0.0);
        assert_eq!(choose(f64::NAN, 1.0), 0.0);
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(choose(20.0, 6.0), choose(20.0, 14.0));
    }

    #[test]
    fn test_overflow_to_infinity() {
        // Far beyond f64 range: the helper saturates rather than panicking.
        assert!(choose(2000.0, 1000.0).is_infinite());
    }
}
