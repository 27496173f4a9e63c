//! Exact combinatorial likelihoods.
//!
//! Both measures accumulate binomial coefficients in `f64` and overflow to
//! `inf`/`NaN` for realistic corpus sizes; they are excluded from the
//! default registry and must be requested explicitly.

use super::safe_div;
use crate::binomial::choose;
use crate::data::FrequencyContext;

/// Hypergeometric likelihood of the observed table given fixed marginals:
/// `choose(C1, O11) * choose(C2, O12) / choose(N, R1)`.
pub fn hypergeometric_likelihood(ctx: &FrequencyContext) -> Vec<f64> {
    let observed = &ctx.observed;
    let m = &ctx.marginals;
    (0..ctx.len())
        .map(|i| {
            let first_column = choose(m.c1[i], observed.o11[i]);
            let second_column = choose(m.c2[i], observed.o12[i]);
            let tables = choose(m.n[i], m.r1[i]);
            safe_div(first_column, tables) * second_column
        })
        .collect()
}

/// Binomial likelihood of drawing `O11` successes in `N` trials at the
/// independence rate: `choose(N, O11) * (E11/N)^O11 * (1 - E11/N)^(N - O11)`.
pub fn binomial_likelihood(ctx: &FrequencyContext) -> Vec<f64> {
    let o11 = &ctx.observed.o11;
    let e11 = &ctx.expected.e11;
    let n = &ctx.marginals.n;
    (0..ctx.len())
        .map(|i| {
            let rate = safe_div(e11[i], n[i]);
            choose(n[i], o11[i]) * rate.powf(o11[i]) * (1.0 - rate).powf(n[i] - o11[i])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Overrides, Table};
    use crate::frequencies::frequency_context;

    fn small_context() -> FrequencyContext {
        // 2x2 with N = 14: small enough for exact coefficients
        let table = Table::from_columns(
            vec!["a".into()],
            vec![
                ("O11".into(), vec![3.0]),
                ("O12".into(), vec![2.0]),
                ("O21".into(), vec![4.0]),
                ("O22".into(), vec![5.0]),
            ],
        )
        .unwrap();
        frequency_context(&table, &Overrides::default()).unwrap()
    }

    #[test]
    fn test_hypergeometric_likelihood() {
        let scores = hypergeometric_likelihood(&small_context());
        // choose(7,3) * choose(7,2) / choose(14,5) = 35 * 21 / 2002
        let expected = 35.0 * 21.0 / 2002.0;
        assert!((scores[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_binomial_likelihood() {
        let scores = binomial_likelihood(&small_context());
        // E11 = 5*7/14 = 2.5, rate = 2.5/14
        let rate: f64 = 2.5 / 14.0;
        let expected = 364.0 * rate.powi(3) * (1.0 - rate).powi(11);
        assert!((scores[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_overflow_for_large_counts() {
        let table = Table::from_columns(
            vec!["a".into()],
            vec![
                ("O11".into(), vec![600.0]),
                ("O12".into(), vec![600.0]),
                ("O21".into(), vec![600.0]),
                ("O22".into(), vec![600.0]),
            ],
        )
        .unwrap();
        let ctx = frequency_context(&table, &Overrides::default()).unwrap();
        // Documented instability: the results are not finite likelihoods.
        assert!(!hypergeometric_likelihood(&ctx)[0].is_finite());
        assert!(!binomial_likelihood(&ctx)[0].is_finite());
    }
}
