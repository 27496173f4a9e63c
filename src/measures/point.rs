//! Point estimates of association strength.

use super::{discounted, safe_div};
use crate::data::FrequencyContext;

/// Dice coefficient: `2*O11 / (2*O11 + O12 + O21)`.
///
/// Undefined (`NaN`) when the denominator is zero.
pub fn dice(ctx: &FrequencyContext) -> Vec<f64> {
    let observed = &ctx.observed;
    (0..ctx.len())
        .map(|i| {
            safe_div(
                2.0 * observed.o11[i],
                2.0 * observed.o11[i] + observed.o12[i] + observed.o21[i],
            )
        })
        .collect()
}

/// Log-ratio (binary log of relative risk):
/// `log2((O11'/O21') / (R1/R2))`, where both `O11` and `O21` are
/// discounted to `disc` when zero.
pub fn log_ratio(ctx: &FrequencyContext, disc: f64) -> Vec<f64> {
    let observed = &ctx.observed;
    let m = &ctx.marginals;
    (0..ctx.len())
        .map(|i| {
            let o11_disc = discounted(observed.o11[i], disc);
            let o21_disc = discounted(observed.o21[i], disc);
            ((o11_disc / o21_disc) / safe_div(m.r1[i], m.r2[i])).log2()
        })
        .collect()
}

/// Minimum sensitivity: `min(O11/R1, O11/C1)`.
pub fn min_sensitivity(ctx: &FrequencyContext) -> Vec<f64> {
    let o11 = &ctx.observed.o11;
    let m = &ctx.marginals;
    (0..ctx.len())
        .map(|i| {
            let by_row = safe_div(o11[i], m.r1[i]);
            let by_col = safe_div(o11[i], m.c1[i]);
            if by_row.is_nan() || by_col.is_nan() {
                f64::NAN
            } else {
                by_row.min(by_col)
            }
        })
        .collect()
}

/// Liddell's difference of proportions:
/// `(O11*O22 - O12*O21) / (C1*C2)`.
pub fn liddell(ctx: &FrequencyContext) -> Vec<f64> {
    let observed = &ctx.observed;
    let m = &ctx.marginals;
    (0..ctx.len())
        .map(|i| {
            safe_div(
                observed.o11[i] * observed.o22[i] - observed.o12[i] * observed.o21[i],
                m.c1[i] * m.c2[i],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Overrides, Table};
    use crate::frequencies::frequency_context;

    fn fixed_context() -> FrequencyContext {
        let f: Vec<f64> = (1..=10).rev().map(|x| x as f64).collect();
        let f2: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let table = Table::from_columns(
            (0..10).map(|i| format!("w{i}")).collect(),
            vec![
                ("f".into(), f),
                ("f1".into(), vec![10.0; 10]),
                ("f2".into(), f2),
                ("N".into(), vec![100.0; 10]),
            ],
        )
        .unwrap();
        frequency_context(&table, &Overrides::default()).unwrap()
    }

    fn all_zero_context() -> FrequencyContext {
        let table = Table::from_columns(
            vec!["a".into()],
            vec![
                ("O11".into(), vec![0.0]),
                ("O12".into(), vec![0.0]),
                ("O21".into(), vec![0.0]),
                ("O22".into(), vec![0.0]),
            ],
        )
        .unwrap();
        frequency_context(&table, &Overrides::default()).unwrap()
    }

    #[test]
    fn test_dice() {
        let scores = dice(&fixed_context());
        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert!((scores[1] - 0.8181818181818182).abs() < 1e-12);
        assert!((scores[9] - 0.05263157894736842).abs() < 1e-12);
    }

    #[test]
    fn test_dice_zero_row() {
        let scores = dice(&all_zero_context());
        assert!(scores[0].is_nan());
    }

    #[test]
    fn test_log_ratio() {
        let scores = log_ratio(&fixed_context(), 0.5);
        // row 0 has O21 = 0: discounted to .5
        assert!((scores[0] - 7.491853096329675).abs() < 1e-10);
        assert!((scores[1] - 4.754887502163468).abs() < 1e-10);
        assert!((scores[9] - -1.5849625007211563).abs() < 1e-10);
    }

    #[test]
    fn test_min_sensitivity() {
        let scores = min_sensitivity(&fixed_context());
        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert!((scores[1] - 0.75).abs() < 1e-12);
        assert!((scores[9] - 0.03571428571428571).abs() < 1e-12);
    }

    #[test]
    fn test_min_sensitivity_zero_row() {
        let scores = min_sensitivity(&all_zero_context());
        assert!(scores[0].is_nan());
    }

    #[test]
    fn test_liddell() {
        let scores = liddell(&fixed_context());
        assert!((scores[0] - 1.0).abs() < 1e-12);
        assert!((scores[1] - 0.7386363636363636).abs() < 1e-12);
        assert!((scores[9] - -0.08928571428571429).abs() < 1e-12);
    }
}
