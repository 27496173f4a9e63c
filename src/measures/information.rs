//! Information-theoretic measures.

use super::{discounted, safe_div};
use crate::data::FrequencyContext;

/// (Pointwise) mutual information: `log2(O11' / E11)`, with `O11`
/// discounted to `disc` when zero.
pub fn mutual_information(ctx: &FrequencyContext, disc: f64) -> Vec<f64> {
    let o11 = &ctx.observed.o11;
    let e11 = &ctx.expected.e11;
    (0..ctx.len())
        .map(|i| safe_div(discounted(o11[i], disc), e11[i]).log2())
        .collect()
}

/// Local mutual information: `O11 * log2(max(O11, 1) / E11)`.
///
/// The `max(O11, 1)` guard has no numeric effect since the log term is
/// multiplied by the original zero.
pub fn local_mutual_information(ctx: &FrequencyContext) -> Vec<f64> {
    let o11 = &ctx.observed.o11;
    let e11 = &ctx.expected.e11;
    (0..ctx.len())
        .map(|i| o11[i] * safe_div(discounted(o11[i], 1.0), e11[i]).log2())
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

    #[test]
    fn test_mutual_information() {
        let scores = mutual_information(&fixed_context(), 0.001);
        // row 0: E11 = 1, O11 = 10 -> log2(10)
        assert!((scores[0] - 10.0_f64.log2()).abs() < 1e-12);
        assert!((scores[1] - 2.9068905956085187).abs() < 1e-10);
        assert!((scores[9] - -1.4854268271702418).abs() < 1e-10);
    }

    #[test]
    fn test_mutual_information_zero_row() {
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
        let ctx = frequency_context(&table, &Overrides::default()).unwrap();
        assert!(mutual_information(&ctx, 0.001)[0].is_nan());
        assert!(local_mutual_information(&ctx)[0].is_nan());
    }

    #[test]
    fn test_local_mutual_information() {
        let scores = local_mutual_information(&fixed_context());
        assert!((scores[0] - 10.0 * 10.0_f64.log2()).abs() < 1e-10);
        assert!((scores[1] - 26.16201536047667).abs() < 1e-10);
        assert!((scores[9] - -1.4854268271702418).abs() < 1e-10);
    }
}
