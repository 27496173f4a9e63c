//! Top-level scoring entry point.

use crate::correct::Correction;
use crate::data::{Overrides, Table};
use crate::error::{AmError, Result};
use crate::frequencies::frequency_context;
use crate::measures::{Boundary, ClrParams, MeasureKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Parameters of a [`score`] call.
///
/// Measure-specific parameters (`discount`, `signed`, the conservative
/// log-ratio settings) are shared by every selected measure that consumes
/// them; a `discount` of `None` leaves each measure's own default in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreParams {
    /// Measures to compute; `None` selects the default registry.
    /// Unknown names are silently dropped.
    pub measures: Option<Vec<String>>,
    /// Keep the frequency columns (observed, marginals, expected) in the
    /// result.
    pub freq: bool,
    /// Append instance counts and per-million rate columns.
    pub per_million: bool,
    /// Round all scores to this many decimal digits; `None` disables
    /// rounding.
    pub digits: Option<u32>,
    /// Override the per-measure discounting defaults.
    pub discount: Option<f64>,
    /// Signed log-likelihood variants (negative for `O11 < E11`).
    pub signed: bool,
    /// Significance level for the conservative log-ratio.
    pub alpha: f64,
    /// Multiple-comparison correction for the conservative log-ratio.
    pub correction: Correction,
    /// Confidence-bound method for the conservative log-ratio.
    pub boundary: Boundary,
    /// One-sided confidence interval for the conservative log-ratio.
    pub one_sided: bool,
    /// Explicit number of simultaneous tests; `None` counts rows with
    /// `O11 >= 1` once over the whole table.
    pub vocab: Option<usize>,
    /// Scalar notation overrides applied during normalization.
    pub overrides: Overrides,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            measures: None,
            freq: false,
            per_million: false,
            digits: Some(6),
            discount: None,
            signed: true,
            alpha: 0.001,
            correction: Correction::default(),
            boundary: Boundary::default(),
            one_sided: false,
            vocab: None,
            overrides: Overrides::default(),
        }
    }
}

impl ScoreParams {
    pub(crate) fn clr_params(&self) -> ClrParams {
        ClrParams {
            alpha: self.alpha,
            correction: self.correction,
            boundary: self.boundary,
            one_sided: self.one_sided,
            vocab: self.vocab,
            disc: self.discount.unwrap_or(crate::measures::DISC_HALF),
        }
    }
}

/// Score a frequency table with a battery of association measures.
///
/// The input notation is resolved once and the shared frequency context
/// (observed cells, marginals, expected cells) is computed a single time
/// for all selected measures, which are then evaluated in parallel. The
/// result carries one column per measure, in catalog order, plus the
/// frequency and rate columns when requested.
pub fn score(table: &Table, params: &ScoreParams) -> Result<Table> {
    if let Some(disc) = params.discount {
        if disc <= 0.0 {
            return Err(AmError::InvalidParameter(format!(
                "discount must be positive; got {disc}"
            )));
        }
    }
    if !(params.alpha > 0.0 && params.alpha < 1.0) {
        return Err(AmError::InvalidParameter(format!(
            "significance level must be in (0, 1); got {}",
            params.alpha
        )));
    }

    let ctx = frequency_context(table, &params.overrides)?;

    let kinds: Vec<MeasureKind> = match &params.measures {
        Some(names) => names
            .iter()
            .filter_map(|name| MeasureKind::from_name(name))
            .collect(),
        None => MeasureKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.in_default_set())
            .collect(),
    };

    let columns: Vec<(&'static str, Vec<f64>)> = kinds
        .par_iter()
        .map(|kind| Ok((kind.name(), kind.compute(&ctx, params)?)))
        .collect::<Result<_>>()?;

    let mut result = Table::new(ctx.row_ids().to_vec());
    if params.freq {
        for (name, values) in frequency_columns(&ctx) {
            result.set_column(name, values)?;
        }
    }
    for (name, values) in columns {
        result.set_column(name, values)?;
    }
    if params.per_million {
        for (name, values) in rate_columns(&ctx) {
            result.set_column(name, values)?;
        }
    }
    if let Some(digits) = params.digits {
        round_columns(&mut result, digits)?;
    }
    Ok(result)
}

fn frequency_columns(ctx: &crate::data::FrequencyContext) -> Vec<(&'static str, Vec<f64>)> {
    let m = &ctx.marginals;
    vec![
        ("O11", ctx.observed.o11.clone()),
        ("O12", ctx.observed.o12.clone()),
        ("O21", ctx.observed.o21.clone()),
        ("O22", ctx.observed.o22.clone()),
        ("R1", m.r1.clone()),
        ("R2", m.r2.clone()),
        ("C1", m.c1.clone()),
        ("C2", m.c2.clone()),
        ("N", m.n.clone()),
        ("E11", ctx.expected.e11.clone()),
        ("E12", ctx.expected.e12.clone()),
        ("E21", ctx.expected.e21.clone()),
        ("E22", ctx.expected.e22.clone()),
    ]
}

/// Instance counts and per-million occurrence rates: observed rate in the
/// target (`ipm`), in the reference (`ipm_reference`), and the pooled rate
/// both share under independence (`ipm_expected`).
fn rate_columns(ctx: &crate::data::FrequencyContext) -> Vec<(&'static str, Vec<f64>)> {
    let observed = &ctx.observed;
    let m = &ctx.marginals;
    let per_million = |num: f64, den: f64| {
        if den == 0.0 {
            f64::NAN
        } else {
            num / den * 1_000_000.0
        }
    };
    let n_rows = ctx.len();
    let mut ipm = Vec::with_capacity(n_rows);
    let mut ipm_reference = Vec::with_capacity(n_rows);
    let mut ipm_expected = Vec::with_capacity(n_rows);
    for i in 0..n_rows {
        ipm.push(per_million(observed.o11[i], m.r1[i]));
        ipm_reference.push(per_million(observed.o21[i], m.r2[i]));
        ipm_expected.push(per_million(m.c1[i], m.n[i]));
    }
    vec![
        ("instances", observed.o11.clone()),
        ("instances_reference", observed.o21.clone()),
        ("ipm", ipm),
        ("ipm_reference", ipm_reference),
        ("ipm_expected", ipm_expected),
    ]
}

fn round_columns(table: &mut Table, digits: u32) -> Result<()> {
    let factor = 10f64.powi(digits as i32);
    for name in table.column_names() {
        let rounded: Vec<f64> = table
            .column(&name)
            .unwrap_or(&[])
            .iter()
            .map(|&value| {
                if value.is_finite() {
                    (value * factor).round() / factor
                } else {
                    value
                }
            })
            .collect();
        table.set_column(name, rounded)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_table() -> Table {
        let f: Vec<f64> = (1..=10).rev().map(|x| x as f64).collect();
        let f2: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        Table::from_columns(
            (0..10).map(|i| format!("w{i}")).collect(),
            vec![
                ("f".into(), f),
                ("f1".into(), vec![10.0; 10]),
                ("f2".into(), f2),
                ("N".into(), vec![100.0; 10]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_score_default_registry() {
        let result = score(&fixed_table(), &ScoreParams::default()).unwrap();
        assert_eq!(result.n_columns(), 11);
        assert!(result.has_column("z_score"));
        assert!(result.has_column("conservative_log_ratio"));
        assert!(!result.has_column("hypergeometric_likelihood"));
        // frequency columns are dropped unless requested
        assert!(!result.has_column("O11"));
    }

    #[test]
    fn test_score_selected_measures() {
        let params = ScoreParams {
            measures: Some(vec!["dice".into(), "z_score".into()]),
            digits: None,
            ..Default::default()
        };
        let result = score(&fixed_table(), &params).unwrap();
        assert_eq!(result.n_columns(), 2);
        assert!((result.column("z_score").unwrap()[0] - 9.0).abs() < 1e-12);
        assert!((result.column("dice").unwrap()[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_unknown_measures_dropped() {
        let params = ScoreParams {
            measures: Some(vec!["dice".into(), "no_such_measure".into()]),
            ..Default::default()
        };
        let result = score(&fixed_table(), &params).unwrap();
        assert_eq!(result.n_columns(), 1);
        assert!(result.has_column("dice"));
    }

    #[test]
    fn test_score_likelihoods_on_request() {
        let params = ScoreParams {
            measures: Some(vec![
                "hypergeometric_likelihood".into(),
                "binomial_likelihood".into(),
            ]),
            ..Default::default()
        };
        let result = score(&fixed_table(), &params).unwrap();
        assert!(result.has_column("hypergeometric_likelihood"));
        assert!(result.has_column("binomial_likelihood"));
    }

    #[test]
    fn test_score_with_freq_columns() {
        let params = ScoreParams {
            freq: true,
            ..Default::default()
        };
        let result = score(&fixed_table(), &params).unwrap();
        assert_eq!(result.column("O11").unwrap()[0], 10.0);
        assert_eq!(result.column("N").unwrap()[0], 100.0);
        assert_eq!(result.column("E11").unwrap()[0], 1.0);
    }

    #[test]
    fn test_score_per_million() {
        let params = ScoreParams {
            per_million: true,
            ..Default::default()
        };
        let result = score(&fixed_table(), &params).unwrap();
        assert_eq!(result.column("instances").unwrap()[0], 10.0);
        assert_eq!(result.column("ipm").unwrap()[0], 1_000_000.0);
        assert_eq!(result.column("ipm_reference").unwrap()[0], 0.0);
        assert_eq!(result.column("ipm_expected").unwrap()[0], 100_000.0);
    }

    #[test]
    fn test_score_rounding() {
        let params = ScoreParams {
            measures: Some(vec!["t_score".into()]),
            digits: Some(3),
            ..Default::default()
        };
        let result = score(&fixed_table(), &params).unwrap();
        assert_eq!(result.column("t_score").unwrap()[0], 2.846);
    }

    #[test]
    fn test_score_rejects_bad_parameters() {
        let bad_alpha = ScoreParams {
            alpha: 1.5,
            ..Default::default()
        };
        assert!(score(&fixed_table(), &bad_alpha).is_err());

        let bad_discount = ScoreParams {
            discount: Some(0.0),
            ..Default::default()
        };
        assert!(score(&fixed_table(), &bad_discount).is_err());
    }

    #[test]
    fn test_notation_equivalence() {
        // The same data in signature and contingency form scores identically.
        let signature = fixed_table();
        let contingency = crate::frequencies::observed_frequencies(
            &signature,
            &Overrides::default(),
        )
        .unwrap()
        .to_table(false);

        let params = ScoreParams {
            digits: None,
            ..Default::default()
        };
        let from_signature = score(&signature, &params).unwrap();
        let from_contingency = score(&contingency, &params).unwrap();
        for name in from_signature.column_names() {
            let a = from_signature.column(&name).unwrap();
            let b = from_contingency.column(&name).unwrap();
            for i in 0..a.len() {
                assert!(
                    (a[i] - b[i]).abs() < 1e-12 || (a[i].is_nan() && b[i].is_nan()),
                    "{name} row {i}: {} != {}",
                    a[i],
                    b[i]
                );
            }
        }
    }
}
