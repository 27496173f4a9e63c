//! Conservative log-ratio: confidence-bound-based relative risk.
//!
//! The estimator returns the binary logarithm of the boundary of the
//! confidence interval of relative risk that lies closer to zero, at a
//! significance level corrected for the number of simultaneous tests.
//! Ranking by this score does not overstate significance under multiple
//! comparisons: the magnitude never exceeds the plain log-ratio point
//! estimate.

use super::{discounted, safe_div, DISC_HALF};
use crate::correct::{adjusted_alpha, Correction};
use crate::data::FrequencyContext;
use crate::error::{AmError, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, ContinuousCDF, Normal};

/// Confidence-bound construction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Boundary {
    /// Normal approximation via the asymptotic standard error of log(RR).
    Normal,
    /// Exact Clopper-Pearson-style bound via the inverse regularized
    /// incomplete Beta function.
    #[default]
    Poisson,
}

impl Boundary {
    /// Parse a boundary method from its conventional name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Ok(Boundary::Normal),
            "poisson" => Ok(Boundary::Poisson),
            _ => Err(AmError::InvalidParameter(format!(
                "boundary method must be \"normal\" or \"poisson\"; got \"{name}\""
            ))),
        }
    }
}

/// Parameters of [`conservative_log_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClrParams {
    /// Significance level before correction.
    pub alpha: f64,
    /// Multiple-comparison correction method.
    pub correction: Correction,
    /// Confidence-bound construction.
    pub boundary: Boundary,
    /// One-sided interval (two-sided halves `alpha` first).
    pub one_sided: bool,
    /// Number of simultaneous tests; defaults to the count of rows with
    /// `O11 >= 1`, computed once over the whole table.
    pub vocab: Option<usize>,
    /// Discount for zero `O11`/`O21` (normal boundary only).
    pub disc: f64,
}

impl Default for ClrParams {
    fn default() -> Self {
        Self {
            alpha: 0.001,
            correction: Correction::default(),
            boundary: Boundary::default(),
            one_sided: false,
            vocab: None,
            disc: DISC_HALF,
        }
    }
}

/// Compute the conservative log-ratio for every row of the context.
///
/// Parameter errors (degenerate alpha, zero vocabulary under correction)
/// are raised before any row is processed. Rows with a zero row marginal
/// yield `NaN`; rows with both `O11` and `O21` zero yield 0.
pub fn conservative_log_ratio(ctx: &FrequencyContext, params: &ClrParams) -> Result<Vec<f64>> {
    if !(params.alpha > 0.0 && params.alpha < 1.0) {
        return Err(AmError::InvalidParameter(format!(
            "significance level must be in (0, 1); got {}",
            params.alpha
        )));
    }

    let mut alpha = params.alpha;
    if !params.one_sided {
        alpha /= 2.0;
    }
    // The vocabulary couples every row's correction to the composition of
    // the whole table; it is resolved here, never per row.
    let vocab = params
        .vocab
        .unwrap_or_else(|| ctx.observed.o11.iter().filter(|&&o11| o11 >= 1.0).count());
    let alpha = adjusted_alpha(alpha, params.correction, vocab)?;

    match params.boundary {
        Boundary::Normal => Ok(normal_bounds(ctx, alpha, params.disc)),
        Boundary::Poisson => Ok(poisson_bounds(ctx, alpha)),
    }
}

/// Normal-approximation bound on the natural-log relative risk, converted
/// to a binary log.
fn normal_bounds(ctx: &FrequencyContext, alpha: f64, disc: f64) -> Vec<f64> {
    let observed = &ctx.observed;
    let m = &ctx.marginals;
    // Normal(0, 1) construction cannot fail.
    let z = Normal::new(0.0, 1.0).unwrap().inverse_cdf(1.0 - alpha);

    (0..ctx.len())
        .map(|i| {
            let o11_disc = discounted(observed.o11[i], disc);
            let o21_disc = discounted(observed.o21[i], disc);
            let lrr = ((o11_disc / o21_disc) / safe_div(m.r1[i], m.r2[i])).ln();
            // Asymptotic standard deviation of log(RR).
            let sd =
                (1.0 / o11_disc + 1.0 / o21_disc - 1.0 / m.r1[i] - 1.0 / m.r2[i]).sqrt();
            if lrr.is_nan() || sd.is_nan() {
                return f64::NAN;
            }
            let bound = if lrr >= 0.0 {
                (lrr - z * sd).max(0.0)
            } else {
                (lrr + z * sd).min(0.0)
            };
            bound / std::f64::consts::LN_2
        })
        .collect()
}

/// Exact Clopper-Pearson-style bound on the rate ratio via the inverse
/// regularized incomplete Beta function.
fn poisson_bounds(ctx: &FrequencyContext, alpha: f64) -> Vec<f64> {
    let observed = &ctx.observed;
    let m = &ctx.marginals;

    (0..ctx.len())
        .into_par_iter()
        .map(|i| {
            let k1 = observed.o11[i];
            let k2 = observed.o21[i];
            let (r1, r2) = (m.r1[i], m.r2[i]);
            if k1 == 0.0 && k2 == 0.0 {
                return 0.0;
            }
            if r1 <= 0.0 || r2 <= 0.0 {
                return f64::NAN;
            }
            if k1 / r1 >= k2 / r2 {
                // Positive direction: lower bound, clipped at 0 from below.
                // k1 >= 1 here, so Beta(k1, k2+1) is well-formed.
                let p = Beta::new(k1, k2 + 1.0)
                    .map(|dist| dist.inverse_cdf(alpha))
                    .unwrap_or(f64::NAN);
                if p.is_nan() {
                    return f64::NAN;
                }
                (((r2 / r1) * p / (1.0 - p)).log2()).max(0.0)
            } else {
                // Negative direction: upper bound, clipped at 0 from above.
                let p = Beta::new(k1 + 1.0, k2)
                    .map(|dist| dist.inverse_cdf(1.0 - alpha))
                    .unwrap_or(f64::NAN);
                if p.is_nan() {
                    return f64::NAN;
                }
                (((r2 / r1) * p / (1.0 - p)).log2()).min(0.0)
            }
        })
        .collect()
}
