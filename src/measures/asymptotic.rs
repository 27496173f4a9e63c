//! Asymptotic hypothesis tests: z-score, t-score, log-likelihood.

use super::{discounted, safe_div, sign};
use crate::data::FrequencyContext;

/// z-score: `(O11 - E11) / sqrt(E11)`.
///
/// Undefined (`NaN`) when `E11 = 0`.
pub fn z_score(ctx: &FrequencyContext) -> Vec<f64> {
    let o11 = &ctx.observed.o11;
    let e11 = &ctx.expected.e11;
    (0..ctx.len())
        .map(|i| safe_div(o11[i] - e11[i], e11[i].sqrt()))
        .collect()
}

/// t-score: `(O11 - E11) / sqrt(O11)`, with `O11` discounted to `disc`
/// only when it is a true zero.
pub fn t_score(ctx: &FrequencyContext, disc: f64) -> Vec<f64> {
    let o11 = &ctx.observed.o11;
    let e11 = &ctx.expected.e11;
    (0..ctx.len())
        .map(|i| (o11[i] - e11[i]) / discounted(o11[i], disc).sqrt())
        .collect()
}

/// Log-likelihood over all four cells:
/// `2 * sum_ij Oij * ln(max(Oij, 1) / Eij)`.
///
/// The per-cell guard `max(Oij, 1)` has no numeric effect (the log term is
/// multiplied by the original zero) but avoids `ln(0)`. With `signed`,
/// rows with `O11 < E11` get a negative score.
pub fn log_likelihood(ctx: &FrequencyContext, signed: bool) -> Vec<f64> {
    let observed = &ctx.observed;
    let expected = &ctx.expected;
    (0..ctx.len())
        .map(|i| {
            let cells = [
                (observed.o11[i], expected.e11[i]),
                (observed.o12[i], expected.e12[i]),
                (observed.o21[i], expected.e21[i]),
                (observed.o22[i], expected.e22[i]),
            ];
            let sum: f64 = cells
                .iter()
                .map(|&(o, e)| o * (discounted(o, 1.0) / e).ln())
                .sum();
            let am = 2.0 * sum;
            if signed {
                sign(observed.o11[i] - expected.e11[i]) * am
            } else {
                am
            }
        })
        .collect()
}

/// Simple log-likelihood: `2 * (O11 * ln(max(O11, 1) / E11) - (O11 - E11))`,
/// with the same signing rule as [`log_likelihood`].
pub fn simple_ll(ctx: &FrequencyContext, signed: bool) -> Vec<f64> {
    let o11 = &ctx.observed.o11;
    let e11 = &ctx.expected.e11;
    (0..ctx.len())
        .map(|i| {
            let log_term = o11[i] * (discounted(o11[i], 1.0) / e11[i]).ln();
            let am = 2.0 * (log_term - (o11[i] - e11[i]));
            if signed {
                sign(o11[i] - e11[i]) * am
            } else {
                am
            }
        })
        .collect()
}
