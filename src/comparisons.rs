//! Comparison of ranked lists and ratings.
//!
//! These utilities operate on outputs of the scoring pipeline (e.g. two
//! measures' rankings of the same rows) and are algorithmically
//! independent of the contingency core.

use crate::error::{AmError, Result};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Rank-biased overlap between two ranked lists.
///
/// `p` in (0, 1] weights the top of the lists (lower `p` is more
/// top-heavy); `k` caps the evaluation depth (defaults to the shorter
/// list); `ext` extrapolates the overlap beyond the evaluated depth.
pub fn rbo<T: Eq + Hash>(
    s: &[T],
    t: &[T],
    k: Option<usize>,
    p: f64,
    ext: bool,
) -> Result<f64> {
    if !(p > 0.0 && p <= 1.0) {
        return Err(AmError::InvalidParameter(format!(
            "rbo weight parameter must be in (0, 1]; got {p}"
        )));
    }
    if s.is_empty() && t.is_empty() {
        return Ok(1.0);
    }
    if s.is_empty() || t.is_empty() {
        return Ok(0.0);
    }
    let k = k
        .unwrap_or(usize::MAX)
        .min(s.len())
        .min(t.len());

    let weights: Vec<f64> = if p != 1.0 {
        (0..k).map(|d| (1.0 - p) * p.powi(d as i32)).collect()
    } else {
        vec![1.0; k]
    };

    // Running agreement and average overlap, evaluated depth by depth.
    let mut agreement = vec![0.0; k];
    let mut average_overlap = vec![0.0; k];
    let mut s_running: HashSet<&T> = HashSet::from([&s[0]]);
    let mut t_running: HashSet<&T> = HashSet::from([&t[0]]);
    agreement[0] = if s[0] == t[0] { 1.0 } else { 0.0 };
    average_overlap[0] = if p != 1.0 {
        weights[0] * agreement[0]
    } else {
        agreement[0]
    };

    for d in 1..k {
        let overlap = usize::from(t_running.contains(&s[d]))
            + usize::from(s_running.contains(&t[d]))
            + usize::from(s[d] == t[d]);
        agreement[d] = (agreement[d - 1] * d as f64 + overlap as f64) / (d as f64 + 1.0);
        average_overlap[d] = if p != 1.0 {
            average_overlap[d - 1] + weights[d] * agreement[d]
        } else {
            (average_overlap[d - 1] * d as f64 + agreement[d]) / (d as f64 + 1.0)
        };
        s_running.insert(&s[d]);
        t_running.insert(&t[d]);
    }

    let score = if ext && p < 1.0 {
        average_overlap[k - 1] + agreement[k - 1] * p.powi(k as i32)
    } else {
        average_overlap[k - 1]
    };
    Ok(score.clamp(0.0, 1.0))
}

/// Gwet's AC1 chance-corrected agreement between two raters.
///
/// Both slices must assign one label per item, in the same item order.
pub fn gwets_ac1<T: Eq + Hash + Clone>(s: &[T], t: &[T]) -> Result<f64> {
    if s.len() != t.len() {
        return Err(AmError::DimensionMismatch {
            expected: s.len(),
            actual: t.len(),
        });
    }
    if s.is_empty() {
        return Err(AmError::EmptyData(
            "agreement requires at least one rating".to_string(),
        ));
    }

    let n = s.len() as f64;
    let observed = s.iter().zip(t).filter(|(a, b)| a == b).count() as f64 / n;

    let mut label_counts: HashMap<&T, usize> = HashMap::new();
    for label in s.iter().chain(t) {
        *label_counts.entry(label).or_insert(0) += 1;
    }
    let chance: f64 = label_counts
        .values()
        .map(|&count| {
            let prob = count as f64 / (2.0 * n);
            prob * prob
        })
        .sum();

    if chance == 1.0 {
        return Ok(1.0);
    }
    Ok((observed - chance) / (1.0 - chance))
}
