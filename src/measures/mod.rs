//! Association measure catalog.
//!
//! Each measure is a pure function of a row's frequency context (observed
//! cells, marginals, expected cells) plus explicit parameters, vectorized
//! over all rows of the table. Undefined arithmetic (division by zero,
//! log of zero) yields `NaN` for the affected row only, never an error.
//!
//! The catalog is closed: [`MeasureKind`] enumerates every implemented
//! measure at compile time, and `score` selects from it by name.

pub mod asymptotic;
pub mod conservative;
pub mod information;
pub mod likelihood;
pub mod point;

pub use asymptotic::{log_likelihood, simple_ll, t_score, z_score};
pub use conservative::{conservative_log_ratio, Boundary, ClrParams};
pub use information::{local_mutual_information, mutual_information};
pub use likelihood::{binomial_likelihood, hypergeometric_likelihood};
pub use point::{dice, liddell, log_ratio, min_sensitivity};

use crate::data::FrequencyContext;
use crate::error::Result;
use crate::score::ScoreParams;
use serde::{Deserialize, Serialize};

/// Default discount for `t_score` and `mutual_information`.
pub const DISC_SMALL: f64 = 0.001;
/// Default discount for `log_ratio` and `conservative_log_ratio`.
pub const DISC_HALF: f64 = 0.5;

/// Division with an explicit undefined result on a zero denominator.
pub(crate) fn safe_div(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        f64::NAN
    } else {
        num / den
    }
}

/// Substitute a discount for a true zero count.
pub(crate) fn discounted(count: f64, disc: f64) -> f64 {
    if count == 0.0 {
        disc
    } else {
        count
    }
}

/// Sign in the numpy convention: 0 maps to 0, NaN propagates.
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// The closed set of implemented association measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureKind {
    ZScore,
    TScore,
    LogLikelihood,
    SimpleLl,
    Dice,
    LogRatio,
    MutualInformation,
    LocalMutualInformation,
    MinSensitivity,
    Liddell,
    HypergeometricLikelihood,
    BinomialLikelihood,
    ConservativeLogRatio,
}

impl MeasureKind {
    /// Every implemented measure, in catalog order.
    pub const ALL: [MeasureKind; 13] = [
        MeasureKind::ZScore,
        MeasureKind::TScore,
        MeasureKind::LogLikelihood,
        MeasureKind::SimpleLl,
        MeasureKind::Dice,
        MeasureKind::LogRatio,
        MeasureKind::MutualInformation,
        MeasureKind::LocalMutualInformation,
        MeasureKind::MinSensitivity,
        MeasureKind::Liddell,
        MeasureKind::HypergeometricLikelihood,
        MeasureKind::BinomialLikelihood,
        MeasureKind::ConservativeLogRatio,
    ];

    /// Column name the measure's scores are stored under.
    pub fn name(self) -> &'static str {
        match self {
            MeasureKind::ZScore => "z_score",
            MeasureKind::TScore => "t_score",
            MeasureKind::LogLikelihood => "log_likelihood",
            MeasureKind::SimpleLl => "simple_ll",
            MeasureKind::Dice => "dice",
            MeasureKind::LogRatio => "log_ratio",
            MeasureKind::MutualInformation => "mutual_information",
            MeasureKind::LocalMutualInformation => "local_mutual_information",
            MeasureKind::MinSensitivity => "min_sensitivity",
            MeasureKind::Liddell => "liddell",
            MeasureKind::HypergeometricLikelihood => "hypergeometric_likelihood",
            MeasureKind::BinomialLikelihood => "binomial_likelihood",
            MeasureKind::ConservativeLogRatio => "conservative_log_ratio",
        }
    }

    /// Resolve a measure by name; unknown names yield `None` (callers
    /// filtering the registry drop them silently).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Whether the measure belongs to the default registry.
    ///
    /// The two combinatorial likelihoods overflow for realistic corpus
    /// sizes and must be requested explicitly.
    pub fn in_default_set(self) -> bool {
        !matches!(
            self,
            MeasureKind::HypergeometricLikelihood | MeasureKind::BinomialLikelihood
        )
    }

    /// Compute the measure for every row of the context.
    pub fn compute(self, ctx: &FrequencyContext, params: &ScoreParams) -> Result<Vec<f64>> {
        let scores = match self {
            MeasureKind::ZScore => z_score(ctx),
            MeasureKind::TScore => t_score(ctx, params.discount.unwrap_or(DISC_SMALL)),
            MeasureKind::LogLikelihood => log_likelihood(ctx, params.signed),
            MeasureKind::SimpleLl => simple_ll(ctx, params.signed),
            MeasureKind::Dice => dice(ctx),
            MeasureKind::LogRatio => log_ratio(ctx, params.discount.unwrap_or(DISC_HALF)),
            MeasureKind::MutualInformation => {
                mutual_information(ctx, params.discount.unwrap_or(DISC_SMALL))
            }
            MeasureKind::LocalMutualInformation => local_mutual_information(ctx),
            MeasureKind::MinSensitivity => min_sensitivity(ctx),
            MeasureKind::Liddell => liddell(ctx),
            MeasureKind::HypergeometricLikelihood => hypergeometric_likelihood(ctx),
            MeasureKind::BinomialLikelihood => binomial_likelihood(ctx),
            MeasureKind::ConservativeLogRatio => {
                return conservative_log_ratio(ctx, &params.clr_params())
            }
        };
        Ok(scores)
    }
}

/// Names of the measures in the default registry, in catalog order.
pub fn list_measures() -> Vec<&'static str> {
    MeasureKind::ALL
        .iter()
        .filter(|kind| kind.in_default_set())
        .map(|kind| kind.name())
        .collect()
}
