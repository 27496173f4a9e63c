//! Multiple-comparison correction of significance levels.

use crate::error::{AmError, Result};
use serde::{Deserialize, Serialize};

/// Correction method applied to the significance level when many rows are
/// tested simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Correction {
    /// No correction.
    None,
    /// `alpha / vocab`.
    #[default]
    Bonferroni,
    /// `1 - (1 - alpha)^(1/vocab)`.
    Sidak,
}

impl Correction {
    /// Parse a correction method from its conventional name.
    ///
    /// Accepts `"Bonferroni"`, `"Sidak"` and `"None"` (case-insensitive);
    /// anything else is a parameter error.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Ok(Correction::None),
            "bonferroni" => Ok(Correction::Bonferroni),
            "sidak" => Ok(Correction::Sidak),
            _ => Err(AmError::InvalidParameter(format!(
                "correction method must be one of \"Bonferroni\", \"Sidak\", \"None\"; got \"{name}\""
            ))),
        }
    }
}

/// Adjust a significance level for `vocab` simultaneous tests.
///
/// `vocab = 0` with an actual correction is a parameter error, as is a
/// corrected alpha outside the open interval (0, 1).
pub fn adjusted_alpha(alpha: f64, correction: Correction, vocab: usize) -> Result<f64> {
    let adjusted = match correction {
        Correction::None => alpha,
        Correction::Bonferroni | Correction::Sidak if vocab == 0 => {
            return Err(AmError::InvalidParameter(
                "vocabulary size must be positive for Bonferroni/Sidak correction".to_string(),
            ));
        }
        Correction::Bonferroni => alpha / vocab as f64,
        Correction::Sidak => 1.0 - (1.0 - alpha).powf(1.0 / vocab as f64),
    };
    if !(adjusted > 0.0 && adjusted < 1.0) {
        return Err(AmError::InvalidParameter(format!(
            "corrected significance level {adjusted} is outside (0, 1)"
        )));
    }
    Ok(adjusted)
}
