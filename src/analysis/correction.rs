//! Piecewise correction of the FuM * SMS product

use serde::{Deserialize, Serialize};

/// Which branch of the piecewise correction applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrectionRule {
    /// x <= 0.3: value used unchanged
    Identity,
    /// 0.3 < x < 0.8: 0.52x + 0.144
    Linear,
    /// x >= 0.8: 0.7x
    Proportional,
}

impl CorrectionRule {
    /// Human-readable label reported in the formula trace
    pub fn label(&self) -> &'static str {
        match self {
            CorrectionRule::Identity => "use original value",
            CorrectionRule::Linear => "corrected via 0.52x + 0.144",
            CorrectionRule::Proportional => "corrected via 0.7x",
        }
    }
}

/// Corrected value together with the rule that produced it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Correction {
    pub value: f64,
    pub rule: CorrectionRule,
}

impl Correction {
    /// Apply the piecewise correction.
    ///
    /// The three branches meet at both breakpoints (0.3 maps to 0.3, 0.8 maps
    /// to 0.56 from either side), so the mapping is continuous.
    pub fn apply(x: f64) -> Self {
        if x <= 0.3 {
            Self {
                value: x,
                rule: CorrectionRule::Identity,
            }
        } else if x < 0.8 {
            Self {
                value: 0.52 * x + 0.144,
                rule: CorrectionRule::Linear,
            }
        } else {
            Self {
                value: 0.7 * x,
                rule: CorrectionRule::Proportional,
            }
        }
    }
}
