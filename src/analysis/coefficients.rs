//! K coefficient formula and the assembled K values

use serde::{Deserialize, Serialize};

use crate::error::{SeismicError, SeismicResult};

/// Code-mandated floor value, independent of all inputs.
pub const K_MIN: f64 = 0.044;

/// K = I * (Sa / Fu) / (1.4 * alpha_y)
///
/// Fu and alpha_y are divisors and must be nonzero.
pub fn calculate_k(i: f64, sa: f64, fu: f64, alpha_y: f64) -> SeismicResult<f64> {
    if fu == 0.0 {
        return Err(SeismicError::Computation(
            "demand factor Fu is zero".to_string(),
        ));
    }
    if alpha_y == 0.0 {
        return Err(SeismicError::Computation(
            "ductility factor alpha_y is zero".to_string(),
        ));
    }
    Ok(i * (sa / fu) / (1.4 * alpha_y))
}

/// The four K coefficients of one evaluation.
///
/// Field names keep their code notation on the wire (`K_min`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KValues {
    /// Fixed floor K_min
    #[serde(rename = "K_min")]
    pub k_min: f64,
    /// Moderate-level coefficient from SDS and FuD
    #[serde(rename = "K_moderate")]
    pub k_moderate: f64,
    /// Maximum-level coefficient from the corrected FuM * SMS product
    #[serde(rename = "K_maximum")]
    pub k_maximum: f64,
    /// Collapse-avoidance coefficient from the same corrected product
    #[serde(rename = "K_collapse_avoiding")]
    pub k_collapse_avoiding: f64,
}
