//! The K-value evaluation pipeline
//!
//! Data flows strictly forward: inputs -> period -> site spectra -> demand
//! factors -> piecewise correction -> K coefficients -> report. No stage
//! reads back into an earlier one, and nothing here holds state between
//! requests.

pub mod coefficients;
pub mod correction;
pub mod demand;
pub mod period;
pub mod spectra;

use crate::error::{SeismicError, SeismicResult};
use crate::inputs::SeismicInputs;
use crate::results::Report;
use crate::site::SiteResponseProvider;

use coefficients::{calculate_k, KValues, K_MIN};
use correction::Correction;
use demand::ShearDemandFactors;
use period::fundamental_period;
use spectra::DesignSpectra;

/// Evaluate one request against the given site-response provider.
///
/// Validation happens up front; the computation below assumes clean inputs
/// and either produces a complete [`Report`] or fails the whole request.
pub fn evaluate(
    inputs: &SeismicInputs,
    provider: &dyn SiteResponseProvider,
) -> SeismicResult<Report> {
    inputs.validate()?;

    let t = fundamental_period(inputs.h, inputs.structure_type);
    ensure_finite("fundamental period T", t)?;

    let site = provider.lookup(
        &inputs.fault_name,
        &inputs.location,
        &inputs.direction,
        inputs.distance_km,
    )?;
    site.validate()?;

    let spectra = DesignSpectra::from_site(&site);
    let demand = ShearDemandFactors::new(inputs.r, t);

    let k_moderate = calculate_k(inputs.i, spectra.sds, demand.fu_d, inputs.alpha_y)?;

    let x = demand.fu_m * spectra.sms;
    let correction = Correction::apply(x);

    // The maximum-level call divides by FuM squared while the collapse
    // formula divides by FuM itself; the asymmetry is part of the procedure.
    let k_maximum = calculate_k(
        inputs.i,
        correction.value,
        demand.fu_m * demand.fu_m,
        inputs.alpha_y,
    )?;
    let k_collapse_avoiding = calculate_k(inputs.i, correction.value, demand.fu_m, inputs.alpha_y)?;

    let k = KValues {
        k_min: K_MIN,
        k_moderate,
        k_maximum,
        k_collapse_avoiding,
    };
    ensure_finite("K_moderate", k.k_moderate)?;
    ensure_finite("K_maximum", k.k_maximum)?;
    ensure_finite("K_collapse_avoiding", k.k_collapse_avoiding)?;

    Ok(Report::assemble(inputs, t, &spectra, &demand, &correction, &k))
}

fn ensure_finite(name: &str, value: f64) -> SeismicResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SeismicError::Domain(format!(
            "non-finite intermediate {}: {}",
            name, value
        )))
    }
}
