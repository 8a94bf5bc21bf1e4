//! Site response spectra and the lookup collaborator

use serde::{Deserialize, Serialize};

use crate::error::{SeismicError, SeismicResult};

/// Raw spectral values and site coefficients for one site context.
///
/// All values depend only on the fault / location / direction / distance
/// context, never on the structure being evaluated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SiteSpectra {
    /// Design-level short-period spectral value S_SD
    pub ssd: f64,
    /// Design-level 1-second spectral value S_1D
    pub sd1d: f64,
    /// Maximum-level short-period spectral value S_SM
    pub ssm: f64,
    /// Maximum-level 1-second spectral value S_1M
    pub sd1m: f64,
    /// Design-level short-period site coefficient Fa
    pub fad: f64,
    /// Design-level 1-second site coefficient Fv
    pub fvd: f64,
    /// Maximum-level short-period site coefficient Fa
    pub fam: f64,
    /// Maximum-level 1-second site coefficient Fv
    pub fvm: f64,
}

impl SiteSpectra {
    /// Check that every spectral value and site coefficient is a positive,
    /// finite number. Provider output passes through here before it enters
    /// the pipeline.
    pub fn validate(&self) -> SeismicResult<()> {
        let fields = [
            ("SSD", self.ssd),
            ("SD1D", self.sd1d),
            ("SSM", self.ssm),
            ("SD1M", self.sd1m),
            ("FaD", self.fad),
            ("FvD", self.fvd),
            ("FaM", self.fam),
            ("FvM", self.fvm),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SeismicError::Domain(format!(
                    "site spectra value {} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Site-response lookup keyed by fault, location, direction and distance.
///
/// Implementations are expected to be synchronous, idempotent and
/// side-effect free. Real implementations resolve against hazard tables or
/// GIS data; [`FixedSiteResponse`] ships as the reference configuration.
pub trait SiteResponseProvider {
    fn lookup(
        &self,
        fault_name: &str,
        location: &str,
        direction: &str,
        distance_km: f64,
    ) -> SeismicResult<SiteSpectra>;
}

/// Provider returning one fixed set of spectra regardless of arguments.
#[derive(Debug, Clone)]
pub struct FixedSiteResponse {
    spectra: SiteSpectra,
}

impl FixedSiteResponse {
    pub fn new(spectra: SiteSpectra) -> Self {
        Self { spectra }
    }

    /// Reference constants: SSD=0.55, SD1D=0.26, SSM=0.83, SD1M=0.52,
    /// all site coefficients 1.0.
    pub fn reference() -> Self {
        Self::new(SiteSpectra {
            ssd: 0.55,
            sd1d: 0.26,
            ssm: 0.83,
            sd1m: 0.52,
            fad: 1.0,
            fvd: 1.0,
            fam: 1.0,
            fvm: 1.0,
        })
    }
}

impl Default for FixedSiteResponse {
    fn default() -> Self {
        Self::reference()
    }
}

impl SiteResponseProvider for FixedSiteResponse {
    fn lookup(
        &self,
        _fault_name: &str,
        _location: &str,
        _direction: &str,
        _distance_km: f64,
    ) -> SeismicResult<SiteSpectra> {
        Ok(self.spectra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_spectra_values() {
        let provider = FixedSiteResponse::reference();
        let spectra = provider.lookup("F1", "Site A", "X", 10.0).unwrap();
        assert_eq!(spectra.ssd, 0.55);
        assert_eq!(spectra.sd1m, 0.52);
        assert_eq!(spectra.fvm, 1.0);
        assert!(spectra.validate().is_ok());
    }

    #[test]
    fn lookup_ignores_arguments() {
        let provider = FixedSiteResponse::reference();
        let a = provider.lookup("F1", "Site A", "X", 1.0).unwrap();
        let b = provider.lookup("F2", "Site B", "Y", 99.0).unwrap();
        assert_eq!(a.ssm, b.ssm);
    }

    #[test]
    fn non_positive_spectra_rejected() {
        let mut spectra = FixedSiteResponse::reference().spectra;
        spectra.fam = 0.0;
        assert!(spectra.validate().is_err());
    }
}
