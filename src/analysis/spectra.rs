//! Design and maximum spectral accelerations

use serde::{Deserialize, Serialize};

use crate::site::SiteSpectra;

/// Spectral accelerations after site-coefficient adjustment.
///
/// `sd1` and `sm1` are derived alongside the short-period values even though
/// the K pipeline only consumes `sds` and `sms`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DesignSpectra {
    /// Design-level short-period spectral acceleration S_DS
    pub sds: f64,
    /// Design-level 1-second spectral acceleration S_D1
    pub sd1: f64,
    /// Maximum-level short-period spectral acceleration S_MS
    pub sms: f64,
    /// Maximum-level 1-second spectral acceleration S_M1
    pub sm1: f64,
}

impl DesignSpectra {
    /// Apply site coefficients to the raw spectral values.
    pub fn from_site(site: &SiteSpectra) -> Self {
        Self {
            sds: site.ssd * site.fad,
            sd1: site.sd1d * site.fvd,
            sms: site.ssm * site.fam,
            sm1: site.sd1m * site.fvm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unit_coefficients_pass_values_through() {
        let site = SiteSpectra {
            ssd: 0.55,
            sd1d: 0.26,
            ssm: 0.83,
            sd1m: 0.52,
            fad: 1.0,
            fvd: 1.0,
            fam: 1.0,
            fvm: 1.0,
        };
        let spectra = DesignSpectra::from_site(&site);
        assert_abs_diff_eq!(spectra.sds, 0.55, epsilon = 1e-12);
        assert_abs_diff_eq!(spectra.sm1, 0.52, epsilon = 1e-12);
    }

    #[test]
    fn site_coefficients_scale_each_value() {
        let site = SiteSpectra {
            ssd: 0.5,
            sd1d: 0.2,
            ssm: 0.8,
            sd1m: 0.4,
            fad: 1.2,
            fvd: 1.5,
            fam: 1.1,
            fvm: 1.4,
        };
        let spectra = DesignSpectra::from_site(&site);
        assert_abs_diff_eq!(spectra.sds, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(spectra.sd1, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(spectra.sms, 0.88, epsilon = 1e-12);
        assert_abs_diff_eq!(spectra.sm1, 0.56, epsilon = 1e-12);
    }
}
