//! Seismic K - seismic design coefficient calculations
//!
//! This library computes the K design coefficients for a building from its
//! fault-distance context, site location, structural type/height and
//! ductility parameters, following a simplified code-based procedure:
//! - Fundamental period estimate from structure type and height
//! - Site response lookup (injected, table- or GIS-backed)
//! - Design/maximum spectral accelerations
//! - Shear demand factors and a piecewise correction rule
//! - The four K coefficients and a traced report
//!
//! ## Example
//! ```rust
//! use seismic_k::prelude::*;
//!
//! let inputs = SeismicInputs {
//!     fault_name: "F1".to_string(),
//!     distance_km: 12.0,
//!     location: "Site A".to_string(),
//!     direction: "X".to_string(),
//!     r: 4.5,
//!     i: 1.0,
//!     alpha_y: 3.0,
//!     structure_type: StructureType::ReinforcedConcrete,
//!     h: 50.0,
//! };
//!
//! let provider = FixedSiteResponse::reference();
//! let report = evaluate(&inputs, &provider).unwrap();
//!
//! assert_eq!(report.t_calculated, 1.316);
//! assert_eq!(report.k_values.k_min, 0.044);
//! ```

pub mod analysis;
pub mod error;
pub mod inputs;
pub mod results;
pub mod site;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::coefficients::{calculate_k, KValues, K_MIN};
    pub use crate::analysis::correction::{Correction, CorrectionRule};
    pub use crate::analysis::demand::ShearDemandFactors;
    pub use crate::analysis::evaluate;
    pub use crate::analysis::period::fundamental_period;
    pub use crate::analysis::spectra::DesignSpectra;
    pub use crate::error::{SeismicError, SeismicResult};
    pub use crate::inputs::{SeismicInputs, StructureType};
    pub use crate::results::{FormulaSteps, Report};
    pub use crate::site::{FixedSiteResponse, SiteResponseProvider, SiteSpectra};
}
