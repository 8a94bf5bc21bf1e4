//! Fundamental period estimation

use crate::inputs::StructureType;

/// Estimate the fundamental period T from building height and structural
/// system: T = Ct * H^0.75.
///
/// Callers must have validated H > 0; the formula is undefined for a
/// non-positive height.
pub fn fundamental_period(h: f64, structure_type: StructureType) -> f64 {
    let ct = match structure_type {
        StructureType::ReinforcedConcrete => 0.07,
        StructureType::Steel => 0.085,
        StructureType::Other => 0.05,
    };
    ct * h.powf(0.75)
}
