//! Request inputs and validation

use serde::{Deserialize, Serialize};

use crate::error::{SeismicError, SeismicResult};

/// Structural system classification used for period estimation.
///
/// Wire values "RC" and "Steel" map to their variants; any other value
/// deserializes to [`StructureType::Other`] and uses the default period
/// coefficient. That fallback is an explicit branch, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureType {
    /// Reinforced concrete frame
    #[serde(rename = "RC")]
    ReinforcedConcrete,
    /// Structural steel frame
    Steel,
    /// Any other / unclassified system
    #[serde(other)]
    Other,
}

impl StructureType {
    /// Wire code used in requests and formula traces
    pub fn code(&self) -> &'static str {
        match self {
            StructureType::ReinforcedConcrete => "RC",
            StructureType::Steel => "Steel",
            StructureType::Other => "Other",
        }
    }
}

/// Inputs for one K-value evaluation.
///
/// `R`, `I` and `H` keep their uppercase code-notation names on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeismicInputs {
    /// Controlling fault identifier
    pub fault_name: String,
    /// Distance to the fault in km
    pub distance_km: f64,
    /// Site location identifier
    pub location: String,
    /// Horizontal direction under evaluation (e.g. "X" or "Y")
    pub direction: String,
    /// Response modification factor
    #[serde(rename = "R")]
    pub r: f64,
    /// Importance factor
    #[serde(rename = "I")]
    pub i: f64,
    /// Yield / ductility factor
    pub alpha_y: f64,
    /// Structural system classification
    pub structure_type: StructureType,
    /// Building height in m
    #[serde(rename = "H")]
    pub h: f64,
}

impl SeismicInputs {
    /// Validate all fields before the calculation pipeline runs.
    ///
    /// The pipeline itself assumes validated inputs; every failure is caught
    /// here at the boundary. H <= 0 is a domain error (fractional power of a
    /// non-positive base), the remaining checks are input errors.
    pub fn validate(&self) -> SeismicResult<()> {
        if self.fault_name.trim().is_empty() {
            return Err(SeismicError::InvalidInput(
                "fault_name must not be empty".to_string(),
            ));
        }
        if self.location.trim().is_empty() {
            return Err(SeismicError::InvalidInput(
                "location must not be empty".to_string(),
            ));
        }
        if self.direction.trim().is_empty() {
            return Err(SeismicError::InvalidInput(
                "direction must not be empty".to_string(),
            ));
        }
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err(SeismicError::InvalidInput(format!(
                "distance_km must be positive, got {}",
                self.distance_km
            )));
        }
        if !self.r.is_finite() || self.r <= 0.0 {
            return Err(SeismicError::InvalidInput(format!(
                "R must be positive, got {}",
                self.r
            )));
        }
        if !self.i.is_finite() || self.i <= 0.0 {
            return Err(SeismicError::InvalidInput(format!(
                "I must be positive, got {}",
                self.i
            )));
        }
        if !self.alpha_y.is_finite() || self.alpha_y <= 0.0 {
            return Err(SeismicError::InvalidInput(format!(
                "alpha_y must be positive, got {}",
                self.alpha_y
            )));
        }
        if !self.h.is_finite() || self.h <= 0.0 {
            return Err(SeismicError::Domain(format!(
                "building height H must be positive, got {}",
                self.h
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> SeismicInputs {
        SeismicInputs {
            fault_name: "F1".to_string(),
            distance_km: 12.0,
            location: "Site A".to_string(),
            direction: "X".to_string(),
            r: 4.5,
            i: 1.0,
            alpha_y: 3.0,
            structure_type: StructureType::ReinforcedConcrete,
            h: 50.0,
        }
    }

    #[test]
    fn valid_inputs_pass() {
        assert!(valid_inputs().validate().is_ok());
    }

    #[test]
    fn non_positive_height_is_domain_error() {
        let mut inputs = valid_inputs();
        inputs.h = 0.0;
        assert!(matches!(
            inputs.validate(),
            Err(SeismicError::Domain(_))
        ));
    }

    #[test]
    fn zero_alpha_y_rejected() {
        let mut inputs = valid_inputs();
        inputs.alpha_y = 0.0;
        assert!(matches!(
            inputs.validate(),
            Err(SeismicError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_fault_name_rejected() {
        let mut inputs = valid_inputs();
        inputs.fault_name = " ".to_string();
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn structure_type_wire_codes() {
        let rc: StructureType = serde_json::from_str("\"RC\"").unwrap();
        assert_eq!(rc, StructureType::ReinforcedConcrete);
        let steel: StructureType = serde_json::from_str("\"Steel\"").unwrap();
        assert_eq!(steel, StructureType::Steel);
        // Unknown systems fall back rather than failing
        let other: StructureType = serde_json::from_str("\"Masonry\"").unwrap();
        assert_eq!(other, StructureType::Other);
    }

    #[test]
    fn inputs_deserialize_wire_names() {
        let json = r#"{
            "fault_name": "F1",
            "distance_km": 12.0,
            "location": "Site A",
            "direction": "X",
            "R": 4.5,
            "I": 1.0,
            "alpha_y": 3.0,
            "structure_type": "RC",
            "H": 50.0
        }"#;
        let inputs: SeismicInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.r, 4.5);
        assert_eq!(inputs.h, 50.0);
        assert_eq!(inputs.structure_type, StructureType::ReinforcedConcrete);
    }
}
