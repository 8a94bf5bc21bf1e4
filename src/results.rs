//! Report types and assembly

use serde::{Deserialize, Serialize};

use crate::analysis::coefficients::KValues;
use crate::analysis::correction::Correction;
use crate::analysis::demand::ShearDemandFactors;
use crate::analysis::spectra::DesignSpectra;
use crate::inputs::SeismicInputs;

/// Round to 3 decimals for reporting. Internal math stays full precision;
/// only Report fields pass through here.
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Formula traces for the reported values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaSteps {
    /// Period estimate, e.g. "T = RC => 1.316 s"
    #[serde(rename = "T_formula")]
    pub t_formula: String,
    /// Which correction branch handled FuM * SMS
    #[serde(rename = "FuM_SaM_rule")]
    pub fum_sam_rule: String,
    /// Moderate-level K expression with its rounded operands
    #[serde(rename = "K_moderate")]
    pub k_moderate: String,
    /// Collapse-avoidance K expression with its rounded operands
    #[serde(rename = "K_collapse")]
    pub k_collapse: String,
}

/// Terminal output of one evaluation: rounded values plus formula traces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Direction the request evaluated ("X", "Y", ...)
    pub direction: String,
    /// Fundamental period in seconds, rounded to 3 decimals
    #[serde(rename = "T_calculated")]
    pub t_calculated: f64,
    /// The four K coefficients, each rounded to 3 decimals
    #[serde(rename = "K_values")]
    pub k_values: KValues,
    /// Human-readable derivation steps
    pub formula_steps: FormulaSteps,
}

impl Report {
    /// Package the pipeline outputs into the rounded report.
    pub fn assemble(
        inputs: &SeismicInputs,
        t: f64,
        spectra: &DesignSpectra,
        demand: &ShearDemandFactors,
        correction: &Correction,
        k: &KValues,
    ) -> Self {
        let formula_steps = FormulaSteps {
            t_formula: format!(
                "T = {} => {} s",
                inputs.structure_type.code(),
                round3(t)
            ),
            fum_sam_rule: correction.rule.label().to_string(),
            k_moderate: format!(
                "K = {} * ({} / {}) / (1.4 * {})",
                inputs.i,
                round3(spectra.sds),
                round3(demand.fu_d),
                inputs.alpha_y
            ),
            k_collapse: format!(
                "K = {} * ({} / {}) / (1.4 * {})",
                inputs.i,
                round3(correction.value),
                round3(demand.fu_m),
                inputs.alpha_y
            ),
        };

        Self {
            direction: inputs.direction.clone(),
            t_calculated: round3(t),
            k_values: KValues {
                k_min: round3(k.k_min),
                k_moderate: round3(k.k_moderate),
                k_maximum: round3(k.k_maximum),
                k_collapse_avoiding: round3(k.k_collapse_avoiding),
            },
            formula_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::correction::CorrectionRule;
    use crate::inputs::StructureType;

    fn sample_report() -> Report {
        let inputs = SeismicInputs {
            fault_name: "F1".to_string(),
            distance_km: 12.0,
            location: "Site A".to_string(),
            direction: "X".to_string(),
            r: 4.5,
            i: 1.0,
            alpha_y: 3.0,
            structure_type: StructureType::ReinforcedConcrete,
            h: 50.0,
        };
        let spectra = DesignSpectra {
            sds: 0.55,
            sd1: 0.26,
            sms: 0.83,
            sm1: 0.52,
        };
        let demand = ShearDemandFactors {
            fu_d: 5.35377,
            fu_m: 5.35377,
        };
        let correction = Correction {
            value: 3.110540,
            rule: CorrectionRule::Proportional,
        };
        let k = KValues {
            k_min: 0.044,
            k_moderate: 0.024460,
            k_maximum: 0.025838,
            k_collapse_avoiding: 0.138333,
        };
        Report::assemble(&inputs, 1.316211, &spectra, &demand, &correction, &k)
    }

    #[test]
    fn rounds_to_three_decimals() {
        let report = sample_report();
        assert_eq!(report.t_calculated, 1.316);
        assert_eq!(report.k_values.k_moderate, 0.024);
        assert_eq!(report.k_values.k_maximum, 0.026);
        assert_eq!(report.k_values.k_collapse_avoiding, 0.138);
    }

    #[test]
    fn formula_traces_embed_rounded_values() {
        let report = sample_report();
        assert_eq!(report.formula_steps.t_formula, "T = RC => 1.316 s");
        assert_eq!(report.formula_steps.fum_sam_rule, "corrected via 0.7x");
        assert_eq!(
            report.formula_steps.k_moderate,
            "K = 1 * (0.55 / 5.354) / (1.4 * 3)"
        );
        assert_eq!(
            report.formula_steps.k_collapse,
            "K = 1 * (3.111 / 5.354) / (1.4 * 3)"
        );
    }

    #[test]
    fn serializes_wire_field_names() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("T_calculated").is_some());
        assert!(json.get("K_values").unwrap().get("K_min").is_some());
        assert!(json
            .get("K_values")
            .unwrap()
            .get("K_collapse_avoiding")
            .is_some());
        assert!(json
            .get("formula_steps")
            .unwrap()
            .get("FuM_SaM_rule")
            .is_some());
    }
}
