//! Seismic K Example - reference scenario

use seismic_k::prelude::*;

fn main() {
    println!("=== Seismic K Example: 50 m RC frame ===\n");

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

    let provider = FixedSiteResponse::reference();
    let report = evaluate(&inputs, &provider).expect("evaluation failed");

    println!("Direction: {}", report.direction);
    println!("T = {} s", report.t_calculated);
    println!("K_min               = {}", report.k_values.k_min);
    println!("K_moderate          = {}", report.k_values.k_moderate);
    println!("K_maximum           = {}", report.k_values.k_maximum);
    println!("K_collapse_avoiding = {}", report.k_values.k_collapse_avoiding);
    println!();

    println!("Formula steps:");
    println!("  {}", report.formula_steps.t_formula);
    println!("  {}", report.formula_steps.fum_sam_rule);
    println!("  K_moderate: {}", report.formula_steps.k_moderate);
    println!("  K_collapse: {}", report.formula_steps.k_collapse);
    println!();

    let json = serde_json::to_string_pretty(&report).expect("serialization failed");
    println!("Report JSON:\n{}", json);
}
