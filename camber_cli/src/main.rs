//! # Camber CLI
//!
//! Terminal demo client for the camber beam analysis engine. Prompts for
//! geometry, load, and support condition, then samples the returned response
//! equations over the span domain at a fixed step — the same way a plotting
//! front end would consume them — and prints the diagrams as a table plus a
//! JSON dump of the sampled points.

use std::io::{self, BufRead, Write};

use camber_core::analysis::SamplePoint;
use camber_core::materials::{self, EI};
use camber_core::{Beam, BeamAnalysisEngine, CamberResult, Condition, Material};

/// Sampling step along the beam, in metres
const SAMPLE_STEP_M: f64 = 0.25;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sample an equation from 0 to `total` inclusive at [`SAMPLE_STEP_M`]
fn sample(equation: &camber_core::Equation, total: f64) -> Vec<SamplePoint> {
    let steps = (total / SAMPLE_STEP_M).ceil() as usize;
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let x = (i as f64 * SAMPLE_STEP_M).min(total);
        points.push(equation.eval(x));
    }
    points
}

fn run() -> CamberResult<()> {
    println!("Camber - Beam Analysis (uniform load)");
    println!("=====================================");
    println!();
    println!("Supported conditions:");
    for condition in Condition::ALL {
        println!("  - {}", condition);
    }
    println!("Preset materials: {}", materials::preset_names().join(", "));
    println!();

    let primary = prompt_f64("Primary span (m) [4.0]: ", 4.0);
    let secondary = prompt_f64("Secondary span (m), 0 for single span [0.0]: ", 0.0);
    let load = prompt_f64("Uniform load w (kN/m) [10.0]: ", 10.0);
    let default_condition = if secondary > 0.0 {
        "two-span-unequal"
    } else {
        "simply-supported"
    };
    let condition = prompt_str(
        &format!("Condition [{}]: ", default_condition),
        default_condition,
    );
    let material_name = prompt_str("Material [S355 IPE 200]: ", "S355 IPE 200");
    let material = match materials::preset(&material_name) {
        Some(m) => m,
        None => {
            let ei = prompt_f64("EI (N·mm²) [4.08e12]: ", 4.08e12);
            Material::new(material_name).with_property(EI, ei)
        }
    };
    let calibration = prompt_f64("Two-span deflection calibration [1.0]: ", 1.0);

    let beam = Beam::new(primary, secondary, material)?;
    let engine = BeamAnalysisEngine::new();

    let deflection = engine.get_deflection(&beam, load, &condition, calibration)?;
    let moment = engine.get_bending_moment(&beam, load, &condition)?;
    let shear = engine.get_shear_force(&beam, load, &condition)?;

    // Sampling domain: the simply-supported condition models the primary
    // span only, so don't sample into an ignored secondary span.
    let domain = match condition.parse::<Condition>()? {
        Condition::SimplySupported => beam.primary_span(),
        Condition::TwoSpanUnequal => beam.total_length(),
    };

    let deflection_points = sample(&deflection.equation, domain);
    let moment_points = sample(&moment.equation, domain);
    let shear_points = sample(&shear.equation, domain);

    println!();
    println!("════════════════════════════════════════════════");
    println!("  x (m)      δ (mm)      M (kN·m)      V (kN)");
    println!("════════════════════════════════════════════════");
    for ((d, m), v) in deflection_points
        .iter()
        .zip(&moment_points)
        .zip(&shear_points)
    {
        println!("{:7.2} {:11.3} {:12.3} {:11.3}", d.x, d.y, m.y, v.y);
    }
    println!("════════════════════════════════════════════════");

    if beam.is_two_span() {
        let r = beam.reactions(load)?;
        println!();
        println!("Reactions:");
        println!("  M1 = {:.3} kN·m", r.m1);
        println!("  R1 = {:.3} kN, R2 = {:.3} kN, R3 = {:.3} kN", r.r1, r.r2, r.r3);
        println!("  ΣR = {:.3} kN (w·L = {:.3})", r.r1 + r.r2 + r.r3, load * beam.total_length());
    }

    println!();
    println!("JSON output (deflection samples):");
    if let Ok(json) = serde_json::to_string_pretty(&deflection_points) {
        println!("{}", json);
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
