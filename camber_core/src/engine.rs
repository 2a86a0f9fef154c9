//! # Beam Analysis Engine
//!
//! The facade the presentation layer talks to. A query names a beam, a load,
//! and a support condition; the engine resolves the condition, binds the
//! matching analyzer, and returns the beam, the load, and an [`Equation`]
//! the caller can sample at arbitrary positions.
//!
//! The engine holds no per-call state and no ambient configuration: the
//! two-span deflection calibration factor is an explicit parameter of
//! [`BeamAnalysisEngine::get_deflection`], never read from the environment.
//!
//! ## Example
//!
//! ```rust
//! use camber_core::beam::Beam;
//! use camber_core::engine::BeamAnalysisEngine;
//! use camber_core::materials::{Material, EI};
//!
//! let material = Material::new("S355 IPE 200").with_property(EI, 4.2e12);
//! let beam = Beam::single_span(4.0, material).unwrap();
//! let engine = BeamAnalysisEngine::new();
//!
//! let result = engine
//!     .get_bending_moment(&beam, 10.0, "simply-supported")
//!     .unwrap();
//! let midspan = result.equation.eval(2.0);
//! assert!((midspan.y - 20.0).abs() < 1e-9); // wL²/8
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::{Condition, ConditionAnalyzer, Equation};
use crate::beam::Beam;
use crate::errors::CamberResult;

/// Everything a query returns: the inputs echoed back plus the bound equation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The beam the equation is bound to
    pub beam: Beam,
    /// Uniform load magnitude (kN/m)
    pub load: f64,
    /// The bound response equation; sample with [`Equation::eval`]
    pub equation: Equation,
}

/// Facade selecting the analyzer for a requested condition and dispatching
/// one of the three response queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeamAnalysisEngine;

impl BeamAnalysisEngine {
    /// Create an engine. Stateless; a single instance can serve any number
    /// of queries from any number of threads.
    pub fn new() -> Self {
        BeamAnalysisEngine
    }

    /// Deflection equation for `beam` under `load` in `condition`.
    ///
    /// `calibration` is an externally supplied correction factor applied to
    /// the two-span deflection curve (pass 1.0 for uncalibrated); the
    /// simply-supported condition ignores it.
    ///
    /// # Errors
    ///
    /// `UnsupportedCondition` for an unknown condition name,
    /// `InvalidGeometry` when the condition does not fit the beam, and
    /// `MissingProperty` when the material lacks `EI`.
    pub fn get_deflection(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
        calibration: f64,
    ) -> CamberResult<AnalysisResult> {
        let condition = Condition::from_name(condition)?;
        let ei_knm2 = beam.material().ei_knm2()?;
        let analyzer = ConditionAnalyzer::bind(condition, beam, load)?;
        Ok(self.result(
            beam,
            load,
            Equation::Deflection {
                analyzer,
                ei_knm2,
                calibration,
            },
        ))
    }

    /// Bending moment equation for `beam` under `load` in `condition`.
    pub fn get_bending_moment(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> CamberResult<AnalysisResult> {
        let condition = Condition::from_name(condition)?;
        let analyzer = ConditionAnalyzer::bind(condition, beam, load)?;
        Ok(self.result(beam, load, Equation::BendingMoment { analyzer }))
    }

    /// Shear force equation for `beam` under `load` in `condition`.
    pub fn get_shear_force(
        &self,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> CamberResult<AnalysisResult> {
        let condition = Condition::from_name(condition)?;
        let analyzer = ConditionAnalyzer::bind(condition, beam, load)?;
        Ok(self.result(beam, load, Equation::ShearForce { analyzer }))
    }

    fn result(&self, beam: &Beam, load: f64, equation: Equation) -> AnalysisResult {
        AnalysisResult {
            beam: beam.clone(),
            load,
            equation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{Material, EI};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn material() -> Material {
        Material::new("test").with_property(EI, 4.2e12)
    }

    #[test]
    fn test_unknown_condition_fails_all_three_queries() {
        let engine = BeamAnalysisEngine::new();
        let beam = Beam::single_span(4.0, material()).unwrap();

        for result in [
            engine.get_deflection(&beam, 10.0, "nonexistent", 1.0),
            engine.get_bending_moment(&beam, 10.0, "nonexistent"),
            engine.get_shear_force(&beam, 10.0, "nonexistent"),
        ] {
            assert_eq!(result.unwrap_err().error_code(), "UNSUPPORTED_CONDITION");
        }
    }

    #[test]
    fn test_simply_supported_scenario() {
        // L = 4 m, w = 10 kN/m: M(2) = 20 kN·m, V(0) = 20 kN, V(4) = -20 kN
        let engine = BeamAnalysisEngine::new();
        let beam = Beam::single_span(4.0, material()).unwrap();

        let moment = engine
            .get_bending_moment(&beam, 10.0, "simply-supported")
            .unwrap();
        assert!(approx_eq(moment.equation.eval(2.0).y, 20.0, 1e-12));

        let shear = engine
            .get_shear_force(&beam, 10.0, "simply-supported")
            .unwrap();
        assert!(approx_eq(shear.equation.eval(0.0).y, 20.0, 1e-12));
        assert!(approx_eq(shear.equation.eval(4.0).y, -20.0, 1e-12));
    }

    #[test]
    fn test_two_span_scenario() {
        // L1 = 3, L2 = 5, w = 10: moment finite and continuous at x = 3
        let engine = BeamAnalysisEngine::new();
        let beam = Beam::new(3.0, 5.0, material()).unwrap();

        let moment = engine
            .get_bending_moment(&beam, 10.0, "two-span-unequal")
            .unwrap();
        let at_support = moment.equation.eval(3.0).y;
        assert!(at_support.is_finite());
        assert!(approx_eq(at_support, -23.75, 1e-9));
        let just_right = moment.equation.eval(3.0 + 1e-9).y;
        assert!((just_right - at_support).abs() < 1e-6);
    }

    #[test]
    fn test_two_span_requires_secondary_span() {
        let engine = BeamAnalysisEngine::new();
        let beam = Beam::single_span(4.0, material()).unwrap();
        let err = engine
            .get_bending_moment(&beam, 10.0, "two-span-unequal")
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_deflection_requires_ei() {
        let engine = BeamAnalysisEngine::new();
        let beam = Beam::single_span(4.0, Material::new("bare")).unwrap();
        let err = engine
            .get_deflection(&beam, 10.0, "simply-supported", 1.0)
            .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PROPERTY");

        // Moment and shear never touch EI
        assert!(engine.get_bending_moment(&beam, 10.0, "simply-supported").is_ok());
        assert!(engine.get_shear_force(&beam, 10.0, "simply-supported").is_ok());
    }

    #[test]
    fn test_result_echoes_inputs() {
        let engine = BeamAnalysisEngine::new();
        let beam = Beam::new(3.0, 5.0, material()).unwrap();
        let result = engine
            .get_deflection(&beam, 10.0, "two-span-unequal", 1.0)
            .unwrap();
        assert_eq!(result.beam, beam);
        assert_eq!(result.load, 10.0);
        assert_eq!(
            result.equation.quantity(),
            crate::analysis::Quantity::Deflection
        );
    }

    #[test]
    fn test_calibration_passes_through() {
        let engine = BeamAnalysisEngine::new();
        let beam = Beam::new(3.0, 5.0, material()).unwrap();

        let base = engine
            .get_deflection(&beam, 10.0, "two-span-unequal", 1.0)
            .unwrap();
        let doubled = engine
            .get_deflection(&beam, 10.0, "two-span-unequal", 2.0)
            .unwrap();
        let x = 1.5;
        assert!(approx_eq(
            doubled.equation.eval(x).y,
            2.0 * base.equation.eval(x).y,
            1e-12
        ));
    }
}
