//! # Simply-Supported Span Analysis
//!
//! Closed-form response of a single simply-supported span under a full-length
//! uniform load.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down (so V = +wL/2 at the left
//!   support and crosses zero at midspan, where the moment peaks)
//! - Positive deflection: downward

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::units::MM_PER_M;

/// Response equations for one simply-supported span, bound to a load.
///
/// Holds only the captured span and load; every `*_at` method is a pure
/// function of `x`, so evaluation is safe to repeat or parallelize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplySupportedAnalyzer {
    /// Span length L (m)
    span: f64,
    /// Uniform load w (kN/m)
    load: f64,
}

impl SimplySupportedAnalyzer {
    /// Bind the analyzer to a beam and load.
    ///
    /// Only `primary_span` participates; a secondary span on the beam is
    /// ignored, matching the condition's single-span model.
    pub fn new(beam: &Beam, load: f64) -> Self {
        SimplySupportedAnalyzer {
            span: beam.primary_span(),
            load,
        }
    }

    /// Bending moment at `x` (kN·m): `M(x) = w·x·(L−x)/2`.
    ///
    /// Zero at both supports, maximum `wL²/8` at midspan.
    pub fn bending_moment_at(&self, x: f64) -> f64 {
        self.load * x * (self.span - x) / 2.0
    }

    /// Shear force at `x` (kN): `V(x) = w·(L/2 − x)`.
    pub fn shear_force_at(&self, x: f64) -> f64 {
        self.load * (self.span / 2.0 - x)
    }

    /// Deflection at `x` (mm), positive downward:
    /// `δ(x) = w·x·(L³ − 2L·x² + x³) / (24·EI)`.
    ///
    /// `ei_knm2` is the flexural rigidity already rescaled to kN·m², so the
    /// quotient is in metres; the result is reported in millimetres.
    pub fn deflection_at(&self, x: f64, ei_knm2: f64) -> f64 {
        let l = self.span;
        let metres =
            self.load * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * ei_knm2);
        metres * MM_PER_M
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

    fn analyzer(span: f64, load: f64) -> SimplySupportedAnalyzer {
        let material = Material::new("test").with_property(EI, 4.2e12);
        let beam = Beam::single_span(span, material).unwrap();
        SimplySupportedAnalyzer::new(&beam, load)
    }

    #[test]
    fn test_moment_boundary_and_midspan() {
        // L = 4 m, w = 10 kN/m: M(2) = wL²/8 = 20 kN·m
        let a = analyzer(4.0, 10.0);
        assert_eq!(a.bending_moment_at(0.0), 0.0);
        assert_eq!(a.bending_moment_at(4.0), 0.0);
        assert!(approx_eq(a.bending_moment_at(2.0), 20.0, 1e-12));
    }

    #[test]
    fn test_shear_endpoints_and_zero_crossing() {
        // V(0) = +wL/2 = 20 kN, V(L) = -20 kN, V(L/2) = 0
        let a = analyzer(4.0, 10.0);
        assert!(approx_eq(a.shear_force_at(0.0), 20.0, 1e-12));
        assert!(approx_eq(a.shear_force_at(4.0), -20.0, 1e-12));
        assert!(a.shear_force_at(2.0).abs() < 1e-12);
    }

    #[test]
    fn test_deflection_boundary_conditions() {
        let a = analyzer(4.0, 10.0);
        assert!(a.deflection_at(0.0, 4200.0).abs() < 1e-12);
        assert!(a.deflection_at(4.0, 4200.0).abs() < 1e-12);
    }

    #[test]
    fn test_deflection_midspan_value() {
        // δ_max = 5wL⁴/(384·EI) = 5·10·256/(384·4200) m = 7.9365 mm
        let a = analyzer(4.0, 10.0);
        let expected_mm = 5.0 * 10.0 * 4.0f64.powi(4) / (384.0 * 4200.0) * 1000.0;
        assert!(approx_eq(a.deflection_at(2.0, 4200.0), expected_mm, 1e-12));
    }

    #[test]
    fn test_secondary_span_ignored() {
        let material = Material::new("test").with_property(EI, 4.2e12);
        let two_span = Beam::new(4.0, 6.0, material).unwrap();
        let a = SimplySupportedAnalyzer::new(&two_span, 10.0);
        // Behaves as the 4 m single span
        assert!(approx_eq(a.bending_moment_at(2.0), 20.0, 1e-12));
    }
}
