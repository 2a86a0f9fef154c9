//! # Unit Conventions
//!
//! Camber uses SI units throughout, chosen so the closed-form equations stay
//! in the numbers engineers actually quote:
//!
//! - Span lengths: metres (m)
//! - Distributed load: kilonewtons per metre (kN/m)
//! - Bending moment: kilonewton-metres (kN·m)
//! - Shear force / reactions: kilonewtons (kN)
//! - Deflection: millimetres (mm)
//!
//! Flexural rigidity `EI` is supplied in N·mm² — the product of E in N/mm²
//! and I in mm⁴, the form section tables quote — and is rescaled once to
//! kN·m² before use. Both conversions below are fixed constants of the unit
//! system, not tunables.

/// Converts flexural rigidity from N·mm² (as supplied) to kN·m².
///
/// 1 N·mm² = 1e-3 kN × 1e-6 m² = 1e-9 kN·m².
pub const KNM2_PER_NMM2: f64 = 1.0e-9;

/// Converts a length in metres to millimetres (deflection reporting).
pub const MM_PER_M: f64 = 1000.0;

/// Rescale a flexural rigidity quoted in N·mm² into kN·m².
pub fn ei_nmm2_to_knm2(ei_nmm2: f64) -> f64 {
    ei_nmm2 * KNM2_PER_NMM2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ei_rescale() {
        // E = 210000 N/mm², I = 2e7 mm⁴ -> EI = 4.2e12 N·mm² = 4200 kN·m²
        let ei = ei_nmm2_to_knm2(4.2e12);
        assert!((ei - 4200.0).abs() < 1e-9);
    }
}
