//! # Condition Analyzers and Equations
//!
//! One analyzer per support condition, dispatched through a fixed interface
//! of three response quantities: deflection, bending moment, shear force.
//! Conditions are a closed enumeration; external condition identifiers
//! (e.g., from user input) resolve through [`Condition::from_name`], which is
//! where an unknown name surfaces as `UnsupportedCondition`.
//!
//! An [`Equation`] is the bound form the engine hands back to callers: a
//! condition analyzer captured together with the quantity to evaluate (and,
//! for deflection, the rescaled stiffness and calibration factor). Calling
//! [`Equation::eval`] is a pure function of `x` — same `x`, same result — so
//! callers may sample it at arbitrary positions, in any order, from any
//! thread.

pub mod simply_supported;
pub mod two_span;

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::errors::{CamberError, CamberResult};

pub use simply_supported::SimplySupportedAnalyzer;
pub use two_span::TwoSpanAnalyzer;

/// Supported beam support conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Single span on two end supports, free to rotate, no end moments
    SimplySupported,
    /// Two-span continuous beam on three supports; covers equal spans too
    TwoSpanUnequal,
}

impl Condition {
    /// All supported conditions, in display order
    pub const ALL: [Condition; 2] = [Condition::SimplySupported, Condition::TwoSpanUnequal];

    /// The external identifier for this condition
    pub fn name(&self) -> &'static str {
        match self {
            Condition::SimplySupported => "simply-supported",
            Condition::TwoSpanUnequal => "two-span-unequal",
        }
    }

    /// Resolve an external condition identifier.
    ///
    /// # Errors
    ///
    /// [`CamberError::UnsupportedCondition`] for any name outside the fixed
    /// enumeration.
    pub fn from_name(name: &str) -> CamberResult<Self> {
        Condition::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| CamberError::unsupported_condition(name))
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Condition {
    type Err = CamberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::from_name(s)
    }
}

/// The three response quantities an analyzer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    /// Vertical displacement (mm, positive downward)
    Deflection,
    /// Internal bending moment (kN·m)
    BendingMoment,
    /// Internal shear force (kN)
    ShearForce,
}

/// A condition analyzer bound to a beam and load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition")]
pub enum ConditionAnalyzer {
    SimplySupported(SimplySupportedAnalyzer),
    TwoSpanUnequal(TwoSpanAnalyzer),
}

impl ConditionAnalyzer {
    /// Build the analyzer for `condition`, bound to `beam` and `load`.
    pub fn bind(condition: Condition, beam: &Beam, load: f64) -> CamberResult<Self> {
        match condition {
            Condition::SimplySupported => Ok(ConditionAnalyzer::SimplySupported(
                SimplySupportedAnalyzer::new(beam, load),
            )),
            Condition::TwoSpanUnequal => Ok(ConditionAnalyzer::TwoSpanUnequal(
                TwoSpanAnalyzer::new(beam, load)?,
            )),
        }
    }

    fn bending_moment_at(&self, x: f64) -> f64 {
        match self {
            ConditionAnalyzer::SimplySupported(a) => a.bending_moment_at(x),
            ConditionAnalyzer::TwoSpanUnequal(a) => a.bending_moment_at(x),
        }
    }

    fn shear_force_at(&self, x: f64) -> f64 {
        match self {
            ConditionAnalyzer::SimplySupported(a) => a.shear_force_at(x),
            ConditionAnalyzer::TwoSpanUnequal(a) => a.shear_force_at(x),
        }
    }

    fn deflection_at(&self, x: f64, ei_knm2: f64, calibration: f64) -> f64 {
        match self {
            // Calibration is a two-span correction; the simple span takes none
            ConditionAnalyzer::SimplySupported(a) => a.deflection_at(x, ei_knm2),
            ConditionAnalyzer::TwoSpanUnequal(a) => a.deflection_at(x, ei_knm2, calibration),
        }
    }
}

/// One sampled point of a response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Position along the beam (m)
    pub x: f64,
    /// Response value at `x` (mm, kN·m, or kN depending on the quantity)
    pub y: f64,
}

/// A response equation bound to a beam and load, evaluable at arbitrary `x`.
///
/// Deflection equations additionally capture the rescaled flexural rigidity
/// and the calibration factor, resolved once when the engine builds the
/// equation; moment and shear never touch material properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "quantity")]
pub enum Equation {
    Deflection {
        analyzer: ConditionAnalyzer,
        /// Flexural rigidity in kN·m²
        ei_knm2: f64,
        /// External correction factor; 1.0 means uncalibrated
        calibration: f64,
    },
    BendingMoment {
        analyzer: ConditionAnalyzer,
    },
    ShearForce {
        analyzer: ConditionAnalyzer,
    },
}

impl Equation {
    /// Evaluate the equation at position `x` (m)
    pub fn eval(&self, x: f64) -> SamplePoint {
        let y = match self {
            Equation::Deflection {
                analyzer,
                ei_knm2,
                calibration,
            } => analyzer.deflection_at(x, *ei_knm2, *calibration),
            Equation::BendingMoment { analyzer } => analyzer.bending_moment_at(x),
            Equation::ShearForce { analyzer } => analyzer.shear_force_at(x),
        };
        SamplePoint { x, y }
    }

    /// The quantity this equation evaluates
    pub fn quantity(&self) -> Quantity {
        match self {
            Equation::Deflection { .. } => Quantity::Deflection,
            Equation::BendingMoment { .. } => Quantity::BendingMoment,
            Equation::ShearForce { .. } => Quantity::ShearForce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{Material, EI};

    #[test]
    fn test_condition_name_round_trip() {
        for condition in Condition::ALL {
            assert_eq!(Condition::from_name(condition.name()).unwrap(), condition);
        }
    }

    #[test]
    fn test_unknown_condition_name() {
        let err = Condition::from_name("nonexistent").unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONDITION");
        assert!("cantilever".parse::<Condition>().is_err());
    }

    #[test]
    fn test_equation_eval_is_deterministic() {
        let material = Material::new("test").with_property(EI, 4.2e12);
        let beam = Beam::single_span(4.0, material).unwrap();
        let analyzer = ConditionAnalyzer::bind(Condition::SimplySupported, &beam, 10.0).unwrap();
        let eq = Equation::BendingMoment { analyzer };

        let first = eq.eval(1.25);
        let second = eq.eval(1.25);
        assert_eq!(first, second);
        assert_eq!(first.x, 1.25);
        assert_eq!(eq.quantity(), Quantity::BendingMoment);
    }
}
