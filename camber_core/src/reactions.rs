//! # Two-Span Reaction Solver
//!
//! Support reactions for a two-span continuous beam on three rigid supports,
//! uniformly loaded over both spans. The beam is statically indeterminate to
//! the first degree; the three-moment (continuity) method collapses to a
//! closed form for the hogging moment at the shared support:
//!
//! ```text
//! M1 = -(w·L1³ + w·L2³) / (8·(L1 + L2))
//! ```
//!
//! End reactions follow from single-span equilibrium of each span treating
//! M1 as an applied end moment, and the middle reaction closes global
//! vertical equilibrium. Equal spans are just the boundary case L1 == L2 of
//! the same formulas (reducing to the textbook M1 = -wL²/8, R2 = 1.25·wL).

use serde::{Deserialize, Serialize};

use crate::errors::{CamberError, CamberResult};

/// Support reactions for a two-span continuous beam.
///
/// Sign conventions: reactions positive upward (kN); `m1` is the internal
/// bending moment over the shared support (kN·m), negative for hogging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Bending moment at the shared middle support (kN·m)
    pub m1: f64,
    /// Vertical reaction at the left end support (kN)
    pub r1: f64,
    /// Vertical reaction at the shared middle support (kN)
    pub r2: f64,
    /// Vertical reaction at the right end support (kN)
    pub r3: f64,
}

/// Solve for the reactions of a two-span continuous beam under a uniform
/// load `w` (kN/m) over both spans `l1` and `l2` (m).
///
/// Vertical equilibrium `r1 + r2 + r3 == w·(l1 + l2)` holds to floating-point
/// rounding for any `l1, l2 > 0` and any `w`. A zero or negative span would
/// divide by zero, so it is rejected as [`CamberError::InvalidGeometry`]
/// rather than propagating non-finite reactions.
pub fn solve(w: f64, l1: f64, l2: f64) -> CamberResult<Reactions> {
    if l1 <= 0.0 {
        return Err(CamberError::invalid_geometry(
            "primary_span",
            l1,
            "two-span analysis requires a positive primary span",
        ));
    }
    if l2 <= 0.0 {
        return Err(CamberError::invalid_geometry(
            "secondary_span",
            l2,
            "two-span analysis requires a positive secondary span",
        ));
    }

    let m1 = -(w * l1.powi(3) + w * l2.powi(3)) / (8.0 * (l1 + l2));
    let r1 = m1 / l1 + w * l1 / 2.0;
    let r3 = m1 / l2 + w * l2 / 2.0;
    let r2 = w * (l1 + l2) - r1 - r3;

    Ok(Reactions { m1, r1, r2, r3 })
}
