//! # Two-Span Continuous Beam Analysis
//!
//! Closed-form response of a two-span continuous beam (three rigid supports)
//! under a full-length uniform load, driven by the solved support reactions.
//! Equal and unequal spans share this one formula set; `l1 == l2` is just a
//! boundary case, not a separate code path.
//!
//! Moment and shear are piecewise in `x` with the interior support at
//! `x = l1`: moment is continuous there (both branches evaluate to `m1`),
//! while shear jumps by exactly `r2`. Boundary points `x = 0`, `x = l1`,
//! `x = l1 + l2` are ordinary evaluation points; the left-branch formula owns
//! `x = l1`.
//!
//! Deflection comes from per-span double integration. Within each span the
//! curve is the superposition of the simple-span uniform-load term and the
//! correction for the interior-support moment `m1`; span 2 is evaluated in a
//! mirrored coordinate measured from the right support. Displacement is zero
//! at all three supports.

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::errors::CamberResult;
use crate::reactions::Reactions;
use crate::units::MM_PER_M;

/// Response equations for a two-span continuous beam, bound to a load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSpanAnalyzer {
    /// First span length (m)
    l1: f64,
    /// Second span length (m)
    l2: f64,
    /// Uniform load w (kN/m)
    load: f64,
    /// Solved support reactions for this load
    reactions: Reactions,
}

impl TwoSpanAnalyzer {
    /// Bind the analyzer to a beam and load, solving the reactions.
    ///
    /// # Errors
    ///
    /// [`crate::errors::CamberError::InvalidGeometry`] when the beam has no
    /// secondary span (`secondary_span <= 0`).
    pub fn new(beam: &Beam, load: f64) -> CamberResult<Self> {
        let reactions = beam.reactions(load)?;
        Ok(TwoSpanAnalyzer {
            l1: beam.primary_span(),
            l2: beam.secondary_span(),
            load,
            reactions,
        })
    }

    /// The solved support reactions
    pub fn reactions(&self) -> Reactions {
        self.reactions
    }

    /// Bending moment at `x` (kN·m).
    ///
    /// `r1·x − w·x²/2` up to the interior support, then the `r2` term joins.
    /// Positions beyond the beam return 0.
    pub fn bending_moment_at(&self, x: f64) -> f64 {
        let w = self.load;
        let r = self.reactions;
        if x <= self.l1 {
            r.r1 * x - w * x * x / 2.0
        } else if x <= self.l1 + self.l2 {
            r.r1 * x + r.r2 * (x - self.l1) - w * x * x / 2.0
        } else {
            0.0
        }
    }

    /// Shear force at `x` (kN), with a jump of exactly `r2` at `x = l1`.
    ///
    /// Positions beyond the beam return 0.
    pub fn shear_force_at(&self, x: f64) -> f64 {
        let w = self.load;
        let r = self.reactions;
        if x <= self.l1 {
            r.r1 - w * x
        } else if x <= self.l1 + self.l2 {
            r.r1 + r.r2 - w * x
        } else {
            0.0
        }
    }

    /// Deflection at `x` (mm), positive downward.
    ///
    /// Each span is integrated as a simple span carrying the uniform load
    /// plus the interior-support moment `m1` at its inner end; with `t`
    /// measured from the span's outer support and `s` the span length:
    ///
    /// ```text
    /// δ(t)·EI = w·t·(s³ − 2s·t² + t³)/24 + m1·t·(s² − t²)/(6·s)
    /// ```
    ///
    /// `calibration` is an externally supplied correction factor multiplied
    /// into the final value; pass 1.0 for the uncalibrated curve.
    pub fn deflection_at(&self, x: f64, ei_knm2: f64, calibration: f64) -> f64 {
        let total = self.l1 + self.l2;
        if x < 0.0 || x > total {
            return 0.0;
        }
        // (span length, distance from that span's outer support)
        let (s, t) = if x <= self.l1 {
            (self.l1, x)
        } else {
            (self.l2, total - x)
        };
        let w = self.load;
        let uniform = w * t * (s.powi(3) - 2.0 * s * t * t + t.powi(3)) / 24.0;
        let hogging = self.reactions.m1 * t * (s * s - t * t) / (6.0 * s);
        (uniform + hogging) / ei_knm2 * MM_PER_M * calibration
    }
}
