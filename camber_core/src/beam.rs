//! # Beam Geometry
//!
//! A [`Beam`] is one or two span lengths plus a [`Material`]. A zero
//! `secondary_span` means a single simply-supported span; a positive one
//! means a two-span continuous beam with total length
//! `primary_span + secondary_span`.
//!
//! Geometry is validated at construction so downstream arithmetic can assume
//! `primary_span > 0` and `secondary_span >= 0` and never divide by zero.

use serde::{Deserialize, Serialize};

use crate::errors::{CamberError, CamberResult};
use crate::materials::Material;
use crate::reactions::{self, Reactions};

/// Beam geometry plus material. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// First (or only) span length in metres; strictly positive
    primary_span: f64,
    /// Second span length in metres; zero for a single-span beam
    secondary_span: f64,
    /// Material the beam is made of
    material: Material,
}

impl Beam {
    /// Create a beam, validating the geometry.
    ///
    /// # Errors
    ///
    /// [`CamberError::InvalidGeometry`] when `primary_span <= 0`, when
    /// `secondary_span < 0`, or when either value is non-finite.
    pub fn new(primary_span: f64, secondary_span: f64, material: Material) -> CamberResult<Self> {
        if !primary_span.is_finite() || primary_span <= 0.0 {
            return Err(CamberError::invalid_geometry(
                "primary_span",
                primary_span,
                "a beam has at least one span; primary span must be positive and finite",
            ));
        }
        if !secondary_span.is_finite() || secondary_span < 0.0 {
            return Err(CamberError::invalid_geometry(
                "secondary_span",
                secondary_span,
                "secondary span must be zero (single span) or positive (two spans)",
            ));
        }
        Ok(Beam {
            primary_span,
            secondary_span,
            material,
        })
    }

    /// Convenience constructor for a single simply-supported span
    pub fn single_span(span: f64, material: Material) -> CamberResult<Self> {
        Beam::new(span, 0.0, material)
    }

    /// First (or only) span length (m)
    pub fn primary_span(&self) -> f64 {
        self.primary_span
    }

    /// Second span length (m); zero for a single-span beam
    pub fn secondary_span(&self) -> f64 {
        self.secondary_span
    }

    /// The beam's material
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// True when the beam has a second span (continuous over three supports)
    pub fn is_two_span(&self) -> bool {
        self.secondary_span > 0.0
    }

    /// Total beam length over all spans (m)
    pub fn total_length(&self) -> f64 {
        self.primary_span + self.secondary_span
    }

    /// Support reactions under a uniform load `w` (kN/m).
    ///
    /// Only defined for the two-span case; a single-span beam has the
    /// determinate end reactions `wL/2` and needs no solve.
    pub fn reactions(&self, w: f64) -> CamberResult<Reactions> {
        if !self.is_two_span() {
            return Err(CamberError::invalid_geometry(
                "secondary_span",
                self.secondary_span,
                "reaction solve applies to two-span beams only",
            ));
        }
        reactions::solve(w, self.primary_span, self.secondary_span)
    }
}
