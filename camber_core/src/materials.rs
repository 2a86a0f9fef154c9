//! # Materials
//!
//! A material is a named bundle of physical properties keyed by short
//! property names. The engine looks properties up by key when an analyzer
//! needs them; construction does not validate the key set, because which
//! keys are required depends on the analysis requested (bending moment and
//! shear force need none, deflection needs [`EI`]).
//!
//! ## Property Keys
//!
//! - [`EI`] — flexural rigidity in N·mm² (E in N/mm² × I in mm⁴)
//! - [`GA`] — shear rigidity in N (G in N/mm² × A in mm²), optional
//!
//! ## Example
//!
//! ```rust
//! use camber_core::materials::{Material, EI};
//!
//! let steel = Material::new("S355 IPE 200").with_property(EI, 4.08e12);
//! assert!(steel.property(EI).is_some());
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CamberError, CamberResult};
use crate::units::ei_nmm2_to_knm2;

/// Property key: flexural rigidity E·I in N·mm²
pub const EI: &str = "EI";

/// Property key: shear rigidity G·A in N
pub const GA: &str = "GA";

/// A named, immutable bundle of physical properties.
///
/// Built once by the caller and treated as read-only afterwards; the engine
/// never mutates it, so sharing across threads is safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name (e.g., "S355 IPE 200")
    pub name: String,
    /// Physical properties keyed by short name (see [`EI`], [`GA`])
    pub properties: BTreeMap<String, f64>,
}

impl Material {
    /// Create a material with no properties
    pub fn new(name: impl Into<String>) -> Self {
        Material {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property insertion
    pub fn with_property(mut self, key: impl Into<String>, value: f64) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Look up a property by key
    pub fn property(&self, key: &str) -> Option<f64> {
        self.properties.get(key).copied()
    }

    /// Flexural rigidity in kN·m², rescaled from the supplied N·mm² value.
    ///
    /// Errors with [`CamberError::MissingProperty`] when the material was
    /// built without an [`EI`] entry, and with
    /// [`CamberError::InvalidGeometry`]-style rejection of non-positive
    /// values, which would otherwise surface as non-finite deflections.
    pub fn ei_knm2(&self) -> CamberResult<f64> {
        let ei = self
            .property(EI)
            .ok_or_else(|| CamberError::missing_property(&self.name, EI))?;
        if ei <= 0.0 || !ei.is_finite() {
            return Err(CamberError::invalid_geometry(
                EI,
                ei,
                "flexural rigidity must be positive and finite",
            ));
        }
        Ok(ei_nmm2_to_knm2(ei))
    }
}

/// Built-in preset materials, keyed by name.
///
/// Small convenience catalog for the CLI and for tests; EI/GA values are
/// precomputed from published section properties.
static PRESETS: Lazy<BTreeMap<&'static str, Material>> = Lazy::new(|| {
    let mut map = BTreeMap::new();
    // E = 210000 N/mm², I = 1.943e7 mm⁴; G = 81000 N/mm², A = 2850 mm²
    map.insert(
        "S355 IPE 200",
        Material::new("S355 IPE 200")
            .with_property(EI, 4.08e12)
            .with_property(GA, 2.31e8),
    );
    // C24 timber 100x200: E = 11000 N/mm², I = bd³/12 = 6.667e7 mm⁴
    map.insert(
        "C24 100x200",
        Material::new("C24 100x200")
            .with_property(EI, 7.33e11)
            .with_property(GA, 1.38e7),
    );
    map
});

/// Look up a preset material by name
pub fn preset(name: &str) -> Option<Material> {
    PRESETS.get(name).cloned()
}

/// Names of all built-in presets
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let mat = Material::new("test").with_property(EI, 4.2e12);
        assert_eq!(mat.property(EI), Some(4.2e12));
        assert_eq!(mat.property(GA), None);
    }

    #[test]
    fn test_ei_rescaled_to_knm2() {
        let mat = Material::new("test").with_property(EI, 4.2e12);
        let ei = mat.ei_knm2().unwrap();
        assert!((ei - 4200.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_ei_is_an_error() {
        let mat = Material::new("bare");
        let err = mat.ei_knm2().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PROPERTY");
    }

    #[test]
    fn test_nonpositive_ei_rejected() {
        let mat = Material::new("degenerate").with_property(EI, 0.0);
        let err = mat.ei_knm2().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_presets_exist() {
        let steel = preset("S355 IPE 200").unwrap();
        assert!(steel.ei_knm2().is_ok());
        assert!(preset_names().contains(&"C24 100x200"));
        assert!(preset("unobtainium").is_none());
    }
}
