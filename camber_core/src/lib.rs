//! # camber_core - Closed-Form Beam Analysis Engine
//!
//! `camber_core` computes the structural response (deflection, bending
//! moment, shear force) of a beam under a uniformly distributed load, for
//! two support conditions: a single simply-supported span and a two-span
//! continuous beam (equal or unequal spans).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the engine holds no per-call state; every equation it
//!   returns is a pure function of position
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Explicit inputs**: no ambient configuration — even the two-span
//!   deflection calibration factor is a query parameter
//!
//! ## Quick Start
//!
//! ```rust
//! use camber_core::{Beam, BeamAnalysisEngine, Material};
//! use camber_core::materials::EI;
//!
//! let material = Material::new("S355 IPE 200").with_property(EI, 4.08e12);
//! let beam = Beam::new(3.0, 5.0, material).unwrap();
//!
//! let engine = BeamAnalysisEngine::new();
//! let result = engine
//!     .get_shear_force(&beam, 10.0, "two-span-unequal")
//!     .unwrap();
//!
//! // Sample the bound equation anywhere along the beam
//! let point = result.equation.eval(1.5);
//! println!("V({}) = {:.2} kN", point.x, point.y);
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Query facade returning bound response equations
//! - [`analysis`] - Per-condition analyzers, equations, sampling types
//! - [`reactions`] - Two-span continuous-beam reaction solver
//! - [`beam`] - Beam geometry and validation
//! - [`materials`] - Material property bundles and presets
//! - [`units`] - Unit conventions and fixed conversion constants
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod beam;
pub mod engine;
pub mod errors;
pub mod materials;
pub mod reactions;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{Condition, Equation, Quantity, SamplePoint};
pub use beam::Beam;
pub use engine::{AnalysisResult, BeamAnalysisEngine};
pub use errors::{CamberError, CamberResult};
pub use materials::Material;
pub use reactions::Reactions;
