//! Parameter sets for particle-based cloud microphysics scenarios.
//!
//! This crate bundles the workspace members:
//!
//! - [`physics`]: units, constants, formulae, size spectra and spectral sampling
//! - [`scenarios`]: published experiments expressed as `Settings` types
//!
//! With the `python` feature enabled the crate also builds the `_lib`
//! extension module exposing the scenarios to Python.

pub use droplets_core as physics;
pub use droplets_scenarios as scenarios;
pub use ndarray;

#[cfg(feature = "python")]
pub mod python;
