//! Core building blocks for particle-based (super-droplet) cloud microphysics.
//!
//! # Module Organisation
//!
//! - [`si`]: the fixed SI unit scaling every quantity in the workspace uses
//! - [`constants`]: physical constants (molar masses, triple point offset, ...)
//! - [`formulae`]: named, swappable physics formulae (saturation vapour
//!   pressure, surface tension) resolved by [`formulae::Formulae`]
//! - [`spectra`]: continuous particle size distributions
//! - [`sampling`]: discretisation of a spectrum into super-droplets
//! - [`special`]: the error function and its inverse
//!
//! Quantities are plain `f64` values scaled by [`si`]; mixing in values from
//! another unit system is not detected.

pub mod constants;
pub mod errors;
pub mod formulae;
pub mod sampling;
pub mod si;
pub mod special;
pub mod spectra;

/// Floating point type used for all physical quantities.
pub type FloatValue = f64;
