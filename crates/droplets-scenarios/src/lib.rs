//! Published cloud microphysics experiments as ready-made parameter sets.
//!
//! Each scenario module exposes a `Settings` type that derives the initial
//! thermodynamic state and the sampled aerosol spectrum from a handful of
//! numerical knobs, plus a serde configuration struct so runs can be set up
//! from TOML.
//!
//! # Scenarios
//!
//! - [`lowe_et_al_2019`]: adiabatic parcel with surface-active organic aerosol
//!   (Lowe et al. 2019, Nature Communications 10, 5214)

pub mod errors;
pub mod lowe_et_al_2019;
