//! Named physics formulae.
//!
//! Several processes have more than one accepted parameterisation. A
//! [`Formulae`] bundle fixes the choice for each of them once, from names
//! given in configuration, so that downstream code calls a single resolved
//! formula rather than branching on strings.
//!
//! ```
//! use droplets_core::formulae::{Formulae, SurfaceTension};
//!
//! let formulae = Formulae::with_surface_tension("CompressedFilm").unwrap();
//! assert_eq!(formulae.surface_tension, SurfaceTension::CompressedFilm);
//!
//! let pvs = formulae.saturation_vapour_pressure.pvs_celsius(20.0);
//! assert!((pvs - 2339.0).abs() < 5.0);
//!
//! assert!(Formulae::with_surface_tension("NoSuchModel").is_err());
//! ```

mod saturation_vapour_pressure;
mod surface_tension;

pub use saturation_vapour_pressure::SaturationVapourPressure;
pub use surface_tension::SurfaceTension;

use crate::errors::PhysicsResult;
use serde::{Deserialize, Serialize};

/// Names of the formulae to use for each process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaeOptions {
    /// Saturation vapour pressure formula.
    ///
    /// Default: "FlatauWalkoCotton"
    pub saturation_vapour_pressure: String,

    /// Surface tension model.
    ///
    /// Default: "CompressedFilm"
    pub surface_tension: String,
}

impl Default for FormulaeOptions {
    fn default() -> Self {
        Self {
            saturation_vapour_pressure: SaturationVapourPressure::default().to_string(),
            surface_tension: SurfaceTension::default().to_string(),
        }
    }
}

/// A resolved set of physics formulae.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Formulae {
    pub saturation_vapour_pressure: SaturationVapourPressure,
    pub surface_tension: SurfaceTension,
}

impl Formulae {
    /// Resolve every formula named in `options`.
    ///
    /// Fails with [`crate::errors::PhysicsError::UnknownFormula`] on the first
    /// name that does not match a known formula.
    pub fn new(options: &FormulaeOptions) -> PhysicsResult<Self> {
        let formulae = Self {
            saturation_vapour_pressure: options.saturation_vapour_pressure.parse()?,
            surface_tension: options.surface_tension.parse()?,
        };
        log::debug!(
            "Resolved formulae: saturation_vapour_pressure={}, surface_tension={}",
            formulae.saturation_vapour_pressure,
            formulae.surface_tension
        );
        Ok(formulae)
    }

    /// Default formulae with the surface tension model replaced.
    pub fn with_surface_tension(name: &str) -> PhysicsResult<Self> {
        Self::new(&FormulaeOptions {
            surface_tension: name.to_string(),
            ..FormulaeOptions::default()
        })
    }
}
