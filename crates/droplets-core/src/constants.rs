//! Physical constants.
//!
//! Values are expressed through [`crate::si`] so their units stay visible.

use crate::si;
use crate::FloatValue;

/// Offset between the Kelvin and Celsius scales (K).
pub const T0: FloatValue = 273.15 * si::K;

/// Avogadro constant (1/mol).
pub const N_A: FloatValue = 6.022_140_76e23 / si::mol;

/// Universal gas constant (J / mol K).
pub const R_STR: FloatValue = 8.314_462_618 * si::J / si::K / si::mol;

/// Molar mass of water vapour (kg/mol).
pub const MV: FloatValue = 18.015_3 * si::g / si::mol;

/// Molar mass of dry air (kg/mol).
pub const MD: FloatValue = 28.964_4 * si::g / si::mol;

/// Ratio of the molar masses of water vapour and dry air.
///
/// $$\epsilon = M_v / M_d \approx 0.622$$
pub const EPS: FloatValue = MV / MD;

/// Density of liquid water (kg/m³).
pub const RHO_W: FloatValue = 1.0 * si::g / (si::cm * si::cm * si::cm);

/// Molar volume of liquid water (m³/mol).
pub const NU_W: FloatValue = MV / RHO_W;

/// Surface tension of pure water (N/m).
pub const SGM_W: FloatValue = 0.072 * si::N / si::m;

// Compressed film model (Ovadnevaite et al. 2017)

/// Surface tension of a fully organic-covered droplet (N/m).
pub const SGM_ORG: FloatValue = 40.0 * si::mN / si::m;

/// Minimum thickness of the organic film (m).
pub const DELTA_MIN: FloatValue = 0.1 * si::nm;

// Szyszkowski-Langmuir equation of state (Ruehl et al. 2016)

/// Molar volume of the surfactant organic (m³/mol), for M = 280 g/mol and
/// a density of 1 g/cm³.
pub const RUEHL_NU_ORG: FloatValue =
    (280.0 * si::g / si::mol) / (1.0 * si::g / (si::cm * si::cm * si::cm));

/// Minimum area per organic molecule at the surface (m²).
pub const RUEHL_A0: FloatValue = 115e-20 * si::m * si::m;

/// Bulk organic mole fraction at which the surface is half covered.
pub const RUEHL_C0: FloatValue = 6e-7;
