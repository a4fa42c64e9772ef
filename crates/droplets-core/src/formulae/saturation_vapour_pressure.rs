//! Saturation vapour pressure over a flat surface of liquid water.

use crate::errors::{PhysicsError, PhysicsResult};
use crate::si;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Polynomial coefficients of Flatau, Walko and Cotton (1992), liquid water,
/// ordered from the constant term upwards. Coefficient `n` has units hPa/°Cⁿ.
const FWC_COEFFICIENTS: [FloatValue; 9] = [
    6.115_836_990e0,
    0.444_606_896e0,
    0.143_177_157e-1,
    0.264_224_321e-3,
    0.299_291_081e-5,
    0.203_154_182e-7,
    0.702_620_698e-10,
    0.379_534_310e-13,
    -0.321_582_393e-15,
];

// August-Roche-Magnus (Alduchov and Eskridge 1996)
const ARM_C1: FloatValue = 6.1094 * si::hPa;
const ARM_C2: FloatValue = 17.625;
const ARM_C3: FloatValue = 243.04;

/// Formula used to evaluate the saturation vapour pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaturationVapourPressure {
    /// 8th order polynomial fit of Flatau et al. (1992), valid from -85 °C to 70 °C.
    #[default]
    FlatauWalkoCotton,
    /// August-Roche-Magnus exponential fit:
    ///
    /// $$p_{vs} = C_1 \exp\left(\frac{C_2 T}{T + C_3}\right)$$
    AugustRocheMagnus,
}

impl SaturationVapourPressure {
    pub const AVAILABLE: [&'static str; 2] = ["FlatauWalkoCotton", "AugustRocheMagnus"];

    /// Saturation vapour pressure (Pa) at a temperature given in degrees Celsius.
    pub fn pvs_celsius(&self, t: FloatValue) -> FloatValue {
        match self {
            Self::FlatauWalkoCotton => {
                FWC_COEFFICIENTS
                    .iter()
                    .rev()
                    .fold(0.0, |acc, c| c + acc * t)
                    * si::hPa
            }
            Self::AugustRocheMagnus => ARM_C1 * (ARM_C2 * t / (t + ARM_C3)).exp(),
        }
    }
}

impl fmt::Display for SaturationVapourPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FlatauWalkoCotton => "FlatauWalkoCotton",
            Self::AugustRocheMagnus => "AugustRocheMagnus",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SaturationVapourPressure {
    type Err = PhysicsError;

    fn from_str(s: &str) -> PhysicsResult<Self> {
        match s {
            "FlatauWalkoCotton" => Ok(Self::FlatauWalkoCotton),
            "AugustRocheMagnus" => Ok(Self::AugustRocheMagnus),
            _ => Err(PhysicsError::UnknownFormula {
                kind: "saturation vapour pressure",
                name: s.to_string(),
                available: Self::AVAILABLE.join(", "),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvs_at_freezing() {
        // Both fits agree with the triple point value of ~611 Pa
        for formula in [
            SaturationVapourPressure::FlatauWalkoCotton,
            SaturationVapourPressure::AugustRocheMagnus,
        ] {
            let pvs = formula.pvs_celsius(0.0);
            assert!((pvs - 611.0).abs() < 1.0, "{formula}: {pvs}");
        }
    }

    #[test]
    fn test_pvs_fits_agree() {
        for t in [-20.0, 0.0, 12.05, 25.0, 40.0] {
            let fwc = SaturationVapourPressure::FlatauWalkoCotton.pvs_celsius(t);
            let arm = SaturationVapourPressure::AugustRocheMagnus.pvs_celsius(t);
            assert!(
                (fwc - arm).abs() / fwc < 0.01,
                "t={t}: FWC={fwc}, ARM={arm}"
            );
        }
    }

    #[test]
    fn test_pvs_increases_with_temperature() {
        let formula = SaturationVapourPressure::default();
        let values: Vec<FloatValue> = (-40..=40)
            .map(|t| formula.pvs_celsius(t as FloatValue))
            .collect();
        assert!(values.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "AugustRocheMagnus".parse::<SaturationVapourPressure>().unwrap(),
            SaturationVapourPressure::AugustRocheMagnus
        );
        let err = "Tetens".parse::<SaturationVapourPressure>().unwrap_err();
        assert!(matches!(err, PhysicsError::UnknownFormula { .. }));
        assert!(err.to_string().contains("FlatauWalkoCotton"));
    }
}
