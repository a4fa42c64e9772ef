use super::Spectrum;
use crate::errors::{PhysicsError, PhysicsResult};
use crate::special::{erf, erfinv};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, SQRT_2};

/// Lognormal size spectrum.
///
/// $$\frac{dN}{dr} = \frac{N}{r \ln\sigma_g \sqrt{2\pi}}
///     \exp\left(-\frac{\ln^2(r/r_m)}{2\ln^2\sigma_g}\right)$$
///
/// with norm factor $N$, mode $r_m$ and geometric standard deviation
/// $\sigma_g$.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lognormal {
    norm_factor: FloatValue,
    m_mode: FloatValue,
    s_geom: FloatValue,
}

impl Lognormal {
    /// Fails unless `norm_factor >= 0`, `m_mode > 0` and `s_geom > 1`.
    pub fn new(
        norm_factor: FloatValue,
        m_mode: FloatValue,
        s_geom: FloatValue,
    ) -> PhysicsResult<Self> {
        if !(norm_factor.is_finite() && norm_factor >= 0.0) {
            return Err(PhysicsError::InvalidParameter {
                name: "norm_factor",
                value: norm_factor,
                reason: "must be finite and non-negative",
            });
        }
        if !(m_mode.is_finite() && m_mode > 0.0) {
            return Err(PhysicsError::InvalidParameter {
                name: "m_mode",
                value: m_mode,
                reason: "must be finite and positive",
            });
        }
        if !(s_geom.is_finite() && s_geom > 1.0) {
            return Err(PhysicsError::InvalidParameter {
                name: "s_geom",
                value: s_geom,
                reason: "must be finite and greater than 1",
            });
        }
        Ok(Self {
            norm_factor,
            m_mode,
            s_geom,
        })
    }

    pub fn m_mode(&self) -> FloatValue {
        self.m_mode
    }

    pub fn s_geom(&self) -> FloatValue {
        self.s_geom
    }
}

impl Spectrum for Lognormal {
    fn norm_factor(&self) -> FloatValue {
        self.norm_factor
    }

    fn pdf(&self, x: FloatValue) -> FloatValue {
        if x <= 0.0 {
            return 0.0;
        }
        let ln_s = self.s_geom.ln();
        let z = (x / self.m_mode).ln() / ln_s;
        (-0.5 * z * z).exp() / (x * ln_s * (2.0 * PI).sqrt())
    }

    fn cdf(&self, x: FloatValue) -> FloatValue {
        if x <= 0.0 {
            return 0.0;
        }
        0.5 * (1.0 + erf((x / self.m_mode).ln() / (SQRT_2 * self.s_geom.ln())))
    }

    fn percentile(&self, q: FloatValue) -> FloatValue {
        if !(0.0..=1.0).contains(&q) {
            return FloatValue::NAN;
        }
        (self.m_mode.ln() + SQRT_2 * self.s_geom.ln() * erfinv(2.0 * q - 1.0)).exp()
    }
}
