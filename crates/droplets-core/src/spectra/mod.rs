//! Particle size spectra.
//!
//! A spectrum is a probability distribution over particle size scaled by a
//! norm factor (typically a number concentration), so that
//! [`Spectrum::size_distribution`] integrates to [`Spectrum::norm_factor`].

mod lognormal;

pub use lognormal::Lognormal;

use crate::FloatValue;
use std::fmt::Debug;

/// A normalised size distribution.
pub trait Spectrum: Debug + Send + Sync {
    /// Integral of the size distribution over all sizes.
    fn norm_factor(&self) -> FloatValue;

    /// Probability density at size `x`.
    fn pdf(&self, x: FloatValue) -> FloatValue;

    /// Cumulative distribution function at size `x`.
    fn cdf(&self, x: FloatValue) -> FloatValue;

    /// Size below which a fraction `q` of the distribution lies.
    ///
    /// Returns NaN for `q` outside `[0, 1]`.
    fn percentile(&self, q: FloatValue) -> FloatValue;

    /// Density scaled by the norm factor.
    fn size_distribution(&self, x: FloatValue) -> FloatValue {
        self.norm_factor() * self.pdf(x)
    }

    /// Cumulative distribution scaled by the norm factor.
    fn cumulative(&self, x: FloatValue) -> FloatValue {
        self.norm_factor() * self.cdf(x)
    }

    fn median(&self) -> FloatValue {
        self.percentile(0.5)
    }
}
