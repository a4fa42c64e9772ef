//! Spectral sampling: discretising a size spectrum into super-droplets.
//!
//! A strategy turns a continuous [`Spectrum`] into `n_sd` representative sizes
//! and the number of particles each of them stands for. Strategies are
//! serialisable trait objects so that configuration files can select one by
//! name:
//!
//! ```
//! use droplets_core::sampling::SpectralSampling;
//! use droplets_core::spectra::Lognormal;
//!
//! let strategy: Box<dyn SpectralSampling> =
//!     serde_json::from_str(r#"{"strategy": "Logarithmic"}"#).unwrap();
//! let spectrum = Lognormal::new(1e8, 0.04e-6, 2.0).unwrap();
//! let (radii, concentrations) = strategy.sample(&spectrum, 32).unwrap();
//! assert_eq!(radii.len(), 32);
//! assert_eq!(concentrations.len(), 32);
//! ```

use crate::errors::{PhysicsError, PhysicsResult};
use crate::spectra::Spectrum;
use crate::FloatValue;
use ndarray::{s, Array1};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Cumulative probabilities bounding the sampled size range when a strategy
/// is not given one explicitly.
pub const DEFAULT_CDF_RANGE: (FloatValue, FloatValue) = (0.00001, 0.99999);

/// Seed used by [`UniformRandom`] unless one is given.
pub const DEFAULT_RANDOM_SEED: u64 = 44;

/// Representative sizes paired with the number of particles each represents.
pub type SpectralSample = (Array1<FloatValue>, Array1<FloatValue>);

/// Lower and upper bound of the sampled sizes.
pub type SizeRange = (FloatValue, FloatValue);

/// Discretisation of a spectrum into a fixed number of super-droplets.
#[typetag::serde(tag = "strategy")]
pub trait SpectralSampling: Debug + Send + Sync {
    /// Sample `n_sd` sizes from `spectrum`.
    ///
    /// Both returned arrays have length `n_sd`.
    fn sample(&self, spectrum: &dyn Spectrum, n_sd: usize) -> PhysicsResult<SpectralSample>;
}

/// Default strategy: [`Logarithmic`] over the default size range.
pub fn default_spectral_sampling() -> Box<dyn SpectralSampling> {
    Box::new(Logarithmic::default())
}

/// Look up a strategy by name, using its default settings.
pub fn spectral_sampling_from_name(name: &str) -> PhysicsResult<Box<dyn SpectralSampling>> {
    match name {
        "Linear" => Ok(Box::new(Linear::default())),
        "Logarithmic" => Ok(Box::new(Logarithmic::default())),
        "ConstantMultiplicity" => Ok(Box::new(ConstantMultiplicity::default())),
        "UniformRandom" => Ok(Box::new(UniformRandom::default())),
        _ => Err(PhysicsError::UnknownFormula {
            kind: "spectral sampling",
            name: name.to_string(),
            available: "Linear, Logarithmic, ConstantMultiplicity, UniformRandom".to_string(),
        }),
    }
}

fn check_sample_count(n_sd: usize) -> PhysicsResult<()> {
    if n_sd == 0 {
        return Err(PhysicsError::InvalidSampleCount(n_sd));
    }
    Ok(())
}

/// Explicit size range if given, otherwise the spectrum percentiles at
/// [`DEFAULT_CDF_RANGE`].
fn resolve_size_range(
    size_range: Option<SizeRange>,
    spectrum: &dyn Spectrum,
) -> PhysicsResult<SizeRange> {
    let (lo, hi) = size_range.unwrap_or_else(|| {
        (
            spectrum.percentile(DEFAULT_CDF_RANGE.0),
            spectrum.percentile(DEFAULT_CDF_RANGE.1),
        )
    });
    if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && hi > lo) {
        return Err(PhysicsError::InvalidSizeRange(lo, hi));
    }
    log::trace!("Sampling size range: ({lo:e}, {hi:e})");
    Ok((lo, hi))
}

/// Values are the odd grid points; each weight is the number of particles
/// between the neighbouring even grid points.
fn sample_grid(
    grid: &Array1<FloatValue>,
    spectrum: &dyn Spectrum,
) -> PhysicsResult<SpectralSample> {
    let values = grid.slice(s![1..-1;2]).to_owned();
    let cdf = grid.slice(s![..;2]).mapv(|x| spectrum.cumulative(x));
    let weights = &cdf.slice(s![1..]) - &cdf.slice(s![..-1]);
    ensure_finite(values, weights)
}

fn ensure_finite(
    values: Array1<FloatValue>,
    weights: Array1<FloatValue>,
) -> PhysicsResult<SpectralSample> {
    if !values.iter().chain(weights.iter()).all(|v| v.is_finite()) {
        return Err(PhysicsError::SamplingFailed(
            "non-finite sizes or concentrations".to_string(),
        ));
    }
    Ok((values, weights))
}

/// Equally spaced sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Linear {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_range: Option<SizeRange>,
}

#[typetag::serde]
impl SpectralSampling for Linear {
    fn sample(&self, spectrum: &dyn Spectrum, n_sd: usize) -> PhysicsResult<SpectralSample> {
        check_sample_count(n_sd)?;
        let (lo, hi) = resolve_size_range(self.size_range, spectrum)?;
        sample_grid(&Array1::linspace(lo, hi, 2 * n_sd + 1), spectrum)
    }
}

/// Sizes equally spaced in logarithm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logarithmic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_range: Option<SizeRange>,
}

#[typetag::serde]
impl SpectralSampling for Logarithmic {
    fn sample(&self, spectrum: &dyn Spectrum, n_sd: usize) -> PhysicsResult<SpectralSample> {
        check_sample_count(n_sd)?;
        let (lo, hi) = resolve_size_range(self.size_range, spectrum)?;
        let grid = Array1::logspace(10.0, lo.log10(), hi.log10(), 2 * n_sd + 1);
        sample_grid(&grid, spectrum)
    }
}

/// Sizes chosen so that every super-droplet represents the same number of
/// particles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantMultiplicity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_range: Option<SizeRange>,
}

#[typetag::serde]
impl SpectralSampling for ConstantMultiplicity {
    fn sample(&self, spectrum: &dyn Spectrum, n_sd: usize) -> PhysicsResult<SpectralSample> {
        check_sample_count(n_sd)?;
        let (lo, hi) = resolve_size_range(self.size_range, spectrum)?;
        let cdf_range = (spectrum.cumulative(lo), spectrum.cumulative(hi));
        if !(0.0 < cdf_range.0 && cdf_range.0 < cdf_range.1) {
            return Err(PhysicsError::SamplingFailed(format!(
                "spectrum has no mass in size range ({lo:e}, {hi:e})"
            )));
        }
        let cdf_arg =
            Array1::linspace(cdf_range.0, cdf_range.1, 2 * n_sd + 1) / spectrum.norm_factor();
        let percentiles = cdf_arg.mapv(|q| spectrum.percentile(q));
        if !percentiles.iter().all(|p| p.is_finite()) {
            return Err(PhysicsError::SamplingFailed(
                "non-finite spectrum percentiles".to_string(),
            ));
        }
        sample_grid(&percentiles, spectrum)
    }
}

/// Sizes drawn uniformly at random from the size range, weighted by the size
/// distribution. Sampling is reproducible for a given seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniformRandom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_range: Option<SizeRange>,
    pub seed: u64,
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self {
            size_range: None,
            seed: DEFAULT_RANDOM_SEED,
        }
    }
}

#[typetag::serde]
impl SpectralSampling for UniformRandom {
    fn sample(&self, spectrum: &dyn Spectrum, n_sd: usize) -> PhysicsResult<SpectralSample> {
        check_sample_count(n_sd)?;
        let (lo, hi) = resolve_size_range(self.size_range, spectrum)?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let values: Array1<FloatValue> = (0..n_sd).map(|_| rng.gen_range(lo..hi)).collect();
        let dr = (hi - lo) / n_sd as FloatValue;
        let weights = values.mapv(|x| dr * spectrum.size_distribution(x));
        ensure_finite(values, weights)
    }
}
