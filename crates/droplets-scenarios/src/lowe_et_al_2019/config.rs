//! Serde configuration for the Lowe et al. (2019) scenario.

use super::settings::Settings;
use crate::errors::ScenarioResult;
use droplets_core::sampling::{default_spectral_sampling, SpectralSampling};
use droplets_core::formulae::SurfaceTension;
use droplets_core::FloatValue;
use serde::{Deserialize, Serialize};

/// User-facing knobs of the Lowe et al. (2019) scenario.
///
/// Every field has a default, so a configuration file only needs to list the
/// values it changes:
///
/// ```toml
/// dt = 2.0
/// kappa = 0.953
/// surface_tension = "SzyszkowskiLangmuir"
///
/// [spectral_sampling]
/// strategy = "ConstantMultiplicity"
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Lowe2019Config {
    /// Time step (s).
    ///
    /// Must divide the 596 s simulation exactly for [`Settings::nt`].
    /// Default: 1.0
    pub dt: FloatValue,

    /// Number of super-droplets.
    /// Default: 64
    pub n_sd: usize,

    /// Condensation sub-steps per time step.
    /// Default: 2
    pub n_substep: usize,

    /// Hygroscopicity parameter of the dry aerosol (dimensionless).
    /// Default: 0.61 (ammonium sulphate)
    pub kappa: FloatValue,

    /// Surface tension model name.
    /// Default: "CompressedFilm"
    pub surface_tension: String,

    /// Spectral sampling strategy, tagged by `strategy`.
    /// Default: Logarithmic
    pub spectral_sampling: Box<dyn SpectralSampling>,
}

impl Default for Lowe2019Config {
    fn default() -> Self {
        Self {
            dt: 1.0,
            n_sd: 64,
            n_substep: 2,
            kappa: 0.61,
            surface_tension: SurfaceTension::default().to_string(),
            spectral_sampling: default_spectral_sampling(),
        }
    }
}

impl Lowe2019Config {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(toml_str: &str) -> ScenarioResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Build the scenario described by this configuration.
    pub fn build(&self) -> ScenarioResult<Settings> {
        Settings::new(
            self.dt,
            self.n_sd,
            self.n_substep,
            self.kappa,
            &self.surface_tension,
            self.spectral_sampling.as_ref(),
        )
    }
}

impl Settings {
    /// Build the scenario from a configuration struct.
    pub fn from_config(config: &Lowe2019Config) -> ScenarioResult<Self> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScenarioError;

    #[test]
    fn test_default_config_builds() {
        let settings = Lowe2019Config::default().build().unwrap();
        assert_eq!(settings.n_sd(), 64);
        assert_eq!(settings.nt(), 596);
        assert_eq!(
            settings.formulae().surface_tension,
            SurfaceTension::default()
        );
    }

    #[test]
    fn test_partial_toml() {
        let config = Lowe2019Config::from_toml_str(
            r#"
            dt = 2.0
            surface_tension = "SzyszkowskiLangmuir"

            [spectral_sampling]
            strategy = "ConstantMultiplicity"
            "#,
        )
        .expect("Partial deserialization failed");

        assert_eq!(config.dt, 2.0);
        assert_eq!(config.surface_tension, "SzyszkowskiLangmuir");
        // Defaults for unspecified fields
        assert_eq!(config.n_sd, 64);
        assert_eq!(config.n_substep, 2);
        assert_eq!(config.kappa, 0.61);

        let settings = Settings::from_config(&config).unwrap();
        assert_eq!(settings.nt(), 298);
    }

    #[test]
    fn test_malformed_toml() {
        let err = Lowe2019Config::from_toml_str("dt = \"fast\"").unwrap_err();
        assert!(matches!(err, ScenarioError::Config(_)));
    }

    #[test]
    fn test_unknown_strategy() {
        let err = Lowe2019Config::from_toml_str(
            r#"
            [spectral_sampling]
            strategy = "Bogus"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Config(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Lowe2019Config {
            n_sd: 10,
            ..Lowe2019Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: Lowe2019Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.n_sd, 10);
        assert_eq!(
            config.build().unwrap().r_dry(),
            restored.build().unwrap().r_dry()
        );
    }
}
