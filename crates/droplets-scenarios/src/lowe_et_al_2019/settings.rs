use crate::errors::{ScenarioError, ScenarioResult};
use droplets_core::constants::{EPS, T0};
use droplets_core::formulae::{Formulae, SurfaceTension};
use droplets_core::sampling::{default_spectral_sampling, SpectralSampling};
use droplets_core::si;
use droplets_core::spectra::Lognormal;
use droplets_core::FloatValue;
use ndarray::Array1;
use serde::Serialize;

/// Number of edges in each radius histogram.
pub const N_BIN_EDGES: usize = 51;

/// Reference air density used to convert the aerosol number concentration.
///
/// Note: rho is not specified in the paper; unity is a placeholder.
pub const RHO0: FloatValue = 1.0;

/// Step counts at or above this saturate when cast to `usize`.
const MAX_STEP_COUNT: FloatValue = usize::MAX as FloatValue;

/// Parcel and aerosol setup of Lowe et al. (2019).
///
/// All derived quantities are computed once in [`Settings::new`]; the struct
/// has no mutating methods and can be shared freely between readers.
///
/// # Initial state
///
/// The parcel starts at 95% relative humidity:
///
/// $$p_{v,0} = 0.95 \, p_{vs}(T_0)$$
///
/// $$q_0 = \frac{\epsilon \, p_{v,0}}{p_0 - p_{v,0}}$$
///
/// # Aerosol
///
/// A single lognormal mode with 566 particles per cm³ (per unit mass of air,
/// scaled by the dry air mass), mode radius 0.04 µm and geometric standard
/// deviation 2, sampled into `n_sd` super-droplets.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    formulae: Formulae,

    t_max: FloatValue,
    output_interval: FloatValue,
    dt: FloatValue,

    w: FloatValue,
    g: FloatValue,

    n_sd: usize,
    n_substep: usize,

    p0: FloatValue,
    t0: FloatValue,
    pv0: FloatValue,
    q0: FloatValue,
    kappa: FloatValue,

    cloud_radius_range: (FloatValue, FloatValue),
    mass_of_dry_air: FloatValue,

    r_dry: Array1<FloatValue>,
    n_in_dv: Array1<FloatValue>,

    dry_radius_bins_edges: Array1<FloatValue>,
    wet_radius_bins_edges: Array1<FloatValue>,
}

impl Settings {
    /// Build the scenario.
    ///
    /// # Arguments
    ///
    /// * `dt` - time step (s), finite and positive
    /// * `n_sd` - number of super-droplets, positive
    /// * `n_substep` - condensation sub-steps per time step, positive
    /// * `kappa` - hygroscopicity parameter, finite and non-negative
    /// * `surface_tension` - name of the surface tension model
    /// * `spectral_sampling` - strategy used to discretise the aerosol spectrum
    ///
    /// Inputs are validated before anything is derived. Errors from formula
    /// resolution or sampling are passed through unchanged.
    pub fn new(
        dt: FloatValue,
        n_sd: usize,
        n_substep: usize,
        kappa: FloatValue,
        surface_tension: &str,
        spectral_sampling: &dyn SpectralSampling,
    ) -> ScenarioResult<Self> {
        validate_inputs(dt, n_sd, n_substep, kappa)?;

        let formulae = Formulae::with_surface_tension(surface_tension)?;

        let t_max = (400.0 + 196.0) * si::s;
        let output_interval = 10.0 * si::s;

        let w = 0.5 * si::m / si::s;
        let g = 10.0 * si::m / (si::s * si::s);

        let p0 = 950.0 * si::mbar;
        let t0 = 285.2 * si::K;
        let pv0 = 0.95 * formulae.saturation_vapour_pressure.pvs_celsius(t0 - T0);
        let q0 = EPS * pv0 / (p0 - pv0);

        let cloud_radius_range = (0.5 * si::micrometre, 25.0 * si::micrometre);

        let mass_of_dry_air = 44.0;

        let spectrum = Lognormal::new(
            566.0 / si::cm.powi(3) / RHO0 * mass_of_dry_air,
            0.08 * si::um / 2.0,
            2.0,
        )?;
        let (r_dry, n_in_dv) = spectral_sampling.sample(&spectrum, n_sd)?;

        let dry_radius_bins_edges = radius_bin_edges(0.01 * si::um, 1.0 * si::um);
        let wet_radius_bins_edges = radius_bin_edges(0.1 * si::um, 10.0 * si::um);

        log::debug!(
            "Lowe et al. 2019: {formulae:?}, dt={dt} s, n_sd={n_sd}, n_substep={n_substep}, kappa={kappa}"
        );
        log::debug!("Lowe et al. 2019: pv0={pv0:.3} Pa, q0={q0:.6e} kg/kg");

        Ok(Self {
            formulae,
            t_max,
            output_interval,
            dt,
            w,
            g,
            n_sd,
            n_substep,
            p0,
            t0,
            pv0,
            q0,
            kappa,
            cloud_radius_range,
            mass_of_dry_air,
            r_dry,
            n_in_dv,
            dry_radius_bins_edges,
            wet_radius_bins_edges,
        })
    }

    /// Build the scenario with the compressed film surface tension model and
    /// logarithmic spectral sampling.
    pub fn with_defaults(
        dt: FloatValue,
        n_sd: usize,
        n_substep: usize,
        kappa: FloatValue,
    ) -> ScenarioResult<Self> {
        Self::new(
            dt,
            n_sd,
            n_substep,
            kappa,
            &SurfaceTension::default().to_string(),
            default_spectral_sampling().as_ref(),
        )
    }

    /// Number of time steps in the simulation.
    ///
    /// # Panics
    ///
    /// Panics if `t_max` is not an exact multiple of `dt`, or if the step
    /// count does not fit in a `usize`. A scenario with a truncated final step
    /// is misconfigured; use [`Settings::try_nt`] to handle this without
    /// panicking.
    pub fn nt(&self) -> usize {
        match self.try_nt() {
            Ok(nt) => nt,
            Err(e) => panic!("{e}"),
        }
    }

    /// Number of time steps, or an error if `t_max` is not an exact multiple
    /// of `dt`.
    pub fn try_nt(&self) -> ScenarioResult<usize> {
        let nt = checked_step_ratio(self.t_max, self.dt)?;
        if nt != nt.trunc() {
            return Err(ScenarioError::InexactStepCount {
                t_max: self.t_max,
                dt: self.dt,
            });
        }
        Ok(nt as usize)
    }

    /// Number of whole time steps between outputs.
    ///
    /// # Panics
    ///
    /// Panics if the step count does not fit in a `usize`; see
    /// [`Settings::try_steps_per_output_interval`].
    pub fn steps_per_output_interval(&self) -> usize {
        match self.try_steps_per_output_interval() {
            Ok(steps) => steps,
            Err(e) => panic!("{e}"),
        }
    }

    /// Number of whole time steps between outputs, or an error if there are
    /// too many to count.
    pub fn try_steps_per_output_interval(&self) -> ScenarioResult<usize> {
        Ok(checked_step_ratio(self.output_interval, self.dt)?.floor() as usize)
    }

    pub fn formulae(&self) -> &Formulae {
        &self.formulae
    }

    /// Simulated duration (s).
    pub fn t_max(&self) -> FloatValue {
        self.t_max
    }

    /// Time between outputs (s).
    pub fn output_interval(&self) -> FloatValue {
        self.output_interval
    }

    /// Time step (s).
    pub fn dt(&self) -> FloatValue {
        self.dt
    }

    /// Updraft velocity (m/s).
    pub fn w(&self) -> FloatValue {
        self.w
    }

    /// Gravitational acceleration (m/s²).
    pub fn g(&self) -> FloatValue {
        self.g
    }

    pub fn n_sd(&self) -> usize {
        self.n_sd
    }

    pub fn n_substep(&self) -> usize {
        self.n_substep
    }

    /// Initial pressure (Pa).
    pub fn p0(&self) -> FloatValue {
        self.p0
    }

    /// Initial temperature (K).
    pub fn t0(&self) -> FloatValue {
        self.t0
    }

    /// Initial water vapour partial pressure (Pa).
    pub fn pv0(&self) -> FloatValue {
        self.pv0
    }

    /// Initial water vapour mixing ratio (kg/kg).
    pub fn q0(&self) -> FloatValue {
        self.q0
    }

    pub fn kappa(&self) -> FloatValue {
        self.kappa
    }

    /// Radii (m) bounding droplets counted as cloud.
    pub fn cloud_radius_range(&self) -> (FloatValue, FloatValue) {
        self.cloud_radius_range
    }

    pub fn mass_of_dry_air(&self) -> FloatValue {
        self.mass_of_dry_air
    }

    /// Sampled dry radii (m), one per super-droplet.
    pub fn r_dry(&self) -> &Array1<FloatValue> {
        &self.r_dry
    }

    /// Number of particles per unit volume represented by each super-droplet.
    pub fn n_in_dv(&self) -> &Array1<FloatValue> {
        &self.n_in_dv
    }

    /// Dry radius histogram edges (m).
    pub fn dry_radius_bins_edges(&self) -> &Array1<FloatValue> {
        &self.dry_radius_bins_edges
    }

    /// Wet radius histogram edges (m).
    pub fn wet_radius_bins_edges(&self) -> &Array1<FloatValue> {
        &self.wet_radius_bins_edges
    }
}

fn validate_inputs(
    dt: FloatValue,
    n_sd: usize,
    n_substep: usize,
    kappa: FloatValue,
) -> ScenarioResult<()> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ScenarioError::InvalidInput {
            field: "dt",
            reason: format!("must be finite and positive, got {dt}"),
        });
    }
    if n_sd == 0 {
        return Err(ScenarioError::InvalidInput {
            field: "n_sd",
            reason: "must be positive".to_string(),
        });
    }
    if n_substep == 0 {
        return Err(ScenarioError::InvalidInput {
            field: "n_substep",
            reason: "must be positive".to_string(),
        });
    }
    if !(kappa.is_finite() && kappa >= 0.0) {
        return Err(ScenarioError::InvalidInput {
            field: "kappa",
            reason: format!("must be finite and non-negative, got {kappa}"),
        });
    }
    Ok(())
}

/// Log-spaced edges between the given diameters, halved to radii.
/// `span / dt`, rejected when it cannot be cast to `usize` without saturating.
fn checked_step_ratio(span: FloatValue, dt: FloatValue) -> ScenarioResult<FloatValue> {
    let steps = span / dt;
    if !steps.is_finite() || steps >= MAX_STEP_COUNT {
        return Err(ScenarioError::TooManySteps { span, dt });
    }
    Ok(steps)
}

fn radius_bin_edges(start: FloatValue, stop: FloatValue) -> Array1<FloatValue> {
    Array1::logspace(10.0, start.log10(), stop.log10(), N_BIN_EDGES) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use droplets_core::formulae::SurfaceTension;
    use droplets_core::sampling::{ConstantMultiplicity, Linear};
    use is_close::is_close;

    fn settings() -> Settings {
        Settings::with_defaults(1.0 * si::s, 16, 2, 0.61).unwrap()
    }

    #[test]
    fn test_fixed_constants() {
        let s = settings();
        assert!(is_close!(s.t_max(), 596.0));
        assert!(is_close!(s.output_interval(), 10.0));
        assert!(is_close!(s.w(), 0.5));
        assert!(is_close!(s.g(), 10.0));
        assert!(is_close!(s.p0(), 95_000.0));
        assert!(is_close!(s.t0(), 285.2));
        assert!(is_close!(s.mass_of_dry_air(), 44.0));
        assert!(is_close!(s.cloud_radius_range().0, 0.5e-6));
        assert!(is_close!(s.cloud_radius_range().1, 25e-6));
    }

    #[test]
    fn test_inputs_stored_verbatim() {
        let s = Settings::with_defaults(0.5, 7, 3, 0.953).unwrap();
        assert_eq!(s.dt(), 0.5);
        assert_eq!(s.n_sd(), 7);
        assert_eq!(s.n_substep(), 3);
        assert_eq!(s.kappa(), 0.953);
        assert_eq!(s.formulae().surface_tension, SurfaceTension::CompressedFilm);
    }

    #[test]
    fn test_initial_vapour() {
        let s = settings();
        // ~14.08 hPa saturation pressure at 12.05 degC, 95% RH
        assert!((s.pv0() - 1337.9).abs() < 0.5, "pv0 = {}", s.pv0());
        assert!((s.q0() - 8.88e-3).abs() < 1e-5, "q0 = {}", s.q0());
    }

    #[test]
    fn test_bin_edges() {
        let s = settings();
        for (edges, start, stop) in [
            (s.dry_radius_bins_edges(), 0.005e-6, 0.5e-6),
            (s.wet_radius_bins_edges(), 0.05e-6, 5e-6),
        ] {
            assert_eq!(edges.len(), N_BIN_EDGES);
            assert!(edges.windows(2).into_iter().all(|w| w[1] > w[0]));
            assert!((edges[0] - start).abs() / start < 1e-12);
            assert!((edges[N_BIN_EDGES - 1] - stop).abs() / stop < 1e-12);
        }
    }

    #[test]
    fn test_sampling_strategy_is_used() {
        let linear = Settings::new(1.0, 8, 1, 0.61, "Constant", &Linear::default()).unwrap();
        let constant =
            Settings::new(1.0, 8, 1, 0.61, "Constant", &ConstantMultiplicity::default()).unwrap();
        assert_ne!(linear.r_dry(), constant.r_dry());

        let n = constant.n_in_dv();
        assert!(n.iter().all(|v| (v - n[0]).abs() / n[0] < 1e-6));
    }

    #[test]
    fn test_invalid_inputs() {
        let cases = [
            (0.0, 8, 1, 0.61, "dt"),
            (-1.0, 8, 1, 0.61, "dt"),
            (FloatValue::NAN, 8, 1, 0.61, "dt"),
            (1.0, 0, 1, 0.61, "n_sd"),
            (1.0, 8, 0, 0.61, "n_substep"),
            (1.0, 8, 1, -0.1, "kappa"),
            (1.0, 8, 1, FloatValue::INFINITY, "kappa"),
        ];
        for (dt, n_sd, n_substep, kappa, expected) in cases {
            match Settings::with_defaults(dt, n_sd, n_substep, kappa) {
                Err(ScenarioError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_try_nt() {
        assert_eq!(settings().try_nt().unwrap(), 596);
        let s = Settings::with_defaults(3.0, 4, 1, 0.61).unwrap();
        assert!(matches!(
            s.try_nt(),
            Err(ScenarioError::InexactStepCount { .. })
        ));
    }
}
