//! Python bindings.

use droplets_core::sampling::spectral_sampling_from_name;
use droplets_core::FloatValue;
use droplets_scenarios::lowe_et_al_2019::Settings;
use numpy::{PyArray1, ToPyArray};
use pyo3::exceptions::{PyAssertionError, PyValueError};
use pyo3::prelude::*;

/// Lowe et al. (2019) parcel settings.
///
/// Example:
///     settings = Settings(dt=1.0, n_sd=64, n_substep=2, kappa=0.61)
///     settings.nt  # 596
#[pyclass(frozen)]
#[pyo3(name = "Settings")]
#[derive(Debug, Clone)]
pub struct PySettings(pub Settings);

#[pymethods]
impl PySettings {
    #[new]
    #[pyo3(signature = (dt, n_sd, n_substep, kappa, surface_tension="CompressedFilm", spectral_sampling="Logarithmic"))]
    fn new(
        dt: FloatValue,
        n_sd: usize,
        n_substep: usize,
        kappa: FloatValue,
        surface_tension: &str,
        spectral_sampling: &str,
    ) -> PyResult<Self> {
        let strategy = spectral_sampling_from_name(spectral_sampling)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Settings::new(
            dt,
            n_sd,
            n_substep,
            kappa,
            surface_tension,
            strategy.as_ref(),
        )
        .map(Self)
        .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Number of time steps; raises AssertionError if dt does not divide t_max
    #[getter]
    fn nt(&self) -> PyResult<usize> {
        self.0
            .try_nt()
            .map_err(|e| PyAssertionError::new_err(e.to_string()))
    }

    #[getter]
    fn steps_per_output_interval(&self) -> PyResult<usize> {
        self.0
            .try_steps_per_output_interval()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn t_max(&self) -> FloatValue {
        self.0.t_max()
    }

    #[getter]
    fn output_interval(&self) -> FloatValue {
        self.0.output_interval()
    }

    #[getter]
    fn dt(&self) -> FloatValue {
        self.0.dt()
    }

    #[getter]
    fn w(&self) -> FloatValue {
        self.0.w()
    }

    #[getter]
    fn g(&self) -> FloatValue {
        self.0.g()
    }

    #[getter]
    fn n_sd(&self) -> usize {
        self.0.n_sd()
    }

    #[getter]
    fn n_substep(&self) -> usize {
        self.0.n_substep()
    }

    #[getter]
    fn p0(&self) -> FloatValue {
        self.0.p0()
    }

    #[getter(T0)]
    fn t0(&self) -> FloatValue {
        self.0.t0()
    }

    #[getter]
    fn q0(&self) -> FloatValue {
        self.0.q0()
    }

    #[getter]
    fn kappa(&self) -> FloatValue {
        self.0.kappa()
    }

    #[getter]
    fn surface_tension(&self) -> String {
        self.0.formulae().surface_tension.to_string()
    }

    #[getter]
    fn cloud_radius_range(&self) -> (FloatValue, FloatValue) {
        self.0.cloud_radius_range()
    }

    #[getter]
    fn mass_of_dry_air(&self) -> FloatValue {
        self.0.mass_of_dry_air()
    }

    #[getter]
    fn r_dry<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.r_dry().to_pyarray_bound(py)
    }

    #[getter]
    fn n_in_dv<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.n_in_dv().to_pyarray_bound(py)
    }

    #[getter]
    fn dry_radius_bins_edges<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.dry_radius_bins_edges().to_pyarray_bound(py)
    }

    #[getter]
    fn wet_radius_bins_edges<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<FloatValue>> {
        self.0.wet_radius_bins_edges().to_pyarray_bound(py)
    }

    fn __repr__(&self) -> String {
        format!(
            "Settings(dt={}, n_sd={}, n_substep={}, kappa={}, surface_tension='{}')",
            self.0.dt(),
            self.0.n_sd(),
            self.0.n_substep(),
            self.0.kappa(),
            self.0.formulae().surface_tension
        )
    }
}

#[pymodule]
#[pyo3(name = "_lib")]
fn droplets(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_class::<PySettings>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(dt: FloatValue) -> PySettings {
        PySettings::new(dt, 4, 1, 0.61, "CompressedFilm", "Logarithmic").unwrap()
    }

    #[test]
    fn test_step_counts() {
        let settings = settings(1.0);
        assert_eq!(settings.nt().unwrap(), 596);
        assert_eq!(settings.steps_per_output_interval().unwrap(), 10);
    }

    #[test]
    fn test_errors_map_to_python_exceptions() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            assert!(settings(3.0).nt().unwrap_err().is_instance_of::<PyAssertionError>(py));
            assert!(settings(1e-20).nt().unwrap_err().is_instance_of::<PyAssertionError>(py));
            assert!(settings(1e-310)
                .steps_per_output_interval()
                .unwrap_err()
                .is_instance_of::<PyValueError>(py));

            let err = PySettings::new(1.0, 4, 1, 0.61, "Bogus", "Logarithmic").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            let err = PySettings::new(1.0, 4, 1, 0.61, "Constant", "Bogus").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_repr() {
        assert_eq!(
            settings(0.5).__repr__(),
            "Settings(dt=0.5, n_sd=4, n_substep=1, kappa=0.61, surface_tension='CompressedFilm')"
        );
    }
}
