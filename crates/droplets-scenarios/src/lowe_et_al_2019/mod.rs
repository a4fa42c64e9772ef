//! Lowe et al. (2019): surface-active organics and cloud droplet activation.
//!
//! An air parcel rises adiabatically at a constant updraft from 950 hPa and
//! 285.2 K while a lognormal aerosol population activates into cloud
//! droplets. The surface tension model controls how strongly the organic
//! fraction lowers the critical supersaturation.
//!
//! ```
//! use droplets_scenarios::lowe_et_al_2019::Settings;
//!
//! let settings = Settings::with_defaults(1.0, 32, 2, 0.61).unwrap();
//! assert_eq!(settings.nt(), 596);
//! assert_eq!(settings.steps_per_output_interval(), 10);
//! assert_eq!(settings.r_dry().len(), 32);
//! ```

mod config;
mod settings;

pub use config::Lowe2019Config;
pub use settings::{Settings, N_BIN_EDGES, RHO0};
