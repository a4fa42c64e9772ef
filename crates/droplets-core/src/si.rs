//! SI unit scaling.
//!
//! Every physical quantity in the workspace is stored as a plain `f64` in SI
//! base units. The items below are multipliers used when writing literals,
//! e.g. `950.0 * si::mbar` or `0.5 * si::um`, so the unit of each number is
//! visible where it is defined.
//!
//! Conversion factors follow the convention "multiply to get SI": `si::um` is
//! `1e-6` because one micrometre is `1e-6` metres.
#![allow(non_upper_case_globals)]

use crate::FloatValue;

// SI prefixes
pub const kilo: FloatValue = 1e3;
pub const hecto: FloatValue = 1e2;
pub const centi: FloatValue = 1e-2;
pub const milli: FloatValue = 1e-3;
pub const micro: FloatValue = 1e-6;
pub const nano: FloatValue = 1e-9;

// Base units
pub const s: FloatValue = 1.0;
pub const m: FloatValue = 1.0;
pub const kg: FloatValue = 1.0;
pub const K: FloatValue = 1.0;
pub const mol: FloatValue = 1.0;

// Length
pub const km: FloatValue = kilo * m;
pub const cm: FloatValue = centi * m;
pub const mm: FloatValue = milli * m;
pub const um: FloatValue = micro * m;
/// Alias of [`um`].
pub const micrometre: FloatValue = um;
pub const nm: FloatValue = nano * m;

// Mass
pub const g: FloatValue = milli * kg;

// Time
pub const minute: FloatValue = 60.0 * s;
pub const hour: FloatValue = 60.0 * minute;

// Derived
pub const N: FloatValue = kg * m / (s * s);
pub const mN: FloatValue = milli * N;
pub const J: FloatValue = N * m;
pub const Pa: FloatValue = N / (m * m);
pub const hPa: FloatValue = hecto * Pa;
pub const kPa: FloatValue = kilo * Pa;
pub const bar: FloatValue = 1e5 * Pa;
pub const mbar: FloatValue = milli * bar;

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_pressure_units() {
        assert!(is_close!(mbar, hPa));
        assert!(is_close!(950.0 * mbar, 95_000.0));
    }

    #[test]
    fn test_length_units() {
        assert!(is_close!(0.5 * um, 5e-7));
        assert!(is_close!(um, micrometre));
        assert!(is_close!(1.0 / (cm * cm * cm), 1e6));
    }
}
