//! Special functions needed by the size spectra.
//!
//! The error function is evaluated with its Maclaurin series close to the
//! origin and with the Laplace continued fraction for the complementary error
//! function in the tails, giving close to machine precision over the whole
//! real line. The inverse starts from the single-precision polynomial of
//! Giles (2010) and is polished with Newton iterations on [`erf`].

use crate::FloatValue;
use std::f64::consts::PI;

/// Boundary between the series and the continued fraction.
const SERIES_LIMIT: FloatValue = 2.5;
const MAX_SERIES_TERMS: usize = 200;
const CONTINUED_FRACTION_DEPTH: usize = 80;

/// Error function.
///
/// $$\mathrm{erf}(x) = \frac{2}{\sqrt{\pi}} \int_0^x e^{-t^2} dt$$
pub fn erf(x: FloatValue) -> FloatValue {
    if x.is_nan() {
        return FloatValue::NAN;
    }
    if x < 0.0 {
        return -erf(-x);
    }
    if x < SERIES_LIMIT {
        erf_series(x)
    } else {
        1.0 - erfc_continued_fraction(x)
    }
}

/// Complementary error function, $1 - \mathrm{erf}(x)$, without cancellation
/// for large `x`.
pub fn erfc(x: FloatValue) -> FloatValue {
    if x.is_nan() {
        return FloatValue::NAN;
    }
    if x < SERIES_LIMIT {
        1.0 - erf(x)
    } else {
        erfc_continued_fraction(x)
    }
}

/// Inverse of [`erf`] on $(-1, 1)$.
///
/// Returns $\pm\infty$ at $\pm 1$ and NaN outside $[-1, 1]$.
pub fn erfinv(y: FloatValue) -> FloatValue {
    if y.is_nan() || y.abs() > 1.0 {
        return FloatValue::NAN;
    }
    if y == 1.0 {
        return FloatValue::INFINITY;
    }
    if y == -1.0 {
        return FloatValue::NEG_INFINITY;
    }

    let mut x = erfinv_initial_guess(y);
    for _ in 0..3 {
        let slope = 2.0 / PI.sqrt() * (-x * x).exp();
        if slope == 0.0 {
            break;
        }
        x -= (erf(x) - y) / slope;
    }
    x
}

fn erf_series(x: FloatValue) -> FloatValue {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..MAX_SERIES_TERMS {
        term *= -x2 / n as FloatValue;
        let contribution = term / (2 * n + 1) as FloatValue;
        sum += contribution;
        if contribution.abs() < FloatValue::EPSILON * sum.abs() {
            break;
        }
    }
    2.0 / PI.sqrt() * sum
}

fn erfc_continued_fraction(x: FloatValue) -> FloatValue {
    // erfc(x) = exp(-x^2) / sqrt(pi) / (x + (1/2) / (x + 1 / (x + (3/2) / (x + ...))))
    let mut t = x;
    for k in (1..=CONTINUED_FRACTION_DEPTH).rev() {
        t = x + (k as FloatValue / 2.0) / t;
    }
    (-x * x).exp() / PI.sqrt() / t
}

fn erfinv_initial_guess(y: FloatValue) -> FloatValue {
    let mut w = -((1.0 - y) * (1.0 + y)).ln();
    let p = if w < 5.0 {
        w -= 2.5;
        [
            2.810_226_36e-08,
            3.432_739_39e-07,
            -3.523_387_7e-06,
            -4.391_506_54e-06,
            0.000_218_580_87,
            -0.001_253_725_03,
            -0.004_177_681_64,
            0.246_640_727,
            1.501_409_41,
        ]
        .iter()
        .fold(0.0, |acc, c| c + acc * w)
    } else {
        w = w.sqrt() - 3.0;
        [
            -0.000_200_214_257,
            0.000_100_950_558,
            0.001_349_343_22,
            -0.003_673_428_44,
            0.005_739_507_73,
            -0.007_622_461_3,
            0.009_438_870_47,
            1.001_674_06,
            2.832_976_82,
        ]
        .iter()
        .fold(0.0, |acc, c| c + acc * w)
    };
    p * y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_erf_reference_values() {
        assert_eq!(erf(0.0), 0.0);
        assert_relative_eq!(erf(1.0), 0.842_700_792_949_714_9, max_relative = 1e-13);
        assert_relative_eq!(erf(-0.5), -0.520_499_877_813_046_5, max_relative = 1e-13);
        assert_relative_eq!(erf(2.0), 0.995_322_265_018_952_7, max_relative = 1e-13);
        assert_relative_eq!(erf(3.0), 0.999_977_909_503_001_4, max_relative = 1e-13);
        assert_eq!(erf(40.0), 1.0);
    }

    #[test]
    fn test_erf_continuous_at_series_limit() {
        let below = erf(SERIES_LIMIT - 1e-12);
        let above = erf(SERIES_LIMIT + 1e-12);
        assert!((above - below).abs() < 1e-12);
    }

    #[test]
    fn test_erfc_tail() {
        assert_relative_eq!(erfc(3.0), 2.209_049_699_858_544e-5, max_relative = 1e-10);
        assert_relative_eq!(erfc(5.0), 1.537_459_794_428_035e-12, max_relative = 1e-10);
        assert_relative_eq!(erfc(0.5), 1.0 - erf(0.5), max_relative = 1e-15);
    }

    #[test]
    fn test_erfinv_inverts_erf() {
        for x in [-3.5, -2.0, -0.7, -1e-3, 0.0, 0.25, 1.0, 2.4, 3.0] {
            let y = erf(x);
            assert!(
                (erfinv(y) - x).abs() < 1e-8,
                "erfinv(erf({x})) = {}",
                erfinv(y)
            );
        }
    }

    #[test]
    fn test_erfinv_edges() {
        assert_eq!(erfinv(1.0), FloatValue::INFINITY);
        assert_eq!(erfinv(-1.0), FloatValue::NEG_INFINITY);
        assert!(erfinv(1.5).is_nan());
        assert!(erfinv(FloatValue::NAN).is_nan());
    }
}
