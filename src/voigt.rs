use std::f64::consts::{PI, SQRT_2};

use crate::auxilliary::S2PI;
use crate::faddeeva::w_of_z_with_relerror;
use crate::Complex64;




/// The Voigt profile, the convolution of a Gaussian of standard deviation `sigma` with a
/// Lorentzian of half width at half maximum `gamma`:
///
/// $$ V(x; \sigma, \gamma) = \frac{\mathrm{Re}\, w\left(\frac{x + i\gamma}{\sqrt{2}\sigma}\right)}{\sqrt{2\pi}\,\sigma} $$
///
/// Only the magnitudes of `sigma` and `gamma` matter. Each of them may be zero, in which case
/// the profile reduces to the pure Lorentzian or Gaussian; with both zero it is a delta
/// function, returned as $+\infty$ at $x = 0$ and $0$ elsewhere.
///
/// ```
/// let value = cerf::voigt(1.0, 0.5, 0.3);
/// assert!((value - 0.17044605985814235).abs() < 1e-15);
/// ```
pub fn voigt(x: f64, sigma: f64, gamma: f64) -> f64 {
    voigt_with_relerror(x, sigma, gamma, 0.0)
}


/// [`voigt`] with Faddeeva's function evaluated to the relative error `relerr`.
pub fn voigt_with_relerror(x: f64, sigma: f64, gamma: f64, relerr: f64) -> f64 {
    let gam = gamma.abs();
    let sig = sigma.abs();

    if gam == 0.0 {
        if sig == 0.0 {
            // Delta function. NaN x compares unequal to 0 as well.
            return if x != 0.0 { 0.0 } else { f64::INFINITY };
        }
        // Gaussian
        return (-x * x / 2.0 / (sig * sig)).exp() / S2PI / sig;
    }

    if sig == 0.0 {
        // Lorentzian
        return gam / PI / (x * x + gam * gam);
    }

    let z = Complex64::new(x, gam) / SQRT_2 / sig;
    w_of_z_with_relerror(z, relerr).re / S2PI / sig
}
