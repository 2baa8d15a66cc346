//! Pure Rust implementations of the error function family for real and complex arguments,
//! built on Faddeeva's function
//!
//! $$ w(z) = e^{-z^2} \mathrm{erfc}(-iz). $$
//!
//! Available functions:
//!
//! | function | real argument | complex argument |
//! |---|---|---|
//! | error function $\mathrm{erf}$ | [`erf`] | [`cerf`] |
//! | complementary error function $\mathrm{erfc}$ | [`erfc`] | [`cerfc`] |
//! | scaled complementary error function $\mathrm{erfcx}$ | [`erfcx`] | [`cerfcx`] |
//! | imaginary error function $\mathrm{erfi}$ | [`erfi`] | [`cerfi`] |
//! | Dawson's integral | [`dawson`] | [`cdawson`] |
//! | Faddeeva's function | [`im_w_of_x`] (imaginary part) | [`w_of_z`], [`re_w_of_z`], [`im_w_of_z`] |
//!
//! and the Voigt profile [`voigt`].
//!
//! All functions are accurate to about 13 significant digits or better, are total over the
//! IEEE-754 doubles (infinities and NaN included), and never panic. The complex functions,
//! Faddeeva's function and the Voigt profile also exist in a `_with_relerror` form that runs
//! the underlying algorithm at a looser relative accuracy, which is faster.
//!
//! The same functions are available as methods through the [`RealErrorFunctions`] trait for
//! `f64` and the [`ComplexErrorFunctions`] trait for [`Complex64`], which is the same type as
//! the re-exported `Complex<f64>`:
//!
//! ```
//! use cerf::{Complex, ComplexErrorFunctions, RealErrorFunctions, Complex64};
//!
//! let x = 0.5_f64;
//! let z = Complex64::new(1.21, -0.93);
//! println!("erf({}) = {}, dawson({}) = {}", x, x.erf(), z, z.dawson());
//!
//! let generic: Complex<f64> = z;
//! assert_eq!(generic.erf(), cerf::cerf(z));
//! ```

mod auxilliary;
mod complexerrorfunctions;
mod faddeeva;
mod realerrorfunctions;
mod voigt;

pub use num::complex::Complex;
pub use num_complex::Complex64;

pub use crate::complexerrorfunctions::{
    cdawson, cdawson_with_relerror, cerf, cerf_with_relerror, cerfc, cerfc_with_relerror, cerfcx,
    cerfcx_with_relerror, cerfi, cerfi_with_relerror, ComplexErrorFunctions,
};
pub use crate::faddeeva::{im_w_of_z, re_w_of_z, w_of_z, w_of_z_with_relerror};
pub use crate::realerrorfunctions::{dawson, erf, erfc, erfcx, erfi, im_w_of_x, RealErrorFunctions};
pub use crate::voigt::{voigt, voigt_with_relerror};
