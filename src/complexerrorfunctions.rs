use crate::auxilliary::*;
use crate::faddeeva::{w_of_z, w_of_z_with_relerror};
use crate::realerrorfunctions::{dawson, erf, erfc, erfcx, erfi, im_w_of_x};
use crate::Complex64;




// erf(z) = 2/sqrt(pi) * z * (1 - z^2/3 + z^4/10 - z^6/42 + z^8/216 + ...), for small |z|
#[inline]
fn erf_taylor(z: Complex64, mz2: Complex64) -> Complex64 {
    z * (1.1283791670955125739
        + mz2 * (0.37612638903183752464
            + mz2 * (0.11283791670955125739 + mz2 * (0.026866170645131251760 + mz2 * 0.0052239776254421878422))))
}


// For small |x| and small |xy|:
//     erf(x+iy) = erf(iy)
//        + 2*exp(y^2)/sqrt(pi) *
//          [ x * (1 - x^2 * (1+2y^2)/3 + x^4 * (3+12y^2+4y^4)/30 + ...
//            - i * x^2 * y * (1 - x^2 * (3+2y^2)/6 + ...) ]
// where erf(iy) = exp(y^2) * Im[w(y)]
#[inline]
fn erf_taylor_near_imaginary_axis(x: f64, y: f64) -> Complex64 {
    let x2 = x * x;
    let y2 = y * y;
    let expy2 = y2.exp();
    Complex64::new(
        expy2 * x * (1.1283791670955125739
                - x2 * (0.37612638903183752464 + 0.75225277806367504925 * y2)
                + x2 * x2 * (0.11283791670955125739 + y2 * (0.45135166683820502956 + 0.15045055561273500986 * y2))),
        expy2 * (im_w_of_x(y) - x2 * y * (1.1283791670955125739 - x2 * (0.56418958354775628695 + 0.37612638903183752464 * y2))),
    )
}




/// The complex error function $\mathrm{erf}(z)$ at machine precision.
///
/// ```
/// use cerf::{cerf, Complex64};
///
/// let value = cerf(Complex64::new(1.0, 1.0));
/// assert!((value.re - 1.3161512816979476).abs() < 1e-14);
/// assert!((value.im - 0.19045346923783469).abs() < 1e-14);
/// ```
pub fn cerf(z: Complex64) -> Complex64 {
    cerf_with_relerror(z, 0.0)
}


/// The complex error function, with Faddeeva's function evaluated to the relative error `relerr`.
///
/// Positive and negative $\mathrm{Re}\,z$ go through different mirror images of $w$, so that
/// exponentially large and small factors never meet in one product.
pub fn cerf_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    let x = z.re;
    let y = z.im;

    if y == 0.0 {
        // preserve the sign of 0
        return Complex64::new(erf(x), y);
    }

    if x == 0.0 {
        // erfi takes care of exp(y^2) -> Inf while Im[w(y)] -> 0
        return Complex64::new(x, erfi(y));
    }

    let m_re_z2 = (y - x) * (x + y); // Re(-z^2), being careful of overflow
    let m_im_z2 = -2.0 * x * y; // Im(-z^2)
    if m_re_z2 < -750.0 {
        // underflow
        return Complex64::new(if x >= 0.0 { 1.0 } else { -1.0 }, 0.0);
    }

    // exp(-z^2) is built from its modulus and phase, not with the complex exp, which gives
    // spurious NaN values once multiplied with w in an overflow situation. The modulus is
    // applied last: (a * b) * c turns erf(-5.1e-5 - 50i) = (-Inf, -Inf) into (NaN, -Inf).
    if x >= 0.0 {
        if x < 8.0e-2 {
            if y.abs() < 1.0e-2 {
                return erf_taylor(z, Complex64::new(m_re_z2, m_im_z2));
            } else if m_im_z2.abs() < 5.0e-3 && x < 5.0e-3 {
                return erf_taylor_near_imaginary_axis(x, y);
            }
        }
        1.0 - m_re_z2.exp() * (Complex64::new(m_im_z2.cos(), m_im_z2.sin()) * w_of_z_with_relerror(Complex64::new(-y, x), relerr))
    } else {
        if x > -8.0e-2 {
            if y.abs() < 1.0e-2 {
                return erf_taylor(z, Complex64::new(m_re_z2, m_im_z2));
            } else if m_im_z2.abs() < 5.0e-3 && x > -5.0e-3 {
                return erf_taylor_near_imaginary_axis(x, y);
            }
        } else if x.is_nan() {
            return Complex64::new(f64::NAN, if y == 0.0 { 0.0 } else { f64::NAN });
        }
        m_re_z2.exp() * (Complex64::new(m_im_z2.cos(), m_im_z2.sin()) * w_of_z_with_relerror(Complex64::new(y, -x), relerr)) - 1.0
    }
}




/// The complex complementary error function $\mathrm{erfc}(z) = 1 - \mathrm{erf}(z)$.
pub fn cerfc(z: Complex64) -> Complex64 {
    cerfc_with_relerror(z, 0.0)
}


/// [`cerfc`] with Faddeeva's function evaluated to the relative error `relerr`.
pub fn cerfc_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    let x = z.re;
    let y = z.im;

    if x == 0.0 {
        return Complex64::new(1.0, -erfi(y));
    }

    if y == 0.0 {
        // preserve the sign of 0
        return Complex64::new(erfc(x), -y);
    }

    let m_re_z2 = (y - x) * (x + y); // Re(-z^2), being careful of overflow
    let m_im_z2 = -2.0 * x * y; // Im(-z^2)
    if m_re_z2 < -750.0 {
        // underflow
        return Complex64::new(if x >= 0.0 { 0.0 } else { 2.0 }, 0.0);
    }

    let mz2 = Complex64::new(m_re_z2, m_im_z2);
    if x >= 0.0 {
        mz2.exp() * w_of_z_with_relerror(Complex64::new(-y, x), relerr)
    } else {
        2.0 - mz2.exp() * w_of_z_with_relerror(Complex64::new(y, -x), relerr)
    }
}




/// The complex scaled complementary error function $\mathrm{erfcx}(z) = e^{z^2} \mathrm{erfc}(z) = w(iz)$.
///
/// ```
/// use cerf::{cerfcx, Complex64};
///
/// let value = cerfcx(Complex64::new(1.234, 0.5678));
/// assert!((value.re - 0.3382187479799972).abs() < 1e-14);
/// assert!((value.im + 0.1116077470811648).abs() < 1e-14);
/// ```
pub fn cerfcx(z: Complex64) -> Complex64 {
    cerfcx_with_relerror(z, 0.0)
}


/// [`cerfcx`] with Faddeeva's function evaluated to the relative error `relerr`.
pub fn cerfcx_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    w_of_z_with_relerror(Complex64::new(-z.im, z.re), relerr)
}




/// The complex imaginary error function $\mathrm{erfi}(z) = -i\, \mathrm{erf}(iz)$.
pub fn cerfi(z: Complex64) -> Complex64 {
    cerfi_with_relerror(z, 0.0)
}


/// [`cerfi`] with Faddeeva's function evaluated to the relative error `relerr`.
pub fn cerfi_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    let e = cerf_with_relerror(Complex64::new(-z.im, z.re), relerr);
    Complex64::new(e.im, -e.re)
}




// dawson(z) = z - 2/3 z^3 + 4/15 z^5 + ..., for small |z|
#[inline]
fn dawson_taylor(z: Complex64, mz2: Complex64) -> Complex64 {
    z * (1.0 + mz2 * (0.6666666666666666666666666666666666666667 + mz2 * 0.2666666666666666666666666666666666666667))
}


// For small |y| and small |xy|:
//     dawson(x + iy) = D + y^2 (D + x - 2Dx^2) + y^4 (D/2 + 5x/6 - 2Dx^2 - x^3/3 + 2Dx^4/3)
//                        + iy [ (1-2Dx) + 2/3 y^2 (1 - 3Dx - x^2 + 2Dx^3)
//                        + y^4/15 (4 - 15Dx - 9x^2 + 20Dx^3 + 2x^4 - 4Dx^5) ] + ...
// with D = dawson(x).
//
// For large |x| the leading terms cancel (2Dx -> 1), so D is replaced by the 6-term
// continued fraction
//     dawson(x) = 0.5 / (x-0.5/(x-1/(x-1.5/(x-2/(x-2.5/(x...))))))
// which after clearing the denominator gives
//     Re dawson(x + iy) * (-15 + 90x^2 - 60x^4 + 8x^6) / x = 33 - 28x^2 + 4x^4 + y^2 (18 - 4x^2) + 4 y^4
//     Im dawson(x + iy) * (-15 + 90x^2 - 60x^4 + 8x^6) / y = -15 + 24x^2 - 4x^4 + 2/3 y^2 (6x^2 - 15) - 4 y^4
//
// Beyond |x| = 5e7 the 1-term (real part) and 2-term (imaginary part) expansions avoid overflow:
//     Re dawson(x + iy) = [1 + y^2 (1 + y^2/2 - (xy)^2/3)] / (2x)
//     Im dawson(x + iy) = y [ -1 - 2/3 y^2 + y^4/15 (2x^2 - 4) ] / (2x^2 - 1)
fn dawson_near_real_axis(x: f64, y: f64) -> Complex64 {
    let x2 = x * x;
    let y2 = y * y;

    if x2 > 25.0e14 {
        // |x| > 5e7
        let xy2 = (x * y) * (x * y);
        return Complex64::new(
            (0.5 + y2 * (0.5 + 0.25 * y2 - 0.16666666666666666667 * xy2)) / x,
            y * (-1.0 + y2 * (-0.66666666666666666667 + 0.13333333333333333333 * xy2 - 0.26666666666666666667 * y2))
                / (2.0 * x2 - 1.0),
        );
    }

    if x2 > 1600.0 {
        // |x| > 40
        return (1.0 / (-15.0 + x2 * (90.0 + x2 * (-60.0 + 8.0 * x2))))
            * Complex64::new(
                x * (33.0 + x2 * (-28.0 + 4.0 * x2) + y2 * (18.0 - 4.0 * x2 + 4.0 * y2)),
                y * (-15.0 + x2 * (24.0 - 4.0 * x2) + y2 * (4.0 * x2 - 10.0 - 4.0 * y2)),
            );
    }

    let d = dawson(x);
    Complex64::new(
        d + y2 * (d + x - 2.0 * d * x2)
            + y2 * y2 * (d * (0.5 - x2 * (2.0 - 0.66666666666666666667 * x2)) + x * (0.83333333333333333333 - 0.33333333333333333333 * x2)),
        y * (1.0 - 2.0 * d * x
            + y2 * 0.66666666666666666667 * (1.0 - x2 - d * x * (3.0 - 2.0 * x2))
            + y2 * y2
                * (0.26666666666666666667
                    - x2 * (0.6 - 0.13333333333333333333 * x2)
                    - d * x * (1.0 - x2 * (1.3333333333333333333 - 0.26666666666666666667 * x2)))),
    )
}




/// Dawson's integral $D(z) = \frac{\sqrt{\pi}}{2} e^{-z^2} \mathrm{erfi}(z)$ for complex $z$.
///
/// ```
/// use cerf::{cdawson, Complex64};
///
/// let value = cdawson(Complex64::new(1.5, 0.7));
/// assert!((value.re - 0.3893704745573858).abs() < 1e-14);
/// assert!((value.im + 0.2613005303453341).abs() < 1e-14);
/// ```
pub fn cdawson(z: Complex64) -> Complex64 {
    cdawson_with_relerror(z, 0.0)
}


/// [`cdawson`] with Faddeeva's function evaluated to the relative error `relerr`.
pub fn cdawson_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    let x = z.re;
    let y = z.im;

    // The axes are handled separately for speed and for x or y = Inf or NaN.

    if y == 0.0 {
        return Complex64::new(dawson(x), -y); // preserve sign of 0
    }

    if x == 0.0 {
        let y2 = y * y;
        if y2 < 2.5e-5 {
            // Taylor expansion
            return Complex64::new(x, y * (1.0 + y2 * (0.6666666666666666666666666666666666666667 + y2 * 0.26666666666666666666666666666666666667)));
        }
        let imag = if y >= 0.0 { y2.exp() - erfcx(y) } else { erfcx(-y) - y2.exp() };
        return Complex64::new(x, SPI2 * imag);
    }

    let m_re_z2 = (y - x) * (x + y); // Re(-z^2), being careful of overflow
    let m_im_z2 = -2.0 * x * y; // Im(-z^2)
    let mz2 = Complex64::new(m_re_z2, m_im_z2); // -z^2

    // Upper and lower half planes use mirror images of w, so that exponentially large and
    // small quantities are never multiplied together.
    let res = if y >= 0.0 {
        if y < 5.0e-3 {
            if x.abs() < 5.0e-3 {
                return dawson_taylor(z, mz2);
            } else if m_im_z2.abs() < 5.0e-3 {
                return dawson_near_real_axis(x, y);
            }
        }
        mz2.exp() - w_of_z_with_relerror(z, relerr)
    } else {
        if y > -5.0e-3 {
            if x.abs() < 5.0e-3 {
                return dawson_taylor(z, mz2);
            } else if m_im_z2.abs() < 5.0e-3 {
                return dawson_near_real_axis(x, y);
            }
        } else if y.is_nan() {
            return Complex64::new(if x == 0.0 { 0.0 } else { f64::NAN }, f64::NAN);
        }
        w_of_z_with_relerror(-z, relerr) - mz2.exp()
    };

    SPI2 * Complex64::new(-res.im, res.re)
}




/// The complex error functions as methods on [`Complex64`].
///
/// ```
/// use cerf::{ComplexErrorFunctions, Complex64};
///
/// let z = Complex64::new(1.0, 1.0);
/// let difference = z.erf() + z.erfc() - 1.0;
/// assert!(difference.norm() < 1e-15);
/// ```
pub trait ComplexErrorFunctions {
    fn w(self) -> Self;
    fn erf(self) -> Self;
    fn erfc(self) -> Self;
    fn erfcx(self) -> Self;
    fn erfi(self) -> Self;
    fn dawson(self) -> Self;
}



impl ComplexErrorFunctions for Complex64 {

    fn w(self) -> Self {
        w_of_z(self)
    }

    fn erf(self) -> Self {
        cerf(self)
    }

    fn erfc(self) -> Self {
        cerfc(self)
    }

    fn erfcx(self) -> Self {
        cerfcx(self)
    }

    fn erfi(self) -> Self {
        cerfi(self)
    }

    fn dawson(self) -> Self {
        cdawson(self)
    }
}
