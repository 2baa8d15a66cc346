use std::f64::consts::PI;

use crate::auxilliary::*;
use crate::realerrorfunctions::{erfcx, im_w_of_x};
use crate::Complex64;




// Parameters of the Algorithm 916 sums for a requested relative error.
#[derive(Clone, Copy)]
struct Accuracy {
    relerr: f64,
    a: f64,
    a2: f64,
    c: f64,
}

impl Accuracy {
    fn new(relerr: f64) -> Self {
        if relerr <= f64::EPSILON {
            Accuracy {
                relerr: f64::EPSILON,
                a: 0.518321480430085929872,  // pi / sqrt(-log(eps*0.5))
                a2: 0.268657157075235951582, // a^2
                c: 0.329973702884629072537,  // (2/pi) * a
            }
        } else {
            // not sensible to compute < 1 digit
            let relerr = relerr.min(0.1);
            let a = PI / (-(relerr * 0.5).ln()).sqrt();
            Accuracy { relerr, a, a2: a * a, c: (2.0 / PI) * a }
        }
    }
}




/// Faddeeva's function $w(z) = e^{-z^2} \mathrm{erfc}(-iz)$ at machine precision.
///
/// ```
/// use cerf::{w_of_z, Complex64};
///
/// let w = w_of_z(Complex64::new(1.0, 1.0));
/// assert!((w.re - 0.3047442052569126).abs() < 1e-15);
/// assert!((w.im - 0.2082189382028316).abs() < 1e-15);
/// ```
pub fn w_of_z(z: Complex64) -> Complex64 {
    w_of_z_with_relerror(z, 0.0)
}




/// Faddeeva's function computed to the relative error `relerr`.
///
/// Values of `relerr` at or below machine epsilon (including 0) request full double
/// precision; values above 0.1 are treated as 0.1.
///
/// Large $|z|$ uses a continued fraction whose length is estimated from $z$, and the lower
/// half plane is reached through $w(z) = 2 e^{-z^2} - w(-z)$. Elsewhere the sums of
/// Zaghloul & Ali, ACM TOMS 38(2) 15 (2011), "Algorithm 916", are evaluated.
pub fn w_of_z_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    if z.re == 0.0 {
        return Complex64::new(erfcx(z.im), z.re); // give correct sign of 0 in w.im
    } else if z.im == 0.0 {
        return Complex64::new((-z.re * z.re).exp(), im_w_of_x(z.re));
    }

    let x = z.re.abs();
    let y = z.im;
    let ya = y.abs();

    // The continued fraction loses relative accuracy in Re w(z) for |x| ~ 6 and small |y|,
    // so the sums take over in that region.
    if ya > 7.0 || (x > 6.0 && (ya > 0.1 || (x > 8.0 && ya > 1e-10) || x > 28.0)) {
        return continued_fraction(z, x, y, ya);
    }

    let accuracy = Accuracy::new(relerr);
    if x < 10.0 {
        algorithm_916_near(z, x, y, accuracy)
    } else {
        algorithm_916_far(z, x, y, accuracy)
    }
}




/// Real part of $w(x + iy)$.
pub fn re_w_of_z(x: f64, y: f64) -> f64 {
    w_of_z(Complex64::new(x, y)).re
}


/// Imaginary part of $w(x + iy)$.
pub fn im_w_of_z(x: f64, y: f64) -> f64 {
    w_of_z(Complex64::new(x, y)).im
}




fn continued_fraction(z: Complex64, x: f64, y: f64, ya: f64) -> Complex64 {
    let xs = if y < 0.0 { -z.re } else { z.re }; // compute for -z if y < 0

    let ret = if x + ya > 4000.0 {
        if x + ya > 1.0e7 {
            // nu == 1, w(z) = i/sqrt(pi) / z, scaled to avoid overflow
            if x > ya {
                let yax = ya / xs;
                let denom = ISPI / (xs + yax * ya);
                Complex64::new(denom * yax, denom)
            } else if ya.is_infinite() {
                return if x.is_nan() || y < 0.0 {
                    Complex64::new(f64::NAN, f64::NAN)
                } else {
                    Complex64::new(0.0, 0.0)
                };
            } else {
                let xya = xs / ya;
                let denom = ISPI / (xya * xs + ya);
                Complex64::new(denom, denom * xya)
            }
        } else {
            // nu == 2, w(z) = i/sqrt(pi) * z / (z*z - 0.5)
            let dr = xs * xs - ya * ya - 0.5;
            let di = 2.0 * xs * ya;
            let denom = ISPI / (dr * dr + di * di);
            Complex64::new(denom * (xs * di - ya * dr), denom * (xs * dr + ya * di))
        }
    } else {
        // Number of terms nu(z) from a fit of the minimum needed for machine precision,
        // in the spirit of Poppe & Wijers but without the hypotenuse.
        const C0: f64 = 3.9;
        const C1: f64 = 11.398;
        const C2: f64 = 0.08254;
        const C3: f64 = 0.1421;
        const C4: f64 = 0.2023;
        let nu = (C0 + C1 / (C2 * x + C3 * ya + C4)).floor();
        let mut wr = xs;
        let mut wi = ya;
        let mut nu = 0.5 * (nu - 1.0);
        while nu > 0.4 {
            // w <- z - nu/w
            let denom = nu / (wr * wr + wi * wi);
            wr = xs - wr * denom;
            wi = ya + wi * denom;
            nu -= 0.5;
        }
        // w(z) = i/sqrt(pi) / w
        let denom = ISPI / (wr * wr + wi * wi);
        Complex64::new(denom * wi, denom * wr)
    };

    if y < 0.0 {
        // w(z) = 2 exp(-z^2) - w(-z), with exp(-z^2) = exp(-(xs^2 - ya^2) - 2i xs ya) formed without overflow
        2.0 * Complex64::new((ya - xs) * (xs + ya), 2.0 * xs * y).exp() - ret
    } else {
        ret
    }
}




// |x| < 10: all five sums contribute.
fn algorithm_916_near(z: Complex64, x: f64, y: f64, accuracy: Accuracy) -> Complex64 {
    if y.is_nan() {
        return Complex64::new(y, y);
    }

    let Accuracy { relerr, a, a2, c } = accuracy;
    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    let mut sum3 = 0.0;
    let mut sum4 = 0.0;
    let mut sum5 = 0.0;
    let mut prod2ax = 1.0;
    let mut prodm2ax = 1.0;
    let exp2ax = (2.0 * a * x).exp();
    let expm2ax = 1.0 / exp2ax;

    let expx2 = if x < 5e-4 {
        // sum5 - sum4 accumulated directly in sum5, since the two nearly cancel
        let x2 = x * x;
        let expx2 = 1.0 - x2 * (1.0 - 0.5 * x2); // exp(-x*x) via Taylor
        let mut n = 1.0;
        loop {
            let coef = (-a2 * (n * n)).exp() * expx2 / (a2 * (n * n) + y * y);
            prod2ax *= exp2ax;
            prodm2ax *= expm2ax;
            sum1 += coef;
            sum2 += coef * prodm2ax;
            sum3 += coef * prod2ax;
            sum5 += coef * (2.0 * a) * n * sinh_taylor((2.0 * a) * n * x);
            if coef * prod2ax < relerr * sum3 {
                break;
            }
            n += 1.0;
        }
        expx2
    } else {
        let expx2 = (-x * x).exp();
        let mut n = 1.0;
        loop {
            let coef = (-a2 * (n * n)).exp() * expx2 / (a2 * (n * n) + y * y);
            prod2ax *= exp2ax;
            prodm2ax *= expm2ax;
            sum1 += coef;
            sum2 += coef * prodm2ax;
            sum4 += (coef * prodm2ax) * (a * n);
            sum3 += coef * prod2ax;
            sum5 += (coef * prod2ax) * (a * n);
            // sum5 decays slowest
            if (coef * prod2ax) * (a * n) < relerr * sum5 {
                break;
            }
            n += 1.0;
        }
        expx2
    };

    // avoid spurious overflow for large negative y
    let expx2erfcxy = if y > -6.0 { expx2 * erfcx(y) } else { 2.0 * (y * y - x * x).exp() };

    let ret = if y > 5.0 {
        // imaginary terms cancel
        let sinxy = (x * y).sin();
        Complex64::new(
            (expx2erfcxy - c * y * sum1) * (2.0 * x * y).cos() + (c * x * expx2) * sinxy * sinc(x * y, sinxy),
            0.0,
        )
    } else {
        let xs = z.re;
        let sinxy = (xs * y).sin();
        let sin2xy = (2.0 * xs * y).sin();
        let cos2xy = (2.0 * xs * y).cos();
        let coef1 = expx2erfcxy - c * y * sum1;
        let coef2 = c * xs * expx2;
        Complex64::new(
            coef1 * cos2xy + coef2 * sinxy * sinc(xs * y, sinxy),
            coef2 * sinc(2.0 * xs * y, sin2xy) - coef1 * sin2xy,
        )
    };

    ret + Complex64::new(0.5 * c * y * (sum2 + sum3), 0.5 * c * (sum5 - sum4).copysign(z.re))
}




// |x| >= 10: only sum3 and sum5 contribute, and |y| < 1e-10 so exp(-x*x) is the only other term.
fn algorithm_916_far(z: Complex64, x: f64, y: f64, accuracy: Accuracy) -> Complex64 {
    if x.is_nan() {
        return Complex64::new(x, x);
    }
    if y.is_nan() {
        return Complex64::new(y, y);
    }

    let Accuracy { relerr, a, a2, c } = accuracy;
    let ret = Complex64::new((-x * x).exp(), 0.0);
    let finish = |sum3: f64, sum5: f64| ret + Complex64::new(0.5 * c * y * sum3, 0.5 * c * sum5.copysign(z.re));

    // sum in both directions, starting at n0 (rounded rather than ceil'd; x/a > 1 here)
    let n0 = (x / a + 0.5).floor();
    let dx = a * n0 - x;
    let mut sum3 = (-dx * dx).exp() / (a2 * (n0 * n0) + y * y);
    let mut sum5 = a * n0 * sum3;
    let exp1 = (4.0 * a * dx).exp();
    let mut exp1dn = 1.0;
    let mut dn = 1.0;
    while dn < n0 {
        // n0-dn and n0+dn terms
        let np = n0 + dn;
        let nm = n0 - dn;
        let mut tp = (-sqr(a * dn + dx)).exp();
        exp1dn *= exp1;
        let mut tm = tp * exp1dn; // tm from tp without a second exp
        tp /= a2 * (np * np) + y * y;
        tm /= a2 * (nm * nm) + y * y;
        sum3 += tp + tm;
        sum5 += a * (np * tp + nm * tm);
        if a * (np * tp + nm * tm) < relerr * sum5 {
            return finish(sum3, sum5);
        }
        dn += 1.0;
    }

    loop {
        // only n0+dn terms remain, since n0-dn <= 0
        let np = n0 + dn;
        dn += 1.0;
        let tp = (-sqr(a * dn + dx)).exp() / (a2 * (np * np) + y * y);
        sum3 += tp;
        sum5 += a * np * tp;
        if a * np * tp < relerr * sum5 {
            return finish(sum3, sum5);
        }
    }
}
