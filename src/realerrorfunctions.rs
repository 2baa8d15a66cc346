use crate::auxilliary::*;




/// The scaled complementary error function $\mathrm{erfcx}(x) = e^{x^2} \mathrm{erfc}(x)$ for real $x$.
///
/// For $x > 50$ a continued-fraction expansion is used (a single term beyond $5 \cdot 10^7$
/// to avoid overflow). For $0 \le x \le 50$ a Chebyshev expansion in $t = 4/(4+x)$ is
/// evaluated, a mapping under which erfcx is smooth enough for a single low-degree expansion.
/// For negative $x$, $\mathrm{erfcx}(x) = 2 e^{x^2} - \mathrm{erfcx}(-x)$, saturating
/// to $+\infty$ once $e^{x^2}$ overflows.
pub fn erfcx(x: f64) -> f64 {
    if x >= 0.0 {
        if x > 50.0 {
            if x > 5.0e7 {
                return ISPI / x;
            }
            // 5-term expansion, simplified from ispi / (x+0.5/(x+1/(x+1.5/(x+2/x))))
            let x2 = x * x;
            ISPI * (x2 * (x2 + 4.5) + 2.0) / (x * (x2 * (x2 + 5.0) + 3.75))
        } else {
            erfcx_chebyshev(x)
        }
    } else if x < -26.7 {
        f64::INFINITY
    } else if x < -6.1 {
        2.0 * (x * x).exp()
    } else {
        // NaN lands here as well
        2.0 * (x * x).exp() - erfcx_chebyshev(-x)
    }
}




/// The imaginary part of the Faddeeva function on the real axis,
/// $\mathrm{Im}[w(x)] = \frac{2}{\sqrt{\pi}} \mathrm{Dawson}(x)$.
///
/// Odd in $x$. Chebyshev expansions cover $|x| \le 45$; beyond that a continued
/// fraction is both faster and exact to double precision.
pub fn im_w_of_x(x: f64) -> f64 {
    if x < 0.0 {
        return -im_w_of_x(-x);
    }
    if x > 45.0 {
        if x > 5.0e7 {
            return ISPI / x;
        }
        // 5-term expansion, simplified from ispi / (x-0.5/(x-1/(x-1.5/(x-2/x))))
        let x2 = x * x;
        return ISPI * (x2 * (x2 - 4.5) + 2.0) / (x * (x2 * (x2 - 5.0) + 3.75));
    }
    w_im_chebyshev(x)
}




/// The real error function.
pub fn erf(x: f64) -> f64 {
    let mx2 = -x * x;
    if mx2 < -750.0 {
        return if x >= 0.0 { 1.0 } else { -1.0 };
    }
    if x.abs() < 0.08 {
        // Taylor series for small |x|, to avoid cancellation inaccuracy
        //   erf(x) = 2/sqrt(pi) * x * (1 - x^2/3 + x^4/10 - x^6/42 + x^8/216 + ...)
        return x * (1.1283791670955125739
            + mx2 * (0.37612638903183752464
                + mx2 * (0.11283791670955125739
                    + mx2 * (0.026866170645131251760 + mx2 * 0.0052239776254421878422))));
    }
    if x >= 0.0 {
        1.0 - mx2.exp() * erfcx(x)
    } else {
        mx2.exp() * erfcx(-x) - 1.0
    }
}




/// The real complementary error function $\mathrm{erfc}(x) = 1 - \mathrm{erf}(x)$.
pub fn erfc(x: f64) -> f64 {
    if x * x > 750.0 {
        // underflow
        return if x >= 0.0 { 0.0 } else { 2.0 };
    }
    if x >= 0.0 {
        (-x * x).exp() * erfcx(x)
    } else {
        2.0 - (-x * x).exp() * erfcx(-x)
    }
}




/// The imaginary error function $\mathrm{erfi}(x) = -i\, \mathrm{erf}(ix)$.
///
/// ```
/// let value = cerf::erfi(1.0);
/// assert!((value - 1.6504257587975428).abs() < 1e-14);
/// ```
pub fn erfi(x: f64) -> f64 {
    // exp(x^2) overflows while Im[w(x)] -> 0: return the limit instead of a NaN
    if x * x > 720.0 {
        if x > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    } else {
        (x * x).exp() * im_w_of_x(x)
    }
}




/// Dawson's integral $D(x) = \frac{\sqrt{\pi}}{2} e^{-x^2} \mathrm{erfi}(x)$ for real $x$.
///
/// ```
/// let value = cerf::dawson(1.0);
/// assert!((value - 0.5380795069127684).abs() < 1e-14);
/// ```
pub fn dawson(x: f64) -> f64 {
    SPI2 * im_w_of_x(x)
}




pub trait RealErrorFunctions {
    fn erfcx(self) -> Self;
    fn erf(self) -> Self;
    fn w_im(self) -> Self;
    fn erfi(self) -> Self;
    fn erfc(self) -> Self;
    fn dawson(self) -> Self;
}


impl RealErrorFunctions for f64 {

    fn erfcx(self) -> Self {
        erfcx(self)
    }

    fn erf(self) -> Self {
        erf(self)
    }

    fn w_im(self) -> Self {
        im_w_of_x(self)
    }

    fn erfi(self) -> Self {
        erfi(self)
    }

    fn erfc(self) -> Self {
        erfc(self)
    }

    fn dawson(self) -> Self {
        dawson(self)
    }
}







#[cfg(test)]
mod tests {

    use super::*;
    use crate::auxilliary::relerr;
    use crate::complexerrorfunctions::*;
    use crate::faddeeva::im_w_of_z;
    use crate::Complex64;

    // 10^-300 .. 10^300 on a logarithmic grid
    fn log_grid() -> impl Iterator<Item = f64> {
        (0..10000).map(|i| 10.0_f64.powf(-300.0 + i as f64 * 600.0 / (10000.0 - 1.0)))
    }

    #[test]
    fn test_erf_real() {
        let tolerance = 1.0e-13;
        for x in log_grid() {
            for x in [x, -x] {
                let computed_erf = erf(x);
                let expected_erf = cerf(Complex64::new(x, x.abs() * 1.0e-20)).re;
                let relative_error = relerr(computed_erf, expected_erf);
                assert!(relative_error < tolerance, "x={}: erf computed {} vs expected {}", x, computed_erf, expected_erf);
            }
        }

        for x in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let expected_erf = cerf(Complex64::new(x, 0.0)).re;
            assert!(relerr(erf(x), expected_erf) < tolerance);
        }
    }



    #[test]
    fn test_erf_erfc_values() {
        let tolerance = 1.0e-14;
        let cases: [(f64, f64, f64); 5] = [
            (0.5, 0.5204998778130465376827, 0.4795001221869534623173),
            (2.0, 0.9953222650189527341621, 0.004677734981047265837931),
            (-1.5, -0.966105146475310727067, 1.966105146475310727067),
            (-4.0, -0.99999998458274209972, 1.99999998458274209972),
            (6.0, 0.9999999999999999784803, 2.151973671249891311659e-17),
        ];
        for (x, expected_erf, expected_erfc) in cases {
            assert!(relerr(x.erf(), expected_erf) < tolerance, "erf({})", x);
            assert!(relerr(x.erfc(), expected_erfc) < tolerance, "erfc({})", x);
        }
        assert_eq!(erf(30.0), 1.0);
        assert_eq!(erf(-30.0), -1.0);
        assert_eq!(erfc(30.0), 0.0);
        assert_eq!(erfc(-30.0), 2.0);
    }



    #[test]
    fn test_erfi_real() {
        // Against the Algorithm 916 sums and the continued fraction, which are less
        // accurate than the Chebyshev expansion near the origin
        let tolerance = 5.0e-13;
        for x in log_grid() {
            for x in [x, -x] {
                let computed_erfi = x.erfi();
                let expected_erfi = (x * x).exp() * im_w_of_z(x, x.abs() * 1.0e-20);
                let relative_error = relerr(computed_erfi, expected_erfi);
                assert!(relative_error < tolerance, "x={}: erfi computed {} vs expected {}", x, computed_erfi, expected_erfi);
            }
        }

        assert_eq!(erfi(f64::INFINITY), f64::INFINITY);
        assert_eq!(erfi(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(erfi(f64::NAN).is_nan());
    }



    #[test]
    fn test_erfi_values_and_symmetry() {
        let cases: [(f64, f64); 4] = [
            (0.5, 0.6149520946965109808397),
            (1.0, 1.650425758797542876025),
            (3.0, 1629.994622601565651062),
            (7.5, 2.038818719178621130771e+23),
        ];
        for (x, expected) in cases {
            assert!(relerr(erfi(x), expected) < 1.0e-14, "erfi({})", x);
            assert_eq!(erfi(-x), -erfi(x));
        }
        assert_eq!(erfi(0.0), 0.0);
        assert_eq!(erfi(27.0), f64::INFINITY);
        assert_eq!(erfi(-27.0), f64::NEG_INFINITY);
    }



    #[test]
    fn test_erfcx_real() {
        let tolerance = 1.0e-13;
        let cases: [(f64, f64); 6] = [
            (0.5, 0.6156903441929258748708),
            (3.0, 0.1790011511813899504193),
            (7.5, 0.07457369306287668300513),
            (26.0, 0.02168358485056290661617),
            (44.0, 0.01281918150403987648664),
            (46.0, 0.01226209484396404466959),
        ];
        for (x, expected) in cases {
            let relative_error = relerr(erfcx(x), expected);
            assert!(relative_error < tolerance, "x={}: erfcx computed {} vs expected {}", x, erfcx(x), expected);
        }

        // erfcx(-x) = 2 exp(x^2) - erfcx(x)
        for x in [0.25_f64, 1.0, 4.0, 6.5, 20.0] {
            let expected = 2.0 * (x * x).exp() - erfcx(x);
            assert!(relerr(erfcx(-x), expected) < tolerance);
        }

        assert!(relerr(erfcx(0.0), 1.0) < 1.0e-15);
        assert_eq!(erfcx(f64::INFINITY), 0.0);
        assert_eq!(erfcx(f64::NEG_INFINITY), f64::INFINITY);
        assert!(erfcx(f64::NAN).is_nan());
        // continued fraction beyond x = 50
        assert!(relerr(erfcx(1.0e3), ISPI / 1.0e3 * (1.0 - 0.5e-6)) < 1.0e-12);
    }



    #[test]
    fn test_w_im_real() {
        let tolerance = 1.0e-13;
        let cases: [(f64, f64); 5] = [
            (0.5, 0.4789251729010434725449),
            (3.0, 0.2011573170376003866613),
            (26.0, 0.02171568511305237496233),
            (44.0, 0.0128258046979263612166),
            (46.0, 0.01226789115833976024415),
        ];
        for (x, expected) in cases {
            assert!(relerr(x.w_im(), expected) < tolerance, "w_im({})", x);
            assert_eq!((-x).w_im(), -x.w_im());
        }
        assert!(im_w_of_x(f64::NAN).is_nan());
        assert_eq!(im_w_of_x(f64::INFINITY), 0.0);
    }



    #[test]
    fn test_dawson_real() {
        let tolerance = 5.0e-13;
        for x in log_grid() {
            for x in [x, -x] {
                let computed_dawson = x.dawson();
                let expected_dawson = SPI2 * im_w_of_z(x, x.abs() * 1.0e-20);
                let relative_error = relerr(computed_dawson, expected_dawson);
                if relative_error >= tolerance {
                    println!("x={},  computed: {},  expected: {}", x, computed_dawson, expected_dawson);
                }
                assert!(relative_error < tolerance);
            }
        }

        assert_eq!(dawson(f64::INFINITY), 0.0);
        assert_eq!(dawson(f64::NEG_INFINITY), 0.0);
        assert!(dawson(f64::NAN).is_nan());

        assert_eq!(dawson(0.0), 0.0);
        assert!(relerr(dawson(1.0), 0.5380795069127684191364) < 1.0e-14);
        for x in [0.01, 0.7, 2.5, 12.0, 80.0] {
            assert_eq!(dawson(-x), -dawson(x));
        }
    }



    #[test]
    fn test_underflow_cutoffs() {
        // x^2 = 702.25, just inside the cutoff, still a normal number
        assert!(relerr(erfc(26.5), 2.210907664263734275929239e-307) < 1.0e-13);
        assert_eq!(erfc(-26.5), 2.0);

        // x^2 on either side of 750: exp(-x^2) is already below the smallest subnormal
        for x in [27.38, 27.39] {
            assert_eq!(erfc(x), 0.0, "erfc({})", x);
            assert_eq!(erfc(-x), 2.0, "erfc({})", -x);
            assert_eq!(erf(x), 1.0, "erf({})", x);
            assert_eq!(erf(-x), -1.0, "erf({})", -x);
        }
    }



    #[test]
    fn test_erfi_overflow_cutoff() {
        // x^2 = 707.56, largest values still below f64::MAX
        let expected = 4.132896053052051690466957e+305;
        assert!(relerr(erfi(26.6), expected) < 1.0e-13);
        assert!(relerr(erfi(-26.6), -expected) < 1.0e-13);

        // x^2 on either side of 720: exp(x^2) overflows, as does erfi itself
        for x in [26.83, 26.84] {
            assert_eq!(erfi(x), f64::INFINITY, "erfi({})", x);
            assert_eq!(erfi(-x), f64::NEG_INFINITY, "erfi({})", -x);
        }
    }

}
