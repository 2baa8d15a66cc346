// Shared constants and small numerical helpers used by the kernel and the dispatchers.

pub const SPI2: f64 = 0.8862269254527580136490837416705725913990; // sqrt(pi)/2
pub const S2PI: f64 = 2.5066282746310005024157652848110; // sqrt(2*pi)
pub const ISPI: f64 = 0.56418958354775628694807945156; // 1 / sqrt(pi)

#[inline]
pub fn sqr(x: f64) -> f64 {
    x * x
}

// sin(x)/x, given sin(x) already computed
#[inline]
pub fn sinc(x: f64, sinx: f64) -> f64 {
    if x.abs() < 1.0e-4 {
        1.0 - 0.1666666666666666666667 * x * x
    } else {
        sinx / x
    }
}

// sinh(x) via Taylor series, accurate to machine precision for |x| < 1e-2
#[inline]
pub fn sinh_taylor(x: f64) -> f64 {
    x * (1.0 + (x * x) * (0.1666666666666666666667 + 0.00833333333333333333333 * (x * x)))
}

// Evaluate sum_k c[k] T_k(tau) with tau the image of t under [a, b] -> [-1, 1].
// The leading coefficient is stored already halved.
fn clenshaw(coefficients: &[f64], t: f64, a: f64, b: f64) -> f64 {
    let tau = (2.0 * t - a - b) / (b - a);
    let tau2 = 2.0 * tau;
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for &c in coefficients[1..].iter().rev() {
        let b0 = c + tau2 * b1 - b2;
        b2 = b1;
        b1 = b0;
    }
    coefficients[0] + tau * b1 - b2
}

// Chebyshev expansion of (1+x) * erfcx(x) in t = 4/(4+x), for 0 <= x <= 50.
const ERFCX_T_MIN: f64 = 4.0 / 54.0;
const ERFCX_COEFFICIENTS: [f64; 26] = [
    0.7482490827672168,
    0.21389014234525505,
    0.0443815874615634,
    0.0008618000184853139,
    -0.004162828230634561,
    -0.0022405418369750474,
    -0.0007545748879142499,
    -0.0001865745454027171,
    -3.3965298758597686e-05,
    -4.056687554083947e-06,
    -1.3762282135770477e-07,
    5.581075870180643e-08,
    1.0801066993123165e-08,
    1.5412503390033123e-10,
    -2.274591079836345e-10,
    -2.5317953377442226e-11,
    3.5389283347898146e-12,
    8.953495122818089e-13,
    -4.229945613823516e-14,
    -2.6622553106050843e-14,
    2.2431202322149147e-16,
    7.853229497194156e-16,
    7.17810659841323e-18,
    -2.4228326439713218e-17,
    -2.4119173433005027e-19,
    7.894973924533437e-19,
];

// Chebyshev expansion of w_im(x)/x in u = x^2, for 0 <= x < 3.
const W_IM_NEAR_U_MAX: f64 = 9.0;
const W_IM_NEAR_COEFFICIENTS: [f64; 26] = [
    0.3333259698343338,
    -0.4159319587700974,
    0.22086563893701094,
    -0.10018987126049841,
    0.03920773773464809,
    -0.013393066653902733,
    0.004040275289543122,
    -0.0010879830994545887,
    0.0002640358397951864,
    -5.823451523799373e-05,
    1.1758926127986005e-05,
    -2.187866701937044e-06,
    3.772215801578099e-07,
    -6.057055431382285e-08,
    9.097798334516981e-09,
    -1.2833083663650962e-09,
    1.7059884848249137e-10,
    -2.144111463299531e-11,
    2.55497831336146e-12,
    -2.8941583879534506e-13,
    3.123764337177572e-14,
    -3.2195291432617953e-15,
    3.174855794859678e-16,
    -3.000984927439547e-17,
    2.7235876142909717e-18,
    -2.37701408254533e-19,
];

// Chebyshev expansion of g(s) in s = 1/x^2, for 3 <= x <= 45, where
//   w_im(x) = (1 + s g(s)) / (sqrt(pi) x)
const W_IM_FAR_S_MIN: f64 = 1.0 / 2025.0;
const W_IM_FAR_S_MAX: f64 = 1.0 / 9.0;
const W_IM_FAR_COEFFICIENTS: [f64; 46] = [
    0.5563025419852615,
    0.062080214795218254,
    0.007149881665755786,
    0.001116115996063917,
    7.877281161226281e-05,
    -6.246344387707237e-05,
    -3.096134861091375e-05,
    -2.2178506846207644e-06,
    3.3216364632036618e-06,
    9.082062330697875e-07,
    -3.584235054488373e-07,
    -1.7047075254366698e-07,
    5.030150317087349e-08,
    2.9191035738760843e-08,
    -9.802278080881861e-09,
    -4.738532161457736e-09,
    2.32762574267914e-09,
    6.397913260504087e-10,
    -5.719753033667255e-10,
    -3.007528596436605e-11,
    1.289594399828069e-10,
    -2.3088656826962687e-11,
    -2.3183680036736e-11,
    1.1679604563573089e-11,
    1.993286173776819e-12,
    -3.423848733385207e-12,
    6.576325798121769e-13,
    6.178552342509729e-13,
    -3.9419070001815754e-13,
    -6.084167600319181e-15,
    1.0500059010040359e-13,
    -4.226307540955273e-14,
    -9.811784952221559e-15,
    1.5848729315724e-14,
    -4.612299180097318e-15,
    -2.218121152801217e-15,
    2.3791115647678148e-15,
    -5.587647998511998e-16,
    -3.981459635386718e-16,
    3.7118913811012177e-16,
    -8.191911199054995e-17,
    -6.530840206377351e-17,
    6.096344095388795e-17,
    -1.4907405986578482e-17,
    -9.968431284427522e-18,
    1.0454395439229845e-17,
];

/// erfcx(x) for 0 <= x <= 50 from the Chebyshev table. The caller handles the other ranges.
pub fn erfcx_chebyshev(x: f64) -> f64 {
    clenshaw(&ERFCX_COEFFICIENTS, 4.0 / (4.0 + x), ERFCX_T_MIN, 1.0) / (1.0 + x)
}

/// w_im(x) = Im[w(x)] for 0 <= x <= 45 from the Chebyshev tables.
pub fn w_im_chebyshev(x: f64) -> f64 {
    if x < 3.0 {
        x * clenshaw(&W_IM_NEAR_COEFFICIENTS, x * x, 0.0, W_IM_NEAR_U_MAX)
    } else {
        let s = 1.0 / (x * x);
        let correction = s * clenshaw(&W_IM_FAR_COEFFICIENTS, s, W_IM_FAR_S_MIN, W_IM_FAR_S_MAX);
        // leading term added last
        ISPI / x + ISPI * correction / x
    }
}

// Relative error between a computed and an expected value, where NaN and infinite
// values count as exact when both sides agree.
#[cfg(test)]
pub fn relerr(computed: f64, expected: f64) -> f64 {
    if computed.is_nan() || expected.is_nan() || computed.is_infinite() || expected.is_infinite() {
        if computed.is_nan() != expected.is_nan()
            || computed.is_infinite() != expected.is_infinite()
            || (computed.is_infinite() && computed.signum() != expected.signum())
        {
            return f64::INFINITY;
        }
        return 0.0;
    }
    if computed == 0.0 && expected == 0.0 {
        return 0.0;
    }
    ((expected - computed) / expected).abs()
}




#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_clenshaw_polynomial() {
        // T0/2 + 2 T1 + 3 T2 at tau = 0.5: 0.5 + 1 + 3 * (-0.5) = 0
        let value = clenshaw(&[0.5, 2.0, 3.0], 0.875, 0.5, 1.0);
        assert!(value.abs() < 1.0e-15);

        let value = clenshaw(&[0.5, 2.0, 3.0], 1.0, 0.0, 1.0);
        assert!((value - 5.5).abs() < 1.0e-15);
    }

    #[test]
    fn test_sinc_and_sinh_taylor() {
        let x = 3.0e-5;
        assert!(relerr(sinc(x, x.sin()), x.sin() / x) < 1.0e-15);
        let x = 0.7;
        assert_eq!(sinc(x, x.sin()), x.sin() / x);
        let x = 1.0e-3;
        assert!(relerr(sinh_taylor(x), x.sinh()) < 1.0e-15);
    }

    #[test]
    fn test_chebyshev_pieces_meet() {
        assert!(relerr(erfcx_chebyshev(0.0), 1.0) < 1.0e-15);
        let below = w_im_chebyshev(3.0 - 1.0e-14);
        let above = w_im_chebyshev(3.0);
        assert!(relerr(below, above) < 1.0e-13);
        // Im w(3) = exp(-9) erfi(3)
        assert!(relerr(above, 0.2011573170376003866613) < 1.0e-14);
        // erfcx(7.5)
        assert!(relerr(erfcx_chebyshev(7.5), 0.07457369306287668300513) < 1.0e-14);
    }

    #[test]
    fn test_relerr_special_values() {
        assert_eq!(relerr(f64::NAN, f64::NAN), 0.0);
        assert_eq!(relerr(f64::INFINITY, f64::INFINITY), 0.0);
        assert_eq!(relerr(f64::INFINITY, f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(relerr(1.0, f64::NAN), f64::INFINITY);
        assert_eq!(relerr(0.0, -0.0), 0.0);
    }
}
