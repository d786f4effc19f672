//! Hyperbolic transcendentals over f64.
//!
//! `sinh` and `tanh` use minimax rational approximations below a fixed
//! crossover and exponential forms above it, with the sign computed on the
//! magnitude and restored afterwards. The inverses follow the classic
//! branch layout: `ln 2 + ln x` once the argument is large enough that the
//! squared terms would overflow, `log1p`-based forms near the bottom of the
//! domain where the naive logarithm cancels.

use std::f64::consts::LN_2;

// 2^-28 / 2^28, below/above which the log1p machinery degenerates to the
// identity / plain logarithm for double precision.
const SMALL_ARG: f64 = 3.7252902984619140625e-9;
const LARGE_ARG: f64 = 268435456.0;

// tanh hands over to the exponential form at atanh(1/2).
const TANH_CROSSOVER: f64 = 0.5493061443340548457;

const SINH_P: [f64; 4] = [
    -7.89474443963537015605e-1,
    -1.63725857525983828727e2,
    -1.15614435765005216044e4,
    -3.51754964808151394800e5,
];
const SINH_Q: [f64; 3] = [
    -2.77711081420602794433e2,
    3.61578279834431989373e4,
    -2.11052978884890840399e6,
];

const TANH_P: [f64; 3] = [
    -9.64399179425052238628e-1,
    -9.92877231001918586564e1,
    -1.61468768441708447952e3,
];
const TANH_Q: [f64; 3] = [
    1.12811678491632931402e2,
    2.23548839060100448583e3,
    4.84406305325125486048e3,
];

fn polevl(x: f64, coef: &[f64]) -> f64 {
    let mut acc = coef[0];
    for &c in &coef[1..] {
        acc = acc * x + c;
    }
    acc
}

// Like polevl with an implicit leading coefficient of 1.
fn p1evl(x: f64, coef: &[f64]) -> f64 {
    let mut acc = x + coef[0];
    for &c in &coef[1..] {
        acc = acc * x + c;
    }
    acc
}

/// Hyperbolic cosine. Total; `cosh(0) == 1` exactly.
pub fn cosh(x: f64) -> f64 {
    let e = x.abs().exp();
    0.5 * e + 0.5 / e
}

/// Hyperbolic sine. Total and odd; `sinh(0) == 0` exactly.
pub fn sinh(x: f64) -> f64 {
    let a = x.abs();
    if a <= 1.0 {
        // x + x^3/6 + ... as x + x*z*R(z), exact at zero
        let z = x * x;
        x + x * z * polevl(z, &SINH_P) / p1evl(z, &SINH_Q)
    } else {
        let e = a.exp();
        let r = 0.5 * e - 0.5 / e;
        if x < 0.0 { -r } else { r }
    }
}

/// Hyperbolic tangent. Total and odd; `tanh(0) == 0` exactly.
pub fn tanh(x: f64) -> f64 {
    let a = x.abs();
    if a < TANH_CROSSOVER {
        let z = x * x;
        x + x * z * polevl(z, &TANH_P) / p1evl(z, &TANH_Q)
    } else {
        // 1 - 2/(e^{2a} + 1), written so large arguments underflow to 1
        let e = (-2.0 * a).exp();
        let r = 1.0 - 2.0 * e / (e + 1.0);
        if x < 0.0 { -r } else { r }
    }
}

/// `ln(1 + x)` without cancellation near zero: the naive logarithm is
/// corrected by `x / ((1+x) - 1)`. Returns `x` when `1 + x` rounds to `1`.
pub fn log1p(x: f64) -> f64 {
    let u = 1.0 + x;
    if u == 1.0 { x } else { x * u.ln() / (u - 1.0) }
}

/// Inverse hyperbolic cosine. NaN below 1, exactly `0` at 1.
pub fn acosh(x: f64) -> f64 {
    if x < 1.0 {
        f64::NAN
    } else if x == 1.0 {
        0.0
    } else if x > LARGE_ARG {
        x.ln() + LN_2
    } else if x > 2.0 {
        (2.0 * x - 1.0 / (x + (x * x - 1.0).sqrt())).ln()
    } else {
        let t = x - 1.0;
        log1p(t + (2.0 * t + t * t).sqrt())
    }
}

/// Inverse hyperbolic sine. Total and odd; arguments below 2^-28 are
/// returned unchanged.
pub fn asinh(x: f64) -> f64 {
    let a = x.abs();
    if a < SMALL_ARG {
        return x;
    }
    let r = if a > LARGE_ARG {
        a.ln() + LN_2
    } else if a > 2.0 {
        (2.0 * a + 1.0 / ((a * a + 1.0).sqrt() + a)).ln()
    } else {
        let t = a * a;
        log1p(a + t / (1.0 + (1.0 + t).sqrt()))
    };
    if x < 0.0 { -r } else { r }
}

/// Inverse hyperbolic tangent on `(-1, 1)`. Signed infinity at `±1`,
/// NaN outside the closed interval.
pub fn atanh(x: f64) -> f64 {
    let a = x.abs();
    if a > 1.0 {
        return f64::NAN;
    }
    if a == 1.0 {
        return if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let r = if a < 0.5 {
        let t = a + a;
        0.5 * log1p(t + t * a / (1.0 - a))
    } else {
        0.5 * log1p((a + a) / (1.0 - a))
    };
    if x < 0.0 { -r } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 14] = [
        -30.0, -5.0, -1.5, -1.0, -0.7, -0.3, 1e-5, 0.2, 0.549, 0.8, 1.0, 2.3, 10.0, 25.0,
    ];

    #[test]
    fn exact_values_at_zero() {
        assert_eq!(cosh(0.0), 1.0);
        assert_eq!(sinh(0.0), 0.0);
        assert_eq!(tanh(0.0), 0.0);
        assert_eq!(log1p(0.0), 0.0);
        assert_eq!(acosh(1.0), 0.0);
        assert_eq!(asinh(0.0), 0.0);
        assert_eq!(atanh(0.0), 0.0);
    }

    #[test]
    fn matches_std_across_both_branches() {
        for x in SAMPLES {
            let tol = 1e-13 * x.sinh().abs().max(1.0);
            assert!((sinh(x) - x.sinh()).abs() < tol, "sinh({x})");
            assert!((cosh(x) - x.cosh()).abs() < 1e-13 * x.cosh(), "cosh({x})");
            assert!((tanh(x) - x.tanh()).abs() < 1e-14, "tanh({x})");
        }
    }

    #[test]
    fn odd_symmetry_is_exact() {
        for x in [1e-7, 0.3, 0.549, 0.7, 1.0, 4.2, 40.0] {
            assert_eq!(sinh(-x), -sinh(x));
            assert_eq!(tanh(-x), -tanh(x));
            assert_eq!(asinh(-x), -asinh(x));
        }
        for x in [1e-7, 0.3, 0.49, 0.5, 0.73, 0.999] {
            assert_eq!(atanh(-x), -atanh(x));
        }
    }

    #[test]
    fn fundamental_identity() {
        for x in [0.1, 0.9, 1.0, 3.7, 15.0] {
            let c = cosh(x);
            let s = sinh(x);
            assert!((c * c - s * s - 1.0).abs() < 1e-10 * c * c);
        }
    }

    #[test]
    fn acosh_inverts_cosh() {
        for x in [0.01, 0.1, 0.5, 1.0, 2.0, 5.0, 28.9, 500.0] {
            let back = acosh(cosh(x));
            assert!((back - x).abs() < 1e-11, "acosh(cosh({x})) = {back}");
        }
        // sign collapses onto the magnitude
        assert!((acosh(cosh(-3.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn asinh_inverts_sinh() {
        for x in SAMPLES {
            let back = sinh(asinh(x));
            assert!((back - x).abs() < 1e-13 * x.abs().max(1.0), "x = {x}");
        }
    }

    #[test]
    fn atanh_inverts_tanh() {
        for x in [-0.999, -0.73, -0.5, -0.1, 1e-9, 0.25, 0.5, 0.85, 0.999] {
            let back = tanh(atanh(x));
            assert!((back - x).abs() < 1e-13, "x = {x}");
        }
    }

    #[test]
    fn acosh_domain_edges() {
        assert!(acosh(0.999).is_nan());
        assert!(acosh(-5.0).is_nan());
        assert_eq!(acosh(f64::INFINITY), f64::INFINITY);
        // log1p branch just above 1, ln2+ln branch far above 2^28
        assert!(acosh(1.0 + 1e-12) > 0.0);
        let big = 1e12;
        assert!((acosh(big) - (big.ln() + LN_2)).abs() < 1e-9);
    }

    #[test]
    fn atanh_domain_edges() {
        assert_eq!(atanh(1.0), f64::INFINITY);
        assert_eq!(atanh(-1.0), f64::NEG_INFINITY);
        assert!(atanh(1.0000001).is_nan());
        assert!(atanh(-42.0).is_nan());
    }

    #[test]
    fn tiny_arguments_pass_through() {
        assert_eq!(asinh(1e-30), 1e-30);
        assert_eq!(asinh(-1e-30), -1e-30);
        assert_eq!(log1p(1e-300), 1e-300);
    }

    #[test]
    fn log1p_near_zero_precision() {
        // ln(1+x) = x - x^2/2 + O(x^3)
        let x = 1e-8;
        let expected = x - 0.5 * x * x;
        assert!((log1p(x) - expected).abs() < 1e-24);
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert!((log1p(1.0) - LN_2).abs() < 1e-15);
    }
}
