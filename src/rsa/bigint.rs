// RSA Big Integer Operations
// Number theory over num-bigint: gcd, extended Euclid, modular inverse and exponentiation

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// RSA Big Integer type alias
///
/// Signed so that Bezout coefficients and remainders keep the sign they
/// naturally fall out with.
pub type RsaBigInt = BigInt;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Greatest common divisor (classical Euclid).
///
/// The sign is not normalized: for negative inputs the result carries
/// whatever sign the truncating remainder leaves on the last non-zero value.
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }

    a
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &RsaBigInt, b: &RsaBigInt) -> (RsaBigInt, RsaBigInt, RsaBigInt) {
    let mut a = a.clone();
    let mut b = b.clone();
    let (mut x0, mut y0) = (RsaBigInt::one(), RsaBigInt::zero());
    let (mut x1, mut y1) = (RsaBigInt::zero(), RsaBigInt::one());

    while !b.is_zero() {
        // Truncating division, same as `/` and `%` on BigInt
        let (q, r) = a.div_rem(&b);
        a = b;
        b = r;

        let x2 = &x0 - &q * &x1;
        let y2 = &y0 - &q * &y1;
        x0 = x1;
        y0 = y1;
        x1 = x2;
        y1 = y2;
    }

    (a, x0, y0)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
///
/// The returned value lies in `[0, m)`. `m` must be positive.
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    let (gcd, x, _) = extended_gcd(a, m);

    if !gcd.is_one() {
        return None;
    }

    let mut result = x % m;
    if result.is_negative() {
        result += m;
    }

    Some(result)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses right-to-left square-and-multiply
///
/// Requires `exp >= 0` and `modulus >= 1`. A negative `base` yields a
/// negative residue, exactly as the truncating remainder produces it.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while exp.is_positive() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Pow;
    use proptest::prelude::*;

    fn big(n: i64) -> RsaBigInt {
        RsaBigInt::from(n)
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&big(48), &big(18)), big(6));
        assert_eq!(gcd(&big(17), &big(3120)), big(1));
        assert_eq!(gcd(&big(42), &big(0)), big(42));
        assert_eq!(gcd(&big(0), &big(42)), big(42));
    }

    #[test]
    fn test_gcd_keeps_remainder_sign() {
        // -12 % 8 = -4, 8 % -4 = 0
        assert_eq!(gcd(&big(-12), &big(8)), big(-4));
        assert_eq!(gcd(&big(-7), &big(0)), big(-7));
    }

    #[test]
    fn test_extended_gcd() {
        let (g, x, y) = extended_gcd(&big(240), &big(46));
        assert_eq!(g, big(2));
        assert_eq!(big(240) * &x + big(46) * &y, g);

        let (g, x, y) = extended_gcd(&big(17), &big(3120));
        assert_eq!(g, big(1));
        assert_eq!(x, big(-367));
        assert_eq!(y, big(2));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let inv = mod_inverse(&big(3), &big(7)).unwrap();
        assert_eq!(inv, big(5));

        assert_eq!(mod_inverse(&big(17), &big(3120)), Some(big(2753)));
    }

    #[test]
    fn test_mod_inverse_missing() {
        assert_eq!(mod_inverse(&big(4), &big(8)), None);
        assert_eq!(mod_inverse(&big(15), &big(3120)), None);
    }

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        assert_eq!(mod_pow(&big(3), &big(5), &big(7)), big(5));
        assert_eq!(mod_pow(&big(8), &big(17), &big(3233)), big(2041));
        assert_eq!(mod_pow(&big(9), &big(17), &big(3233)), big(1972));
    }

    #[test]
    fn test_mod_pow_edges() {
        // exp = 0 gives 1 mod m
        assert_eq!(mod_pow(&big(123), &big(0), &big(10)), big(1));
        assert_eq!(mod_pow(&big(123), &big(0), &big(1)), big(0));
        // base larger than modulus is reduced first
        assert_eq!(mod_pow(&big(3240), &big(1), &big(3233)), big(7));
        assert_eq!(mod_pow(&big(0), &big(17), &big(3233)), big(0));
    }

    proptest! {
        #[test]
        fn gcd_is_symmetric(a in 1u64.., b in 1u64..) {
            prop_assert_eq!(gcd(&from_u64(a), &from_u64(b)), gcd(&from_u64(b), &from_u64(a)));
            prop_assert_eq!(gcd(&from_u64(a), &RsaBigInt::zero()), from_u64(a));
        }

        #[test]
        fn mod_inverse_matches_gcd(e in 1u64..100_000, phi in 2u64..100_000) {
            let (e, phi) = (from_u64(e), from_u64(phi));
            match mod_inverse(&e, &phi) {
                Some(d) => {
                    prop_assert!(gcd(&e, &phi).is_one());
                    prop_assert!(!d.is_negative() && d < phi);
                    prop_assert!(((&e * &d) % &phi).is_one());
                }
                None => prop_assert!(!gcd(&e, &phi).is_one()),
            }
        }

        #[test]
        fn mod_pow_matches_exact_power(base in 0u64..10_000, exp in 0u32..64, modulus in 1u64..10_000) {
            let expected = Pow::pow(from_u64(base), exp) % from_u64(modulus);
            prop_assert_eq!(mod_pow(&from_u64(base), &RsaBigInt::from(exp), &from_u64(modulus)), expected);
        }
    }
}
