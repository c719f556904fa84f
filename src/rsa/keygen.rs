// RSA Key Material
// Derives the demo key pair from two fixed small primes

use num_traits::One;
use tracing::debug;

use super::bigint::{from_u64, mod_inverse, RsaBigInt};
use super::error::{CipherError, KeyError};
use crate::config::CipherConfig;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
}

/// Key material derived once at startup and shared read-only afterwards.
///
/// `d` is `None` when `e` has no inverse modulo `phi`; decryption is then
/// refused with [`CipherError::MissingPrivateExponent`].
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMaterial {
    n: RsaBigInt,
    e: RsaBigInt,
    d: Option<RsaBigInt>,
    phi: RsaBigInt,
}

impl KeyMaterial {
    /// Derive `n = p*q`, `phi = (p-1)(q-1)` and `d = e^(-1) mod phi`.
    ///
    /// No primality test is performed on `p` and `q`.
    pub fn from_primes(p: u64, q: u64, e: u64) -> Result<Self, KeyError> {
        for factor in [p, q] {
            if factor < 2 {
                return Err(KeyError::DegeneratePrime(factor));
            }
        }
        if e == 0 {
            return Err(KeyError::ZeroExponent);
        }

        let p = from_u64(p);
        let q = from_u64(q);
        let e = from_u64(e);

        let n = &p * &q;
        let phi = (&p - 1u8) * (&q - 1u8);
        let d = mod_inverse(&e, &phi);

        debug!(%n, %phi, %e, has_d = d.is_some(), "derived key material");

        Ok(Self { n, e, d, phi })
    }

    /// Key material for the given configuration.
    pub fn from_config(config: &CipherConfig) -> Result<Self, KeyError> {
        Self::from_primes(config.p, config.q, config.e)
    }

    /// The fixed demo key: p=61, q=53, e=17.
    pub fn demo() -> Result<Self, KeyError> {
        Self::from_config(&CipherConfig::default())
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    pub fn d(&self) -> Option<&RsaBigInt> {
        self.d.as_ref()
    }

    pub fn phi(&self) -> &RsaBigInt {
        &self.phi
    }

    pub fn has_private_exponent(&self) -> bool {
        self.d.is_some()
    }

    /// `(e * d) mod phi == 1`. False when `d` is absent.
    pub fn check_invariant(&self) -> bool {
        match &self.d {
            Some(d) => ((&self.e * d) % &self.phi).is_one(),
            None => false,
        }
    }

    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    /// The private half, or a configuration error if `d` is absent.
    pub fn private_key(&self) -> Result<RsaPrivateKey, CipherError> {
        let d = self.d.clone().ok_or(CipherError::MissingPrivateExponent)?;
        Ok(RsaPrivateKey {
            n: self.n.clone(),
            d,
        })
    }
}
