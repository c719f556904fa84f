// Forged Message Demonstration
// An attacker encrypts under an unrelated key; the receiver's check rejects it

use std::fmt;
use std::ops::RangeInclusive;

use num_traits::ToPrimitive;
use tracing::debug;

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::decrypt::decrypt_code;
use super::error::CipherError;
use super::keygen::KeyMaterial;
use crate::config::AttackConfig;

/// Recovered values outside this window mark the message as forged.
pub const PRINTABLE_RANGE: RangeInclusive<u32> = 32..=255;

/// Message reported when verification fails.
pub const REJECTION_MESSAGE: &str =
    "Invalid message: signature does not match the sender's key, message rejected";

/// Message reported when every recovered value is printable.
pub const ACCEPTANCE_MESSAGE: &str = "Message verified with the receiver's key";

/// Attacker-supplied key pair. Never checked against `(e * d) mod phi == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct UntrustedKey {
    pub n: RsaBigInt,
    pub e: RsaBigInt,
    pub d: RsaBigInt,
}

impl UntrustedKey {
    pub fn new(n: u64, e: u64, d: u64) -> Self {
        Self {
            n: from_u64(n),
            e: from_u64(e),
            d: from_u64(d),
        }
    }
}

impl From<&AttackConfig> for UntrustedKey {
    fn from(config: &AttackConfig) -> Self {
        Self::new(config.n, config.e, config.d)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Accepted => ACCEPTANCE_MESSAGE,
            Verdict::Rejected => REJECTION_MESSAGE,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of running the forged-message demonstration.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    /// Forged ciphertext tokens, in message order.
    pub forged_tokens: Vec<RsaBigInt>,
    /// Values recovered with the receiver's private key.
    pub recovered: Vec<RsaBigInt>,
    pub verdict: Verdict,
}

impl AttackOutcome {
    /// Space-joined forged ciphertext.
    pub fn forged_ciphertext(&self) -> String {
        self.forged_tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Recovered values that fell outside [`PRINTABLE_RANGE`].
    pub fn out_of_range(&self) -> impl Iterator<Item = &RsaBigInt> {
        self.recovered.iter().filter(|value| !is_printable(value))
    }
}

fn is_printable(value: &RsaBigInt) -> bool {
    value
        .to_u32()
        .is_some_and(|v| PRINTABLE_RANGE.contains(&v))
}

/// Encrypt with the attacker's key using raw code points, not the letter mapping.
pub fn forge_ciphertext(message: &str, key: &UntrustedKey) -> Vec<RsaBigInt> {
    message
        .chars()
        .map(|ch| mod_pow(&RsaBigInt::from(u32::from(ch)), &key.e, &key.n))
        .collect()
}

/// Decrypt forged tokens with the receiver's private key and classify them.
pub fn verify_forged(
    forged_tokens: Vec<RsaBigInt>,
    receiver: &KeyMaterial,
) -> Result<AttackOutcome, CipherError> {
    let private_key = receiver.private_key()?;
    let recovered: Vec<RsaBigInt> = forged_tokens
        .iter()
        .map(|token| decrypt_code(token, &private_key))
        .collect();

    let verdict = if recovered.iter().all(is_printable) {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    };

    debug!(tokens = forged_tokens.len(), ?verdict, "verified forged message");

    Ok(AttackOutcome {
        forged_tokens,
        recovered,
        verdict,
    })
}

/// Forge the configured message and run it through the receiver's check.
pub fn run_attack_demo(
    config: &AttackConfig,
    receiver: &KeyMaterial,
) -> Result<AttackOutcome, CipherError> {
    let key = UntrustedKey::from(config);
    let forged = forge_ciphertext(&config.message, &key);
    verify_forged(forged, receiver)
}
