// Toy RSA Decryption
// Parses whitespace-separated tokens and maps each decrypted value back to a character

use num_traits::ToPrimitive;
use tracing::debug;

use super::bigint::{mod_pow, RsaBigInt};
use super::error::CipherError;
use super::keygen::RsaPrivateKey;

/// Map a decrypted code back to a character.
///
/// 1..=26 always come back as lowercase letters; case does not survive the
/// round trip. Values that are negative, too large, or land on a surrogate
/// are reported as [`CipherError::UnmappableCode`].
pub fn code_to_char(code: &RsaBigInt) -> Result<char, CipherError> {
    let unmappable = || CipherError::UnmappableCode(code.clone());
    let m = code.to_u32().ok_or_else(unmappable)?;

    match m {
        0 => Ok(' '),
        1..=26 => char::from_u32(96 + m).ok_or_else(unmappable),
        _ => char::from_u32(m - 26).ok_or_else(unmappable),
    }
}

/// Decrypt a single value: m = c^d mod n
pub fn decrypt_code(cipher: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaBigInt {
    mod_pow(cipher, &private_key.d, &private_key.n)
}

/// Parse one ciphertext token.
pub fn parse_token(token: &str) -> Result<RsaBigInt, CipherError> {
    token
        .parse::<RsaBigInt>()
        .map_err(|source| CipherError::MalformedToken {
            token: token.to_string(),
            source,
        })
}

/// Decrypt a whitespace-separated ciphertext.
///
/// Runs of whitespace are skipped; any other malformed token aborts the
/// whole decryption.
pub fn decrypt_message(ciphertext: &str, private_key: &RsaPrivateKey) -> Result<String, CipherError> {
    let mut plaintext = String::new();

    for token in ciphertext.split_whitespace() {
        let cipher = parse_token(token)?;
        let code = decrypt_code(&cipher, private_key);
        plaintext.push(code_to_char(&code)?);
    }

    debug!(chars = plaintext.chars().count(), "decrypted message");

    Ok(plaintext)
}
