// Toy RSA Encryption
// Encrypts one character at a time, emitting space-separated decimal tokens

use tracing::debug;

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::RsaPublicKey;

/// Map a character to its small-integer code.
///
/// Space is 0, ASCII letters are 1..=26 regardless of case, anything else
/// is its code point plus 26.
pub fn char_to_code(ch: char) -> RsaBigInt {
    if ch == ' ' {
        RsaBigInt::from(0u32)
    } else if ch.is_ascii_alphabetic() {
        RsaBigInt::from(u32::from(ch.to_ascii_lowercase()) - 96)
    } else {
        RsaBigInt::from(u32::from(ch) + 26)
    }
}

/// Encrypt a single character code: c = m^e mod n
pub fn encrypt_code(code: &RsaBigInt, public_key: &RsaPublicKey) -> RsaBigInt {
    mod_pow(code, &public_key.e, &public_key.n)
}

/// Encrypt a message character by character.
///
/// Every character, repeats included, yields one token in order. An empty
/// message gives an empty string; refusing empty input is the caller's job.
pub fn encrypt_message(plaintext: &str, public_key: &RsaPublicKey) -> String {
    let tokens: Vec<String> = plaintext
        .chars()
        .map(|ch| encrypt_code(&char_to_code(ch), public_key).to_string())
        .collect();

    debug!(tokens = tokens.len(), "encrypted message");

    tokens.join(" ")
}
