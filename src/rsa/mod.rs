// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod attack;
pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;

pub use attack::{run_attack_demo, AttackOutcome, UntrustedKey, Verdict};
pub use decrypt::{code_to_char, decrypt_message};
pub use encrypt::{char_to_code, encrypt_message};
pub use error::{CipherError, KeyError};
pub use keygen::{KeyMaterial, RsaPrivateKey, RsaPublicKey};
