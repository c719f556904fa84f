// Application layer
// Collects input, refuses empty messages, calls the cipher and shows the results

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use super::cli::{Cli, Command, IoArgs};
use crate::config::{AttackConfig, CipherConfig};
use crate::rsa::{decrypt_message, encrypt_message, run_attack_demo, KeyMaterial, Verdict};
use crate::util::file_ops::{read_message, write_message};

/// Run one command to completion.
pub fn run(cli: Cli) -> Result<()> {
    let config = CipherConfig::from(&cli.key);
    let keys = KeyMaterial::from_config(&config).context("Failed to derive key material")?;

    info!(n = %keys.n(), e = %keys.e(), "key material ready");
    if !keys.has_private_exponent() {
        warn!(e = config.e, "public exponent has no inverse modulo phi; decryption is disabled");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Keys => show_keys(&keys, &mut out),
        Command::Encrypt(args) => {
            let plaintext = read_input(&args)?;
            let ciphertext = encrypt(&keys, &plaintext)?;
            emit(&args, &ciphertext, &mut out)
        }
        Command::Decrypt(args) => {
            let ciphertext = read_input(&args)?;
            let plaintext = decrypt(&keys, &ciphertext)?;
            emit(&args, &plaintext, &mut out)
        }
        Command::Attack { message } => {
            let mut attack = AttackConfig::default();
            if let Some(message) = message {
                attack = attack.with_message(message);
            }
            show_attack(&keys, &attack, &mut out)
        }
    }
}

/// Encrypt after refusing empty input.
pub fn encrypt(keys: &KeyMaterial, plaintext: &str) -> Result<String> {
    if plaintext.is_empty() {
        bail!("Nothing to encrypt: the message is empty");
    }

    let ciphertext = encrypt_message(plaintext, &keys.public_key());
    info!("Text encrypted successfully");
    Ok(ciphertext)
}

/// Decrypt after refusing empty input and checking the private exponent.
pub fn decrypt(keys: &KeyMaterial, ciphertext: &str) -> Result<String> {
    if ciphertext.trim().is_empty() {
        bail!("Nothing to decrypt: the ciphertext is empty");
    }

    let private_key = keys.private_key().context("Invalid key configuration")?;
    let plaintext = decrypt_message(ciphertext, &private_key).context("Decryption failed")?;
    info!("Text decrypted successfully");
    Ok(plaintext)
}

fn read_input(args: &IoArgs) -> Result<String> {
    match (&args.text, &args.input) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => {
            read_message(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        (None, None) => bail!("No input: pass the text or --input FILE"),
    }
}

fn emit(args: &IoArgs, result: &str, out: &mut impl Write) -> Result<()> {
    match &args.output {
        Some(path) => {
            write_message(path, result)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "result written");
            Ok(())
        }
        None => {
            writeln!(out, "{}", result)?;
            Ok(())
        }
    }
}

fn show_keys(keys: &KeyMaterial, out: &mut impl Write) -> Result<()> {
    writeln!(out, "n   = {}", keys.n())?;
    writeln!(out, "phi = {}", keys.phi())?;
    writeln!(out, "e   = {}", keys.e())?;
    match keys.d() {
        Some(d) => writeln!(out, "d   = {}", d)?,
        None => writeln!(out, "d   = absent (e has no inverse modulo phi)")?,
    }
    Ok(())
}

fn show_attack(keys: &KeyMaterial, attack: &AttackConfig, out: &mut impl Write) -> Result<()> {
    let outcome = run_attack_demo(attack, keys).context("Attack verification failed")?;

    if outcome.verdict == Verdict::Rejected {
        warn!(
            out_of_range = outcome.out_of_range().count(),
            "forged message rejected"
        );
    }

    writeln!(out, "Forged message:    {}", attack.message)?;
    writeln!(out, "Forged ciphertext: {}", outcome.forged_ciphertext())?;
    writeln!(out, "{}", outcome.verdict)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::CipherError;

    fn demo_keys() -> KeyMaterial {
        KeyMaterial::demo().unwrap()
    }

    #[test]
    fn test_encrypt_refuses_empty() {
        let err = encrypt(&demo_keys(), "").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_decrypt_refuses_blank() {
        let err = decrypt(&demo_keys(), "  \n").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let keys = demo_keys();
        let ciphertext = encrypt(&keys, "hi").unwrap();

        assert_eq!(ciphertext, "2041 1972");
        assert_eq!(decrypt(&keys, &ciphertext).unwrap(), "hi");
    }

    #[test]
    fn test_decrypt_without_private_exponent() {
        let keys = KeyMaterial::from_primes(61, 53, 15).unwrap();
        let err = decrypt(&keys, "2041 1972").unwrap_err();

        assert_eq!(
            err.downcast_ref::<CipherError>(),
            Some(&CipherError::MissingPrivateExponent)
        );
    }

    #[test]
    fn test_failed_decrypt_leaves_keys_usable() {
        let keys = demo_keys();
        assert!(decrypt(&keys, "12 x7").is_err());
        assert_eq!(decrypt(&keys, "2041 1972").unwrap(), "hi");
        assert!(keys.check_invariant());
    }

    #[test]
    fn test_show_keys() {
        let mut out = Vec::new();
        show_keys(&demo_keys(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("n   = 3233"));
        assert!(text.contains("d   = 2753"));
    }

    #[test]
    fn test_show_attack() {
        let mut out = Vec::new();
        show_attack(&demo_keys(), &AttackConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Forged ciphertext: 121 84 66"));
        assert!(text.contains(Verdict::Rejected.message()));
    }
}
