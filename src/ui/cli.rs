// Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::CipherConfig;

#[derive(Debug, Parser)]
#[command(
    name = "toy-rsa",
    about = "Toy RSA: character-wise encryption over small primes",
    version
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(flatten)]
    pub key: KeyArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Receiver key parameters
#[derive(Debug, Args)]
pub struct KeyArgs {
    /// First prime factor
    #[arg(long, default_value_t = 61, global = true)]
    pub p: u64,

    /// Second prime factor
    #[arg(long, default_value_t = 53, global = true)]
    pub q: u64,

    /// Public exponent
    #[arg(long, default_value_t = 17, global = true)]
    pub e: u64,
}

impl From<&KeyArgs> for CipherConfig {
    fn from(args: &KeyArgs) -> Self {
        CipherConfig::default()
            .with_primes(args.p, args.q)
            .with_exponent(args.e)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the derived key material
    Keys,

    /// Encrypt a message into space-separated decimal tokens
    Encrypt(IoArgs),

    /// Decrypt space-separated decimal tokens
    Decrypt(IoArgs),

    /// Forge a message under an attacker key and run the receiver's check
    Attack {
        /// Forged message to use instead of the default
        #[arg(long)]
        message: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct IoArgs {
    /// Text to process; read from --input when omitted
    #[arg(conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
