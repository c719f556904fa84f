//! Toy RSA over small fixed primes.
//!
//! Number theory primitives on arbitrary-precision integers, a lossy
//! character-by-character cipher built on them, and a demonstration of a
//! forged message failing the receiver's check. Not for real cryptography:
//! no padding, no primality testing, no constant-time arithmetic.

pub mod config;
pub mod rsa;
pub mod ui;
pub mod util;
