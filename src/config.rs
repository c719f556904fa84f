// Demo configuration
// Key parameters for the receiver and the attacker; defaults are the fixed demo constants

/// Receiver key parameters. `d` is always derived, never configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    pub p: u64,
    pub q: u64,
    pub e: u64,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self { p: 61, q: 53, e: 17 }
    }
}

impl CipherConfig {
    pub fn with_primes(mut self, p: u64, q: u64) -> Self {
        self.p = p;
        self.q = q;
        self
    }

    pub fn with_exponent(mut self, e: u64) -> Self {
        self.e = e;
        self
    }
}

/// Attacker key pair and forged message. Taken as given, never validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackConfig {
    pub n: u64,
    pub e: u64,
    pub d: u64,
    pub message: String,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            n: 187,
            e: 7,
            d: 23,
            message: "Mensaje falsificado por el hacker".to_string(),
        }
    }
}

impl AttackConfig {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}
