//! Secure random capability.
//!
//! Generation code is generic over `Rng + CryptoRng`, so tests can inject a
//! seeded CSPRNG while everything else draws from the operating system.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Any cryptographically secure generator usable for password draws.
pub trait SecureRandom: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecureRandom for T {}

/// The OS entropy source used outside of tests. Never seeded from
/// predictable state; every call defers to the platform CSPRNG.
pub fn system() -> impl SecureRandom {
    OsRng
}
