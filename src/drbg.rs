//! The DRBG boundary consumed by key generation (spec §6). This crate does
//! not implement HMAC-DRBG or any entropy source — only the trait a caller
//! satisfies, and a deterministic test double for reproducible tests.

use rand_core::RngCore;

use crate::error::NtruError;

/// A seeded byte oracle. Implementations are expected to be a properly
/// instantiated DRBG (e.g. HMAC-DRBG) at the requested security strength;
/// this crate only consumes the interface.
pub trait Drbg {
    /// Fills `out` with `out.len()` bytes at the given security strength
    /// (bits). Mirrors spec §6's `generate(handle, strength_bits, n_bytes,
    /// out)`.
    fn generate(&mut self, strength_bits: u32, out: &mut [u8]) -> Result<(), NtruError>;
}

/// A deterministic, non-cryptographic `Drbg` for tests: wraps any
/// `rand_core::RngCore` (e.g. `rand_xorshift::XorShiftRng`) so keygen tests
/// are reproducible without standing up a real HMAC-DRBG.
pub struct RngDrbg<R> {
    rng: R,
}

impl<R: RngCore> RngDrbg<R> {
    pub fn new(rng: R) -> Self {
        RngDrbg { rng }
    }
}

impl<R: RngCore> Drbg for RngDrbg<R> {
    fn generate(&mut self, _strength_bits: u32, out: &mut [u8]) -> Result<(), NtruError> {
        self.rng.fill_bytes(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xorshift::XorShiftRng;
    use rand_core::SeedableRng;

    #[test]
    fn rng_drbg_is_deterministic_for_same_seed() {
        let mut a = RngDrbg::new(XorShiftRng::seed_from_u64(42));
        let mut b = RngDrbg::new(XorShiftRng::seed_from_u64(42));
        let mut out_a = [0u8; 32];
        let mut out_b = [0u8; 32];
        a.generate(128, &mut out_a).unwrap();
        b.generate(128, &mut out_b).unwrap();
        assert_eq!(out_a, out_b);
    }
}
