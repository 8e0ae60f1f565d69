//! MGF-1 bit stream: `hash(seed || big-endian u32 counter)`, repeated and
//! consumed bit by bit (module B).

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::NtruError;
use crate::hash::HashAlgorithm;

/// A growable byte stream produced by repeated MGF-1 hashing, exposing a
/// bit cursor so callers (IGF-2) can draw arbitrary-width candidates that
/// need not align to byte or hash-block boundaries.
pub struct Mgf1 {
    hash: HashAlgorithm,
    seed: Vec<u8>,
    counter: u32,
    bytes: Vec<u8>,
    /// Index of the next unread bit, MSB-first within `bytes`.
    bit_pos: usize,
}

impl Mgf1 {
    /// Builds the initial stream of `min_hash_calls * md_len` bytes, per
    /// spec §4.B step 1.
    pub fn new(hash: HashAlgorithm, seed: &[u8], min_hash_calls: u32) -> Result<Self, NtruError> {
        let mut stream = Mgf1 {
            hash,
            seed: seed.to_vec(),
            counter: 0,
            bytes: Vec::new(),
            bit_pos: 0,
        };
        for _ in 0..min_hash_calls {
            stream.extend_one_block()?;
        }
        Ok(stream)
    }

    fn extend_one_block(&mut self) -> Result<(), NtruError> {
        let mut input = Vec::with_capacity(self.seed.len() + 4);
        input.extend_from_slice(&self.seed);
        input
            .write_u32::<BigEndian>(self.counter)
            .expect("writing to a Vec cannot fail");
        self.counter += 1;

        let md_len = self.hash.md_len();
        let mut block = vec![0u8; md_len];
        self.hash.digest_into(&input, &mut block)?;
        self.bytes.extend_from_slice(&block);
        Ok(())
    }

    /// Draws exactly `bits` bits, MSB-first within the stream, as the low
    /// bits of a `u32`. Extends the underlying hash stream by one further
    /// block whenever it is exhausted.
    pub fn next_bits(&mut self, bits: u32) -> Result<u32, NtruError> {
        debug_assert!(bits <= 32, "candidate width must fit in a u32");
        let mut value: u32 = 0;
        for _ in 0..bits {
            if self.bit_pos >= self.bytes.len() * 8 {
                self.extend_one_block()?;
            }
            let byte = self.bytes[self.bit_pos / 8];
            let bit = (byte >> (7 - (self.bit_pos % 8))) & 1;
            value = (value << 1) | bit as u32;
            self.bit_pos += 1;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_seed() {
        let mut a = Mgf1::new(HashAlgorithm::Sha256, b"seed", 1).unwrap();
        let mut b = Mgf1::new(HashAlgorithm::Sha256, b"seed", 1).unwrap();
        for _ in 0..40 {
            assert_eq!(a.next_bits(13).unwrap(), b.next_bits(13).unwrap());
        }
    }

    #[test]
    fn extends_past_initial_blocks() {
        let mut stream = Mgf1::new(HashAlgorithm::Sha1, b"s", 1).unwrap();
        // SHA-1 md_len is 20 bytes = 160 bits; draw well past that.
        for _ in 0..30 {
            stream.next_bits(16).unwrap();
        }
    }
}
