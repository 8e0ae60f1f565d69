//! End-to-end integration tests for key generation (spec §8 scenario 6):
//! for every catalog parameter set, a generated keypair's public element
//! `h` must satisfy `h(1) mod q = 3`.
//!
//! These drive the crate purely through its public API (`generate_keypair`,
//! `encoding::parse_frame`, `params::CATALOG`), decoding the packed-dense
//! payload locally the same way `encoding::pack_dense` produced it.

use ntru_core::drbg::RngDrbg;
use ntru_core::encoding::{parse_frame, PackedIndicesEncoder};
use ntru_core::keygen::generate_keypair;
use ntru_core::params::{self, ParamSet};
use rand_core::SeedableRng;
use rand_xorshift::XorShiftRng;

/// Inverse of `encoding::pack_dense`: unpacks `n` big-endian, MSB-first
/// `bits`-wide fields from a byte buffer.
fn unpack_dense(bytes: &[u8], n: usize, bits: u32) -> Vec<u16> {
    let mut out = vec![0u16; n];
    let mut bit_pos: u64 = 0;
    for slot in out.iter_mut() {
        let mut v: u32 = 0;
        for _ in 0..bits {
            let byte = bytes[(bit_pos / 8) as usize];
            let shift = 7 - (bit_pos % 8);
            let bit = (byte >> shift) & 1;
            v = (v << 1) | bit as u32;
            bit_pos += 1;
        }
        *slot = v as u16;
    }
    out
}

fn h_at_one_mod_q(h: &[u16], q: u32) -> u32 {
    let sum: u64 = h.iter().map(|&c| c as u64).sum();
    (sum % q as u64) as u32
}

fn keygen_with_seed(p: &ParamSet, seed: u64) -> Vec<u16> {
    let mut drbg = RngDrbg::new(XorShiftRng::seed_from_u64(seed));
    let keypair = generate_keypair(p, &mut drbg, &PackedIndicesEncoder)
        .unwrap_or_else(|e| panic!("keygen failed for {}: {e}", p.name));

    let (tag, der_id, oid, payload) = parse_frame(&keypair.public_blob).unwrap();
    assert_eq!(tag, 0x01, "{}: wrong public tag", p.name);
    assert_eq!(der_id, p.der_id, "{}: der id mismatch", p.name);
    assert_eq!(oid, p.oid, "{}: oid mismatch", p.name);

    unpack_dense(payload, p.n as usize, p.q_bits)
}

#[test]
fn every_catalog_entry_produces_h_with_h_at_one_equal_three() {
    for (i, p) in params::CATALOG.iter().enumerate() {
        let h = keygen_with_seed(p, 0xA5A5_0000 + i as u64);
        assert_eq!(
            h_at_one_mod_q(&h, p.q),
            3,
            "{}: h(1) mod q != 3",
            p.name
        );
    }
}

#[test]
fn private_blob_is_framed_for_every_catalog_entry() {
    for (i, p) in params::CATALOG.iter().enumerate() {
        let mut drbg = RngDrbg::new(XorShiftRng::seed_from_u64(0xB6B6_0000 + i as u64));
        let keypair = generate_keypair(p, &mut drbg, &PackedIndicesEncoder)
            .unwrap_or_else(|e| panic!("keygen failed for {}: {e}", p.name));
        let (tag, der_id, oid, payload) = parse_frame(&keypair.private_blob).unwrap();
        assert_eq!(tag, 0x02, "{}: wrong private tag", p.name);
        assert_eq!(der_id, p.der_id, "{}: der id mismatch", p.name);
        assert_eq!(oid, p.oid, "{}: oid mismatch", p.name);
        assert!(!payload.is_empty(), "{}: empty private payload", p.name);
    }
}
