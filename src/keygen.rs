//! Key generation (module G): composes B (IGF-2), C/D (sparse×dense), E
//! (dense×dense), and F (inversion) per spec §4.G.

use log::{debug, warn};

use crate::drbg::Drbg;
use crate::encoding::KeyEncoder;
use crate::error::NtruError;
use crate::hash::HashAlgorithm;
use crate::igf::Igf2;
use crate::params::ParamSet;
use crate::poly::dense::select_dense_multiplier;
use crate::poly::invert::invert_mod_q;
use crate::poly::product::ProductFormPoly;
use crate::poly::sparse::{select_sparse_multiplier, SparseTrinaryPoly};

/// Resolved per `SPEC_FULL.md` §C: the source's keygen retry loop has no
/// documented bound, so a caller-supplied broken `Drbg` does not spin
/// forever.
pub const MAX_KEYGEN_ATTEMPTS: u32 = 1024;

/// The small modulus fixed throughout NTRUEncrypt (spec GLOSSARY).
const P: u16 = 3;

/// A generated key pair: the public ring element `h` (dense) and the
/// private sparse/product-form element `F`.
pub struct KeyPair {
    pub public_blob: Vec<u8>,
    pub private_blob: Vec<u8>,
}

/// The private trinary element F, in whichever form the parameter set
/// calls for.
enum PrivateF {
    Flat(SparseTrinaryPoly),
    Product(ProductFormPoly),
}

impl PrivateF {
    fn to_packed_indices(&self) -> Vec<u32> {
        match self {
            PrivateF::Flat(s) => s.to_packed_indices(),
            PrivateF::Product(p) => p.to_packed_indices(),
        }
    }

    /// Dense representation of `f = 1 + p*F` (spec §4.G step 5).
    fn dense_f(&self, n: usize) -> Vec<u16> {
        let mut dense = vec![0i64; n];
        match self {
            PrivateF::Flat(s) => {
                for &i in &s.p {
                    dense[i as usize] += P as i64;
                }
                for &i in &s.m {
                    dense[i as usize] -= P as i64;
                }
            }
            PrivateF::Product(prod) => {
                // Expand b1*b2 + b3 to a dense trinary-scaled polynomial via
                // plain (non-modular-reduced) convolution of the two sparse
                // factors, since b1, b2, b3 are each trinary (coefficients
                // in {-1,0,1}) and only need combining, not a ring multiply
                // by a dense operand.
                let mut b1b2 = vec![0i64; n];
                for &i1 in &prod.b1.p {
                    for &i2 in &prod.b2.p {
                        b1b2[((i1 + i2) as usize) % n] += 1;
                    }
                    for &i2 in &prod.b2.m {
                        b1b2[((i1 + i2) as usize) % n] -= 1;
                    }
                }
                for &i1 in &prod.b1.m {
                    for &i2 in &prod.b2.p {
                        b1b2[((i1 + i2) as usize) % n] -= 1;
                    }
                    for &i2 in &prod.b2.m {
                        b1b2[((i1 + i2) as usize) % n] += 1;
                    }
                }
                for &i in &prod.b3.p {
                    b1b2[i as usize] += 1;
                }
                for &i in &prod.b3.m {
                    b1b2[i as usize] -= 1;
                }
                for i in 0..n {
                    dense[i] = b1b2[i] * P as i64;
                }
            }
        }
        dense[0] += 1;
        dense
            .into_iter()
            .map(|v| v.rem_euclid(1 << 16) as u16)
            .collect()
    }
}

fn generate_f(igf: &mut Igf2, params: &ParamSet) -> Result<PrivateF, NtruError> {
    if let Some((d1, d2, d3)) = params.product_form_weights() {
        let [b1, b2, b3] = igf.draw_product_form(d1, d2, d3)?;
        Ok(PrivateF::Product(ProductFormPoly {
            b1: SparseTrinaryPoly::new(b1.0, b1.1),
            b2: SparseTrinaryPoly::new(b2.0, b2.1),
            b3: SparseTrinaryPoly::new(b3.0, b3.1),
        }))
    } else {
        let d = params.flat_weight().expect("non-product-form has flat weight");
        let (p, m) = igf.draw_trinary(d, d)?;
        Ok(PrivateF::Flat(SparseTrinaryPoly::new(p, m)))
    }
}

/// Generates g with `dg+1` positive and `dg` negative coefficients (spec
/// §4.G step 4), as a dense `R_q` element.
fn generate_dense_g(igf: &mut Igf2, params: &ParamSet) -> Result<Vec<u16>, NtruError> {
    let (p, m) = igf.draw_trinary(params.dg + 1, params.dg)?;
    let n = params.n as usize;
    let mut dense = vec![0u16; n];
    for &i in &p {
        dense[i as usize] = 1;
    }
    for &i in &m {
        dense[i as usize] = (params.q - 1) as u16;
    }
    Ok(dense)
}

/// The numeric core of keygen (spec §4.G steps 2-7), shared by
/// `generate_keypair` and by tests that want `h` and `F` directly instead
/// of the framed blobs.
fn generate_keypair_raw(
    params: &ParamSet,
    drbg: &mut dyn Drbg,
) -> Result<(Vec<u16>, PrivateF), NtruError> {
    let n = params.n as usize;
    let hash = HashAlgorithm::for_strength(params.sec_strength_len);
    let sparse_multiplier = select_sparse_multiplier(n);
    let dense_multiplier = select_dense_multiplier(n);

    for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
        debug!("keygen attempt {attempt} for {}", params.name);

        let mut seed = vec![0u8; params.seed_len()];
        drbg
            .generate(params.sec_strength_len * 8, &mut seed)
            .map_err(|e| NtruError::DrbgFailure(e.to_string()))?;

        let mut igf = Igf2::new(
            hash,
            &seed,
            params.min_igf_hash_calls,
            params.n,
            params.c_bits,
            params.no_bias_limit,
        )?;

        let f = generate_f(&mut igf, params)?;
        let g_dense = generate_dense_g(&mut igf, params)?;

        let f_dense = f.dense_f(n);
        let inv = match invert_mod_q(&f_dense, n, params.q, &*dense_multiplier)? {
            Some(inv) => inv,
            None => {
                warn!(
                    "f not invertible mod q on attempt {attempt} for {}, retrying",
                    params.name
                );
                continue;
            }
        };

        // h = p * g * f^-1 mod q (spec §4.G step 6).
        let req = dense_multiplier.scratch_requirements(n);
        let mut scratch = vec![0u16; req.polys * req.padded_n];
        let mut g_times_inv = vec![0u16; n];
        dense_multiplier.multiply(&g_dense, &inv, n, params.q, &mut scratch, &mut g_times_inv)?;

        let mask = params.q - 1;
        let mut h = vec![0u16; n];
        for i in 0..n {
            h[i] = ((g_times_inv[i] as u32 * P as u32) & mask) as u16;
        }

        // Weight verification (spec §4.G step 7): g itself is drawn with
        // the correct weight by construction via `generate_dense_g`, so
        // this is a defensive re-check rather than a resampling step.
        debug_assert!({
            let positives = g_dense.iter().filter(|&&c| c == 1).count() as u32;
            let negatives = g_dense
                .iter()
                .filter(|&&c| c == (params.q - 1) as u16)
                .count() as u32;
            positives == params.dg + 1 && negatives == params.dg
        });

        let _ = sparse_multiplier; // reserved for encrypt/decrypt paths out of scope here

        return Ok((h, f));
    }

    Err(NtruError::KeygenExhausted {
        attempts: MAX_KEYGEN_ATTEMPTS,
    })
}

/// Runs key generation for `params` using `drbg` as the seeded byte oracle
/// and `encoder` to frame the resulting blobs (spec §4.G, §6).
pub fn generate_keypair(
    params: &ParamSet,
    drbg: &mut dyn Drbg,
    encoder: &dyn KeyEncoder,
) -> Result<KeyPair, NtruError> {
    let (h, f) = generate_keypair_raw(params, drbg)?;
    let public_blob = encoder.encode_public(params, &h)?;
    let private_blob = encoder.encode_private(params, &f.to_packed_indices())?;
    Ok(KeyPair {
        public_blob,
        private_blob,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drbg::RngDrbg;
    use crate::encoding::{parse_frame, PackedIndicesEncoder};
    use crate::params;
    use crate::poly::sparse::multiply_indices;
    use rand_core::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn keygen_for(name: &str, seed: u64) -> (KeyPair, &'static ParamSet) {
        let p = params::by_name(name).unwrap();
        let mut drbg = RngDrbg::new(XorShiftRng::seed_from_u64(seed));
        let keypair = generate_keypair(p, &mut drbg, &PackedIndicesEncoder).unwrap();
        (keypair, p)
    }

    fn h_at_1_mod_q(h: &[u16], q: u32) -> u32 {
        let sum: u64 = h.iter().map(|&c| c as u64).sum();
        (sum % q as u64) as u32
    }

    #[test]
    fn public_blob_framing_matches_catalog_entry() {
        let (kp, p) = keygen_for("ees401ep1", 7);
        let (tag, der_id, oid, _) = parse_frame(&kp.public_blob).unwrap();
        assert_eq!(tag, 0x01);
        assert_eq!(der_id, p.der_id);
        assert_eq!(oid, p.oid);
    }

    #[test]
    fn h_evaluated_at_one_is_three_mod_q() {
        // h(1) mod q = 3 since h = 3*g*f^-1 and f(1) = 1 (spec §8). Uses
        // the same retrying core as `generate_keypair` so a seed that
        // happens to produce a non-invertible f on its first draw still
        // succeeds.
        let p = params::by_name("ees401ep1").unwrap();
        let mut drbg = RngDrbg::new(XorShiftRng::seed_from_u64(99));
        let (h, _f) = generate_keypair_raw(p, &mut drbg).unwrap();
        assert_eq!(h_at_1_mod_q(&h, p.q), 3);
    }

    #[test]
    fn keygen_across_catalog_succeeds() {
        for name in [
            "ees401ep1",
            "ees449ep1",
            "ees659ep1",
            "ees761ep1",
        ] {
            let p = params::by_name(name).unwrap();
            let mut drbg = RngDrbg::new(XorShiftRng::seed_from_u64(12345));
            let kp = generate_keypair(p, &mut drbg, &PackedIndicesEncoder).unwrap();
            assert!(!kp.public_blob.is_empty());
            assert!(!kp.private_blob.is_empty());
        }
    }

    #[test]
    fn scratch_errors_surface_as_invalid_argument() {
        // Smoke-test that multiply_indices (module C) rejects mismatched
        // lengths the way keygen relies on internally.
        let a = [0u16; 4];
        let mut out = [0u16; 3];
        let err = multiply_indices(&a, 4, 16, &[], &[], &mut out).unwrap_err();
        assert!(matches!(err, NtruError::InvalidArgument { .. }));
    }
}
