//! Key-blob framing (spec §6, supplemented per `SPEC_FULL.md` §B).
//!
//! Full DER/X.509 `SubjectPublicKeyInfo` encoding is out of scope (spec
//! §1); this module only honors the minimal tag/id/OID framing spec §6
//! states as a contract the core promises to keep, using the "packed
//! indices" / "packed coefficients" byte layouts it also describes.

use crate::error::NtruError;
use crate::params::ParamSet;

const PUBLIC_TAG: u8 = 0x01;
const PRIVATE_TAG: u8 = 0x02;

/// Encodes/decodes the packed-payload portion of a key blob. Swappable so a
/// caller wanting full DER output can provide their own, while this crate
/// ships the minimal "packed indices" / "packed coefficients" alternative
/// spec §6 explicitly allows.
pub trait KeyEncoder {
    fn encode_public(&self, params: &ParamSet, h: &[u16]) -> Result<Vec<u8>, NtruError>;
    fn encode_private(&self, params: &ParamSet, f_indices: &[u32]) -> Result<Vec<u8>, NtruError>;
}

/// Packs a dense polynomial as `N` coefficients of `q_bits` each, MSB-first,
/// zero-padded to a byte boundary (spec §6).
fn pack_dense(coeffs: &[u16], q_bits: u32) -> Vec<u8> {
    let total_bits = coeffs.len() as u64 * q_bits as u64;
    let total_bytes = ((total_bits + 7) / 8) as usize;
    let mut out = vec![0u8; total_bytes];
    let mut bit_pos: u64 = 0;
    for &c in coeffs {
        for b in (0..q_bits).rev() {
            let bit = (c as u32 >> b) & 1;
            if bit != 0 {
                let byte_idx = (bit_pos / 8) as usize;
                let shift = 7 - (bit_pos % 8);
                out[byte_idx] |= 1 << shift;
            }
            bit_pos += 1;
        }
    }
    out
}

/// Packs a list of indices as `bits_in_n`-bit fields, MSB-first (spec §6's
/// "sparse trinary packed as ... indices of `bits_in_N` each").
fn pack_indices(indices: &[u32], bits_in_n: u32) -> Vec<u8> {
    let total_bits = indices.len() as u64 * bits_in_n as u64;
    let total_bytes = ((total_bits + 7) / 8) as usize;
    let mut out = vec![0u8; total_bytes];
    let mut bit_pos: u64 = 0;
    for &idx in indices {
        for b in (0..bits_in_n).rev() {
            let bit = (idx >> b) & 1;
            if bit != 0 {
                let byte_idx = (bit_pos / 8) as usize;
                let shift = 7 - (bit_pos % 8);
                out[byte_idx] |= 1 << shift;
            }
            bit_pos += 1;
        }
    }
    out
}

fn frame(tag: u8, params: &ParamSet, payload: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + 1 + 3 + payload.len());
    out.push(tag);
    out.push(params.der_id);
    out.extend_from_slice(&params.oid);
    out.extend_from_slice(&payload);
    out
}

/// The "packed indices" / "packed coefficients" encoder spec §6 describes
/// as an alternative to full DER.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackedIndicesEncoder;

impl KeyEncoder for PackedIndicesEncoder {
    fn encode_public(&self, params: &ParamSet, h: &[u16]) -> Result<Vec<u8>, NtruError> {
        if h.len() != params.n as usize {
            return Err(NtruError::InvalidArgument {
                field: "h",
                reason: format!("expected {} coefficients, got {}", params.n, h.len()),
            });
        }
        Ok(frame(PUBLIC_TAG, params, pack_dense(h, params.q_bits)))
    }

    fn encode_private(&self, params: &ParamSet, f_indices: &[u32]) -> Result<Vec<u8>, NtruError> {
        Ok(frame(
            PRIVATE_TAG,
            params,
            pack_indices(f_indices, params.n_bits),
        ))
    }
}

/// Reads the common `[tag][der_id][oid]` prefix, returning it plus the
/// remaining payload slice.
pub fn parse_frame(blob: &[u8]) -> Result<(u8, u8, [u8; 3], &[u8]), NtruError> {
    if blob.len() < 5 {
        return Err(NtruError::InvalidArgument {
            field: "blob",
            reason: "truncated key blob: missing frame header".into(),
        });
    }
    let tag = blob[0];
    let der_id = blob[1];
    let oid = [blob[2], blob[3], blob[4]];
    Ok((tag, der_id, oid, &blob[5..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn pack_dense_round_trip_length() {
        let coeffs = vec![1u16, 2, 3, 4, 5];
        let packed = pack_dense(&coeffs, 11);
        assert_eq!(packed.len(), (5 * 11 + 7) / 8);
    }

    #[test]
    fn public_blob_has_correct_framing() {
        let p = params::by_name("ees401ep1").unwrap();
        let h = vec![0u16; p.n as usize];
        let blob = PackedIndicesEncoder.encode_public(p, &h).unwrap();
        let (tag, der_id, oid, _) = parse_frame(&blob).unwrap();
        assert_eq!(tag, PUBLIC_TAG);
        assert_eq!(der_id, p.der_id);
        assert_eq!(oid, p.oid);
    }

    #[test]
    fn public_blob_rejects_wrong_length_h() {
        let p = params::by_name("ees401ep1").unwrap();
        let h = vec![0u16; 3];
        assert!(PackedIndicesEncoder.encode_public(p, &h).is_err());
    }
}
