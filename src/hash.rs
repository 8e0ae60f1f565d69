//! Hash-primitive selection (module B collaborator).
//!
//! SHA-1 and SHA-256 are consumed as fixed-output-length compression
//! functions; their internals are out of scope (spec §1, §6).

use digest::Digest;
use sha1::Sha1;
use sha2::Sha256;

use crate::error::NtruError;

/// The hash algorithms this core knows how to dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// Security-strength-driven selection (spec §4.G step 1): strengths of
    /// 20 octets or fewer use SHA-1, everything else uses SHA-256.
    pub fn for_strength(sec_strength_len: u32) -> Self {
        if sec_strength_len <= 20 {
            HashAlgorithm::Sha1
        } else {
            HashAlgorithm::Sha256
        }
    }

    /// Output length in octets (`md_len` in spec terms).
    pub fn md_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
        }
    }

    /// One-shot `hash(data)`, writing exactly `md_len()` bytes into `out`.
    pub fn digest_into(self, data: &[u8], out: &mut [u8]) -> Result<(), NtruError> {
        if out.len() != self.md_len() {
            return Err(NtruError::InvalidArgument {
                field: "out",
                reason: format!(
                    "expected {} bytes, got {}",
                    self.md_len(),
                    out.len()
                ),
            });
        }
        match self {
            HashAlgorithm::Sha1 => {
                let digest = Sha1::digest(data);
                out.copy_from_slice(&digest);
            }
            HashAlgorithm::Sha256 => {
                let digest = Sha256::digest(data);
                out.copy_from_slice(&digest);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_selects_sha1_at_boundary() {
        assert_eq!(HashAlgorithm::for_strength(20), HashAlgorithm::Sha1);
        assert_eq!(HashAlgorithm::for_strength(21), HashAlgorithm::Sha256);
    }

    #[test]
    fn digest_into_rejects_wrong_output_length() {
        let mut out = [0u8; 10];
        let err = HashAlgorithm::Sha256.digest_into(b"x", &mut out).unwrap_err();
        assert!(matches!(err, NtruError::InvalidArgument { .. }));
    }

    #[test]
    fn sha256_of_empty_matches_known_vector() {
        let mut out = [0u8; 32];
        HashAlgorithm::Sha256.digest_into(b"", &mut out).unwrap();
        assert_eq!(
            out,
            hex_literal::hex!(
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            )
        );
    }
}
