//! NTRUEncrypt ring arithmetic, IGF-2 index generation, and key generation.
//!
//! This crate implements the cryptographic core of an NTRUEncrypt
//! implementation: polynomial convolution over `R_q = (Z/qZ)[X]/(X^N-1)`
//! (sparse×dense, product-form, and dense×dense), polynomial inversion via
//! mod-2 extended Euclid and Newton lifting, the IGF-2/MGF-1 deterministic
//! index generator, and the key-generation pipeline that composes them.
//!
//! Out of scope: the DRBG's internal construction, hash-primitive
//! internals, full DER/X.509 key encoding, and the encrypt/decrypt message
//! pipeline (BPGM3 padding, blinding polynomial derivation) — see
//! `SPEC_FULL.md` for the full boundary.
//!
//! Not constant-time: `poly::sparse`'s index-driven memory access and
//! `poly::invert`'s data-dependent control flow both leak timing
//! information about their inputs. A caller with a real side-channel
//! threat model needs a hardened implementation of those two modules.

pub mod drbg;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod igf;
pub mod keygen;
pub mod mgf;
pub mod params;
pub mod poly;

pub use error::{NtruError, Result};
pub use params::{by_der_id, by_id, by_name, by_oid, ParamSet, ParamSetId};
