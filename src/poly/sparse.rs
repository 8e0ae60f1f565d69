//! Sparse trinary polynomials and sparse×dense convolution (module C).

use log::{debug, warn};

use crate::error::NtruError;

/// A trinary polynomial given as two disjoint index lists: `p` holds the
/// indices with coefficient +1, `m` the indices with coefficient −1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseTrinaryPoly {
    pub p: Vec<u32>,
    pub m: Vec<u32>,
}

impl SparseTrinaryPoly {
    pub fn new(p: Vec<u32>, m: Vec<u32>) -> Self {
        SparseTrinaryPoly { p, m }
    }

    /// Packs `P` then `M` into a single concatenated index buffer, per
    /// spec §3's storage convention.
    pub fn to_packed_indices(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.p.len() + self.m.len());
        out.extend_from_slice(&self.p);
        out.extend_from_slice(&self.m);
        out
    }
}

fn check_args(a: &[u16], n: usize, out: &[u16]) -> Result<(), NtruError> {
    if a.len() != n {
        return Err(NtruError::InvalidArgument {
            field: "a",
            reason: format!("expected {n} coefficients, got {}", a.len()),
        });
    }
    if out.len() != n {
        return Err(NtruError::InvalidArgument {
            field: "out",
            reason: format!("expected {n} coefficients, got {}", out.len()),
        });
    }
    Ok(())
}

/// A backend capable of computing `c = a * b mod (X^N - 1) mod q`, where `b`
/// is specified by disjoint index lists `p` (coefficient +1) and `m`
/// (coefficient −1). Spec §4.C's contract is the only required behavior;
/// this crate ships two equivalent backends chosen at construction time
/// (spec §9's REDESIGN FLAG) rather than at compile time via preprocessor
/// macro.
///
/// Not constant-time: memory access patterns and loop bounds depend on the
/// index lists themselves (spec §9, open question on side-channel posture).
pub trait SparseMultiplier: Send + Sync {
    fn multiply(
        &self,
        a: &[u16],
        n: usize,
        q: u32,
        p: &[u32],
        m: &[u32],
        out: &mut [u16],
    ) -> Result<(), NtruError>;

    fn name(&self) -> &'static str;
}

/// Direct per-index accumulation, exactly as described in spec §4.C: zero an
/// accumulator, subtract `a` shifted by each `M` index, negate, add `a`
/// shifted by each `P` index, mask to `q`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarSparseMultiplier;

impl SparseMultiplier for ScalarSparseMultiplier {
    fn multiply(
        &self,
        a: &[u16],
        n: usize,
        q: u32,
        p: &[u32],
        m: &[u32],
        out: &mut [u16],
    ) -> Result<(), NtruError> {
        check_args(a, n, out)?;
        let mut t = vec![0i64; n];
        for &k in m {
            let k = k as usize;
            for i in 0..n {
                t[(i + k) % n] += a[i] as i64;
            }
        }
        for v in t.iter_mut() {
            *v = -*v;
        }
        for &k in p {
            let k = k as usize;
            for i in 0..n {
                t[(i + k) % n] += a[i] as i64;
            }
        }
        let mask = (q - 1) as i64;
        for i in 0..n {
            out[i] = (t[i] & mask) as u16;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "scalar"
    }
}

/// Accumulates into a linear (unwrapped) buffer of length `2N-1` so the
/// inner per-shift loop needs no modulo, folding the high half back onto
/// the low half once at the end — the same fold idiom spec §4.E describes
/// for dense×dense convolution, applied here to the sparse case. Falls
/// back to the scalar backend when `N` is even: the fold identity used here
/// relies on `N` odd entries never aliasing slot `N` itself during the
/// fold, matching the catalog's "every N is odd" invariant (spec §3) and
/// resolving spec §9's open question about that constraint rather than
/// silently assuming it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldedSparseMultiplier;

impl SparseMultiplier for FoldedSparseMultiplier {
    fn multiply(
        &self,
        a: &[u16],
        n: usize,
        q: u32,
        p: &[u32],
        m: &[u32],
        out: &mut [u16],
    ) -> Result<(), NtruError> {
        check_args(a, n, out)?;
        if n % 2 == 0 {
            return Err(NtruError::Unsupported(
                "folded sparse multiplier requires odd N".into(),
            ));
        }
        let mut buf = vec![0i64; 2 * n - 1];
        for &k in m {
            let k = k as usize;
            for i in 0..n {
                buf[i + k] += a[i] as i64;
            }
        }
        for v in buf.iter_mut() {
            *v = -*v;
        }
        for &k in p {
            let k = k as usize;
            for i in 0..n {
                buf[i + k] += a[i] as i64;
            }
        }
        let mask = (q - 1) as i64;
        for j in 0..n {
            let wrapped = if j + n < buf.len() { buf[j + n] } else { 0 };
            out[j] = ((buf[j] + wrapped) & mask) as u16;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "folded"
    }
}

/// Selects a `SparseMultiplier` by probing whether `N` is odd, the same
/// "probe a capability, fall back" idiom the dense-multiply backend uses
/// for GPU kernels: try the specialized backend, fall back to the scalar
/// one, and log which was chosen.
pub fn select_sparse_multiplier(n: usize) -> Box<dyn SparseMultiplier> {
    if n % 2 == 1 {
        debug!("selecting folded sparse multiplier backend for N={n}");
        Box::new(FoldedSparseMultiplier)
    } else {
        warn!("N={n} is even; folded sparse multiplier backend unavailable, falling back to scalar");
        Box::new(ScalarSparseMultiplier)
    }
}

/// Convenience wrapper around the scalar backend, matching spec §4.C's
/// function signature directly.
pub fn multiply_indices(
    a: &[u16],
    n: usize,
    q: u32,
    p: &[u32],
    m: &[u32],
    out: &mut [u16],
) -> Result<(), NtruError> {
    ScalarSparseMultiplier.multiply(a, n, q, p, m, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [u16; 17] = [
        36486, 20395, 8746, 16637, 26195, 1654, 24222, 13306, 9573, 26946, 29106, 2401, 32146,
        2871, 41930, 7902, 3398,
    ];

    #[test]
    fn literal_vector_multiply_indices() {
        let p = [7, 10];
        let m = [9, 13];
        let mut out = [0u16; 17];
        multiply_indices(&A, 17, 1 << 16, &p, &m, &mut out).unwrap();
        assert_eq!(
            out,
            [
                6644, 48910, 5764, 16270, 2612, 10231, 769, 2577, 58289, 38323, 56334, 29942,
                55901, 43714, 17452, 43795, 21225
            ]
        );
    }

    #[test]
    fn scalar_and_folded_backends_agree() {
        let p = [7, 10];
        let m = [9, 13];
        let mut scalar_out = [0u16; 17];
        let mut folded_out = [0u16; 17];
        ScalarSparseMultiplier
            .multiply(&A, 17, 1 << 16, &p, &m, &mut scalar_out)
            .unwrap();
        FoldedSparseMultiplier
            .multiply(&A, 17, 1 << 16, &p, &m, &mut folded_out)
            .unwrap();
        assert_eq!(scalar_out, folded_out);
    }

    #[test]
    fn folded_backend_rejects_even_n() {
        let a = [0u16; 4];
        let mut out = [0u16; 4];
        let err = FoldedSparseMultiplier
            .multiply(&a, 4, 16, &[], &[], &mut out)
            .unwrap_err();
        assert!(matches!(err, NtruError::Unsupported(_)));
    }

    #[test]
    fn select_sparse_multiplier_falls_back_on_even_n() {
        assert_eq!(select_sparse_multiplier(18).name(), "scalar");
        assert_eq!(select_sparse_multiplier(17).name(), "folded");
    }
}
