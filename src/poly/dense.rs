//! Dense×dense convolution (module E).

use log::debug;

use crate::error::NtruError;

/// Scratch-sizing contract (spec §4.E, §5, §9): callers query this instead
/// of hard-coding `2N` or `3*padded_n` — the source is inconsistent about
/// which a given backend needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchRequirements {
    /// Number of length-`padded_n` scratch polynomials the backend needs.
    pub polys: usize,
    /// Padded degree; always `>= n`.
    pub padded_n: usize,
}

/// A backend capable of computing `c[k] = sum_i a[i] * b[(k-i) mod N] mod q`
/// (spec §4.E). Not constant-time in general; see crate-level docs.
pub trait DenseMultiplier: Send + Sync {
    fn scratch_requirements(&self, n: usize) -> ScratchRequirements;

    fn multiply(
        &self,
        a: &[u16],
        b: &[u16],
        n: usize,
        q: u32,
        scratch: &mut [u16],
        out: &mut [u16],
    ) -> Result<(), NtruError>;

    fn name(&self) -> &'static str;
}

fn check_args(a: &[u16], b: &[u16], n: usize, out: &[u16]) -> Result<(), NtruError> {
    if a.len() != n || b.len() != n {
        return Err(NtruError::InvalidArgument {
            field: "a/b",
            reason: format!("expected {n} coefficients"),
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

/// Full product into a `2N`-word buffer, then fold `t[i+N]` into `t[i]`
/// (spec §4.E, "schoolbook negacyclic-free").
#[derive(Debug, Default, Clone, Copy)]
pub struct SchoolbookMultiplier;

impl DenseMultiplier for SchoolbookMultiplier {
    fn scratch_requirements(&self, n: usize) -> ScratchRequirements {
        ScratchRequirements {
            polys: 1,
            padded_n: 2 * n,
        }
    }

    fn multiply(
        &self,
        a: &[u16],
        b: &[u16],
        n: usize,
        q: u32,
        scratch: &mut [u16],
        out: &mut [u16],
    ) -> Result<(), NtruError> {
        check_args(a, b, n, out)?;
        let req = self.scratch_requirements(n);
        if scratch.len() < req.padded_n {
            return Err(NtruError::InvalidArgument {
                field: "scratch",
                reason: format!(
                    "need at least {} words, got {}",
                    req.padded_n,
                    scratch.len()
                ),
            });
        }
        let t = &mut scratch[..2 * n];
        for v in t.iter_mut() {
            *v = 0;
        }
        for i in 0..n {
            if a[i] == 0 {
                continue;
            }
            for j in 0..n {
                let idx = i + j;
                t[idx] = t[idx].wrapping_add((a[i] as u32 * b[j] as u32) as u16);
            }
        }
        let mask = q - 1;
        for i in 0..n {
            out[i] = ((t[i] as u32 + t[i + n] as u32) & mask) as u16;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "schoolbook"
    }
}

/// Recursive Karatsuba multiplication down to a grade-school base case
/// (spec §4.E), folding the `2N`-length linear product into `N` at the end.
/// Per the original source, the recursion bottoms out at size ≤ 38 or at
/// odd sizes (Karatsuba's split only works cleanly on even sizes); this
/// implementation mirrors that base case.
#[derive(Debug, Default, Clone, Copy)]
pub struct KaratsubaMultiplier;

const KARATSUBA_BASE_CASE: usize = 38;

fn grade_school_mul(a: &[u32], b: &[u32], out: &mut [u32]) {
    let n = a.len();
    for v in out.iter_mut() {
        *v = 0;
    }
    for i in 0..n {
        if a[i] == 0 {
            continue;
        }
        for j in 0..n {
            out[i + j] = out[i + j].wrapping_add(a[i].wrapping_mul(b[j]));
        }
    }
}

/// Computes the linear (non-cyclic) product of `a` and `b`, each length
/// `k`, into `out` (length `2k`), recursing per Karatsuba until `k` is odd
/// or `k <= KARATSUBA_BASE_CASE`.
fn karatsuba(a: &[u32], b: &[u32], out: &mut [u32]) {
    let k = a.len();
    debug_assert_eq!(b.len(), k);
    debug_assert_eq!(out.len(), 2 * k);

    if k <= KARATSUBA_BASE_CASE || k % 2 == 1 {
        grade_school_mul(a, b, out);
        return;
    }

    let half = k / 2;
    let (a_lo, a_hi) = a.split_at(half);
    let (b_lo, b_hi) = b.split_at(half);

    let mut lo = vec![0u32; k];
    let mut hi = vec![0u32; k];
    karatsuba(a_lo, b_lo, &mut lo);
    karatsuba(a_hi, b_hi, &mut hi);

    let mut a_sum = vec![0u32; half];
    let mut b_sum = vec![0u32; half];
    for i in 0..half {
        a_sum[i] = a_lo[i].wrapping_add(a_hi[i]);
        b_sum[i] = b_lo[i].wrapping_add(b_hi[i]);
    }
    let mut mid = vec![0u32; k];
    karatsuba(&a_sum, &b_sum, &mut mid);
    for i in 0..k {
        mid[i] = mid[i].wrapping_sub(lo[i]).wrapping_sub(hi[i]);
    }

    for v in out.iter_mut() {
        *v = 0;
    }
    for i in 0..k {
        out[i] = out[i].wrapping_add(lo[i]);
    }
    for i in 0..k {
        out[half + i] = out[half + i].wrapping_add(mid[i]);
    }
    for i in 0..k {
        out[k + i] = out[k + i].wrapping_add(hi[i]);
    }
}

impl DenseMultiplier for KaratsubaMultiplier {
    fn scratch_requirements(&self, n: usize) -> ScratchRequirements {
        let padded_n = n.next_power_of_two();
        ScratchRequirements {
            polys: 3,
            padded_n,
        }
    }

    fn multiply(
        &self,
        a: &[u16],
        b: &[u16],
        n: usize,
        q: u32,
        scratch: &mut [u16],
        out: &mut [u16],
    ) -> Result<(), NtruError> {
        check_args(a, b, n, out)?;
        let req = self.scratch_requirements(n);
        if scratch.len() < req.polys * req.padded_n {
            return Err(NtruError::InvalidArgument {
                field: "scratch",
                reason: format!(
                    "need at least {} words, got {}",
                    req.polys * req.padded_n,
                    scratch.len()
                ),
            });
        }
        let padded_n = req.padded_n;
        let mut a_wide = vec![0u32; padded_n];
        let mut b_wide = vec![0u32; padded_n];
        for i in 0..n {
            a_wide[i] = a[i] as u32;
            b_wide[i] = b[i] as u32;
        }
        let mut product = vec![0u32; 2 * padded_n];
        karatsuba(&a_wide, &b_wide, &mut product);

        let mask = q - 1;
        for i in 0..n {
            let wrapped = if i + n < product.len() {
                product[i + n]
            } else {
                0
            };
            out[i] = (product[i].wrapping_add(wrapped) & mask) as u16;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "karatsuba"
    }
}

/// Picks a backend by probing `N`'s size: Karatsuba pays off past the base
/// case, schoolbook is cheaper (and simpler, hence safer) for small `N`.
pub fn select_dense_multiplier(n: usize) -> Box<dyn DenseMultiplier> {
    if n > KARATSUBA_BASE_CASE {
        debug!("selecting karatsuba dense multiplier backend for N={n}");
        Box::new(KaratsubaMultiplier)
    } else {
        debug!("selecting schoolbook dense multiplier backend for N={n}");
        Box::new(SchoolbookMultiplier)
    }
}

/// Convenience wrapper matching spec §4.E's function signature, using the
/// schoolbook backend.
pub fn multiply_coefficients(
    a: &[u16],
    b: &[u16],
    n: usize,
    q: u32,
    scratch: &mut [u16],
    out: &mut [u16],
) -> Result<(), NtruError> {
    SchoolbookMultiplier.multiply(a, b, n, q, scratch, out)
}
