//! IGF-2: deterministic trinary-index generation on top of MGF-1 (module B).

use bitvec::prelude::*;

use crate::error::NtruError;
use crate::hash::HashAlgorithm;
use crate::mgf::Mgf1;

/// Draws one or more pairwise-distinct index lists from a seed, per spec
/// §4.B. Each list's used-bit-vector is reset between lists, but the
/// underlying MGF-1 bit stream is never rewound.
pub struct Igf2 {
    stream: Mgf1,
    n: u32,
    c_bits: u32,
    no_bias_limit: u32,
}

impl Igf2 {
    pub fn new(
        hash: HashAlgorithm,
        seed: &[u8],
        min_hash_calls: u32,
        n: u32,
        c_bits: u32,
        no_bias_limit: u32,
    ) -> Result<Self, NtruError> {
        if n == 0 {
            return Err(NtruError::InvalidArgument {
                field: "n",
                reason: "must be nonzero".into(),
            });
        }
        Ok(Igf2 {
            stream: Mgf1::new(hash, seed, min_hash_calls)?,
            n,
            c_bits,
            no_bias_limit,
        })
    }

    /// Draws `count` pairwise-distinct indices in `[0, n)`, per spec §4.B
    /// steps 2-3: rejection sample against `no_bias_limit`, reduce mod `n`,
    /// skip already-used values, clear the used-vector for the next list.
    pub fn draw_list(&mut self, count: u32) -> Result<Vec<u32>, NtruError> {
        if count > self.n {
            return Err(NtruError::InvalidArgument {
                field: "count",
                reason: format!("cannot draw {count} distinct indices from {} values", self.n),
            });
        }
        let mut used = bitvec![0; self.n as usize];
        let mut out = Vec::with_capacity(count as usize);
        while (out.len() as u32) < count {
            let candidate = self.stream.next_bits(self.c_bits)?;
            if candidate >= self.no_bias_limit {
                continue;
            }
            let index = candidate % self.n;
            if !used[index as usize] {
                used.set(index as usize, true);
                out.push(index);
            }
        }
        Ok(out)
    }

    /// Draws a flat sparse trinary as `(P, M)`: `positives` distinct indices,
    /// then `negatives` more distinct indices disjoint from the first list.
    pub fn draw_trinary(&mut self, positives: u32, negatives: u32) -> Result<(Vec<u32>, Vec<u32>), NtruError> {
        if positives + negatives > self.n {
            return Err(NtruError::InvalidArgument {
                field: "positives + negatives",
                reason: format!(
                    "{} + {} exceeds ring degree {}",
                    positives, negatives, self.n
                ),
            });
        }
        let mut used = bitvec![0; self.n as usize];
        let p = self.draw_disjoint(positives, &mut used)?;
        let m = self.draw_disjoint(negatives, &mut used)?;
        Ok((p, m))
    }

    /// Like `draw_list`, but accumulates into a caller-supplied used-vector
    /// instead of resetting it — used to keep a trinary's P and M disjoint.
    fn draw_disjoint(&mut self, count: u32, used: &mut BitVec) -> Result<Vec<u32>, NtruError> {
        let mut out = Vec::with_capacity(count as usize);
        while (out.len() as u32) < count {
            let candidate = self.stream.next_bits(self.c_bits)?;
            if candidate >= self.no_bias_limit {
                continue;
            }
            let index = candidate % self.n;
            if !used[index as usize] {
                used.set(index as usize, true);
                out.push(index);
            }
        }
        Ok(out)
    }

    /// Draws a product-form trinary `(b1, b2, b3)` with weights `(d1,d2,d3)`:
    /// three independent trinaries, each internally disjoint. Spec §3 notes
    /// only that each bi has equal |P|=|M|; the three bi are not required to
    /// be mutually disjoint from one another.
    pub fn draw_product_form(
        &mut self,
        d1: u32,
        d2: u32,
        d3: u32,
    ) -> Result<[(Vec<u32>, Vec<u32>); 3], NtruError> {
        let b1 = self.draw_trinary(d1, d1)?;
        let b2 = self.draw_trinary(d2, d2)?;
        let b3 = self.draw_trinary(d3, d3)?;
        Ok([b1, b2, b3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn igf(seed: &[u8]) -> Igf2 {
        Igf2::new(HashAlgorithm::Sha256, seed, 12, 401, 14, 16384).unwrap()
    }

    #[test]
    fn draw_list_is_deterministic() {
        let mut a = igf(b"seed");
        let mut b = igf(b"seed");
        assert_eq!(a.draw_list(113).unwrap(), b.draw_list(113).unwrap());
    }

    #[test]
    fn draw_list_indices_are_distinct_and_in_range() {
        let mut g = igf(b"another seed");
        let list = g.draw_list(200).unwrap();
        let mut seen = bitvec![0; 401];
        for &idx in &list {
            assert!(idx < 401);
            assert!(!seen[idx as usize], "duplicate index {idx}");
            seen.set(idx as usize, true);
        }
    }

    #[test]
    fn draw_trinary_p_and_m_are_disjoint() {
        let mut g = igf(b"trinary seed");
        let (p, m) = g.draw_trinary(113, 112).unwrap();
        assert_eq!(p.len(), 113);
        assert_eq!(m.len(), 112);
        for idx in &p {
            assert!(!m.contains(idx));
        }
    }
}
