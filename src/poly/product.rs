//! Product-form sparse convolution (module D): `a * (b1*b2 + b3)`.

use crate::error::NtruError;
use crate::poly::sparse::{SparseMultiplier, SparseTrinaryPoly};

/// A product-form trinary polynomial `b1*b2 + b3`, each `bi` sparse trinary
/// with equal `|P|=|M|` (spec §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFormPoly {
    pub b1: SparseTrinaryPoly,
    pub b2: SparseTrinaryPoly,
    pub b3: SparseTrinaryPoly,
}

impl ProductFormPoly {
    /// Packs the six index lists `P1,M1,P2,M2,P3,M3` into one buffer, per
    /// spec §3's storage convention.
    pub fn to_packed_indices(&self) -> Vec<u32> {
        let mut out = Vec::new();
        for b in [&self.b1, &self.b2, &self.b3] {
            out.extend_from_slice(&b.p);
            out.extend_from_slice(&b.m);
        }
        out
    }
}

/// Computes `c = a * (b1*b2 + b3) mod (X^N - 1) mod q` (spec §4.D): two
/// sequential sparse multiplies to get `a*b1*b2`, one more for `a*b3`, then
/// a pointwise sum reduced mod q.
pub fn multiply_product_indices(
    multiplier: &dyn SparseMultiplier,
    a: &[u16],
    n: usize,
    q: u32,
    product: &ProductFormPoly,
    out: &mut [u16],
) -> Result<(), NtruError> {
    if a.len() != n || out.len() != n {
        return Err(NtruError::InvalidArgument {
            field: "a/out",
            reason: format!("expected {n} coefficients"),
        });
    }
    let mut t2 = vec![0u16; n];
    multiplier.multiply(a, n, q, &product.b1.p, &product.b1.m, &mut t2)?;
    let mut t2b = vec![0u16; n];
    multiplier.multiply(&t2, n, q, &product.b2.p, &product.b2.m, &mut t2b)?;

    let mut t = vec![0u16; n];
    multiplier.multiply(a, n, q, &product.b3.p, &product.b3.m, &mut t)?;

    let mask = (q - 1) as u32;
    for i in 0..n {
        out[i] = (((t2b[i] as u32) + (t[i] as u32)) & mask) as u16;
    }
    Ok(())
}
