//! Polynomial inversion in `R_{2^r}` (module F): mod-2 almost-inverse
//! extended Euclid, then Newton lifting via module E.

use crate::error::NtruError;
use crate::poly::dense::DenseMultiplier;

fn poly_degree(p: &[bool]) -> Option<usize> {
    p.iter().rposition(|&b| b)
}

fn trim(p: &mut Vec<bool>) {
    while p.last() == Some(&false) {
        p.pop();
    }
}

/// Almost-inverse extended Euclid over `GF(2)[X] / (X^N - 1)` (spec §4.F
/// step 1). Returns `None` when `a` has no inverse mod 2 — the only
/// failure mode of this component.
pub fn invert_mod2(a: &[u16], n: usize) -> Option<Vec<u16>> {
    let mut f: Vec<bool> = a.iter().map(|&v| v & 1 == 1).collect();
    trim(&mut f);
    if f.is_empty() {
        return None;
    }

    let mut g = vec![false; n + 1];
    g[0] = true;
    g[n] = true;

    let mut b: Vec<bool> = vec![true];
    let mut c: Vec<bool> = vec![false];
    let mut k: usize = 0;

    loop {
        while !f[0] {
            f.remove(0);
            if f.is_empty() {
                return None;
            }
            c.insert(0, false);
            k += 1;
        }

        let deg_f = poly_degree(&f).expect("f is nonzero here");
        if deg_f == 0 {
            break;
        }

        let deg_g = poly_degree(&g).unwrap_or(0);
        if deg_f < deg_g {
            std::mem::swap(&mut f, &mut g);
            std::mem::swap(&mut b, &mut c);
        }

        for (i, &gi) in g.iter().enumerate() {
            f[i] ^= gi;
        }
        trim(&mut f);
        if f.is_empty() {
            return None;
        }

        if c.len() > b.len() {
            b.resize(c.len(), false);
        }
        for (i, &ci) in c.iter().enumerate() {
            b[i] ^= ci;
        }
    }

    // a^-1 mod 2 = b(x) * x^-k mod (x^N - 1): position i of b contributes
    // to output position (i - k) mod N.
    let mut out = vec![0u16; n];
    for (i, &bit) in b.iter().enumerate() {
        if bit {
            let idx = (i as i64 - k as i64).rem_euclid(n as i64) as usize;
            out[idx] ^= 1;
        }
    }
    Some(out)
}

/// Four rounds of Newton lifting (spec §4.F step 2), raising precision from
/// `2^1` to `2^16` and masking down to the requested `q` at the end. Every
/// catalog `q` satisfies `8 < bits_in_q <= 16`, so four fixed iterations
/// always suffice regardless of which `q` is requested.
pub fn invert_mod_q(
    a: &[u16],
    n: usize,
    q: u32,
    dense: &dyn DenseMultiplier,
) -> Result<Option<Vec<u16>>, NtruError> {
    if !q.is_power_of_two() || q > 1 << 16 {
        return Err(NtruError::InvalidArgument {
            field: "q",
            reason: format!("{q} must be a power of two no larger than 2^16"),
        });
    }

    let mut x = match invert_mod2(a, n) {
        Some(v) => v,
        None => return Ok(None),
    };

    let req = dense.scratch_requirements(n);
    let mut scratch = vec![0u16; req.polys * req.padded_n];
    let mut m: u32 = 2;

    for _ in 0..4 {
        let m_new = m * m;

        let mut t = vec![0u16; n];
        dense.multiply(a, &x, n, m_new, &mut scratch, &mut t)?;

        let mut two_minus_t = vec![0u16; n];
        two_minus_t[0] = ((2i64 - t[0] as i64).rem_euclid(m_new as i64)) as u16;
        for i in 1..n {
            two_minus_t[i] = ((-(t[i] as i64)).rem_euclid(m_new as i64)) as u16;
        }

        let mut x_next = vec![0u16; n];
        dense.multiply(&x, &two_minus_t, n, m_new, &mut scratch, &mut x_next)?;

        x = x_next;
        m = m_new;
    }

    let mask = q - 1;
    for v in x.iter_mut() {
        *v = (*v as u32 & mask) as u16;
    }
    Ok(Some(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::dense::SchoolbookMultiplier;

    const N: usize = 17;

    #[test]
    fn literal_vector_invert_mod2() {
        let a = [1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1];
        let inv = invert_mod2(&a, N).expect("invertible");
        assert_eq!(
            inv,
            [1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 1, 1]
        );
    }

    #[test]
    fn zero_constant_term_is_not_invertible() {
        let mut a = [1u16, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1];
        a[0] = 0;
        assert!(invert_mod2(&a, N).is_none());
    }

    #[test]
    fn factor_of_x17_minus_1_is_not_invertible() {
        let b = [1u16, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0];
        assert!(invert_mod2(&b, N).is_none());
    }

    #[test]
    fn newton_lift_inverts_mod_2_16() {
        let a = [1u16, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1];
        let inv = invert_mod_q(&a, N, 1 << 16, &SchoolbookMultiplier)
            .unwrap()
            .expect("invertible");

        let req = SchoolbookMultiplier.scratch_requirements(N);
        let mut scratch = vec![0u16; req.padded_n];
        let mut out = [0u16; N];
        SchoolbookMultiplier
            .multiply(&a, &inv, N, 1 << 16, &mut scratch, &mut out)
            .unwrap();
        let mut expected = [0u16; N];
        expected[0] = 1;
        assert_eq!(out, expected);
    }
}
