use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use ntru_core::params;
use ntru_core::poly::dense::{select_dense_multiplier, SchoolbookMultiplier};
use ntru_core::poly::sparse::{select_sparse_multiplier, SparseTrinaryPoly};

fn random_dense(n: usize, q: u32, rng: &mut XorShiftRng) -> Vec<u16> {
    use rand::Rng;
    (0..n).map(|_| rng.gen_range(0..q) as u16).collect()
}

fn random_sparse(n: u32, weight: u32, rng: &mut XorShiftRng) -> SparseTrinaryPoly {
    use rand::seq::index::sample;
    let mut idx = sample(rng, n as usize, (2 * weight) as usize).into_vec();
    let m: Vec<u32> = idx.split_off(weight as usize).into_iter().map(|i| i as u32).collect();
    let p: Vec<u32> = idx.into_iter().map(|i| i as u32).collect();
    SparseTrinaryPoly::new(p, m)
}

fn bench_dense_multiply(c: &mut Criterion) {
    let p = params::by_name("ees401ep1").unwrap();
    let n = p.n as usize;
    let mut rng = XorShiftRng::seed_from_u64(0xd19f1ed);
    let a = random_dense(n, p.q, &mut rng);
    let b = random_dense(n, p.q, &mut rng);
    let multiplier = select_dense_multiplier(n);
    let req = multiplier.scratch_requirements(n);
    let mut scratch = vec![0u16; req.polys * req.padded_n];
    let mut out = vec![0u16; n];

    c.bench_function("dense_mul/karatsuba/ees401ep1", |bencher| {
        bencher.iter(|| {
            multiplier
                .multiply(black_box(&a), black_box(&b), n, p.q, &mut scratch, &mut out)
                .unwrap();
            black_box(&out);
        })
    });

    let schoolbook = SchoolbookMultiplier;
    let req = schoolbook.scratch_requirements(n);
    let mut scratch = vec![0u16; req.polys * req.padded_n];
    c.bench_function("dense_mul/schoolbook/ees401ep1", |bencher| {
        bencher.iter(|| {
            schoolbook
                .multiply(black_box(&a), black_box(&b), n, p.q, &mut scratch, &mut out)
                .unwrap();
            black_box(&out);
        })
    });
}

fn bench_sparse_multiply(c: &mut Criterion) {
    let p = params::by_name("ees401ep1").unwrap();
    let n = p.n as usize;
    let mut rng = XorShiftRng::seed_from_u64(0x5eed1e55);
    let a = random_dense(n, p.q, &mut rng);
    let f = random_sparse(p.n, p.flat_weight().unwrap_or(p.df_r), &mut rng);
    let multiplier = select_sparse_multiplier(n);
    let mut out = vec![0u16; n];

    c.bench_function("sparse_mul/ees401ep1", |bencher| {
        bencher.iter(|| {
            multiplier
                .multiply(black_box(&a), n, p.q, &f.p, &f.m, &mut out)
                .unwrap();
            black_box(&out);
        })
    });
}

criterion_group!(benches, bench_dense_multiply, bench_sparse_multiply);
criterion_main!(benches);
