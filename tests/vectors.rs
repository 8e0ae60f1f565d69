//! Literal test vectors from spec §8, driven through the public API as
//! integration tests (in addition to the unit tests colocated with each
//! module).

use ntru_core::poly::dense::multiply_coefficients;
use ntru_core::poly::invert::invert_mod2;
use ntru_core::poly::product::{multiply_product_indices, ProductFormPoly};
use ntru_core::poly::sparse::{multiply_indices, ScalarSparseMultiplier, SparseTrinaryPoly};
use ntru_core::poly::check_min_weight;

const N: usize = 17;
const Q: u32 = 1 << 16;

const A: [u16; N] = [
    36486, 20395, 8746, 16637, 26195, 1654, 24222, 13306, 9573, 26946, 29106, 2401, 32146, 2871,
    41930, 7902, 3398,
];

#[test]
fn vector_1_multiply_indices() {
    let p = [7, 10];
    let m = [9, 13];
    let mut out = [0u16; N];
    multiply_indices(&A, N, Q, &p, &m, &mut out).unwrap();
    assert_eq!(
        out,
        [
            6644, 48910, 5764, 16270, 2612, 10231, 769, 2577, 58289, 38323, 56334, 29942, 55901,
            43714, 17452, 43795, 21225
        ]
    );
}

#[test]
fn vector_2_multiply_product_indices() {
    let product = ProductFormPoly {
        b1: SparseTrinaryPoly::new(vec![7, 10], vec![9, 13]),
        b2: SparseTrinaryPoly::new(vec![1, 13], vec![6, 8]),
        b3: SparseTrinaryPoly::new(vec![4, 10, 11], vec![6, 9, 15]),
    };
    let mut out = [0u16; N];
    multiply_product_indices(&ScalarSparseMultiplier, &A, N, Q, &product, &mut out).unwrap();
    assert_eq!(
        out,
        [
            40787, 24792, 27808, 13989, 56309, 37625, 37436, 32307, 15311, 59789, 32769, 65008,
            3711, 54663, 25343, 55984, 6193
        ]
    );
}

#[test]
fn vector_3_multiply_coefficients() {
    let b: [u16; N] = [
        5266, 35261, 54826, 45380, 46459, 46509, 56767, 46916, 33670, 11921, 46519, 47628, 20388,
        4167, 39405, 2712, 52748,
    ];
    let mut scratch = vec![0u16; 2 * N];
    let mut out = [0u16; N];
    multiply_coefficients(&A, &b, N, Q, &mut scratch, &mut out).unwrap();
    assert_eq!(
        out,
        [
            30101, 45125, 62370, 2275, 34473, 7074, 62574, 57665, 5199, 4482, 49487, 17159, 33125,
            11061, 19328, 22268, 46230
        ]
    );
}

#[test]
fn vector_4_invert_mod2() {
    let a = [1u16, 1, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1];
    let inv = invert_mod2(&a, N).expect("invertible");
    assert_eq!(
        inv,
        [1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 1, 1]
    );

    let mut non_invertible = a;
    non_invertible[0] = 0;
    assert!(invert_mod2(&non_invertible, N).is_none());

    let b = [1u16, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0];
    assert!(invert_mod2(&b, N).is_none());
}

#[test]
fn vector_5_min_weight_check() {
    let seq = [2u8, 2, 2, 2, 0, 0, 0, 0, 0, 1, 1, 1, 1];
    assert!(check_min_weight(&seq, 4));
    assert!(!check_min_weight(&seq, 5));
}
