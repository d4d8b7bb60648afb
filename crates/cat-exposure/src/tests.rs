//! Unit tests for the co-exposure matrix builder.

use cat_core::{ItemId, PersonId, Response, ResponseSet};

use crate::ExposureMatrix;

fn administer(set: &mut ResponseSet, p: u32, items: &[u32]) {
    for &i in items {
        set.insert(Response {
            person:  PersonId(p),
            item:    ItemId(i),
            outcome: 1,
        });
    }
}

#[test]
fn zero_matrix_is_empty() {
    let m = ExposureMatrix::zero(4);
    assert_eq!(m.n_items(), 4);
    assert_eq!(m.count(ItemId(0), ItemId(3)), 0);
    assert!(m.is_symmetric());
}

#[test]
fn diagonal_counts_single_exposure() {
    let mut set = ResponseSet::new();
    administer(&mut set, 0, &[0, 1]);
    administer(&mut set, 1, &[1, 2]);
    let m = ExposureMatrix::build(&set, 2, 3);
    assert_eq!(m.exposure(ItemId(0)), 1);
    assert_eq!(m.exposure(ItemId(1)), 2);
    assert_eq!(m.exposure(ItemId(2)), 1);
}

#[test]
fn off_diagonal_counts_pairs() {
    let mut set = ResponseSet::new();
    administer(&mut set, 0, &[0, 1, 2]);
    administer(&mut set, 1, &[0, 1]);
    let m = ExposureMatrix::build(&set, 2, 3);
    assert_eq!(m.count(ItemId(0), ItemId(1)), 2);
    assert_eq!(m.count(ItemId(0), ItemId(2)), 1);
    assert_eq!(m.count(ItemId(1), ItemId(2)), 1);
}

#[test]
fn matches_indicator_product() {
    // Hand-checked against the dense indicatorᵗ·indicator for this layout:
    //   person 0: items {0, 1}
    //   person 1: items {1, 2}
    //   person 2: items {0, 1, 2}
    let mut set = ResponseSet::new();
    administer(&mut set, 0, &[0, 1]);
    administer(&mut set, 1, &[1, 2]);
    administer(&mut set, 2, &[0, 1, 2]);
    let m = ExposureMatrix::build(&set, 3, 3);
    let expected = [
        [2, 2, 1], //
        [2, 3, 2],
        [1, 2, 2],
    ];
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(
                m.count(ItemId(i), ItemId(j)),
                expected[i as usize][j as usize],
                "mismatch at ({i}, {j})"
            );
        }
    }
}

#[test]
fn invariants_hold_after_build() {
    let mut set = ResponseSet::new();
    administer(&mut set, 0, &[4, 1, 3]);
    administer(&mut set, 1, &[1]);
    administer(&mut set, 2, &[0, 4]);
    let m = ExposureMatrix::build(&set, 3, 5);
    assert!(m.is_symmetric());
    assert!(m.is_diagonally_dominant());
}

#[test]
fn persons_without_responses_contribute_nothing() {
    let mut set = ResponseSet::new();
    administer(&mut set, 2, &[0]);
    let m = ExposureMatrix::build(&set, 5, 2);
    assert_eq!(m.exposure(ItemId(0)), 1);
    assert_eq!(m.exposure(ItemId(1)), 0);
}
