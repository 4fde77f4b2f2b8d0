//! Some matrices used in tests

use crate::sparse::TriMat;

/// 5x5 symmetric matrix, entries in no particular order
pub fn mat_sym() -> TriMat<f64> {
    let row_inds = vec![0, 3, 1, 2, 4, 3, 0, 2, 4, 1];
    let col_inds = vec![0, 1, 3, 2, 2, 3, 4, 4, 0, 1];
    let data = vec![6., 9., 9., 2., 4., 4., 3., 4., 3., 8.];
    TriMat::from_triplets((5, 5), row_inds, col_inds, data).unwrap()
}

pub fn mat_nonsquare() -> TriMat<f64> {
    let row_inds = vec![0, 0, 1, 1, 2, 3, 4];
    let col_inds = vec![2, 3, 2, 3, 2, 1, 3];
    let data = vec![3., 4., 2., 5., 5., 8., 7.];
    TriMat::from_triplets((5, 4), row_inds, col_inds, data).unwrap()
}

/// Symmetric except for `(2, 0)`, which has no mirror
pub fn mat_lower_only() -> TriMat<f64> {
    let row_inds = vec![1, 2, 2, 1];
    let col_inds = vec![1, 0, 1, 2];
    let data = vec![2., 5., 3., 3.];
    TriMat::from_triplets((3, 3), row_inds, col_inds, data).unwrap()
}

/// `(0, 1)` is given twice and adds up to its mirror
pub fn mat_sym_duplicates() -> TriMat<f64> {
    let row_inds = vec![0, 0, 1];
    let col_inds = vec![1, 1, 0];
    let data = vec![1., 1., 2.];
    TriMat::from_triplets((2, 2), row_inds, col_inds, data).unwrap()
}

/// Numerically asymmetric at `(0, 3)`, structurally asymmetric at `(1, 2)`
pub fn mat_two_violations() -> TriMat<f64> {
    let row_inds = vec![1, 3, 0, 3, 1, 0];
    let col_inds = vec![2, 1, 3, 0, 3, 0];
    let data = vec![5., 1., 1., 2., 1., 9.];
    TriMat::from_triplets((4, 4), row_inds, col_inds, data).unwrap()
}
