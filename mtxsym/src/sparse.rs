//! Sparse matrix storage and symmetry analysis

pub mod symmetric;
pub mod triplet;

pub use self::symmetric::{
    check_symmetry, is_symmetric, EdgeMap, SymmetryChecker, SymmetryVerdict,
    DEFAULT_TOLERANCE,
};
pub use self::triplet::{SparseMatrix, SymmetryMode, TriMat};
