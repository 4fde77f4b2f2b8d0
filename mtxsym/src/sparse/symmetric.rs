//! Functions dealing with symmetric sparse matrices
//!
//! Symmetry is decided on an edge map: every stored location `(row, col)`
//! is mapped to the sum of the values stored there, and each off-diagonal
//! edge is then compared with its mirror `(col, row)`. This never builds a
//! transposed copy of the matrix, and reports the first offending location
//! in ascending `(row, col)` order so that verdicts are reproducible.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use approx::AbsDiffEq;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sparse::{SymmetryMode, TriMat};

/// Absolute tolerance used by `SymmetryChecker::default()`
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Outcome of a symmetry check.
///
/// Offending locations are zero-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymmetryVerdict {
    Symmetric,
    /// The matrix is not square
    ShapeAsymmetric { rows: usize, cols: usize },
    /// `(row, col)` holds a non-negligible value but `(col, row)` is not
    /// stored
    StructurallyAsymmetric { row: usize, col: usize },
    /// `(row, col)` and `(col, row)` differ by more than the tolerance
    NumericallyAsymmetric { row: usize, col: usize },
}

impl SymmetryVerdict {
    pub fn is_symmetric(&self) -> bool {
        matches!(self, Self::Symmetric)
    }

    /// The first location found to break symmetry, if any
    pub fn offending(&self) -> Option<(usize, usize)> {
        match *self {
            Self::StructurallyAsymmetric { row, col }
            | Self::NumericallyAsymmetric { row, col } => Some((row, col)),
            Self::Symmetric | Self::ShapeAsymmetric { .. } => None,
        }
    }
}

impl fmt::Display for SymmetryVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Symmetric => write!(f, "symmetric"),
            Self::ShapeAsymmetric { rows, cols } => {
                write!(f, "not square ({} x {})", rows, cols)
            }
            Self::StructurallyAsymmetric { row, col } => write!(
                f,
                "entry ({}, {}) has no mirror entry ({}, {})",
                row, col, col, row
            ),
            Self::NumericallyAsymmetric { row, col } => write!(
                f,
                "entry ({}, {}) differs from mirror entry ({}, {})",
                row, col, col, row
            ),
        }
    }
}

/// Accumulated value of every stored location of a matrix.
///
/// Duplicate locations are summed. When the matrix only stores one
/// triangle, the implied mirror of each off-diagonal entry is added as
/// well, negated for skew-symmetric storage.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMap<N> {
    edges: BTreeMap<(usize, usize), N>,
}

impl<N: Float> EdgeMap<N> {
    pub fn from_triplets(mat: &TriMat<N>) -> Self {
        let mut edges = BTreeMap::new();
        let symmetry = mat.symmetry();
        for (&val, (row, col)) in mat.triplet_iter() {
            accumulate(&mut edges, (row, col), val);
            if row == col {
                continue;
            }
            match symmetry {
                SymmetryMode::General => {}
                SymmetryMode::Symmetric | SymmetryMode::Hermitian => {
                    accumulate(&mut edges, (col, row), val);
                }
                SymmetryMode::SkewSymmetric => {
                    accumulate(&mut edges, (col, row), -val);
                }
            }
        }
        Self { edges }
    }

    /// Accumulated value at `(row, col)`, `None` if nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> Option<N> {
        self.edges.get(&(row, col)).copied()
    }

    /// Number of distinct stored locations
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over `((row, col), value)` in ascending row then column order
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            inner: self.edges.iter(),
        }
    }
}

fn accumulate<N: Float>(
    edges: &mut BTreeMap<(usize, usize), N>,
    loc: (usize, usize),
    val: N,
) {
    edges
        .entry(loc)
        .and_modify(|acc| *acc = *acc + val)
        .or_insert(val);
}

/// Iterator over the edges of an `EdgeMap`
pub struct Iter<'a, N> {
    inner: btree_map::Iter<'a, (usize, usize), N>,
}

impl<'a, N: Copy> Iterator for Iter<'a, N> {
    type Item = ((usize, usize), N);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&loc, &val)| (loc, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Builder pattern structure to configure a symmetry check
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SymmetryChecker<N> {
    tolerance: N,
}

macro_rules! float_checker_default_impl {
    ($prim: ty) => {
        impl Default for SymmetryChecker<$prim> {
            fn default() -> Self {
                Self {
                    tolerance: DEFAULT_TOLERANCE as $prim,
                }
            }
        }
    };
}

float_checker_default_impl!(f32);
float_checker_default_impl!(f64);

impl<N> SymmetryChecker<N>
where
    N: Float + AbsDiffEq<Epsilon = N>,
{
    pub fn new(tolerance: N) -> Self {
        Self { tolerance }
    }

    /// Set the absolute tolerance under which two values are considered
    /// equal
    pub fn tolerance(self, tolerance: N) -> Self {
        Self { tolerance }
    }

    pub fn get_tolerance(&self) -> N {
        self.tolerance
    }

    pub fn check(&self, mat: &TriMat<N>) -> SymmetryVerdict {
        check_symmetry(mat, self.tolerance)
    }
}

/// Decide whether `mat` is symmetric, up to an absolute `tolerance`.
///
/// Diagonal entries are never compared. An off-diagonal entry whose mirror
/// is not stored only breaks symmetry if its own magnitude exceeds the
/// tolerance. A non-finite off-diagonal value always breaks symmetry.
///
/// ```rust
/// use mtxsym::{check_symmetry, SymmetryVerdict, TriMat};
/// let mat = TriMat::from_entries((2, 2), vec![(0, 1, 4.)]).unwrap();
/// assert_eq!(
///     check_symmetry(&mat, 1e-12),
///     SymmetryVerdict::StructurallyAsymmetric { row: 0, col: 1 }
/// );
/// ```
pub fn check_symmetry<N>(mat: &TriMat<N>, tolerance: N) -> SymmetryVerdict
where
    N: Float + AbsDiffEq<Epsilon = N>,
{
    if !mat.is_square() {
        return SymmetryVerdict::ShapeAsymmetric {
            rows: mat.rows(),
            cols: mat.cols(),
        };
    }
    let edges = EdgeMap::from_triplets(mat);
    for ((row, col), val) in edges.iter() {
        if row == col {
            continue;
        }
        match edges.get(col, row) {
            None => {
                if !val.abs_diff_eq(&N::zero(), tolerance) {
                    return SymmetryVerdict::StructurallyAsymmetric { row, col };
                }
            }
            // already compared from the upper triangle
            Some(_) if row > col => {}
            Some(mirror) => {
                if !val.abs_diff_eq(&mirror, tolerance) {
                    return SymmetryVerdict::NumericallyAsymmetric { row, col };
                }
            }
        }
    }
    SymmetryVerdict::Symmetric
}

pub fn is_symmetric<N>(mat: &TriMat<N>, tolerance: N) -> bool
where
    N: Float + AbsDiffEq<Epsilon = N>,
{
    check_symmetry(mat, tolerance).is_symmetric()
}
