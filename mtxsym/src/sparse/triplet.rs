//! Triplet format matrix
//!
//! Holds the entries of a coordinate file as they were read, in file order,
//! with no compression and no merging of duplicate locations. Useful for
//! validating a matrix, not for computations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::StructureError;

/// Storage symmetry declared by a matrix market banner.
///
/// For anything but `General`, only one triangle of the matrix is stored
/// and the other one is implied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymmetryMode {
    #[default]
    General,
    Symmetric,
    SkewSymmetric,
    Hermitian,
}

/// Triplet matrix
///
/// Entries are stored as three parallel vectors: the zero-based row index,
/// the zero-based column index and the value of each entry. Every index is
/// guaranteed to lie inside the declared shape.
///
/// A triplet matrix is immutable once built.
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMat<N> {
    rows: usize,
    cols: usize,
    row_inds: Vec<usize>,
    col_inds: Vec<usize>,
    data: Vec<N>,
    symmetry: SymmetryMode,
}

/// A triplet matrix of double precision values
pub type SparseMatrix = TriMat<f64>;

impl<N> TriMat<N> {
    /// Create a triplet matrix from its parallel index and value vectors.
    ///
    /// Duplicate locations are allowed, and are understood as additive
    /// contributions to the same matrix element.
    ///
    /// ```rust
    /// use mtxsym::TriMat;
    /// let mat = TriMat::from_triplets(
    ///     (3, 3),
    ///     vec![0, 0, 1],
    ///     vec![0, 1, 0],
    ///     vec![5., 2., 2.],
    /// )
    /// .unwrap();
    /// assert_eq!(mat.nnz(), 3);
    /// ```
    pub fn from_triplets(
        shape: (usize, usize),
        row_inds: Vec<usize>,
        col_inds: Vec<usize>,
        data: Vec<N>,
    ) -> Result<Self, StructureError> {
        Self::with_symmetry(
            shape,
            row_inds,
            col_inds,
            data,
            SymmetryMode::General,
        )
    }

    /// Create a triplet matrix where only one triangle is stored, the other
    /// one being implied by `symmetry`.
    pub fn with_symmetry(
        shape: (usize, usize),
        row_inds: Vec<usize>,
        col_inds: Vec<usize>,
        data: Vec<N>,
        symmetry: SymmetryMode,
    ) -> Result<Self, StructureError> {
        if row_inds.len() != data.len() || col_inds.len() != data.len() {
            return Err(StructureError::DataIndicesMismatch);
        }
        let (rows, cols) = shape;
        if let Some((&row, &col)) = row_inds
            .iter()
            .zip(col_inds.iter())
            .find(|&(&row, &col)| row >= rows || col >= cols)
        {
            return Err(StructureError::OutOfBoundsIndex { row, col });
        }
        Ok(Self {
            rows,
            cols,
            row_inds,
            col_inds,
            data,
            symmetry,
        })
    }

    /// Create a triplet matrix without checking its structure. Intended for
    /// the file reader, which validates every entry as it goes.
    pub(crate) fn new_trusted(
        shape: (usize, usize),
        row_inds: Vec<usize>,
        col_inds: Vec<usize>,
        data: Vec<N>,
        symmetry: SymmetryMode,
    ) -> Self {
        debug_assert!(row_inds.len() == data.len());
        debug_assert!(col_inds.len() == data.len());
        Self {
            rows: shape.0,
            cols: shape.1,
            row_inds,
            col_inds,
            data,
            symmetry,
        }
    }

    /// Build a triplet matrix from `(row, col, value)` entries.
    pub fn from_entries<It>(
        shape: (usize, usize),
        entries: It,
    ) -> Result<Self, StructureError>
    where
        It: IntoIterator<Item = (usize, usize, N)>,
    {
        let entries = entries.into_iter();
        let cap = entries.size_hint().0;
        let mut row_inds = Vec::with_capacity(cap);
        let mut col_inds = Vec::with_capacity(cap);
        let mut data = Vec::with_capacity(cap);
        for (row, col, val) in entries {
            row_inds.push(row);
            col_inds.push(col);
            data.push(val);
        }
        Self::from_triplets(shape, row_inds, col_inds, data)
    }

    /// The number of rows of the matrix
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of cols of the matrix
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape of the matrix, as a `(rows, cols)` tuple
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The number of stored entries, duplicates included
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn symmetry(&self) -> SymmetryMode {
        self.symmetry
    }

    pub fn row_inds(&self) -> &[usize] {
        &self.row_inds[..]
    }

    pub fn col_inds(&self) -> &[usize] {
        &self.col_inds[..]
    }

    pub fn data(&self) -> &[N] {
        &self.data[..]
    }

    /// Iterate over the stored entries in storage order, yielding
    /// `(&value, (row, col))`.
    pub fn triplet_iter(
        &self,
    ) -> impl ExactSizeIterator<Item = (&N, (usize, usize))> + '_ {
        self.data
            .iter()
            .zip(self.row_inds.iter().zip(self.col_inds.iter()))
            .map(|(val, (&row, &col))| (val, (row, col)))
    }
}
