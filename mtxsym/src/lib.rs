/*!
# mtxsym

mtxsym checks that sparse matrices stored in the matrix market coordinate
format are symmetric.

It features a reader turning a coordinate file into an immutable triplet
matrix, [`TriMat`], and a symmetry check comparing every off-diagonal entry
with its mirror up to an absolute tolerance.

Finding, listing or reporting on matrix files is left to the caller; the
`mtxsym-batch` crate does that for whole directory trees.

## Examples

Reading and checking a matrix

```rust
use mtxsym::{check_symmetry, SymmetryVerdict};
let text = "3 3 3\n1 1 5.0\n1 2 2.0\n2 1 2.0\n";
let mat = mtxsym::io::read_matrix_market_from_str::<f64>(text).unwrap();
assert_eq!(check_symmetry(&mat, 1e-12), SymmetryVerdict::Symmetric);
```

Checking a matrix built in memory, with a configured tolerance

```rust
use mtxsym::{SymmetryChecker, SymmetryVerdict, TriMat};
let mat = TriMat::from_entries((2, 2), vec![(0, 1, 4.), (1, 0, 4.0001)])
    .unwrap();
let strict = SymmetryChecker::<f64>::default();
assert_eq!(
    strict.check(&mat),
    SymmetryVerdict::NumericallyAsymmetric { row: 0, col: 1 }
);
let loose = strict.tolerance(1e-2);
assert!(loose.check(&mat).is_symmetric());
```

*/

pub mod errors;
pub mod io;
pub mod num_kinds;
pub mod sparse;

pub use crate::errors::{ParseError, StructureError};
pub use crate::num_kinds::NumKind;
pub use crate::sparse::{
    check_symmetry, is_symmetric, EdgeMap, SparseMatrix, SymmetryChecker,
    SymmetryMode, SymmetryVerdict, TriMat, DEFAULT_TOLERANCE,
};

#[cfg(test)]
mod test_data;
