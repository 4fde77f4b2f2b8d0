//! Error types for mtxsym

use std::error::Error;
use std::fmt;
use std::io;

/// Failure to read a coordinate file into a triplet matrix.
///
/// Line numbers are one-based and count every physical line of the input,
/// comments and blank lines included.
#[derive(Debug)]
pub enum ParseError {
    /// The input could not be read
    Io(io::Error),
    /// The `%%MatrixMarket` banner line could not be understood
    MalformedBanner,
    /// The banner describes a valid but unsupported format, eg a complex
    /// or dense array matrix
    UnsupportedFormat,
    /// The size line is missing or is not `rows cols entries`
    MalformedHeader,
    /// The entry on the given line is incomplete, unparsable or out of
    /// the declared bounds
    MalformedEntry(usize),
    /// The number of entry lines differs from the count declared in the
    /// size line
    EntryCountMismatch { declared: usize, actual: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{}", err),
            Self::MalformedBanner => {
                write!(f, "malformed matrix market banner")
            }
            Self::UnsupportedFormat => {
                write!(f, "unsupported matrix market format")
            }
            Self::MalformedHeader => write!(f, "malformed size line"),
            Self::MalformedEntry(line) => {
                write!(f, "malformed entry on line {}", line)
            }
            Self::EntryCountMismatch { declared, actual } => write!(
                f,
                "declared {} entries but found {}",
                declared, actual
            ),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl PartialEq for ParseError {
    fn eq(&self, rhs: &Self) -> bool {
        match (self, rhs) {
            (Self::Io(lhs), Self::Io(rhs)) => lhs.kind() == rhs.kind(),
            (Self::MalformedBanner, Self::MalformedBanner) => true,
            (Self::UnsupportedFormat, Self::UnsupportedFormat) => true,
            (Self::MalformedHeader, Self::MalformedHeader) => true,
            (Self::MalformedEntry(lhs), Self::MalformedEntry(rhs)) => {
                lhs == rhs
            }
            (
                Self::EntryCountMismatch {
                    declared: d1,
                    actual: a1,
                },
                Self::EntryCountMismatch {
                    declared: d2,
                    actual: a2,
                },
            ) => d1 == d2 && a1 == a2,
            _ => false,
        }
    }
}

/// Invalid structure given to an in-memory triplet matrix constructor
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum StructureError {
    /// `row_inds`, `col_inds` and `data` do not have the same length
    DataIndicesMismatch,
    /// An entry lies outside the declared shape
    OutOfBoundsIndex { row: usize, col: usize },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DataIndicesMismatch => {
                write!(f, "indices and data have different lengths")
            }
            Self::OutOfBoundsIndex { row, col } => {
                write!(f, "entry ({}, {}) is out of bounds", row, col)
            }
        }
    }
}

impl Error for StructureError {}
