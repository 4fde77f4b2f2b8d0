//! Kind of the values stored in a matrix market file, as declared by the
//! `field` of its banner.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumKind {
    Integer,
    #[default]
    Float,
    Complex,
    /// Only the location of the entries is stored, every value is one
    Pattern,
}

impl NumKind {
    /// Parse the (lowercase) field token of a banner
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "integer" => Some(Self::Integer),
            "real" | "double" => Some(Self::Float),
            "complex" => Some(Self::Complex),
            "pattern" => Some(Self::Pattern),
            _ => None,
        }
    }
}

impl fmt::Display for NumKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "real"),
            Self::Complex => write!(f, "complex"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}
