//! Batch configuration: where the list of targets lives and which tolerance
//! to check with.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mtxsym::DEFAULT_TOLERANCE;
use structopt::StructOpt;

/// List file read when none is given on the command line
pub const DEFAULT_LIST_FILE: &str = "mtx_names.txt";

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    BadTolerance(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BadTolerance(val) => write!(
                f,
                "tolerance must be a non-negative number, got {:?}",
                val
            ),
        }
    }
}

impl Error for ConfigError {}

/// Check that the matrix market files listed in a file are symmetric
#[derive(Clone, Debug, PartialEq, StructOpt)]
#[structopt(name = "mtxsym-batch")]
pub struct BatchConfig {
    /// Largest absolute difference accepted between mirrored values
    #[structopt(
        short = "t",
        long = "tolerance",
        value_name = "EPS",
        default_value = "1e-12",
        allow_hyphen_values = true,
        parse(try_from_str = parse_tolerance)
    )]
    tolerance: f64,
    /// File listing the matrix files and directories to check, one per line
    #[structopt(
        name = "LIST_FILE",
        default_value = "mtx_names.txt",
        parse(from_os_str)
    )]
    list_file: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            list_file: PathBuf::from(DEFAULT_LIST_FILE),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl BatchConfig {
    pub fn list_file<P: Into<PathBuf>>(self, list_file: P) -> Self {
        Self {
            list_file: list_file.into(),
            ..self
        }
    }

    pub fn tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    pub fn get_list_file(&self) -> &Path {
        &self.list_file
    }

    pub fn get_tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Read the targets of the list file: one file or directory per
    /// non-blank line, surrounding whitespace removed.
    pub fn read_targets(&self) -> io::Result<Vec<String>> {
        let content = fs::read_to_string(&self.list_file)?;
        Ok(parse_targets(&content))
    }
}

fn parse_tolerance(val: &str) -> Result<f64, ConfigError> {
    match val.parse::<f64>() {
        Ok(tol) if tol >= 0. && tol.is_finite() => Ok(tol),
        _ => Err(ConfigError::BadTolerance(val.to_string())),
    }
}

pub fn parse_targets(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
