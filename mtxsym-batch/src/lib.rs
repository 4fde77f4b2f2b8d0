//! Batch symmetry validation of matrix market files
//!
//! Reads a list of files and directories, finds every `.mtx` file they
//! designate, checks each one and reports the matrices that are not
//! symmetric or could not be read. A failure on one file never stops the
//! batch.

pub mod config;
pub mod discover;
pub mod report;

use std::path::Path;

#[cfg(feature = "multi_thread")]
use rayon::prelude::*;

use mtxsym::io::read_matrix_market;
use mtxsym::{ParseError, SymmetryChecker, SymmetryVerdict};

pub use crate::config::BatchConfig;
pub use crate::discover::{find_mtx_files, Target};
pub use crate::report::{FileReport, Report};

/// Read and check a single file
pub fn check_file<P: AsRef<Path>>(
    path: P,
    checker: &SymmetryChecker<f64>,
) -> Result<SymmetryVerdict, ParseError> {
    let mat = read_matrix_market::<f64, _>(path)?;
    Ok(checker.check(&mat))
}

fn check_target(target: Target, checker: &SymmetryChecker<f64>) -> FileReport {
    match target {
        Target::File(path) => {
            let result = check_file(&path, checker);
            FileReport { path, result }
        }
        Target::Unreachable(path, err) => FileReport {
            path,
            result: Err(ParseError::Io(err)),
        },
    }
}

/// Check every target, in parallel when the `multi_thread` feature is on.
/// The report keeps the order of `targets`.
pub fn check_targets(targets: Vec<Target>, tolerance: f64) -> Report {
    let checker = SymmetryChecker::new(tolerance);
    #[cfg(feature = "multi_thread")]
    let files = targets
        .into_par_iter()
        .map(|target| check_target(target, &checker))
        .collect();
    #[cfg(not(feature = "multi_thread"))]
    let files = targets
        .into_iter()
        .map(|target| check_target(target, &checker))
        .collect();
    Report { files }
}

/// Run a whole batch as configured
pub fn run(config: &BatchConfig) -> std::io::Result<Report> {
    let targets = config.read_targets()?;
    let files = find_mtx_files(&targets);
    Ok(check_targets(files, config.get_tolerance()))
}
