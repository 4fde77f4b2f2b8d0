//! Turning list file targets into matrix market files

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub const MTX_EXTENSION: &str = "mtx";

/// A path to check, or a path that could not be explored
#[derive(Debug)]
pub enum Target {
    File(PathBuf),
    Unreachable(PathBuf, io::Error),
}

impl Target {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Unreachable(path, _) => path,
        }
    }
}

fn has_mtx_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == MTX_EXTENSION)
}

/// Collect the `.mtx` files below `dir`, sorted by file name at each level.
///
/// Symbolic links to directories are not followed. Entries that cannot be
/// read are reported as unreachable instead of aborting the walk.
fn walk_dir(dir: &Path, targets: &mut Vec<Target>) {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir()
                    && has_mtx_extension(entry.path())
                {
                    targets.push(Target::File(entry.into_path()));
                }
            }
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                targets.push(Target::Unreachable(path, io::Error::from(err)));
            }
        }
    }
}

/// Resolve a single list file target.
///
/// Directories are searched recursively for `.mtx` files. A file is taken
/// as is, whatever its extension. A path that does not exist is retried
/// with the `.mtx` extension appended, so that matrices can be listed by
/// name only.
pub fn resolve_target(target: &str, targets: &mut Vec<Target>) {
    let path = PathBuf::from(target);
    if path.is_dir() {
        walk_dir(&path, targets);
        return;
    }
    if path.is_file() {
        targets.push(Target::File(path));
        return;
    }
    if !has_mtx_extension(&path) {
        let with_ext = PathBuf::from(format!("{}.{}", target, MTX_EXTENSION));
        if with_ext.is_file() {
            targets.push(Target::File(with_ext));
            return;
        }
    }
    let err =
        io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
    targets.push(Target::Unreachable(path, err));
}

/// Resolve every target of a list file, keeping the list order
pub fn find_mtx_files<S: AsRef<str>>(targets: &[S]) -> Vec<Target> {
    let mut found = Vec::new();
    for target in targets {
        resolve_target(target.as_ref(), &mut found);
    }
    found
}
