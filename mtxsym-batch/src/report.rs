//! Console report of a batch run

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mtxsym::{ParseError, SymmetryVerdict};

/// Outcome of checking one file
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<SymmetryVerdict, ParseError>,
}

impl FileReport {
    pub fn is_correct(&self) -> bool {
        matches!(self.result, Ok(SymmetryVerdict::Symmetric))
    }

    pub fn write_line<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "Checking {} ... ", self.path.display())?;
        match &self.result {
            Ok(SymmetryVerdict::Symmetric) => writeln!(w, "OK"),
            Ok(verdict) => writeln!(w, "Incorrect! ({})", verdict),
            Err(err) => writeln!(w, "Error: ({})", err),
        }
    }
}

/// Outcome of a whole batch, in list file order
#[derive(Debug, Default)]
pub struct Report {
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn bad_matrices(&self) -> impl Iterator<Item = &Path> + '_ {
        self.files
            .iter()
            .filter(|file| !file.is_correct())
            .map(|file| file.path.as_path())
    }

    pub fn all_correct(&self) -> bool {
        self.files.iter().all(FileReport::is_correct)
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for file in &self.files {
            file.write_line(w)?;
        }
        writeln!(w, "\n========")?;
        if self.all_correct() {
            writeln!(w, "All matrices are correct.")?;
        } else {
            writeln!(w, "Bad matrices:")?;
            for path in self.bad_matrices() {
                writeln!(w, " - {}", path.display())?;
            }
        }
        Ok(())
    }
}
