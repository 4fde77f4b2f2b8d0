//! Deserialization of sparse matrices in the matrix market coordinate format

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use std::str;

use num_traits::Float;
use smallvec::SmallVec;

use crate::errors::ParseError;
use crate::num_kinds::NumKind;
use crate::sparse::{SymmetryMode, TriMat};

const BANNER: &str = "%%matrixmarket";

const BYTE_ORDER_MARK: &[u8] = b"\xef\xbb\xbf";

// a bogus size line must not trigger a huge allocation up front
const MAX_PREALLOC: usize = 1 << 20;

type Tokens<'a> = SmallVec<[&'a str; 4]>;

/// How the value of an entry line is written
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
enum ValueField {
    #[default]
    Real,
    Integer,
    Pattern,
}

impl ValueField {
    /// `None` for the complex field, which has no real valued reading
    fn from_kind(kind: NumKind) -> Option<Self> {
        match kind {
            NumKind::Float => Some(Self::Real),
            NumKind::Integer => Some(Self::Integer),
            NumKind::Pattern => Some(Self::Pattern),
            NumKind::Complex => None,
        }
    }
}

/// Field and storage symmetry declared by a banner line. A file without a
/// banner holds general real values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
struct Banner {
    field: ValueField,
    symmetry: SymmetryMode,
}

fn parse_banner(line: &str) -> Result<Banner, ParseError> {
    let line = line.to_lowercase();
    let tokens: Tokens = line.split_whitespace().collect();
    if tokens.len() < 5 || tokens[0] != BANNER {
        return Err(ParseError::MalformedBanner);
    }
    match tokens[1] {
        "matrix" => {}
        "vector" => return Err(ParseError::UnsupportedFormat),
        _ => return Err(ParseError::MalformedBanner),
    }
    match tokens[2] {
        "coordinate" => {}
        // dense storage
        "array" => return Err(ParseError::UnsupportedFormat),
        _ => return Err(ParseError::MalformedBanner),
    }
    let kind =
        NumKind::from_field(tokens[3]).ok_or(ParseError::MalformedBanner)?;
    let field =
        ValueField::from_kind(kind).ok_or(ParseError::UnsupportedFormat)?;
    let symmetry = match tokens[4] {
        "general" => SymmetryMode::General,
        "symmetric" => SymmetryMode::Symmetric,
        "skew-symmetric" | "skewsymmetric" => SymmetryMode::SkewSymmetric,
        "hermitian" => SymmetryMode::Hermitian,
        _ => return Err(ParseError::MalformedBanner),
    };
    Ok(Banner { field, symmetry })
}

fn is_banner(line: &[u8]) -> bool {
    line.get(..BANNER.len())
        .map_or(false, |start| start.eq_ignore_ascii_case(BANNER.as_bytes()))
}

/// Parse a size line of the form `rows cols entries`, with arbitrary
/// amounts of whitespace.
fn parse_size_line(line: &str) -> Result<(usize, usize, usize), ParseError> {
    let tokens: Tokens = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(ParseError::MalformedHeader);
    }
    let mut infos = tokens.iter().map(|s| s.parse::<usize>());
    let mut next = || match infos.next() {
        Some(Ok(val)) => Ok(val),
        _ => Err(ParseError::MalformedHeader),
    };
    let rows = next()?;
    let cols = next()?;
    let entries = next()?;
    Ok((rows, cols, entries))
}

/// Parse an entry line of the form `row col value`. Anything after the
/// value is ignored.
fn parse_entry<N: Float>(
    line: &str,
    line_no: usize,
    shape: (usize, usize),
    field: ValueField,
) -> Result<(usize, usize, N), ParseError> {
    let bad_entry = || ParseError::MalformedEntry(line_no);
    let tokens: Tokens = line.split_whitespace().take(3).collect();
    let needed = match field {
        ValueField::Pattern => 2,
        ValueField::Real | ValueField::Integer => 3,
    };
    if tokens.len() < needed {
        return Err(bad_entry());
    }
    // matrix market indices are 1-based
    let index = |tok: &str, dim: usize| {
        tok.parse::<usize>()
            .ok()
            .and_then(|ind| ind.checked_sub(1))
            .filter(|&ind| ind < dim)
            .ok_or_else(bad_entry)
    };
    let row = index(tokens[0], shape.0)?;
    let col = index(tokens[1], shape.1)?;
    let val = match field {
        ValueField::Real => tokens[2]
            .parse::<f64>()
            .ok()
            .and_then(N::from)
            .ok_or_else(bad_entry)?,
        ValueField::Integer => tokens[2]
            .parse::<i64>()
            .ok()
            .and_then(N::from)
            .ok_or_else(bad_entry)?,
        ValueField::Pattern => N::one(),
    };
    Ok((row, col, val))
}

/// Read a sparse matrix file in the matrix market coordinate format and
/// return the corresponding triplet matrix.
///
/// See [`read_matrix_market_from_bufread`] for the accepted format.
pub fn read_matrix_market<N, P>(mm_file: P) -> Result<TriMat<N>, ParseError>
where
    N: Float,
    P: AsRef<Path>,
{
    let mm_file = mm_file.as_ref();
    let f = File::open(mm_file)?;
    let mut reader = io::BufReader::new(f);
    read_matrix_market_from_bufread(&mut reader)
}

/// Read a sparse matrix in the matrix market coordinate format from a
/// buffered reader.
///
/// The input is an optional `%%MatrixMarket matrix coordinate <field>
/// <symmetry>` banner, followed by a `rows cols entries` size line and one
/// `row col value` line per entry, with 1-based indices. Blank lines and
/// lines starting with `%` are skipped anywhere, whatever their encoding;
/// the other lines must be UTF-8. A UTF-8 byte order mark before the first
/// line is ignored. The returned matrix uses 0-based indices.
///
/// The number of entry lines must match the count declared by the size
/// line.
///
/// ```rust
/// use mtxsym::io::read_matrix_market_from_bufread;
/// let text = "% a comment\n3 3 3\n1 1 5.0\n1 2 2.0\n2 1 2.0\n";
/// let mat = read_matrix_market_from_bufread::<f64, _>(&mut text.as_bytes())
///     .unwrap();
/// assert_eq!(mat.shape(), (3, 3));
/// assert_eq!(mat.row_inds(), &[0, 0, 1]);
/// ```
pub fn read_matrix_market_from_bufread<N, R>(
    reader: &mut R,
) -> Result<TriMat<N>, ParseError>
where
    N: Float,
    R: BufRead,
{
    // matrix market format specifies lines of at most 1024 chars
    let mut buf = Vec::with_capacity(1024);
    let mut line_no = 0;
    let mut banner = Banner::default();
    let mut size = None;
    let mut row_inds = Vec::new();
    let mut col_inds = Vec::new();
    let mut data = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let mut line = &buf[..];
        if line_no == 1 {
            line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
            if is_banner(line) {
                let line = str::from_utf8(line)
                    .map_err(|_| ParseError::MalformedBanner)?;
                banner = parse_banner(line)?;
                continue;
            }
        }
        let content = line.trim_ascii();
        if content.is_empty() || content[0] == b'%' {
            continue;
        }
        match size {
            None => {
                let content = str::from_utf8(content)
                    .map_err(|_| ParseError::MalformedHeader)?;
                let (rows, cols, entries) = parse_size_line(content)?;
                let cap = entries.min(MAX_PREALLOC);
                row_inds.reserve_exact(cap);
                col_inds.reserve_exact(cap);
                data.reserve_exact(cap);
                size = Some((rows, cols, entries));
            }
            Some((rows, cols, _)) => {
                let content = str::from_utf8(content)
                    .map_err(|_| ParseError::MalformedEntry(line_no))?;
                let shape = (rows, cols);
                let (row, col, val) =
                    parse_entry(content, line_no, shape, banner.field)?;
                row_inds.push(row);
                col_inds.push(col);
                data.push(val);
            }
        }
    }

    let (rows, cols, declared) = size.ok_or(ParseError::MalformedHeader)?;
    if data.len() != declared {
        return Err(ParseError::EntryCountMismatch {
            declared,
            actual: data.len(),
        });
    }
    Ok(TriMat::new_trusted(
        (rows, cols),
        row_inds,
        col_inds,
        data,
        banner.symmetry,
    ))
}

/// Read a sparse matrix in the matrix market coordinate format from a
/// string
pub fn read_matrix_market_from_str<N: Float>(
    text: &str,
) -> Result<TriMat<N>, ParseError> {
    read_matrix_market_from_bufread(&mut text.as_bytes())
}

#[cfg(test)]
mod test {
    use super::{
        parse_banner, parse_size_line, read_matrix_market,
        read_matrix_market_from_bufread, read_matrix_market_from_str, Banner,
        ValueField,
    };
    use crate::errors::ParseError;
    use crate::sparse::SymmetryMode;
    use std::io;

    #[test]
    fn simple_matrix_market_read() {
        let path = "data/matrix_market/simple.mtx";
        let mat = read_matrix_market::<f64, _>(path).unwrap();
        assert_eq!(mat.rows(), 5);
        assert_eq!(mat.cols(), 5);
        assert_eq!(mat.nnz(), 8);
        assert_eq!(mat.symmetry(), SymmetryMode::General);
        assert_eq!(mat.row_inds(), &[0, 1, 2, 0, 3, 3, 3, 4]);
        assert_eq!(mat.col_inds(), &[0, 1, 2, 3, 1, 3, 4, 4]);
        assert_eq!(
            mat.data(),
            &[1., 10.5, 1.5e-02, 6., 2.505e2, -2.8e2, 3.332e1, 1.2e+1]
        );
    }

    #[test]
    fn int_matrix_market_read() {
        let path = "data/matrix_market/simple_int.mtx";
        let mat = read_matrix_market::<f32, _>(path).unwrap();
        assert_eq!(mat.shape(), (5, 5));
        assert_eq!(mat.nnz(), 8);
        assert_eq!(mat.data(), &[1., 1., 1., 6., 2., -2., 3., 1.]);
    }

    #[test]
    fn pattern_matrix_market_read() {
        let path = "data/matrix_market/pattern_symmetric.mtx";
        let mat = read_matrix_market::<f64, _>(path).unwrap();
        assert_eq!(mat.shape(), (4, 4));
        assert_eq!(mat.symmetry(), SymmetryMode::Symmetric);
        assert_eq!(mat.row_inds(), &[1, 2, 3, 3]);
        assert_eq!(mat.col_inds(), &[0, 0, 1, 2]);
        assert_eq!(mat.data(), &[1., 1., 1., 1.]);
    }

    #[test]
    fn read_without_banner() {
        let text = "% a comment\n\n3 3 3\n1 1 5.0\n  1 2 2.0\n2 1 2.0\n";
        let mat = read_matrix_market_from_str::<f64>(text).unwrap();
        assert_eq!(mat.shape(), (3, 3));
        assert_eq!(mat.nnz(), 3);
        assert_eq!(mat.row_inds(), &[0, 0, 1]);
        assert_eq!(mat.col_inds(), &[0, 1, 0]);
        assert_eq!(mat.data(), &[5., 2., 2.]);
    }

    #[test]
    fn comments_between_entries_and_extra_tokens() {
        let text =
            "2 2 2\n1 2 4.0 trailing junk\n% in between\n\n2 1 4.0\n";
        let mat = read_matrix_market_from_str::<f64>(text).unwrap();
        assert_eq!(mat.data(), &[4., 4.]);
    }

    #[test]
    fn banner_only_on_first_line() {
        // a banner later in the file is just a comment
        let text = "2 2 1\n\
                    %%MatrixMarket matrix coordinate pattern general\n\
                    1 2 3.5\n";
        let mat = read_matrix_market_from_str::<f64>(text).unwrap();
        assert_eq!(mat.data(), &[3.5]);
    }

    #[test]
    fn banner_parsing() {
        let line = "%%MatrixMarket MATRIX Coordinate Real Skew-Symmetric\n";
        let banner = parse_banner(line).unwrap();
        assert_eq!(
            banner,
            Banner {
                field: ValueField::Real,
                symmetry: SymmetryMode::SkewSymmetric
            }
        );
        assert_eq!(
            parse_banner("%%MatrixMarket matrix coordinate complex general"),
            Err(ParseError::UnsupportedFormat)
        );
        assert_eq!(
            parse_banner("%%MatrixMarket matrix array real general"),
            Err(ParseError::UnsupportedFormat)
        );
        assert_eq!(
            parse_banner("%%MatrixMarket matrix coordinate real"),
            Err(ParseError::MalformedBanner)
        );
        assert_eq!(
            parse_banner("%%MatrixMarket matrix coordinate real upper"),
            Err(ParseError::MalformedBanner)
        );
    }

    #[test]
    fn size_line_parsing() {
        assert_eq!(parse_size_line("3 4   5"), Ok((3, 4, 5)));
        assert_eq!(parse_size_line("3 4"), Err(ParseError::MalformedHeader));
        for line in ["3 4 5 6", "3 -4 5", "3 4 5.0"] {
            assert_eq!(parse_size_line(line), Err(ParseError::MalformedHeader));
        }
    }

    #[test]
    fn missing_size_line() {
        let res = read_matrix_market_from_str::<f64>("% only comments\n\n");
        assert_eq!(res.unwrap_err(), ParseError::MalformedHeader);
        let res = read_matrix_market_from_str::<f64>("");
        assert_eq!(res.unwrap_err(), ParseError::MalformedHeader);
    }

    #[test]
    fn entry_count_mismatch() {
        let path = "data/matrix_market/bad_files/too_few_entries.mtx";
        let res = read_matrix_market::<f64, _>(path);
        assert_eq!(
            res.unwrap_err(),
            ParseError::EntryCountMismatch {
                declared: 5,
                actual: 3
            }
        );
        let res = read_matrix_market_from_str::<f64>("2 2 1\n1 1 1\n2 2 1\n");
        assert_eq!(
            res.unwrap_err(),
            ParseError::EntryCountMismatch {
                declared: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn malformed_entries() {
        let path = "data/matrix_market/bad_files/bad_value.mtx";
        let res = read_matrix_market::<f64, _>(path);
        assert_eq!(res.unwrap_err(), ParseError::MalformedEntry(5));
        // too few tokens
        let res = read_matrix_market_from_str::<f64>("2 2 1\n1 2\n");
        assert_eq!(res.unwrap_err(), ParseError::MalformedEntry(2));
        // zero index
        let res = read_matrix_market_from_str::<f64>("2 2 1\n0 1 1.0\n");
        assert_eq!(res.unwrap_err(), ParseError::MalformedEntry(2));
        // out of the declared bounds
        let res = read_matrix_market_from_str::<f64>("2 2 1\n\n1 3 1.0\n");
        assert_eq!(res.unwrap_err(), ParseError::MalformedEntry(3));
        // non integer value in an integer file
        let text = "%%MatrixMarket matrix coordinate integer general\n\
                    1 1 1\n1 1 1.5\n";
        let res = read_matrix_market_from_str::<f64>(text);
        assert_eq!(res.unwrap_err(), ParseError::MalformedEntry(3));
    }

    #[test]
    fn non_utf8_comments_are_skipped() {
        let text = b"% caf\xe9\n2 2 1\n% \xff\xfe\n1 1 4.0\n";
        let mat = read_matrix_market_from_bufread::<f64, _>(&mut &text[..])
            .unwrap();
        assert_eq!(mat.shape(), (2, 2));
        assert_eq!(mat.data(), &[4.]);
    }

    #[test]
    fn non_utf8_content_lines() {
        let text = b"2 2 1\n1 1 4\xe9\n";
        let res = read_matrix_market_from_bufread::<f64, _>(&mut &text[..]);
        assert_eq!(res.unwrap_err(), ParseError::MalformedEntry(2));
        let text = b"% fine\n2 \xe9 1\n1 1 4\n";
        let res = read_matrix_market_from_bufread::<f64, _>(&mut &text[..]);
        assert_eq!(res.unwrap_err(), ParseError::MalformedHeader);
    }

    #[test]
    fn byte_order_mark_before_first_line() {
        let text = "\u{feff}\
                    %%MatrixMarket matrix coordinate pattern symmetric\n\
                    2 2 1\n2 1\n";
        let mat = read_matrix_market_from_str::<f64>(text).unwrap();
        assert_eq!(mat.symmetry(), SymmetryMode::Symmetric);
        assert_eq!(mat.data(), &[1.]);
        let text = "\u{feff}2 2 0\n";
        let mat = read_matrix_market_from_str::<f64>(text).unwrap();
        assert_eq!(mat.shape(), (2, 2));
        assert_eq!(mat.nnz(), 0);
    }

    #[test]
    fn unsupported_complex_file() {
        let path = "data/matrix_market/bad_files/complex.mtx";
        let res = read_matrix_market::<f64, _>(path);
        assert_eq!(res.unwrap_err(), ParseError::UnsupportedFormat);
    }

    #[test]
    fn missing_file() {
        let res = read_matrix_market::<f64, _>("data/matrix_market/nope.mtx");
        match res {
            Err(ParseError::Io(err)) => {
                assert_eq!(err.kind(), io::ErrorKind::NotFound)
            }
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
