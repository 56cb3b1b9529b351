//! Plain text matrix format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (2, 1, -7)
//! ```
//!
//! The first two lines are the `rows=` and `cols=` headers, in that order.
//! Every following non-blank line is a `(row, col, value)` triple. Blank
//! lines are skipped. Whitespace around keys, values and fields is ignored.
//! A triple with value 0 is accepted and stores nothing; when a coordinate
//! repeats, the later line wins.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::matrix::{Element, SparseMatrix};

/// Parses a matrix from its text form
///
/// # Errors
///
/// * [`MatrixError::MalformedInput`] if a header is missing or unparseable,
///   or an entry line does not match `(row, col, value)`
/// * [`MatrixError::OutOfRange`] if an entry's coordinate lies outside the
///   declared dimensions
///
/// No partial matrix is returned on error.
pub fn decode<T: Element>(text: &str) -> Result<SparseMatrix<T>> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let rows = parse_header(lines.next(), 1, "rows")?;
    let cols = parse_header(lines.next(), 2, "cols")?;
    let mut matrix = SparseMatrix::new(rows, cols);

    for (line_no, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (row, col, value) = parse_entry::<T>(line_no, line)?;
        let (row, col) = checked_coordinate(row, col, rows, cols)?;
        matrix.insert(row, col, value);
    }

    Ok(matrix)
}

/// Renders a matrix in its text form
///
/// Entries appear in insertion order, one per line, so a matrix built or
/// decoded the same way always encodes to the same text.
pub fn encode<T: Element>(matrix: &SparseMatrix<T>) -> String {
    matrix.to_string()
}

/// Writes the text form of `matrix` to `writer`
pub fn write_to<T: Element, W: Write>(matrix: &SparseMatrix<T>, mut writer: W) -> Result<()> {
    writer.write_all(encode(matrix).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Reads and decodes a matrix file
pub fn load<T: Element, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
    let text = fs::read_to_string(path)?;
    decode(&text)
}

/// Encodes `matrix` into the file at `path`, creating parent directories
pub fn save<T: Element, P: AsRef<Path>>(path: P, matrix: &SparseMatrix<T>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    write_to(matrix, BufWriter::new(file))
}

fn write_text<T: Element>(out: &mut impl fmt::Write, matrix: &SparseMatrix<T>) -> fmt::Result {
    writeln!(out, "rows={}", matrix.rows())?;
    writeln!(out, "cols={}", matrix.cols())?;
    for ((row, col), value) in matrix.iter() {
        writeln!(out, "({}, {}, {})", row, col, value)?;
    }
    Ok(())
}

fn parse_header(line: Option<(usize, &str)>, line_no: usize, key: &str) -> Result<usize> {
    let (line_no, line) =
        line.ok_or_else(|| MatrixError::malformed(line_no, format!("missing `{key}=` header")))?;

    let (found_key, value) = line
        .split_once('=')
        .ok_or_else(|| MatrixError::malformed(line_no, format!("expected `{key}=<integer>`")))?;

    if found_key.trim() != key {
        return Err(MatrixError::malformed(
            line_no,
            format!("expected `{key}=` header, found `{}`", found_key.trim()),
        ));
    }

    let value = value.trim();
    let parsed: i64 = value.parse().map_err(|_| {
        MatrixError::malformed(line_no, format!("`{key}` value `{value}` is not an integer"))
    })?;

    usize::try_from(parsed).map_err(|_| {
        MatrixError::malformed(line_no, format!("`{key}` must be non-negative, got {parsed}"))
    })
}

fn parse_entry<T: Element>(line_no: usize, line: &str) -> Result<(i64, i64, T)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            MatrixError::malformed(line_no, "entry must be enclosed in parentheses")
        })?;

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(MatrixError::malformed(
            line_no,
            format!("expected 3 comma-separated fields, found {}", fields.len()),
        ));
    }

    let row = parse_field::<i64>(line_no, "row", fields[0])?;
    let col = parse_field::<i64>(line_no, "col", fields[1])?;
    let value = parse_field::<T>(line_no, "value", fields[2])?;
    Ok((row, col, value))
}

fn parse_field<V: FromStr>(line_no: usize, name: &str, token: &str) -> Result<V> {
    token.parse().map_err(|_| {
        MatrixError::malformed(line_no, format!("{name} `{token}` is not a valid integer"))
    })
}

fn checked_coordinate(row: i64, col: i64, rows: usize, cols: usize) -> Result<(usize, usize)> {
    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(r), Ok(c)) if r < rows && c < cols => Ok((r, c)),
        _ => Err(MatrixError::OutOfRange {
            row,
            col,
            rows,
            cols,
        }),
    }
}

impl<T: Element> FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl<T: Element> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(f, self)
    }
}
