//! Support for the interactive command-line front end
//!
//! A session reads two matrix files from an input directory, applies one
//! [`Operation`] and writes the result into an output directory. The
//! binary handles prompting; everything that touches files lives here so
//! it can be exercised without a terminal.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec;
use crate::error::{MatrixError, Shape};
use crate::matrix::{Operation, SparseMatrix, UnknownOperation};

/// Errors surfaced to the user by a session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Decoding, arithmetic or file I/O on a matrix failed
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// The operation menu choice was not recognised
    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),

    /// The input directory could not be listed
    #[error("Cannot list {}: {source}", .dir.display())]
    ListDir {
        /// Directory that was being listed
        dir: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Fewer than two matrix files are available
    #[error("There must be at least two matrix files in {}, found {found}", .dir.display())]
    NotEnoughFiles {
        /// Directory that was searched
        dir: PathBuf,
        /// Number of matrix files found
        found: usize,
    },

    /// A file index was not a number or not in the listing
    #[error("Invalid file index '{input}': expected a number from 0 to {}", .available.saturating_sub(1))]
    InvalidFileIndex {
        /// What the user typed
        input: String,
        /// Number of files listed
        available: usize,
    },

    /// The output file name was empty
    #[error("Output file name must not be empty")]
    EmptyOutputName,

    /// Reading from or writing to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory searched for `.txt` matrix files
    pub input_dir: PathBuf,

    /// Directory the result file is written into (created if missing)
    pub output_dir: PathBuf,
}

impl SessionConfig {
    /// Environment variable overriding the default input directory
    pub const INPUT_DIR_ENV: &'static str = "SPARSE_MATRIX_INPUT_DIR";

    /// Environment variable overriding the default output directory
    pub const OUTPUT_DIR_ENV: &'static str = "SPARSE_MATRIX_OUTPUT_DIR";

    /// Input directory used when nothing else is configured
    pub const DEFAULT_INPUT_DIR: &'static str = "sample_inputs";

    /// Output directory used when nothing else is configured
    pub const DEFAULT_OUTPUT_DIR: &'static str = "sample_results";

    /// Builds a config from positional arguments `[input_dir] [output_dir]`
    ///
    /// Missing arguments fall back to [`SessionConfig::default`].
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(input_dir) = args.next() {
            config.input_dir = PathBuf::from(input_dir);
        }
        if let Some(output_dir) = args.next() {
            config.output_dir = PathBuf::from(output_dir);
        }
        config
    }

    /// Path of the result file for `name`
    pub fn output_path(&self, name: &str) -> Result<PathBuf, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyOutputName);
        }
        Ok(self.output_dir.join(name))
    }

    /// Loads both operands, applies the operation and saves the result
    ///
    /// Progress lines (operand dimensions) are written to `progress` as
    /// soon as each operand is loaded, so they appear even when the
    /// operation itself is rejected.
    pub fn execute<W: Write>(
        &self,
        request: &Request,
        progress: &mut W,
    ) -> Result<Outcome, SessionError> {
        let output_path = self.output_path(&request.output_name)?;

        let first: SparseMatrix = codec::load(&request.first)?;
        writeln!(progress, "First matrix dimensions: {}", format_shape(first.shape()))?;

        let second: SparseMatrix = codec::load(&request.second)?;
        writeln!(progress, "Second matrix dimensions: {}", format_shape(second.shape()))?;

        let result = request.operation.apply(&first, &second)?;
        codec::save(&output_path, &result)?;

        Ok(Outcome {
            first_shape: first.shape(),
            second_shape: second.shape(),
            result_shape: result.shape(),
            result_nnz: result.nnz(),
            output_path,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        let from_env = |key: &str, fallback: &str| {
            std::env::var_os(key)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(fallback))
        };

        Self {
            input_dir: from_env(Self::INPUT_DIR_ENV, Self::DEFAULT_INPUT_DIR),
            output_dir: from_env(Self::OUTPUT_DIR_ENV, Self::DEFAULT_OUTPUT_DIR),
        }
    }
}

/// One operation requested by the user
#[derive(Debug, Clone)]
pub struct Request {
    /// Operation applied to the two operands
    pub operation: Operation,
    /// Path of the left operand
    pub first: PathBuf,
    /// Path of the right operand
    pub second: PathBuf,
    /// File name of the result inside the output directory
    pub output_name: String,
}

/// Summary of a completed session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Shape of the left operand
    pub first_shape: Shape,
    /// Shape of the right operand
    pub second_shape: Shape,
    /// Shape of the result
    pub result_shape: Shape,
    /// Number of nonzero entries in the result
    pub result_nnz: usize,
    /// Where the result was written
    pub output_path: PathBuf,
}

/// Lists the `.txt` files in `dir`, sorted by file name
///
/// # Errors
///
/// Fails if the directory cannot be read or holds fewer than two files.
pub fn list_matrix_files(dir: &Path) -> Result<Vec<PathBuf>, SessionError> {
    let list_err = |source| SessionError::ListDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        let is_txt = path.extension().map_or(false, |ext| ext == "txt");
        if is_txt && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.len() < 2 {
        return Err(SessionError::NotEnoughFiles {
            dir: dir.to_path_buf(),
            found: files.len(),
        });
    }
    Ok(files)
}

/// Picks the file at the index the user typed
pub fn select_file<'a>(files: &'a [PathBuf], input: &str) -> Result<&'a Path, SessionError> {
    let invalid = || SessionError::InvalidFileIndex {
        input: input.trim().to_string(),
        available: files.len(),
    };

    let index: usize = input.trim().parse().map_err(|_| invalid())?;
    files.get(index).map(PathBuf::as_path).ok_or_else(invalid)
}

fn format_shape((rows, cols): Shape) -> String {
    format!("{}x{}", rows, cols)
}
