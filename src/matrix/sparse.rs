//! Coordinate-map sparse matrix
//!
//! Only nonzero entries are stored, keyed by `(row, col)`. Every mutation
//! goes through [`SparseMatrix::set`], which removes the key when asked to
//! store zero, so the map never holds a zero value.

use indexmap::IndexMap;
use std::fmt;

use crate::error::{MatrixError, Result, Shape};
use crate::matrix::Element;

/// A sparse matrix storing nonzero entries in a `(row, col) -> value` map
///
/// Dimensions are fixed at construction. Arithmetic never mutates its
/// operands; each operation returns a freshly owned matrix.
#[derive(Clone, PartialEq)]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,
    entries: IndexMap<(usize, usize), T>,
}

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty `rows × cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: IndexMap::new(),
        }
    }

    /// Creates an `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            matrix.insert(i, i, T::one());
        }
        matrix
    }

    /// Builds a matrix from `(row, col, value)` triplets
    ///
    /// Triplets are applied in order through [`set`](Self::set), so a later
    /// triplet overwrites an earlier one at the same coordinate and zero
    /// values leave no entry behind.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if any coordinate is outside
    /// `rows × cols`.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`
    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Number of stored (nonzero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value at `(row, col)`, or zero when nothing is stored
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if the coordinate is outside the
    /// matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Stores `value` at `(row, col)`; storing zero removes the entry
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if the coordinate is outside the
    /// matrix. The matrix is left unchanged in that case.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        self.insert(row, col, value);
        Ok(())
    }

    /// Iterates over stored entries as `((row, col), value)`
    ///
    /// Entries come out in insertion order, not row-major. Overwriting an
    /// entry keeps its position; removing one leaves the others in order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        self.entries.iter().map(|(&key, &value)| (key, value))
    }

    /// Returns the stored entries as `(row, col, value)` in row-major order
    pub fn sorted_entries(&self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
            .collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }

    /// Returns true if `(row, col)` holds a stored entry
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    pub(crate) fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(MatrixError::OutOfRange {
                row: i64::try_from(row).unwrap_or(i64::MAX),
                col: i64::try_from(col).unwrap_or(i64::MAX),
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Sparse read without bounds checking
    pub(crate) fn value_at(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    /// The single write path; keeps zeros out of the map
    pub(crate) fn insert(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.shift_remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }
}

impl<T: Element> Default for SparseMatrix<T> {
    /// An empty 0×0 matrix
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.rows, self.cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let entries = self.sorted_entries();
        let max_rows_to_print = 5;
        let max_elements = 5;

        if !entries.is_empty() {
            writeln!(f, "  content sample:")?;

            let mut printed_rows = 0;
            let mut rest = entries.as_slice();
            while let Some(&(row, _, _)) = rest.first() {
                let row_len = rest.iter().take_while(|&&(r, _, _)| r == row).count();
                let (row_entries, tail) = rest.split_at(row_len);
                rest = tail;

                if printed_rows == max_rows_to_print {
                    let remaining_rows = 1 + count_rows(rest);
                    writeln!(f, "    ... ({} more rows)", remaining_rows)?;
                    break;
                }

                write!(f, "    row {}: ", row)?;
                for &(_, col, value) in row_entries.iter().take(max_elements) {
                    write!(f, "({}, {:?}) ", col, value)?;
                }
                if row_entries.len() > max_elements {
                    write!(f, "... ({} more)", row_entries.len() - max_elements)?;
                }
                writeln!(f)?;
                printed_rows += 1;
            }
        }

        write!(f, "}}")
    }
}

/// Counts distinct rows in a row-major sorted entry slice
fn count_rows<T>(entries: &[(usize, usize, T)]) -> usize {
    let mut count = 0;
    let mut last = None;
    for &(row, _, _) in entries {
        if last != Some(row) {
            count += 1;
            last = Some(row);
        }
    }
    count
}
