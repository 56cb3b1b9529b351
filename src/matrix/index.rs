//! Row grouping of a matrix's entries
//!
//! Multiplication walks row `j` of the right operand for every nonzero
//! `A[i, j]`. Grouping the right operand's entries by row once up front
//! makes that walk proportional to the row's nonzeros instead of its width.

use std::collections::HashMap;

use crate::matrix::{Element, SparseMatrix};

/// Entries of a matrix grouped by row, each row as `(col, value)` pairs
#[derive(Debug, Clone)]
pub struct RowIndex<T> {
    rows: HashMap<usize, Vec<(usize, T)>>,
}

impl<T: Element> RowIndex<T> {
    /// Groups the entries of `matrix` by row
    ///
    /// Columns within a row are sorted so that iteration is deterministic.
    pub fn build(matrix: &SparseMatrix<T>) -> Self {
        let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for ((row, col), value) in matrix.iter() {
            rows.entry(row).or_default().push((col, value));
        }
        for row in rows.values_mut() {
            row.sort_unstable_by_key(|&(col, _)| col);
        }
        Self { rows }
    }

    /// Nonzero `(col, value)` pairs of `row`; empty when the row has none
    pub fn row(&self, row: usize) -> &[(usize, T)] {
        self.rows.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Row numbers that hold at least one entry, ascending
    pub fn nonempty_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.rows.keys().copied().collect();
        rows.sort_unstable();
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_grouping() {
        let matrix = SparseMatrix::from_triplets(
            3,
            3,
            vec![(0, 2, 5), (2, 0, 4), (0, 0, 1), (0, 1, 2)],
        )
        .unwrap();

        let index = RowIndex::build(&matrix);

        assert_eq!(index.row(0), &[(0, 1), (1, 2), (2, 5)]);
        assert!(index.row(1).is_empty());
        assert_eq!(index.row(2), &[(0, 4)]);
        assert_eq!(index.nonempty_rows(), vec![0, 2]);
    }

    #[test]
    fn test_row_past_end_is_empty() {
        let matrix = SparseMatrix::<i64>::new(2, 2);
        let index = RowIndex::build(&matrix);

        assert!(index.row(10).is_empty());
        assert!(index.nonempty_rows().is_empty());
    }
}
