//! Addition, subtraction, multiplication and transposition
//!
//! All operations borrow their operands and return a new matrix. Shape
//! checks run before any work is done, so a mismatch never yields a
//! partial result.
//!
//! Addition and subtraction walk the union of both operands' keys and
//! combine `A[c]` with `B[c]` for every coordinate `c`. A key present only
//! in B therefore contributes `0 - B[c]` under subtraction, never `B[c]`.

use std::collections::HashMap;

use crate::error::{MatrixError, Result};
use crate::matrix::index::RowIndex;
use crate::matrix::ops::Operation;
use crate::matrix::{Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Returns `self + other`
    ///
    /// # Errors
    ///
    /// * [`MatrixError::DimensionMismatch`] if the shapes differ
    /// * [`MatrixError::Overflow`] if an entry does not fit `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_matrix::SparseMatrix;
    ///
    /// let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 2)]).unwrap();
    /// let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 3), (0, 1, 4)]).unwrap();
    ///
    /// let c = a.add(&b).unwrap();
    /// assert_eq!(c.sorted_entries(), vec![(0, 0, 4), (0, 1, 4), (1, 1, 2)]);
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(Operation::Add, other)?;
        self.elementwise(other, T::checked_add)
    }

    /// Returns `self - other`
    ///
    /// # Errors
    ///
    /// * [`MatrixError::DimensionMismatch`] if the shapes differ
    /// * [`MatrixError::Overflow`] if an entry does not fit `T`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(Operation::Subtract, other)?;
        self.elementwise(other, T::checked_sub)
    }

    /// Returns the matrix product `self × other`
    ///
    /// The result is `self.rows() × other.cols()`. Each nonzero `A[i, j]`
    /// is multiplied against the nonzeros of row `j` of `other` only, so
    /// the cost is `O(nnz(A) · avg_row_nnz(B))`. Sums that cancel to zero
    /// are not stored. Result entries are inserted row by row, in ascending
    /// column order within each row.
    ///
    /// Each result entry is summed in ascending order of the shared index
    /// `j`, and every partial sum is checked. An intermediate sum that
    /// leaves the range of `T` is reported even when later terms would have
    /// brought the final value back into range.
    ///
    /// # Errors
    ///
    /// * [`MatrixError::DimensionMismatch`] if `self.cols() != other.rows()`
    /// * [`MatrixError::Overflow`] if a product or partial sum does not fit `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_matrix::SparseMatrix;
    ///
    /// let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 2)]).unwrap();
    /// let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 3), (0, 1, 4)]).unwrap();
    ///
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.sorted_entries(), vec![(0, 0, 3), (0, 1, 4)]);
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(self.mismatch(Operation::Multiply, other));
        }

        let left = RowIndex::build(self);
        let right = RowIndex::build(other);
        let mut result = Self::new(self.rows(), other.cols());

        for i in left.nonempty_rows() {
            // Accumulate row i of the product before storing it
            let mut accum: HashMap<usize, T> = HashMap::new();

            for &(j, a_val) in left.row(i) {
                for &(k, b_val) in right.row(j) {
                    let product = a_val
                        .checked_mul(&b_val)
                        .ok_or(MatrixError::Overflow { row: i, col: k })?;
                    let slot = accum.entry(k).or_insert_with(T::zero);
                    *slot = slot
                        .checked_add(&product)
                        .ok_or(MatrixError::Overflow { row: i, col: k })?;
                }
            }

            let mut row: Vec<_> = accum.into_iter().collect();
            row.sort_unstable_by_key(|&(k, _)| k);
            for (k, value) in row {
                result.insert(i, k, value);
            }
        }

        Ok(result)
    }

    /// Returns the transpose, a `cols × rows` matrix
    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.cols(), self.rows());
        for ((row, col), value) in self.iter() {
            result.insert(col, row, value);
        }
        result
    }

    fn check_same_shape(&self, operation: Operation, other: &Self) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(self.mismatch(operation, other))
        }
    }

    fn mismatch(&self, operation: Operation, other: &Self) -> MatrixError {
        MatrixError::DimensionMismatch {
            operation,
            left: self.shape(),
            right: other.shape(),
        }
    }

    /// Combines `self[c]` and `other[c]` over the union of their keys
    fn elementwise<F>(&self, other: &Self, combine: F) -> Result<Self>
    where
        F: Fn(&T, &T) -> Option<T>,
    {
        let mut result = Self::new(self.rows(), self.cols());

        let union = self
            .iter()
            .map(|(key, _)| key)
            .chain(other.iter().map(|(key, _)| key).filter(|&(r, c)| !self.contains(r, c)));

        for (row, col) in union {
            let value = combine(&self.value_at(row, col), &other.value_at(row, col))
                .ok_or(MatrixError::Overflow { row, col })?;
            result.insert(row, col, value);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: usize, cols: usize, entries: &[(usize, usize, i64)]) -> SparseMatrix<i64> {
        SparseMatrix::from_triplets(rows, cols, entries.iter().copied()).unwrap()
    }

    #[test]
    fn test_add_union_of_keys() {
        let a = matrix(2, 3, &[(0, 0, 1), (1, 2, 5)]);
        let b = matrix(2, 3, &[(0, 0, 2), (0, 1, 7)]);

        let c = a.add(&b).unwrap();

        assert_eq!(c.shape(), (2, 3));
        assert_eq!(c.sorted_entries(), vec![(0, 0, 3), (0, 1, 7), (1, 2, 5)]);
    }

    #[test]
    fn test_add_drops_cancelled_entries() {
        let a = matrix(2, 2, &[(0, 0, 3), (1, 0, 1)]);
        let b = matrix(2, 2, &[(0, 0, -3)]);

        let c = a.add(&b).unwrap();

        assert_eq!(c.sorted_entries(), vec![(1, 0, 1)]);
    }

    #[test]
    fn test_subtract_negates_keys_only_in_right() {
        let a = matrix(2, 2, &[(0, 0, 5)]);
        let b = matrix(2, 2, &[(0, 0, 2), (1, 1, 9)]);

        let c = a.subtract(&b).unwrap();

        assert_eq!(c.sorted_entries(), vec![(0, 0, 3), (1, 1, -9)]);
    }

    #[test]
    fn test_subtract_self_is_empty() {
        let a = matrix(3, 3, &[(0, 1, 4), (2, 2, -6)]);

        let c = a.subtract(&a).unwrap();

        assert_eq!(c.shape(), (3, 3));
        assert!(c.is_empty());
    }

    #[test]
    fn test_shape_mismatch_reported_before_work() {
        let a = matrix(2, 2, &[(0, 0, 1)]);
        let b = matrix(2, 3, &[(0, 0, 1)]);

        for result in [a.add(&b), a.subtract(&b)] {
            match result {
                Err(MatrixError::DimensionMismatch { left, right, .. }) => {
                    assert_eq!(left, (2, 2));
                    assert_eq!(right, (2, 3));
                }
                other => panic!("expected DimensionMismatch, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_multiply_dense_product() {
        // A = [1 2; 0 3]
        // B = [4 5; 6 7]
        // Expected result: C = A*B = [16 19; 18 21]
        let a = matrix(2, 2, &[(0, 0, 1), (0, 1, 2), (1, 1, 3)]);
        let b = matrix(2, 2, &[(0, 0, 4), (0, 1, 5), (1, 0, 6), (1, 1, 7)]);

        let c = a.multiply(&b).unwrap();

        assert_eq!(
            c.sorted_entries(),
            vec![(0, 0, 16), (0, 1, 19), (1, 0, 18), (1, 1, 21)]
        );
    }

    #[test]
    fn test_multiply_rectangular() {
        // 2x3 times 3x1
        let a = matrix(2, 3, &[(0, 0, 1), (0, 2, 2), (1, 1, 3)]);
        let b = matrix(3, 1, &[(0, 0, 4), (2, 0, 5)]);

        let c = a.multiply(&b).unwrap();

        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.sorted_entries(), vec![(0, 0, 14)]);
    }

    #[test]
    fn test_multiply_cancellation_not_stored() {
        // Row 0 of A is [1 1], column 0 of B is [2 -2]
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 2, &[(0, 0, 2), (1, 0, -2), (1, 1, 3)]);

        let c = a.multiply(&b).unwrap();

        assert_eq!(c.sorted_entries(), vec![(0, 1, 3)]);
    }

    #[test]
    fn test_multiply_mismatch() {
        let a = matrix(2, 3, &[]);
        let b = matrix(2, 3, &[]);

        match a.multiply(&b) {
            Err(MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            }) => {
                assert_eq!(operation, Operation::Multiply);
                assert_eq!(left, (2, 3));
                assert_eq!(right, (2, 3));
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_inputs_unchanged() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = matrix(2, 2, &[(0, 0, 3), (0, 1, 4)]);
        let (a_before, b_before) = (a.clone(), b.clone());

        a.add(&b).unwrap();
        a.subtract(&b).unwrap();
        a.multiply(&b).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_overflow_is_reported() {
        let a = SparseMatrix::<i8>::from_triplets(1, 1, vec![(0, 0, 100)]).unwrap();

        assert!(matches!(a.add(&a), Err(MatrixError::Overflow { row: 0, col: 0 })));
        assert!(matches!(a.multiply(&a), Err(MatrixError::Overflow { row: 0, col: 0 })));
    }

    #[test]
    fn test_multiply_checks_partial_sums_in_column_order() {
        // 100 + 100 overflows i8 before -100 would bring the sum back to 100
        let a =
            SparseMatrix::<i8>::from_triplets(1, 3, vec![(0, 2, -100), (0, 0, 100), (0, 1, 100)])
                .unwrap();
        let ones = SparseMatrix::<i8>::from_triplets(3, 1, (0..3).map(|j| (j, 0, 1))).unwrap();

        assert!(matches!(
            a.multiply(&ones),
            Err(MatrixError::Overflow { row: 0, col: 0 })
        ));

        // Same terms with the negative one in column 0: every partial sum fits
        let b =
            SparseMatrix::<i8>::from_triplets(1, 3, vec![(0, 0, -100), (0, 1, 100), (0, 2, 100)])
                .unwrap();
        assert_eq!(b.multiply(&ones).unwrap().sorted_entries(), vec![(0, 0, 100)]);
    }

    #[test]
    fn test_multiply_inserts_rows_in_column_order() {
        let a = matrix(2, 2, &[(1, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 4, &[(0, 3, 1), (0, 0, 2), (1, 2, 3), (1, 1, 4), (0, 1, 5)]);

        let c = a.multiply(&b).unwrap();
        let keys: Vec<_> = c.iter().map(|(key, _)| key).collect();

        assert_eq!(keys, vec![(0, 1), (0, 2), (1, 0), (1, 1), (1, 3)]);
    }

    #[test]
    fn test_transpose() {
        let a = matrix(2, 3, &[(0, 2, 5), (1, 0, -1)]);

        let t = a.transpose();

        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.sorted_entries(), vec![(0, 1, -1), (2, 0, 5)]);
        assert_eq!(t.transpose(), a);
    }
}
