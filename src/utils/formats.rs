//! Utilities for converting between our matrix format and external libraries

use ndarray::Array2;
use sprs::{CsMat, TriMat};

use crate::matrix::{Element, SparseMatrix};

/// Converts our matrix to a sprs CsMat in CSR format
pub fn to_sprs_csr<T: Element>(matrix: &SparseMatrix<T>) -> CsMat<T> {
    let mut triplets = TriMat::with_capacity(matrix.shape(), matrix.nnz());
    for (row, col, value) in matrix.sorted_entries() {
        triplets.add_triplet(row, col, value);
    }
    triplets.to_csr()
}

/// Converts a sprs CsMat (CSR or CSC) to our matrix
///
/// Explicitly stored zeros in the sprs matrix are dropped.
pub fn from_sprs<T: Element>(matrix: &CsMat<T>) -> SparseMatrix<T> {
    let mut result = SparseMatrix::new(matrix.rows(), matrix.cols());
    for (&value, (row, col)) in matrix.iter() {
        result.insert(row, col, value);
    }
    result
}

/// Expands our matrix into a dense ndarray
pub fn to_dense<T: Element>(matrix: &SparseMatrix<T>) -> Array2<T> {
    let mut dense = Array2::zeros(matrix.shape());
    for ((row, col), value) in matrix.iter() {
        dense[[row, col]] = value;
    }
    dense
}

/// Collects the nonzero cells of a dense ndarray into our matrix
pub fn from_dense<T: Element>(dense: &Array2<T>) -> SparseMatrix<T> {
    let (rows, cols) = dense.dim();
    let mut result = SparseMatrix::new(rows, cols);
    for ((row, col), &value) in dense.indexed_iter() {
        result.insert(row, col, value);
    }
    result
}
