//! # sparse-matrix: coordinate-map sparse integer matrices
//!
//! A sparse matrix stores only its nonzero entries, keyed by `(row, col)`.
//! This crate provides that structure together with a plain text encoding
//! and the three binary operations needed to combine matrices.
//!
//! ## Overview
//!
//! - [`SparseMatrix`] holds fixed dimensions and a `(row, col) -> value` map.
//!   The single write path ([`SparseMatrix::set`]) removes a key when asked to
//!   store zero, so zeros are never materialised.
//! - [`codec`] reads and writes the `rows=` / `cols=` / `(r, c, v)` text form.
//! - [`SparseMatrix::add`], [`SparseMatrix::subtract`] and
//!   [`SparseMatrix::multiply`] borrow both operands and return a new matrix.
//!   Shape mismatches are rejected before any work is done.
//! - [`utils`] converts to and from `sprs` CSR matrices and dense `ndarray`s.
//! - [`session`] backs the interactive binary.
//!
//! ## Usage
//!
//! ```
//! use sparse_matrix::{codec, SparseMatrix};
//!
//! let a: SparseMatrix = codec::decode("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
//! let b: SparseMatrix = codec::decode("rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n").unwrap();
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.sorted_entries(), vec![(0, 0, 3), (0, 1, 4)]);
//!
//! let text = codec::encode(&product);
//! assert!(text.starts_with("rows=2\ncols=2\n"));
//! ```

pub mod codec;
pub mod error;
pub mod matrix;
pub mod session;
pub mod utils;

// Re-export primary components
pub use error::{MatrixError, Result, Shape};
pub use matrix::{Element, Operation, RowIndex, SparseMatrix};
pub use utils::{from_dense, from_sprs, to_dense, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
