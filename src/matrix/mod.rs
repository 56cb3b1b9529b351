// Matrix data structures and operations

pub mod arithmetic;
pub mod element;
pub mod index;
pub mod ops;
pub mod sparse;

pub use element::Element;
pub use index::RowIndex;
pub use ops::{Operation, UnknownOperation};
pub use sparse::SparseMatrix;
