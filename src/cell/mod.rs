//! Integer cell - a single owned value with read/write access.
//!
//! Split the same way as the rest of the cell family:
//! - `int_cell` holds the type, its construction and trait impls.
//! - `ops_access` holds the accessor and mutator.

pub mod int_cell;

mod ops_access;

pub use int_cell::IntCell;
