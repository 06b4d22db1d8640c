//! `IntCell` - an exclusively owned holder for a single `i32`.
//!
//! Construction and trait impls live here. Read and write live in
//! `ops_access`.

use serde::{Deserialize, Serialize};

/// A cell holding exactly one integer.
///
/// There is deliberately no `Default` impl: every cell is built from a
/// caller-supplied initial value.
///
/// # Examples
///
/// ```
/// use intcell::IntCell;
///
/// let mut cell = IntCell::new(5);
/// assert_eq!(cell.read(), 5);
///
/// cell.write(42);
/// assert_eq!(cell.read(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntCell {
    pub(super) stored_value: i32,
}

impl IntCell {
    /// Creates a new `IntCell` holding `initial_value`.
    #[inline]
    pub const fn new(initial_value: i32) -> Self {
        Self {
            stored_value: initial_value,
        }
    }
}

impl From<i32> for IntCell {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<IntCell> for i32 {
    fn from(cell: IntCell) -> Self {
        cell.stored_value
    }
}
