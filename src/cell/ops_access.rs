use super::int_cell::IntCell;

impl IntCell {
    /// Returns the stored value.
    #[inline(always)]
    pub const fn read(&self) -> i32 {
        self.stored_value
    }

    /// Overwrites the stored value with `x`.
    #[inline]
    pub fn write(&mut self, x: i32) {
        #[cfg(feature = "tracing")]
        tracing::trace!(previous = self.stored_value, value = x, "int cell write");

        self.stored_value = x;
    }
}
