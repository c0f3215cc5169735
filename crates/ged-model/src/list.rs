//! # List Slots
//!
//! A list-valued field can be absent. Code that inspects such a field needs
//! two distinct operations: look without creating anything, and create the
//! list if it is missing. [`ListSlot`] names both so that a caller can hand
//! the capability to a generic routine instead of the field itself.

/// Peek / get-or-create access to a zero-or-more field.
pub trait ListSlot<T> {
    /// The list, if present. Never materializes.
    fn peek(&self) -> Option<&Vec<T>>;

    /// Mutable view of the list, if present. Never materializes.
    fn peek_mut(&mut self) -> Option<&mut Vec<T>>;

    /// The list, materializing an empty one when absent.
    fn get_or_create(&mut self) -> &mut Vec<T>;

    /// Whether the list is absent.
    fn is_absent(&self) -> bool {
        self.peek().is_none()
    }
}

impl<T> ListSlot<T> for Option<Vec<T>> {
    fn peek(&self) -> Option<&Vec<T>> {
        self.as_ref()
    }

    fn peek_mut(&mut self) -> Option<&mut Vec<T>> {
        self.as_mut()
    }

    fn get_or_create(&mut self) -> &mut Vec<T> {
        self.get_or_insert_with(Vec::new)
    }
}
