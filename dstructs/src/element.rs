use alloc::boxed::Box;
use core::fmt;
use core::ops::Deref;

/// A single element reference held by a container.
///
/// The variant decides who releases the pointee:
/// - `Owned`: the container releases it on `clear`, on drop, or hands it back
///   through `remove`/`set`/`clear_with`.
/// - `Borrowed`: the caller keeps the memory; the container only drops the
///   reference.
///
/// In both cases the container stores the reference itself, never a copy of
/// the value, so a reference read with `get` stays identical (`ptr_eq`) to the
/// one returned later by `remove`.
pub enum Elem<'a, T> {
    Owned(Box<T>),
    Borrowed(&'a T),
}

impl<'a, T> Elem<'a, T> {
    /// Boxes `value` and hands ownership to the container.
    #[must_use]
    pub fn owned(value: T) -> Self {
        Elem::Owned(Box::new(value))
    }

    #[must_use]
    pub fn borrowed(value: &'a T) -> Self {
        Elem::Borrowed(value)
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self, Elem::Owned(_))
    }

    /// Address of the referenced element.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        let value: &T = self;
        value
    }

    /// Returns true if both elements refer to the same memory.
    #[must_use]
    pub fn ptr_eq(&self, other: &T) -> bool {
        core::ptr::eq(self.as_ptr(), other)
    }

    /// Recovers the box of an owned element, `None` for a borrowed one.
    #[must_use]
    pub fn into_box(self) -> Option<Box<T>> {
        match self {
            Elem::Owned(boxed) => Some(boxed),
            Elem::Borrowed(_) => None,
        }
    }
}

impl<T> Deref for Elem<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Elem::Owned(boxed) => boxed,
            Elem::Borrowed(value) => value,
        }
    }
}

impl<T> From<Box<T>> for Elem<'_, T> {
    fn from(boxed: Box<T>) -> Self {
        Elem::Owned(boxed)
    }
}

impl<'a, T> From<&'a T> for Elem<'a, T> {
    fn from(value: &'a T) -> Self {
        Elem::Borrowed(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Elem<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elem::Owned(boxed) => f.debug_tuple("Owned").field(boxed).finish(),
            Elem::Borrowed(value) => f.debug_tuple("Borrowed").field(value).finish(),
        }
    }
}

/// Size in bytes of one element of type `T`.
#[must_use]
pub const fn element_size<T>() -> usize {
    core::mem::size_of::<T>()
}
