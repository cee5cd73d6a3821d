use core::fmt;

use thiserror::Error;

use crate::element::Elem;

/// Error types for container operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DstructsError {
    /// Index is outside the range accepted by the operation
    #[error("Index out of bounds: index {index} is beyond container length {length}")]
    IndexOutOfBounds {
        /// Index that was requested
        index: usize,
        /// Current length of the container
        length: usize,
    },
    /// Storage could not be grown; the container is unchanged
    #[error("Allocation failed: could not reserve room for {requested} elements")]
    AllocationFailed {
        /// Number of slots that were requested
        requested: usize,
    },
    /// Invalid parameter passed to a constructor
    #[error("Invalid configuration: {parameter} cannot be {value}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}

/// A rejected insertion.
///
/// Carries the reason together with the element reference that was not
/// stored, so an owned element goes back to the caller instead of being
/// released.
#[derive(Error)]
#[error("{error}")]
pub struct InsertError<'a, T> {
    error: DstructsError,
    elem: Elem<'a, T>,
}

impl<'a, T> InsertError<'a, T> {
    pub(crate) fn new(error: DstructsError, elem: Elem<'a, T>) -> Self {
        Self { error, elem }
    }

    #[must_use]
    pub fn error(&self) -> &DstructsError {
        &self.error
    }

    /// The element reference that was not inserted.
    #[must_use]
    pub fn elem(&self) -> &Elem<'a, T> {
        &self.elem
    }

    /// Hands the element reference back, discarding the reason.
    #[must_use]
    pub fn into_elem(self) -> Elem<'a, T> {
        self.elem
    }

    /// Discards the element reference, keeping the reason.
    #[must_use]
    pub fn into_error(self) -> DstructsError {
        self.error
    }

    #[must_use]
    pub fn into_parts(self) -> (DstructsError, Elem<'a, T>) {
        (self.error, self.elem)
    }
}

// The element is left out so errors stay printable for any `T`.
impl<T> fmt::Debug for InsertError<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> From<InsertError<'_, T>> for DstructsError {
    fn from(rejected: InsertError<'_, T>) -> Self {
        rejected.error
    }
}
