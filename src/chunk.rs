//! Splitting reconciled entries into size-bounded upload batches.

use crate::{Result, RestockError};

/// Splits `items` into consecutive, order-preserving slices of at most
/// `size` elements; every chunk is full except possibly the last.
///
/// The iterator borrows `items` and carries no state of its own, so
/// chunking the same slice twice reproduces identical chunks.
///
/// # Errors
///
/// Returns [`RestockError::Config`] if `size` is zero.
pub fn chunk<T>(items: &[T], size: usize) -> Result<impl Iterator<Item = &[T]>> {
    if size == 0 {
        return Err(RestockError::Config(
            "chunk size must be greater than zero".to_string(),
        ));
    }
    Ok(items.chunks(size))
}
