
//! Auto-growing contiguous sequence.

use crate::alloc::AllocError;
use crate::buffer::{Buffer, DEFAULT_CAPACITY};

use thiserror::Error;

use std::slice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SeqError {
  #[error("{0}")]
  Alloc(#[from] AllocError),
  #[error("Index {index} is out of range for a sequence of length {len}.")]
  IndexOutOfRange {
    index: usize,
    len: usize,
  },
}

/// A contiguous sequence that doubles its capacity whenever an insert
/// finds it full. Elements occupy the slots `[0, len)` in
/// insertion-relevant order.
///
/// Every insert is atomic with respect to allocation failure: either
/// it fully succeeds, or it reports an error and the sequence is
/// byte-for-byte unchanged.
///
/// Equality compares elements only; two sequences with the same
/// contents but different growth histories are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqList<T> {
  buffer: Buffer<T>,
}

impl<T> SeqList<T> {
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }

  /// Creates a sequence with the given initial capacity. Capacities
  /// below two are rounded up to two.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      buffer: Buffer::with_capacity(capacity),
    }
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn capacity(&self) -> usize {
    self.buffer.capacity()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn is_full(&self) -> bool {
    self.buffer.is_full()
  }

  /// Inserts at the front, shifting every existing element one slot
  /// to the right.
  pub fn insert_front(&mut self, element: T) -> Result<(), SeqError> {
    self.buffer.reserve_one()?;
    self.buffer.insert(0, element);
    Ok(())
  }

  /// Appends at the back.
  pub fn insert_back(&mut self, element: T) -> Result<(), SeqError> {
    self.buffer.reserve_one()?;
    self.buffer.push(element);
    Ok(())
  }

  /// Inserts at `index`, shifting the suffix right. `index` may be
  /// anywhere in `[0, len]` inclusive; inserting at `len` appends.
  /// Any other index reports [`SeqError::IndexOutOfRange`] without
  /// touching the sequence.
  pub fn insert_at(&mut self, index: usize, element: T) -> Result<(), SeqError> {
    if index > self.len() {
      return Err(SeqError::IndexOutOfRange { index, len: self.len() });
    }
    self.buffer.reserve_one()?;
    self.buffer.insert(index, element);
    Ok(())
  }

  pub fn get(&self, index: usize) -> Option<&T> {
    self.buffer.as_slice().get(index)
  }

  /// The smallest element under `T`'s ordering, found by linear
  /// scan, or `None` if the sequence is empty.
  pub fn smallest(&self) -> Option<&T>
  where T: Ord {
    self.iter().min()
  }

  /// Iterates in storage order, front to back.
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.buffer.as_slice().iter()
  }

  pub fn as_slice(&self) -> &[T] {
    self.buffer.as_slice()
  }
}

impl<T> Default for SeqList<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, T> IntoIterator for &'a SeqList<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
