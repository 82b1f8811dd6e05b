
//! Contiguous storage with an explicit capacity and a doubling growth
//! policy, shared by [`SeqList`](crate::seq::SeqList) and
//! [`Stack`](crate::stack::Stack). The two containers share this
//! algorithm but never share storage.

use crate::alloc::{self, AllocError};

/// Capacities below this are rounded up at construction time.
pub(crate) const MIN_CAPACITY: usize = 2;

/// Capacity used when the caller does not supply one.
pub(crate) const DEFAULT_CAPACITY: usize = 5;

/// A growable buffer whose capacity is tracked explicitly, rather
/// than delegated to [`Vec`]. Growth happens exactly when an insert
/// finds `len() == capacity()`, and it always doubles. Growth is
/// fallible: on failure the buffer is left untouched, contents and
/// capacity included.
#[derive(Debug, Clone)]
pub(crate) struct Buffer<T> {
  items: Vec<T>,
  capacity: usize,
}

/// Equality compares elements only. Capacity is a growth-history
/// artifact, not part of a buffer's value.
impl<T: PartialEq> PartialEq for Buffer<T> {
  fn eq(&self, other: &Self) -> bool {
    self.items == other.items
  }
}

impl<T: Eq> Eq for Buffer<T> {}

impl<T> Buffer<T> {
  pub(crate) fn with_capacity(capacity: usize) -> Self {
    let capacity = capacity.max(MIN_CAPACITY);
    Self {
      items: Vec::with_capacity(capacity),
      capacity,
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn capacity(&self) -> usize {
    self.capacity
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn is_full(&self) -> bool {
    self.items.len() == self.capacity
  }

  pub(crate) fn as_slice(&self) -> &[T] {
    &self.items
  }

  /// Doubles the capacity. The new storage is fully reserved before
  /// any element moves, so a failure leaves the old buffer valid and
  /// complete.
  fn grow(&mut self) -> Result<(), AllocError> {
    let new_capacity = self.capacity * 2;
    alloc::charge()?;
    let mut new_items = Vec::new();
    new_items.try_reserve_exact(new_capacity).map_err(|_| AllocError)?;
    new_items.append(&mut self.items);
    self.items = new_items;
    self.capacity = new_capacity;
    Ok(())
  }

  /// Makes room for exactly one more element, growing if the buffer
  /// is at capacity. On failure nothing has changed.
  pub(crate) fn reserve_one(&mut self) -> Result<(), AllocError> {
    if self.is_full() {
      self.grow()?;
    }
    Ok(())
  }

  /// Appends an element. Caller must have called
  /// [`Buffer::reserve_one`] first; the write itself cannot fail.
  pub(crate) fn push(&mut self, element: T) {
    debug_assert!(self.items.len() < self.capacity);
    self.items.push(element);
  }

  /// Inserts at `index`, shifting the suffix one slot right. Caller
  /// guarantees `index <= len()` and a prior [`Buffer::reserve_one`].
  pub(crate) fn insert(&mut self, index: usize, element: T) {
    debug_assert!(self.items.len() < self.capacity);
    self.items.insert(index, element);
  }

  pub(crate) fn pop(&mut self) -> Option<T> {
    self.items.pop()
  }

  pub(crate) fn drain_all(&mut self) -> Vec<T> {
    self.items.drain(..).collect()
  }

  pub(crate) fn split_off(&mut self, at: usize) -> Vec<T> {
    self.items.split_off(at)
  }
}

impl<T> Default for Buffer<T> {
  fn default() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_minimum_capacity() {
    let buffer = Buffer::<i32>::with_capacity(0);
    assert_eq!(buffer.capacity(), MIN_CAPACITY);
    let buffer = Buffer::<i32>::with_capacity(1);
    assert_eq!(buffer.capacity(), MIN_CAPACITY);
    let buffer = Buffer::<i32>::with_capacity(7);
    assert_eq!(buffer.capacity(), 7);
  }

  #[test]
  fn test_growth_doubles_exactly_at_capacity() {
    let mut buffer = Buffer::with_capacity(2);
    let mut expected_capacity = 2;
    for i in 0..40 {
      if buffer.len() == buffer.capacity() {
        expected_capacity *= 2;
      }
      buffer.reserve_one().unwrap();
      buffer.push(i);
      assert_eq!(buffer.capacity(), expected_capacity);
    }
    assert_eq!(buffer.as_slice(), (0..40).collect::<Vec<_>>().as_slice());
  }

  #[test]
  fn test_eq_ignores_capacity() {
    let mut grown = Buffer::with_capacity(2);
    for i in 0..3 {
      grown.reserve_one().unwrap();
      grown.push(i);
    }
    let mut roomy = Buffer::with_capacity(16);
    for i in 0..3 {
      roomy.reserve_one().unwrap();
      roomy.push(i);
    }
    assert_ne!(grown.capacity(), roomy.capacity());
    assert_eq!(grown, roomy);
  }

  #[test]
  fn test_failed_growth_leaves_buffer_unchanged() {
    let mut buffer = Buffer::with_capacity(2);
    buffer.reserve_one().unwrap();
    buffer.push('a');
    buffer.reserve_one().unwrap();
    buffer.push('b');

    crate::alloc::exhaust();
    assert_eq!(buffer.reserve_one(), Err(AllocError));
    crate::alloc::reset();

    assert_eq!(buffer.as_slice(), &['a', 'b']);
    assert_eq!(buffer.capacity(), 2);
    assert_eq!(buffer.len(), 2);
  }
}
