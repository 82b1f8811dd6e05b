
use super::error::StackError;
use crate::alloc::AllocError;
use crate::buffer::{Buffer, DEFAULT_CAPACITY};

use std::slice;

/// LIFO stack whose storage is a growable buffer with the same
/// doubling policy as [`SeqList`](crate::seq::SeqList): capacity
/// doubles exactly when a push finds `len() == capacity()`, and a
/// failed resize leaves the stack untouched. The logical top is at
/// index `len() - 1`.
///
/// Equality compares elements only; two stacks with the same contents
/// but different growth histories are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
  buffer: Buffer<T>,
}

impl<T> Stack<T> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      buffer: Buffer::with_capacity(capacity),
    }
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  /// Pushes a single element onto the top of the stack, growing the
  /// buffer if necessary. On allocation failure the stack is
  /// unchanged and the element is dropped.
  pub fn push(&mut self, element: T) -> Result<(), AllocError> {
    self.buffer.reserve_one()?;
    self.buffer.push(element);
    Ok(())
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.buffer.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Borrows the top element without popping it.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.buffer.as_slice().last()
      .ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops `count` elements off the stack and returns those elements,
  /// with the former top of the stack at the end of the vector. In
  /// case of a [`StackError`], `self` will NOT be modified.
  pub fn pop_several(&mut self, count: usize) -> Result<Vec<T>, StackError> {
    self.check_size(count)?;
    Ok(self.buffer.split_off(self.len() - count))
  }

  /// Pops every element, bottom first in the returned vector.
  pub fn pop_all(&mut self) -> Vec<T> {
    self.buffer.drain_all()
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

  /// Iterates from the bottom of the stack.
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.buffer.as_slice().iter()
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }
}
