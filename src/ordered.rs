
//! Sorted singly-linked list.

use crate::alloc::{self, AllocError};
use crate::node::{Link, Node};

use itertools::Itertools;

use std::fmt;

/// A singly-linked chain whose values are kept in non-decreasing
/// order under `T`'s ordering. Each node is owned exclusively by its
/// predecessor (or by the list head), so the chain is a simple path
/// with a single writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
  head: Link<T>,
}

impl<T> OrderedList<T> {
  pub fn new() -> Self {
    Self { head: None }
  }

  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Trial-allocation probe: the list is "full" when one more node
  /// could not be allocated. This deliberately conflates capacity
  /// with available memory; see [`alloc::probe`].
  pub fn is_full(&self) -> bool {
    alloc::probe::<Node<T>>()
  }

  /// Number of values in the list, counted by traversal.
  pub fn len(&self) -> usize {
    self.iter().count()
  }

  pub fn front(&self) -> Option<&T> {
    self.head.as_deref().map(Node::data)
  }

  pub fn rear(&self) -> Option<&T> {
    self.iter().last()
  }

  /// Iterates the chain front to rear, which is non-decreasing
  /// order.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { next: self.head.as_deref() }
  }
}

impl<T: Ord> OrderedList<T> {
  /// Inserts `value` at its sorted position: immediately before the
  /// first node whose data is `>= value`. Equal values therefore land
  /// after existing equal entries, making the insert stable for
  /// duplicates.
  ///
  /// Fails only if node allocation fails, in which case the list is
  /// unchanged.
  pub fn insert(&mut self, value: T) -> Result<(), AllocError> {
    let mut node = alloc::try_box(Node::new(value))?;
    let mut cursor = &mut self.head;
    while cursor.as_ref().map_or(false, |current| current.data < node.data) {
      cursor = &mut cursor.as_mut().unwrap().next; // unwrap: loop condition saw Some
    }
    node.next = cursor.take();
    *cursor = Some(node);
    Ok(())
  }

  /// Removes the first value equal to `target` and returns it,
  /// splicing its node out of the chain. Returns `None` (list
  /// unchanged) if no such value exists.
  ///
  /// The scan walks past every node whose data is `< target` and
  /// then requires equality, so only `T`'s total order is consulted.
  pub fn remove(&mut self, target: &T) -> Option<T> {
    let mut cursor = &mut self.head;
    while cursor.as_ref().map_or(false, |current| current.data < *target) {
      cursor = &mut cursor.as_mut().unwrap().next; // unwrap: loop condition saw Some
    }
    if cursor.as_ref().is_some_and(|current| current.data == *target) {
      let node = cursor.take().unwrap(); // unwrap: just checked is_some
      *cursor = node.next;
      Some(node.data)
    } else {
      None
    }
  }

  /// Finds the first value equal to `target` without modifying the
  /// list.
  pub fn retrieve(&self, target: &T) -> Option<&T> {
    let mut current = self.head.as_deref();
    while let Some(node) = current {
      if node.data < *target {
        current = node.next.as_deref();
      } else {
        break;
      }
    }
    current.map(Node::data).filter(|data| *data == target)
  }
}

impl<T> Default for OrderedList<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// Teardown is iterative, so dropping a long chain cannot overflow
/// the call stack the way the default recursive drop of nested boxes
/// would.
impl<T> Drop for OrderedList<T> {
  fn drop(&mut self) {
    let mut current = self.head.take();
    while let Some(mut node) = current {
      current = node.next.take();
    }
  }
}

impl<T: fmt::Display> fmt::Display for OrderedList<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.iter().join(" -> "))
  }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
  next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.next?;
    self.next = node.next();
    Some(node.data())
  }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::alloc;

  fn list_of(values: Vec<i32>) -> OrderedList<i32> {
    let mut list = OrderedList::new();
    for value in values {
      list.insert(value).unwrap();
    }
    list
  }

  fn contents(list: &OrderedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
  }

  #[test]
  fn test_new_empty() {
    let list = OrderedList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.rear(), None);
  }

  #[test]
  fn test_insert_keeps_sorted_order() {
    let list = list_of(vec![30, 10, 20, 50, 40]);
    assert_eq!(contents(&list), vec![10, 20, 30, 40, 50]);
    assert_eq!(list.len(), 5);
    assert_eq!(list.front(), Some(&10));
    assert_eq!(list.rear(), Some(&50));
  }

  #[test]
  fn test_insert_is_non_decreasing_for_any_order() {
    let list = list_of(vec![5, 1, 4, 1, 5, 9, 2, 6, 5, 3]);
    let values = contents(&list);
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(values.len(), 10);
  }

  #[test]
  fn test_duplicates_allowed() {
    let list = list_of(vec![2, 2, 1, 2]);
    assert_eq!(contents(&list), vec![1, 2, 2, 2]);
  }

  #[test]
  fn test_remove_middle() {
    let mut list = list_of(vec![10, 20, 30]);
    assert_eq!(list.remove(&20), Some(20));
    assert_eq!(contents(&list), vec![10, 30]);
  }

  #[test]
  fn test_remove_front_and_rear() {
    let mut list = list_of(vec![10, 20, 30]);
    assert_eq!(list.remove(&10), Some(10));
    assert_eq!(list.remove(&30), Some(30));
    assert_eq!(contents(&list), vec![20]);
  }

  #[test]
  fn test_remove_missing() {
    let mut list = list_of(vec![10, 20, 30]);
    assert_eq!(list.remove(&25), None);
    assert_eq!(list.remove(&99), None);
    assert_eq!(contents(&list), vec![10, 20, 30]);
  }

  #[test]
  fn test_remove_duplicate_takes_one() {
    let mut list = list_of(vec![7, 7, 7]);
    assert_eq!(list.remove(&7), Some(7));
    assert_eq!(contents(&list), vec![7, 7]);
  }

  #[test]
  fn test_remove_from_empty() {
    let mut list = OrderedList::<i32>::new();
    assert_eq!(list.remove(&1), None);
    assert_eq!(list.len(), 0);
  }

  #[test]
  fn test_retrieve() {
    let list = list_of(vec![10, 20, 30]);
    assert_eq!(list.retrieve(&20), Some(&20));
    assert_eq!(list.retrieve(&25), None);
    assert_eq!(list.retrieve(&5), None);
    assert_eq!(list.retrieve(&99), None);
    assert_eq!(contents(&list), vec![10, 20, 30]);
  }

  #[test]
  fn test_failed_insert_leaves_list_unchanged() {
    let mut list = list_of(vec![10, 30]);
    alloc::exhaust();
    assert_eq!(list.insert(20), Err(AllocError));
    assert!(list.is_full());
    alloc::reset();
    assert_eq!(contents(&list), vec![10, 30]);
    assert!(!list.is_full());
    list.insert(20).unwrap();
    assert_eq!(contents(&list), vec![10, 20, 30]);
  }

  #[test]
  fn test_display() {
    let list = list_of(vec![3, 1, 2]);
    assert_eq!(list.to_string(), "1 -> 2 -> 3");
    let empty = OrderedList::<i32>::new();
    assert_eq!(empty.to_string(), "");
  }

  #[test]
  fn test_long_chain_teardown() {
    let mut list = OrderedList::new();
    for i in 0..100_000 {
      list.insert(i).unwrap();
    }
    drop(list); // must not overflow the call stack
  }
}
