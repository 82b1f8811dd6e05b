
//! FIFO queue over a singly-linked chain of arena slots.

use crate::alloc::{self, AllocError};

/// One arena slot: either a live chain cell carrying a value and the
/// index of its successor, or a member of the free list.
#[derive(Debug, Clone)]
enum Slot<T> {
  Occupied {
    data: T,
    next: Option<usize>,
  },
  Free {
    next_free: Option<usize>,
  },
}

/// A FIFO queue with head and tail tracking. The chain cells live in
/// an arena and link to each other by index, with an explicit free
/// list of retired slots, so the whole structure is owned by one
/// vector and needs no pointer aliasing at all.
///
/// Invariant: when `len == 0` both `head` and `back` are none. When
/// `len >= 1`, `back` is reachable from `head` by following `next`
/// indices, and that slot's `next` is none. `dequeue` maintains this
/// explicitly: the moment the last value leaves, both indices are
/// cleared together.
#[derive(Debug, Clone)]
pub struct Queue<T> {
  slots: Vec<Slot<T>>,
  free: Option<usize>,
  head: Option<usize>,
  back: Option<usize>,
  len: usize,
}

impl<T> Queue<T> {
  pub fn new() -> Self {
    Self {
      slots: Vec::new(),
      free: None,
      head: None,
      back: None,
      len: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Trial-allocation probe, as for
  /// [`OrderedList::is_full`](crate::ordered::OrderedList::is_full):
  /// the queue is "full" when one more chain cell could not be
  /// obtained. Retired slots on the free list are reusable without
  /// allocating, so the probe only matters once the free list is
  /// empty.
  pub fn is_full(&self) -> bool {
    self.free.is_none() && alloc::probe::<Slot<T>>()
  }

  /// Takes a slot from the free list, or allocates a fresh one at
  /// the end of the arena. On allocation failure nothing has
  /// changed.
  fn acquire_slot(&mut self, data: T) -> Result<usize, AllocError> {
    match self.free {
      Some(index) => {
        let next_free = match self.slots[index] {
          Slot::Free { next_free } => next_free,
          Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
        };
        self.free = next_free;
        self.slots[index] = Slot::Occupied { data, next: None };
        Ok(index)
      }
      None => {
        alloc::charge()?;
        self.slots.try_reserve(1).map_err(|_| AllocError)?;
        self.slots.push(Slot::Occupied { data, next: None });
        Ok(self.slots.len() - 1)
      }
    }
  }

  /// Appends a value at the back of the queue in O(1). Fails only if
  /// a chain cell cannot be obtained, in which case the queue is
  /// unchanged.
  pub fn enqueue(&mut self, value: T) -> Result<(), AllocError> {
    let index = self.acquire_slot(value)?;
    match self.back {
      Some(back) => match &mut self.slots[back] {
        Slot::Occupied { next, .. } => *next = Some(index),
        Slot::Free { .. } => unreachable!("back points at a free slot"),
      },
      None => self.head = Some(index),
    }
    self.back = Some(index);
    self.len += 1;
    Ok(())
  }

  /// Removes and returns the front value, retiring its slot to the
  /// free list, or `None` if the queue is empty.
  pub fn dequeue(&mut self) -> Option<T> {
    let index = self.head?;
    let slot = std::mem::replace(&mut self.slots[index], Slot::Free { next_free: self.free });
    let Slot::Occupied { data, next } = slot else {
      unreachable!("head points at a free slot")
    };
    self.free = Some(index);
    self.head = next;
    self.len -= 1;
    if self.head.is_none() {
      self.back = None;
    }
    Some(data)
  }

  pub fn front(&self) -> Option<&T> {
    self.head.map(|index| self.data_at(index))
  }

  pub fn rear(&self) -> Option<&T> {
    self.back.map(|index| self.data_at(index))
  }

  /// Iterates front to rear.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { queue: self, next: self.head }
  }

  fn data_at(&self, index: usize) -> &T {
    match &self.slots[index] {
      Slot::Occupied { data, .. } => data,
      Slot::Free { .. } => unreachable!("chain index points at a free slot"),
    }
  }
}

impl<T> Default for Queue<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
  queue: &'a Queue<T>,
  next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let index = self.next?;
    match &self.queue.slots[index] {
      Slot::Occupied { data, next } => {
        self.next = *next;
        Some(data)
      }
      Slot::Free { .. } => unreachable!("chain index points at a free slot"),
    }
  }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
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

  fn queue_of(values: Vec<i32>) -> Queue<i32> {
    let mut queue = Queue::new();
    for value in values {
      queue.enqueue(value).unwrap();
    }
    queue
  }

  #[test]
  fn test_new_empty() {
    let queue = Queue::<i32>::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.front(), None);
    assert_eq!(queue.rear(), None);
  }

  #[test]
  fn test_fifo_order() {
    let mut queue = queue_of(vec![1, 2, 3]);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
    queue.enqueue(4).unwrap();
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(4));
    assert_eq!(queue.dequeue(), None);
  }

  #[test]
  fn test_dequeue_empty() {
    let mut queue = Queue::<i32>::new();
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.len(), 0);
  }

  #[test]
  fn test_front_and_rear() {
    let mut queue = queue_of(vec![10, 20, 30]);
    assert_eq!(queue.front(), Some(&10));
    assert_eq!(queue.rear(), Some(&30));
    queue.dequeue();
    assert_eq!(queue.front(), Some(&20));
    assert_eq!(queue.rear(), Some(&30));
  }

  #[test]
  fn test_rear_stays_valid_down_to_one_element() {
    let mut queue = queue_of(vec![1, 2]);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.front(), Some(&2));
    assert_eq!(queue.rear(), Some(&2));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.rear(), None);
  }

  #[test]
  fn test_head_and_back_reset_together() {
    let mut queue = queue_of(vec![7]);
    assert_eq!(queue.dequeue(), Some(7));
    assert!(queue.is_empty());
    assert_eq!(queue.front(), None);
    assert_eq!(queue.rear(), None);

    // Reusable after draining.
    queue.enqueue(8).unwrap();
    assert_eq!(queue.front(), Some(&8));
    assert_eq!(queue.rear(), Some(&8));
    assert_eq!(queue.dequeue(), Some(8));
    assert_eq!(queue.dequeue(), None);
  }

  #[test]
  fn test_len_tracks_operations() {
    let mut queue = Queue::new();
    assert_eq!(queue.len(), 0);
    queue.enqueue('a').unwrap();
    queue.enqueue('b').unwrap();
    assert_eq!(queue.len(), 2);
    queue.dequeue();
    assert_eq!(queue.len(), 1);
    queue.dequeue();
    assert_eq!(queue.len(), 0);
  }

  #[test]
  fn test_failed_enqueue_leaves_queue_unchanged() {
    let mut queue = queue_of(vec![1, 2]);
    alloc::exhaust();
    assert_eq!(queue.enqueue(3), Err(AllocError));
    assert!(queue.is_full());
    alloc::reset();
    assert!(!queue.is_full());
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    queue.enqueue(3).unwrap();
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
  }

  #[test]
  fn test_retired_slots_are_reused() {
    let mut queue = queue_of(vec![1, 2]);
    assert_eq!(queue.dequeue(), Some(1));

    // One slot sits on the free list, so one enqueue needs no
    // allocation even with the heap exhausted.
    alloc::exhaust();
    assert!(!queue.is_full());
    assert_eq!(queue.enqueue(3), Ok(()));
    assert!(queue.is_full());
    assert_eq!(queue.enqueue(4), Err(AllocError));
    alloc::reset();

    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(queue.rear(), Some(&3));
  }

  #[test]
  fn test_fifo_order_across_slot_reuse() {
    let mut queue = Queue::new();
    for i in 0..4 {
      queue.enqueue(i).unwrap();
    }
    for i in 0..4 {
      assert_eq!(queue.dequeue(), Some(i));
      queue.enqueue(i + 10).unwrap();
    }
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![10, 11, 12, 13]);
  }

  #[test]
  fn test_iter() {
    let queue = queue_of(vec![5, 6, 7]);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7]);
  }

  #[test]
  fn test_long_chain_teardown() {
    let mut queue = Queue::new();
    for i in 0..100_000 {
      queue.enqueue(i).unwrap();
    }
    drop(queue);
  }
}
