
//! Singly-linked cell used by [`OrderedList`](crate::ordered::OrderedList).

/// An owning link to the next node in a chain, or `None` at the end.
pub type Link<T> = Option<Box<Node<T>>>;

/// One cell of a singly-linked chain. Each node exclusively owns the
/// remainder of the chain it points to, so the whole structure is a
/// simple path: never shared, never cyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
  pub(crate) data: T,
  pub(crate) next: Link<T>,
}

impl<T> Node<T> {
  pub(crate) fn new(data: T) -> Self {
    Self { data, next: None }
  }

  pub fn data(&self) -> &T {
    &self.data
  }

  pub fn next(&self) -> Option<&Node<T>> {
    self.next.as_deref()
  }
}
