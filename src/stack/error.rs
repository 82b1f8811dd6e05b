
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StackError {
  #[error("Not enough stack elements, expected at least {expected} but found {actual}.")]
  NotEnoughElements {
    expected: usize,
    actual: usize,
  },
}
