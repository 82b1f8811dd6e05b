
//! Fallible-allocation seam shared by all of the containers.
//!
//! Every allocation a container performs goes through this module, so
//! that allocation exhaustion can be simulated deterministically in
//! tests. The simulator is a thread-local budget of remaining
//! successful allocations: `None` means unlimited (the production
//! state), `Some(n)` means `n` more allocations succeed and then all
//! further ones fail until [`reset`] is called.

use thiserror::Error;

use std::cell::Cell;

/// Error indicating that an allocation could not be satisfied. The
/// operation that reported this error has left its container
/// completely unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("allocation failed")]
pub struct AllocError;

thread_local! {
  static BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Permits `n` more successful allocations on this thread, after
/// which every allocation fails until [`reset`].
pub fn fail_after(n: usize) {
  BUDGET.with(|budget| budget.set(Some(n)));
}

/// Makes every subsequent allocation on this thread fail, as if the
/// heap were exhausted.
pub fn exhaust() {
  fail_after(0);
}

/// Restores the unlimited (production) allocation budget.
pub fn reset() {
  BUDGET.with(|budget| budget.set(None));
}

/// Consumes one unit of the allocation budget, or reports
/// [`AllocError`] if the budget is spent. Callers must charge before
/// performing the real allocation.
pub(crate) fn charge() -> Result<(), AllocError> {
  BUDGET.with(|budget| {
    match budget.get() {
      None => Ok(()),
      Some(0) => Err(AllocError),
      Some(n) => {
        budget.set(Some(n - 1));
        Ok(())
      }
    }
  })
}

/// Moves `value` to the heap, charging the allocation budget first.
/// On failure, `value` is dropped and the caller's state is
/// unchanged.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, AllocError> {
  charge()?;
  Ok(Box::new(value))
}

/// Trial-allocation probe: speculatively reserves room for a single
/// `T` and immediately releases it. Returns `true` when storage is
/// exhausted.
///
/// This is how the linked containers define "full": not a capacity
/// bound, but whether one more node could be allocated right now.
pub fn probe<T>() -> bool {
  if BUDGET.with(|budget| budget.get()) == Some(0) {
    return true;
  }
  let mut trial: Vec<T> = Vec::new();
  trial.try_reserve_exact(1).is_err()
}
