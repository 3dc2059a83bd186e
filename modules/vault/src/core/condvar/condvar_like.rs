use super::WaitStatus;
use crate::core::{capability::BasicLockable, time::TimeDomain};

/// Condition variable usable with any primitive.
///
/// Waits release the caller's exclusive lock for their duration and reacquire it before
/// returning. Spurious wakeups are permitted; callers re-check their condition.
pub trait CondvarLike: Default {
  /// Blocks until notified.
  ///
  /// # Safety
  ///
  /// The caller must hold the exclusive lock of `mutex`. It is held again when this returns.
  unsafe fn wait<M: BasicLockable>(&self, mutex: &M);

  /// Blocks until notified or until `deadline` in the domain `D` passes.
  ///
  /// # Safety
  ///
  /// The caller must hold the exclusive lock of `mutex`. It is held again when this returns.
  unsafe fn wait_until<M: BasicLockable, D: TimeDomain>(&self, mutex: &M, deadline: &D::Instant) -> WaitStatus;

  /// Wakes at least one waiter, if any.
  fn notify_one(&self);

  /// Wakes every waiter.
  fn notify_all(&self);
}
