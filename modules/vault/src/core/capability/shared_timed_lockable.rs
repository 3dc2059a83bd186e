use super::{DomainDuration, DomainInstant, SharedLockable, TimedLockable};

/// Shared primitive with bounded shared acquisition in the same domain as its exclusive waits.
pub trait SharedTimedLockable: SharedLockable + TimedLockable {
  /// Attempts to acquire a shared lock, giving up after `timeout`.
  fn try_lock_shared_for(&self, timeout: DomainDuration<Self>) -> bool;

  /// Attempts to acquire a shared lock, giving up at `deadline`.
  fn try_lock_shared_until(&self, deadline: DomainInstant<Self>) -> bool;
}
