use super::Lockable;
use crate::core::time::TimeDomain;

/// [`Lockable`] primitive with bounded exclusive acquisition.
pub trait TimedLockable: Lockable {
  /// The single time domain used by every timed operation of this primitive.
  type Domain: TimeDomain;

  /// Attempts to acquire the exclusive lock, giving up after `timeout`.
  fn try_lock_for(&self, timeout: DomainDuration<Self>) -> bool;

  /// Attempts to acquire the exclusive lock, giving up at `deadline`.
  fn try_lock_until(&self, deadline: DomainInstant<Self>) -> bool;
}

/// Duration type of the time domain of `M`.
pub type DomainDuration<M> = <<M as TimedLockable>::Domain as TimeDomain>::Duration;

/// Time-point type of the time domain of `M`.
pub type DomainInstant<M> = <<M as TimedLockable>::Domain as TimeDomain>::Instant;
