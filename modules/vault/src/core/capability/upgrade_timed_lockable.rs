use super::{DomainDuration, DomainInstant, SharedTimedLockable, UpgradeLockable};

/// Upgradable primitive with bounded upgrade acquisition and bounded upgrade-to-exclusive.
pub trait UpgradeTimedLockable: UpgradeLockable + SharedTimedLockable {
  /// Attempts to acquire the upgrade lock, giving up after `timeout`.
  fn try_lock_upgrade_for(&self, timeout: DomainDuration<Self>) -> bool;

  /// Attempts to acquire the upgrade lock, giving up at `deadline`.
  fn try_lock_upgrade_until(&self, deadline: DomainInstant<Self>) -> bool;

  /// Attempts to turn the held upgrade lock into the exclusive lock, giving up after `timeout`.
  ///
  /// The upgrade lock is still held when this returns `false`.
  ///
  /// # Safety
  ///
  /// The upgrade lock must be held by the caller's context.
  unsafe fn try_unlock_upgrade_and_lock_for(&self, timeout: DomainDuration<Self>) -> bool;

  /// Attempts to turn the held upgrade lock into the exclusive lock, giving up at `deadline`.
  ///
  /// The upgrade lock is still held when this returns `false`.
  ///
  /// # Safety
  ///
  /// The upgrade lock must be held by the caller's context.
  unsafe fn try_unlock_upgrade_and_lock_until(&self, deadline: DomainInstant<Self>) -> bool;
}
