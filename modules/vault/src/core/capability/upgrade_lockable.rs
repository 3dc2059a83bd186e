use super::SharedLockable;

/// Shared primitive with an upgradable state.
///
/// At most one context holds the upgrade lock. It coexists with shared holders and can be turned
/// into the exclusive lock without letting another writer in between.
pub trait UpgradeLockable: SharedLockable {
  /// Blocks until the upgrade lock is acquired.
  fn lock_upgrade(&self);

  /// Attempts to acquire the upgrade lock without blocking.
  fn try_lock_upgrade(&self) -> bool;

  /// Releases the upgrade lock.
  ///
  /// # Safety
  ///
  /// The upgrade lock must be held by the caller's context.
  unsafe fn unlock_upgrade(&self);

  /// Atomically turns the held exclusive lock into a shared lock.
  ///
  /// # Safety
  ///
  /// The exclusive lock must be held by the caller's context.
  unsafe fn unlock_and_lock_shared(&self);

  /// Atomically turns the held exclusive lock into the upgrade lock.
  ///
  /// # Safety
  ///
  /// The exclusive lock must be held by the caller's context.
  unsafe fn unlock_and_lock_upgrade(&self);

  /// Blocks until the held upgrade lock becomes the exclusive lock.
  ///
  /// # Safety
  ///
  /// The upgrade lock must be held by the caller's context.
  unsafe fn unlock_upgrade_and_lock(&self);

  /// Atomically turns the held upgrade lock into a shared lock.
  ///
  /// # Safety
  ///
  /// The upgrade lock must be held by the caller's context.
  unsafe fn unlock_upgrade_and_lock_shared(&self);
}
