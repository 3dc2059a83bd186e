use super::Lockable;

/// [`Lockable`] primitive that also offers shared (reader) locking.
///
/// Readers may hold the shared lock concurrently with each other but never with a writer.
pub trait SharedLockable: Lockable {
  /// Blocks until a shared lock is acquired.
  fn lock_shared(&self);

  /// Attempts to acquire a shared lock without blocking.
  fn try_lock_shared(&self) -> bool;

  /// Releases a shared lock.
  ///
  /// # Safety
  ///
  /// A shared lock must be held by the caller's context.
  unsafe fn unlock_shared(&self);
}
