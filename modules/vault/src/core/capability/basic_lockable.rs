/// Primitive offering blocking exclusive lock and unlock.
///
/// # Safety
///
/// Implementations must provide mutual exclusion: after [`lock`](BasicLockable::lock) returns no
/// other caller may hold the lock until [`unlock`](BasicLockable::unlock) is called.
pub unsafe trait BasicLockable {
  /// Either [`GuardSend`](super::GuardSend) or [`GuardNoSend`](super::GuardNoSend).
  type GuardMarker;

  /// Blocks until the exclusive lock is acquired.
  fn lock(&self);

  /// Releases the exclusive lock.
  ///
  /// # Safety
  ///
  /// The exclusive lock must be held by the caller's context.
  unsafe fn unlock(&self);
}
