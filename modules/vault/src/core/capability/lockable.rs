use super::BasicLockable;

/// [`BasicLockable`] primitive that can also try to lock without blocking.
pub trait Lockable: BasicLockable {
  /// Attempts to acquire the exclusive lock, returning `true` on success.
  fn try_lock(&self) -> bool;
}
