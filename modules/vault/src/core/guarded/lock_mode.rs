use super::LockState;
use crate::core::capability::{BasicLockable, SharedLockable, UpgradeLockable};

/// How a held lock was taken: its state plus the operations releasing and retaking it.
///
/// Recording the operations at acquisition time lets a handle release and reacquire any mode
/// without requiring the richest capability of its primitive.
pub(crate) struct LockMode<M> {
  state:   LockState,
  acquire: fn(&M),
  release: unsafe fn(&M),
}

impl<M> Clone for LockMode<M> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<M> Copy for LockMode<M> {}

impl<M> LockMode<M> {
  pub(crate) const fn state(&self) -> LockState {
    self.state
  }

  pub(crate) fn acquire(&self, mutex: &M) {
    (self.acquire)(mutex);
  }

  /// # Safety
  ///
  /// The lock described by this mode must be held on `mutex`.
  pub(crate) unsafe fn release(&self, mutex: &M) {
    unsafe { (self.release)(mutex) };
  }
}

impl<M: BasicLockable> LockMode<M> {
  pub(crate) fn exclusive() -> Self {
    Self { state: LockState::Exclusive, acquire: M::lock, release: M::unlock }
  }
}

impl<M: SharedLockable> LockMode<M> {
  pub(crate) fn shared() -> Self {
    Self { state: LockState::Shared, acquire: M::lock_shared, release: M::unlock_shared }
  }
}

impl<M: UpgradeLockable> LockMode<M> {
  pub(crate) fn upgrade() -> Self {
    Self { state: LockState::Upgrade, acquire: M::lock_upgrade, release: M::unlock_upgrade }
  }
}
