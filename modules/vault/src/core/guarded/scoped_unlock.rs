use core::fmt;

use super::{binding::Binding, LockHandle, LockState};
use crate::core::{capability::BasicLockable, condvar::CondvarLike};

/// Scope during which a [`LockHandle`] has given up its lock.
///
/// Created by [`LockHandle::scoped_unlock`]. Other threads may lock the vault while the guard
/// lives; dropping it blocks until the handle's previous lock is held again.
#[must_use = "dropping the guard relocks the handle immediately"]
pub struct ScopedUnlock<'h, 'a, T, M: BasicLockable, C: CondvarLike> {
  handle:  &'h mut LockHandle<'a, T, M, C>,
  binding: Binding<'a, T, M, C>,
}

impl<'h, 'a, T, M: BasicLockable, C: CondvarLike> ScopedUnlock<'h, 'a, T, M, C> {
  pub(super) fn new(handle: &'h mut LockHandle<'a, T, M, C>) -> Self {
    let binding = handle.take_binding("unlock for a scope");
    unsafe { binding.release() };
    Self { handle, binding }
  }

  /// Returns the suspended handle, which reports [`LockState::None`].
  #[must_use]
  pub fn handle(&self) -> &LockHandle<'a, T, M, C> {
    self.handle
  }

  /// Returns the state the handle is restored to on drop.
  #[must_use]
  pub const fn restores(&self) -> LockState {
    self.binding.state()
  }
}

impl<T, M: BasicLockable, C: CondvarLike> Drop for ScopedUnlock<'_, '_, T, M, C> {
  fn drop(&mut self) {
    self.binding.reacquire();
    self.handle.restore_binding(self.binding);
  }
}

impl<T, M: BasicLockable, C: CondvarLike> fmt::Debug for ScopedUnlock<'_, '_, T, M, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ScopedUnlock").field("restores", &self.restores()).finish_non_exhaustive()
  }
}
