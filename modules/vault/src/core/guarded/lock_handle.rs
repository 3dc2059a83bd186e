use core::{
  fmt,
  marker::PhantomData,
  mem,
  ops::{Deref, DerefMut},
};

use super::{binding::Binding, lock_mode::LockMode, LockState, Notification, ScopedUnlock, UnlockedToken, Vault};
use crate::core::{
  capability::{BasicLockable, DomainDuration, DomainInstant, TimedLockable, UpgradeLockable, UpgradeTimedLockable},
  condvar::{CondvarLike, WaitStatus},
  time::TimeDomain,
};

#[cfg(test)]
mod tests;

/// Move-only token for a lock held on a [`Vault`].
///
/// A handle returned by the vault is in the state it was acquired in. All access to the value
/// goes through the handle. Dropping the handle releases its lock and then sends the configured
/// [`Notification`].
///
/// A default handle holds nothing. `core::mem::take(&mut handle)` moves the lock out and leaves
/// the source in [`LockState::None`].
///
/// Calling an operation from a state that does not allow it is a programming error and panics.
#[must_use = "dropping the handle releases the lock immediately"]
pub struct LockHandle<'a, T, M: BasicLockable, C: CondvarLike> {
  binding:      Option<Binding<'a, T, M, C>>,
  notification: Notification,
  _guard:       PhantomData<M::GuardMarker>,
}

unsafe impl<T: Sync, M: BasicLockable + Sync, C: CondvarLike + Sync> Sync for LockHandle<'_, T, M, C> {}

impl<'a, T, M: BasicLockable, C: CondvarLike> LockHandle<'a, T, M, C> {
  pub(super) const fn bound(binding: Binding<'a, T, M, C>) -> Self {
    Self { binding: Some(binding), notification: Notification::None, _guard: PhantomData }
  }

  /// Returns the lock currently held.
  #[must_use]
  pub const fn state(&self) -> LockState {
    match &self.binding {
      | Some(binding) => binding.state(),
      | None => LockState::None,
    }
  }

  /// Returns `true` while the handle holds any lock.
  #[must_use]
  pub const fn is_locked(&self) -> bool {
    self.binding.is_some()
  }

  /// Returns `true` when the handle holds a lock on `vault`.
  #[must_use]
  pub fn is_bound_to(&self, vault: &Vault<T, M, C>) -> bool {
    self.binding.as_ref().is_some_and(|binding| binding.is_on(vault.block()))
  }

  /// Returns the notification sent on drop.
  #[must_use]
  pub const fn notification(&self) -> Notification {
    self.notification
  }

  /// Sets the notification sent on drop, after the lock has been released.
  pub fn set_notification(&mut self, notification: Notification) {
    self.notification = notification;
  }

  /// Returns the guarded value.
  ///
  /// # Panics
  ///
  /// Panics when the handle holds no lock.
  #[must_use]
  pub fn value(&self) -> &T {
    let binding = self.expect_binding("read the value");
    // any held state grants shared access
    unsafe { &*binding.block().value_ptr() }
  }

  /// Returns the guarded value for mutation.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock. An upgrade holder coexists with readers
  /// and must [`upgrade`](Self::upgrade) first.
  #[must_use]
  pub fn value_mut(&mut self) -> &mut T {
    let binding = self.expect_exclusive("mutate the value");
    unsafe { &mut *binding.block().value_ptr() }
  }

  /// Releases the lock and returns the token needed to retake it.
  ///
  /// The handle is in [`LockState::None`] afterwards.
  ///
  /// # Panics
  ///
  /// Panics when the handle holds no lock.
  pub fn unlock(&mut self) -> UnlockedToken<'a, T, M, C> {
    let binding = self.take_binding("unlock");
    unsafe { binding.release() };
    UnlockedToken::new(binding)
  }

  /// Blocks until the lock described by `token` is retaken, then holds it.
  ///
  /// # Panics
  ///
  /// Panics when the handle already holds a lock.
  pub fn lock(&mut self, token: UnlockedToken<'a, T, M, C>) {
    assert!(self.binding.is_none(), "cannot lock a handle that already holds a {:?} lock", self.state());
    let binding = token.into_binding();
    binding.reacquire();
    self.binding = Some(binding);
  }

  /// Releases the lock until the returned guard is dropped.
  ///
  /// The handle reports [`LockState::None`] and cannot be used while the guard lives; dropping the
  /// guard blocks until the same lock is held again.
  ///
  /// # Panics
  ///
  /// Panics when the handle holds no lock.
  pub fn scoped_unlock(&mut self) -> ScopedUnlock<'_, 'a, T, M, C> {
    ScopedUnlock::new(self)
  }

  /// Waits for a notification on the vault's condition variable.
  ///
  /// The lock is released while waiting and held again on return. Spurious wakeups are possible.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock.
  pub fn wait(&mut self) {
    let binding = self.expect_exclusive("wait");
    let block = binding.block();
    unsafe { block.condvar.wait(&block.mutex) };
  }

  /// Waits until `ready` holds for the value, re-checking after every wakeup.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock.
  pub fn wait_pred(&mut self, mut ready: impl FnMut(&T) -> bool) {
    while !ready(self.value()) {
      self.wait();
    }
  }

  pub(super) fn take_binding(&mut self, operation: &str) -> Binding<'a, T, M, C> {
    match self.binding.take() {
      | Some(binding) => binding,
      | None => panic!("cannot {operation} through a handle that holds no lock"),
    }
  }

  pub(super) fn restore_binding(&mut self, binding: Binding<'a, T, M, C>) {
    debug_assert!(self.binding.is_none());
    self.binding = Some(binding);
  }

  fn expect_binding(&self, operation: &str) -> &Binding<'a, T, M, C> {
    match &self.binding {
      | Some(binding) => binding,
      | None => panic!("cannot {operation} through a handle that holds no lock"),
    }
  }

  fn expect_state(&self, expected: LockState, operation: &str) -> &Binding<'a, T, M, C> {
    let binding = self.expect_binding(operation);
    assert!(
      binding.state() == expected,
      "cannot {operation} while holding a {:?} lock; {expected:?} is required",
      binding.state()
    );
    binding
  }

  fn expect_exclusive(&self, operation: &str) -> &Binding<'a, T, M, C> {
    self.expect_state(LockState::Exclusive, operation)
  }
}

impl<T, M: TimedLockable, C: CondvarLike> LockHandle<'_, T, M, C> {
  /// Waits for a notification for at most `timeout`.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock.
  pub fn wait_for(&mut self, timeout: DomainDuration<M>) -> WaitStatus {
    self.wait_until(<M::Domain as TimeDomain>::deadline_after(timeout))
  }

  /// Waits for a notification until `deadline`.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock.
  pub fn wait_until(&mut self, deadline: DomainInstant<M>) -> WaitStatus {
    let binding = self.expect_exclusive("wait");
    let block = binding.block();
    let status = unsafe { block.condvar.wait_until::<M, M::Domain>(&block.mutex, &deadline) };
    if status.timed_out() {
      tracing::trace!(target: "synchro::handle", ?deadline, "bounded wait elapsed");
    }
    status
  }

  /// Waits until `ready` holds for the value or `timeout` elapses.
  ///
  /// Returns the final result of `ready`; `false` means the wait timed out.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock.
  pub fn wait_for_pred(&mut self, timeout: DomainDuration<M>, ready: impl FnMut(&T) -> bool) -> bool {
    self.wait_until_pred(<M::Domain as TimeDomain>::deadline_after(timeout), ready)
  }

  /// Waits until `ready` holds for the value or `deadline` passes.
  ///
  /// Returns the final result of `ready`; `false` means the wait timed out.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock.
  pub fn wait_until_pred(&mut self, deadline: DomainInstant<M>, mut ready: impl FnMut(&T) -> bool) -> bool {
    while !ready(self.value()) {
      if self.wait_until(deadline).timed_out() {
        return ready(self.value());
      }
    }
    true
  }
}

impl<T, M: UpgradeLockable, C: CondvarLike> LockHandle<'_, T, M, C> {
  /// Turns the exclusive lock into a shared lock without letting a writer in.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock.
  pub fn downgrade(&mut self) {
    let binding = *self.expect_exclusive("downgrade");
    unsafe { binding.block().mutex.unlock_and_lock_shared() };
    self.binding = Some(binding.with_mode(LockMode::shared()));
  }

  /// Turns the exclusive lock into the upgrade lock without letting a writer in.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the exclusive lock.
  pub fn downgrade_to_upgrade(&mut self) {
    let binding = *self.expect_exclusive("downgrade to upgrade");
    unsafe { binding.block().mutex.unlock_and_lock_upgrade() };
    self.binding = Some(binding.with_mode(LockMode::upgrade()));
  }

  /// Blocks until the upgrade lock becomes the exclusive lock.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the upgrade lock.
  pub fn upgrade(&mut self) {
    let binding = *self.expect_state(LockState::Upgrade, "upgrade");
    unsafe { binding.block().mutex.unlock_upgrade_and_lock() };
    self.binding = Some(binding.with_mode(LockMode::exclusive()));
  }

  /// Turns the upgrade lock into a shared lock.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the upgrade lock.
  pub fn downgrade_upgrade(&mut self) {
    let binding = *self.expect_state(LockState::Upgrade, "downgrade the upgrade lock");
    unsafe { binding.block().mutex.unlock_upgrade_and_lock_shared() };
    self.binding = Some(binding.with_mode(LockMode::shared()));
  }
}

impl<T, M: UpgradeTimedLockable, C: CondvarLike> LockHandle<'_, T, M, C> {
  /// Tries to turn the upgrade lock into the exclusive lock within `timeout`.
  ///
  /// On `false` the handle still holds the upgrade lock.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the upgrade lock.
  pub fn try_upgrade_for(&mut self, timeout: DomainDuration<M>) -> bool {
    self.try_upgrade_until(<M::Domain as TimeDomain>::deadline_after(timeout))
  }

  /// Tries to turn the upgrade lock into the exclusive lock before `deadline`.
  ///
  /// On `false` the handle still holds the upgrade lock.
  ///
  /// # Panics
  ///
  /// Panics unless the handle holds the upgrade lock.
  pub fn try_upgrade_until(&mut self, deadline: DomainInstant<M>) -> bool {
    let binding = *self.expect_state(LockState::Upgrade, "upgrade");
    if !unsafe { binding.block().mutex.try_unlock_upgrade_and_lock_until(deadline) } {
      tracing::trace!(target: "synchro::handle", ?deadline, "bounded upgrade elapsed");
      return false;
    }
    self.binding = Some(binding.with_mode(LockMode::exclusive()));
    true
  }
}

impl<T, M: BasicLockable, C: CondvarLike> Default for LockHandle<'_, T, M, C> {
  fn default() -> Self {
    Self { binding: None, notification: Notification::None, _guard: PhantomData }
  }
}

impl<T, M: BasicLockable, C: CondvarLike> Drop for LockHandle<'_, T, M, C> {
  fn drop(&mut self) {
    let notification = mem::take(&mut self.notification);
    let Some(binding) = self.binding.take() else {
      return;
    };
    unsafe { binding.release() };
    let condvar = &binding.block().condvar;
    match notification {
      | Notification::None => {},
      | Notification::One => condvar.notify_one(),
      | Notification::All => condvar.notify_all(),
    }
  }
}

impl<T, M: BasicLockable, C: CondvarLike> Deref for LockHandle<'_, T, M, C> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    self.value()
  }
}

impl<T, M: BasicLockable, C: CondvarLike> DerefMut for LockHandle<'_, T, M, C> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.value_mut()
  }
}

impl<T: fmt::Debug, M: BasicLockable, C: CondvarLike> fmt::Debug for LockHandle<'_, T, M, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct("LockHandle");
    debug.field("state", &self.state()).field("notification", &self.notification);
    if self.is_locked() {
      debug.field("value", self.value());
    }
    debug.finish()
  }
}
