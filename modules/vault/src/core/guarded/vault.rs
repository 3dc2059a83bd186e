use core::{fmt, mem};

use super::{control_block::ControlBlock, lock_mode::LockMode, LockHandle};
use crate::core::{
  capability::{
    Capabilities, Classified, DomainDuration, DomainInstant, Mutex, SharedLockable, SharedTimedLockable, TimedLockable,
    UpgradeLockable, UpgradeTimedLockable,
  },
  condvar::CondvarLike,
};

#[cfg(test)]
mod tests;

/// Owner of a guarded value.
///
/// The vault embeds the primitive `M`, the condition variable `C` and the value. Access goes
/// through [`LockHandle`]s or through the convenience accessors, each of which locks for exactly
/// one operation. Two accessor calls are two critical sections, not one.
///
/// Shared and upgrade acquisitions exist only when `M` implements the matching capability trait,
/// and bounded acquisitions take durations and deadlines of `M`'s own time domain.
///
/// ```
/// use synchro_vault_rs::core::{
///   condvar::SpinCondvar,
///   guarded::{LockState, Vault},
///   primitives::SpinRawMutex,
/// };
///
/// let vault: Vault<Vec<u32>, SpinRawMutex, SpinCondvar> = Vault::new(vec![1, 2]);
/// {
///   let mut handle = vault.lock();
///   assert_eq!(handle.state(), LockState::Exclusive);
///   handle.push(3);
/// }
/// assert_eq!(vault.copy_value(), vec![1, 2, 3]);
/// assert_eq!(vault.release_value(), vec![1, 2, 3]);
/// assert!(vault.copy_value().is_empty());
/// ```
pub struct Vault<T, M, C> {
  block: ControlBlock<T, M, C>,
}

impl<T, M, C> Vault<T, M, C> {
  pub(super) const fn block(&self) -> &ControlBlock<T, M, C> {
    &self.block
  }

  /// Returns the value without locking; the exclusive borrow rules out other users.
  pub fn get_mut(&mut self) -> &mut T {
    self.block.get_mut()
  }

  /// Consumes the vault and returns the value.
  pub fn into_inner(self) -> T {
    self.block.into_inner()
  }
}

impl<T, M: Mutex, C: CondvarLike> Vault<T, M, C> {
  /// Creates a vault holding `value`.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self { block: ControlBlock::new(value) }
  }

  /// Creates a vault holding the value produced by `init`.
  #[must_use]
  pub fn new_with(init: impl FnOnce() -> T) -> Self {
    Self::new(init())
  }

  /// Blocks until the exclusive lock is held and returns a handle owning it.
  pub fn lock(&self) -> LockHandle<'_, T, M, C> {
    LockHandle::bound(self.block.lock())
  }

  /// Takes the exclusive lock if it is free.
  #[must_use]
  pub fn try_lock(&self) -> Option<LockHandle<'_, T, M, C>> {
    self.block.mutex.try_lock().then(|| self.exclusive_handle())
  }

  /// Wakes one thread waiting on the vault's condition variable.
  ///
  /// Waiters re-check their condition under the lock, so the caller normally updates the value
  /// under the lock before notifying.
  pub fn notify_one(&self) {
    self.block.condvar.notify_one();
  }

  /// Wakes every thread waiting on the vault's condition variable.
  pub fn notify_all(&self) {
    self.block.condvar.notify_all();
  }

  /// Returns a copy of the value taken under the lock.
  #[must_use]
  pub fn copy_value(&self) -> T
  where
    T: Clone, {
    self.lock().value().clone()
  }

  /// Replaces the value with its default under the lock and returns the previous value.
  #[must_use]
  pub fn release_value(&self) -> T
  where
    T: Default, {
    mem::take(self.lock().value_mut())
  }

  /// Exchanges the value with `value` under the lock and returns the previous value.
  #[must_use]
  pub fn swap_value(&self, value: T) -> T {
    mem::replace(self.lock().value_mut(), value)
  }

  /// Assigns `value` under the lock, dropping the previous value while still locked.
  pub fn assign_value(&self, value: T) {
    *self.lock().value_mut() = value;
  }

  /// Runs `f` on the value under the exclusive lock.
  pub fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
    f(self.lock().value())
  }

  /// Runs `f` on the value under the exclusive lock, allowing mutation.
  pub fn with_value_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    f(self.lock().value_mut())
  }

  fn exclusive_handle(&self) -> LockHandle<'_, T, M, C> {
    LockHandle::bound(self.block.bind(LockMode::exclusive()))
  }
}

impl<T, M: Mutex + TimedLockable, C: CondvarLike> Vault<T, M, C> {
  /// Takes the exclusive lock, giving up after `timeout`.
  #[must_use]
  pub fn try_lock_for(&self, timeout: DomainDuration<M>) -> Option<LockHandle<'_, T, M, C>> {
    if self.block.mutex.try_lock_for(timeout) {
      return Some(self.exclusive_handle());
    }
    tracing::trace!(target: "synchro::vault", ?timeout, "bounded exclusive acquisition elapsed");
    None
  }

  /// Takes the exclusive lock, giving up at `deadline`.
  #[must_use]
  pub fn try_lock_until(&self, deadline: DomainInstant<M>) -> Option<LockHandle<'_, T, M, C>> {
    if self.block.mutex.try_lock_until(deadline) {
      return Some(self.exclusive_handle());
    }
    tracing::trace!(target: "synchro::vault", ?deadline, "bounded exclusive acquisition elapsed");
    None
  }
}

impl<T, M: Mutex + SharedLockable, C: CondvarLike> Vault<T, M, C> {
  /// Blocks until a shared lock is held and returns a handle owning it.
  pub fn lock_shared(&self) -> LockHandle<'_, T, M, C> {
    let mode = LockMode::shared();
    mode.acquire(&self.block.mutex);
    LockHandle::bound(self.block.bind(mode))
  }

  /// Takes a shared lock if no writer holds the primitive.
  #[must_use]
  pub fn try_lock_shared(&self) -> Option<LockHandle<'_, T, M, C>> {
    self.block.mutex.try_lock_shared().then(|| self.shared_handle())
  }

  fn shared_handle(&self) -> LockHandle<'_, T, M, C> {
    LockHandle::bound(self.block.bind(LockMode::shared()))
  }
}

impl<T, M: Mutex + SharedTimedLockable, C: CondvarLike> Vault<T, M, C> {
  /// Takes a shared lock, giving up after `timeout`.
  #[must_use]
  pub fn try_lock_shared_for(&self, timeout: DomainDuration<M>) -> Option<LockHandle<'_, T, M, C>> {
    if self.block.mutex.try_lock_shared_for(timeout) {
      return Some(self.shared_handle());
    }
    tracing::trace!(target: "synchro::vault", ?timeout, "bounded shared acquisition elapsed");
    None
  }

  /// Takes a shared lock, giving up at `deadline`.
  #[must_use]
  pub fn try_lock_shared_until(&self, deadline: DomainInstant<M>) -> Option<LockHandle<'_, T, M, C>> {
    if self.block.mutex.try_lock_shared_until(deadline) {
      return Some(self.shared_handle());
    }
    tracing::trace!(target: "synchro::vault", ?deadline, "bounded shared acquisition elapsed");
    None
  }
}

impl<T, M: Mutex + UpgradeLockable, C: CondvarLike> Vault<T, M, C> {
  /// Blocks until the upgrade lock is held and returns a handle owning it.
  pub fn lock_upgrade(&self) -> LockHandle<'_, T, M, C> {
    let mode = LockMode::upgrade();
    mode.acquire(&self.block.mutex);
    LockHandle::bound(self.block.bind(mode))
  }

  /// Takes the upgrade lock if it is free.
  #[must_use]
  pub fn try_lock_upgrade(&self) -> Option<LockHandle<'_, T, M, C>> {
    self.block.mutex.try_lock_upgrade().then(|| self.upgrade_handle())
  }

  fn upgrade_handle(&self) -> LockHandle<'_, T, M, C> {
    LockHandle::bound(self.block.bind(LockMode::upgrade()))
  }
}

impl<T, M: Mutex + UpgradeTimedLockable, C: CondvarLike> Vault<T, M, C> {
  /// Takes the upgrade lock, giving up after `timeout`.
  #[must_use]
  pub fn try_lock_upgrade_for(&self, timeout: DomainDuration<M>) -> Option<LockHandle<'_, T, M, C>> {
    if self.block.mutex.try_lock_upgrade_for(timeout) {
      return Some(self.upgrade_handle());
    }
    tracing::trace!(target: "synchro::vault", ?timeout, "bounded upgrade acquisition elapsed");
    None
  }

  /// Takes the upgrade lock, giving up at `deadline`.
  #[must_use]
  pub fn try_lock_upgrade_until(&self, deadline: DomainInstant<M>) -> Option<LockHandle<'_, T, M, C>> {
    if self.block.mutex.try_lock_upgrade_until(deadline) {
      return Some(self.upgrade_handle());
    }
    tracing::trace!(target: "synchro::vault", ?deadline, "bounded upgrade acquisition elapsed");
    None
  }
}

impl<T, M: Classified, C> Vault<T, M, C> {
  /// Returns the classification of the vault's primitive.
  #[must_use]
  pub const fn capabilities() -> Capabilities {
    M::CAPABILITIES
  }
}

impl<T: Default, M: Mutex, C: CondvarLike> Default for Vault<T, M, C> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

/// Copies the value under the lock into a vault with a fresh primitive and condition variable.
impl<T: Clone, M: Mutex, C: CondvarLike> Clone for Vault<T, M, C> {
  fn clone(&self) -> Self {
    Self::new(self.copy_value())
  }
}

impl<T, M: Mutex, C: CondvarLike> From<T> for Vault<T, M, C> {
  fn from(value: T) -> Self {
    Self::new(value)
  }
}

impl<T: fmt::Debug, M: Mutex, C: CondvarLike> fmt::Debug for Vault<T, M, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct("Vault");
    match self.try_lock() {
      | Some(handle) => debug.field("value", handle.value()),
      | None => debug.field("value", &format_args!("<locked>")),
    };
    debug.finish()
  }
}
