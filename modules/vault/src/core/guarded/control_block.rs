use core::cell::UnsafeCell;

use super::{binding::Binding, lock_mode::LockMode};
use crate::core::capability::BasicLockable;

/// The unit a vault embeds: one primitive, one condition variable and the guarded value.
///
/// Never moved while a handle borrows it, so handles keep a plain reference.
pub(crate) struct ControlBlock<T, M, C> {
  pub(super) mutex:   M,
  pub(super) condvar: C,
  value:              UnsafeCell<T>,
}

unsafe impl<T: Send, M: Send, C: Send> Send for ControlBlock<T, M, C> {}
unsafe impl<T: Send + Sync, M: Sync, C: Sync> Sync for ControlBlock<T, M, C> {}

impl<T, M: Default, C: Default> ControlBlock<T, M, C> {
  pub(super) fn new(value: T) -> Self {
    Self { mutex: M::default(), condvar: C::default(), value: UnsafeCell::new(value) }
  }
}

impl<T, M, C> ControlBlock<T, M, C> {
  /// Pointer to the value. Dereferencing it requires holding a lock that grants the access.
  pub(super) const fn value_ptr(&self) -> *mut T {
    self.value.get()
  }

  pub(super) fn get_mut(&mut self) -> &mut T {
    self.value.get_mut()
  }

  pub(super) fn into_inner(self) -> T {
    self.value.into_inner()
  }

  /// Binds `mode`, which the caller has just acquired on this block's primitive.
  pub(super) const fn bind(&self, mode: LockMode<M>) -> Binding<'_, T, M, C> {
    Binding::new(self, mode)
  }
}

impl<T, M: BasicLockable, C> ControlBlock<T, M, C> {
  /// Blocks until the exclusive lock is held and returns the binding describing it.
  pub(super) fn lock(&self) -> Binding<'_, T, M, C> {
    let mode = LockMode::exclusive();
    mode.acquire(&self.mutex);
    self.bind(mode)
  }
}
