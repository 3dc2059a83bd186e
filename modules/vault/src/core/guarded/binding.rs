use core::ptr;

use super::{control_block::ControlBlock, lock_mode::LockMode, LockState};

/// A control block paired with the mode of a lock taken on it.
///
/// A handle holds a binding exactly while it holds a lock, so "no lock" and "no control block"
/// are the same condition.
pub(crate) struct Binding<'a, T, M, C> {
  block: &'a ControlBlock<T, M, C>,
  mode:  LockMode<M>,
}

impl<T, M, C> Clone for Binding<'_, T, M, C> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T, M, C> Copy for Binding<'_, T, M, C> {}

impl<'a, T, M, C> Binding<'a, T, M, C> {
  pub(super) const fn new(block: &'a ControlBlock<T, M, C>, mode: LockMode<M>) -> Self {
    Self { block, mode }
  }

  pub(super) const fn block(&self) -> &'a ControlBlock<T, M, C> {
    self.block
  }

  pub(super) const fn state(&self) -> LockState {
    self.mode.state()
  }

  pub(super) fn is_on(&self, block: &ControlBlock<T, M, C>) -> bool {
    ptr::eq(self.block, block)
  }

  /// Same block, new mode; used after an in-place transition of the primitive.
  pub(super) fn with_mode(self, mode: LockMode<M>) -> Self {
    Self { block: self.block, mode }
  }

  /// # Safety
  ///
  /// The lock described by this binding must be held.
  pub(super) unsafe fn release(&self) {
    unsafe { self.mode.release(&self.block.mutex) };
  }

  pub(super) fn reacquire(&self) {
    self.mode.acquire(&self.block.mutex);
  }
}
