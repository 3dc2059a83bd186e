use core::fmt;

use super::{binding::Binding, LockState, Vault};

/// A released lock: the control block it was held on and the mode to retake.
///
/// Returned by [`LockHandle::unlock`](super::LockHandle::unlock) and consumed by
/// [`LockHandle::lock`](super::LockHandle::lock). Dropping the token holds nothing and releases
/// nothing.
#[must_use = "dropping the token forgets which vault the handle was locked on"]
pub struct UnlockedToken<'a, T, M, C> {
  binding: Binding<'a, T, M, C>,
}

impl<'a, T, M, C> UnlockedToken<'a, T, M, C> {
  pub(super) const fn new(binding: Binding<'a, T, M, C>) -> Self {
    Self { binding }
  }

  pub(super) fn into_binding(self) -> Binding<'a, T, M, C> {
    self.binding
  }

  /// Returns the state a handle enters when it relocks with this token.
  #[must_use]
  pub const fn state(&self) -> LockState {
    self.binding.state()
  }

  /// Returns `true` when the token was released from `vault`.
  #[must_use]
  pub fn is_for(&self, vault: &Vault<T, M, C>) -> bool {
    self.binding.is_on(vault.block())
  }
}

impl<T, M, C> fmt::Debug for UnlockedToken<'_, T, M, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UnlockedToken").field("state", &self.state()).finish_non_exhaustive()
  }
}
