/// Lock a [`LockHandle`](super::LockHandle) currently holds over its control block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LockState {
  /// No lock and no control block.
  #[default]
  None,
  /// A shared (reader) lock.
  Shared,
  /// The upgrade lock.
  Upgrade,
  /// The exclusive (writer) lock.
  Exclusive,
}

impl LockState {
  /// Returns `true` for every state except [`LockState::None`].
  #[must_use]
  pub const fn is_locked(&self) -> bool {
    !matches!(self, LockState::None)
  }
}
